use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use myqb::{Operator, Update, Where};

/// Build a WHERE clause with `n` simple predicates and one nested group.
fn build_where(n: usize) -> Where {
    let mut w = Where::new();
    for i in 0..n {
        w.is(&format!("col{i} = ?"), i as i64);
    }
    let group = w.where_or();
    group.is("status = ?", "active").is("status = ?", "pending");
    w.limit_offset(20, 40);
    w
}

fn bench_where_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("where/render");

    for n in [1, 5, 20, 100] {
        let w = build_where(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &w, |b, w| {
            b.iter(|| black_box(w.build().unwrap()));
        });
    }

    group.finish();
}

fn bench_update_build_and_render(c: &mut Criterion) {
    c.bench_function("update/build_and_render", |b| {
        b.iter(|| {
            let mut u = Update::new("users");
            u.set_value("name = ?", "alice").set("touched = NOW()");
            let w = u.where_clause();
            w.is("age > ?", 18);
            w.in_list("role", vec!["admin", "user"]);
            w.limit(10);
            black_box(u.build().unwrap())
        });
    });
}

criterion_group!(benches, bench_where_render, bench_update_build_and_render);
criterion_main!(benches);
