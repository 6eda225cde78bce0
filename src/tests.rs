//! Integration tests across the statement builders.

use crate::expr::placeholder_count;
use crate::{BuildError, Logic, Operator, Update, Value, Where};

#[test]
fn test_spec_end_to_end_where() {
    let mut w = Where::new();
    w.is("age > ?", 18);
    let group = w.where_and();
    group.is("name = ?", "bob").is("active = ?", true);
    w.order_by().desc("age");
    w.limit(5);

    let stmt = w.build().unwrap();
    assert_eq!(
        stmt.sql(),
        "WHERE age > ? AND (name = ? AND active = ?) ORDER BY age DESC LIMIT ?,?"
    );
    assert_eq!(
        stmt.args(),
        [
            Value::Int(18),
            Value::Text("bob".to_string()),
            Value::Bool(true),
            Value::UInt(0),
            Value::UInt(5),
        ]
    );
}

#[test]
fn test_placeholder_count_equals_args_for_whole_tree() {
    let mut w = Where::with_logic(Logic::Or);
    w.is("a = ?", 1).raw("b IS NULL").in_list("c", vec!["x", "y"]);
    let group = w.where_and();
    group
        .is_many("d BETWEEN ? AND ?", vec![Value::Int(1), Value::Int(9)])
        .is_opt("e = ?", Some(4));
    w.limit_offset(10, 30);

    let stmt = w.build().unwrap();
    assert_eq!(placeholder_count(stmt.sql()), stmt.args().len());
}

#[test]
fn test_deeply_nested_groups_keep_argument_order() {
    let mut w = Where::new();
    w.is("a = ?", 1);
    let outer = w.where_or();
    outer.is("b = ?", 2);
    let inner = outer.where_and();
    inner.is("c = ?", 3).is("d = ?", 4);
    outer.is("e = ?", 5);

    let stmt = w.build().unwrap();
    assert_eq!(
        stmt.sql(),
        "WHERE a = ? AND (b = ? OR (c = ? AND d = ?) OR e = ?)"
    );
    assert_eq!(
        stmt.args(),
        [
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
            Value::Int(4),
            Value::Int(5),
        ]
    );
}

#[test]
fn test_update_with_everything() {
    let mut u = Update::new("accounts");
    u.low_priority().ignore();
    u.set_value("balance = ?", 100i64).set("touched = NOW()");
    let w = u.where_clause();
    w.is("owner = ?", "bob");
    w.in_list("currency", vec!["CLP", "USD"]);
    w.order_by().asc("id");
    w.limit(1);
    w.for_update();

    let stmt = u.build().unwrap();
    assert_eq!(
        stmt.sql(),
        "UPDATE LOW_PRIORITY IGNORE accounts SET balance = ?,touched = NOW() \
         WHERE owner = ? AND currency IN (?,?) ORDER BY id ASC LIMIT ?,? FOR UPDATE"
    );
    assert_eq!(
        stmt.args(),
        [
            Value::Int(100),
            Value::Text("bob".to_string()),
            Value::Text("CLP".to_string()),
            Value::Text("USD".to_string()),
            Value::UInt(0),
            Value::UInt(1),
        ]
    );
}

#[test]
fn test_malformed_predicate_in_nested_group_fails_update_build() {
    let mut u = Update::new("users");
    u.set_value("a = ?", 1);
    let group = u.where_clause().where_or();
    group.is_many("b = ?", vec![Value::Int(1), Value::Int(2)]);

    assert!(matches!(
        u.build(),
        Err(BuildError::MalformedPredicate { placeholders: 1, values: 2, .. })
    ));
}

#[test]
fn test_render_is_deterministic() {
    let mut w = Where::new();
    w.is("a = ?", 1).in_list("b", vec![2, 3]);
    w.limit(4);

    let first = w.build().unwrap();
    let second = w.build().unwrap();
    assert_eq!(first, second);
}
