//! Statement-level WHERE clause and its GROUP BY / ORDER BY leaves.

use crate::error::BuildResult;
use crate::expr::{BooleanExpr, Logic};
use crate::traits::Operator;
use crate::value::Value;

/// Locking-mode tail appended verbatim after everything else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LockMode {
    /// No lock tail
    #[default]
    None,
    /// Exclusive lock, released at transaction end
    ForUpdate,
    /// Shared lock: others can read but not modify
    LockInShareMode,
}

impl LockMode {
    fn as_sql(self) -> &'static str {
        match self {
            LockMode::None => "",
            LockMode::ForUpdate => " FOR UPDATE",
            LockMode::LockInShareMode => " LOCK IN SHARE MODE",
        }
    }
}

/// A complete `WHERE ...` fragment: a root boolean expression plus
/// optional GROUP BY, ORDER BY, LIMIT and lock tail.
///
/// The root expression is never parenthesized and its connective is
/// fixed at construction. Rendering an empty clause yields a bare
/// `WHERE ` prefix; whether that is meaningful is the caller's concern,
/// like everything else about fragment content.
#[derive(Clone, Debug)]
pub struct Where {
    expr: BooleanExpr,
    group: Option<GroupBy>,
    order: Option<OrderBy>,
    /// `(offset, count)`, bound in that order by `LIMIT ?,?`.
    limit: Option<(u64, u64)>,
    lock: LockMode,
}

impl Where {
    /// Create a WHERE clause whose root conditions are ANDed.
    pub fn new() -> Self {
        Self::with_logic(Logic::And)
    }

    /// Create a WHERE clause with an explicit root connective.
    pub fn with_logic(logic: Logic) -> Self {
        Self {
            expr: BooleanExpr::new(logic),
            group: None,
            order: None,
            limit: None,
            lock: LockMode::None,
        }
    }

    /// The root boolean expression.
    pub fn expr(&self) -> &BooleanExpr {
        &self.expr
    }

    // ==================== Conditions (forwarded to the root) ====================

    /// Add a predicate with a single bound value.
    pub fn is<V: Into<Value>>(&mut self, fragment: &str, value: V) -> &mut Self {
        self.expr.is(fragment, value);
        self
    }

    /// Add a predicate with one bound value per `?`.
    pub fn is_many(&mut self, fragment: &str, values: Vec<Value>) -> &mut Self {
        self.expr.is_many(fragment, values);
        self
    }

    /// Add a single-value predicate only if the value is `Some`.
    pub fn is_opt<V: Into<Value>>(&mut self, fragment: &str, value: Option<V>) -> &mut Self {
        self.expr.is_opt(fragment, value);
        self
    }

    /// Add a predicate without bound values.
    ///
    /// # Safety
    ///
    /// The fragment is concatenated into the SQL as-is. The caller must
    /// ensure safety.
    pub fn raw(&mut self, fragment: &str) -> &mut Self {
        self.expr.raw(fragment);
        self
    }

    /// Add `column IN (?,..,?)`; an empty list is a silent no-op.
    pub fn in_list<V: Into<Value>>(&mut self, column: &str, values: Vec<V>) -> &mut Self {
        self.expr.in_list(column, values);
        self
    }

    /// Add `column NOT IN (?,..,?)`; an empty list is a silent no-op.
    pub fn not_in_list<V: Into<Value>>(&mut self, column: &str, values: Vec<V>) -> &mut Self {
        self.expr.not_in_list(column, values);
        self
    }

    /// Append a nested AND group and return it.
    pub fn where_and(&mut self) -> &mut BooleanExpr {
        self.expr.where_and()
    }

    /// Append a nested OR group and return it.
    pub fn where_or(&mut self) -> &mut BooleanExpr {
        self.expr.where_or()
    }

    // ==================== Trailing clauses ====================

    /// Install a fresh GROUP BY clause and return it.
    ///
    /// Calling this again replaces the previous clause entirely: last
    /// call wins, earlier contents are discarded.
    pub fn group_by(&mut self) -> &mut GroupBy {
        self.group.insert(GroupBy::new())
    }

    /// Install a fresh ORDER BY clause and return it. Last call wins,
    /// exactly like [`group_by`](Where::group_by).
    pub fn order_by(&mut self) -> &mut OrderBy {
        self.order.insert(OrderBy::new())
    }

    /// Limit to `count` rows from the start of the result.
    pub fn limit(&mut self, count: u64) -> &mut Self {
        self.limit_offset(count, 0)
    }

    /// Limit to `count` rows starting at `offset`.
    ///
    /// Renders as `LIMIT ?,?` with the offset bound before the count.
    pub fn limit_offset(&mut self, count: u64, offset: u64) -> &mut Self {
        self.limit = Some((offset, count));
        self
    }

    /// Set an exclusive-lock tail. Overwrites any earlier lock mode.
    pub fn for_update(&mut self) -> &mut Self {
        self.lock = LockMode::ForUpdate;
        self
    }

    /// Set a shared-lock tail. Overwrites any earlier lock mode.
    pub fn lock_in_share_mode(&mut self) -> &mut Self {
        self.lock = LockMode::LockInShareMode;
        self
    }
}

impl Default for Where {
    fn default() -> Self {
        Self::new()
    }
}

impl Operator for Where {
    fn render(&self, args: &mut Vec<Value>) -> BuildResult<String> {
        let mut sql = format!("WHERE {}", self.expr.render(args)?);
        if let Some(group) = &self.group {
            sql.push(' ');
            sql.push_str(&group.render(args)?);
        }
        if let Some(order) = &self.order {
            sql.push(' ');
            sql.push_str(&order.render(args)?);
        }
        if let Some((offset, count)) = self.limit {
            sql.push_str(" LIMIT ?,?");
            args.push(Value::UInt(offset));
            args.push(Value::UInt(count));
        }
        sql.push_str(self.lock.as_sql());
        Ok(sql)
    }
}

/// Ordered list of `column ASC|DESC` fragments rendered as `GROUP BY ...`.
///
/// Column names are caller-trusted identifiers, never bound values:
/// placeholders cannot represent identifiers in parameterized SQL.
#[derive(Clone, Debug, Default)]
pub struct GroupBy {
    parts: Vec<String>,
}

impl GroupBy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `column ASC`.
    pub fn asc(&mut self, column: &str) -> &mut Self {
        self.parts.push(format!("{column} ASC"));
        self
    }

    /// Append `column DESC`.
    pub fn desc(&mut self, column: &str) -> &mut Self {
        self.parts.push(format!("{column} DESC"));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Operator for GroupBy {
    fn render(&self, _args: &mut Vec<Value>) -> BuildResult<String> {
        Ok(format!("GROUP BY {}", self.parts.join(",")))
    }
}

/// Ordered list of `column ASC|DESC` fragments rendered as `ORDER BY ...`.
#[derive(Clone, Debug, Default)]
pub struct OrderBy {
    parts: Vec<String>,
}

impl OrderBy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `column ASC`.
    pub fn asc(&mut self, column: &str) -> &mut Self {
        self.parts.push(format!("{column} ASC"));
        self
    }

    /// Append `column DESC`.
    pub fn desc(&mut self, column: &str) -> &mut Self {
        self.parts.push(format!("{column} DESC"));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Operator for OrderBy {
    fn render(&self, _args: &mut Vec<Value>) -> BuildResult<String> {
        Ok(format!("ORDER BY {}", self.parts.join(",")))
    }
}
