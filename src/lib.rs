//! # myqb
//!
//! Chainable, parameter-safe building of MySQL statement fragments.
//!
//! Calling code assembles WHERE clauses and UPDATE statements by
//! composing operator objects instead of concatenating strings. The core
//! is a boolean expression tree: simple predicates and nested AND/OR
//! groups that render to parameterized SQL while keeping the argument
//! list synchronized with positional `?` placeholder order.
//!
//! ## Design
//!
//! - SQL fragments stay explicit strings authored by the caller; they
//!   are never parsed, validated, or escaped here. Only bound values go
//!   through parameterization.
//! - A single [`Operator::render`] call walks the tree depth-first and
//!   appends bound values to one argument list, in placeholder order.
//! - No execution, connection handling, or driver quoting: the output
//!   is a `(text, args)` pair for any parameterized-query API.
//!
//! ## Example
//!
//! ```
//! use myqb::{Operator, Value, Where};
//!
//! let mut w = Where::new();
//! w.is("age > ?", 18);
//! let group = w.where_and();
//! group.is("name = ?", "bob").is("active = ?", true);
//! w.order_by().desc("age");
//! w.limit(5);
//!
//! let stmt = w.build()?;
//! assert_eq!(
//!     stmt.sql(),
//!     "WHERE age > ? AND (name = ? AND active = ?) ORDER BY age DESC LIMIT ?,?"
//! );
//! assert_eq!(stmt.args().len(), 5);
//! assert_eq!(stmt.args()[0], Value::Int(18));
//! # Ok::<(), myqb::BuildError>(())
//! ```

pub mod clause;
pub mod error;
pub mod expr;
pub mod table;
pub mod traits;
pub mod update;
pub mod value;

pub use clause::{GroupBy, LockMode, OrderBy, Where};
pub use error::{BuildError, BuildResult};
pub use expr::{BooleanExpr, Logic};
pub use table::TableRef;
pub use traits::{Operator, Statement};
pub use update::Update;
pub use value::{Bind, Value};

#[cfg(test)]
mod tests;
