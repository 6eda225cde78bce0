//! Render contract shared by all statement operators.

use crate::error::BuildResult;
use crate::value::Value;

/// Base capability of every operator: produce SQL text given a mutable
/// argument accumulator.
///
/// Implementations append their bound values to `args` in the exact
/// left-to-right order of the `?` placeholders in the returned text, so
/// one top-level [`render`](Operator::render) call threads a single
/// argument list through the whole tree.
pub trait Operator {
    /// Render this operator's SQL text, appending bound values to `args`.
    fn render(&self, args: &mut Vec<Value>) -> BuildResult<String>;

    /// Render into a finished [`Statement`], starting from an empty
    /// argument list.
    fn build(&self) -> BuildResult<Statement> {
        let mut args = Vec::new();
        let sql = self.render(&mut args)?;
        tracing::debug!(sql = %sql, args = args.len(), "statement built");
        Ok(Statement { sql, args })
    }
}

/// Finished SQL text plus its bound values, intended to be handed
/// verbatim to a parameterized-query API as `execute(sql, args)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    sql: String,
    args: Vec<Value>,
}

impl Statement {
    /// The rendered SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound values, one per `?` placeholder, in placeholder order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Split into the `(text, args)` pair.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}
