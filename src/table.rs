//! Table reference operator.

use crate::error::BuildResult;
use crate::traits::Operator;
use crate::value::Value;

/// A table reference rendered verbatim into statement headers.
///
/// The name is a caller-trusted identifier and binds no values. JOIN
/// construction is out of scope here: statements that need it assemble
/// their own fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRef {
    table: String,
}

impl TableRef {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
        }
    }

    /// The referenced table name.
    pub fn name(&self) -> &str {
        &self.table
    }
}

impl Default for TableRef {
    /// MySQL's dummy table, for statements without a real target.
    fn default() -> Self {
        Self::new("DUAL")
    }
}

impl Operator for TableRef {
    fn render(&self, _args: &mut Vec<Value>) -> BuildResult<String> {
        Ok(self.table.clone())
    }
}
