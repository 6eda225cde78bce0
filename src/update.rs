//! UPDATE statement skeleton.

use crate::clause::Where;
use crate::error::{BuildError, BuildResult};
use crate::expr::placeholder_count;
use crate::table::TableRef;
use crate::traits::Operator;
use crate::value::{Bind, Value};

/// Builder for `UPDATE [LOW_PRIORITY] [IGNORE] <table> SET ... [WHERE ...]`.
///
/// Assignment parts share the fragment + bound-values shape of
/// predicates and render comma-joined in insertion order; their values
/// land in the argument list before any WHERE values.
#[derive(Clone, Debug)]
pub struct Update {
    table: TableRef,
    low_priority: bool,
    ignore: bool,
    assigns: Vec<(String, Bind)>,
    where_clause: Option<Where>,
    /// Deferred add-time error, surfaced by the next render.
    build_error: Option<BuildError>,
}

impl Update {
    pub fn new(table: &str) -> Self {
        Self {
            table: TableRef::new(table),
            low_priority: false,
            ignore: false,
            assigns: Vec::new(),
            where_clause: None,
            build_error: None,
        }
    }

    /// Emit the `LOW_PRIORITY` header modifier. Idempotent.
    pub fn low_priority(&mut self) -> &mut Self {
        self.low_priority = true;
        self
    }

    /// Emit the `IGNORE` header modifier. Idempotent.
    pub fn ignore(&mut self) -> &mut Self {
        self.ignore = true;
        self
    }

    fn push_assign(&mut self, fragment: &str, bind: Bind) {
        let placeholders = placeholder_count(fragment);
        if placeholders != bind.len() {
            self.build_error = Some(BuildError::MalformedPredicate {
                fragment: fragment.to_string(),
                placeholders,
                values: bind.len(),
            });
            return;
        }
        self.assigns.push((fragment.to_string(), bind));
    }

    /// Add an assignment without bound values, e.g. `touched = NOW()`.
    ///
    /// # Safety
    ///
    /// The fragment is concatenated into the SQL as-is. The caller must
    /// ensure safety.
    pub fn set(&mut self, fragment: &str) -> &mut Self {
        self.push_assign(fragment, Bind::None);
        self
    }

    /// Add an assignment with a single bound value, e.g.
    /// `set_value("name = ?", "bob")`.
    pub fn set_value<V: Into<Value>>(&mut self, fragment: &str, value: V) -> &mut Self {
        self.push_assign(fragment, Bind::One(value.into()));
        self
    }

    /// Add an assignment with one bound value per `?`.
    pub fn set_many(&mut self, fragment: &str, values: Vec<Value>) -> &mut Self {
        self.push_assign(fragment, Bind::Many(values));
        self
    }

    /// Add a single-value assignment only if the value is `Some`.
    pub fn set_opt<V: Into<Value>>(&mut self, fragment: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.set_value(fragment, v);
        }
        self
    }

    /// Assign a column from any serializable value, bound as JSON text.
    pub fn set_json<T: serde::Serialize>(
        &mut self,
        column: &str,
        value: &T,
    ) -> serde_json::Result<&mut Self> {
        let json = serde_json::to_string(value)?;
        Ok(self.set_value(&format!("{column} = ?"), json))
    }

    /// Install a fresh WHERE clause and return it.
    ///
    /// Calling this again replaces the previous clause entirely: last
    /// call wins, earlier contents are discarded.
    pub fn where_clause(&mut self) -> &mut Where {
        self.where_clause.insert(Where::new())
    }
}

impl Operator for Update {
    fn render(&self, args: &mut Vec<Value>) -> BuildResult<String> {
        if let Some(err) = &self.build_error {
            return Err(err.clone());
        }
        if self.assigns.is_empty() {
            return Err(BuildError::EmptySet {
                table: self.table.name().to_string(),
            });
        }

        let mut sql = String::from("UPDATE ");
        if self.low_priority {
            sql.push_str("LOW_PRIORITY ");
        }
        if self.ignore {
            sql.push_str("IGNORE ");
        }
        sql.push_str(&self.table.render(args)?);

        sql.push_str(" SET ");
        let mut parts: Vec<&str> = Vec::with_capacity(self.assigns.len());
        for (fragment, bind) in &self.assigns {
            parts.push(fragment.as_str());
            bind.append_to(args);
        }
        sql.push_str(&parts.join(","));

        if let Some(where_clause) = &self.where_clause {
            sql.push(' ');
            sql.push_str(&where_clause.render(args)?);
        }
        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_update() {
        let mut u = Update::new("users");
        u.set_value("status = ?", "inactive");
        u.where_clause().is("id = ?", 7);

        let mut args = Vec::new();
        let sql = u.render(&mut args).unwrap();
        assert_eq!(sql, "UPDATE users SET status = ? WHERE id = ?");
        assert_eq!(
            args,
            vec![Value::Text("inactive".to_string()), Value::Int(7)]
        );
    }

    #[test]
    fn test_set_values_precede_where_values() {
        let mut u = Update::new("users");
        u.set_value("a = ?", 1).set("b = NOW()").set_value("c = ?", 2);
        u.where_clause().is("d = ?", 3);

        let mut args = Vec::new();
        let sql = u.render(&mut args).unwrap();
        assert_eq!(sql, "UPDATE users SET a = ?,b = NOW(),c = ? WHERE d = ?");
        assert_eq!(args, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn test_header_modifiers_are_idempotent() {
        let mut u = Update::new("users");
        u.low_priority().low_priority().ignore().ignore();
        u.set_value("a = ?", 1);

        let mut args = Vec::new();
        let sql = u.render(&mut args).unwrap();
        assert_eq!(sql, "UPDATE LOW_PRIORITY IGNORE users SET a = ?");
        assert_eq!(sql.matches("LOW_PRIORITY").count(), 1);
        assert_eq!(sql.matches("IGNORE").count(), 1);
    }

    #[test]
    fn test_empty_set_is_an_error() {
        let u = Update::new("users");
        let mut args = Vec::new();
        assert_eq!(
            u.render(&mut args).unwrap_err(),
            BuildError::EmptySet {
                table: "users".to_string()
            }
        );
    }

    #[test]
    fn test_where_clause_replace_on_recall() {
        let mut u = Update::new("users");
        u.set_value("a = ?", 1);
        u.where_clause().is("old = ?", 1);
        u.where_clause().is("new = ?", 2);

        let mut args = Vec::new();
        let sql = u.render(&mut args).unwrap();
        assert_eq!(sql, "UPDATE users SET a = ? WHERE new = ?");
        assert_eq!(args, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn test_malformed_assignment_defers_error() {
        let mut u = Update::new("users");
        u.set("a = ?");

        let mut args = Vec::new();
        assert!(matches!(
            u.render(&mut args),
            Err(BuildError::MalformedPredicate { placeholders: 1, values: 0, .. })
        ));
    }

    #[test]
    fn test_set_json() {
        #[derive(serde::Serialize)]
        struct Prefs {
            theme: &'static str,
        }

        let mut u = Update::new("users");
        u.set_json("prefs", &Prefs { theme: "dark" }).unwrap();

        let mut args = Vec::new();
        let sql = u.render(&mut args).unwrap();
        assert_eq!(sql, "UPDATE users SET prefs = ?");
        assert_eq!(args, vec![Value::Text("{\"theme\":\"dark\"}".to_string())]);
    }
}
