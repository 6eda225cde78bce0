//! Boolean expression tree: the engine under WHERE and SET rendering.
//!
//! An expression owns an ordered sequence of parts, each either a simple
//! predicate (raw fragment plus bound values) or a nested sub-group with
//! its own connective. Rendering walks the tree depth-first in insertion
//! order, so the argument list always matches the left-to-right order of
//! the `?` placeholders in the produced text.
//!
//! Fragments are an explicit trust boundary: they are never parsed,
//! validated, or escaped here. Only bound *values* go through
//! parameterization; identifier injection is the caller's problem.

use crate::error::{BuildError, BuildResult};
use crate::traits::Operator;
use crate::value::{Bind, Value};

/// Logical connective joining the parts of one boolean group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Logic {
    And,
    Or,
}

impl Logic {
    fn separator(self) -> &'static str {
        match self {
            Logic::And => " AND ",
            Logic::Or => " OR ",
        }
    }
}

/// Number of positional placeholders in a fragment.
pub(crate) fn placeholder_count(fragment: &str) -> usize {
    fragment.matches('?').count()
}

/// One entry of a boolean group, kept in insertion order.
#[derive(Clone, Debug)]
enum Part {
    /// Raw fragment plus its bound values.
    Simple { fragment: String, bind: Bind },
    /// Parenthesized sub-group.
    Nested(BooleanExpr),
}

/// Ordered tree of predicates combined by a single connective.
///
/// Roots render bare; sub-groups created via [`where_and`] /
/// [`where_or`] render wrapped in parentheses.
///
/// [`where_and`]: BooleanExpr::where_and
/// [`where_or`]: BooleanExpr::where_or
#[derive(Clone, Debug)]
pub struct BooleanExpr {
    logic: Logic,
    parts: Vec<Part>,
    nested: bool,
    /// Deferred add-time error, surfaced by the next render.
    build_error: Option<BuildError>,
}

impl BooleanExpr {
    /// Create a root expression with the given connective.
    pub fn new(logic: Logic) -> Self {
        Self {
            logic,
            parts: Vec::new(),
            nested: false,
            build_error: None,
        }
    }

    fn nested_group(logic: Logic) -> Self {
        Self {
            nested: true,
            ..Self::new(logic)
        }
    }

    /// The connective this group was created with.
    pub fn logic(&self) -> Logic {
        self.logic
    }

    /// Check if no parts have been added.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Number of parts added so far.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Validate the fragment against its bound values and store the part.
    ///
    /// On mismatch the part is rejected, state stays unmodified, and the
    /// error is remembered for the next render.
    fn push_simple(&mut self, fragment: &str, bind: Bind) {
        let placeholders = placeholder_count(fragment);
        if placeholders != bind.len() {
            self.build_error = Some(BuildError::MalformedPredicate {
                fragment: fragment.to_string(),
                placeholders,
                values: bind.len(),
            });
            return;
        }
        self.parts.push(Part::Simple {
            fragment: fragment.to_string(),
            bind,
        });
    }

    /// Add a predicate with a single bound value, e.g. `is("age > ?", 18)`.
    pub fn is<V: Into<Value>>(&mut self, fragment: &str, value: V) -> &mut Self {
        self.push_simple(fragment, Bind::One(value.into()));
        self
    }

    /// Add a predicate with one bound value per `?` in the fragment.
    pub fn is_many(&mut self, fragment: &str, values: Vec<Value>) -> &mut Self {
        self.push_simple(fragment, Bind::Many(values));
        self
    }

    /// Add a single-value predicate only if the value is `Some`.
    pub fn is_opt<V: Into<Value>>(&mut self, fragment: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.is(fragment, v);
        }
        self
    }

    /// Add a predicate without bound values.
    ///
    /// # Safety
    ///
    /// The fragment is concatenated into the SQL as-is. The caller must
    /// ensure safety.
    pub fn raw(&mut self, fragment: &str) -> &mut Self {
        self.push_simple(fragment, Bind::None);
        self
    }

    /// Add `column IN (?,..,?)` with one placeholder per value.
    ///
    /// An empty value list adds nothing at all: no predicate, no
    /// placeholders, no error. Callers relying on the no-op get a
    /// condition that simply vanishes from the rendered text instead of
    /// invalid SQL.
    pub fn in_list<V: Into<Value>>(&mut self, column: &str, values: Vec<V>) -> &mut Self {
        self.push_in(column, values, false)
    }

    /// Add `column NOT IN (?,..,?)`; empty lists are a no-op like
    /// [`in_list`](BooleanExpr::in_list).
    pub fn not_in_list<V: Into<Value>>(&mut self, column: &str, values: Vec<V>) -> &mut Self {
        self.push_in(column, values, true)
    }

    fn push_in<V: Into<Value>>(&mut self, column: &str, values: Vec<V>, negated: bool) -> &mut Self {
        if values.is_empty() {
            return self;
        }
        let placeholders = vec!["?"; values.len()].join(",");
        let op = if negated { "NOT IN" } else { "IN" };
        self.parts.push(Part::Simple {
            fragment: format!("{column} {op} ({placeholders})"),
            bind: Bind::Many(values.into_iter().map(Into::into).collect()),
        });
        self
    }

    /// Append a nested AND group and return it.
    ///
    /// Unlike the predicate methods this changes the chain's subject:
    /// further calls on the returned expression fill the sub-group, and
    /// the parent binding becomes usable again once that borrow ends.
    pub fn where_and(&mut self) -> &mut BooleanExpr {
        self.expand(Logic::And)
    }

    /// Append a nested OR group and return it.
    pub fn where_or(&mut self) -> &mut BooleanExpr {
        self.expand(Logic::Or)
    }

    fn expand(&mut self, logic: Logic) -> &mut BooleanExpr {
        self.parts.push(Part::Nested(Self::nested_group(logic)));
        match self.parts.last_mut() {
            Some(Part::Nested(child)) => child,
            // A nested part was pushed on the line above.
            _ => unreachable!(),
        }
    }
}

impl Operator for BooleanExpr {
    fn render(&self, args: &mut Vec<Value>) -> BuildResult<String> {
        if let Some(err) = &self.build_error {
            return Err(err.clone());
        }

        let mut rendered: Vec<String> = Vec::with_capacity(self.parts.len());
        for part in &self.parts {
            match part {
                Part::Simple { fragment, bind } => {
                    if !fragment.is_empty() {
                        rendered.push(fragment.clone());
                    }
                    bind.append_to(args);
                }
                Part::Nested(child) => {
                    // Render before filtering so a child's deferred
                    // error still surfaces even if it holds no parts.
                    let sql = child.render(args)?;
                    if !sql.is_empty() {
                        rendered.push(sql);
                    }
                }
            }
        }

        let joined = rendered.join(self.logic.separator());
        if joined.is_empty() {
            return Ok(String::new());
        }
        Ok(if self.nested {
            format!("({joined})")
        } else {
            joined
        })
    }
}
