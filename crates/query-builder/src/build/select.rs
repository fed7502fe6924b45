//! Provides a fluent builder for constructing `Select` ASTs.

use crate::ast::common::JoinKind;
use crate::ast::criteria::{Criteria, Logic, LogicOp};
use crate::ast::select::{JoinClause, Projection, Select, SourceList};

/// Owned builder threaded through method chaining; `build()` hands back the
/// finished AST. Every clause except `FROM` is optional, so no ordering is
/// imposed on the calls.
#[derive(Debug, Default, Clone)]
pub struct SelectBuilder {
    ast: Select,
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self {
            ast: Select::default(),
        }
    }

    /// Sets the select list: verbatim text (`"id, name"`) or an ordered
    /// item list. The default is the wildcard.
    pub fn select(mut self, projection: impl Into<Projection>) -> Self {
        self.ast.projection = projection.into();
        self
    }

    pub fn distinct(mut self, distinct: bool) -> Self {
        self.ast.distinct = distinct;
        self
    }

    /// Sets the statement source(s): verbatim text or an ordered item list.
    pub fn from(mut self, source: impl Into<SourceList>) -> Self {
        self.ast.from = Some(source.into());
        self
    }

    /// Appends a join. The `on` condition is raw text and is never escaped.
    pub fn join(mut self, kind: JoinKind, table: &str, on: &str) -> Self {
        self.ast.joins.push(JoinClause {
            kind,
            table: table.to_string(),
            on: on.to_string(),
        });
        self
    }

    pub fn inner_join(self, table: &str, on: &str) -> Self {
        self.join(JoinKind::Inner, table, on)
    }

    pub fn left_join(self, table: &str, on: &str) -> Self {
        self.join(JoinKind::Left, table, on)
    }

    pub fn right_join(self, table: &str, on: &str) -> Self {
        self.join(JoinKind::Right, table, on)
    }

    /// Replaces the WHERE root.
    pub fn where_clause(mut self, criteria: Criteria) -> Self {
        self.ast.where_clause = Some(criteria);
        self
    }

    /// ANDs the criteria with the existing WHERE root, or installs it if no
    /// root exists yet.
    pub fn and_where(mut self, criteria: Criteria) -> Self {
        self.ast.where_clause = Some(combine(self.ast.where_clause.take(), LogicOp::And, criteria));
        self
    }

    pub fn or_where(mut self, criteria: Criteria) -> Self {
        self.ast.where_clause = Some(combine(self.ast.where_clause.take(), LogicOp::Or, criteria));
        self
    }

    /// Replaces the HAVING root.
    pub fn having(mut self, criteria: Criteria) -> Self {
        self.ast.having = Some(criteria);
        self
    }

    pub fn and_having(mut self, criteria: Criteria) -> Self {
        self.ast.having = Some(combine(self.ast.having.take(), LogicOp::And, criteria));
        self
    }

    pub fn or_having(mut self, criteria: Criteria) -> Self {
        self.ast.having = Some(combine(self.ast.having.take(), LogicOp::Or, criteria));
        self
    }

    /// Stores raw `GROUP BY` text unmodified.
    pub fn group_by(mut self, text: &str) -> Self {
        self.ast.group_by = Some(text.to_string());
        self
    }

    /// Stores raw `ORDER BY` text unmodified.
    pub fn order_by(mut self, text: &str) -> Self {
        self.ast.order_by = Some(text.to_string());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.ast.limit = Some(limit);
        self
    }

    /// Only rendered when a limit is set.
    pub fn offset(mut self, offset: u64) -> Self {
        self.ast.offset = Some(offset);
        self
    }

    /// Finalizes and returns the constructed `Select` AST.
    pub fn build(self) -> Select {
        self.ast
    }
}

/// Folds a new criteria into an existing clause root: a two-operand Logic
/// node when a root exists, the criteria itself otherwise.
fn combine(root: Option<Criteria>, op: LogicOp, criteria: Criteria) -> Criteria {
    match root {
        Some(existing) => Criteria::Logic(Logic::new(op, vec![existing, criteria])),
        None => criteria,
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::common::JoinKind;
    use crate::ast::criteria::{CompareOp, Criteria, LogicOp};
    use crate::ast::select::{Projection, SourceList};
    use crate::build::select::SelectBuilder;
    use crate::{item, item_as};

    #[test]
    fn test_build_simple_select() {
        let ast = SelectBuilder::new()
            .select(vec![item("id"), item_as("name", "n")])
            .from("users")
            .build();

        assert!(matches!(ast.projection, Projection::Items(ref items) if items.len() == 2));
        assert_eq!(ast.from, Some(SourceList::Raw("users".to_string())));
        assert!(!ast.distinct);
        assert!(ast.where_clause.is_none());
    }

    #[test]
    fn test_wildcard_is_the_default_projection() {
        let ast = SelectBuilder::new().from("users").build();
        assert_eq!(ast.projection, Projection::Wildcard);
    }

    #[test]
    fn test_and_where_installs_root_when_empty() {
        let ast = SelectBuilder::new()
            .from("users")
            .and_where(Criteria::equal("id", 1))
            .build();

        assert_eq!(ast.where_clause, Some(Criteria::equal("id", 1)));
    }

    #[test]
    fn test_and_where_combines_into_logic() {
        let ast = SelectBuilder::new()
            .from("users")
            .where_clause(Criteria::equal("id", 1))
            .and_where(Criteria::compare("age", CompareOp::Gt, 18))
            .build();

        let Some(Criteria::Logic(logic)) = ast.where_clause else {
            panic!("expected a Logic root");
        };
        assert_eq!(logic.op, LogicOp::And);
        assert_eq!(logic.operands.len(), 2);
        assert_eq!(logic.operands[0], Criteria::equal("id", 1));
    }

    #[test]
    fn test_or_having_combines_into_logic() {
        let ast = SelectBuilder::new()
            .from("orders")
            .having(Criteria::compare("total", CompareOp::Gt, 100))
            .or_having(Criteria::equal("status", "open"))
            .build();

        let Some(Criteria::Logic(logic)) = ast.having else {
            panic!("expected a Logic root");
        };
        assert_eq!(logic.op, LogicOp::Or);
        assert_eq!(logic.operands.len(), 2);
    }

    #[test]
    fn test_join_wrappers_append_in_order() {
        let ast = SelectBuilder::new()
            .from("t1")
            .inner_join("t2", "t1.id = t2.id")
            .left_join("t3", "t1.id = t3.id")
            .right_join("t4", "t1.id = t4.id")
            .build();

        let kinds: Vec<JoinKind> = ast.joins.iter().map(|j| j.kind).collect();
        assert_eq!(kinds, vec![JoinKind::Inner, JoinKind::Left, JoinKind::Right]);
        assert_eq!(ast.joins[0].table, "t2");
        assert_eq!(ast.joins[0].on, "t1.id = t2.id");
    }

    #[test]
    fn test_limit_and_offset_are_stored() {
        let ast = SelectBuilder::new().from("t").limit(10).offset(5).build();
        assert_eq!(ast.limit, Some(10));
        assert_eq!(ast.offset, Some(5));
    }
}
