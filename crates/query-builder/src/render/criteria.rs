use crate::ast::criteria::{Criteria, InSet, Logic, Operand};
use crate::error::Result;
use crate::render::{Render, Renderer};

impl Render for Criteria {
    fn render(&self, r: &mut Renderer) -> Result<()> {
        match self {
            Criteria::Equal { column, value } => render_comparison(column, "=", value, r),
            Criteria::Compare { column, op, value } => {
                render_comparison(column, op.as_sql(), value, r)
            }
            Criteria::Like { column, pattern } => render_comparison(column, "LIKE", pattern, r),
            Criteria::Regexp { column, pattern } => render_comparison(column, "REGEXP", pattern, r),
            Criteria::Between { column, min, max } => {
                r.push_ident(column);
                r.sql.push_str(&format!(" BETWEEN '{min}' AND '{max}'"));
                Ok(())
            }
            Criteria::In { column, set } => {
                r.push_ident(column);
                r.sql.push_str(" IN (");
                match set {
                    InSet::One(value) => r.push_escaped(value),
                    InSet::Many(values) => {
                        for (i, value) in values.iter().enumerate() {
                            if i > 0 {
                                r.sql.push_str(", ");
                            }
                            r.push_escaped(value);
                        }
                    }
                    InSet::Subquery(query) => query.render(r)?,
                }
                r.sql.push(')');
                Ok(())
            }
            Criteria::Logic(logic) => logic.render(r),
        }
    }
}

/// Equal, Compare, Like and Regexp differ only in their operator text: the
/// column is quoted, a literal operand is escaped and single-quoted, a
/// sub-select operand renders in parentheses.
fn render_comparison(column: &str, op: &str, operand: &Operand, r: &mut Renderer) -> Result<()> {
    r.push_ident(column);
    r.sql.push(' ');
    r.sql.push_str(op);
    r.sql.push(' ');
    match operand {
        Operand::Value(value) => r.push_literal(value),
        Operand::Subquery(query) => {
            r.sql.push('(');
            query.render(r)?;
            r.sql.push(')');
        }
    }
    Ok(())
}

impl Render for Logic {
    fn render(&self, r: &mut Renderer) -> Result<()> {
        // Zero operands produce an empty fragment; keeping such a node out
        // of the WHERE/HAVING root is the caller's responsibility.
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                r.sql.push(' ');
                r.sql.push_str(self.op.as_sql());
                r.sql.push(' ');
            }
            r.sql.push('(');
            operand.render(r)?;
            r.sql.push(')');
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::criteria::{CompareOp, Criteria, Logic, LogicOp};
    use crate::build::select::SelectBuilder;
    use crate::dialect::{MySql, Postgres};
    use crate::render::render_criteria;
    use crate::render::test_escape::{MysqlEscape, PassThrough};

    fn mysql(criteria: &Criteria) -> String {
        render_criteria(criteria, &MySql, &PassThrough).expect("render criteria")
    }

    #[test]
    fn test_equal() {
        assert_eq!(
            mysql(&Criteria::equal("col", "%value%")),
            "`col` = '%value%'"
        );
    }

    #[test]
    fn test_equal_coerces_numbers_to_text() {
        assert_eq!(mysql(&Criteria::equal("col1", 1)), "`col1` = '1'");
    }

    #[test]
    fn test_like() {
        assert_eq!(
            mysql(&Criteria::like("col", "%value%")),
            "`col` LIKE '%value%'"
        );
    }

    #[test]
    fn test_compare() {
        assert_eq!(
            mysql(&Criteria::compare("col", CompareOp::Gt, 1)),
            "`col` > '1'"
        );
    }

    #[test]
    fn test_regexp() {
        assert_eq!(
            mysql(&Criteria::regexp("col3", "(\\d+)")),
            "`col3` REGEXP '(\\d+)'"
        );
    }

    #[test]
    fn test_regexp_through_mysql_escaping() {
        let criteria = Criteria::regexp("col", "/(\\d+)/");
        let sql = render_criteria(&criteria, &MySql, &MysqlEscape).expect("render criteria");
        assert_eq!(sql, "`col` REGEXP '/(\\\\d+)/'");
    }

    #[test]
    fn test_between() {
        assert_eq!(
            mysql(&Criteria::between("col", 10.0, 20.0)),
            "`col` BETWEEN '10' AND '20'"
        );
    }

    #[test]
    fn test_between_keeps_fractions() {
        assert_eq!(
            mysql(&Criteria::between("col", 0.5, 1.5)),
            "`col` BETWEEN '0.5' AND '1.5'"
        );
    }

    #[test]
    fn test_logic_pair() {
        let mut logic = Logic::new(LogicOp::And, vec![]);
        logic.push(Criteria::like("col", ""));
        logic.push(Criteria::equal("col", ""));

        assert_eq!(
            mysql(&Criteria::Logic(logic)),
            "(`col` LIKE '') AND (`col` = '')"
        );
    }

    #[test]
    fn test_logic_nested() {
        let criteria = Criteria::or(vec![
            Criteria::and(vec![
                Criteria::equal("col1", 1),
                Criteria::like("col2", "%2%"),
            ]),
            Criteria::and(vec![
                Criteria::regexp("col3", "(\\d+)"),
                Criteria::compare("col4", CompareOp::Lt, 4),
                Criteria::between("col5", 123.0, 456.0),
            ]),
        ]);

        assert_eq!(
            mysql(&criteria),
            "((`col1` = '1') AND (`col2` LIKE '%2%')) OR ((`col3` REGEXP '(\\d+)') \
             AND (`col4` < '4') AND (`col5` BETWEEN '123' AND '456'))"
        );
    }

    #[test]
    fn test_logic_without_operands_renders_nothing() {
        assert_eq!(mysql(&Criteria::and(vec![])), "");
    }

    #[test]
    fn test_in_sequence() {
        assert_eq!(
            mysql(&Criteria::is_in("column", vec![1, 2, 3])),
            "`column` IN (1, 2, 3)"
        );
    }

    #[test]
    fn test_in_scalar() {
        assert_eq!(
            mysql(&Criteria::is_in("column", "string")),
            "`column` IN (string)"
        );
    }

    #[test]
    fn test_in_subquery() {
        let sub = SelectBuilder::new().select("id").from("users").build();
        assert_eq!(
            mysql(&Criteria::is_in("id", sub)),
            "`id` IN (SELECT id FROM users)"
        );
    }

    #[test]
    fn test_equal_subquery() {
        let sub = SelectBuilder::new().select("MAX(id)").from("users").build();
        assert_eq!(
            mysql(&Criteria::equal("id", sub)),
            "`id` = (SELECT MAX(id) FROM users)"
        );
    }

    #[test]
    fn test_in_subquery_requires_a_from_source() {
        let sub = SelectBuilder::new().build();
        let criteria = Criteria::is_in("id", sub);
        assert!(render_criteria(&criteria, &MySql, &PassThrough).is_err());
    }

    #[test]
    fn test_postgres_identifier_quoting() {
        let criteria = Criteria::equal("col", 1);
        let sql = render_criteria(&criteria, &Postgres, &PassThrough).expect("render criteria");
        assert_eq!(sql, r#""col" = '1'"#);
    }

    #[test]
    fn test_logic_macros() {
        let combined = crate::or![
            Criteria::equal("a", 1),
            crate::and![Criteria::equal("b", 2), Criteria::equal("c", 3)],
        ];
        assert_eq!(
            mysql(&combined),
            "(`a` = '1') OR ((`b` = '2') AND (`c` = '3'))"
        );
    }
}
