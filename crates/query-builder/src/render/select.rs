use crate::ast::select::{ItemValue, JoinClause, ListItem, Projection, Select, SourceList};
use crate::error::{QueryError, Result};
use crate::render::{Render, Renderer};

impl Render for Select {
    fn render(&self, r: &mut Renderer) -> Result<()> {
        // 1. SELECT [DISTINCT] <projection>
        r.sql.push_str("SELECT ");
        if self.distinct {
            r.sql.push_str("DISTINCT ");
        }
        match &self.projection {
            Projection::Wildcard => r.sql.push('*'),
            Projection::Raw(text) if text.is_empty() => r.sql.push('*'),
            Projection::Raw(text) => r.sql.push_str(text),
            Projection::Items(items) => render_items(items, r)?,
        }

        // 2. FROM — mandatory; a statement must name a source
        let from = self.from.as_ref().ok_or(QueryError::MissingFrom)?;
        r.sql.push_str(" FROM ");
        match from {
            SourceList::Raw(text) => r.sql.push_str(text),
            SourceList::Items(items) => render_items(items, r)?,
        }

        // 3. JOIN
        for join in &self.joins {
            r.sql.push(' ');
            join.render(r)?;
        }

        // 4. WHERE
        if let Some(condition) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            condition.render(r)?;
        }

        // 5. GROUP BY (raw text)
        if let Some(group_by) = &self.group_by {
            r.sql.push_str(" GROUP BY ");
            r.sql.push_str(group_by);
        }

        // 6. HAVING — renders the having tree
        if let Some(condition) = &self.having {
            r.sql.push_str(" HAVING ");
            condition.render(r)?;
        }

        // 7. ORDER BY (raw text)
        if let Some(order_by) = &self.order_by {
            r.sql.push_str(" ORDER BY ");
            r.sql.push_str(order_by);
        }

        // 8. LIMIT — `LIMIT offset, limit` when an offset is present
        if let Some(limit) = self.limit {
            r.sql.push_str(" LIMIT ");
            if let Some(offset) = self.offset {
                r.sql.push_str(&offset.to_string());
                r.sql.push_str(", ");
            }
            r.sql.push_str(&limit.to_string());
        }

        Ok(())
    }
}

/// Shared by the select list and the from list: identifiers are quoted,
/// sub-selects render recursively in parentheses, aliased entries append
/// ` AS <quoted-alias>`, entries join with `, `.
fn render_items(items: &[ListItem], r: &mut Renderer) -> Result<()> {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(", ");
        }
        match &item.value {
            ItemValue::Name(name) => r.push_ident(name),
            ItemValue::Subquery(query) => {
                r.sql.push('(');
                query.render(r)?;
                r.sql.push(')');
            }
        }
        if let Some(alias) = &item.alias {
            r.sql.push_str(" AS ");
            r.push_ident(alias);
        }
    }
    Ok(())
}

impl Render for JoinClause {
    fn render(&self, r: &mut Renderer) -> Result<()> {
        r.sql.push_str(self.kind.as_sql());
        r.sql.push_str(" JOIN ");
        r.push_ident(&self.table);
        r.sql.push_str(" ON ");
        r.sql.push_str(&self.on);
        Ok(())
    }
}
