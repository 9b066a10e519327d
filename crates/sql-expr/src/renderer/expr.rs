use crate::{
    ast::expr::{ComparisonOp, Expr, LogicalOp, SetOp},
    handler::Handler,
    renderer::{Render, Renderer},
};
use model::core::value::Value;

impl Render for Expr {
    fn render<H: Handler + ?Sized>(&self, r: &mut Renderer<'_, H>) {
        match self {
            Expr::Eq { ident, value } => render_comparison(r, ident, ComparisonOp::Eq, value),
            Expr::Neq { ident, value } => render_comparison(r, ident, ComparisonOp::NotEq, value),
            Expr::Lt { ident, value } => render_comparison(r, ident, ComparisonOp::Lt, value),
            Expr::EqAny { ident, values } => render_set(r, ident, SetOp::EqAny, values),
            Expr::NeqAll { ident, values } => render_set(r, ident, SetOp::NeqAll, values),
            Expr::IsNull { ident } => {
                r.sql.push_str(ident);
                r.sql.push_str(" IS NULL");
            }
            Expr::IsNotNull { ident } => {
                r.sql.push_str(ident);
                r.sql.push_str(" IS NOT NULL");
            }
            Expr::And(children) => render_group(r, LogicalOp::And, children),
            Expr::Or(children) => render_group(r, LogicalOp::Or, children),
        }
    }
}

fn render_comparison<H: Handler + ?Sized>(
    r: &mut Renderer<'_, H>,
    ident: &str,
    op: ComparisonOp,
    value: &Value,
) {
    r.sql.push_str(ident);
    r.sql.push_str(op.as_sql());
    r.add_param(value.clone());
}

fn render_set<H: Handler + ?Sized>(
    r: &mut Renderer<'_, H>,
    ident: &str,
    op: SetOp,
    values: &[Value],
) {
    r.sql.push_str(ident);
    r.sql.push_str(op.as_sql());
    r.add_slice_param(values);
    r.sql.push(')');
}

fn render_group<H: Handler + ?Sized>(r: &mut Renderer<'_, H>, op: LogicalOp, children: &[Expr]) {
    r.sql.push('(');
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(op.as_sql());
        }
        child.render(r);
    }
    r.sql.push(')');
}
