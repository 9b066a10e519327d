//! Defines the `Handler` trait for backend-specific linearization details.

use crate::{
    ast::expr::Expr,
    renderer::{Render, Renderer},
};
use model::core::value::Value;
use tracing::trace;

/// Backend capabilities consulted while an expression is linearised.
///
/// A handler carries the placeholder counter for one logical query, so a
/// single instance must not be shared by two in-flight renders. Construct a
/// fresh one (or call the backend's reset) when numbering has to restart.
pub trait Handler {
    /// Advances the placeholder counter by one and appends the new
    /// placeholder token to `sql`.
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    fn next_placeholder(&mut self, sql: &mut String);

    /// Converts a sequence into the single argument the backend binds for
    /// array comparisons such as `= ANY($1)`.
    fn wrap_slice(&self, values: &[Value]) -> Value;

    /// The number of placeholders handed out so far by this handler.
    fn position(&self) -> u64;

    /// Returns the name of the backend (e.g., "PostgreSQL").
    fn name(&self) -> &'static str;
}

/// Entry point turning an expression into query text plus arguments.
///
/// Implemented for every [`Handler`], boxed handlers included.
pub trait SqlHandler: Handler {
    /// Renders `expr` after whatever `sql` and `params` already hold.
    ///
    /// Existing contents are kept and placeholder numbering continues from
    /// the handler's current counter.
    fn to_sql(&mut self, expr: &Expr, sql: String, params: Vec<Value>) -> (String, Vec<Value>);
}

impl<H: Handler + ?Sized> SqlHandler for H {
    fn to_sql(&mut self, expr: &Expr, sql: String, params: Vec<Value>) -> (String, Vec<Value>) {
        let backend = self.name();
        let existing = params.len();

        let mut renderer = Renderer::with_buffer(self, sql, params);
        expr.render(&mut renderer);
        let (sql, params) = renderer.finish();

        trace!(
            backend,
            appended = params.len() - existing,
            position = self.position(),
            "linearised expression"
        );
        (sql, params)
    }
}

/// Numbered `$n` placeholders with sequences bound as arrays.
#[derive(Debug, Clone, Default)]
pub struct Postgres {
    idx: u64,
}

impl Postgres {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler whose first placeholder is `$idx + 1`, for appending to a
    /// fragment that already binds `$1..=$idx`.
    pub fn starting_at(idx: u64) -> Self {
        Self { idx }
    }

    pub fn reset(&mut self) {
        self.idx = 0;
    }
}

impl Handler for Postgres {
    fn next_placeholder(&mut self, sql: &mut String) {
        self.idx += 1;
        sql.push('$');
        sql.push_str(&self.idx.to_string());
    }

    fn wrap_slice(&self, values: &[Value]) -> Value {
        Value::Array(values.to_vec())
    }

    /// The number of the last `$n` emitted, `0` if none.
    fn position(&self) -> u64 {
        self.idx
    }

    fn name(&self) -> &'static str {
        "PostgreSQL"
    }
}
