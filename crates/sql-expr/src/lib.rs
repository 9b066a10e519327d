//! Linearises predicate trees into parameterised query fragments.
//!
//! An [`Expr`] is rendered through a [`Handler`], which decides the
//! placeholder syntax and how sequence values are bound. The result is the
//! query text and the arguments in placeholder order:
//!
//! ```
//! use model::core::value::Value;
//! use sql_expr::{Expr, Postgres, SqlHandler};
//!
//! let expr = Expr::And(vec![
//!     Expr::Eq { ident: "tenant_id".into(), value: Value::Int(7) },
//!     Expr::EqAny { ident: "status".into(), values: vec!["open".into(), "held".into()] },
//! ]);
//!
//! let (sql, params) = Postgres::new().to_sql(&expr, String::new(), Vec::new());
//! assert_eq!(sql, "(tenant_id = $1 AND status = ANY($2))");
//! assert_eq!(params.len(), 2);
//! ```

pub mod ast;
pub mod backend;
pub mod handler;
pub mod renderer;

pub use ast::expr::Expr;
pub use backend::{Backend, BackendError};
pub use handler::{Handler, Postgres, SqlHandler};
pub use renderer::{Render, Renderer};
