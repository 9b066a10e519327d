//! Defines the core rendering trait and context for linearising expressions.

use crate::handler::Handler;
use model::core::value::Value;

pub mod expr;

/// A trait for any AST node that can be linearised into query text.
pub trait Render {
    fn render<H: Handler + ?Sized>(&self, renderer: &mut Renderer<'_, H>);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the query text and the arguments, and borrows the handler
/// exclusively so placeholders stay numbered in emission order.
pub struct Renderer<'a, H: Handler + ?Sized> {
    pub sql: String,
    pub params: Vec<Value>,
    handler: &'a mut H,
}

impl<'a, H: Handler + ?Sized> Renderer<'a, H> {
    pub fn new(handler: &'a mut H) -> Self {
        Self::with_buffer(handler, String::new(), Vec::new())
    }

    /// Starts from existing text and arguments; rendering appends to both.
    pub fn with_buffer(handler: &'a mut H, sql: String, params: Vec<Value>) -> Self {
        Self {
            sql,
            params,
            handler,
        }
    }

    /// Consumes the renderer and returns the final text and arguments.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// Emits the next placeholder and binds `value` to it.
    pub fn add_param(&mut self, value: Value) {
        self.handler.next_placeholder(&mut self.sql);
        self.params.push(value);
    }

    /// Emits the next placeholder and binds the whole of `values` to it as
    /// one argument wrapped by the handler.
    pub fn add_slice_param(&mut self, values: &[Value]) {
        self.handler.next_placeholder(&mut self.sql);
        let wrapped = self.handler.wrap_slice(values);
        self.params.push(wrapped);
    }
}
