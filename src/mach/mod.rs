/*!
## Rust Machine Module

This Rust module executes parsed lines against a shared context and
captures what they print.

*/

mod context;
mod interpreter;
mod printable;
mod program;
mod render;
mod runtime;

pub use context::Context;
pub use interpreter::Interpreter;
pub use printable::Printable;
pub use program::Program;
pub use render::render;
pub use runtime::Runtime;
