//! Template parsing for status line segments

pub mod lexer;
mod resolver;
mod segment;

pub use lexer::{Fragment, Placeholder, Span};
pub use resolver::resolve;
pub use segment::parse;
