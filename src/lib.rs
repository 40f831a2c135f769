//! vt-statusline - status line templating for terminal emulators
//!
//! This library parses user-authored status line templates like
//! `"{AppTitle} | {VTType} | {Clock} {AnsiCursorLocation}"` into ordered
//! sequences of typed display items, and renders those sequences against a
//! read-only snapshot of live terminal state.
//!
//! # Example
//!
//! ```rust
//! use vt_statusline::{parse, render, StaticSnapshot};
//!
//! let segment = parse("{AppTitle} {AnsiCursorLocation}").unwrap();
//! let line = render(&segment, &StaticSnapshot::default());
//! assert_eq!(line, "bash 1:1");
//! ```
//!
//! # Lifecycle
//!
//! A [`Segment`] is built once per template change (typically at
//! configuration load or reload) and rendered once per refresh against a
//! freshly obtained [`StateSnapshot`]. Segments are immutable and
//! `Send + Sync`; a composer that reloads templates at runtime publishes
//! the new segment by swapping an `Arc<Segment>`, so an in-flight render
//! only ever sees one complete segment.

pub mod config;
pub mod definitions;
pub mod error;
pub mod parser;
pub mod renderer;
pub mod snapshot;

pub use config::{ConfigError, StatusLineConfig};
pub use definitions::{
    Color, Item, ItemKind, Segment, StatusLineDefinition, StyleFlags, Styles,
};
pub use error::ParseError;
pub use parser::parse;
pub use renderer::render;
pub use snapshot::{CellLocation, InputMode, StateSnapshot, StaticSnapshot, VtType};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_segment_is_send_and_sync() {
        assert_send_sync::<Segment>();
        assert_send_sync::<StatusLineDefinition>();
    }

    #[test]
    fn test_parse_and_render_round() {
        let segment = parse("{VTType} ready").expect("should parse");
        let line = render(&segment, &StaticSnapshot::default());
        assert_eq!(line, "VT525 ready");
    }
}
