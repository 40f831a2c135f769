//! Serializes a segment against a live state snapshot
//!
//! Rendering is total over any segment the parser can produce: every item
//! kind has a formatting rule and there is no error path. The snapshot is
//! passed in explicitly so that rendering stays a pure function of its two
//! inputs; nothing is mutated and nothing beyond the output string is
//! allocated.

use std::fmt::Write;

use crate::definitions::{Item, ItemKind, Segment};
use crate::snapshot::StateSnapshot;

/// Render a segment to its displayed string.
///
/// Output is the concatenation, in segment order, of each item's
/// rendering. An empty segment renders to the empty string.
pub fn render(segment: &Segment, snapshot: &dyn StateSnapshot) -> String {
    let mut out = String::new();
    for item in segment {
        render_item(item, snapshot, &mut out);
    }
    out
}

fn render_item(item: &Item, snapshot: &dyn StateSnapshot, out: &mut String) {
    // Writing into a String cannot fail.
    match &item.kind {
        ItemKind::AnsiCursorLocation => {
            let position = snapshot.cursor_position();
            let _ = write!(out, "{}:{}", position.line, position.column);
        }
        ItemKind::MouseCursorLocation => {
            let position = snapshot.mouse_position();
            let _ = write!(out, "{}:{}", position.line, position.column);
        }
        ItemKind::AppTitle => out.push_str(snapshot.window_title()),
        ItemKind::VtType => {
            let _ = write!(out, "{}", snapshot.terminal_id());
        }
        ItemKind::Clock => {
            let _ = write!(out, "{}", snapshot.local_time().format("%H:%M"));
        }
        ItemKind::InputMode => {
            let _ = write!(out, "{}", snapshot.input_mode());
        }
        ItemKind::Search { prompt } => {
            out.push_str(prompt);
            out.push_str(snapshot.search_text());
        }
        ItemKind::Hyperlink => {
            if let Some(uri) = snapshot.hyperlink_at_cursor() {
                out.push_str(uri);
            }
        }
        ItemKind::CellTextUtf8 => out.push_str(snapshot.cell_text_under_cursor()),
        ItemKind::CellTextUtf32 => {
            for (i, scalar) in snapshot.cell_text_under_cursor().chars().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "U+{:04X}", scalar as u32);
            }
        }
        ItemKind::CellSgr => out.push_str(snapshot.cell_sgr_under_cursor()),
        ItemKind::ShellCommand { command } => out.push_str(command),
        ItemKind::Text { text } => out.push_str(text),
    }
}
