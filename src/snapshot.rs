//! Read-only view of live terminal state consumed at render time
//!
//! The renderer never reaches into the emulator directly; it reads a
//! [`StateSnapshot`] obtained fresh per refresh, which keeps rendering a
//! pure function of its two inputs.

use chrono::NaiveTime;

/// A cell position in the snapshot provider's native coordinates.
///
/// The renderer formats these numbers as-is and never renumbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellLocation {
    pub line: i32,
    pub column: i32,
}

impl CellLocation {
    pub fn new(line: i32, column: i32) -> Self {
        Self { line, column }
    }
}

/// Terminal hardware level reported by the emulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VtType {
    Vt100,
    Vt220,
    Vt240,
    Vt320,
    Vt420,
    Vt510,
    Vt520,
    Vt525,
}

impl std::fmt::Display for VtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VtType::Vt100 => "VT100",
            VtType::Vt220 => "VT220",
            VtType::Vt240 => "VT240",
            VtType::Vt320 => "VT320",
            VtType::Vt420 => "VT420",
            VtType::Vt510 => "VT510",
            VtType::Vt520 => "VT520",
            VtType::Vt525 => "VT525",
        };
        write!(f, "{}", name)
    }
}

/// Vi-style input mode of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Insert,
    Normal,
    Visual,
    VisualLine,
    VisualBlock,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InputMode::Insert => "INSERT",
            InputMode::Normal => "NORMAL",
            InputMode::Visual => "VISUAL",
            InputMode::VisualLine => "VISUAL LINE",
            InputMode::VisualBlock => "VISUAL BLOCK",
        };
        write!(f, "{}", name)
    }
}

/// Read-only accessors over live terminal state.
///
/// Implementations must be cheap, non-blocking, and side-effect free; the
/// renderer may call any accessor any number of times per render.
pub trait StateSnapshot {
    /// Current screen cursor position, native numbering.
    fn cursor_position(&self) -> CellLocation;

    /// Current mouse position, native numbering.
    fn mouse_position(&self) -> CellLocation;

    /// The window title as last set by the application.
    fn window_title(&self) -> &str;

    /// The emulated terminal hardware level.
    fn terminal_id(&self) -> VtType;

    /// Local wall clock time at the moment the snapshot was taken.
    fn local_time(&self) -> NaiveTime;

    /// The active input mode.
    fn input_mode(&self) -> InputMode;

    /// The live search input, empty when no search is active.
    fn search_text(&self) -> &str;

    /// Hyperlink target of the cell under the cursor, if any.
    fn hyperlink_at_cursor(&self) -> Option<&str>;

    /// Grapheme cluster displayed in the cell under the cursor.
    fn cell_text_under_cursor(&self) -> &str;

    /// SGR parameter string describing the cell under the cursor.
    fn cell_sgr_under_cursor(&self) -> &str;
}

/// An owned snapshot with fixed values.
///
/// Used by the CLI demo and by tests; a terminal emulator would instead
/// implement [`StateSnapshot`] over its own state.
#[derive(Debug, Clone)]
pub struct StaticSnapshot {
    pub cursor: CellLocation,
    pub mouse: CellLocation,
    pub title: String,
    pub terminal_id: VtType,
    pub time: NaiveTime,
    pub input_mode: InputMode,
    pub search_text: String,
    pub hyperlink: Option<String>,
    pub cell_text: String,
    pub cell_sgr: String,
}

impl Default for StaticSnapshot {
    fn default() -> Self {
        Self {
            cursor: CellLocation::new(1, 1),
            mouse: CellLocation::new(1, 1),
            title: "bash".to_string(),
            terminal_id: VtType::Vt525,
            time: NaiveTime::default(),
            input_mode: InputMode::Insert,
            search_text: String::new(),
            hyperlink: None,
            cell_text: " ".to_string(),
            cell_sgr: "0".to_string(),
        }
    }
}

impl StateSnapshot for StaticSnapshot {
    fn cursor_position(&self) -> CellLocation {
        self.cursor
    }

    fn mouse_position(&self) -> CellLocation {
        self.mouse
    }

    fn window_title(&self) -> &str {
        &self.title
    }

    fn terminal_id(&self) -> VtType {
        self.terminal_id
    }

    fn local_time(&self) -> NaiveTime {
        self.time
    }

    fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    fn search_text(&self) -> &str {
        &self.search_text
    }

    fn hyperlink_at_cursor(&self) -> Option<&str> {
        self.hyperlink.as_deref()
    }

    fn cell_text_under_cursor(&self) -> &str {
        &self.cell_text
    }

    fn cell_sgr_under_cursor(&self) -> &str {
        &self.cell_sgr
    }
}
