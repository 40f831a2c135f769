//! Status line item definitions
//!
//! The data model produced by the segment parser and consumed by the
//! renderer: typed display items, the style metadata they carry, and the
//! three-region status line definition.

/// A color value attached to a status line item.
///
/// Either a concrete RGB triple from a `#rgb`/`#rrggbb` attribute, or a
/// named token (`Yellow`, `accent-1`) kept symbolic for a later styling
/// stage to resolve against its palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Rgb(u8, u8, u8),
    Named(String),
}

impl Color {
    /// Parse a color from placeholder attribute text.
    ///
    /// `#rgb` and `#rrggbb` become concrete RGB values; anything else is
    /// kept verbatim as a named token.
    pub fn parse(text: &str) -> Self {
        if let Some(hex) = text.strip_prefix('#') {
            match hex.len() {
                3 => {
                    if let (Ok(r), Ok(g), Ok(b)) = (
                        u8::from_str_radix(&hex[0..1], 16),
                        u8::from_str_radix(&hex[1..2], 16),
                        u8::from_str_radix(&hex[2..3], 16),
                    ) {
                        return Color::Rgb(r * 0x11, g * 0x11, b * 0x11);
                    }
                }
                6 => {
                    if let (Ok(r), Ok(g), Ok(b)) = (
                        u8::from_str_radix(&hex[0..2], 16),
                        u8::from_str_radix(&hex[2..4], 16),
                        u8::from_str_radix(&hex[4..6], 16),
                    ) {
                        return Color::Rgb(r, g, b);
                    }
                }
                _ => {}
            }
        }
        Color::Named(text.to_string())
    }
}

/// Boolean text attributes carried alongside colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleFlags {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub blinking: bool,
}

/// Presentation metadata attached to every display item.
///
/// Populated at parse time from placeholder flags and attributes
/// (`{Clock:Bold,Color=#FFFF00}`), consumed by a styling stage downstream.
/// The renderer itself never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Styles {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub flags: StyleFlags,
}

/// One resolved display item: what to show plus how to style it.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
    pub styles: Styles,
}

impl Item {
    pub fn new(kind: ItemKind, styles: Styles) -> Self {
        Self { kind, styles }
    }

    /// An unstyled literal text item, as produced for literal template spans.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Text { text: text.into() }, Styles::default())
    }
}

/// The closed set of display item kinds.
///
/// Static kinds (`Text`, `ShellCommand`, `Search`) capture their data at
/// parse time; the rest read a field of the [`StateSnapshot`] at render
/// time. Adding a kind forces every renderer match to handle it.
///
/// [`StateSnapshot`]: crate::snapshot::StateSnapshot
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    /// Cursor position as `line:column`.
    AnsiCursorLocation,
    /// The window title, verbatim.
    AppTitle,
    /// SGR parameter string of the cell under the cursor.
    CellSgr,
    /// Text of the cell under the cursor, as `U+XXXX` codepoints.
    CellTextUtf32,
    /// Text of the cell under the cursor, verbatim.
    CellTextUtf8,
    /// Local wall clock time.
    Clock,
    /// Hyperlink target of the cell under the cursor, if any.
    Hyperlink,
    /// The active input mode (`INSERT`, `NORMAL`, ...).
    InputMode,
    /// Mouse position as `line:column`.
    MouseCursorLocation,
    /// Search prompt followed by the live search text.
    Search { prompt: String },
    /// A command string captured at parse time. Displayed, never executed.
    ShellCommand { command: String },
    /// Literal text captured at parse time.
    Text { text: String },
    /// The emulated terminal hardware level, e.g. `VT525`.
    VtType,
}

/// Ordered, immutable sequence of display items forming one region of the
/// status line.
///
/// Built once per template change, then rendered repeatedly. Item order is
/// rendering order. An empty segment renders to the empty string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Segment {
    items: Vec<Item>,
}

impl Segment {
    pub(crate) fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Segment {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The three independently parsed and rendered status line regions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusLineDefinition {
    pub left: Segment,
    pub middle: Segment,
    pub right: Segment,
}

impl StatusLineDefinition {
    /// Parse all three region templates.
    ///
    /// Diagnostics from every region are accumulated; spans in each
    /// diagnostic are relative to the region template it came from.
    pub fn parse(
        left: &str,
        middle: &str,
        right: &str,
    ) -> Result<Self, Vec<crate::error::ParseError>> {
        let mut errors = Vec::new();
        let mut region = |text: &str| match crate::parser::parse(text) {
            Ok(segment) => segment,
            Err(mut diagnostics) => {
                errors.append(&mut diagnostics);
                Segment::default()
            }
        };

        let definition = Self {
            left: region(left),
            middle: region(middle),
            right: region(right),
        };

        if errors.is_empty() {
            Ok(definition)
        } else {
            Err(errors)
        }
    }
}
