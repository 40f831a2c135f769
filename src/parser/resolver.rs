//! Maps placeholder fragments to typed display items
//!
//! Dispatch is by exact, case-sensitive name against a closed vocabulary.
//! Unknown names resolve to `Ok(None)` and are dropped by the segment
//! parser; a known name missing a required attribute is a malformed
//! template and yields a [`ParseError`].

use crate::definitions::{Color, Item, ItemKind, Styles};
use crate::error::{ParseError, Span};
use crate::parser::lexer::Placeholder;

/// Resolve one placeholder to a display item.
///
/// `Ok(None)` means the name (or an ambiguous `Cell` without a
/// disambiguating flag) is not recognized; it is not an error.
pub fn resolve(placeholder: &Placeholder, span: &Span) -> Result<Option<Item>, ParseError> {
    let kind = match placeholder.name.as_str() {
        "AnsiCursorLocation" => ItemKind::AnsiCursorLocation,
        "AppTitle" => ItemKind::AppTitle,
        "Cell" => {
            // Flag priority: SGR, then UTF-32, then UTF-8.
            if placeholder.flags.contains("SGR") {
                ItemKind::CellSgr
            } else if placeholder.flags.contains("UTF-32") {
                ItemKind::CellTextUtf32
            } else if placeholder.flags.contains("UTF-8") {
                ItemKind::CellTextUtf8
            } else {
                return Ok(None);
            }
        }
        "Clock" => ItemKind::Clock,
        "Hyperlink" => ItemKind::Hyperlink,
        "InputMode" => ItemKind::InputMode,
        "MousePosition" => ItemKind::MouseCursorLocation,
        "Search" => ItemKind::Search {
            prompt: require(placeholder, "prompt", span)?,
        },
        "Shell" => ItemKind::ShellCommand {
            command: require(placeholder, "command", span)?,
        },
        "Text" => ItemKind::Text {
            text: require(placeholder, "text", span)?,
        },
        "VTType" => ItemKind::VtType,
        _ => return Ok(None),
    };

    Ok(Some(Item::new(kind, extract_styles(placeholder))))
}

/// Validated attribute lookup.
fn require(
    placeholder: &Placeholder,
    attribute: &'static str,
    span: &Span,
) -> Result<String, ParseError> {
    placeholder
        .attributes
        .get(attribute)
        .cloned()
        .ok_or_else(|| ParseError::MissingAttribute {
            placeholder: placeholder.name.clone(),
            attribute,
            span: span.clone(),
        })
}

/// Collect presentation metadata from placeholder flags and attributes.
///
/// Unknown flags (including the `Cell` disambiguators) are ignored here;
/// style extraction never fails.
fn extract_styles(placeholder: &Placeholder) -> Styles {
    let mut styles = Styles::default();

    for flag in &placeholder.flags {
        match flag.as_str() {
            "Bold" => styles.flags.bold = true,
            "Italic" => styles.flags.italic = true,
            "Underline" => styles.flags.underline = true,
            "Blinking" => styles.flags.blinking = true,
            _ => {}
        }
    }

    if let Some(value) = placeholder.attributes.get("Color") {
        styles.foreground = Some(Color::parse(value));
    }
    if let Some(value) = placeholder.attributes.get("BackgroundColor") {
        styles.background = Some(Color::parse(value));
    }

    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_named(name: &str) -> Result<Option<Item>, ParseError> {
        resolve(&Placeholder::named(name), &(0..0))
    }

    fn kind_of(result: Result<Option<Item>, ParseError>) -> ItemKind {
        result.expect("should resolve").expect("should be recognized").kind
    }

    #[test]
    fn test_simple_names() {
        assert_eq!(
            kind_of(resolve_named("AnsiCursorLocation")),
            ItemKind::AnsiCursorLocation
        );
        assert_eq!(kind_of(resolve_named("AppTitle")), ItemKind::AppTitle);
        assert_eq!(kind_of(resolve_named("Clock")), ItemKind::Clock);
        assert_eq!(kind_of(resolve_named("Hyperlink")), ItemKind::Hyperlink);
        assert_eq!(kind_of(resolve_named("InputMode")), ItemKind::InputMode);
        assert_eq!(
            kind_of(resolve_named("MousePosition")),
            ItemKind::MouseCursorLocation
        );
        assert_eq!(kind_of(resolve_named("VTType")), ItemKind::VtType);
    }

    #[test]
    fn test_name_matching_is_case_sensitive() {
        assert_eq!(resolve_named("clock").unwrap(), None);
        assert_eq!(resolve_named("CLOCK").unwrap(), None);
    }

    #[test]
    fn test_unknown_name_is_not_an_error() {
        assert_eq!(resolve_named("Bogus").unwrap(), None);
    }

    #[test]
    fn test_cell_flag_priority() {
        let mut placeholder = Placeholder::named("Cell");
        placeholder.flags.insert("UTF-8".to_string());
        placeholder.flags.insert("UTF-32".to_string());
        placeholder.flags.insert("SGR".to_string());
        // SGR wins over both text encodings.
        assert_eq!(
            kind_of(resolve(&placeholder, &(0..0))),
            ItemKind::CellSgr
        );

        placeholder.flags.remove("SGR");
        assert_eq!(
            kind_of(resolve(&placeholder, &(0..0))),
            ItemKind::CellTextUtf32
        );

        placeholder.flags.remove("UTF-32");
        assert_eq!(
            kind_of(resolve(&placeholder, &(0..0))),
            ItemKind::CellTextUtf8
        );
    }

    #[test]
    fn test_cell_without_flags_is_unrecognized() {
        assert_eq!(resolve_named("Cell").unwrap(), None);
    }

    #[test]
    fn test_search_requires_prompt() {
        let error = resolve(&Placeholder::named("Search"), &(3..11))
            .expect_err("missing prompt is malformed");
        assert_eq!(
            error,
            ParseError::MissingAttribute {
                placeholder: "Search".to_string(),
                attribute: "prompt",
                span: 3..11,
            }
        );
    }

    #[test]
    fn test_shell_requires_command() {
        let error = resolve(&Placeholder::named("Shell"), &(0..7))
            .expect_err("missing command is malformed");
        assert!(matches!(
            error,
            ParseError::MissingAttribute { attribute: "command", .. }
        ));
    }

    #[test]
    fn test_text_requires_text() {
        let error = resolve(&Placeholder::named("Text"), &(0..6))
            .expect_err("missing text is malformed");
        assert!(matches!(
            error,
            ParseError::MissingAttribute { attribute: "text", .. }
        ));
    }

    #[test]
    fn test_search_with_prompt() {
        let mut placeholder = Placeholder::named("Search");
        placeholder
            .attributes
            .insert("prompt".to_string(), "find: ".to_string());
        assert_eq!(
            kind_of(resolve(&placeholder, &(0..0))),
            ItemKind::Search {
                prompt: "find: ".to_string()
            }
        );
    }

    #[test]
    fn test_styles_from_flags_and_attributes() {
        let mut placeholder = Placeholder::named("Clock");
        placeholder.flags.insert("Bold".to_string());
        placeholder.flags.insert("Italic".to_string());
        placeholder
            .attributes
            .insert("Color".to_string(), "#FFFF00".to_string());

        let item = resolve(&placeholder, &(0..0))
            .expect("should resolve")
            .expect("should be recognized");
        assert!(item.styles.flags.bold);
        assert!(item.styles.flags.italic);
        assert!(!item.styles.flags.underline);
        assert_eq!(item.styles.foreground, Some(Color::Rgb(0xff, 0xff, 0x00)));
        assert_eq!(item.styles.background, None);
    }

    #[test]
    fn test_background_color_attribute() {
        let mut placeholder = Placeholder::named("AppTitle");
        placeholder
            .attributes
            .insert("BackgroundColor".to_string(), "Yellow".to_string());

        let item = resolve(&placeholder, &(0..0))
            .expect("should resolve")
            .expect("should be recognized");
        assert_eq!(
            item.styles.background,
            Some(Color::Named("Yellow".to_string()))
        );
    }
}
