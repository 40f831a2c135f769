//! Segment parser: template text to an ordered list of display items
//!
//! Drives the fragment tokenizer and the item resolver over a full
//! template string. Parsing is done once per template change; the
//! resulting [`Segment`] is then rendered repeatedly.

use crate::definitions::{Item, Segment};
use crate::error::ParseError;
use crate::parser::lexer::{self, Fragment};
use crate::parser::resolver;

/// Parse a template string into a segment.
///
/// Literal fragments become [`Text`] items with their exact captured
/// content; unrecognized placeholders contribute nothing; a placeholder
/// missing a required attribute records a diagnostic. All diagnostics are
/// accumulated across the whole template and the parse fails as a whole if
/// there is at least one, so the author sees every problem in one pass.
///
/// [`Text`]: crate::definitions::ItemKind::Text
pub fn parse(text: &str) -> Result<Segment, Vec<ParseError>> {
    let mut items = Vec::new();
    let mut errors = Vec::new();

    for (fragment, span) in lexer::tokenize(text) {
        match fragment {
            Fragment::Literal(text) => items.push(Item::text(text)),
            Fragment::Placeholder(placeholder) => {
                match resolver::resolve(&placeholder, &span) {
                    Ok(Some(item)) => items.push(item),
                    Ok(None) => {}
                    Err(error) => errors.push(error),
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(Segment::new(items))
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::ItemKind;

    #[test]
    fn test_diagnostics_accumulate() {
        let errors = parse("{Search} {Clock} {Shell} {Text}")
            .expect_err("three placeholders are malformed");
        assert_eq!(errors.len(), 3);
        let attributes: Vec<_> = errors
            .iter()
            .map(|e| match e {
                ParseError::MissingAttribute { attribute, .. } => *attribute,
            })
            .collect();
        assert_eq!(attributes, vec!["prompt", "command", "text"]);
    }

    #[test]
    fn test_diagnostic_span_points_at_fragment() {
        let template = "ok {Shell} ok";
        let errors = parse(template).expect_err("missing command");
        assert_eq!(*errors[0].span(), 3..10);
        assert_eq!(&template[errors[0].span().clone()], "{Shell}");
    }

    #[test]
    fn test_unrecognized_between_valid_items() {
        let segment = parse("{Clock}{Bogus}{VTType}").expect("should parse");
        let kinds: Vec<_> = segment.items().iter().map(|i| &i.kind).collect();
        assert_eq!(kinds, vec![&ItemKind::Clock, &ItemKind::VtType]);
    }

    #[test]
    fn test_empty_template_yields_empty_segment() {
        let segment = parse("").expect("should parse");
        assert!(segment.is_empty());
    }
}
