//! Error types for template parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A known placeholder is missing an attribute it cannot work without,
    /// e.g. `{Search}` with no `prompt`. The template is malformed and the
    /// author has to fix it; unknown placeholder names are not an error and
    /// are dropped silently instead.
    #[error("placeholder '{placeholder}' at {span:?} is missing required attribute '{attribute}'")]
    MissingAttribute {
        placeholder: String,
        attribute: &'static str,
        span: Span,
    },
}

impl ParseError {
    /// Byte range of the offending fragment in the template text.
    pub fn span(&self) -> &Span {
        match self {
            ParseError::MissingAttribute { span, .. } => span,
        }
    }

    /// Format the error with template context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ParseError::MissingAttribute {
                placeholder,
                attribute,
                span,
            } => {
                Report::build(ReportKind::Error, filename, span.start)
                    .with_message(format!(
                        "placeholder '{}' is missing required attribute '{}'",
                        placeholder, attribute
                    ))
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!(
                                "add '{}=...' to this placeholder",
                                attribute
                            ))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
            }
        }
        String::from_utf8(buf).unwrap()
    }
}
