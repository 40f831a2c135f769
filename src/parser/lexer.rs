//! Fragment tokenizer for status line templates using logos
//!
//! Splits template text like
//! `"{Clock:Bold,Color=#FFFF00} | {VTType} | {InputMode}"` into an ordered
//! list of fragments: literal text spans and `{Name[:flags,key=value,...]}`
//! placeholders. Each fragment carries its byte span for diagnostics.

use std::collections::{HashMap, HashSet};

use logos::Logos;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
enum RawToken {
    // A complete placeholder, no nesting.
    #[regex(r"\{[^{}]*\}", |lex| lex.slice().to_string())]
    Placeholder(String),

    // Literal text between placeholders.
    #[regex(r"[^{]+", |lex| lex.slice().to_string())]
    Text(String),

    // An unterminated `{` falls through as literal text.
    #[token("{")]
    StrayBrace,
}

/// One parsed chunk of template text.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Literal text, passed through verbatim.
    Literal(String),
    /// A `{Name[:flags,key=value,...]}` placeholder.
    Placeholder(Placeholder),
}

/// The parts of a placeholder: its name, bare flag tokens, and `key=value`
/// attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Placeholder {
    pub name: String,
    pub flags: HashSet<String>,
    pub attributes: HashMap<String, String>,
}

impl Placeholder {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Tokenize template text into ordered fragments with spans.
///
/// Adjacent literal pieces (e.g. around a stray `{`) are coalesced into a
/// single fragment, so a template with no placeholder syntax always yields
/// exactly one literal fragment.
pub fn tokenize(input: &str) -> Vec<(Fragment, Span)> {
    let mut fragments: Vec<(Fragment, Span)> = Vec::new();

    for (token, span) in RawToken::lexer(input).spanned() {
        let Ok(token) = token else {
            continue;
        };
        match token {
            RawToken::Placeholder(raw) => {
                let inner = &raw[1..raw.len() - 1];
                fragments.push((Fragment::Placeholder(parse_placeholder(inner)), span));
            }
            RawToken::Text(text) => push_literal(&mut fragments, &text, span),
            RawToken::StrayBrace => push_literal(&mut fragments, "{", span),
        }
    }

    fragments
}

fn push_literal(fragments: &mut Vec<(Fragment, Span)>, text: &str, span: Span) {
    if let Some((Fragment::Literal(previous), previous_span)) = fragments.last_mut() {
        previous.push_str(text);
        previous_span.end = span.end;
        return;
    }
    fragments.push((Fragment::Literal(text.to_string()), span));
}

/// Split the inside of a placeholder into name, flags, and attributes.
///
/// Everything before the first `:` is the name; the rest is a
/// comma-separated list where parts containing `=` are attributes and bare
/// parts are flags. Empty parts contribute nothing.
fn parse_placeholder(inner: &str) -> Placeholder {
    let (name, rest) = match inner.split_once(':') {
        Some((name, rest)) => (name, Some(rest)),
        None => (inner, None),
    };

    let mut placeholder = Placeholder::named(name);

    if let Some(rest) = rest {
        for part in rest.split(',') {
            if part.is_empty() {
                continue;
            }
            match part.split_once('=') {
                Some((key, value)) => {
                    placeholder
                        .attributes
                        .insert(key.to_string(), value.to_string());
                }
                None => {
                    placeholder.flags.insert(part.to_string());
                }
            }
        }
    }

    placeholder
}
