use std::fmt;

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

/// Formatting kind of a [`Span`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl Span {
    pub fn kind(&self) -> SpanKind {
        match self {
            Span::Text(_) => SpanKind::Plain,
            Span::Bold(_) => SpanKind::Bold,
            Span::Italic(_) => SpanKind::Italic,
            Span::Code(_) => SpanKind::Code,
            Span::Link { .. } => SpanKind::Link,
            Span::Image { .. } => SpanKind::Image,
        }
    }

    /// The visible text of the span. For images this is the alt text.
    pub fn text(&self) -> &str {
        match self {
            Span::Text(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }

    /// Target of a link or image; `None` for every other kind.
    pub fn url(&self) -> Option<&str> {
        match self {
            Span::Link { url, .. } | Span::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Span::Text(_))
    }
}

/// Block-level kinds recognised by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Quote,
    Code,
    UnorderedList,
    OrderedList,
    Heading(u8),
}

pub const MAX_HEADING_LEVEL: u8 = 6;

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Paragraph => f.write_str("paragraph"),
            BlockKind::Quote => f.write_str("quote"),
            BlockKind::Code => f.write_str("code"),
            BlockKind::UnorderedList => f.write_str("unordered list"),
            BlockKind::OrderedList => f.write_str("ordered list"),
            BlockKind::Heading(level) => write!(f, "heading level {level}"),
        }
    }
}
