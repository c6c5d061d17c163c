use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::block::Span;
use crate::config::InlineConfig;
use crate::error::{Error, Result};

static IMAGE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// Tokenize `text` with the default delimiters.
pub fn tokenize(text: &str) -> Result<Vec<Span>> {
    tokenize_with_config(text, &InlineConfig::default())
}

/// Run the bold, italic and code delimiter passes, then images, then links.
/// Each pass only rewrites spans that are still plain, so emphasis never nests.
pub fn tokenize_with_config(text: &str, config: &InlineConfig) -> Result<Vec<Span>> {
    let spans = vec![Span::Text(text.to_string())];
    let spans = split_delimiter(spans, &config.bold, Span::Bold)?;
    let spans = split_delimiter(spans, &config.italic, Span::Italic)?;
    let spans = split_delimiter(spans, &config.code, Span::Code)?;
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Split every plain span on `delimiter`, wrapping the odd-indexed pieces
/// with `wrap`. Empty pieces produce no span.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    wrap: fn(String) -> Span,
) -> Result<Vec<Span>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let Span::Text(text) = span else {
            out.push(span);
            continue;
        };

        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() == 1 {
            out.push(Span::Text(text));
            continue;
        }
        if parts.len() % 2 == 0 {
            trace!("unbalanced {delimiter:?} in {text:?}");
            return Err(Error::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text,
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(Span::Text(part.to_string()));
            } else {
                out.push(wrap(part.to_string()));
            }
        }
    }
    Ok(out)
}

/// Extract `![alt](url)` images from plain spans.
pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_pattern(
        spans,
        |text| IMAGE_REGEX.captures(text),
        |alt, url| Span::Image { alt, url },
    )
}

/// Extract `[text](url)` links from plain spans, skipping any bracket that
/// directly follows a `!`.
pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_pattern(spans, find_link, |text, url| Span::Link { text, url })
}

fn find_link(text: &str) -> Option<Captures<'_>> {
    let mut start = 0;
    while let Some(caps) = LINK_REGEX.captures_at(text, start) {
        let at = caps.get(0)?.start();
        if !text[..at].ends_with('!') {
            return Some(caps);
        }
        // `[` is one byte, so the next candidate starts right after it.
        start = at + 1;
    }
    None
}

fn split_pattern<F, B>(spans: Vec<Span>, find: F, build: B) -> Vec<Span>
where
    F: for<'t> Fn(&'t str) -> Option<Captures<'t>>,
    B: Fn(String, String) -> Span,
{
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let Span::Text(text) = span else {
            out.push(span);
            continue;
        };

        let mut rest = text.as_str();
        while let Some(caps) = find(rest) {
            let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                break;
            };
            if whole.start() > 0 {
                out.push(Span::Text(rest[..whole.start()].to_string()));
            }
            out.push(build(label.as_str().to_string(), url.as_str().to_string()));
            rest = &rest[whole.end()..];
        }

        if rest.len() == text.len() {
            out.push(Span::Text(text));
        } else if !rest.is_empty() {
            out.push(Span::Text(rest.to_string()));
        }
    }
    out
}
