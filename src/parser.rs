use log::{debug, trace};

use crate::block::{BlockKind, MAX_HEADING_LEVEL, Span};
use crate::config::{BlockConfig, Config};
use crate::error::{Error, Result};
use crate::html::Node;
use crate::inline;

/// Split markdown into trimmed, non-empty blocks separated by blank lines.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block using the default ordered-list heuristic.
pub fn classify(block: &str) -> BlockKind {
    classify_with_config(block, &BlockConfig::default())
}

pub fn classify_with_config(block: &str, config: &BlockConfig) -> BlockKind {
    let hashes = block.chars().take_while(|&c| c == '#').count();
    if hashes > 0 {
        let level = hashes.min(MAX_HEADING_LEVEL as usize) as u8;
        return BlockKind::Heading(level);
    }

    if block.starts_with('`') {
        BlockKind::Code
    } else if block.starts_with('>') {
        BlockKind::Quote
    } else if block.starts_with("- ") {
        BlockKind::UnorderedList
    } else if looks_ordered(block, config.ordered_marker_window) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// A leading digit with `". "` somewhere in the first `window` characters.
/// Only one- and two-digit ordinals fit in the default window of four.
fn looks_ordered(block: &str, window: usize) -> bool {
    if !block.starts_with(|c: char| c.is_ascii_digit()) {
        return false;
    }
    let head = match block.char_indices().nth(window) {
        Some((end, _)) => &block[..end],
        None => block,
    };
    head.contains(". ")
}

/// Parse markdown into a tree of HTML nodes rooted at a single branch.
pub fn convert(markdown: &str, config: &Config) -> Result<Node> {
    let blocks = split_blocks(markdown);
    debug!("converting {} blocks", blocks.len());

    let mut root = Node::branch(
        config.html.root_tag.as_str(),
        Vec::with_capacity(blocks.len()),
    );
    for block in blocks {
        let kind = classify_with_config(block, &config.blocks);
        trace!("{kind} block: {block:?}");
        root.push(block_to_node(block, kind, config)?);
    }
    Ok(root)
}

fn block_to_node(block: &str, kind: BlockKind, config: &Config) -> Result<Node> {
    let node = match kind {
        BlockKind::Paragraph => {
            Node::branch("p", inline_nodes(&collapse_whitespace(block), config)?)
        }
        BlockKind::Heading(level @ 1..=MAX_HEADING_LEVEL) => {
            let text = strip_heading(block, level);
            Node::branch(format!("h{level}"), inline_nodes(text, config)?)
        }
        BlockKind::Quote => {
            Node::branch("blockquote", inline_nodes(&strip_quote(block), config)?)
        }
        BlockKind::Code => {
            let code = Node::from(Span::Code(code_body(block).to_string()));
            Node::branch("pre", vec![code])
        }
        BlockKind::UnorderedList => {
            Node::branch("ul", list_nodes(block, unordered_marker, config)?)
        }
        BlockKind::OrderedList => {
            Node::branch("ol", list_nodes(block, ordered_marker, config)?)
        }
        BlockKind::Heading(_) => return Err(Error::UnsupportedBlockKind(kind.to_string())),
    };
    Ok(node)
}

fn inline_nodes(text: &str, config: &Config) -> Result<Vec<Node>> {
    let spans = inline::tokenize_with_config(text, &config.inline)?;
    Ok(spans.into_iter().map(Node::from).collect())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_heading(block: &str, level: u8) -> &str {
    let mut rest = block;
    for _ in 0..level {
        rest = rest.strip_prefix('#').unwrap_or(rest);
    }
    rest.trim()
}

fn strip_quote(block: &str) -> String {
    block
        .lines()
        .map(|line| line.strip_prefix('>').unwrap_or(line).trim_start())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Body of a fenced code block. The rest of the opening fence line (an info
/// string such as a language name) is dropped; trailing newlines are kept.
fn code_body(block: &str) -> &str {
    let rest = block.trim_start_matches('`');
    let body = match rest.split_once('\n') {
        Some((_info, body)) => body,
        None => rest,
    };
    body.trim_end_matches('`')
}

fn unordered_marker(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
}

fn ordered_marker(line: &str) -> Option<&str> {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

/// Group lines into list items. A marker line opens a new item; any other
/// line continues the current one.
fn list_items(block: &str, marker: fn(&str) -> Option<&str>) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for line in block.lines() {
        if let Some(content) = marker(line) {
            items.push(content.to_string());
        } else if let Some(item) = items.last_mut() {
            item.push('\n');
            item.push_str(line);
        } else {
            items.push(line.to_string());
        }
    }
    items
}

fn list_nodes(
    block: &str,
    marker: fn(&str) -> Option<&str>,
    config: &Config,
) -> Result<Vec<Node>> {
    list_items(block, marker)
        .iter()
        .map(|item| -> Result<Node> {
            Ok(Node::branch("li", inline_nodes(item.trim(), config)?))
        })
        .collect()
}

/// Text of the first line that starts with `# `.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::NoTitleHeading)
}
