mod block;
mod config;
mod error;
mod html;
mod inline;
mod parser;

pub use block::{BlockKind, MAX_HEADING_LEVEL, Span, SpanKind};
pub use config::{BlockConfig, Config, HtmlConfig, InlineConfig};
pub use error::{ConfigError, Error, Result};
pub use html::{Attributes, Node};
pub use inline::{tokenize, tokenize_with_config};
pub use parser::{classify, classify_with_config, extract_title, split_blocks};

/// Convert markdown to a node tree using default config.
pub fn convert(markdown: &str) -> Result<Node> {
    convert_with_config(markdown, &Config::default())
}

/// Convert markdown to a node tree with custom config.
pub fn convert_with_config(markdown: &str, config: &Config) -> Result<Node> {
    parser::convert(markdown, config)
}

/// Convert markdown to an HTML string using default config.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_html_with_config(markdown, &Config::default())
}

/// Convert markdown to an HTML string with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> Result<String> {
    convert_with_config(markdown, config)?.to_html()
}
