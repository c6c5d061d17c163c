use crate::block::Span;
use crate::error::{Error, Result};

/// Ordered HTML attributes. Keys are unique; re-inserting a key replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

/// An HTML element tree.
///
/// A leaf carries a value and no children; a leaf without a tag is raw text.
/// A branch owns its children and carries no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },
    Branch {
        tag: Option<String>,
        children: Vec<Node>,
        attributes: Attributes,
    },
}

impl Node {
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Untagged leaf, rendered as its value verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn branch(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Branch {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            Node::Leaf { attributes, .. } | Node::Branch { attributes, .. } => {
                attributes.insert(key, value)
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf { tag, .. } | Node::Branch { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf { attributes, .. } | Node::Branch { attributes, .. } => attributes,
        }
    }

    /// Children of a branch; always empty for a leaf.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Branch { children, .. } => children,
        }
    }

    /// Append a child to a branch. Leaves cannot hold children; pushing onto
    /// one is a bug and trips a debug assertion (release builds drop the child).
    pub fn push(&mut self, child: Node) {
        debug_assert!(
            matches!(self, Node::Branch { .. }),
            "cannot push a child onto a leaf node"
        );
        if let Node::Branch { children, .. } = self {
            children.push(child);
        }
    }

    /// Serialize the tree to an HTML string.
    ///
    /// Walks the tree with an explicit stack, so nesting depth is not bounded
    /// by the call stack.
    pub fn to_html(&self) -> Result<String> {
        enum Step<'a> {
            Open(&'a Node),
            Close(&'a str),
        }

        let mut out = String::new();
        let mut stack = vec![Step::Open(self)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Close(tag) => {
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
                Step::Open(Node::Leaf {
                    tag,
                    value,
                    attributes,
                }) => emit_leaf(tag.as_deref(), value.as_deref(), attributes, &mut out)?,
                Step::Open(Node::Branch {
                    tag,
                    children,
                    attributes,
                }) => {
                    let tag = tag.as_deref().ok_or(Error::MissingTagOrChildren)?;
                    open_tag(tag, attributes, &mut out);
                    out.push('>');
                    stack.push(Step::Close(tag));
                    stack.extend(children.iter().rev().map(Step::Open));
                }
            }
        }

        Ok(out)
    }
}

fn emit_leaf(
    tag: Option<&str>,
    value: Option<&str>,
    attributes: &Attributes,
    out: &mut String,
) -> Result<()> {
    match (tag, value) {
        (Some("img"), _) => {
            open_tag("img", attributes, out);
            out.push_str(" />");
        }
        (None, Some(value)) => push_raw(value, out),
        (Some(tag), Some(value)) => {
            open_tag(tag, attributes, out);
            out.push('>');
            push_raw(value, out);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        (tag, None) => {
            return Err(Error::MissingRenderValue {
                tag: tag.map(str::to_string),
            });
        }
    }
    Ok(())
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (key, value) in attributes.iter() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        push_raw(value, out);
        out.push('"');
    }
}

/// Write text content or an attribute value. Values are emitted as-is; this
/// is the one place escaping would go.
fn push_raw(text: &str, out: &mut String) {
    out.push_str(text);
}

impl From<Span> for Node {
    fn from(span: Span) -> Self {
        match span {
            Span::Text(text) => Node::text(text),
            Span::Bold(text) => Node::leaf("b", text),
            Span::Italic(text) => Node::leaf("i", text),
            Span::Code(text) => Node::leaf("code", text),
            Span::Link { text, url } => Node::leaf("a", text).with_attribute("href", url),
            Span::Image { alt, url } => Node::Leaf {
                tag: Some("img".to_string()),
                value: None,
                attributes: [("src", url), ("alt", alt)].into_iter().collect(),
            },
        }
    }
}

impl Span {
    /// Render this span as a leaf node.
    pub fn to_node(&self) -> Node {
        Node::from(self.clone())
    }
}
