use mdhtml::{
    Config, Error, Node, Span, convert, convert_with_config, extract_title, markdown_to_html,
    tokenize,
};
use pretty_assertions::assert_eq;

#[test]
fn heading_and_bold_paragraph() {
    let node = convert("# Hi\n\nA **bold** line.").unwrap();
    assert_eq!(
        node.to_html().unwrap(),
        "<div><h1>Hi</h1><p>A <b>bold</b> line.</p></div>"
    );
}

#[test]
fn empty_input_is_an_empty_root() {
    let node = convert("").unwrap();
    assert_eq!(node.tag(), Some("div"));
    assert!(node.children().is_empty());
    assert_eq!(node.to_html().unwrap(), "<div></div>");
}

#[test]
fn list_with_inline_formatting() {
    assert_eq!(
        markdown_to_html("- one\n- two **b**").unwrap(),
        "<div><ul><li>one</li><li>two <b>b</b></li></ul></div>"
    );
}

#[test]
fn mixed_document() {
    let md = "
# Header

This is a paragraph with **bold** and `code`.

> A quote here

- List item one
- List item two

1. First
2. Second with [a link](https://example.com)

![logo](/img/logo.png)
";
    insta::assert_snapshot!(
        markdown_to_html(md).unwrap(),
        @r#"<div><h1>Header</h1><p>This is a paragraph with <b>bold</b> and <code>code</code>.</p><blockquote>A quote here</blockquote><ul><li>List item one</li><li>List item two</li></ul><ol><li>First</li><li>Second with <a href="https://example.com">a link</a></li></ol><p><img src="/img/logo.png" alt="logo" /></p></div>"#
    );
}

#[test]
fn tree_shape_of_code_block() {
    let node = convert("```\nlet x = 1;\n```").unwrap();
    let pre = &node.children()[0];
    assert_eq!(pre.tag(), Some("pre"));
    assert_eq!(
        pre.children(),
        &[Node::from(Span::Code("let x = 1;\n".into()))]
    );
    assert_eq!(
        node.to_html().unwrap(),
        "<div><pre><code>let x = 1;\n</code></pre></div>"
    );
}

#[test]
fn underscores_in_urls_need_a_wider_italic_marker() {
    let md = "see [docs](https://x.com/a_b)";
    assert!(matches!(
        convert(md),
        Err(Error::UnbalancedDelimiter { ref delimiter, .. }) if delimiter == "_"
    ));

    let config = Config::from_toml_str("[inline]\nitalic = \"__\"\n").unwrap();
    assert_eq!(
        convert_with_config(md, &config).unwrap().to_html().unwrap(),
        r#"<div><p>see <a href="https://x.com/a_b">docs</a></p></div>"#
    );
}

#[test]
fn serializing_twice_is_identical() {
    let node = convert("# T\n\nSome _text_ with ![i](u).\n\n- a\n- b").unwrap();
    let first = node.to_html().unwrap();
    let second = node.to_html().unwrap();
    assert_eq!(first, second);
}

#[test]
fn no_escaping_is_applied() {
    assert_eq!(
        markdown_to_html("a <em>raw</em> & [x](\"q\")").unwrap(),
        r#"<div><p>a <em>raw</em> & <a href=""q"">x</a></p></div>"#
    );
}

#[test]
fn unbalanced_markers_fail_the_document() {
    assert!(matches!(
        convert("ok\n\nthis **breaks"),
        Err(Error::UnbalancedDelimiter { .. })
    ));
    assert!(matches!(
        tokenize("**broken"),
        Err(Error::UnbalancedDelimiter { .. })
    ));
}

#[test]
fn config_changes_italic_marker() {
    let config = Config::from_toml_str("[inline]\nitalic = \"*\"\n").unwrap();
    assert_eq!(
        convert_with_config("an *emph* snake_case", &config)
            .unwrap()
            .to_html()
            .unwrap(),
        "<div><p>an <i>emph</i> snake_case</p></div>"
    );
}

#[test]
fn title_extraction() {
    let md = "Intro text\n\n# The Title\n\n## Sub";
    assert_eq!(extract_title(md).unwrap(), "The Title");
    assert_eq!(extract_title("no heading"), Err(Error::NoTitleHeading));
}
