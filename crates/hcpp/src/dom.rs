//! The document tree consumed by the transcoder, and its construction from
//! raw HTML.
//!
//! Parsing itself is delegated to [`scraper`]; this module only lowers the
//! parsed tree into the small [`Node`] model the rest of the crate works on.

use ecow::EcoString;
use scraper::{ElementRef, Html};

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// The root. Never emits text itself.
    Document(Vec<Node>),
    /// A tagged element.
    Element(Element),
    /// Raw text content.
    Text(EcoString),
    /// A comment. Always suppressed.
    Comment(EcoString),
}

impl Node {
    /// Creates a text node.
    pub fn text(content: impl Into<EcoString>) -> Self {
        Node::Text(content.into())
    }

    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the child nodes, empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document(children) => children,
            Node::Element(element) => &element.children,
            Node::Text(_) | Node::Comment(_) => &[],
        }
    }

    /// Finds the first element with the given tag in pre-order, excluding
    /// this node itself.
    pub fn find_descendant(&self, tag: &str) -> Option<&Element> {
        find_in(self.children(), tag)
    }

    /// Collects every element with the given tag in pre-order, excluding
    /// this node itself.
    pub fn descendants_with_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        collect_in(self.children(), tag, found);
    }

    fn collect_text(&self, output: &mut EcoString) {
        match self {
            Node::Text(text) => output.push_str(text),
            Node::Comment(_) => {}
            Node::Document(children) => children.iter().for_each(|c| c.collect_text(output)),
            Node::Element(element) => element.children.iter().for_each(|c| c.collect_text(output)),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Attributes of an element, in source order. Keys are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(pub Vec<(EcoString, EcoString)>);

impl Attrs {
    /// Looks up an attribute value by key.
    pub fn get(&self, key: &str) -> Option<&EcoString> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Sets an attribute, replacing any previous value under the same key.
    pub fn set(&mut self, key: impl Into<EcoString>, value: impl Into<EcoString>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }
}

/// A tagged element with attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// The lowercase tag name.
    pub tag: EcoString,
    /// The attributes.
    pub attrs: Attrs,
    /// The child nodes, in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element without attributes or children.
    pub fn new(tag: impl Into<EcoString>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::default(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute.
    pub fn with_attr(mut self, key: impl Into<EcoString>, value: impl Into<EcoString>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Appends a child node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Looks up an attribute value by key.
    pub fn attr(&self, key: &str) -> Option<&EcoString> {
        self.attrs.get(key)
    }

    /// Finds the first descendant element with the given tag in pre-order.
    pub fn find_descendant(&self, tag: &str) -> Option<&Element> {
        find_in(&self.children, tag)
    }

    /// Collects every descendant element with the given tag in pre-order.
    pub fn descendants_with_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        collect_in(&self.children, tag, found);
    }

    /// Concatenates the text of all descendants. Comments are skipped.
    pub fn text_content(&self) -> EcoString {
        let mut output = EcoString::new();
        for child in &self.children {
            child.collect_text(&mut output);
        }
        output
    }
}

fn find_in<'a>(nodes: &'a [Node], tag: &str) -> Option<&'a Element> {
    nodes.iter().find_map(|node| match node {
        Node::Element(element) if element.tag == tag => Some(element),
        _ => find_in(node.children(), tag),
    })
}

fn collect_in<'a>(nodes: &'a [Node], tag: &str, found: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(element) = node
            && element.tag == tag
        {
            found.push(element);
        }
        collect_in(node.children(), tag, found);
    }
}

/// Parses an HTML document and lowers it into a [`Node::Document`].
///
/// The HTML5 parsing algorithm always synthesizes `html`, `head` and `body`,
/// decodes character references and repairs misnested markup.
pub fn parse_html(source: &str) -> Node {
    let html = Html::parse_document(source);
    Node::Document(vec![lower_element(html.root_element())])
}

fn lower_element(element: ElementRef<'_>) -> Node {
    let value = element.value();
    let mut attrs = Attrs::default();
    for (key, val) in value.attrs() {
        attrs.set(key, val);
    }

    let children = element
        .children()
        .filter_map(|child| match child.value() {
            scraper::Node::Text(text) => Some(Node::Text(EcoString::from(&**text))),
            scraper::Node::Comment(comment) => Some(Node::Comment(EcoString::from(&**comment))),
            scraper::Node::Element(_) => ElementRef::wrap(child).map(lower_element),
            _ => None,
        })
        .collect();

    Node::Element(Element {
        tag: value.name().into(),
        attrs,
        children,
    })
}
