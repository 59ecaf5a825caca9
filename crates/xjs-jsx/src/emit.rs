//! Renders element trees as factory calls:
//! `factory("tag", props | null, child, ...)`.

use std::fmt::{self, Write};

use crate::ast::{AttrValue, Attribute, Element, Node, Text};

pub const DEFAULT_FACTORY: &str = "createElement";

pub fn write_node<W: Write + ?Sized>(out: &mut W, factory: &str, node: &Node) -> fmt::Result {
    match node {
        Node::Element(element) => write_element(out, factory, element),
        Node::Text(text) => write_text(out, text),
    }
}

pub fn write_element<W: Write + ?Sized>(
    out: &mut W,
    factory: &str,
    element: &Element,
) -> fmt::Result {
    write!(out, "{factory}(\"{}\", ", element.tag_name)?;
    write_props(out, &element.attributes)?;

    for child in &element.children {
        out.write_str(", ")?;
        write_node(out, factory, child)?;
    }

    out.write_char(')')
}

/// `null` when there are no attributes, an object literal otherwise.
pub fn write_props<W: Write + ?Sized>(out: &mut W, attributes: &[Attribute]) -> fmt::Result {
    if attributes.is_empty() {
        return out.write_str("null");
    }

    out.write_char('{')?;
    for (i, attribute) in attributes.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "\"{}\": {}", attribute.name, attribute.value)?;
    }
    out.write_char('}')
}

/// Every `"` gets a backslash, nothing else is escaped.
pub fn write_text<W: Write + ?Sized>(out: &mut W, text: &Text) -> fmt::Result {
    out.write_char('"')?;
    for ch in text.value.chars() {
        if ch == '"' {
            out.write_char('\\')?;
        }
        out.write_char(ch)?;
    }
    out.write_char('"')
}

/// Adapter that displays a node with a chosen factory name.
pub struct Render<'a> {
    factory: &'a str,
    node: RenderNode<'a>,
}

enum RenderNode<'a> {
    Element(&'a Element),
    Node(&'a Node),
}

impl Element {
    pub fn render<'a>(&'a self, factory: &'a str) -> Render<'a> {
        Render { factory, node: RenderNode::Element(self) }
    }
}

impl Node {
    pub fn render<'a>(&'a self, factory: &'a str) -> Render<'a> {
        Render { factory, node: RenderNode::Node(self) }
    }
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            RenderNode::Element(element) => write_element(f, self.factory, element),
            RenderNode::Node(node) => write_node(f, self.factory, node),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, DEFAULT_FACTORY, self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, DEFAULT_FACTORY, self)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_text(f, self)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(string) => write!(f, "{string}"),
            Self::Boolean(boolean) => write!(f, "{boolean}"),
        }
    }
}
