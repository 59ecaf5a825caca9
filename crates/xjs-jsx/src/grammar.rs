use xjs_parse::Parser;
use xjs_parse::ast::{BooleanLiteral, StringLiteral};
use xjs_tokenizer::SyntaxKind::*;
use xjs_tokenizer::TextRange;

use crate::ast::{AttrValue, Attribute, Element, Node, Text};
use crate::error::JsxError;

/// `<` immediately followed by an identifier starts an element; anything else,
/// `< 5` included, belongs to the host grammar. Looks, never consumes.
pub fn at_element_start(p: &Parser<'_>) -> bool {
    p.at(LT) && p.nth_at(1, NAME)
}

/// Deepest element nesting accepted; the parser recurses once per level.
pub const MAX_NESTING: usize = 256;

/// Parses one element starting at its `<`. On failure the error has already
/// been reported to the parser and no element is produced.
pub fn element(p: &mut Parser<'_>) -> Result<Element, JsxError> {
    element_at(p, 0)
}

fn element_at(p: &mut Parser<'_>, depth: usize) -> Result<Element, JsxError> {
    debug_assert!(at_element_start(p));

    let open = p.current().range;
    if depth >= MAX_NESTING {
        return Err(report(p, open, JsxError::NestingTooDeep));
    }
    p.advance();

    let tag_name = p.literal().to_owned();
    p.advance();

    let attributes = attributes(p);

    if p.at(SLASH) && p.nth_at(1, GT) {
        p.advance();
        p.advance();
        return Ok(Element { tag_name, attributes, children: Vec::new(), self_closing: true });
    }

    if !p.at(GT) {
        let range = p.current().range;
        return Err(report(p, range, JsxError::MissingClosingBracket));
    }
    p.advance();

    let children = children(p, &tag_name, open, depth)?;
    tracing::trace!(tag = %tag_name, children = children.len(), "element");

    Ok(Element { tag_name, attributes, children, self_closing: false })
}

fn attributes(p: &mut Parser<'_>) -> Vec<Attribute> {
    let mut attributes = Vec::new();

    while p.at(NAME) {
        let name = p.literal().to_owned();
        p.advance();

        let value = if p.eat(EQ) {
            // Whatever the token is, its literal becomes a string value.
            let value = StringLiteral::new(p.literal());
            p.advance();
            AttrValue::String(value)
        } else {
            AttrValue::Boolean(BooleanLiteral::TRUE)
        };

        attributes.push(Attribute { name, value });
    }

    attributes
}

fn children(
    p: &mut Parser<'_>,
    tag_name: &str,
    open: TextRange,
    depth: usize,
) -> Result<Vec<Node>, JsxError> {
    let mut children = Vec::new();
    let mut text = TextBuffer::default();

    while !p.at(EOF) {
        if p.at(LT) && p.nth_at(1, SLASH) {
            text.flush_into(&mut children);
            p.advance();
            p.advance();

            let names_match = p.at(NAME) && p.literal() == tag_name;
            if names_match {
                p.advance();
            }

            if !names_match || !p.at(GT) {
                let range = p.current().range;
                return Err(report(p, range, JsxError::MalformedClosingTag));
            }
            p.advance();

            return Ok(children);
        }

        if at_element_start(p) {
            text.flush_into(&mut children);
            children.push(Node::Element(element_at(p, depth + 1)?));
            continue;
        }

        if !matches!(p.current_kind(), LT | GT) {
            text.push(p.literal());
        }
        p.advance();
    }

    Err(report(p, open, JsxError::UnterminatedElement { tag: tag_name.to_owned() }))
}

/// Token literals seen since the last tag boundary, glued together without
/// separators.
#[derive(Default)]
struct TextBuffer<'a> {
    pieces: Vec<&'a str>,
}

impl<'a> TextBuffer<'a> {
    fn push(&mut self, literal: &'a str) {
        if !literal.is_empty() {
            self.pieces.push(literal);
        }
    }

    fn flush_into(&mut self, children: &mut Vec<Node>) {
        if self.pieces.is_empty() {
            return;
        }

        children.push(Node::Text(Text { value: self.pieces.concat() }));
        self.pieces.clear();
    }
}

fn report(p: &mut Parser<'_>, range: TextRange, error: JsxError) -> JsxError {
    p.error_at(range, error.to_string());
    error
}
