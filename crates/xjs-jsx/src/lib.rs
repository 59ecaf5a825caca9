//! Tag syntax for the host expression grammar.
//!
//! `<div class="a">hi</div>` parses into an [`Element`] tree, which the
//! expression slot holds as a [`JsxExpr`] and renders back as
//! `createElement("div", {"class": "a"}, "hi")`.

pub mod ast;
pub mod emit;
pub mod error;
pub mod grammar;
#[cfg(test)]
mod tests;

use std::fmt;
use std::rc::Rc;

pub use ast::{AttrValue, Attribute, Element, Node, Text};
pub use emit::DEFAULT_FACTORY;
pub use error::JsxError;
use xjs_parse::ast::{Expr, ExtensionExpr};
use xjs_parse::{Next, Parser, SyntaxBuilder};

/// A parsed element in expression position, bound to the factory it renders
/// with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxExpr {
    pub factory: Rc<str>,
    pub root: Element,
}

impl fmt::Display for JsxExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        emit::write_element(f, &self.factory, &self.root)
    }
}

impl ExtensionExpr for JsxExpr {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxOptions {
    /// Callee of the emitted calls, e.g. `React.createElement`.
    pub factory: String,
}

impl Default for JsxOptions {
    fn default() -> Self {
        Self { factory: DEFAULT_FACTORY.to_owned() }
    }
}

impl JsxOptions {
    pub fn factory(mut self, factory: impl Into<String>) -> Self {
        self.factory = factory.into();
        self
    }

    pub fn install(self, builder: SyntaxBuilder) -> SyntaxBuilder {
        builder.expression_handler(self.into_handler())
    }

    fn into_handler(self) -> impl Fn(&mut Parser<'_>, Next) -> Option<Expr> + 'static {
        let factory: Rc<str> = self.factory.into();
        move |p: &mut Parser<'_>, next: Next| parse_with_factory(p, next, &factory)
    }
}

/// Installs the tag syntax with [`JsxOptions::default`].
pub fn plugin(builder: SyntaxBuilder) -> SyntaxBuilder {
    JsxOptions::default().install(builder)
}

/// Expression handler for tag syntax. Declines, consuming nothing, unless the
/// cursor sits on `<` followed by an identifier.
pub fn parse_jsx_expression(p: &mut Parser<'_>, next: Next) -> Option<Expr> {
    parse_with_factory(p, next, &Rc::from(DEFAULT_FACTORY))
}

fn parse_with_factory(p: &mut Parser<'_>, next: Next, factory: &Rc<str>) -> Option<Expr> {
    if !grammar::at_element_start(p) {
        tracing::trace!(kind = ?p.current_kind(), "no element start, declining");
        return next.parse(p);
    }

    tracing::trace!(offset = ?p.current().range.start(), "element start");

    // The failure is already in the parser's diagnostics.
    let root = grammar::element(p).ok()?;
    Some(Expr::Extension(Box::new(JsxExpr { factory: Rc::clone(factory), root })))
}
