use xjs_errors::Diagnostic;

use crate::ast::{Expr, Program};
use crate::grammar;
use crate::parser::Parser;

/// A primary-expression interceptor. It either builds an expression from the
/// current position or hands the position on with [`Next::parse`].
pub type ExprHandler = Box<dyn Fn(&mut Parser<'_>, Next) -> Option<Expr>>;

/// Continuation given to an [`ExprHandler`]: the rest of the handler chain.
#[derive(Clone, Copy, Debug)]
pub struct Next {
    index: usize,
}

impl Next {
    pub(crate) const FIRST: Self = Self { index: 0 };

    pub(crate) fn index(self) -> usize {
        self.index
    }

    pub(crate) fn skip(self) -> Self {
        Self { index: self.index + 1 }
    }

    pub fn parse(self, p: &mut Parser<'_>) -> Option<Expr> {
        p.primary(self)
    }
}

#[derive(Default)]
pub struct SyntaxBuilder {
    handlers: Vec<ExprHandler>,
}

impl SyntaxBuilder {
    /// Appends a handler; handlers see each primary position in the order they
    /// were registered.
    pub fn expression_handler(
        mut self,
        handler: impl Fn(&mut Parser<'_>, Next) -> Option<Expr> + 'static,
    ) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn plugin(self, install: impl FnOnce(Self) -> Self) -> Self {
        install(self)
    }

    pub fn build(self) -> Syntax {
        Syntax { handlers: self.handlers }
    }
}

/// The host grammar together with its registered extensions.
pub struct Syntax {
    handlers: Vec<ExprHandler>,
}

impl Syntax {
    pub fn builder() -> SyntaxBuilder {
        SyntaxBuilder::default()
    }

    /// A cursor over `text` that dispatches through this syntax's handlers.
    pub fn parser<'a>(&'a self, text: &'a str) -> Parser<'a> {
        Parser::new(text, &self.handlers)
    }

    pub fn parse(&self, text: &str) -> Parse {
        let mut parser = self.parser(text);
        let program = grammar::items::program(&mut parser);
        Parse { program, diagnostics: parser.finish() }
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug)]
pub struct Parse {
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parse {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
