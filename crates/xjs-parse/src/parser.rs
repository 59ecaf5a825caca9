use xjs_errors::Diagnostic;
use xjs_tokenizer::{SyntaxKind, SyntaxSet, TextRange, TextSize, Token, Tokenizer};

use crate::ast::Expr;
use crate::grammar;
use crate::syntax::{ExprHandler, Next};

/// Forward-only cursor over the token stream with a two-token window, plus the
/// diagnostics sink for everything parsed through it.
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    current: Token,
    handlers: &'a [ExprHandler],
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(text: &'a str, handlers: &'a [ExprHandler]) -> Self {
        let mut tokenizer = Tokenizer::new(text);
        let current = tokenizer.next_token();
        Self { tokenizer, current, handlers, diagnostics: Vec::new() }
    }

    pub fn text(&self) -> &'a str {
        self.tokenizer.text()
    }

    pub fn current(&self) -> Token {
        self.current
    }

    /// Token `n` positions ahead of the cursor. The window is two tokens wide;
    /// anything past it reads as an empty `EOF` at the end of the text.
    pub fn nth(&self, n: usize) -> Token {
        match n {
            0 => self.current,
            1 => *self.tokenizer.peek(),
            _ => {
                let end = TextSize::of(self.text());
                Token { kind: SyntaxKind::EOF, range: TextRange::empty(end) }
            }
        }
    }

    pub fn current_kind(&self) -> SyntaxKind {
        self.current.kind
    }

    pub fn nth_kind(&self, n: usize) -> SyntaxKind {
        self.nth(n).kind
    }

    pub fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    pub fn nth_at(&self, n: usize, kind: SyntaxKind) -> bool {
        self.nth_kind(n) == kind
    }

    /// Literal payload of the current token.
    pub fn literal(&self) -> &'a str {
        self.current.literal(self.text())
    }

    pub fn advance(&mut self) {
        if self.at(SyntaxKind::EOF) {
            return;
        }

        self.current = self.tokenizer.next_token();
    }

    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if !self.at(kind) {
            return false;
        }

        self.advance();
        true
    }

    pub fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }

        match kind.text() {
            Some(text) => self.error(format!("expected '{text}'")),
            None => self.error(format!("expected {kind:?}")),
        }
        false
    }

    /// Reports `message` against the current token.
    pub fn error(&mut self, message: impl Into<String>) {
        let range = self.current.range;
        self.error_at(range, message);
    }

    pub fn error_at(&mut self, range: TextRange, message: impl Into<String>) {
        let diagnostic = Diagnostic::error(message, range);
        tracing::debug!(message = diagnostic.message(), ?range, "parse error");
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn recover(&mut self, recovery: SyntaxSet) {
        while !self.at(SyntaxKind::EOF) && !recovery.contains(self.current_kind()) {
            self.advance();
        }
    }

    /// Runs the expression-handler chain starting at `next`, falling back to
    /// the built-in primary expressions once every handler has declined.
    pub(crate) fn primary(&mut self, next: Next) -> Option<Expr> {
        let handlers = self.handlers;

        match handlers.get(next.index()) {
            Some(handler) => handler(self, next.skip()),
            None => grammar::exprs::builtin_primary(self),
        }
    }

    /// Ends parsing and hands back everything reported so far.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
