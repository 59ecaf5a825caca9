pub mod ast;
mod grammar;
mod parser;
mod syntax;

pub use parser::Parser;
pub use syntax::{ExprHandler, Next, Parse, Syntax, SyntaxBuilder};
pub use xjs_errors::Diagnostic;
pub use xjs_tokenizer::{SyntaxKind, TextRange, Token};

/// Parses `text` with the built-in grammar only.
pub fn parse(text: &str) -> Parse {
    Syntax::default().parse(text)
}
