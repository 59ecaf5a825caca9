use xjs_tokenizer::SyntaxKind::{self, *};

use crate::parser::Parser;

pub(crate) mod exprs;
pub(crate) mod items;

/// Parses `item (',' item)* ','? ket` after the opening delimiter has been
/// consumed. Gives up on the first item that fails to parse.
pub(crate) fn delimited<T>(
    p: &mut Parser<'_>,
    ket: SyntaxKind,
    mut item: impl FnMut(&mut Parser<'_>) -> Option<T>,
) -> Option<Vec<T>> {
    let mut items = Vec::new();

    while !p.at(ket) && !p.at(EOF) {
        items.push(item(p)?);

        if !p.eat(COMMA) {
            break;
        }
    }

    p.expect(ket).then_some(items)
}
