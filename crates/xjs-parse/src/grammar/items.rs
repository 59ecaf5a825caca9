use xjs_tokenizer::SyntaxKind::*;
use xjs_tokenizer::SyntaxSet;

use super::exprs;
use crate::ast::{Program, Stmt};
use crate::parser::Parser;

const STMT_RECOVERY: SyntaxSet = SyntaxSet::new([SEMICOLON, LET_KW, RETURN_KW]);

pub(crate) fn program(p: &mut Parser<'_>) -> Program {
    let mut program = Program::default();

    while !p.at(EOF) {
        let start = p.current().range;

        match stmt(p) {
            Some(stmt) => program.statements.push(stmt),
            None => p.recover(STMT_RECOVERY),
        }

        p.eat(SEMICOLON);

        if p.current().range == start {
            p.error("expected a statement");
            p.advance();
        }
    }

    program
}

fn stmt(p: &mut Parser<'_>) -> Option<Stmt> {
    match p.current_kind() {
        LET_KW => {
            p.advance();

            if !p.at(NAME) {
                p.error("expected identifier");
                return None;
            }
            let name = p.literal().to_owned();
            p.advance();

            if !p.expect(EQ) {
                return None;
            }

            let value = exprs::expr(p)?;
            Some(Stmt::Let { name, value })
        }
        RETURN_KW => {
            p.advance();

            if matches!(p.current_kind(), SEMICOLON | RIGHT_BRACE | EOF) {
                return Some(Stmt::Return(None));
            }

            exprs::expr(p).map(|value| Stmt::Return(Some(value)))
        }
        _ => exprs::expr(p).map(Stmt::Expr),
    }
}
