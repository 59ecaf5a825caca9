use xjs_tokenizer::SyntaxKind::*;

use super::delimited;
use crate::ast::{
    BinaryOp, BooleanLiteral, Expr, PrefixOp, Property, PropertyKey, StringLiteral,
};
use crate::parser::Parser;
use crate::syntax::Next;

/// Assignment binds loosest and associates to the right.
const ASSIGN_BINDING_POWER: (u8, u8) = (2, 1);

pub(crate) fn expr(p: &mut Parser<'_>) -> Option<Expr> {
    expr_bp(p, 0)
}

fn expr_bp(p: &mut Parser<'_>, min_bp: u8) -> Option<Expr> {
    let mut lhs = prefix_expr(p)?;

    loop {
        if p.at(EQ) {
            let (left, right) = ASSIGN_BINDING_POWER;
            if left < min_bp {
                break;
            }

            p.advance();
            let value = expr_bp(p, right)?;
            lhs = Expr::Assign { target: Box::new(lhs), value: Box::new(value) };
            continue;
        }

        let Some(op) = BinaryOp::from_kind(p.current_kind()) else {
            break;
        };

        let (left, right) = op.binding_power();
        if left < min_bp {
            break;
        }

        p.advance();
        let rhs = expr_bp(p, right)?;
        lhs = Expr::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) };
    }

    Some(lhs)
}

fn prefix_expr(p: &mut Parser<'_>) -> Option<Expr> {
    match PrefixOp::from_kind(p.current_kind()) {
        Some(op) => {
            p.advance();
            let expr = prefix_expr(p)?;
            Some(Expr::Prefix { op, expr: Box::new(expr) })
        }
        None => postfix_expr(p),
    }
}

fn postfix_expr(p: &mut Parser<'_>) -> Option<Expr> {
    let mut expr = p.primary(Next::FIRST)?;

    loop {
        expr = match p.current_kind() {
            LEFT_PAREN => {
                p.advance();
                let args = delimited(p, RIGHT_PAREN, self::expr)?;
                Expr::Call { callee: Box::new(expr), args }
            }
            DOT => {
                p.advance();
                if !p.at(NAME) && !p.current_kind().is_keyword() {
                    p.error("expected property name");
                    return None;
                }
                let property = p.literal().to_owned();
                p.advance();
                Expr::Member { object: Box::new(expr), property }
            }
            LEFT_BRACKET => {
                p.advance();
                let index = self::expr(p)?;
                if !p.expect(RIGHT_BRACKET) {
                    return None;
                }
                Expr::Index { object: Box::new(expr), index: Box::new(index) }
            }
            _ => return Some(expr),
        };
    }
}

/// Primary expressions of the host language, reached once every registered
/// expression handler has declined the position.
pub(crate) fn builtin_primary(p: &mut Parser<'_>) -> Option<Expr> {
    let expr = match p.current_kind() {
        INT_NUMBER | FLOAT_NUMBER => Expr::Number(p.literal().to_owned()),
        STRING => Expr::String(StringLiteral::new(p.literal())),
        TRUE_KW => Expr::Boolean(BooleanLiteral::TRUE),
        FALSE_KW => Expr::Boolean(BooleanLiteral::FALSE),
        NULL_KW => Expr::Null,
        NAME => Expr::Name(p.literal().to_owned()),
        LEFT_PAREN => {
            p.advance();
            let inner = expr(p)?;
            return p.expect(RIGHT_PAREN).then(|| Expr::Paren(Box::new(inner)));
        }
        LEFT_BRACKET => {
            p.advance();
            return delimited(p, RIGHT_BRACKET, expr).map(Expr::Array);
        }
        LEFT_BRACE => {
            p.advance();
            return delimited(p, RIGHT_BRACE, property).map(Expr::Object);
        }
        _ => {
            p.error("expected expression");
            return None;
        }
    };

    p.advance();
    Some(expr)
}

fn property(p: &mut Parser<'_>) -> Option<Property> {
    let key = match p.current_kind() {
        NAME => PropertyKey::Name(p.literal().to_owned()),
        STRING => PropertyKey::String(StringLiteral::new(p.literal())),
        _ => {
            p.error("expected property name");
            return None;
        }
    };
    p.advance();

    if !p.expect(COLON) {
        return None;
    }

    let value = expr(p)?;
    Some(Property { key, value })
}
