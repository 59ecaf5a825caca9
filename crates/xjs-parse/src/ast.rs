//! Host syntax tree. Every node renders back to source through `Display`.

use std::fmt::{self, Write as _};

use xjs_tokenizer::SyntaxKind;

#[derive(Debug, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug)]
pub enum Stmt {
    Let { name: String, value: Expr },
    Return(Option<Expr>),
    Expr(Expr),
}

#[derive(Debug)]
pub enum Expr {
    Name(String),
    Number(String),
    String(StringLiteral),
    Boolean(BooleanLiteral),
    Null,
    Array(Vec<Expr>),
    Object(Vec<Property>),
    Paren(Box<Expr>),
    Prefix { op: PrefixOp, expr: Box<Expr> },
    Binary { op: BinaryOp, lhs: Box<Expr>, rhs: Box<Expr> },
    Assign { target: Box<Expr>, value: Box<Expr> },
    Call { callee: Box<Expr>, args: Vec<Expr> },
    Member { object: Box<Expr>, property: String },
    Index { object: Box<Expr>, index: Box<Expr> },
    /// A node contributed by an expression handler.
    Extension(Box<dyn ExtensionExpr>),
}

/// Expression nodes owned by a syntax extension. `Display` must produce
/// source text of the host language.
pub trait ExtensionExpr: fmt::Debug + fmt::Display {}

#[derive(Debug)]
pub struct Property {
    pub key: PropertyKey,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKey {
    Name(String),
    String(StringLiteral),
}

/// String literal contents as written between the quotes, escapes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub value: bool,
}

impl BooleanLiteral {
    pub const TRUE: Self = Self { value: true };
    pub const FALSE: Self = Self { value: false };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    Not,
    Neg,
}

impl PrefixOp {
    pub(crate) fn from_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::BANG => Some(Self::Not),
            SyntaxKind::MINUS => Some(Self::Neg),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    StrictEq,
    NotEq,
    StrictNotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    pub(crate) fn from_kind(kind: SyntaxKind) -> Option<Self> {
        use SyntaxKind::*;

        Some(match kind {
            PIPE2 => Self::Or,
            AMP2 => Self::And,
            EQ2 => Self::Eq,
            EQ3 => Self::StrictEq,
            BANG_EQ => Self::NotEq,
            BANG_EQ2 => Self::StrictNotEq,
            LT => Self::Lt,
            GT => Self::Gt,
            LT_EQ => Self::LtEq,
            GT_EQ => Self::GtEq,
            PLUS => Self::Add,
            MINUS => Self::Sub,
            STAR => Self::Mul,
            SLASH => Self::Div,
            PERCENT => Self::Rem,
            _ => return None,
        })
    }

    /// Left and right binding power; every binary operator is left-associative.
    pub(crate) fn binding_power(self) -> (u8, u8) {
        let left = match self {
            Self::Or => 3,
            Self::And => 5,
            Self::Eq | Self::StrictEq | Self::NotEq | Self::StrictNotEq => 7,
            Self::Lt | Self::Gt | Self::LtEq | Self::GtEq => 9,
            Self::Add | Self::Sub => 11,
            Self::Mul | Self::Div | Self::Rem => 13,
        };
        (left, left + 1)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::Eq => "==",
            Self::StrictEq => "===",
            Self::NotEq => "!=",
            Self::StrictNotEq => "!==",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value}"),
            Self::Return(Some(value)) => write!(f, "return {value}"),
            Self::Return(None) => f.write_str("return"),
            Self::Expr(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Number(number) => f.write_str(number),
            Self::String(string) => write!(f, "{string}"),
            Self::Boolean(boolean) => write!(f, "{boolean}"),
            Self::Null => f.write_str("null"),
            Self::Array(items) => {
                f.write_char('[')?;
                comma_separated(f, items)?;
                f.write_char(']')
            }
            Self::Object(properties) => {
                f.write_char('{')?;
                comma_separated(f, properties)?;
                f.write_char('}')
            }
            Self::Paren(expr) => write!(f, "({expr})"),
            Self::Prefix { op, expr } => write!(f, "{}{expr}", op.as_str()),
            Self::Binary { op, lhs, rhs } => write!(f, "{lhs} {} {rhs}", op.as_str()),
            Self::Assign { target, value } => write!(f, "{target} = {value}"),
            Self::Call { callee, args } => {
                write!(f, "{callee}(")?;
                comma_separated(f, args)?;
                f.write_char(')')
            }
            Self::Member { object, property } => write!(f, "{object}.{property}"),
            Self::Index { object, index } => write!(f, "{object}[{index}]"),
            Self::Extension(extension) => write!(f, "{extension}"),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            PropertyKey::Name(name) => write!(f, "{name}: {}", self.value),
            PropertyKey::String(string) => write!(f, "{string}: {}", self.value),
        }
    }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;

        let mut escaped = false;
        for ch in self.value.chars() {
            if ch == '"' && !escaped {
                f.write_char('\\')?;
            }
            f.write_char(ch)?;
            escaped = ch == '\\' && !escaped;
        }

        f.write_char('"')
    }
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.value { "true" } else { "false" })
    }
}

fn comma_separated(f: &mut fmt::Formatter<'_>, items: &[impl fmt::Display]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
