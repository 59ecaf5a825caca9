#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u16)]
pub enum SyntaxKind {
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    LEFT_BRACE,
    RIGHT_BRACE,
    COMMA,
    COLON,
    SEMICOLON,
    DOT,

    EQ,
    EQ2,
    EQ3,
    BANG_EQ,
    BANG_EQ2,
    LT,
    GT,
    LT_EQ,
    GT_EQ,
    PLUS,
    MINUS,
    STAR,
    SLASH,
    PERCENT,
    BANG,
    AMP2,
    PIPE2,

    LET_KW,
    RETURN_KW,
    TRUE_KW,
    FALSE_KW,
    NULL_KW,
    NAME,

    INT_NUMBER,
    FLOAT_NUMBER,
    STRING,

    UNKNOWN,
    EOF,
}

impl SyntaxKind {
    pub fn is_keyword(self) -> bool {
        matches!(self, Self::LET_KW | Self::RETURN_KW | Self::TRUE_KW | Self::FALSE_KW | Self::NULL_KW)
    }

    /// Source spelling of fixed-text kinds, used in diagnostics.
    pub fn text(self) -> Option<&'static str> {
        use SyntaxKind::*;

        Some(match self {
            LEFT_PAREN => "(",
            RIGHT_PAREN => ")",
            LEFT_BRACKET => "[",
            RIGHT_BRACKET => "]",
            LEFT_BRACE => "{",
            RIGHT_BRACE => "}",
            COMMA => ",",
            COLON => ":",
            SEMICOLON => ";",
            DOT => ".",
            EQ => "=",
            EQ2 => "==",
            EQ3 => "===",
            BANG_EQ => "!=",
            BANG_EQ2 => "!==",
            LT => "<",
            GT => ">",
            LT_EQ => "<=",
            GT_EQ => ">=",
            PLUS => "+",
            MINUS => "-",
            STAR => "*",
            SLASH => "/",
            PERCENT => "%",
            BANG => "!",
            AMP2 => "&&",
            PIPE2 => "||",
            LET_KW => "let",
            RETURN_KW => "return",
            TRUE_KW => "true",
            FALSE_KW => "false",
            NULL_KW => "null",
            _ => return None,
        })
    }
}
