mod cursor;
mod syntax_kind;
mod syntax_set;

use cursor::Cursor;
pub use syntax_kind::SyntaxKind;
use syntax_kind::SyntaxKind::*;
pub use syntax_set::SyntaxSet;
pub use text_size::{TextRange, TextSize};
use text_size::TextLen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

impl Token {
    const EOF: Self = Self { kind: EOF, range: TextRange::empty(TextSize::new(0)) };

    /// The literal payload of the token. String literals lose their quotes,
    /// escapes are left as written.
    pub fn literal<'a>(&self, text: &'a str) -> &'a str {
        let raw = &text[self.range];
        match self.kind {
            STRING => &raw[1..raw.len() - 1],
            _ => raw,
        }
    }
}

pub struct Tokenizer<'a> {
    text: &'a str,
    cursor: Cursor<'a>,
    current: Token,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut tokenizer = Self { text, cursor: Cursor::new(text), current: Token::EOF };
        tokenizer.next_token();
        tokenizer
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn peek(&self) -> &Token {
        &self.current
    }

    fn range(&self) -> TextRange {
        let end = self.text.text_len() - self.cursor.remaining();
        TextRange::new(end - self.cursor.pos_within_token(), end)
    }

    fn token_text(&self) -> &'a str {
        &self.text[self.range()]
    }

    /// Returns the current token and moves on to the next one. Once the input
    /// is exhausted every call yields `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.trivia();
        let (kind, range) = self.syntax_kind();
        std::mem::replace(&mut self.current, Token { kind, range })
    }

    fn trivia(&mut self) {
        loop {
            match self.cursor.peek() {
                '/' if self.cursor.second() == '/' => {
                    self.cursor.advance_while(|c| c != '\n');
                }
                c if c.is_whitespace() && !self.cursor.is_eof() => {
                    self.cursor.advance_while(char::is_whitespace);
                }
                _ => break,
            }
        }

        self.cursor.reset_pos_within_token();
    }

    fn syntax_kind(&mut self) -> (SyntaxKind, TextRange) {
        if self.cursor.is_eof() {
            return (EOF, self.range());
        }

        let kind = match self.cursor.advance() {
            '(' => LEFT_PAREN,
            ')' => RIGHT_PAREN,
            '[' => LEFT_BRACKET,
            ']' => RIGHT_BRACKET,
            '{' => LEFT_BRACE,
            '}' => RIGHT_BRACE,
            ',' => COMMA,
            ':' => COLON,
            ';' => SEMICOLON,
            '.' => DOT,
            '=' => match (self.cursor.eat('='), self.cursor.eat('=')) {
                (true, true) => EQ3,
                (true, false) => EQ2,
                _ => EQ,
            },
            '!' => match (self.cursor.eat('='), self.cursor.eat('=')) {
                (true, true) => BANG_EQ2,
                (true, false) => BANG_EQ,
                _ => BANG,
            },
            '<' if self.cursor.eat('=') => LT_EQ,
            '<' => LT,
            '>' if self.cursor.eat('=') => GT_EQ,
            '>' => GT,
            '+' => PLUS,
            '-' => MINUS,
            '*' => STAR,
            '/' => SLASH,
            '%' => PERCENT,
            '&' if self.cursor.eat('&') => AMP2,
            '|' if self.cursor.eat('|') => PIPE2,
            quote @ ('"' | '\'') => self.string(quote),
            first_char @ '0'..='9' => self.number(first_char),
            c if is_ident_start(c) => {
                self.cursor.advance_while(is_ident_continue);

                match self.token_text() {
                    "let" => LET_KW,
                    "return" => RETURN_KW,
                    "true" => TRUE_KW,
                    "false" => FALSE_KW,
                    "null" => NULL_KW,
                    _ => NAME,
                }
            }
            _ => UNKNOWN,
        };

        (kind, self.range())
    }

    fn string(&mut self, quote: char) -> SyntaxKind {
        loop {
            if self.cursor.is_eof() {
                return UNKNOWN;
            }

            match self.cursor.peek() {
                '\n' => return UNKNOWN,
                '\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance();
                    }
                }
                c => {
                    self.cursor.advance();
                    if c == quote {
                        return STRING;
                    }
                }
            }
        }
    }

    fn number(&mut self, c: char) -> SyntaxKind {
        if c == '0' {
            match self.cursor.peek() {
                'b' | 'o' => {
                    self.cursor.advance();
                    self.digits(false);
                }
                'x' => {
                    self.cursor.advance();
                    self.digits(true);
                }
                '0'..='9' | '_' | '.' | 'e' | 'E' => {
                    self.digits(false);
                }
                _ => return INT_NUMBER,
            }
        } else {
            self.digits(false);
        }

        if self.cursor.matches('.') && self.cursor.second().is_ascii_digit() {
            self.cursor.advance();
            self.digits(false);
            self.float_exponent();
            return FLOAT_NUMBER;
        }

        if self.cursor.matches('e') || self.cursor.matches('E') {
            self.float_exponent();
            return FLOAT_NUMBER;
        }

        INT_NUMBER
    }

    fn digits(&mut self, allow_hex: bool) {
        loop {
            match self.cursor.peek() {
                '_' | '0'..='9' => {
                    self.cursor.advance();
                }
                'a'..='f' | 'A'..='F' if allow_hex => {
                    self.cursor.advance();
                }
                _ => return,
            }
        }
    }

    fn float_exponent(&mut self) {
        if self.cursor.matches('e') || self.cursor.matches('E') {
            self.cursor.advance();
            if self.cursor.matches('-') || self.cursor.matches('+') {
                self.cursor.advance();
            }
            self.digits(false);
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
