/// Structural errors in tag syntax. Each one aborts the element being parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsxError {
    #[error("expected '>' after tag name")]
    MissingClosingBracket,
    #[error("malformed closing tag")]
    MalformedClosingTag,
    #[error("unterminated element `<{tag}>`")]
    UnterminatedElement { tag: String },
    #[error("elements nested too deeply")]
    NestingTooDeep,
}
