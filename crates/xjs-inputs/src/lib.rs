pub use line_index::{LineCol, LineIndex, TextSize};

/// A source file handed to the transpiler.
#[salsa::input(debug)]
pub struct File {
    #[returns(ref)]
    pub path: camino::Utf8PathBuf,
    #[returns(deref)]
    pub text: String,
}

#[salsa::tracked]
impl File {
    #[salsa::tracked(returns(ref), no_eq)]
    pub fn line_index(self, db: &dyn salsa::Database) -> LineIndex {
        LineIndex::new(self.text(db))
    }
}

impl File {
    /// One-based line and column of `offset`, as printed by the CLI.
    pub fn location(self, db: &dyn salsa::Database, offset: TextSize) -> (u32, u32) {
        let LineCol { line, col } = self.line_index(db).line_col(offset);
        (line + 1, col + 1)
    }
}
