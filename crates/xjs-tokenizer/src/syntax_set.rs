use crate::SyntaxKind;

/// Bitset of token kinds, cheap enough to build in `const` recovery tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntaxSet(u64);

impl SyntaxSet {
    pub const EMPTY: Self = Self(0);

    const fn bit(kind: SyntaxKind) -> u64 {
        let index = kind as u16;
        debug_assert!(index < u64::BITS as u16, "SyntaxKind no longer fits in a u64 set");
        1 << index
    }

    pub const fn new<const N: usize>(kinds: [SyntaxKind; N]) -> Self {
        let mut set = Self::EMPTY;

        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }

        set
    }

    pub const fn with(self, kind: SyntaxKind) -> Self {
        Self(self.0 | Self::bit(kind))
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, kind: SyntaxKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }
}
