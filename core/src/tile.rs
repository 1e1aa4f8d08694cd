use serde::{Deserialize, Serialize};

/// What a tile intrinsically holds. Fixed at board construction, never
/// mutated afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Content {
    Hazard,
    /// Safe tile carrying its precomputed count of hazard neighbors (0..=8).
    SafeCount(u8),
}

impl Content {
    pub const fn is_hazard(self) -> bool {
        matches!(self, Self::Hazard)
    }
}

/// Per-cell state: immutable content plus the two orthogonal player-driven
/// markers. Mutation only happens through `Board`, which enforces the
/// one-way reveal and the no-flagging-revealed-tiles rules.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    content: Content,
    revealed: bool,
    flagged: bool,
}

impl Tile {
    pub(crate) const fn new(content: Content) -> Self {
        Self {
            content,
            revealed: false,
            flagged: false,
        }
    }

    pub const fn content(self) -> Content {
        self.content
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// One-way transition, there is no `mark_hidden`.
    pub(crate) fn mark_revealed(&mut self) {
        debug_assert!(!self.flagged, "flagged tiles cannot be revealed");
        self.revealed = true;
    }

    /// Callers must have checked `is_revealed` already.
    pub(crate) fn set_flag(&mut self, flagged: bool) {
        debug_assert!(!self.revealed, "revealed tiles cannot change flags");
        self.flagged = flagged;
    }
}
