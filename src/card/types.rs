/// The two card kinds the simulator distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Land,
    NonLand,
}

/// An abstract card: its kind plus whether it is a combo piece.
///
/// Lands are never combo pieces; the constructors are the only way to build a
/// `Card`, so the pairing cannot be violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    kind: CardKind,
    combo: bool,
}

impl Card {
    pub const fn land() -> Self {
        Card { kind: CardKind::Land, combo: false }
    }

    /// A non-land that does not count toward the combo
    pub const fn spell() -> Self {
        Card { kind: CardKind::NonLand, combo: false }
    }

    pub const fn combo_piece() -> Self {
        Card { kind: CardKind::NonLand, combo: true }
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn is_land(&self) -> bool {
        self.kind == CardKind::Land
    }

    pub fn is_combo_piece(&self) -> bool {
        self.combo
    }
}
