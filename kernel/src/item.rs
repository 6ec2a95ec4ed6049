//! `Item`: the atomic puzzle token, `(kind, category)`.

/// Index of an item kind (hydrogen, lithium, ...).
///
/// Kinds are dense indices into a [`State`](crate::state::State)'s count
/// planes; the valid range is `0..kind_count` for the state the item is
/// placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kind(u8);

impl Kind {
    /// Construct a kind from its dense index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// The dense index, usable for plane addressing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The two item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Safe to coexist with any Microchip of matching kind; hazardous to
    /// every mismatched, unshielded Microchip on the same floor.
    Generator,
    /// Vulnerable unless paired with its matching Generator.
    Microchip,
}

/// An atomic puzzle token.
///
/// Items are value types with no identity beyond `(kind, category)`: two
/// items with equal fields are interchangeable, which is what lets
/// [`State`](crate::state::State) store counts instead of labeled singletons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    pub kind: Kind,
    pub category: Category,
}

impl Item {
    /// A Generator of the given kind.
    #[must_use]
    pub const fn generator(kind: Kind) -> Self {
        Self {
            kind,
            category: Category::Generator,
        }
    }

    /// A Microchip of the given kind.
    #[must_use]
    pub const fn microchip(kind: Kind) -> Self {
        Self {
            kind,
            category: Category::Microchip,
        }
    }

    /// Two items are compatible iff they share the same kind.
    #[must_use]
    pub const fn is_compatible(self, other: Self) -> bool {
        self.kind.0 == other.kind.0
    }
}
