//! Compact sets of block faces.

use super::Direction;

/// A set of block faces, stored as a 6-bit mask.
///
/// Iteration always follows [`Direction::ALL`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FaceSet(u8);

impl FaceSet {
    const MASK: u8 = 0b11_1111;

    /// No faces.
    pub const NONE: FaceSet = FaceSet(0);
    /// Up and down.
    pub const UP_DOWN: FaceSet = FaceSet(Direction::Up.bit() | Direction::Down.bit());
    /// East, west, south and north.
    pub const HORIZONTAL: FaceSet = FaceSet(
        Direction::East.bit() | Direction::West.bit() | Direction::South.bit() | Direction::North.bit(),
    );
    /// All six faces.
    pub const ALL: FaceSet = FaceSet(Self::MASK);
    /// Every face except the bottom one.
    pub const ALL_EXCEPT_DOWN: FaceSet = FaceSet(Self::MASK & !Direction::Down.bit());

    /// Build a set from a single face.
    pub const fn only(face: Direction) -> Self {
        FaceSet(face.bit())
    }

    pub fn contains(&self, face: Direction) -> bool {
        self.0 & face.bit() != 0
    }

    /// Copy of this set with `face` added.
    #[must_use]
    pub fn with(self, face: Direction) -> Self {
        FaceSet(self.0 | face.bit())
    }

    /// Copy of this set with `face` removed.
    #[must_use]
    pub fn without(self, face: Direction) -> Self {
        FaceSet(self.0 & !face.bit())
    }

    #[must_use]
    pub fn union(self, other: FaceSet) -> Self {
        FaceSet(self.0 | other.0)
    }

    #[must_use]
    pub fn difference(self, other: FaceSet) -> Self {
        FaceSet(self.0 & !other.0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate faces in search order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// Remove and return the first face in search order.
    pub fn pop_first(&mut self) -> Option<Direction> {
        let first = self.iter().next()?;
        *self = self.without(first);
        Some(first)
    }
}

impl FromIterator<Direction> for FaceSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(FaceSet::NONE, FaceSet::with)
    }
}

impl std::fmt::Debug for FaceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl std::fmt::Display for FaceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut first = true;
        for face in self.iter() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", face)?;
            first = false;
        }
        Ok(())
    }
}
