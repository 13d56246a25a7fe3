//! Reaction kinds a user can attach to a lesson.

/// Kind of a lesson reaction.
///
/// Wire format: integer (0 = Like, 1 = Haha, 2 = Heart).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Like = 0,
    Haha = 1,
    Heart = 2,
}

impl ReactionKind {
    /// Convert from the integer wire value. Returns `None` for unknown values.
    pub fn from_wire(v: i64) -> Option<Self> {
        match v {
            0 => Some(Self::Like),
            1 => Some(Self::Haha),
            2 => Some(Self::Heart),
            _ => None,
        }
    }

    /// Convert to the integer wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
