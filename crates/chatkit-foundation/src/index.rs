use std::fmt;

/// Slot of a message in the list: one message per section in the common case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPosition {
    pub section: usize,
    pub item: usize,
}

impl IndexPosition {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// First item of `section`.
    pub const fn section(section: usize) -> Self {
        Self { section, item: 0 }
    }
}

impl fmt::Display for IndexPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}
