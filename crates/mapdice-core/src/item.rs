//! Selectable map entries.
//!
//! ## Learning: Enums Instead of Strings
//!
//! A card is either shown normally or greyed out. Encoding that as
//! [`Visual`] lets the UI look up a pre-loaded image by variant instead
//! of building a file name every time it repaints.

use std::fmt;

/// Index of a map inside its [`MapPool`](crate::MapPool).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapId(pub usize);

impl MapId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which of the two card images to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visual {
    Normal,
    Excluded,
}

impl Visual {
    pub const ALL: [Visual; 2] = [Visual::Normal, Visual::Excluded];
}

/// One map the picker can land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapItem {
    name: String,
    excluded: bool,
}

impl MapItem {
    /// Creates a map that is eligible for picking.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            excluded: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_excluded(&self) -> bool {
        self.excluded
    }

    /// Flips the exclusion flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.excluded = !self.excluded;
        self.excluded
    }

    /// The visual matching the current flag.
    pub fn visual(&self) -> Visual {
        if self.excluded {
            Visual::Excluded
        } else {
            Visual::Normal
        }
    }
}
