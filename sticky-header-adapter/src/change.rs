/// A mutation of the list's underlying data, as reported by the row source.
///
/// The sticky header engine reacts to every variant the same way (full invalidation); the
/// variants only matter to the host for keeping its item count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataChange {
    /// The whole data set was replaced.
    Reset { count: usize },
    Changed { start: usize, count: usize },
    Inserted { start: usize, count: usize },
    Removed { start: usize, count: usize },
    Moved { from: usize, to: usize },
}

impl DataChange {
    /// The item count after applying this change to a list of `count` items.
    pub fn apply(self, count: usize) -> usize {
        match self {
            Self::Reset { count } => count,
            Self::Inserted { count: n, .. } => count.saturating_add(n),
            Self::Removed { count: n, .. } => count.saturating_sub(n),
            Self::Changed { .. } | Self::Moved { .. } => count,
        }
    }
}
