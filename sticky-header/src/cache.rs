#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
type IndexMap<V> = HashMap<usize, V>;
#[cfg(not(feature = "std"))]
type IndexMap<V> = BTreeMap<usize, V>;

/// Cached header geometry for one item index.
///
/// A record with `data == None` marks an index the provider reported as header-less, so the
/// provider is not asked again until the next invalidation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderRecord<D> {
    /// Extra spacing reserved above the item, equal to the header strip height.
    pub height: u32,
    /// List width the header was measured against.
    pub width: u32,
    pub data: Option<D>,
}

impl<D> HeaderRecord<D> {
    pub(crate) fn empty(width: u32) -> Self {
        Self {
            height: 0,
            width,
            data: None,
        }
    }

    pub fn has_header(&self) -> bool {
        self.data.is_some()
    }
}

/// Per-index geometry cache, keyed by item index (not identity).
#[derive(Clone, Debug)]
pub(crate) struct GeometryCache<D> {
    records: IndexMap<HeaderRecord<D>>,
}

impl<D> GeometryCache<D> {
    pub(crate) fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&HeaderRecord<D>> {
        self.records.get(&index)
    }

    pub(crate) fn insert(&mut self, index: usize, record: HeaderRecord<D>) {
        self.records.insert(index, record);
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}

/// The last hover lookup: `record` is the provider's answer for `index`.
#[derive(Clone, Debug)]
pub(crate) struct HoverMemo<D> {
    pub(crate) index: usize,
    pub(crate) record: Option<HeaderRecord<D>>,
}
