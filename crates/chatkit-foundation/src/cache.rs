//! Memoized attributes, keyed by index position.
//!
//! The cache is pure memoization: it never decides when its contents are
//! stale. [`crate::MessagesLayout`] owns it and invalidates entries when the
//! width changes, the data reloads, or a message is reported as changed.

use std::rc::Rc;

use chatkit_ui_graphics::Size;
use rustc_hash::FxHashMap;

use crate::{IndexPosition, LayoutAttributes};

/// Section header or footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SupplementaryKind {
    Header,
    Footer,
}

#[derive(Debug, Default)]
pub struct AttributeCache {
    entries: FxHashMap<IndexPosition, Rc<LayoutAttributes>>,
    supplementary: FxHashMap<(SupplementaryKind, usize), Size>,
}

impl AttributeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: IndexPosition) -> Option<Rc<LayoutAttributes>> {
        let hit = self.entries.get(&index).cloned();
        if hit.is_some() {
            log::trace!("attribute cache hit at {index}");
        } else {
            log::trace!("attribute cache miss at {index}");
        }
        hit
    }

    /// Stores `attributes` under their own index and returns the shared handle.
    pub fn put(&mut self, attributes: LayoutAttributes) -> Rc<LayoutAttributes> {
        let attributes = Rc::new(attributes);
        self.entries.insert(attributes.index, Rc::clone(&attributes));
        attributes
    }

    pub fn contains(&self, index: IndexPosition) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn invalidate(&mut self, index: IndexPosition) -> bool {
        self.entries.remove(&index).is_some()
    }

    pub fn invalidate_all(&mut self) {
        self.entries.clear();
        self.supplementary.clear();
    }

    pub fn supplementary(&self, kind: SupplementaryKind, section: usize) -> Option<Size> {
        self.supplementary.get(&(kind, section)).copied()
    }

    pub fn put_supplementary(&mut self, kind: SupplementaryKind, section: usize, size: Size) {
        self.supplementary.insert((kind, section), size);
    }

    /// Drops the header and footer sizes of `section`.
    pub fn invalidate_supplementary(&mut self, section: usize) {
        self.supplementary.remove(&(SupplementaryKind::Header, section));
        self.supplementary.remove(&(SupplementaryKind::Footer, section));
    }

    /// Number of cached item attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod tests;
