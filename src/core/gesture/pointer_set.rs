use fnv::FnvHashMap;

use crate::core::data::pointer_sample::{PointerId, PointerSample};

/// Last known sample of every active contact, keyed by pointer id.
#[derive(Debug, Clone, Default)]
pub struct PointerSet {
    samples: FnvHashMap<PointerId, PointerSample>,
}

impl PointerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the sample for its id.
    pub fn track(&mut self, sample: PointerSample) {
        self.samples.insert(sample.id, sample);
    }

    /// Stores `sample` in place of the prior sample with the same id and
    /// returns that prior sample, or `None` (storing nothing) for an unknown id.
    pub fn replace(&mut self, sample: PointerSample) -> Option<PointerSample> {
        let slot = self.samples.get_mut(&sample.id)?;

        Some(std::mem::replace(slot, sample))
    }

    pub fn release(&mut self, id: PointerId) -> Option<PointerSample> {
        self.samples.remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: PointerId) -> Option<&PointerSample> {
        self.samples.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
