//! Raw descriptor contents for a span of ring slots.
//!
//! Pure data extraction: every yielded record carries the slot index, the
//! slot's bus address and the four raw words. Nothing here looks at the OWN
//! bit or any length field.

use super::index::RingSpan;
use crate::dma::{DescriptorRing, RawDescriptor};
use crate::internal::constants::DESC_WORDS;

/// One descriptor slot as it looked when it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DescriptorSnapshot {
    /// Slot index in the ring
    pub index: usize,
    /// Bus address of the slot
    pub dma_addr: u64,
    /// The four descriptor words in memory order
    pub words: [u32; DESC_WORDS],
}

impl core::fmt::Display for DescriptorSnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [w0, w1, w2, w3] = self.words;
        write!(
            f,
            "[{:#010x} {:03}] = {:#x} : {:#x} : {:#x} : {:#x}",
            self.dma_addr, self.index, w0, w1, w2, w3
        )
    }
}

/// Iterator over descriptor snapshots along a [`RingSpan`].
pub struct DescriptorSnapshots<'a, D, const N: usize> {
    ring: &'a DescriptorRing<D, N>,
    span: RingSpan,
}

impl<'a, D: RawDescriptor, const N: usize> DescriptorSnapshots<'a, D, N> {
    /// Walk `span` over `ring`.
    ///
    /// # Panics
    ///
    /// Panics if the span was built for a ring of a different length.
    #[must_use]
    pub fn over(ring: &'a DescriptorRing<D, N>, span: RingSpan) -> Self {
        assert_eq!(span.ring_len(), N, "span built for a different ring");
        Self { ring, span }
    }
}

impl<D: RawDescriptor, const N: usize> Iterator for DescriptorSnapshots<'_, D, N> {
    type Item = DescriptorSnapshot;

    fn next(&mut self) -> Option<DescriptorSnapshot> {
        let index = self.span.next()?;
        Some(DescriptorSnapshot {
            index,
            dma_addr: self.ring.slot_addr(index),
            words: self.ring.get(index).raw_words(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.span.size_hint()
    }
}

impl<D: RawDescriptor, const N: usize> ExactSizeIterator for DescriptorSnapshots<'_, D, N> {}

impl<D: RawDescriptor, const N: usize> core::iter::FusedIterator
    for DescriptorSnapshots<'_, D, N>
{
}

/// Snapshot `count` descriptors starting at `start`, wrapping at the end of
/// the ring.
///
/// # Panics
///
/// Panics if `start >= N` or `count > N`.
#[must_use]
pub fn snapshot_descriptors<D: RawDescriptor, const N: usize>(
    ring: &DescriptorRing<D, N>,
    start: usize,
    count: usize,
) -> DescriptorSnapshots<'_, D, N> {
    DescriptorSnapshots::over(ring, RingSpan::new(start, count, N))
}

// =============================================================================
// Tests
// =============================================================================
