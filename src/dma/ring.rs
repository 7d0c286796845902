//! Fixed-size circular descriptor array with its DMA base address.

use crate::config::RingGeometry;
use crate::error::{ConfigResult, RingError, RingResult};

/// Circular descriptor ring.
///
/// The descriptors are slots in one contiguous array; `dma_base` is the bus
/// address the device sees for slot 0, which is what the list address
/// register holds.
pub struct DescriptorRing<D, const N: usize> {
    /// Array of descriptors
    pub(crate) descriptors: [D; N],
    /// Bus address of slot 0
    pub(crate) dma_base: u64,
}

impl<D, const N: usize> DescriptorRing<D, N> {
    /// Size of one slot in bytes
    pub const SLOT_SIZE: usize = core::mem::size_of::<D>();

    /// Create a ring from an existing array and its bus address
    #[must_use]
    pub const fn from_array(descriptors: [D; N], dma_base: u64) -> Self {
        Self {
            descriptors,
            dma_base,
        }
    }

    /// Get the number of descriptors in the ring
    #[inline(always)]
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the ring is empty (always false for a usable ring)
    #[inline(always)]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Bus address of slot 0
    #[inline(always)]
    #[must_use]
    pub const fn dma_base(&self) -> u64 {
        self.dma_base
    }

    /// Ring geometry as seen by the accounting code
    pub const fn geometry(&self) -> ConfigResult<RingGeometry> {
        RingGeometry::new(N, Self::SLOT_SIZE)
    }

    /// Bus address of the slot at `index` (wraps modulo the ring length)
    #[inline(always)]
    #[must_use]
    pub const fn slot_addr(&self, index: usize) -> u64 {
        self.dma_base + ((index % N) * Self::SLOT_SIZE) as u64
    }

    /// Slot index for a bus address inside the ring
    pub fn index_of(&self, addr: u64) -> RingResult<usize> {
        let offset = addr
            .checked_sub(self.dma_base)
            .ok_or(RingError::AddressBelowBase)?;
        let index = offset / Self::SLOT_SIZE as u64;
        if index >= N as u64 {
            return Err(RingError::IndexOutOfRange);
        }
        Ok(index as usize)
    }

    /// Get a reference to a descriptor at a specific index
    #[inline(always)]
    pub fn get(&self, index: usize) -> &D {
        &self.descriptors[index % N]
    }

    /// Get a mutable reference to a descriptor at a specific index
    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> &mut D {
        &mut self.descriptors[index % N]
    }

    /// Iterate over all descriptors
    pub fn iter(&self) -> impl Iterator<Item = &D> {
        self.descriptors.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
