//! Normal DMA descriptor shared by the TX and RX rings.
//!
//! A descriptor is four 32-bit words. Word 3 carries the OWN bit in its most
//! significant position; everything else is format specific and is treated
//! here as raw data.

pub mod bits;

use crate::internal::constants::DESC_WORDS;
use bits::des3;

/// Volatile cell wrapper for descriptor fields
///
/// Ensures all accesses are volatile to prevent compiler optimization
/// from reordering or caching descriptor field accesses.
#[repr(transparent)]
pub(crate) struct VolatileCell<T: Copy> {
    value: core::cell::UnsafeCell<T>,
}

// Safety: VolatileCell is safe to share between threads because all access
// is through volatile operations, which are single-copy atomic for u32.
unsafe impl<T: Copy> Sync for VolatileCell<T> {}

impl<T: Copy> VolatileCell<T> {
    /// Create a new volatile cell with the given initial value
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value: core::cell::UnsafeCell::new(value),
        }
    }

    /// Read the value (volatile read)
    #[inline(always)]
    pub fn get(&self) -> T {
        // SAFETY: the pointer comes from a live UnsafeCell owned by self
        unsafe { core::ptr::read_volatile(self.value.get()) }
    }

    /// Write a value (volatile write)
    #[inline(always)]
    pub fn set(&self, value: T) {
        // SAFETY: the pointer comes from a live UnsafeCell owned by self
        unsafe { core::ptr::write_volatile(self.value.get(), value) }
    }

    /// Update the value using a function (read-modify-write)
    #[inline(always)]
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(T) -> T,
    {
        let old = self.get();
        self.set(f(old));
    }
}

/// Read access to the raw words of a descriptor record.
///
/// Implemented by every descriptor type a [`DescriptorRing`](crate::dma::DescriptorRing)
/// can hold, so ring dumps work without knowing the record's format.
pub trait RawDescriptor {
    /// The four descriptor words, in memory order
    fn raw_words(&self) -> [u32; DESC_WORDS];

    /// Whether the device currently owns the descriptor
    fn is_owned(&self) -> bool {
        (self.raw_words()[3] & des3::OWN) != 0
    }
}

/// Normal descriptor (16 bytes, 4 doublewords).
#[repr(C)]
#[repr(align(4))]
pub struct DmaDescriptor {
    words: [VolatileCell<u32>; DESC_WORDS],
}

impl DmaDescriptor {
    /// Size of the descriptor in bytes
    pub const SIZE: usize = 16;

    /// Create a new zeroed descriptor.
    #[must_use]
    pub const fn new() -> Self {
        Self::from_words([0; DESC_WORDS])
    }

    /// Create a descriptor holding the given words.
    #[must_use]
    pub const fn from_words(words: [u32; DESC_WORDS]) -> Self {
        Self {
            words: [
                VolatileCell::new(words[0]),
                VolatileCell::new(words[1]),
                VolatileCell::new(words[2]),
                VolatileCell::new(words[3]),
            ],
        }
    }

    /// Overwrite all four words.
    pub fn set_words(&self, words: [u32; DESC_WORDS]) {
        for (cell, word) in self.words.iter().zip(words) {
            cell.set(word);
        }
    }

    /// Give ownership to DMA.
    #[inline(always)]
    pub fn set_owned(&self) {
        self.words[3].update(|v| v | des3::OWN);
    }

    /// Take ownership back from DMA.
    #[inline(always)]
    pub fn clear_owned(&self) {
        self.words[3].update(|v| v & !des3::OWN);
    }

    /// Check if this is a context descriptor.
    #[inline(always)]
    #[must_use]
    pub fn is_context(&self) -> bool {
        (self.words[3].get() & des3::CTXT) != 0
    }

    /// Check if this is the first descriptor of a frame.
    #[inline(always)]
    #[must_use]
    pub fn is_first(&self) -> bool {
        (self.words[3].get() & des3::FIRST_DESC) != 0
    }

    /// Check if this is the last descriptor of a frame.
    #[inline(always)]
    #[must_use]
    pub fn is_last(&self) -> bool {
        (self.words[3].get() & des3::LAST_DESC) != 0
    }
}

impl RawDescriptor for DmaDescriptor {
    fn raw_words(&self) -> [u32; DESC_WORDS] {
        [
            self.words[0].get(),
            self.words[1].get(),
            self.words[2].get(),
            self.words[3].get(),
        ]
    }
}

impl Default for DmaDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

// Safety: DmaDescriptor uses volatile cells for all DMA-accessed fields
unsafe impl Sync for DmaDescriptor {}
unsafe impl Send for DmaDescriptor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_size() {
        assert_eq!(core::mem::size_of::<DmaDescriptor>(), DmaDescriptor::SIZE);
        assert_eq!(DmaDescriptor::SIZE, crate::internal::constants::DESC_SIZE);
    }

    #[test]
    fn descriptor_alignment() {
        assert_eq!(core::mem::align_of::<DmaDescriptor>(), 4);
    }

    #[test]
    fn new_descriptor_is_zero_and_driver_owned() {
        let desc = DmaDescriptor::new();
        assert_eq!(desc.raw_words(), [0; 4]);
        assert!(!desc.is_owned());
    }

    #[test]
    fn own_bit_is_msb_of_word3() {
        let desc = DmaDescriptor::new();
        desc.set_owned();
        assert_eq!(desc.raw_words()[3], 0x8000_0000);
        assert!(desc.is_owned());

        desc.clear_owned();
        assert!(!desc.is_owned());
    }

    #[test]
    fn set_owned_preserves_other_bits() {
        let desc = DmaDescriptor::from_words([0x1000, 0, 0x5EE, des3::FIRST_DESC | des3::LAST_DESC]);
        desc.set_owned();
        assert!(desc.is_first());
        assert!(desc.is_last());
        assert!(!desc.is_context());
        assert_eq!(desc.raw_words()[0], 0x1000);
        assert_eq!(desc.raw_words()[2], 0x5EE);
    }

    #[test]
    fn set_words_round_trips_raw() {
        let desc = DmaDescriptor::default();
        desc.set_words([1, 2, 3, des3::CTXT]);
        assert_eq!(desc.raw_words(), [1, 2, 3, des3::CTXT]);
        assert!(desc.is_context());
    }
}
