//! RX ring accounting from hardware pointer registers.
//!
//! The receive side is reconstructed from three registers of the DMA
//! channel: the current application receive descriptor (head, where the
//! device writes next), the receive tail pointer (the last descriptor the
//! driver granted) and the receive descriptor list address (ring base).
//! Head and tail are byte addresses; they become indices by subtracting the
//! base and dividing by the descriptor size.
//!
//! # Head equals tail
//!
//! Address arithmetic alone cannot tell a drained ring from a completely
//! full one when both pointers name the same slot. The convention here is
//! "device owns nothing": the status reports zero device descriptors, marks
//! itself [`RxOccupancy::HeadEqualsTail`] and a warning is logged. Callers
//! that need the real answer have to consult an independent fill counter.

use super::index::RingSpan;
use crate::config::RingGeometry;
use crate::error::{RingError, RingResult};

#[cfg(feature = "log")]
use log::warn;

// =============================================================================
// Address Width
// =============================================================================

/// Unsigned integer type holding a descriptor DMA address.
///
/// Implemented for `u32` and `u64`. Head, tail and base of one snapshot are
/// always the same width, so the subtraction never mixes widths.
pub trait DmaAddress: Copy + Ord + core::fmt::Debug {
    /// Byte offset of `self` above `base`, or `None` if `self` is below it
    /// or the offset does not fit in `usize`.
    fn offset_from(self, base: Self) -> Option<usize>;

    /// Widen to `u64`
    fn to_u64(self) -> u64;
}

impl DmaAddress for u32 {
    #[inline(always)]
    fn offset_from(self, base: Self) -> Option<usize> {
        self.checked_sub(base).map(|off| off as usize)
    }

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self as u64
    }
}

impl DmaAddress for u64 {
    #[inline(always)]
    fn offset_from(self, base: Self) -> Option<usize> {
        self.checked_sub(base)
            .and_then(|off| usize::try_from(off).ok())
    }

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self
    }
}

// =============================================================================
// Pointer Snapshot
// =============================================================================

/// RX pointer registers of one channel, read once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RxHwPointers<A: DmaAddress> {
    /// Current application receive descriptor (device position)
    pub head: A,
    /// Receive descriptor tail pointer (driver-granted limit)
    pub tail: A,
    /// Receive descriptor list address (ring base)
    pub base: A,
}

/// Head and tail converted to ring indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RxIndices {
    /// Slot the device fills next
    pub head_idx: usize,
    /// Last slot granted to the device
    pub tail_idx: usize,
}

impl<A: DmaAddress> RxHwPointers<A> {
    /// Bundle three register values
    pub const fn new(head: A, tail: A, base: A) -> Self {
        Self { head, tail, base }
    }

    /// Convert head and tail to indices, checking they fall inside the ring.
    pub fn try_indices(&self, geometry: &RingGeometry) -> RingResult<RxIndices> {
        Ok(RxIndices {
            head_idx: address_to_index(self.head, self.base, geometry)?,
            tail_idx: address_to_index(self.tail, self.base, geometry)?,
        })
    }
}

/// Index of the descriptor at `addr` in a ring starting at `base`.
///
/// Byte offsets that are not a multiple of the descriptor size truncate to
/// the slot containing them.
pub fn address_to_index<A: DmaAddress>(
    addr: A,
    base: A,
    geometry: &RingGeometry,
) -> RingResult<usize> {
    let offset = addr
        .offset_from(base)
        .ok_or(RingError::AddressBelowBase)?;
    let index = offset / geometry.desc_size();
    if index >= geometry.len() {
        return Err(RingError::IndexOutOfRange);
    }
    Ok(index)
}

// =============================================================================
// Status
// =============================================================================

/// Which of the three pointer relations an RX snapshot falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxOccupancy {
    /// Head and tail name the same slot; reported as empty
    HeadEqualsTail,
    /// Head above tail; the device-owned run wraps past the end
    Wrapped,
    /// Head below tail; the device-owned run is one forward stretch
    Linear,
}

/// Reconstructed RX ring state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RxRingStatus {
    len: usize,
    head_idx: usize,
    tail_idx: usize,
    occupancy: RxOccupancy,
    dev_desc_cnt: usize,
    drv_desc_cnt: usize,
}

impl RxRingStatus {
    /// Classify a head/tail index pair.
    ///
    /// # Panics
    ///
    /// Panics if either index is not below `len`.
    #[must_use]
    pub fn from_indices(len: usize, head_idx: usize, tail_idx: usize) -> Self {
        assert!(
            head_idx < len && tail_idx < len,
            "RX ring index outside ring: head={head_idx} tail={tail_idx} len={len}"
        );

        let (occupancy, dev_desc_cnt) = if head_idx == tail_idx {
            warn_head_equals_tail(head_idx, len);
            (RxOccupancy::HeadEqualsTail, 0)
        } else if head_idx > tail_idx {
            (RxOccupancy::Wrapped, len - (head_idx - tail_idx) + 1)
        } else {
            (RxOccupancy::Linear, tail_idx - head_idx + 1)
        };

        Self {
            len,
            head_idx,
            tail_idx,
            occupancy,
            dev_desc_cnt,
            drv_desc_cnt: len - dev_desc_cnt,
        }
    }

    /// Ring length
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false for a valid status
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Device position as a ring index
    #[must_use]
    pub const fn head_idx(&self) -> usize {
        self.head_idx
    }

    /// Driver-granted limit as a ring index
    #[must_use]
    pub const fn tail_idx(&self) -> usize {
        self.tail_idx
    }

    /// Pointer relation
    #[must_use]
    pub const fn occupancy(&self) -> RxOccupancy {
        self.occupancy
    }

    /// True when head and tail coincide and the empty convention applied
    #[must_use]
    pub const fn is_ambiguous(&self) -> bool {
        matches!(self.occupancy, RxOccupancy::HeadEqualsTail)
    }

    /// Descriptors currently owned by the device
    #[must_use]
    pub const fn dev_desc_cnt(&self) -> usize {
        self.dev_desc_cnt
    }

    /// Descriptors currently owned by the driver
    #[must_use]
    pub const fn drv_desc_cnt(&self) -> usize {
        self.drv_desc_cnt
    }

    /// Device-owned slots in ring order, starting at the head.
    #[must_use]
    pub const fn device_indices(&self) -> RingSpan {
        RingSpan::new(self.head_idx, self.dev_desc_cnt, self.len)
    }

    /// Driver-owned slots in ring order, starting right after the device run.
    #[must_use]
    pub const fn driver_indices(&self) -> RingSpan {
        let start = (self.head_idx + self.dev_desc_cnt) % self.len;
        RingSpan::new(start, self.drv_desc_cnt, self.len)
    }
}

/// Reconstruct device and driver ownership of an RX ring from its pointers.
///
/// # Panics
///
/// Panics if head or tail lies below the base or past the end of the ring;
/// use [`RxHwPointers::try_indices`] first when the values are untrusted.
#[must_use]
pub fn rx_ring_status<A: DmaAddress>(
    geometry: &RingGeometry,
    pointers: &RxHwPointers<A>,
) -> RxRingStatus {
    let indices = match pointers.try_indices(geometry) {
        Ok(indices) => indices,
        Err(e) => panic!(
            "RX pointers outside ring ({}): head={:#x} tail={:#x} base={:#x}",
            e.as_str(),
            pointers.head.to_u64(),
            pointers.tail.to_u64(),
            pointers.base.to_u64()
        ),
    };
    RxRingStatus::from_indices(geometry.len(), indices.head_idx, indices.tail_idx)
}

#[cfg_attr(not(any(feature = "log", feature = "defmt")), allow(unused_variables))]
fn warn_head_equals_tail(index: usize, len: usize) {
    #[cfg(feature = "log")]
    warn!(
        "RX ring head == tail at index {index} of {len}: empty and full are indistinguishable, reporting empty"
    );

    #[cfg(feature = "defmt")]
    defmt::warn!(
        "RX ring head == tail at index {} of {}: reporting empty",
        index,
        len
    );
}

// =============================================================================
// Tests
// =============================================================================
