//! TX ring accounting from the driver's software indices.
//!
//! The transmit side never consults hardware pointers. `cur_tx` is the next
//! slot the driver will hand to the device and `dirty_tx` the oldest slot
//! still waiting to be reclaimed, so the free run is `cur_tx..dirty_tx` and
//! the in-flight run is `dirty_tx..cur_tx`, both walked modulo the ring
//! length.
//!
//! Empty and full rings have `cur_tx == dirty_tx`; the counters decide
//! which one it is before any walk happens, otherwise a zero-length walk
//! would be indistinguishable from a full lap.

use super::index::RingSpan;
use crate::error::{RingError, RingResult};

#[cfg(feature = "log")]
use log::warn;

/// Immutable copy of the TX bookkeeping of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxRingState {
    len: usize,
    cur_tx: usize,
    dirty_tx: usize,
    free_desc_cnt: usize,
    tx_pkt_queued: usize,
}

impl TxRingState {
    /// Capture a snapshot of the TX counters.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero, if either index is not below `len`, or if
    /// either counter exceeds `len`. Any of these means the ring bookkeeping
    /// is already corrupt.
    #[must_use]
    pub const fn new(
        len: usize,
        cur_tx: usize,
        dirty_tx: usize,
        free_desc_cnt: usize,
        tx_pkt_queued: usize,
    ) -> Self {
        match Self::try_new(len, cur_tx, dirty_tx, free_desc_cnt, tx_pkt_queued) {
            Ok(state) => state,
            Err(_) => panic!("TX ring snapshot outside ring bounds"),
        }
    }

    /// Checked variant of [`TxRingState::new`].
    pub const fn try_new(
        len: usize,
        cur_tx: usize,
        dirty_tx: usize,
        free_desc_cnt: usize,
        tx_pkt_queued: usize,
    ) -> RingResult<Self> {
        if cur_tx >= len || dirty_tx >= len {
            return Err(RingError::IndexOutOfRange);
        }
        if free_desc_cnt > len || tx_pkt_queued > len {
            return Err(RingError::CountExceedsRing);
        }
        Ok(Self {
            len,
            cur_tx,
            dirty_tx,
            free_desc_cnt,
            tx_pkt_queued,
        })
    }

    /// Ring length
    #[inline(always)]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false for a valid snapshot
    #[inline(always)]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Next slot the driver will submit
    #[inline(always)]
    #[must_use]
    pub const fn cur_tx(&self) -> usize {
        self.cur_tx
    }

    /// Oldest slot not yet reclaimed
    #[inline(always)]
    #[must_use]
    pub const fn dirty_tx(&self) -> usize {
        self.dirty_tx
    }

    /// Free descriptor counter as kept by the driver
    #[inline(always)]
    #[must_use]
    pub const fn free_desc_cnt(&self) -> usize {
        self.free_desc_cnt
    }

    /// Queued descriptor counter as kept by the driver
    #[inline(always)]
    #[must_use]
    pub const fn tx_pkt_queued(&self) -> usize {
        self.tx_pkt_queued
    }

    /// Whether the counters agree with each other and with the indices.
    ///
    /// Holds whenever the snapshot was taken atomically from a correctly
    /// maintained book.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.free_desc_cnt + self.tx_pkt_queued == self.len
            && (self.dirty_tx + self.tx_pkt_queued) % self.len == self.cur_tx
    }
}

/// Which of the three accounting cases a TX snapshot falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxOccupancy {
    /// Every descriptor belongs to the driver
    AllFree,
    /// Every descriptor is queued for transmission
    AllInFlight,
    /// Some descriptors on each side
    Mixed,
}

/// Reconstructed TX ring state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxRingStatus {
    state: TxRingState,
    occupancy: TxOccupancy,
}

impl TxRingStatus {
    /// Snapshot the status was computed from
    #[must_use]
    pub const fn state(&self) -> &TxRingState {
        &self.state
    }

    /// Accounting case
    #[must_use]
    pub const fn occupancy(&self) -> TxOccupancy {
        self.occupancy
    }

    /// Free descriptors as counted by the driver
    #[must_use]
    pub const fn free_count(&self) -> usize {
        self.state.free_desc_cnt
    }

    /// In-flight descriptors as counted by the driver
    #[must_use]
    pub const fn in_flight_count(&self) -> usize {
        self.state.tx_pkt_queued
    }

    /// Free slots in ring order, starting at `cur_tx`.
    #[must_use]
    pub const fn free_indices(&self) -> RingSpan {
        let s = &self.state;
        match self.occupancy {
            TxOccupancy::AllFree => RingSpan::full(s.cur_tx, s.len),
            TxOccupancy::AllInFlight => RingSpan::empty(s.len),
            TxOccupancy::Mixed => RingSpan::between(s.cur_tx, s.dirty_tx, s.len),
        }
    }

    /// In-flight slots in ring order, starting at `dirty_tx`.
    #[must_use]
    pub const fn in_flight_indices(&self) -> RingSpan {
        let s = &self.state;
        match self.occupancy {
            TxOccupancy::AllFree => RingSpan::empty(s.len),
            TxOccupancy::AllInFlight => RingSpan::full(s.dirty_tx, s.len),
            TxOccupancy::Mixed => RingSpan::between(s.dirty_tx, s.cur_tx, s.len),
        }
    }
}

/// Reconstruct the free and in-flight sets of a TX ring.
///
/// Pure computation over the snapshot; nothing is read from hardware.
#[must_use]
pub fn tx_ring_status(state: &TxRingState) -> TxRingStatus {
    let occupancy = if state.free_desc_cnt == state.len && state.tx_pkt_queued == 0 {
        TxOccupancy::AllFree
    } else if state.free_desc_cnt == 0 && state.tx_pkt_queued == state.len {
        TxOccupancy::AllInFlight
    } else {
        TxOccupancy::Mixed
    };

    if !state.is_consistent() {
        warn_inconsistent(state);
    }

    TxRingStatus {
        state: *state,
        occupancy,
    }
}

#[cfg_attr(not(any(feature = "log", feature = "defmt")), allow(unused_variables))]
fn warn_inconsistent(state: &TxRingState) {
    #[cfg(feature = "log")]
    warn!(
        "TX ring counters disagree with indices: cur_tx={} dirty_tx={} free_desc_cnt={} tx_pkt_queued={} len={}",
        state.cur_tx, state.dirty_tx, state.free_desc_cnt, state.tx_pkt_queued, state.len
    );

    #[cfg(feature = "defmt")]
    defmt::warn!(
        "TX ring counters disagree with indices: cur_tx={} dirty_tx={} free_desc_cnt={} tx_pkt_queued={}",
        state.cur_tx,
        state.dirty_tx,
        state.free_desc_cnt,
        state.tx_pkt_queued
    );
}

// =============================================================================
// Tests
// =============================================================================
