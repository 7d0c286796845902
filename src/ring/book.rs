//! TX ring bookkeeping as maintained by the transmit hot path.
//!
//! Submission hands slots to the device starting at `cur_tx`; completion
//! hands them back starting at `dirty_tx`. Both counters move together so
//! `free_desc_cnt + tx_pkt_queued` always equals the ring length.

use super::index::incr;
use super::tx::{TxRingState, TxRingStatus, tx_ring_status};
use crate::config::RingGeometry;
use crate::error::{RingError, RingResult};

/// Producer/consumer indices and counters of one TX ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxRingBook {
    len: usize,
    cur_tx: usize,
    dirty_tx: usize,
    free_desc_cnt: usize,
    tx_pkt_queued: usize,
}

impl TxRingBook {
    /// Book for an empty ring of `geometry.len()` slots.
    #[must_use]
    pub const fn new(geometry: &RingGeometry) -> Self {
        Self {
            len: geometry.len(),
            cur_tx: 0,
            dirty_tx: 0,
            free_desc_cnt: geometry.len(),
            tx_pkt_queued: 0,
        }
    }

    /// Ring length
    #[inline(always)]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; geometries are never empty
    #[inline(always)]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots available for submission
    #[inline(always)]
    #[must_use]
    pub const fn free_desc_cnt(&self) -> usize {
        self.free_desc_cnt
    }

    /// Slots owned by the device
    #[inline(always)]
    #[must_use]
    pub const fn tx_pkt_queued(&self) -> usize {
        self.tx_pkt_queued
    }

    /// Next slot to submit
    #[inline(always)]
    #[must_use]
    pub const fn cur_tx(&self) -> usize {
        self.cur_tx
    }

    /// Oldest unreclaimed slot
    #[inline(always)]
    #[must_use]
    pub const fn dirty_tx(&self) -> usize {
        self.dirty_tx
    }

    /// Hand `count` slots to the device. Returns the first slot used.
    pub fn submit(&mut self, count: usize) -> RingResult<usize> {
        if count > self.free_desc_cnt {
            return Err(RingError::NoDescriptorsAvailable);
        }
        let first = self.cur_tx;
        self.cur_tx = incr(self.cur_tx, count, self.len);
        self.free_desc_cnt -= count;
        self.tx_pkt_queued += count;
        Ok(first)
    }

    /// Take back `count` completed slots from the device.
    pub fn reclaim(&mut self, count: usize) -> RingResult<()> {
        if count > self.tx_pkt_queued {
            return Err(RingError::NothingToReclaim);
        }
        self.dirty_tx = incr(self.dirty_tx, count, self.len);
        self.tx_pkt_queued -= count;
        self.free_desc_cnt += count;
        Ok(())
    }

    /// Return to the freshly initialized state.
    pub fn reset(&mut self) {
        self.cur_tx = 0;
        self.dirty_tx = 0;
        self.free_desc_cnt = self.len;
        self.tx_pkt_queued = 0;
    }

    /// Copy the indices and counters into an immutable snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> TxRingState {
        TxRingState::new(
            self.len,
            self.cur_tx,
            self.dirty_tx,
            self.free_desc_cnt,
            self.tx_pkt_queued,
        )
    }

    /// Free and in-flight sets of the ring right now.
    pub fn status(&self) -> TxRingStatus {
        tx_ring_status(&self.snapshot())
    }
}

// =============================================================================
// Tests
// =============================================================================
