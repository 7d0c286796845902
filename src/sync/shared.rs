//! ISR-safe TX ring bookkeeping using critical sections.

use core::cell::RefCell;
use critical_section::Mutex;

use crate::config::RingGeometry;
use crate::ring::{TxRingBook, TxRingState, TxRingStatus, tx_ring_status};

/// TX ring bookkeeping shared between the transmit path, the completion
/// interrupt and status readers.
///
/// All access goes through `critical_section::with()`, disabling interrupts
/// for the duration of the closure. [`status`](Self::status) copies the
/// indices and counters inside one critical section, then walks the copy
/// with interrupts enabled, so a reader never sees a half-updated book.
///
/// # Example
///
/// ```ignore
/// static TX0: SharedTxRing = SharedTxRing::new(&RingGeometry::DEFAULT_TX);
///
/// // transmit path
/// let first = TX0.with(|book| book.submit(2))?;
///
/// // completion interrupt
/// TX0.with(|book| book.reclaim(done)).ok();
///
/// // debug reader
/// let status = TX0.status();
/// ```
pub struct SharedTxRing {
    inner: Mutex<RefCell<TxRingBook>>,
}

impl SharedTxRing {
    /// Create an empty ring book (const, suitable for static initialization).
    pub const fn new(geometry: &RingGeometry) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(TxRingBook::new(geometry))),
        }
    }

    /// Execute a closure with exclusive access to the book.
    ///
    /// Interrupts are disabled for the duration of the closure.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut TxRingBook) -> R,
    {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut TxRingBook) -> R,
    {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .try_borrow_mut()
                .ok()
                .map(|mut book| f(&mut book))
        })
    }

    /// Indices and counters copied inside one critical section.
    pub fn snapshot(&self) -> TxRingState {
        critical_section::with(|cs| self.inner.borrow_ref(cs).snapshot())
    }

    /// Return the book to its freshly initialized state.
    pub fn reset(&self) {
        self.with(TxRingBook::reset);
    }

    /// Free and in-flight sets computed from one consistent snapshot.
    pub fn status(&self) -> TxRingStatus {
        tx_ring_status(&self.snapshot())
    }
}
