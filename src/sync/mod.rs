//! Synchronization and Concurrency Support
//!
//! Interrupt-safe sharing of the TX ring bookkeeping between the transmit
//! path, the completion handler and status readers.
//!
//! [`SharedTxRing`] keeps a [`TxRingBook`](crate::ring::TxRingBook) in a
//! `critical_section::Mutex<RefCell<_>>`. Its status is always computed from
//! one consistent snapshot.
//!
//! # Feature Flags
//!
//! - `critical-section`: Enables this module
//!
//! # Example
//!
//! ```ignore
//! use ph_eqos_ringstat::RingGeometry;
//! use ph_eqos_ringstat::sync::SharedTxRing;
//!
//! static TX0: SharedTxRing = SharedTxRing::new(&RingGeometry::DEFAULT_TX);
//!
//! #[interrupt]
//! fn EQOS_DMA_CH0() {
//!     let done = completed_descriptors();
//!     TX0.with(|book| book.reclaim(done)).ok();
//! }
//!
//! fn dump() {
//!     let status = TX0.status();
//!     log::info!("free={} in flight={}", status.free_count(), status.in_flight_count());
//! }
//! ```

mod shared;

pub use shared::SharedTxRing;
