//! Descriptor ring accounting.
//!
//! Reconstructs which slots of a TX or RX descriptor ring currently belong
//! to the device and which to the driver.
//!
//! - [`tx`]: from the driver's own producer/consumer indices and counters
//! - [`rx`]: from the channel's head, tail and base pointer registers
//! - [`book`]: the TX bookkeeping the transmit path keeps up to date
//! - [`snapshot`]: raw descriptor words for a span of slots
//! - [`index`]: wraparound arithmetic shared by all of the above
//!
//! Everything here is a pure computation over values already read; the
//! results borrow nothing and allocate nothing.

pub mod book;
pub mod index;
pub mod rx;
pub mod snapshot;
pub mod tx;

pub use book::TxRingBook;
pub use index::{RingSpan, decr, distance, incr};
pub use rx::{
    DmaAddress, RxHwPointers, RxIndices, RxOccupancy, RxRingStatus, address_to_index,
    rx_ring_status,
};
pub use snapshot::{DescriptorSnapshot, DescriptorSnapshots, snapshot_descriptors};
pub use tx::{TxOccupancy, TxRingState, TxRingStatus, tx_ring_status};
