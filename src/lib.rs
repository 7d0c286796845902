//! EQOS Descriptor Ring Accounting
//!
//! A `no_std`, `no_alloc` implementation of descriptor ring introspection for
//! the Synopsys DesignWare Ethernet QoS (EQOS) DMA controller.
//!
//! Given the driver's producer/consumer indices, or the channel's head, tail
//! and base pointer registers, the crate reconstructs which descriptors are
//! owned by the device and which by the driver, and lists them in ring order.
//!
//! # Architecture
//!
//! 1. **Ring Layer** ([`ring`]): TX and RX ownership computations, TX
//!    bookkeeping and descriptor snapshots
//! 2. **DMA Layer** ([`dma`]): Descriptor records and descriptor ring storage
//! 3. **Register Layer** ([`unsafe_registers`]): Per-channel pointer register
//!    reads through the [`RegisterAccess`] trait
//! 4. **Report Layer** ([`report`]): `Display` renderings of a channel's state
//!
//! # Features
//!
//! - `log` (default): Emit warnings through the `log` facade
//! - `defmt`: Emit warnings through defmt and derive `defmt::Format`
//! - `critical-section`: Enable the ISR-safe [`sync::SharedTxRing`]
//!
//! # Example
//!
//! ```ignore
//! use ph_eqos_ringstat::{RingConfig, Direction, RxChannelReport, rx_ring_status};
//! use ph_eqos_ringstat::unsafe_registers::{DmaChannelRegs, Mmio};
//!
//! let config = RingConfig::new().with_rx_desc_cnt(64);
//! config.validate()?;
//!
//! // SAFETY: EQOS_BASE is the mapped controller register block
//! let mmio = unsafe { Mmio::new(EQOS_BASE) };
//! let ch0 = DmaChannelRegs::for_config(&mmio, &config, 0)?;
//!
//! let status = rx_ring_status(&config.geometry(Direction::Rx)?, &ch0.rx_pointers());
//! log::info!("{}", RxChannelReport::new(0, cur_rx, status).with_config(&config));
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod config;
pub mod dma;
pub mod error;
pub mod report;
pub mod ring;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Direction, RingConfig, RingGeometry};
pub use dma::{DescriptorRing, DmaDescriptor, RawDescriptor};
pub use error::{ConfigError, ConfigResult, Error, Result, RingError, RingResult};
pub use report::{IndexColumns, RxChannelReport, TxChannelReport};
pub use ring::{
    DescriptorSnapshot, DmaAddress, RingSpan, RxHwPointers, RxOccupancy, RxRingStatus,
    TxOccupancy, TxRingBook, TxRingState, TxRingStatus, rx_ring_status, snapshot_descriptors,
    tx_ring_status,
};

pub use internal::register::RegisterAccess;

/// Low-level register accessors for advanced use.
///
/// Ring status only needs [`DmaChannelRegs::rx_pointers`]; the rest is here
/// for register dumps next to a ring report.
///
/// # Safety
///
/// Constructing an [`Mmio`] is unsafe: the caller vouches for the register
/// block address.
pub mod unsafe_registers {
    pub use crate::internal::register::dma::{
        DMA_CH_CHRDR, DMA_CH_CHTDR, DMA_CH_RDLAR, DMA_CH_RDLAR_HI, DMA_CH_RDRLR, DMA_CH_RDTP,
        DMA_CH_TDLAR, DMA_CH_TDLAR_HI, DMA_CH_TDRLR, DMA_CH_TDTP, DmaChannelRegs, REGISTERS, RING_LEN_MASK, RegisterInfo,
    };
    pub use crate::internal::register::{Mmio, RegisterAccess};
}

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedTxRing;

/// Ring geometry and register layout constants.
pub mod constants {
    pub use crate::internal::constants::{
        // Ring geometry
        DESC_SIZE,
        DESC_WORDS,
        // Presentation
        DISPLAY_COLUMNS,
        // DMA channels
        DEFAULT_DMA_CHANNELS,
        DMA_CHANNEL_BASE,
        DMA_CHANNEL_STRIDE,
        MAX_DMA_CHANNELS,
        RX_DESC_CNT,
        TX_DESC_CNT,
    };
}
