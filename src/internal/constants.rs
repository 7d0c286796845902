//! Centralized Constants
//!
//! This module provides a single source of truth for the ring geometry
//! defaults and the DMA channel register layout used throughout the crate.
//!
//! # Organization
//!
//! Constants are grouped by category:
//! - **Ring geometry**: Descriptor counts and descriptor record size
//! - **DMA channels**: Channel register window placement
//! - **Presentation**: Index list wrapping for reports
//!
//! # Note
//!
//! Descriptor bit definitions remain in `dma::descriptor::bits` and the
//! per-channel register offsets in `internal::register::dma`.

// =============================================================================
// Ring Geometry
// =============================================================================

/// Default number of transmit descriptors per channel
pub const TX_DESC_CNT: usize = 256;

/// Default number of receive descriptors per channel
pub const RX_DESC_CNT: usize = 256;

/// Number of 32-bit words in a normal descriptor
pub const DESC_WORDS: usize = 4;

/// Size of a normal descriptor in bytes (4 doublewords)
pub const DESC_SIZE: usize = DESC_WORDS * 4;

// =============================================================================
// DMA Channels
// =============================================================================

/// Maximum number of DMA channels on the controller
pub const MAX_DMA_CHANNELS: usize = 8;

/// Default number of DMA channels in use
pub const DEFAULT_DMA_CHANNELS: usize = 1;

/// Offset of DMA channel 0 registers from the controller base
pub const DMA_CHANNEL_BASE: usize = 0x1100;

/// Stride between consecutive DMA channel register windows
pub const DMA_CHANNEL_STRIDE: usize = 0x80;

// =============================================================================
// Presentation
// =============================================================================

/// Indices printed per line in ring reports
pub const DISPLAY_COLUMNS: usize = 16;
