//! Configuration types for EQOS ring accounting

use crate::error::{ConfigError, ConfigResult};
use crate::internal::constants::{
    DEFAULT_DMA_CHANNELS, DESC_SIZE, DISPLAY_COLUMNS, MAX_DMA_CHANNELS, RX_DESC_CNT, TX_DESC_CNT,
};

/// Transfer direction of a descriptor ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Transmit ring
    Tx,
    /// Receive ring
    Rx,
}

/// Fixed shape of one descriptor ring
///
/// The ring length and the descriptor record size never change after the
/// channel is initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RingGeometry {
    len: usize,
    desc_size: usize,
}

impl RingGeometry {
    /// Default TX ring: 256 descriptors of 16 bytes
    pub const DEFAULT_TX: Self = Self {
        len: TX_DESC_CNT,
        desc_size: DESC_SIZE,
    };

    /// Default RX ring: 256 descriptors of 16 bytes
    pub const DEFAULT_RX: Self = Self {
        len: RX_DESC_CNT,
        desc_size: DESC_SIZE,
    };

    /// Create a geometry, validating the length and descriptor size
    pub const fn new(len: usize, desc_size: usize) -> ConfigResult<Self> {
        if len == 0 {
            return Err(ConfigError::InvalidRingLength);
        }
        if desc_size == 0 || desc_size % 4 != 0 {
            return Err(ConfigError::InvalidDescriptorSize);
        }
        Ok(Self { len, desc_size })
    }

    /// Geometry with the standard 16-byte descriptor
    pub const fn with_len(len: usize) -> ConfigResult<Self> {
        Self::new(len, DESC_SIZE)
    }

    /// Number of descriptors in the ring
    #[inline(always)]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; a validated geometry has at least one slot
    #[inline(always)]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Descriptor record size in bytes
    #[inline(always)]
    #[must_use]
    pub const fn desc_size(&self) -> usize {
        self.desc_size
    }

    /// Size of the whole ring in bytes
    #[inline(always)]
    #[must_use]
    pub const fn byte_len(&self) -> usize {
        self.len * self.desc_size
    }
}

/// Complete ring configuration for all DMA channels
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RingConfig {
    /// Number of TX descriptors per channel
    pub tx_desc_cnt: usize,
    /// Number of RX descriptors per channel
    pub rx_desc_cnt: usize,
    /// Descriptor record size in bytes
    pub desc_size: usize,
    /// Number of DMA channels in use
    pub dma_channels: usize,
    /// Indices per line in reports; 0 prints each list on one line
    pub display_columns: usize,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RingConfig {
    /// Create a new configuration with defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tx_desc_cnt: TX_DESC_CNT,
            rx_desc_cnt: RX_DESC_CNT,
            desc_size: DESC_SIZE,
            dma_channels: DEFAULT_DMA_CHANNELS,
            display_columns: DISPLAY_COLUMNS,
        }
    }

    /// Set the TX ring length
    #[must_use]
    pub const fn with_tx_desc_cnt(mut self, count: usize) -> Self {
        self.tx_desc_cnt = count;
        self
    }

    /// Set the RX ring length
    #[must_use]
    pub const fn with_rx_desc_cnt(mut self, count: usize) -> Self {
        self.rx_desc_cnt = count;
        self
    }

    /// Set the descriptor record size in bytes
    #[must_use]
    pub const fn with_desc_size(mut self, size: usize) -> Self {
        self.desc_size = size;
        self
    }

    /// Set the number of DMA channels in use
    #[must_use]
    pub const fn with_dma_channels(mut self, channels: usize) -> Self {
        self.dma_channels = channels;
        self
    }

    /// Set the number of indices printed per report line
    #[must_use]
    pub const fn with_display_columns(mut self, columns: usize) -> Self {
        self.display_columns = columns;
        self
    }

    /// Check every field
    pub const fn validate(&self) -> ConfigResult<()> {
        if let Err(e) = RingGeometry::new(self.tx_desc_cnt, self.desc_size) {
            return Err(e);
        }
        if let Err(e) = RingGeometry::new(self.rx_desc_cnt, self.desc_size) {
            return Err(e);
        }
        if self.dma_channels == 0 || self.dma_channels > MAX_DMA_CHANNELS {
            return Err(ConfigError::InvalidChannel);
        }
        Ok(())
    }

    /// Geometry of the ring for the given direction
    pub const fn geometry(&self, direction: Direction) -> ConfigResult<RingGeometry> {
        match direction {
            Direction::Tx => RingGeometry::new(self.tx_desc_cnt, self.desc_size),
            Direction::Rx => RingGeometry::new(self.rx_desc_cnt, self.desc_size),
        }
    }

    /// Check that `channel` is one of the configured DMA channels
    pub const fn check_channel(&self, channel: usize) -> ConfigResult<()> {
        if channel < self.dma_channels {
            Ok(())
        } else {
            Err(ConfigError::InvalidChannel)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
