//! Error types for EQOS ring accounting
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Ring geometry and configuration failures
//! - [`RingError`]: Out-of-range indices, bad pointers, bookkeeping misuse
//!
//! The unified [`Error`] enum wraps both domain errors and is returned
//! by the checked constructors and the TX bookkeeping methods.
//!
//! The status routines themselves never return an error: an index outside
//! the ring there means the ring was corrupted elsewhere in the driver, and
//! they panic instead.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration errors
///
/// These errors occur when a [`RingConfig`](crate::RingConfig) or a
/// [`RingGeometry`](crate::RingGeometry) is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Ring length is zero
    InvalidRingLength,
    /// Descriptor size is zero or not a multiple of 4 bytes
    InvalidDescriptorSize,
    /// DMA channel number or channel count out of range
    InvalidChannel,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidRingLength => "invalid ring length",
            ConfigError::InvalidDescriptorSize => "invalid descriptor size",
            ConfigError::InvalidChannel => "invalid DMA channel",
        }
    }
}

// =============================================================================
// Ring Errors
// =============================================================================

/// Ring index and bookkeeping errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RingError {
    /// Index is not below the ring length
    IndexOutOfRange,
    /// Counter is larger than the ring length
    CountExceedsRing,
    /// Hardware pointer lies below the ring base address
    AddressBelowBase,
    /// Not enough free descriptors for the submission
    NoDescriptorsAvailable,
    /// Fewer descriptors in flight than requested for reclaim
    NothingToReclaim,
}

impl core::fmt::Display for RingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RingError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            RingError::IndexOutOfRange => "descriptor index out of range",
            RingError::CountExceedsRing => "descriptor count exceeds ring length",
            RingError::AddressBelowBase => "pointer below ring base address",
            RingError::NoDescriptorsAvailable => "no descriptors available",
            RingError::NothingToReclaim => "not enough descriptors in flight",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::InvalidRingLength)) => { /* ... */ }
///     Err(Error::Ring(RingError::NoDescriptorsAvailable)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// Ring error
    Ring(RingError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Ring(e) => write!(f, "ring: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<RingError> for Error {
    fn from(e: RingError) -> Self {
        Error::Ring(e)
    }
}

/// Result type alias for ring operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for ring index operations
pub type RingResult<T> = core::result::Result<T, RingError>;

// =============================================================================
// Tests
// =============================================================================
