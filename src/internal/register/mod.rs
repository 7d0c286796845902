//! Memory-mapped register access for the EQOS controller.
//!
//! Ring accounting only ever reads registers, so the collaborator exposes a
//! single 32-bit read at an offset from the controller base. Hardware goes
//! through [`Mmio`]; tests substitute a map-backed implementation.

pub mod dma;

/// Read a 32-bit register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn read_reg(addr: usize) -> u32 {
    unsafe { core::ptr::read_volatile(addr as *const u32) }
}

/// 32-bit register reads relative to the controller base.
pub trait RegisterAccess {
    /// Read the register at `offset` bytes from the controller base
    fn read32(&self, offset: usize) -> u32;
}

impl<R: RegisterAccess + ?Sized> RegisterAccess for &R {
    #[inline(always)]
    fn read32(&self, offset: usize) -> u32 {
        (**self).read32(offset)
    }
}

/// Volatile access to a mapped controller register block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mmio {
    base: usize,
}

impl Mmio {
    /// Wrap the register block mapped at `base`.
    ///
    /// # Safety
    /// `base` must be the start of the mapped controller register block and
    /// every offset later passed to [`RegisterAccess::read32`] must be a
    /// valid, 4-byte aligned register within it.
    #[must_use]
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Start of the register block
    #[inline(always)]
    #[must_use]
    pub const fn base(&self) -> usize {
        self.base
    }
}

impl RegisterAccess for Mmio {
    #[inline(always)]
    fn read32(&self, offset: usize) -> u32 {
        // SAFETY: validity of base + offset is the contract of Mmio::new
        unsafe { read_reg(self.base + offset) }
    }
}

// =============================================================================
// Register Access Macros
// =============================================================================

/// Generate a read accessor method for a register in a windowed block.
///
/// The surrounding type must provide `fn read(&self, offset: usize) -> u32`.
///
/// # Example
/// ```ignore
/// impl<R: RegisterAccess> DmaChannelRegs<'_, R> {
///     reg_ro!(current_rx_desc, DMA_CH_CHRDR, "Current application RX descriptor");
/// }
/// ```
macro_rules! reg_ro {
    ($read_fn:ident, $offset:expr, $doc:expr) => {
        #[doc = concat!("Read ", $doc)]
        #[inline(always)]
        pub fn $read_fn(&self) -> u32 {
            self.read($offset)
        }
    };
}

pub(crate) use reg_ro;

// =============================================================================
// Tests
// =============================================================================
