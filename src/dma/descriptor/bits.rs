//! Normal descriptor bit field constants.
//!
//! Only the word 3 fields shared by the TX and RX formats are listed; the
//! accounting code never looks deeper into a descriptor than ownership.

// =============================================================================
// DES3 (Descriptor Word 3) - Ownership and framing
// =============================================================================

/// Descriptor word 3 bit field constants
pub mod des3 {
    /// OWN - when set, descriptor owned by DMA; when clear, owned by the driver
    pub const OWN: u32 = 1 << 31;
    /// Context descriptor
    pub const CTXT: u32 = 1 << 30;
    /// First descriptor of a frame
    pub const FIRST_DESC: u32 = 1 << 29;
    /// Last descriptor of a frame
    pub const LAST_DESC: u32 = 1 << 28;
}
