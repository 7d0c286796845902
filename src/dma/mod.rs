//! DMA descriptor storage.
//!
//! - [`DmaDescriptor`]: the 16-byte normal descriptor shared by TX and RX
//! - [`DescriptorRing`]: a fixed-size circular array of descriptors together
//!   with the bus address the device uses for slot 0
//!
//! The accounting code in [`crate::ring`] works on indices only; these types
//! exist so descriptor contents and slot addresses can be dumped next to the
//! computed ownership runs.
//!
//! # Example
//!
//! ```ignore
//! use ph_eqos_ringstat::dma::{DescriptorRing, DmaDescriptor};
//!
//! static RX_RING: DescriptorRing<DmaDescriptor, 8> =
//!     DescriptorRing::from_array([const { DmaDescriptor::new() }; 8], 0x3FFB_0000);
//! ```

pub mod descriptor;
mod ring;

pub use descriptor::{DmaDescriptor, RawDescriptor};
pub use ring::DescriptorRing;
