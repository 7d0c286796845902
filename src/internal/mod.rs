//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`register`]: Register access trait and DMA channel register table
//! - [`constants`]: Ring geometry defaults and register layout numbers
//!
//! # Stability
//!
//! **WARNING:** This module is `pub(crate)` only. The handful of items that
//! external code needs are re-exported from the crate root and
//! `unsafe_registers`.

pub(crate) mod constants;
pub(crate) mod register;
