//! Testing utilities and mock implementations
//!
//! Host-side stand-ins for the register block and descriptor memory, plus a
//! logger that records warnings so tests can check for them.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::HashMap;

use crate::dma::RawDescriptor;
use crate::internal::constants::DESC_WORDS;
use crate::internal::register::RegisterAccess;

// =============================================================================
// Mock Register Block
// =============================================================================

/// Mock controller register block
///
/// Unset registers read as zero.
///
/// # Example
///
/// ```ignore
/// let regs = MockRegisters::new();
/// regs.set(0x1100 + DMA_CH_CHRDR, 0x8000_0040);
///
/// let ch0 = DmaChannelRegs::new(&regs, 0).unwrap();
/// assert_eq!(ch0.current_rx_desc(), 0x8000_0040);
/// ```
#[derive(Debug, Default)]
pub struct MockRegisters {
    /// Register values keyed by offset from the controller base
    values: RefCell<HashMap<usize, u32>>,
    /// Number of reads performed
    reads: RefCell<usize>,
}

impl MockRegisters {
    /// Create an empty register block
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set(&self, offset: usize, value: u32) {
        self.values.borrow_mut().insert(offset, value);
    }

    /// Number of reads performed so far
    pub fn read_count(&self) -> usize {
        *self.reads.borrow()
    }
}

impl RegisterAccess for MockRegisters {
    fn read32(&self, offset: usize) -> u32 {
        *self.reads.borrow_mut() += 1;
        self.values.borrow().get(&offset).copied().unwrap_or(0)
    }
}

// =============================================================================
// Mock Descriptor
// =============================================================================

/// Plain descriptor record without volatile access
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(C)]
pub struct MockDescriptor {
    words: [u32; DESC_WORDS],
}

impl MockDescriptor {
    pub const fn new(words: [u32; DESC_WORDS]) -> Self {
        Self { words }
    }
}

impl RawDescriptor for MockDescriptor {
    fn raw_words(&self) -> [u32; DESC_WORDS] {
        self.words
    }
}

// =============================================================================
// Log Capture
// =============================================================================

/// Process-wide logger that keeps every formatted record.
///
/// Tests run in parallel and share the logger, so only assert that an
/// expected message is present, never that one is absent.
#[cfg(feature = "log")]
pub mod logs {
    extern crate std;

    use std::format;
    use std::string::String;
    use std::sync::{Mutex, Once};
    use std::vec::Vec;

    static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());
    static INIT: Once = Once::new();
    static LOGGER: CaptureLogger = CaptureLogger;

    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            let line = format!("{}: {}", record.level(), record.args());
            if let Ok(mut records) = RECORDS.lock() {
                records.push(line);
            }
        }

        fn flush(&self) {}
    }

    /// Install the capture logger (idempotent)
    pub fn install() {
        INIT.call_once(|| {
            if log::set_logger(&LOGGER).is_ok() {
                log::set_max_level(log::LevelFilter::Trace);
            }
        });
    }

    /// Whether any captured record contains `needle`
    pub fn contains(needle: &str) -> bool {
        RECORDS
            .lock()
            .map(|records| records.iter().any(|line| line.contains(needle)))
            .unwrap_or(false)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_registers_default_to_zero() {
        let regs = MockRegisters::new();
        assert_eq!(regs.read32(0x1100), 0);
        regs.set(0x1100, 7);
        assert_eq!(regs.read32(0x1100), 7);
        assert_eq!(regs.read_count(), 2);
    }

    #[test]
    fn mock_descriptor_is_descriptor_sized() {
        assert_eq!(
            core::mem::size_of::<MockDescriptor>(),
            crate::internal::constants::DESC_SIZE
        );
        let desc = MockDescriptor::new([0, 0, 0, 0x8000_0000]);
        assert!(desc.is_owned());
    }

    #[cfg(feature = "log")]
    #[test]
    fn capture_logger_records_warnings() {
        logs::install();
        log::warn!("capture self-check 5a17");
        assert!(logs::contains("capture self-check 5a17"));
    }
}
