//! Human-readable per-channel ring reports.
//!
//! Every type here implements [`core::fmt::Display`] and writes straight to
//! the formatter, so a report can go to a log line, a UART or a `String`
//! without any intermediate buffer.

use core::fmt;

use crate::config::RingConfig;
use crate::internal::constants::DISPLAY_COLUMNS;
use crate::ring::{RingSpan, RxRingStatus, TxRingStatus};

/// Index list that wraps onto a new line every `columns` entries.
///
/// A `columns` value of 0 disables wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexColumns {
    span: RingSpan,
    columns: usize,
}

impl IndexColumns {
    /// Lay out `span` with `columns` indices per line
    #[must_use]
    pub const fn new(span: RingSpan, columns: usize) -> Self {
        Self { span, columns }
    }
}

impl fmt::Display for IndexColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.span.len() == 0 {
            return f.write_str("(none)");
        }
        for (n, index) in self.span.enumerate() {
            if n > 0 {
                if self.columns != 0 && n % self.columns == 0 {
                    f.write_str("\n\t")?;
                } else {
                    f.write_str(" ")?;
                }
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

// =============================================================================
// TX
// =============================================================================

/// Counters and ownership runs of one TX channel
#[derive(Debug, Clone, Copy)]
pub struct TxChannelReport {
    channel: usize,
    status: TxRingStatus,
    columns: usize,
}

impl TxChannelReport {
    /// Report for `status` of DMA channel `channel`
    #[must_use]
    pub const fn new(channel: usize, status: TxRingStatus) -> Self {
        Self {
            channel,
            status,
            columns: DISPLAY_COLUMNS,
        }
    }

    /// Indices per line in the index lists; 0 disables wrapping
    #[must_use]
    pub const fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Take the line width from `config.display_columns`
    #[must_use]
    pub const fn with_config(self, config: &RingConfig) -> Self {
        self.with_columns(config.display_columns)
    }
}

impl fmt::Display for TxChannelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.status.state();
        writeln!(f, "DMA CHANNEL = {}", self.channel)?;
        writeln!(f, "\tcur_tx        = {}", state.cur_tx())?;
        writeln!(f, "\tdirty_tx      = {}", state.dirty_tx())?;
        writeln!(f, "\tfree_desc_cnt = {}", state.free_desc_cnt())?;
        writeln!(f, "\ttx_pkt_queued = {}", state.tx_pkt_queued())?;
        if !state.is_consistent() {
            writeln!(f, "\tWARNING: counters disagree with indices")?;
        }
        writeln!(f, "\tfree descriptors ({}):", self.status.free_count())?;
        writeln!(
            f,
            "\t{}",
            IndexColumns::new(self.status.free_indices(), self.columns)
        )?;
        writeln!(
            f,
            "\tin-flight descriptors ({}):",
            self.status.in_flight_count()
        )?;
        write!(
            f,
            "\t{}",
            IndexColumns::new(self.status.in_flight_indices(), self.columns)
        )
    }
}

// =============================================================================
// RX
// =============================================================================

/// Pointer-derived ownership of one RX channel, next to the driver's own
/// receive index
#[derive(Debug, Clone, Copy)]
pub struct RxChannelReport {
    channel: usize,
    cur_rx: usize,
    status: RxRingStatus,
    columns: usize,
}

impl RxChannelReport {
    /// Report for `status` of DMA channel `channel`; `cur_rx` is the next
    /// slot the driver will inspect
    #[must_use]
    pub const fn new(channel: usize, cur_rx: usize, status: RxRingStatus) -> Self {
        Self {
            channel,
            cur_rx,
            status,
            columns: DISPLAY_COLUMNS,
        }
    }

    /// Indices per line in the index lists; 0 disables wrapping
    #[must_use]
    pub const fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Take the line width from `config.display_columns`
    #[must_use]
    pub const fn with_config(self, config: &RingConfig) -> Self {
        self.with_columns(config.display_columns)
    }
}

impl fmt::Display for RxChannelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DMA CHANNEL = {}", self.channel)?;
        writeln!(f, "\tcur_rx        = {}", self.cur_rx)?;
        writeln!(f, "\thead_idx      = {}", self.status.head_idx())?;
        writeln!(f, "\ttail_idx      = {}", self.status.tail_idx())?;
        writeln!(f, "\tdev_desc_cnt  = {}", self.status.dev_desc_cnt())?;
        writeln!(f, "\tdrv_desc_cnt  = {}", self.status.drv_desc_cnt())?;
        if self.status.is_ambiguous() {
            writeln!(f, "\tNOTE: head == tail, empty and full look alike; shown as empty")?;
        }
        writeln!(
            f,
            "\tdevice-owned descriptors ({}):",
            self.status.dev_desc_cnt()
        )?;
        writeln!(
            f,
            "\t{}",
            IndexColumns::new(self.status.device_indices(), self.columns)
        )?;
        writeln!(
            f,
            "\tdriver-owned descriptors ({}):",
            self.status.drv_desc_cnt()
        )?;
        write!(
            f,
            "\t{}",
            IndexColumns::new(self.status.driver_indices(), self.columns)
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::ring::{TxRingState, tx_ring_status};
    use std::format;

    #[test]
    fn index_columns_wrap() {
        let cols = IndexColumns::new(RingSpan::new(6, 5, 8), 2);
        assert_eq!(format!("{cols}"), "6 7\n\t0 1\n\t2");
    }

    #[test]
    fn index_columns_without_wrapping() {
        let cols = IndexColumns::new(RingSpan::full(0, 4), 0);
        assert_eq!(format!("{cols}"), "0 1 2 3");
    }

    #[test]
    fn index_columns_empty() {
        let cols = IndexColumns::new(RingSpan::empty(4), 16);
        assert_eq!(format!("{cols}"), "(none)");
    }

    #[test]
    fn tx_report_lists_runs() {
        let status = tx_ring_status(&TxRingState::new(10, 7, 2, 5, 5));
        let text = format!("{}", TxChannelReport::new(0, status));
        assert_eq!(
            text,
            "DMA CHANNEL = 0\n\
             \tcur_tx        = 7\n\
             \tdirty_tx      = 2\n\
             \tfree_desc_cnt = 5\n\
             \ttx_pkt_queued = 5\n\
             \tfree descriptors (5):\n\
             \t7 8 9 0 1\n\
             \tin-flight descriptors (5):\n\
             \t2 3 4 5 6"
        );
    }

    #[test]
    fn tx_report_flags_inconsistent_counters() {
        let status = tx_ring_status(&TxRingState::new(10, 7, 2, 4, 5));
        let text = format!("{}", TxChannelReport::new(1, status));
        assert!(text.contains("WARNING: counters disagree with indices"));
    }

    #[test]
    fn rx_report_lists_runs() {
        let status = RxRingStatus::from_indices(8, 5, 2);
        let text = format!("{}", RxChannelReport::new(2, 3, status).with_columns(4));
        assert_eq!(
            text,
            "DMA CHANNEL = 2\n\
             \tcur_rx        = 3\n\
             \thead_idx      = 5\n\
             \ttail_idx      = 2\n\
             \tdev_desc_cnt  = 6\n\
             \tdrv_desc_cnt  = 2\n\
             \tdevice-owned descriptors (6):\n\
             \t5 6 7 0\n\
             \t1 2\n\
             \tdriver-owned descriptors (2):\n\
             \t3 4"
        );
    }

    #[test]
    fn configured_columns_wrap_report_lists() {
        let status = tx_ring_status(&TxRingState::new(10, 3, 3, 10, 0));
        let default = format!("{}", TxChannelReport::new(0, status));
        assert!(default.contains("\t3 4 5 6 7 8 9 0 1 2"));

        let config = RingConfig::new().with_display_columns(4);
        let wrapped = format!("{}", TxChannelReport::new(0, status).with_config(&config));
        assert!(wrapped.contains("\t3 4 5 6\n\t7 8 9 0\n\t1 2\n"));

        let rx = RxRingStatus::from_indices(8, 2, 6);
        let config = RingConfig::new().with_display_columns(2);
        let text = format!("{}", RxChannelReport::new(0, 2, rx).with_config(&config));
        assert!(text.contains("device-owned descriptors (5):\n\t2 3\n\t4 5\n\t6\n"));
        assert!(text.ends_with("\t7 0\n\t1"));
    }

    #[test]
    fn zero_configured_columns_print_one_line() {
        let status = RxRingStatus::from_indices(8, 5, 2);
        let config = RingConfig::new().with_display_columns(0);
        let text = format!("{}", RxChannelReport::new(0, 5, status).with_config(&config));
        assert!(text.contains("device-owned descriptors (6):\n\t5 6 7 0 1 2\n"));
    }

    #[test]
    fn rx_report_notes_ambiguity() {
        let status = RxRingStatus::from_indices(8, 4, 4);
        let text = format!("{}", RxChannelReport::new(0, 4, status));
        assert!(text.contains("NOTE: head == tail"));
        assert!(text.contains("device-owned descriptors (0):\n\t(none)"));
    }
}
