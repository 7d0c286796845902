//! DMA Channel Register Definitions
//!
//! Each DMA channel owns a 0x80-byte register window starting at
//! `0x1100 + 0x80 * channel`. Only the descriptor ring pointer registers are
//! described here; they are all that ring accounting reads.
//!
//! Offsets, accessor methods and the [`REGISTERS`] listing are generated from
//! one table so the three can never drift apart.
//!
//! The current descriptor and tail pointer registers hold only the low 32
//! bits of a descriptor address. With 40-bit addressing the upper bits come
//! from the list address high registers and are shared by the whole ring,
//! which therefore cannot cross a 4 GiB boundary.

use super::{RegisterAccess, reg_ro};
use crate::config::RingConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::internal::constants::{DMA_CHANNEL_BASE, DMA_CHANNEL_STRIDE, MAX_DMA_CHANNELS};
use crate::ring::RxHwPointers;

/// Ring length registers hold `len - 1` in their low bits
pub const RING_LEN_MASK: u32 = 0x3FF;

/// Name, window offset and access mode of one channel register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterInfo {
    /// Register mnemonic
    pub name: &'static str,
    /// Byte offset inside the channel window
    pub offset: usize,
    /// Whether software may only read the register
    pub read_only: bool,
}

macro_rules! dma_channel_regs {
    ($($read_fn:ident, $konst:ident = $offset:literal, $ro:literal, $doc:literal;)*) => {
        $(
            #[doc = concat!($doc, " register offset within a channel window")]
            pub const $konst: usize = $offset;
        )*

        /// Every channel register, in window order
        pub const REGISTERS: &[RegisterInfo] = &[
            $(
                RegisterInfo {
                    name: stringify!($konst),
                    offset: $offset,
                    read_only: $ro,
                },
            )*
        ];

        impl<R: RegisterAccess> DmaChannelRegs<'_, R> {
            $(
                reg_ro!($read_fn, $konst, $doc);
            )*
        }
    };
}

/// Register view of one DMA channel.
pub struct DmaChannelRegs<'a, R: RegisterAccess> {
    regs: &'a R,
    channel: usize,
    window: usize,
}

impl<'a, R: RegisterAccess> DmaChannelRegs<'a, R> {
    /// View channel `channel` of the controller behind `regs`.
    pub const fn new(regs: &'a R, channel: usize) -> ConfigResult<Self> {
        if channel >= MAX_DMA_CHANNELS {
            return Err(ConfigError::InvalidChannel);
        }
        Ok(Self {
            regs,
            channel,
            window: DMA_CHANNEL_BASE + DMA_CHANNEL_STRIDE * channel,
        })
    }

    /// View channel `channel`, rejecting channels beyond
    /// `config.dma_channels`.
    pub const fn for_config(
        regs: &'a R,
        config: &RingConfig,
        channel: usize,
    ) -> ConfigResult<Self> {
        if let Err(e) = config.check_channel(channel) {
            return Err(e);
        }
        Self::new(regs, channel)
    }

    /// Channel number
    #[inline(always)]
    #[must_use]
    pub const fn channel(&self) -> usize {
        self.channel
    }

    /// Offset of the channel window from the controller base
    #[inline(always)]
    #[must_use]
    pub const fn window(&self) -> usize {
        self.window
    }

    #[inline(always)]
    fn read(&self, offset: usize) -> u32 {
        self.regs.read32(self.window + offset)
    }

    /// Read a register described by an entry of [`REGISTERS`]
    pub fn read_info(&self, info: &RegisterInfo) -> u32 {
        self.read(info.offset)
    }

    /// Every channel register together with its current value
    pub fn dump(&self) -> impl Iterator<Item = (&'static RegisterInfo, u32)> + '_ {
        REGISTERS.iter().map(|info| (info, self.read_info(info)))
    }

    /// Configured TX ring length in descriptors
    pub fn tx_ring_len(&self) -> usize {
        (self.tx_ring_len_raw() & RING_LEN_MASK) as usize + 1
    }

    /// Configured RX ring length in descriptors
    pub fn rx_ring_len(&self) -> usize {
        (self.rx_ring_len_raw() & RING_LEN_MASK) as usize + 1
    }

    /// Read the RX head, tail and base pointers in one go.
    ///
    /// The head is the descriptor the device will fetch next, the tail the
    /// last descriptor the driver handed over.
    pub fn rx_pointers(&self) -> RxHwPointers<u32> {
        RxHwPointers::new(
            self.current_rx_desc(),
            self.rx_tail_ptr(),
            self.rx_desc_list_addr(),
        )
    }

    /// Like [`rx_pointers`](Self::rx_pointers), with the list address high
    /// register prepended to all three pointers.
    pub fn rx_pointers_wide(&self) -> RxHwPointers<u64> {
        let high = u64::from(self.rx_desc_list_addr_hi()) << 32;
        let low = self.rx_pointers();
        RxHwPointers::new(
            high | u64::from(low.head),
            high | u64::from(low.tail),
            high | u64::from(low.base),
        )
    }
}

dma_channel_regs! {
    tx_desc_list_addr_hi, DMA_CH_TDLAR_HI = 0x10, false, "TX descriptor list address high";
    tx_desc_list_addr, DMA_CH_TDLAR = 0x14, false, "TX descriptor list address";
    rx_desc_list_addr_hi, DMA_CH_RDLAR_HI = 0x18, false, "RX descriptor list address high";
    rx_desc_list_addr, DMA_CH_RDLAR = 0x1C, false, "RX descriptor list address";
    tx_tail_ptr, DMA_CH_TDTP = 0x20, false, "TX descriptor tail pointer";
    rx_tail_ptr, DMA_CH_RDTP = 0x28, false, "RX descriptor tail pointer";
    tx_ring_len_raw, DMA_CH_TDRLR = 0x2C, false, "TX descriptor ring length";
    rx_ring_len_raw, DMA_CH_RDRLR = 0x30, false, "RX descriptor ring length";
    current_tx_desc, DMA_CH_CHTDR = 0x44, true, "Current application TX descriptor";
    current_rx_desc, DMA_CH_CHRDR = 0x4C, true, "Current application RX descriptor";
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Direction;
    use crate::ring::rx_ring_status;
    use crate::testing::MockRegisters;

    #[test]
    fn channel_windows_are_strided() {
        let regs = MockRegisters::new();
        assert_eq!(DmaChannelRegs::new(&regs, 0).unwrap().window(), 0x1100);
        assert_eq!(DmaChannelRegs::new(&regs, 1).unwrap().window(), 0x1180);
        assert_eq!(DmaChannelRegs::new(&regs, 7).unwrap().window(), 0x1480);
    }

    #[test]
    fn channel_out_of_range_rejected() {
        let regs = MockRegisters::new();
        assert!(matches!(
            DmaChannelRegs::new(&regs, MAX_DMA_CHANNELS),
            Err(ConfigError::InvalidChannel)
        ));
    }

    #[test]
    fn configured_channel_count_limits_view() {
        let regs = MockRegisters::new();
        let config = RingConfig::new().with_dma_channels(2);
        assert_eq!(
            DmaChannelRegs::for_config(&regs, &config, 1).unwrap().window(),
            0x1180
        );
        assert!(matches!(
            DmaChannelRegs::for_config(&regs, &config, 2),
            Err(ConfigError::InvalidChannel)
        ));
        assert_eq!(regs.read_count(), 0);
    }

    #[test]
    fn wide_pointers_take_high_word_from_list_address() {
        let regs = MockRegisters::new();
        regs.set(0x1100 + DMA_CH_RDLAR_HI, 0x12);
        regs.set(0x1100 + DMA_CH_RDLAR, 0x8000_0000);
        regs.set(0x1100 + DMA_CH_CHRDR, 0x8000_0050);
        regs.set(0x1100 + DMA_CH_RDTP, 0x8000_0020);

        let ch0 = DmaChannelRegs::new(&regs, 0).unwrap();
        let wide = ch0.rx_pointers_wide();
        assert_eq!(wide.head, 0x12_8000_0050);
        assert_eq!(wide.tail, 0x12_8000_0020);
        assert_eq!(wide.base, 0x12_8000_0000);

        let geometry = RingConfig::new().geometry(Direction::Rx).unwrap();
        let status = rx_ring_status(&geometry, &wide);
        assert_eq!(status.head_idx(), 5);
        assert_eq!(status.tail_idx(), 2);
    }

    #[test]
    fn accessors_read_inside_channel_window() {
        let regs = MockRegisters::new();
        regs.set(0x1180 + DMA_CH_CHRDR, 0x8000_0040);
        regs.set(0x1180 + DMA_CH_RDTP, 0x8000_0070);
        regs.set(0x1180 + DMA_CH_RDLAR, 0x8000_0000);
        regs.set(0x1100 + DMA_CH_CHRDR, 0xDEAD_BEEF);

        let ch1 = DmaChannelRegs::new(&regs, 1).unwrap();
        assert_eq!(ch1.current_rx_desc(), 0x8000_0040);
        assert_eq!(
            ch1.rx_pointers(),
            RxHwPointers::new(0x8000_0040, 0x8000_0070, 0x8000_0000)
        );
    }

    #[test]
    fn ring_length_registers_hold_len_minus_one() {
        let regs = MockRegisters::new();
        regs.set(0x1100 + DMA_CH_TDRLR, 255);
        regs.set(0x1100 + DMA_CH_RDRLR, 0xFFFF_FC00 | 63);

        let ch0 = DmaChannelRegs::new(&regs, 0).unwrap();
        assert_eq!(ch0.tx_ring_len(), 256);
        assert_eq!(ch0.rx_ring_len(), 64);
    }

    #[test]
    fn register_table_is_ordered_and_unique() {
        for pair in REGISTERS.windows(2) {
            assert!(pair[0].offset < pair[1].offset);
        }
        assert!(REGISTERS.iter().all(|r| r.offset % 4 == 0));
        assert!(REGISTERS.iter().all(|r| r.offset < DMA_CHANNEL_STRIDE));
    }

    #[test]
    fn only_current_descriptor_registers_are_read_only() {
        let read_only: [&str; 2] = ["DMA_CH_CHTDR", "DMA_CH_CHRDR"];
        for info in REGISTERS {
            assert_eq!(info.read_only, read_only.contains(&info.name), "{}", info.name);
        }
    }

    #[test]
    fn dump_pairs_every_register_with_its_value() {
        let regs = MockRegisters::new();
        regs.set(0x1100 + DMA_CH_TDTP, 0x1234);

        let ch0 = DmaChannelRegs::new(&regs, 0).unwrap();
        let mut seen = 0;
        for (info, value) in ch0.dump() {
            seen += 1;
            let expected = if info.offset == DMA_CH_TDTP { 0x1234 } else { 0 };
            assert_eq!(value, expected, "{}", info.name);
        }
        assert_eq!(seen, REGISTERS.len());
    }
}
