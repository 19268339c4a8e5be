//! Packed pad-to-selector table
//!
//! A 46-byte table kept from the original EOS S3 GPIO driver, one entry
//! per pad:
//!
//! - Bits 7:4 - selector register index, counted in words from
//!   `S_INTR_0_SEL` (0x4000_4D3C)
//! - Bits 3:0 - value to write there to select the pad
//!
//! An entry of `0x00` marks a pad with no interrupt wiring. No consumer of
//! the table is known; [`crate::intr`] does not read it. It covers more
//! pads than [`crate::intr::ROUTES`] and disagrees with it for pad 22
//! (`0x32`, which is pad 9's wiring). The routing table is the one
//! `configure` trusts.

use crate::pads::{Pad, PAD_COUNT};
use crate::regs::{IntrSel, Reg};

/// Packed selector entry per pad, indexed by pad number
pub static GPIO_INTR_CFG: [u8; PAD_COUNT as usize] = [
    0x00, 0x00, 0x11, 0x01, 0x21, 0x31, //
    0x12, 0x41, 0x22, 0x32, 0x42, 0x51, //
    0x61, 0x71, 0x52, 0x62, 0x00, 0x00, //
    0x13, 0x00, 0x00, 0x23, 0x32, 0x72, //
    0x14, 0x24, 0x43, 0x53, 0x34, 0x44, //
    0x54, 0x63, 0x64, 0x73, 0x74, 0x15, //
    0x16, 0x25, 0x26, 0x35, 0x36, 0x65, //
    0x75, 0x00, 0x45, 0x55,
];

/// Decoded table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LegacySel {
    /// Selector register named by the high nibble
    pub sel: IntrSel,
    /// Selector value from the low nibble
    pub value: u8,
}

impl LegacySel {
    /// Decode one packed byte, `None` for an empty entry
    pub const fn unpack(byte: u8) -> Option<Self> {
        if byte == 0 {
            return None;
        }
        match IntrSel::new(byte >> 4) {
            Some(sel) => Some(Self {
                sel,
                value: byte & 0x0F,
            }),
            None => None,
        }
    }

    /// Bus address of the selector register
    pub const fn address(self) -> usize {
        Reg::IntrSel(self.sel).address()
    }
}

/// Look up the packed entry for `pad`
pub fn decode(pad: Pad) -> Option<LegacySel> {
    LegacySel::unpack(GPIO_INTR_CFG[pad.number() as usize])
}
