//! EOS S3 register map and register access
//!
//! Only the registers this HAL touches are described here:
//!
//! | Register          | Block     | Address                |
//! |-------------------|-----------|------------------------|
//! | `IO_INPUT`        | MISC_CTRL | 0x4000_5100            |
//! | `IO_OUTPUT`       | MISC_CTRL | 0x4000_5104            |
//! | `S_INTR_n_SEL`    | IO_MUX    | 0x4000_4D3C + 4 * n    |
//! | `GPIO_INTR_TYPE`  | INTR_CTRL | 0x4000_4808            |
//! | `GPIO_INTR_POL`   | INTR_CTRL | 0x4000_480C            |
//!
//! All access goes through [`RegisterAccess`], so the same driver code runs
//! against the real peripherals ([`Mmio`]) or an in-memory register file
//! ([`SimRegisters`]).

use core::ptr;

/// MISC_CTRL block base address
pub const MISC_CTRL_BASE: usize = 0x4000_5000;

/// IO_MUX block base address
pub const IO_MUX_BASE: usize = 0x4000_4C00;

/// INTR_CTRL block base address
pub const INTR_CTRL_BASE: usize = 0x4000_4800;

/// Register offsets within their blocks
pub mod offset {
    /// GPIO input levels (MISC_CTRL)
    pub const IO_INPUT: usize = 0x100;
    /// GPIO output levels (MISC_CTRL)
    pub const IO_OUTPUT: usize = 0x104;
    /// First interrupt selector, `S_INTR_0_SEL` (IO_MUX)
    pub const S_INTR_SEL: usize = 0x13C;
    /// Level/edge selection, one bit per interrupt line (INTR_CTRL)
    pub const GPIO_INTR_TYPE: usize = 0x008;
    /// Polarity selection, one bit per interrupt line (INTR_CTRL)
    pub const GPIO_INTR_POL: usize = 0x00C;
}

/// Address of `S_INTR_0_SEL`
pub const S_INTR_SEL_BASE: usize = IO_MUX_BASE + offset::S_INTR_SEL;

/// Number of interrupt selector registers
pub const INTR_SEL_COUNT: u8 = 8;

/// One of the `S_INTR_n_SEL` selector registers
///
/// Each selector picks which pad drives interrupt line `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntrSel(pub(crate) u8);

impl IntrSel {
    /// Create a selector handle, or `None` if `n` is out of range
    pub const fn new(n: u8) -> Option<Self> {
        if n < INTR_SEL_COUNT {
            Some(IntrSel(n))
        } else {
            None
        }
    }

    /// Selector index (the `n` in `S_INTR_n_SEL`)
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Registers used by the GPIO and interrupt-source drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reg {
    /// `MISC_CTRL->IO_INPUT` (read-only)
    IoInput,
    /// `MISC_CTRL->IO_OUTPUT`
    IoOutput,
    /// `IO_MUX->S_INTR_n_SEL`
    IntrSel(IntrSel),
    /// `INTR_CTRL->GPIO_INTR_TYPE`
    IntrType,
    /// `INTR_CTRL->GPIO_INTR_POL`
    IntrPol,
}

impl Reg {
    /// Absolute bus address of the register
    pub const fn address(self) -> usize {
        match self {
            Reg::IoInput => MISC_CTRL_BASE + offset::IO_INPUT,
            Reg::IoOutput => MISC_CTRL_BASE + offset::IO_OUTPUT,
            Reg::IntrSel(sel) => S_INTR_SEL_BASE + 4 * sel.0 as usize,
            Reg::IntrType => INTR_CTRL_BASE + offset::GPIO_INTR_TYPE,
            Reg::IntrPol => INTR_CTRL_BASE + offset::GPIO_INTR_POL,
        }
    }
}

/// Word access to the EOS S3 registers
///
/// Implementors only provide plain reads and writes. The provided
/// read-modify-write helpers are not atomic; see
/// [`SharedRegisters`](crate::shared::SharedRegisters) when the registers
/// are shared with interrupt handlers.
pub trait RegisterAccess {
    /// Read a full register
    fn read(&self, reg: Reg) -> u32;

    /// Write a full register
    fn write(&mut self, reg: Reg, value: u32);

    /// Read-modify-write a register
    fn modify<F: FnOnce(u32) -> u32>(&mut self, reg: Reg, f: F) {
        let value = self.read(reg);
        self.write(reg, f(value));
    }

    /// Read a single bit (returns 0 or 1)
    fn read_bit(&self, reg: Reg, bit: u8) -> u32 {
        (self.read(reg) >> bit) & 1
    }

    /// Clear `bit`, then OR in bit 0 of `value` at that position
    ///
    /// Every other bit of the register keeps its current value.
    fn write_bit(&mut self, reg: Reg, bit: u8, value: u32) {
        let mask = 1u32 << bit;
        self.modify(reg, |v| (v & !mask) | ((value & 1) << bit));
    }
}

impl<R: RegisterAccess> RegisterAccess for &mut R {
    fn read(&self, reg: Reg) -> u32 {
        (**self).read(reg)
    }

    fn write(&mut self, reg: Reg, value: u32) {
        (**self).write(reg, value)
    }
}

/// Volatile access to the memory-mapped registers
///
/// Zero-sized; every instance talks to the same hardware.
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Get a handle to the hardware registers
    ///
    /// # Safety
    ///
    /// Must only be used on an EOS S3, and the caller is responsible for
    /// serializing read-modify-write sequences across every handle and
    /// execution context.
    pub const unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl RegisterAccess for Mmio {
    fn read(&self, reg: Reg) -> u32 {
        // SAFETY: `Reg::address` only yields aligned EOS S3 register addresses.
        unsafe { ptr::read_volatile(reg.address() as *const u32) }
    }

    fn write(&mut self, reg: Reg, value: u32) {
        // SAFETY: as above.
        unsafe { ptr::write_volatile(reg.address() as *mut u32, value) }
    }
}

/// In-memory register file
///
/// Behaves like the hardware for every register this HAL uses: writes to
/// `IO_INPUT` are dropped, and input levels are driven with
/// [`SimRegisters::set_input`]. In loopback mode `IO_INPUT` instead mirrors
/// `IO_OUTPUT`, as it does for output pads with their input buffer enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimRegisters {
    loopback: bool,
    io_input: u32,
    io_output: u32,
    intr_sel: [u32; INTR_SEL_COUNT as usize],
    intr_type: u32,
    intr_pol: u32,
}

impl SimRegisters {
    /// Create a register file with every register reset to zero
    pub const fn new() -> Self {
        Self {
            loopback: false,
            io_input: 0,
            io_output: 0,
            intr_sel: [0; INTR_SEL_COUNT as usize],
            intr_type: 0,
            intr_pol: 0,
        }
    }

    /// Create a zeroed register file whose inputs follow its outputs
    pub const fn with_loopback() -> Self {
        let mut regs = Self::new();
        regs.loopback = true;
        regs
    }

    /// Drive the pad levels seen through `IO_INPUT`
    ///
    /// Has no visible effect in loopback mode.
    pub fn set_input(&mut self, levels: u32) {
        self.io_input = levels;
    }
}

impl RegisterAccess for SimRegisters {
    fn read(&self, reg: Reg) -> u32 {
        match reg {
            Reg::IoInput if self.loopback => self.io_output,
            Reg::IoInput => self.io_input,
            Reg::IoOutput => self.io_output,
            Reg::IntrSel(sel) => self.intr_sel[sel.0 as usize],
            Reg::IntrType => self.intr_type,
            Reg::IntrPol => self.intr_pol,
        }
    }

    fn write(&mut self, reg: Reg, value: u32) {
        match reg {
            Reg::IoInput => {}
            Reg::IoOutput => self.io_output = value,
            Reg::IntrSel(sel) => self.intr_sel[sel.0 as usize] = value,
            Reg::IntrType => self.intr_type = value,
            Reg::IntrPol => self.intr_pol = value,
        }
    }
}
