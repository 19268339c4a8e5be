//! Direct GPIO line access
//!
//! The EOS S3 exposes eight GPIO lines through two MISC_CTRL registers:
//! bit `i` of `IO_INPUT` is the level sensed on GPIO `i`, bit `i` of
//! `IO_OUTPUT` is the level driven on it. The pad mux must already route
//! the pad to the GPIO function.
//!
//! Out-of-range indices and values are silently ignored, matching what
//! existing firmware expects from these calls.

use core::convert::Infallible;

use crate::regs::{Reg, RegisterAccess};

/// Number of direct GPIO lines
pub const GPIO_COUNT: u8 = 8;

/// Read the input level of GPIO `index`
///
/// Returns `None`, without touching any register, if `index` is not a
/// GPIO line.
pub fn read<R: RegisterAccess>(regs: &R, index: u8) -> Option<u8> {
    if index >= GPIO_COUNT {
        return None;
    }
    Some(regs.read_bit(Reg::IoInput, index) as u8)
}

/// Read the input level of GPIO `index` into `value`
///
/// `value` is left unchanged if `index` is not a GPIO line.
pub fn read_into<R: RegisterAccess>(regs: &R, index: u8, value: &mut u8) {
    if let Some(level) = read(regs, index) {
        *value = level;
    }
}

/// Drive GPIO `index` to `value` (0 or 1)
///
/// Any other index or value is a no-op.
pub fn write<R: RegisterAccess>(regs: &mut R, index: u8, value: u8) {
    if index >= GPIO_COUNT || value > 1 {
        return;
    }
    if value == 1 {
        regs.modify(Reg::IoOutput, |v| v | (1 << index));
    } else {
        regs.modify(Reg::IoOutput, |v| v & !(1 << index));
    }
}

/// Level currently driven on GPIO `index`, from `IO_OUTPUT`
pub fn output_level<R: RegisterAccess>(regs: &R, index: u8) -> Option<u8> {
    if index >= GPIO_COUNT {
        return None;
    }
    Some(regs.read_bit(Reg::IoOutput, index) as u8)
}

/// Handle to a single GPIO line
///
/// Owns (or borrows, via `&mut R`) the register access it works through.
/// With [`Mmio`](crate::regs::Mmio) any number of handles can coexist, so
/// the usual caveat about unsynchronized read-modify-write applies.
#[derive(Debug)]
pub struct GpioLine<R> {
    regs: R,
    index: u8,
}

impl<R: RegisterAccess> GpioLine<R> {
    /// Create a handle for GPIO `index`, or `None` if out of range
    pub fn new(regs: R, index: u8) -> Option<Self> {
        if index >= GPIO_COUNT {
            return None;
        }
        Some(Self { regs, index })
    }

    /// GPIO index of this line
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Give back the register access
    pub fn release(self) -> R {
        self.regs
    }

    fn drive(&mut self, high: bool) {
        write(&mut self.regs, self.index, high as u8);
    }

    fn driven_high(&self) -> bool {
        output_level(&self.regs, self.index) == Some(1)
    }

    fn sensed_high(&self) -> bool {
        read(&self.regs, self.index) == Some(1)
    }
}

impl<R: RegisterAccess> ql_hal::OutputPin for GpioLine<R> {
    fn set_high(&mut self) {
        self.drive(true);
    }

    fn set_low(&mut self) {
        self.drive(false);
    }

    fn is_set_high(&self) -> bool {
        self.driven_high()
    }
}

impl<R: RegisterAccess> ql_hal::InputPin for GpioLine<R> {
    fn is_high(&self) -> bool {
        self.sensed_high()
    }
}

impl<R> embedded_hal::digital::ErrorType for GpioLine<R> {
    type Error = Infallible;
}

impl<R: RegisterAccess> embedded_hal::digital::OutputPin for GpioLine<R> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
    }
}

impl<R: RegisterAccess> embedded_hal::digital::StatefulOutputPin for GpioLine<R> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.driven_high())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.driven_high())
    }
}

impl<R: RegisterAccess> embedded_hal::digital::InputPin for GpioLine<R> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.sensed_high())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.sensed_high())
    }
}
