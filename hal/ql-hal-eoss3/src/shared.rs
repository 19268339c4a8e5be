//! Register access shared between execution contexts
//!
//! The GPIO and interrupt-routing operations do read-modify-write on
//! registers that other lines also live in. When thread-mode code and
//! interrupt handlers both call them, wrap the register access in a
//! [`SharedRegisters`] and go through it everywhere.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use ql_hal::irq::{IrqError, IrqLine};

use crate::gpio;
use crate::intr::{self, GpioIntrConfig};
use crate::regs::RegisterAccess;

/// Register access guarded by a critical section
///
/// Usable from a `static`:
///
/// ```ignore
/// static REGS: SharedRegisters<Mmio> = SharedRegisters::new(unsafe { Mmio::steal() });
/// ```
pub struct SharedRegisters<R> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<R>>,
}

impl<R: RegisterAccess> SharedRegisters<R> {
    /// Wrap `regs`
    pub const fn new(regs: R) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(regs)),
        }
    }

    /// Run `f` with exclusive access to the registers
    ///
    /// Interrupts are masked for the duration of `f`; keep it short.
    pub fn lock<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// [`gpio::read`] inside a critical section
    pub fn gpio_read(&self, index: u8) -> Option<u8> {
        self.lock(|regs| gpio::read(regs, index))
    }

    /// [`gpio::write`] inside a critical section
    pub fn gpio_write(&self, index: u8, value: u8) {
        self.lock(|regs| gpio::write(regs, index, value))
    }

    /// [`intr::configure`] inside a critical section
    pub fn configure(&self, cfg: &GpioIntrConfig) -> Result<IrqLine, IrqError> {
        self.lock(|regs| intr::configure(regs, cfg))
    }

    /// Unwrap the register access
    pub fn into_inner(self) -> R {
        self.inner.into_inner().into_inner()
    }
}
