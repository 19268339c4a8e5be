//! EOS S3-specific HAL for GPIO lines and pad interrupt sources
//!
//! This crate implements the `ql-hal` traits for the QuickLogic EOS S3:
//!
//! - Direct GPIO read/write through `IO_INPUT`/`IO_OUTPUT`
//! - Routing interrupt-capable pads onto the shared GPIO interrupt lines
//! - Register access over MMIO or an in-memory register file for host tests
//!
//! Pad-mux setup and the interrupt controller (enabling lines, attaching
//! handlers) are handled elsewhere.
//!
//! # Features
//!
//! - `defmt` - Enable debug formatting and routing logs
//! - `serde` - Serialize/deserialize the `ql-hal` interrupt config types
//!
//! # Usage
//!
//! ```ignore
//! use ql_hal::{Polarity, TriggerType};
//! use ql_hal_eoss3::{configure, GpioIntrConfig, Mmio, Pad, PadConfig};
//!
//! let mut regs = unsafe { Mmio::steal() };
//! let cfg = GpioIntrConfig::new(
//!     PadConfig::new(Pad::new(6)?),
//!     TriggerType::Edge,
//!     Polarity::RiseHigh,
//! );
//! let line = configure(&mut regs, &cfg)?;
//! // enable `line` at the interrupt controller
//! ```

#![no_std]

// Host test harness (proptest formats its failure messages)
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod gpio;
pub mod intr;
pub mod legacy;
pub mod pads;
pub mod regs;
pub mod shared;

pub use gpio::{GpioLine, GPIO_COUNT};
pub use intr::{configure, route_for, Eoss3Irq, GpioIntrConfig, IntrRoute, ROUTES};
pub use pads::{parse_pad_string, Pad, PadConfig, PadError, PAD_COUNT};
pub use regs::{IntrSel, Mmio, Reg, RegisterAccess, SimRegisters};
pub use shared::SharedRegisters;

// Re-export shared types from ql-hal
pub use ql_hal::irq::{IrqError, IrqLine, Polarity, TriggerType};
