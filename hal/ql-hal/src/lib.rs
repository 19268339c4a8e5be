//! QL Hardware Abstraction Layer
//!
//! This crate defines the chip-independent vocabulary for direct GPIO
//! lines and pad interrupt sources. Chip-specific HALs (currently the
//! EOS S3 in `ql-hal-eoss3`) implement these traits on top of their
//! register maps, so board code can be written once against the traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Board / application code               │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ql-hal (this crate - traits, types)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ ql-hal-eoss3  │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`irq::IrqSourceConfig`] - Routing a pad onto a shared interrupt line

#![no_std]
#![deny(unsafe_code)]

// Host test harness (proptest formats its failure messages)
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod gpio;
pub mod irq;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, IoPin, OutputPin};
pub use irq::{IrqError, IrqLine, IrqSourceConfig, Polarity, TriggerType};
