//! Interrupt source abstractions
//!
//! Types shared by every chip that routes pads onto a small set of shared
//! interrupt lines, each with one trigger-type bit and one polarity bit.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of shared interrupt lines (bit positions 0-7)
pub const IRQ_LINE_COUNT: u8 = 8;

/// EINVAL, as reported by C firmware for an unsupported pad
const EINVAL: i32 = 22;

/// Interrupt trigger type
///
/// The discriminant is the bit value written into the trigger-type register.
/// Serialized names ("level", "edge") are accepted by [`TriggerType::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum TriggerType {
    /// Fires while the signal holds its active level
    #[default]
    Level = 0,
    /// Fires on a signal transition
    Edge = 1,
}

impl TriggerType {
    /// Register bit value for this trigger type
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Decode a register bit (only bit 0 is considered)
    pub const fn from_bit(bit: u32) -> Self {
        if bit & 1 == 0 {
            TriggerType::Level
        } else {
            TriggerType::Edge
        }
    }

    /// Parse a trigger type from config text ("level" or "edge")
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "level" => Some(TriggerType::Level),
            "edge" => Some(TriggerType::Edge),
            _ => None,
        }
    }
}

/// Interrupt polarity
///
/// The discriminant is the bit value written into the polarity register.
/// Serialized names ("fall", "rise") are accepted by [`Polarity::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Polarity {
    /// Falling edge or low level
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "fall"))]
    FallLow = 0,
    /// Rising edge or high level
    #[cfg_attr(feature = "serde", serde(rename = "rise"))]
    RiseHigh = 1,
}

impl Polarity {
    /// Register bit value for this polarity
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Decode a register bit (only bit 0 is considered)
    pub const fn from_bit(bit: u32) -> Self {
        if bit & 1 == 0 {
            Polarity::FallLow
        } else {
            Polarity::RiseHigh
        }
    }

    /// Parse a polarity from config text
    ///
    /// Accepts "fall"/"low" and "rise"/"high".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "fall" | "low" => Some(Polarity::FallLow),
            "rise" | "high" => Some(Polarity::RiseHigh),
            _ => None,
        }
    }
}

/// A shared interrupt line
///
/// The line number doubles as the bit position in the trigger-type and
/// polarity registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct IrqLine(u8);

impl IrqLine {
    /// Create a line, or `None` if `n` is not below [`IRQ_LINE_COUNT`]
    pub const fn new(n: u8) -> Option<Self> {
        if n < IRQ_LINE_COUNT {
            Some(IrqLine(n))
        } else {
            None
        }
    }

    /// Line number (0-7)
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Single-bit mask for this line in the trigger/polarity registers
    pub const fn mask(self) -> u32 {
        1 << self.0
    }
}

impl TryFrom<u8> for IrqLine {
    type Error = IrqError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        IrqLine::new(n).ok_or(IrqError::InvalidArgument)
    }
}

impl From<IrqLine> for u8 {
    fn from(line: IrqLine) -> u8 {
        line.0
    }
}

/// Errors from interrupt source configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IrqError {
    /// The pad cannot be routed to any interrupt line
    InvalidArgument,
}

impl IrqError {
    /// Negative errno equivalent, for code that reports C-style status
    pub const fn errno(self) -> i32 {
        match self {
            IrqError::InvalidArgument => -EINVAL,
        }
    }
}

impl core::fmt::Display for IrqError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IrqError::InvalidArgument => f.write_str("invalid argument"),
        }
    }
}

/// Routes pads onto shared interrupt lines
///
/// Enabling the returned line and attaching a handler to it is the job
/// of the interrupt controller driver, not of implementors.
pub trait IrqSourceConfig {
    /// Chip-specific pad identifier
    type Pad;

    /// Route `pad` onto its interrupt line and program the line's trigger
    /// type and polarity
    ///
    /// # Returns
    /// The interrupt line the pad now drives, or
    /// [`IrqError::InvalidArgument`] if the pad cannot raise interrupts
    /// (in which case no registers are touched).
    fn configure_irq(
        &mut self,
        pad: Self::Pad,
        trigger: TriggerType,
        polarity: Polarity,
    ) -> Result<IrqLine, IrqError>;
}
