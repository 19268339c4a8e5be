//! EOS S3 pad identifiers
//!
//! Pads are the physical pins of the package. Which function a pad carries
//! is decided by the pad-mux configuration, which lives outside this HAL;
//! the GPIO interrupt code only needs to know which pad is active.

/// Number of pads on the EOS S3
pub const PAD_COUNT: u8 = 46;

/// Physical pad identifier (0-45)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pad(pub(crate) u8);

/// Error when creating a pad identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PadError {
    /// Pad number out of range (0-45 valid)
    OutOfRange,
}

impl Pad {
    /// Create a pad identifier
    pub const fn new(n: u8) -> Result<Self, PadError> {
        if n < PAD_COUNT {
            Ok(Pad(n))
        } else {
            Err(PadError::OutOfRange)
        }
    }

    /// Pad number
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Iterate over every pad of the chip
    pub fn all() -> impl Iterator<Item = Pad> {
        (0..PAD_COUNT).map(Pad)
    }
}

impl TryFrom<u8> for Pad {
    type Error = PadError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Pad::new(n)
    }
}

/// Active pad of a logical pad configuration
///
/// Produced by the pad-mux configuration code; this HAL only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PadConfig {
    /// Physical pad currently muxed in
    pub pin: Pad,
}

impl PadConfig {
    /// Create a pad config for `pin`
    pub const fn new(pin: Pad) -> Self {
        Self { pin }
    }
}

/// Parse a pad string from config
///
/// Supports formats:
/// - "pad38" -> Pad 38
/// - "PAD_6" -> Pad 6
pub fn parse_pad_string(s: &str) -> Option<Pad> {
    let s = s.trim();

    let num_str = if let Some(rest) = s.strip_prefix("pad") {
        rest
    } else if let Some(rest) = s.strip_prefix("PAD_") {
        rest
    } else {
        return None;
    };

    let n: u8 = num_str.parse().ok()?;
    Pad::new(n).ok()
}
