//! Strongly typed parameter enumerations for the ADXL355 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers so that undefined encodings cannot reach the device.
//!
//! # Examples
//!
//! ```rust
//! use adxl355::params::{LowpassFilter, Range};
//!
//! let range = Range::G4;
//! let filter = LowpassFilter::Hz62_5;
//! assert_eq!(range.bits(), 0b10);
//! assert_eq!(filter.label(), "62.5");
//! ```

/// Error returned when a raw code does not name any enumerant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidValue(pub u8);

/// Measurement range selections encoded in `RANGE[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Range {
    /// ±2 g full scale.
    G2 = 0b01,
    /// ±4 g full scale.
    G4 = 0b10,
    /// ±8 g full scale.
    G8 = 0b11,
}

impl Range {
    /// Returns the field encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the nominal sensitivity in LSB per g for 20-bit axis samples.
    pub const fn lsb_per_g(self) -> f32 {
        match self {
            Self::G2 => 256_000.0,
            Self::G4 => 128_000.0,
            Self::G8 => 64_000.0,
        }
    }
}

impl TryFrom<u8> for Range {
    type Error = InvalidValue;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0b01 => Ok(Self::G2),
            0b10 => Ok(Self::G4),
            0b11 => Ok(Self::G8),
            other => Err(InvalidValue(other)),
        }
    }
}

/// Output data rate / low-pass corner selections encoded in `FILTER.ODR_LPF[3:0]`.
///
/// Variants are ordered from the widest (4000 Hz) to the narrowest (3.906 Hz) setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LowpassFilter {
    /// 4000 Hz.
    Hz4000 = 0b0000,
    /// 2000 Hz.
    Hz2000 = 0b0001,
    /// 1000 Hz.
    Hz1000 = 0b0010,
    /// 500 Hz.
    Hz500 = 0b0011,
    /// 250 Hz.
    Hz250 = 0b0100,
    /// 125 Hz.
    Hz125 = 0b0101,
    /// 62.5 Hz.
    Hz62_5 = 0b0110,
    /// 31.25 Hz.
    Hz31_25 = 0b0111,
    /// 15.625 Hz.
    Hz15_625 = 0b1000,
    /// 7.813 Hz.
    Hz7_813 = 0b1001,
    /// 3.906 Hz.
    Hz3_906 = 0b1010,
}

impl LowpassFilter {
    /// Every setting, widest first.
    pub const ALL: [Self; 11] = [
        Self::Hz4000,
        Self::Hz2000,
        Self::Hz1000,
        Self::Hz500,
        Self::Hz250,
        Self::Hz125,
        Self::Hz62_5,
        Self::Hz31_25,
        Self::Hz15_625,
        Self::Hz7_813,
        Self::Hz3_906,
    ];

    /// Returns the field encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Human-readable frequency label used for diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hz4000 => "4000",
            Self::Hz2000 => "2000",
            Self::Hz1000 => "1000",
            Self::Hz500 => "500",
            Self::Hz250 => "250",
            Self::Hz125 => "125",
            Self::Hz62_5 => "62.5",
            Self::Hz31_25 => "31.25",
            Self::Hz15_625 => "15.625",
            Self::Hz7_813 => "7.813",
            Self::Hz3_906 => "3.906",
        }
    }

    /// Returns the setting in hertz.
    pub const fn hz(self) -> f32 {
        match self {
            Self::Hz4000 => 4_000.0,
            Self::Hz2000 => 2_000.0,
            Self::Hz1000 => 1_000.0,
            Self::Hz500 => 500.0,
            Self::Hz250 => 250.0,
            Self::Hz125 => 125.0,
            Self::Hz62_5 => 62.5,
            Self::Hz31_25 => 31.25,
            Self::Hz15_625 => 15.625,
            Self::Hz7_813 => 7.813,
            Self::Hz3_906 => 3.906,
        }
    }
}

impl TryFrom<u8> for LowpassFilter {
    type Error = InvalidValue;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(InvalidValue(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_rejects_undefined_codes() {
        assert_eq!(Range::try_from(0), Err(InvalidValue(0)));
        assert_eq!(Range::try_from(4), Err(InvalidValue(4)));
        assert_eq!(Range::try_from(0xFF), Err(InvalidValue(0xFF)));
        assert_eq!(Range::try_from(0b11), Ok(Range::G8));
    }

    #[test]
    fn filter_table_is_contiguous_and_ordered() {
        for (code, filter) in LowpassFilter::ALL.iter().enumerate() {
            assert_eq!(filter.bits() as usize, code);
            assert_eq!(LowpassFilter::try_from(code as u8), Ok(*filter));
        }

        for pair in LowpassFilter::ALL.windows(2) {
            assert!(pair[0].hz() > pair[1].hz());
        }

        assert_eq!(LowpassFilter::try_from(0b1011), Err(InvalidValue(0b1011)));
        assert_eq!(LowpassFilter::Hz3_906.label(), "3.906");
        assert_eq!(LowpassFilter::Hz4000.label(), "4000");
    }
}
