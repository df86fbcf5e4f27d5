//! Register map definitions for the ADXL355 accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

/// Register address of `DEVID_AD`.
pub const REG_DEVID_AD: u8 = 0x00;
/// Register address of `DEVID_MST`.
pub const REG_DEVID_MST: u8 = 0x01;
/// Register address of `PARTID`.
pub const REG_PARTID: u8 = 0x02;
/// Register address of `REVID`.
pub const REG_REVID: u8 = 0x03;
/// Register address of `STATUS`.
pub const REG_STATUS: u8 = 0x04;
/// Register address of `TEMP2` (temperature high nibble).
pub const REG_TEMP2: u8 = 0x06;
/// Register address of `TEMP1` (temperature low byte).
pub const REG_TEMP1: u8 = 0x07;
/// Register address of `XDATA3`.
pub const REG_XDATA3: u8 = 0x08;
/// Register address of `XDATA2`.
pub const REG_XDATA2: u8 = 0x09;
/// Register address of `XDATA1`.
pub const REG_XDATA1: u8 = 0x0A;
/// Register address of `YDATA3`.
pub const REG_YDATA3: u8 = 0x0B;
/// Register address of `YDATA2`.
pub const REG_YDATA2: u8 = 0x0C;
/// Register address of `YDATA1`.
pub const REG_YDATA1: u8 = 0x0D;
/// Register address of `ZDATA3`.
pub const REG_ZDATA3: u8 = 0x0E;
/// Register address of `ZDATA2`.
pub const REG_ZDATA2: u8 = 0x0F;
/// Register address of `ZDATA1`.
pub const REG_ZDATA1: u8 = 0x10;
/// Register address of `FILTER`.
pub const REG_FILTER: u8 = 0x28;
/// Register address of `RANGE`.
pub const REG_RANGE: u8 = 0x2C;
/// Register address of `POWER_CTL`.
pub const REG_POWER_CTL: u8 = 0x2D;
/// Register address of `RESET`.
pub const REG_RESET: u8 = 0x2F;

/// Identification block length (`DEVID_AD` through `REVID`).
pub const ID_LENGTH: usize = 4;
/// Temperature block length (`TEMP2`, `TEMP1`).
pub const TEMP_LENGTH: usize = 2;
/// Axis block length: three big-endian bytes for each of X, Y and Z.
pub const AXIS_LENGTH: usize = 9;

/// Expected `DEVID_AD` contents.
pub const EXPECTED_DEVID_AD: u8 = 0xAD;
/// Expected `DEVID_MST` contents.
pub const EXPECTED_DEVID_MST: u8 = 0x1D;
/// Expected `PARTID` contents.
pub const EXPECTED_PART_ID: u8 = 0xED;

/// Soft reset command value written to the `RESET` register.
pub const RESET_COMMAND: u8 = 0x52;

/// Minimal metadata exposed by every single-byte register value type.
pub trait Register: From<u8> + Into<u8> + Copy {
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Power-on value defined by the datasheet.
    const RESET_VALUE: u8;
}

/// Bitfield representation of the `STATUS` register (address `0x04`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // A complete X/Y/Z measurement is ready (bit 0).
    pub data_ready: bool,
    // FIFO watermark reached (bit 1).
    pub fifo_full: bool,
    // FIFO overrun, samples lost (bit 2).
    pub fifo_overrun: bool,
    // Activity threshold crossed (bit 3).
    pub activity: bool,
    // NVM controller busy with refresh, programming or BIST (bit 4).
    pub nvm_busy: bool,
    #[skip]
    __: B3,
}

/// Bitfield representation of the `FILTER` register (address `0x28`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterControl {
    // Output data rate and low-pass corner code (bits 3:0).
    pub odr_lpf: B4,
    // High-pass corner selection (bits 6:4).
    pub hpf_corner: B3,
    #[skip]
    __: B1,
}

/// Bitfield representation of the `RANGE` register (address `0x2C`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeControl {
    // Measurement range code (bits 1:0).
    pub range: B2,
    #[skip]
    __: B4,
    // Interrupt polarity (bit 6).
    pub int_pol: bool,
    // I²C high-speed mode (bit 7).
    pub i2c_hs: bool,
}

/// Bitfield representation of the `POWER_CTL` register (address `0x2D`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerControl {
    // Standby when set, measuring when clear (bit 0).
    pub standby: bool,
    // Temperature processing disabled (bit 1).
    pub temp_off: bool,
    // DRDY output forced low (bit 2).
    pub drdy_off: bool,
    #[skip]
    __: B5,
}

macro_rules! impl_byte_register {
    ($ty:ty, $address:expr, $reset:expr) => {
        impl From<u8> for $ty {
            fn from(value: u8) -> Self {
                Self::from_bytes([value])
            }
        }

        impl From<$ty> for u8 {
            fn from(value: $ty) -> Self {
                value.into_bytes()[0]
            }
        }

        impl Register for $ty {
            const ADDRESS: u8 = $address;
            const RESET_VALUE: u8 = $reset;
        }
    };
}

impl_byte_register!(Status, REG_STATUS, 0x00);
impl_byte_register!(FilterControl, REG_FILTER, 0x00);
impl_byte_register!(RangeControl, REG_RANGE, 0x81);
impl_byte_register!(PowerControl, REG_POWER_CTL, 0x01);
