//! I²C interface implementation built on top of `embedded-hal` `I2c`.
//!
//! The interface borrows nothing global: pass `&mut bus` for a single sensor, or
//! an `embedded-hal-bus` shared device (`RefCellDevice`, `CriticalSectionDevice`,
//! `MutexDevice`) when several sensors sit on the same physical bus.

use embedded_hal::i2c::{I2c, SevenBitAddress};

use super::Adxl355Interface;

/// Default 7-bit address (`ASEL` pin low).
pub const DEFAULT_ADDRESS: SevenBitAddress = 0x1D;
/// Alternate 7-bit address (`ASEL` pin high).
pub const ALTERNATE_ADDRESS: SevenBitAddress = 0x53;

/// I²C-based interface implementation for the ADXL355 driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface targeting the sensor at `address`.
    pub const fn new(i2c: I2C, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    /// Returns the 7-bit address this interface targets.
    pub const fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Provides mutable access to the wrapped bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Adxl355Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        self.i2c.write_read(self.address, &[register], buf)
    }
}
