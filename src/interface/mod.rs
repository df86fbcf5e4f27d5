//! Bus interface abstraction for the ADXL355 driver.

pub mod i2c;

/// Abstraction over the low-level bus access required by the driver.
///
/// Implementations issue each call as one bus transaction and report
/// failures verbatim; retries belong to the caller.
pub trait Adxl355Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Reads multiple consecutive registers into the provided buffer.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;
}
