//! Error handling primitives for the ADXL355 driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// A raw setting code is outside its legal domain. Raised before any bus access.
    InvalidArgument,
    /// A register field read back from the device holds an undefined encoding.
    InvalidBitPattern(u8),
    /// Identification registers do not match the ADXL355.
    DeviceIdMismatch,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
