//! High-level ADXL355 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::Adxl355Interface;
use crate::interface::i2c::{I2cInterface, DEFAULT_ADDRESS};
use crate::log;
use crate::params::{LowpassFilter, Range};
use crate::registers::{
    FilterControl,
    PowerControl,
    RangeControl,
    Register,
    Status,
    AXIS_LENGTH,
    EXPECTED_DEVID_AD,
    EXPECTED_DEVID_MST,
    EXPECTED_PART_ID,
    ID_LENGTH,
    REG_DEVID_AD,
    REG_RESET,
    REG_TEMP2,
    REG_XDATA3,
    RESET_COMMAND,
    TEMP_LENGTH,
};
use embedded_hal::i2c::{I2c, SevenBitAddress};

// Intercept code of the temperature conversion.
const TEMP_INTERCEPT_LSB: f32 = 1852.0;
// Temperature sensor slope (LSB per °C, negative sense).
const TEMP_SLOPE_LSB_PER_C: f32 = 9.05;
// Offset added after scaling (°C).
const TEMP_OFFSET_C: f32 = 19.21;

/// High-level synchronous driver for the ADXL355 accelerometer.
///
/// The driver holds nothing but its bus interface; every accessor goes to
/// the hardware registers.
pub struct Adxl355<IFACE> {
    interface: IFACE,
}

/// One signed 20-bit acceleration sample per axis, in raw ADC counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Axes {
    /// X-axis reading.
    pub x: i32,
    /// Y-axis reading.
    pub y: i32,
    /// Z-axis reading.
    pub z: i32,
}

impl Axes {
    /// Decodes the 9-byte `XDATA3..ZDATA1` block.
    pub fn from_bytes(raw: &[u8; AXIS_LENGTH]) -> Self {
        Self {
            x: unpack_axis(raw[0], raw[1], raw[2]),
            y: unpack_axis(raw[3], raw[4], raw[5]),
            z: unpack_axis(raw[6], raw[7], raw[8]),
        }
    }

    /// Scales the raw counts into g for the supplied measurement range.
    pub fn to_g(&self, range: Range) -> [f32; 3] {
        let scale = range.lsb_per_g();
        [
            self.x as f32 / scale,
            self.y as f32 / scale,
            self.z as f32 / scale,
        ]
    }
}

/// Decoded view of the `STATUS` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusSnapshot {
    /// STATUS[0] DATA_RDY.
    pub data_rdy: bool,
    /// STATUS[1] FIFO_FULL.
    pub fifo_full: bool,
    /// STATUS[2] FIFO_OVR.
    pub fifo_ovr: bool,
    /// STATUS[3] Activity.
    pub activity: bool,
    /// STATUS[4] NVM_BUSY.
    pub nvm_busy: bool,
}

impl From<Status> for StatusSnapshot {
    fn from(status: Status) -> Self {
        Self {
            data_rdy: status.data_ready(),
            fifo_full: status.fifo_full(),
            fifo_ovr: status.fifo_overrun(),
            activity: status.activity(),
            nvm_busy: status.nvm_busy(),
        }
    }
}

// Axis data is 20-bit two's complement, left-justified in 24 bits. Placing
// it in the top of an i32 and shifting arithmetically sign-extends bit 19.
#[inline]
fn unpack_axis(msb: u8, mid: u8, lsb: u8) -> i32 {
    i32::from_be_bytes([msb, mid, lsb, 0]) >> 12
}

#[inline]
fn celsius_from_raw(raw: u16) -> f32 {
    (TEMP_INTERCEPT_LSB - raw as f32) / TEMP_SLOPE_LSB_PER_C + TEMP_OFFSET_C
}

impl<IFACE> Adxl355<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub const fn new(interface: IFACE) -> Self {
        Self { interface }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }
}

impl<I2C> Adxl355<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for a sensor at an explicit 7-bit address.
    pub const fn new_i2c(i2c: I2C, address: SevenBitAddress) -> Self {
        Self::new(I2cInterface::new(i2c, address))
    }

    /// Convenience constructor for a sensor at [`DEFAULT_ADDRESS`].
    pub const fn new_i2c_default(i2c: I2C) -> Self {
        Self::new_i2c(i2c, DEFAULT_ADDRESS)
    }

    /// Releases the driver, returning the bus.
    pub fn release_i2c(self) -> I2C {
        self.release().release()
    }
}

impl<IFACE, CommE> Adxl355<IFACE>
where
    IFACE: Adxl355Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Global Configuration ==========================
    // ==================================================================
    /// Verifies the part, places it in standby and applies `config`.
    ///
    /// Measurement is not started; call [`begin`](Self::begin) afterwards.
    pub fn init(&mut self, config: &Config) -> Result<(), CommE> {
        self.check_ids()?;
        self.end()?;
        self.configure(config)
    }

    /// Applies range and filter selections using read-modify-write.
    pub fn configure(&mut self, config: &Config) -> Result<(), CommE> {
        self.set_range(config.range)?;
        self.set_lowpass_filter(config.lowpass_filter)
    }

    /// Issues a soft reset sequence.
    pub fn reset(&mut self) -> Result<(), CommE> {
        log::debug!("adxl355: soft reset");
        self.interface
            .write_register(REG_RESET, RESET_COMMAND)
            .map_err(Error::from)
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Verifies identification registers and returns the silicon revision.
    pub fn check_ids(&mut self) -> Result<u8, CommE> {
        let mut ids = [0u8; ID_LENGTH];
        self.interface.read_many(REG_DEVID_AD, &mut ids)?;

        if ids[0] != EXPECTED_DEVID_AD
            || ids[1] != EXPECTED_DEVID_MST
            || ids[2] != EXPECTED_PART_ID
        {
            log::warning!(
                "adxl355: unexpected ids {=u8:#x} {=u8:#x} {=u8:#x}",
                ids[0],
                ids[1],
                ids[2]
            );
            return Err(Error::DeviceIdMismatch);
        }

        Ok(ids[3])
    }

    /// Returns `true` when a new X/Y/Z sample is ready.
    pub fn status(&mut self) -> Result<bool, CommE> {
        Ok(self.read::<Status>()?.data_ready())
    }

    /// Returns every flag of the `STATUS` register.
    pub fn read_status(&mut self) -> Result<StatusSnapshot, CommE> {
        Ok(StatusSnapshot::from(self.read::<Status>()?))
    }

    // ==================================================================
    // == Power Control =================================================
    // ==================================================================
    /// Leaves standby and starts measuring. No write when already running.
    pub fn begin(&mut self) -> Result<(), CommE> {
        self.modify::<PowerControl, _>(|power| power.set_standby(false))
    }

    /// Enters standby. No write when already in standby.
    pub fn end(&mut self) -> Result<(), CommE> {
        self.modify::<PowerControl, _>(|power| power.set_standby(true))
    }

    /// Returns `true` while the sensor is measuring.
    pub fn is_running(&mut self) -> Result<bool, CommE> {
        Ok(!self.read::<PowerControl>()?.standby())
    }

    // ==================================================================
    // == Range & Filter ================================================
    // ==================================================================
    /// Reads the current measurement range.
    pub fn range(&mut self) -> Result<Range, CommE> {
        let bits = self.read::<RangeControl>()?.range();
        Range::try_from(bits).map_err(|_| Error::InvalidBitPattern(bits))
    }

    /// Updates `RANGE[1:0]`, leaving the other bits untouched.
    pub fn set_range(&mut self, range: Range) -> Result<(), CommE> {
        self.modify::<RangeControl, _>(|ctrl| ctrl.set_range(range.bits()))
    }

    /// Validates a raw range code before applying it.
    pub fn set_range_bits(&mut self, bits: u8) -> Result<(), CommE> {
        let range = Range::try_from(bits).map_err(|_| Error::InvalidArgument)?;
        self.set_range(range)
    }

    /// Reads the current output data rate / low-pass filter selection.
    pub fn lowpass_filter(&mut self) -> Result<LowpassFilter, CommE> {
        let bits = self.read::<FilterControl>()?.odr_lpf();
        LowpassFilter::try_from(bits).map_err(|_| Error::InvalidBitPattern(bits))
    }

    /// Updates `FILTER[3:0]`, leaving the high-pass corner untouched.
    pub fn set_lowpass_filter(&mut self, filter: LowpassFilter) -> Result<(), CommE> {
        self.modify::<FilterControl, _>(|ctrl| ctrl.set_odr_lpf(filter.bits()))
    }

    /// Validates a raw filter code before applying it.
    pub fn set_lowpass_filter_bits(&mut self, bits: u8) -> Result<(), CommE> {
        let filter = LowpassFilter::try_from(bits).map_err(|_| Error::InvalidArgument)?;
        self.set_lowpass_filter(filter)
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads the die temperature in degrees Celsius.
    ///
    /// The conversion is applied to whatever code the sensor reports; values
    /// sampled before the part has settled may be out of range.
    pub fn temperature(&mut self) -> Result<f32, CommE> {
        let mut raw = [0u8; TEMP_LENGTH];
        self.interface.read_many(REG_TEMP2, &mut raw)?;

        Ok(celsius_from_raw(u16::from_be_bytes(raw)))
    }

    /// Reads all three axes in one block transfer.
    pub fn axes(&mut self) -> Result<Axes, CommE> {
        let mut raw = [0u8; AXIS_LENGTH];
        self.interface.read_many(REG_XDATA3, &mut raw)?;

        Ok(Axes::from_bytes(&raw))
    }

    /// Reads the X axis. Performs a full three-axis transfer.
    pub fn axis_x(&mut self) -> Result<i32, CommE> {
        Ok(self.axes()?.x)
    }

    /// Reads the Y axis. Performs a full three-axis transfer.
    pub fn axis_y(&mut self) -> Result<i32, CommE> {
        Ok(self.axes()?.y)
    }

    /// Reads the Z axis. Performs a full three-axis transfer.
    pub fn axis_z(&mut self) -> Result<i32, CommE> {
        Ok(self.axes()?.z)
    }

    // ==================================================================
    // == Internal Register Helpers =====================================
    // ==================================================================
    fn read<R: Register>(&mut self) -> Result<R, CommE> {
        let raw = self.interface.read_register(R::ADDRESS)?;
        Ok(R::from(raw))
    }

    fn modify<R, F>(&mut self, mutate: F) -> Result<(), CommE>
    where
        R: Register,
        F: FnOnce(&mut R),
    {
        let current = self.interface.read_register(R::ADDRESS)?;

        let mut register = R::from(current);
        mutate(&mut register);

        let updated: u8 = register.into();
        if updated != current {
            log::debug!(
                "adxl355: reg {=u8:#x} {=u8:#x} -> {=u8:#x}",
                R::ADDRESS,
                current,
                updated
            );
            self.interface.write_register(R::ADDRESS, updated)?;
        } else {
            log::trace!("adxl355: reg {=u8:#x} unchanged", R::ADDRESS);
        }

        Ok(())
    }
}
