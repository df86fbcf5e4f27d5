//! Configuration primitives for the ADXL355 driver.

use crate::params::{LowpassFilter, Range};

/// User-facing configuration for the ADXL355 sensor.
///
/// The driver never caches this value; it is applied to the hardware by
/// [`Adxl355::configure`](crate::device::Adxl355::configure) and read back
/// from the registers on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Measurement range selection.
    pub range: Range,
    /// Output data rate / low-pass filter selection.
    pub lowpass_filter: LowpassFilter,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the measurement range.
    pub fn range(mut self, range: Range) -> Self {
        self.config.range = range;
        self
    }

    /// Overrides the low-pass filter setting.
    pub fn lowpass_filter(mut self, filter: LowpassFilter) -> Self {
        self.config.lowpass_filter = filter;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    // Matches the device power-on state.
    fn default() -> Self {
        Self {
            range: Range::G2,
            lowpass_filter: LowpassFilter::Hz4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = Config::new()
            .range(Range::G8)
            .lowpass_filter(LowpassFilter::Hz62_5)
            .build();

        assert_eq!(config.range, Range::G8);
        assert_eq!(config.lowpass_filter, LowpassFilter::Hz62_5);
        assert_eq!(Config::new().build(), Config::default());
    }
}
