#![no_std]

#[cfg(test)]
extern crate std;

mod error;

pub mod config;
pub mod device;
pub mod interface;
mod log;
pub mod params;
pub mod registers;

pub use crate::config::Config;
pub use crate::device::{Adxl355, Axes, StatusSnapshot};
pub use crate::error::{Error, Result};
pub use crate::params::{LowpassFilter, Range};
