//! Allocation-free streaming median filter for integer sensor readings.
//!
//! ```
//! use median_chain::MedianFilter;
//!
//! let mut filter: MedianFilter<u16> = MedianFilter::with_window(3).unwrap();
//! filter.add_sample(10);
//! filter.add_sample(900); // spike
//! assert_eq!(filter.add_sample(12), 12);
//! ```
#![no_std]

mod fmt;

mod chain;
mod config;
mod filter;
mod ring;
mod sample;

pub use config::{Config, ConfigError};
pub use filter::MedianFilter;
pub use sample::Sample;
