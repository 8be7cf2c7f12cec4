use crate::sample::Sample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    WindowTooSmall,
    WindowTooLarge { window_size: usize, capacity: usize },
    StopperAtMaximum,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::WindowTooSmall => write!(f, "window_size must be at least 1"),
            ConfigError::WindowTooLarge { window_size, capacity } => write!(
                f,
                "window_size {} exceeds filter capacity {}",
                window_size, capacity
            ),
            ConfigError::StopperAtMaximum => {
                write!(f, "stopper must leave room for a larger reading")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Median filter configuration.
///
/// `stopper` is the reserved value terminating the sorted chain. It is never
/// reported as a real reading: see [`Sample::above`] for how colliding
/// readings are normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config<T> {
    pub window_size: usize,
    pub stopper: T,
}

impl<T: Sample> Config<T> {
    /// Window of `window_size` samples with the default stopper (`T::min_value()`).
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            stopper: T::default_stopper(),
        }
    }

    pub fn with_stopper(self, stopper: T) -> Self {
        Self { stopper, ..self }
    }

    /// Check the configuration against a filter able to hold `capacity` slots.
    pub fn validate(&self, capacity: usize) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::WindowTooSmall);
        }

        if self.window_size > capacity {
            return Err(ConfigError::WindowTooLarge {
                window_size: self.window_size,
                capacity,
            });
        }

        // Normalization needs `stopper + 1` to exist
        if self.stopper == T::max_value() {
            return Err(ConfigError::StopperAtMaximum);
        }

        Ok(())
    }
}
