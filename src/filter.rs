use crate::chain::OrderChain;
use crate::config::{Config, ConfigError};
use crate::ring::SlotRing;
use crate::sample::Sample;

/// Streaming median over the last `window_size` integer readings.
///
/// `N` is the storage capacity, i.e. the largest window the filter accepts.
/// All storage is inline; nothing is allocated after (or during)
/// construction.
///
/// # Stopper normalization
///
/// The configured stopper (by default `T::min_value()`) terminates the
/// internal sorted chain and can never be a reading. A reading at or below
/// the stopper is silently reported as `stopper + 1`: with the default
/// configuration a raw `0_u16` becomes `1`. Pick a stopper outside the
/// sensor's range with [`Config::with_stopper`] if that matters.
///
/// # Warm-up
///
/// Slots start out holding the stopper, so the first `window_size - 1`
/// outputs are medians of a partially seeded window. Use
/// [`MedianFilter::is_primed`] to tell them apart.
#[derive(Debug, Clone)]
pub struct MedianFilter<T, const N: usize = 32> {
    config: Config<T>,
    ring: SlotRing,
    chain: OrderChain<T, N>,
    median: T,
    seen: usize,
}

impl<T: Sample, const N: usize> MedianFilter<T, N> {
    pub fn new(config: Config<T>) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate(N) {
            warn!("median filter rejected: {}", err);
            return Err(err);
        }

        debug!(
            "median filter ready: window {} of capacity {}",
            config.window_size, N
        );

        Ok(Self {
            config,
            ring: SlotRing::new(config.window_size),
            chain: OrderChain::new(config.window_size, config.stopper),
            median: config.stopper,
            seen: 0,
        })
    }

    /// Filter over `window_size` readings with the default stopper.
    pub fn with_window(window_size: usize) -> Result<Self, ConfigError> {
        Self::new(Config::new(window_size))
    }

    pub fn config(&self) -> &Config<T> {
        &self.config
    }

    pub fn window_size(&self) -> usize {
        self.chain.len()
    }

    pub fn stopper(&self) -> T {
        self.config.stopper
    }

    /// Feed one reading and return the median of the window.
    ///
    /// Runs in `O(window_size)` with no allocation, so it is fine to call
    /// from a sampling interrupt. For even windows the upper of the two
    /// middle values is returned.
    pub fn add_sample(&mut self, sample: T) -> T {
        let sample = sample.above(self.config.stopper);
        let slot = self.ring.advance();

        self.median = self.chain.replace(slot, sample);
        if self.seen < self.ring.len() {
            self.seen += 1;
        }

        self.median
    }

    /// Last value returned by [`add_sample`](Self::add_sample), or the stopper
    /// if nothing has been fed yet.
    pub fn median(&self) -> T {
        self.median
    }

    /// Readings fed so far, saturating at the window size.
    pub fn samples_seen(&self) -> usize {
        self.seen
    }

    /// True once the window holds only real readings.
    pub fn is_primed(&self) -> bool {
        self.seen == self.ring.len()
    }

    /// Window contents from largest to smallest.
    pub fn sorted(&self) -> impl Iterator<Item = T> + '_ {
        self.chain.iter()
    }

    /// Window contents oldest first. Unfilled slots hold the stopper.
    pub fn window(&self) -> impl Iterator<Item = T> + '_ {
        let len = self.ring.len();
        let oldest = self.ring.cursor();
        (0..len).map(move |i| self.chain.slot_value((oldest + i) % len))
    }

    /// Drop every reading and return to the freshly constructed state.
    pub fn reset(&mut self) {
        debug!("median filter reset after {} samples", self.seen);

        self.ring.reset();
        self.chain.reseed(self.config.stopper);
        self.median = self.config.stopper;
        self.seen = 0;
    }
}

impl<T: Sample, const N: usize> Extend<T> for MedianFilter<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for sample in iter {
            self.add_sample(sample);
        }
    }
}
