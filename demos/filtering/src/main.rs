//! Demonstrates spike rejection with median-chain
//!
//! Feeds a noisy 12-bit ADC trace with occasional glitches through median
//! filters of different window sizes.

use median_chain::{Config, MedianFilter};

fn main() {
    println!("=== median-chain Filtering Examples ===\n");

    // Readings around 2048 with two single-sample glitches
    let noisy_samples: [u16; 12] = [
        2048, 2100, 2000, 4095, 2080, 1990, 2050, 0, 2020, 2060, 2040, 2070,
    ];

    // Example 1: Window of 3
    println!("1. Median filter (window=3)");
    let mut filter: MedianFilter<u16> = MedianFilter::with_window(3).expect("Valid config");

    println!("   Input → Output");
    for &sample in &noisy_samples {
        let output = filter.add_sample(sample);
        let note = if filter.is_primed() { "" } else { " (warming up)" };
        println!("   {:4} → {:4}{}", sample, output, note);
    }
    println!();

    // Example 2: Wider window
    println!("2. Median filter (window=7)");
    let mut filter: MedianFilter<u16> = MedianFilter::with_window(7).expect("Valid config");

    println!("   Input → Output");
    for &sample in &noisy_samples {
        let output = filter.add_sample(sample);
        println!("   {:4} → {:4}", sample, output);
    }
    println!();

    // Example 3: Signed readings with a stopper outside the sensor range
    println!("3. Signed readings, stopper=-1000 (window=5)");
    let config = Config::new(5).with_stopper(-1000_i16);
    let mut filter: MedianFilter<i16, 8> = MedianFilter::new(config).expect("Valid config");

    let temperatures: [i16; 8] = [-12, -11, -13, 85, -12, -10, -11, -12];
    println!("   Input → Output");
    for &sample in &temperatures {
        let output = filter.add_sample(sample);
        println!("   {:4} → {:4}", sample, output);
    }
    println!("   sorted window: {:?}", filter.sorted().collect::<Vec<_>>());
}
