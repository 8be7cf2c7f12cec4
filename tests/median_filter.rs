use median_chain::{Config, MedianFilter};

fn sorted_median(window: &[u32]) -> u32 {
    let mut sorted = window.to_vec();
    sorted.sort_unstable();
    sorted[sorted.len() / 2]
}

#[test]
fn full_window_returns_true_median() {
    let samples = [42, 7, 19, 88, 3, 61, 25];
    let mut filter = MedianFilter::<u32, 8>::with_window(7).expect("Valid config");

    let mut out = 0;
    for &sample in &samples {
        out = filter.add_sample(sample);
    }

    assert_eq!(out, 25);
    assert_eq!(out, sorted_median(&samples));
}

#[test]
fn ramp_matches_sliding_window() {
    let samples: Vec<u32> = (1..=50).collect();
    let mut filter = MedianFilter::<u32, 8>::with_window(7).expect("Valid config");

    for (i, &sample) in samples.iter().enumerate() {
        let out = filter.add_sample(sample);
        if i + 1 >= 7 {
            let window = &samples[i + 1 - 7..=i];
            assert_eq!(out, sorted_median(window), "sample #{}", i + 1);
        }
    }
}

#[test]
fn descending_ramp_matches_sliding_window() {
    let samples: Vec<u32> = (1..=40).rev().collect();
    let mut filter = MedianFilter::<u32, 8>::with_window(5).expect("Valid config");

    for (i, &sample) in samples.iter().enumerate() {
        let out = filter.add_sample(sample);
        if i + 1 >= 5 {
            assert_eq!(out, sorted_median(&samples[i + 1 - 5..=i]));
        }
    }
}

#[test]
fn rejects_single_spikes() {
    let mut filter = MedianFilter::<u16, 8>::with_window(5).expect("Valid config");
    filter.extend([500, 502, 498, 501, 499]);

    assert_eq!(filter.add_sample(4095), 501);
    assert_eq!(filter.add_sample(500), 500);
    assert_eq!(filter.add_sample(1), 500);
}

#[test]
fn zero_reading_behaves_like_one() {
    let with_zero = [5, 0, 9, 0, 0, 3, 0, 7, 2, 0, 0, 0, 4];
    let with_one: Vec<u16> = with_zero.iter().map(|&x| if x == 0 { 1 } else { x }).collect();

    let mut a = MedianFilter::<u16, 8>::with_window(5).expect("Valid config");
    let mut b = MedianFilter::<u16, 8>::with_window(5).expect("Valid config");

    for (&x, &y) in with_zero.iter().zip(&with_one) {
        assert_eq!(a.add_sample(x), b.add_sample(y));
        assert!(a.sorted().eq(b.sorted()));
    }
    assert!(a.window().all(|v| v != 0));
}

#[test]
fn window_of_one_passes_through() {
    let mut filter = MedianFilter::<i32, 4>::with_window(1).expect("Valid config");

    for sample in [17, -4, 1_000_000, 0, 0, -99] {
        assert_eq!(filter.add_sample(sample), sample);
    }
}

#[test]
fn identical_streams_identical_outputs() {
    let samples = [12, 907, 33, 33, 1, 64, 512, 8, 8, 8, 2048, 77, 3];
    let mut a = MedianFilter::<u16, 16>::with_window(9).expect("Valid config");
    let mut b = MedianFilter::<u16, 16>::with_window(9).expect("Valid config");

    let out_a: Vec<u16> = samples.iter().map(|&x| a.add_sample(x)).collect();
    let out_b: Vec<u16> = samples.iter().map(|&x| b.add_sample(x)).collect();

    assert_eq!(out_a, out_b);
}

#[test]
fn signed_readings_below_zero() {
    let samples = [-5, -1, -20, 3, -7];
    let mut filter = MedianFilter::<i16, 8>::with_window(5).expect("Valid config");
    filter.extend(samples);

    assert_eq!(filter.median(), -5);
    assert!(filter.sorted().eq([3, -1, -5, -7, -20]));
}

#[test]
fn custom_stopper_lifts_low_readings() {
    let config = Config::new(3).with_stopper(100_u32);
    let mut filter = MedianFilter::<u32, 4>::new(config).expect("Valid config");

    filter.extend([150, 40, 100]);

    // 40 and 100 are both reported as 101
    assert!(filter.window().eq([150, 101, 101]));
    assert_eq!(filter.median(), 101);
}

#[test]
fn warm_up_outputs_include_stopper() {
    let mut filter = MedianFilter::<u16, 8>::with_window(5).expect("Valid config");

    let outputs: Vec<u16> = [10, 20, 30, 40, 50].iter().map(|&x| filter.add_sample(x)).collect();

    // Seeded slots hold the stopper (0) until overwritten
    assert_eq!(outputs, [0, 0, 10, 20, 30]);
    assert!(filter.is_primed());
}

#[test]
fn even_window_reports_upper_median() {
    let mut filter = MedianFilter::<u32, 8>::with_window(4).expect("Valid config");
    filter.extend([1, 2, 3, 4]);
    assert_eq!(filter.median(), 3);

    // [2, 3, 4, 10]
    assert_eq!(filter.add_sample(10), 4);
}

#[test]
fn reset_clears_window() {
    let mut filter = MedianFilter::<u16, 8>::with_window(3).expect("Valid config");
    filter.extend([900, 900, 900]);

    filter.reset();

    assert!(!filter.is_primed());
    assert_eq!(filter.add_sample(5), 0);
    assert_eq!(filter.add_sample(6), 5);
}
