//! Fuzz target for counting arbitrary input.
//!
//! Counting must never panic, and raw counts must add up to the number of
//! windows containing only A, C, G and T.

#![no_main]

use kcounter::{count_kmers, CountOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (i8, bool, &str)| {
    let (k, canonical, seq) = input;
    let options = CountOptions::new().canonical(canonical);

    let Ok(counts) = count_kmers(seq, i64::from(k), options) else {
        assert!(k <= 0, "only non-positive k may fail");
        return;
    };

    let k = k as usize;
    let expected = seq
        .as_bytes()
        .windows(k)
        .filter(|w| w.iter().all(|b| b"ACGTacgt".contains(b)))
        .count();
    let total: f64 = counts.values().sum();
    assert_eq!(total as usize, expected);
});
