//! Fuzz target for canonical k-mer computation.
//!
//! Tests that canonical form has the expected properties:
//! 1. Is idempotent
//! 2. k-mer and reverse complement have same canonical form
//! 3. Canonical form is lexicographically smallest

#![no_main]

use kcounter::kmer::Kmer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(kmer) = Kmer::from_sub(data) else {
        return;
    };
    let rc = kmer.reverse_complement();
    let canonical = kmer.clone().canonical();

    // Property 1: Canonical is idempotent
    assert_eq!(
        canonical.clone().canonical(),
        canonical,
        "Canonical is not idempotent"
    );

    // Property 2: k-mer and RC have same canonical
    assert_eq!(
        rc.clone().canonical(),
        canonical,
        "k-mer and RC have different canonical forms"
    );

    // Property 3: Canonical is lexicographically smallest
    assert!(canonical <= kmer, "Canonical {canonical} > original {kmer}");
    assert!(canonical <= rc, "Canonical {canonical} > RC {rc}");
});
