//! Counting the k-mers of one in-memory sequence.
//!
//! [`count_kmers`] is the core entry point: validate `k`, scan the windows,
//! fold each valid window onto its key (canonical or literal), tally, and
//! optionally normalize into relative frequencies.
//!
//! # Example
//!
//! ```rust
//! use kcounter::count::{count_kmers, CountOptions};
//!
//! let counts = count_kmers("TCATTCGATT", 3, CountOptions::new())?;
//! assert_eq!(counts["ATT"], 2.0);
//!
//! let canonical = count_kmers("TCATTCGATT", 3, CountOptions::new().canonical(true))?;
//! assert_eq!(canonical["AAT"], 2.0);
//!
//! let relative = count_kmers("TCATTCGATT", 3, CountOptions::new().relative(true))?;
//! assert_eq!(relative["ATT"], 0.25);
//! # Ok::<(), kcounter::error::KcounterError>(())
//! ```

use std::{collections::HashMap, hash::BuildHasherDefault};

use rustc_hash::FxHasher;

use crate::{
    error::KcounterError,
    kmer::{Kmer, KmerLength},
    window::Windows,
};

#[cfg(feature = "tracing")]
use tracing::debug;

/// K-mer strings mapped to raw counts or relative frequencies.
pub type KmerCounts = HashMap<String, f64>;

/// Flags controlling how windows are keyed and how counts are reported.
///
/// Both flags default to `false`: literal k-mers, raw counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountOptions {
    /// Fold each k-mer onto the smaller of itself and its reverse complement.
    pub canonical_kmers: bool,
    /// Divide every count by the total number of valid windows.
    pub relative_frequencies: bool,
}

impl CountOptions {
    pub const fn new() -> Self {
        Self {
            canonical_kmers: false,
            relative_frequencies: false,
        }
    }

    #[must_use]
    pub const fn canonical(mut self, canonical_kmers: bool) -> Self {
        self.canonical_kmers = canonical_kmers;
        self
    }

    #[must_use]
    pub const fn relative(mut self, relative_frequencies: bool) -> Self {
        self.relative_frequencies = relative_frequencies;
        self
    }
}

/// Counts the k-mers of `sequence`.
///
/// The sequence is read case-insensitively. Windows containing anything
/// other than `A`, `C`, `G` or `T` are skipped in their entirety.
///
/// An empty map is a normal result: it is returned for an empty sequence, a
/// `k` longer than the sequence, or a sequence without a single valid window.
///
/// # Errors
///
/// Returns [`KcounterError::InvalidArgument`] if `k <= 0`. Nothing is
/// scanned in that case.
pub fn count_kmers(
    sequence: &str,
    k: i64,
    options: CountOptions,
) -> Result<KmerCounts, KcounterError> {
    let k = KmerLength::new(k)?;
    Ok(count_kmers_validated(sequence.as_bytes(), k, options))
}

/// Counts the k-mers of a raw byte sequence with an already validated `k`.
///
/// Non-UTF-8 input is fine; any byte outside the alphabet just invalidates
/// the windows it falls in.
pub fn count_kmers_validated(sequence: &[u8], k: KmerLength, options: CountOptions) -> KmerCounts {
    let mut tally = KmerTally::default();
    tally.add_sequence(sequence, k, options.canonical_kmers);

    #[cfg(feature = "tracing")]
    debug!(
        k = k.get(),
        bases = sequence.len(),
        valid_windows = tally.total(),
        distinct = tally.distinct(),
        "Counted sequence"
    );

    tally.into_counts(options.relative_frequencies)
}

/// Integer k-mer counts together with the number of valid windows seen.
///
/// `total` always equals the sum of all counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmerTally {
    counts: HashMap<Kmer, u64, BuildHasherDefault<FxHasher>>,
    total: u64,
}

impl KmerTally {
    /// Adds one occurrence of `kmer`.
    pub fn add(&mut self, kmer: Kmer) {
        self.add_count(kmer, 1);
    }

    /// Adds `count` occurrences of `kmer`.
    pub fn add_count(&mut self, kmer: Kmer, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(kmer).or_insert(0) += count;
        self.total += count;
    }

    /// Scans `sequence` and adds every valid window under its key.
    pub fn add_sequence(&mut self, sequence: &[u8], k: KmerLength, canonical: bool) {
        for kmer in Windows::new(sequence, k).kmers() {
            self.add(kmer.into_key(canonical));
        }
    }

    /// Number of valid windows counted.
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct keys.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn get(&self, kmer: &Kmer) -> Option<u64> {
        self.counts.get(kmer).copied()
    }

    /// Converts into the public map: raw counts as `f64`, or each count
    /// divided by [`total`](Self::total) when `relative` is set.
    ///
    /// A tally with no windows yields an empty map in either mode.
    pub fn into_counts(self, relative: bool) -> KmerCounts {
        let total = self.total as f64;
        self.counts
            .into_iter()
            .map(|(kmer, count)| {
                let count = count as f64;
                let value = if relative { count / total } else { count };
                (String::from(kmer), value)
            })
            .collect()
    }
}

impl FromIterator<(Kmer, u64)> for KmerTally {
    fn from_iter<I: IntoIterator<Item = (Kmer, u64)>>(iter: I) -> Self {
        let mut tally = Self::default();
        for (kmer, count) in iter {
            tally.add_count(kmer, count);
        }
        tally
    }
}
