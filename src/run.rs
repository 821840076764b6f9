//! Counting across many records, and the command-line run.
//!
//! Each record is scanned on its own by the single-sequence core, in parallel
//! with [`rayon`]; raw counts from all records land in one concurrent map and
//! are normalized only once every record is done.

use crate::{
    cli::OutputFormat,
    count::{CountOptions, KmerCounts, KmerTally},
    error::KcounterError,
    format::SequenceFormat,
    input::Input,
    kmer::{Kmer, KmerLength},
    output::write_counts,
    reader::read_sequences,
    window::Windows,
};
use bytes::Bytes;
use dashmap::DashMap;
use rayon::prelude::*;
use rustc_hash::FxHasher;
use std::{
    hash::BuildHasherDefault,
    io::{stdout, BufWriter, Write},
};

#[cfg(feature = "tracing")]
use tracing::{info, info_span};

/// Counts k-mers over several sequences as if each were counted separately
/// and the counts summed.
///
/// In relative mode, frequencies are taken over the valid windows of all
/// sequences together.
///
/// # Errors
///
/// Returns [`KcounterError::InvalidArgument`] if `k <= 0`.
///
/// # Example
///
/// ```rust
/// use bytes::Bytes;
/// use kcounter::count::CountOptions;
/// use kcounter::run::count_kmers_in_sequences;
///
/// let seqs = [Bytes::from_static(b"AAAC"), Bytes::from_static(b"GTTT")];
/// let counts = count_kmers_in_sequences(&seqs, 3, CountOptions::new().canonical(true))?;
///
/// assert_eq!(counts["AAA"], 2.0);
/// assert_eq!(counts["AAC"], 2.0);
/// # Ok::<(), kcounter::error::KcounterError>(())
/// ```
pub fn count_kmers_in_sequences(
    sequences: &[Bytes],
    k: i64,
    options: CountOptions,
) -> Result<KmerCounts, KcounterError> {
    let k = KmerLength::new(k)?;
    Ok(KmerMap::new()
        .build(sequences, k, options.canonical_kmers)
        .into_tally()
        .into_counts(options.relative_frequencies))
}

/// Reads `input` and counts the k-mers of all its records.
///
/// `k` is validated before the input is opened.
///
/// # Errors
///
/// Returns [`KcounterError::InvalidArgument`] for `k <= 0`, or a read/parse
/// error for unreadable input.
pub fn count_kmers_in_file(
    input: &Input,
    k: i64,
    options: CountOptions,
    format: SequenceFormat,
) -> Result<KmerCounts, KcounterError> {
    #[cfg(feature = "tracing")]
    info!(k, input = %input, ?options, "Starting k-mer counting");

    count_input(input, KmerLength::new(k)?, options, format)
}

pub(crate) fn count_input(
    input: &Input,
    k: KmerLength,
    options: CountOptions,
    format: SequenceFormat,
) -> Result<KmerCounts, KcounterError> {
    let sequences = read_sequences(input, format)?;

    #[cfg(feature = "tracing")]
    let _span = info_span!("count_sequences", records = sequences.len()).entered();

    let tally = KmerMap::new()
        .build(&sequences, k, options.canonical_kmers)
        .into_tally();

    #[cfg(feature = "tracing")]
    info!(
        valid_windows = tally.total(),
        distinct = tally.distinct(),
        "K-mer counting complete"
    );

    Ok(tally.into_counts(options.relative_frequencies))
}

/// Counts k-mers in `input` and writes them to stdout.
///
/// # Errors
///
/// Returns [`KcounterError`] on invalid `k`, read, write, or serialization
/// errors.
pub fn run_with_options(
    input: &Input,
    k: i64,
    options: CountOptions,
    input_format: SequenceFormat,
    output_format: OutputFormat,
) -> Result<(), KcounterError> {
    let counts = count_kmers_in_file(input, k, options, input_format)?;

    let mut buf = BufWriter::new(stdout().lock());
    write_counts(&mut buf, &counts, output_format)?;
    buf.flush()?;
    Ok(())
}

/// A custom `DashMap` w/ `FxHasher`.
type DashFx = DashMap<Kmer, u64, BuildHasherDefault<FxHasher>>;

struct KmerMap(DashFx);

impl KmerMap {
    fn new() -> Self {
        Self(DashMap::with_hasher(
            BuildHasherDefault::<FxHasher>::default(),
        ))
    }

    fn build(self, sequences: &[Bytes], k: KmerLength, canonical: bool) -> Self {
        sequences
            .par_iter()
            .for_each(|seq| self.process_sequence(seq, k, canonical));
        self
    }

    fn process_sequence(&self, seq: &[u8], k: KmerLength, canonical: bool) {
        for kmer in Windows::new(seq, k).kmers() {
            *self.0.entry(kmer.into_key(canonical)).or_insert(0) += 1;
        }
    }

    fn into_tally(self) -> KmerTally {
        self.0.into_iter().collect()
    }
}
