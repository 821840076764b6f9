//! Builder pattern API for ergonomic k-mer counting.
//!
//! # Example
//!
//! ```rust
//! use kcounter::builder::KmerCounter;
//!
//! let counts = KmerCounter::new()
//!     .k(3)?
//!     .canonical(true)
//!     .count("TCATTCGATT")?;
//!
//! assert_eq!(counts["CGA"], 2.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::Write;

use crate::{
    cli::OutputFormat,
    count::{count_kmers_validated, CountOptions, KmerCounts},
    error::{BuilderError, KmerLengthError},
    format::SequenceFormat,
    input::Input,
    kmer::KmerLength,
    output::write_counts,
    run::count_input,
};

/// A builder for configuring k-mer counting operations.
///
/// Configure with the fluent API, then call [`count()`](KmerCounter::count)
/// for an in-memory sequence or [`count_file()`](KmerCounter::count_file)
/// for a FASTA/FASTQ input.
#[derive(Debug, Clone, Default)]
pub struct KmerCounter {
    k: Option<KmerLength>,
    options: CountOptions,
    format: OutputFormat,
    input_format: SequenceFormat,
}

impl KmerCounter {
    /// Creates a builder with no `k`, literal k-mers, raw counts, TSV output
    /// and auto-detected input format.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the k-mer length.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k <= 0`.
    ///
    /// ```rust
    /// use kcounter::builder::KmerCounter;
    ///
    /// assert!(KmerCounter::new().k(21).is_ok());
    /// assert!(KmerCounter::new().k(0).is_err());
    /// ```
    pub fn k(mut self, k: i64) -> Result<Self, KmerLengthError> {
        self.k = Some(KmerLength::new(k)?);
        Ok(self)
    }

    /// Sets the k-mer length from a pre-validated `KmerLength`.
    #[must_use]
    pub const fn k_validated(mut self, k: KmerLength) -> Self {
        self.k = Some(k);
        self
    }

    /// Count canonical k-mers (a k-mer and its reverse complement share a key).
    #[must_use]
    pub const fn canonical(mut self, canonical: bool) -> Self {
        self.options = self.options.canonical(canonical);
        self
    }

    /// Report relative frequencies instead of raw counts.
    #[must_use]
    pub const fn relative_frequencies(mut self, relative: bool) -> Self {
        self.options = self.options.relative(relative);
        self
    }

    /// Sets the output format for [`count_to_writer()`](Self::count_to_writer).
    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the format used to parse file input.
    #[must_use]
    pub const fn input_format(mut self, input_format: SequenceFormat) -> Self {
        self.input_format = input_format;
        self
    }

    /// Counts the k-mers of one in-memory sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::KmerLengthNotSet`] if `k` was never set.
    pub fn count(&self, sequence: &str) -> Result<KmerCounts, BuilderError> {
        let k = self.k.ok_or(BuilderError::KmerLengthNotSet)?;
        Ok(count_kmers_validated(sequence.as_bytes(), k, self.options))
    }

    /// Counts the k-mers of every record in `input`.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` is unset or the input cannot be read or parsed.
    pub fn count_file(&self, input: &Input) -> Result<KmerCounts, BuilderError> {
        let k = self.k.ok_or(BuilderError::KmerLengthNotSet)?;
        Ok(count_input(input, k, self.options, self.input_format)?)
    }

    /// Counts the k-mers of `input` and writes them to `writer` in the
    /// configured format.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` is unset, the input cannot be read, or the
    /// output cannot be written.
    pub fn count_to_writer<W: Write>(&self, input: &Input, writer: &mut W) -> Result<(), BuilderError> {
        let counts = self.count_file(input)?;
        write_counts(writer, &counts, self.format)?;
        Ok(())
    }

    #[must_use]
    pub const fn get_k(&self) -> Option<KmerLength> {
        self.k
    }

    #[must_use]
    pub const fn get_options(&self) -> CountOptions {
        self.options
    }

    #[must_use]
    pub const fn get_format(&self) -> OutputFormat {
        self.format
    }
}
