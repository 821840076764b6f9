//! Count the k-mers of DNA sequences.
//!
//! Every length-k window of a sequence is uppercased and counted, unless it
//! contains a character outside `{A, C, G, T}`, in which case the whole
//! window is skipped. Optionally each k-mer is folded onto its canonical form
//! (the smaller of itself and its reverse complement), and counts can be
//! reported as relative frequencies.
//!
//! # Example
//!
//! ```rust
//! use kcounter::{count_kmers, CountOptions};
//!
//! let counts = count_kmers("TCATTCGATT", 3, CountOptions::new())?;
//! assert_eq!(counts["ATT"], 2.0);
//! assert_eq!(counts.len(), 7);
//!
//! // k <= 0 is an error; an impossible window is just an empty result.
//! assert!(count_kmers("TCATTCGATT", 0, CountOptions::new()).is_err());
//! assert!(count_kmers("TCATTCGATT", 11, CountOptions::new())?.is_empty());
//! # Ok::<(), kcounter::KcounterError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `gzip`: read `.gz` compressed FASTA/FASTQ files
//! - `tracing`: emit `tracing` spans and events while reading and counting

pub mod builder;
pub mod cli;
pub mod count;
pub mod error;
pub mod format;
pub mod input;
pub mod kmer;
pub mod output;
pub mod reader;
pub mod run;
pub mod window;

pub use count::{count_kmers, CountOptions, KmerCounts};
pub use error::KcounterError;
