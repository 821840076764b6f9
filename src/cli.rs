//! Command-line interface definition.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::{count::CountOptions, format::SequenceFormat, input::Input, kmer::KmerLength};

/// Count the k-mers of DNA sequences in FASTA or FASTQ files.
///
/// Windows containing characters other than A, C, G or T (in either case)
/// are ignored.
#[derive(Parser, Debug)]
#[command(name = "kcounter")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// K-mer length (a positive integer)
    #[arg(value_parser = parse_k, allow_negative_numbers = true)]
    pub k: i64,

    /// Path to a FASTA/FASTQ file; "-" or omitted reads stdin
    pub path: Option<PathBuf>,

    /// Count the canonical representation of k-mers
    #[arg(short, long)]
    pub canonical: bool,

    /// Report relative frequencies instead of counts
    #[arg(short, long)]
    pub relative: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "tsv")]
    pub format: OutputFormat,

    /// Input format
    #[arg(long, value_enum, default_value = "auto")]
    pub input_format: SequenceFormat,

    /// Suppress informational output (only output k-mer counts)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn input(&self) -> Input {
        Input::from_option(self.path.as_deref())
    }

    pub const fn options(&self) -> CountOptions {
        CountOptions::new()
            .canonical(self.canonical)
            .relative(self.relative)
    }
}

/// Output format for k-mer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Tab-separated values (kmer\tvalue)
    #[default]
    Tsv,
    /// FASTA-like format (>{value}\n{kmer})
    Fasta,
    /// JSON array format
    Json,
}

fn parse_k(s: &str) -> Result<i64, String> {
    let k: i64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    KmerLength::new(k).map_err(|e| e.to_string())?;
    Ok(k)
}
