//! Writing k-mer counts.
//!
//! Output is sorted by k-mer so runs are reproducible. Values print with
//! `f64`'s `Display`, so raw counts come out as integers (`2`) and
//! frequencies as decimals (`0.25`).

use std::{collections::BTreeMap, io::Write};

use serde::Serialize;

use crate::{cli::OutputFormat, count::KmerCounts, error::KcounterError};

/// A k-mer with its count or frequency, used for JSON serialization.
#[derive(Serialize)]
struct KmerValue<'a> {
    kmer: &'a str,
    value: f64,
}

/// Writes `counts` to `writer` in `format`, sorted by k-mer.
///
/// # Errors
///
/// Returns [`KcounterError::WriteError`] or [`KcounterError::JsonError`].
#[allow(clippy::implicit_hasher)]
pub fn write_counts<W: Write>(
    writer: &mut W,
    counts: &KmerCounts,
    format: OutputFormat,
) -> Result<(), KcounterError> {
    let sorted: BTreeMap<&str, f64> = counts.iter().map(|(k, &v)| (k.as_str(), v)).collect();

    match format {
        OutputFormat::Tsv => {
            for (kmer, value) in sorted {
                writeln!(writer, "{kmer}\t{value}")?;
            }
        }
        OutputFormat::Fasta => {
            for (kmer, value) in sorted {
                writeln!(writer, ">{value}\n{kmer}")?;
            }
        }
        OutputFormat::Json => {
            let json_data: Vec<KmerValue<'_>> = sorted
                .into_iter()
                .map(|(kmer, value)| KmerValue { kmer, value })
                .collect();
            serde_json::to_writer_pretty(&mut *writer, &json_data)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::{count_kmers, CountOptions};

    fn render(counts: &KmerCounts, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_counts(&mut out, counts, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn tsv_is_sorted_with_integer_counts() {
        let counts = count_kmers("TCATTCGATT", 3, CountOptions::new().canonical(true)).unwrap();
        insta::assert_snapshot!(render(&counts, OutputFormat::Tsv), @r"
        AAT	2
        ATC	1
        ATG	1
        CGA	2
        GAA	1
        TCA	1
        ");
    }

    #[test]
    fn fasta_like_output() {
        let counts = count_kmers("AAACTTTTTT", 3, CountOptions::new().relative(true)).unwrap();
        insta::assert_snapshot!(render(&counts, OutputFormat::Fasta), @r"
        >0.125
        AAA
        >0.125
        AAC
        >0.125
        ACT
        >0.125
        CTT
        >0.5
        TTT
        ");
    }

    #[test]
    fn json_array_of_objects() {
        let counts = count_kmers("ACGT", 4, CountOptions::new()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&counts, OutputFormat::Json)).unwrap();
        assert_eq!(json, serde_json::json!([{ "kmer": "ACGT", "value": 1.0 }]));
    }

    #[test]
    fn empty_counts_write_nothing_as_text() {
        let counts = KmerCounts::new();
        assert_eq!(render(&counts, OutputFormat::Tsv), "");
        assert_eq!(render(&counts, OutputFormat::Json).trim(), "[]");
    }
}
