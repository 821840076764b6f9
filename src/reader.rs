//! Reading sequence records with `rust-bio`.

use std::io::{self, Read};

use bio::io::{fasta, fastq};
use bytes::Bytes;

use crate::{error::KcounterError, format::SequenceFormat, input::Input};

#[cfg(feature = "tracing")]
use tracing::{debug, info_span};

/// Reads every record of `input` and returns the sequences.
///
/// Headers and qualities are dropped; each record's sequence is kept as its
/// own entry so k-mer windows never span two records.
pub fn read_sequences(input: &Input, format: SequenceFormat) -> Result<Vec<Bytes>, KcounterError> {
    let format = format.resolve(input.as_path());

    #[cfg(feature = "tracing")]
    let _span = info_span!("read_sequences", input = %input, format = %format).entered();

    let source = input.open()?;
    let sequences = match format {
        SequenceFormat::Fastq => read_fastq(source)?,
        SequenceFormat::Fasta | SequenceFormat::Auto => read_fasta(source)?,
    };

    #[cfg(feature = "tracing")]
    debug!(records = sequences.len(), "Read sequence records");

    Ok(sequences)
}

fn read_fasta<R: Read>(source: R) -> Result<Vec<Bytes>, KcounterError> {
    fasta::Reader::new(source)
        .records()
        .map(|record| {
            record
                .map(|r| Bytes::copy_from_slice(r.seq()))
                .map_err(parse_error)
        })
        .collect()
}

fn read_fastq<R: Read>(source: R) -> Result<Vec<Bytes>, KcounterError> {
    fastq::Reader::new(source)
        .records()
        .map(|record| {
            record
                .map(|r| Bytes::copy_from_slice(r.seq()))
                .map_err(|e| match e {
                    fastq::Error::ReadError(err) => parse_error(err),
                    other => KcounterError::SequenceParse {
                        details: other.to_string(),
                    },
                })
        })
        .collect()
}

/// Recovers errors raised by the input source itself (such as gzip
/// failures); anything else is a malformed record.
fn parse_error(err: io::Error) -> KcounterError {
    let details = err.to_string();
    match err.into_inner().map(|inner| inner.downcast::<KcounterError>()) {
        Some(Ok(source_error)) => *source_error,
        _ => KcounterError::SequenceParse { details },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_multiline_fasta_records() {
        let data: &[u8] = b">one\nACGT\nAC\n>two\nGATTACA\n";
        let seqs = read_fasta(data).unwrap();
        assert_eq!(seqs, [Bytes::from_static(b"ACGTAC"), Bytes::from_static(b"GATTACA")]);
    }

    #[test]
    fn reads_fastq_sequences_without_qualities() {
        let data: &[u8] = b"@r1\nACGT\n+\nIIII\n@r2\nTTNA\n+\nIIII\n";
        let seqs = read_fastq(data).unwrap();
        assert_eq!(seqs, [Bytes::from_static(b"ACGT"), Bytes::from_static(b"TTNA")]);
    }

    #[test]
    fn malformed_fastq_is_parse_error() {
        let data: &[u8] = b"not a fastq record\n";
        let err = read_fastq(data).unwrap_err();
        assert!(matches!(err, KcounterError::SequenceParse { .. }));
    }

    /// A source whose every read fails with a wrapped [`KcounterError`].
    struct FailingSource;

    impl Read for FailingSource {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                KcounterError::SequenceRead {
                    source: io::Error::from(io::ErrorKind::InvalidData),
                    path: "reads.fq.gz".into(),
                },
            ))
        }
    }

    #[test]
    fn source_errors_survive_both_readers() {
        for err in [
            read_fasta(FailingSource).unwrap_err(),
            read_fastq(FailingSource).unwrap_err(),
        ] {
            assert!(
                matches!(&err, KcounterError::SequenceRead { path, .. } if path.ends_with("reads.fq.gz")),
                "{err}"
            );
        }
    }

    #[test]
    fn plain_io_errors_become_parse_errors() {
        let err = parse_error(io::Error::new(io::ErrorKind::InvalidData, "bad header"));
        assert!(matches!(err, KcounterError::SequenceParse { details } if details == "bad header"));
    }
}
