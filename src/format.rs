//! Sequence file format selection.

use clap::ValueEnum;
use std::{ffi::OsStr, fmt, path::Path};

/// Input sequence file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SequenceFormat {
    /// Detect from the file extension, falling back to FASTA.
    #[default]
    Auto,
    /// FASTA (`.fa`, `.fasta`, `.fna`).
    Fasta,
    /// FASTQ (`.fq`, `.fastq`).
    Fastq,
}

impl SequenceFormat {
    /// Detects the format of `path` from its extension, looking through a
    /// trailing `.gz`.
    ///
    /// ```
    /// use kcounter::format::SequenceFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(SequenceFormat::from_extension(Path::new("reads.fastq.gz")), SequenceFormat::Fastq);
    /// assert_eq!(SequenceFormat::from_extension(Path::new("contigs.fna")), SequenceFormat::Fasta);
    /// assert_eq!(SequenceFormat::from_extension(Path::new("notes.txt")), SequenceFormat::Fasta);
    /// ```
    #[must_use]
    pub fn from_extension(path: &Path) -> Self {
        let lowercase_ext = |p: &Path| p.extension().and_then(OsStr::to_str).map(str::to_lowercase);

        let ext = match lowercase_ext(path).as_deref() {
            Some("gz") => path.file_stem().map(Path::new).and_then(lowercase_ext),
            _ => lowercase_ext(path),
        };

        match ext.as_deref() {
            Some("fq" | "fastq") => Self::Fastq,
            _ => Self::Fasta,
        }
    }

    /// Turns `Auto` into a concrete format. Without a path (stdin) `Auto`
    /// means FASTA.
    #[must_use]
    pub fn resolve(self, path: Option<&Path>) -> Self {
        match self {
            Self::Auto => path.map_or(Self::Fasta, Self::from_extension),
            other => other,
        }
    }
}

impl fmt::Display for SequenceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Fasta => "fasta",
            Self::Fastq => "fastq",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_extension_recognizes_fastq() {
        for name in ["r.fq", "r.fastq", "r.FQ", "r.fq.gz", "r.fastq.gz"] {
            assert_eq!(
                SequenceFormat::from_extension(Path::new(name)),
                SequenceFormat::Fastq,
                "{name}"
            );
        }
    }

    #[test]
    fn from_extension_defaults_to_fasta() {
        for name in ["g.fa", "g.fasta", "g.fna.gz", "g.txt", "g", "g.gz"] {
            assert_eq!(
                SequenceFormat::from_extension(Path::new(name)),
                SequenceFormat::Fasta,
                "{name}"
            );
        }
    }

    #[test]
    fn resolve_keeps_explicit_format() {
        let fq = Some(Path::new("reads.fq"));
        assert_eq!(SequenceFormat::Auto.resolve(fq), SequenceFormat::Fastq);
        assert_eq!(SequenceFormat::Fasta.resolve(fq), SequenceFormat::Fasta);
        assert_eq!(SequenceFormat::Auto.resolve(None), SequenceFormat::Fasta);
    }

    #[test]
    fn display() {
        assert_eq!(SequenceFormat::Auto.to_string(), "auto");
        assert_eq!(SequenceFormat::Fastq.to_string(), "fastq");
    }
}
