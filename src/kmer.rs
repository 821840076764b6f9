//! K-mer length validation, the DNA alphabet, and canonical k-mers.

use std::{fmt, num::NonZeroUsize};

use bytes::Bytes;

use crate::error::{InvalidBaseError, KmerLengthError};

/// A validated k-mer length, always at least 1.
///
/// There is no upper bound: a length greater than the sequence simply yields
/// no windows.
///
/// # Example
///
/// ```rust
/// use kcounter::kmer::KmerLength;
///
/// assert_eq!(KmerLength::new(21)?.get(), 21);
/// assert!(KmerLength::new(0).is_err());
/// assert!(KmerLength::new(-1).is_err());
/// # Ok::<(), kcounter::error::KmerLengthError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KmerLength(NonZeroUsize);

impl KmerLength {
    /// Validates `k`.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k <= 0`.
    pub fn new(k: i64) -> Result<Self, KmerLengthError> {
        if k <= 0 {
            return Err(KmerLengthError { k });
        }
        // Positive lengths beyond the address space can never fit a window.
        let len = usize::try_from(k).unwrap_or(usize::MAX);
        NonZeroUsize::new(len)
            .map(Self)
            .ok_or(KmerLengthError { k })
    }

    /// Returns the length as a `usize`.
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for KmerLength {
    type Error = KmerLengthError;

    fn try_from(k: i64) -> Result<Self, Self::Error> {
        Self::new(k)
    }
}

impl fmt::Display for KmerLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A nucleotide from the `{A, C, G, T}` alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// Parses a byte, accepting soft-masked (lowercase) bases.
    pub(crate) const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            b'T' | b't' => Some(Self::T),
            _ => None,
        }
    }

    pub(crate) const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::C => Self::G,
            Self::G => Self::C,
            Self::T => Self::A,
        }
    }

    pub(crate) const fn as_u8(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }
}

/// An uppercase k-mer made only of `A`, `C`, `G` and `T`.
///
/// Ordering is byte-wise lexicographic, which for this alphabet matches
/// ordinary string ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kmer(Bytes);

impl Kmer {
    /// Validates and uppercases a window of a sequence.
    ///
    /// The whole window is rejected if any byte falls outside the alphabet;
    /// the error reports the first offending byte, offset within `sub`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBaseError`] for a non-`ACGT` byte.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kcounter::kmer::Kmer;
    ///
    /// assert_eq!(Kmer::from_sub(b"gatTACA")?.as_str(), "GATTACA");
    /// assert!(Kmer::from_sub(b"GANTACA").is_err());
    /// # Ok::<(), kcounter::error::InvalidBaseError>(())
    /// ```
    pub fn from_sub(sub: &[u8]) -> Result<Self, InvalidBaseError> {
        sub.iter()
            .enumerate()
            .map(|(position, &byte)| {
                Base::from_byte(byte)
                    .map(Base::as_u8)
                    .ok_or(InvalidBaseError {
                        base: byte,
                        position,
                    })
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(|bytes| Self(Bytes::from(bytes)))
    }

    /// Returns the reverse complement: each base complemented (`A<->T`,
    /// `C<->G`), in reverse order.
    ///
    /// ```rust
    /// use kcounter::kmer::Kmer;
    ///
    /// let kmer = Kmer::from_sub(b"AAC")?;
    /// assert_eq!(kmer.reverse_complement().as_str(), "GTT");
    /// # Ok::<(), kcounter::error::InvalidBaseError>(())
    /// ```
    #[must_use]
    pub fn reverse_complement(&self) -> Self {
        Self(
            self.0
                .iter()
                .rev()
                .filter_map(|&byte| Base::from_byte(byte))
                .map(|base| base.complement().as_u8())
                .collect(),
        )
    }

    /// Returns the lexicographically smaller of this k-mer and its reverse
    /// complement. Palindromic k-mers are their own canonical form.
    ///
    /// ```rust
    /// use kcounter::kmer::Kmer;
    ///
    /// assert_eq!(Kmer::from_sub(b"TTC")?.canonical().as_str(), "GAA");
    /// assert_eq!(Kmer::from_sub(b"GAA")?.canonical().as_str(), "GAA");
    /// assert_eq!(Kmer::from_sub(b"ACGT")?.canonical().as_str(), "ACGT");
    /// # Ok::<(), kcounter::error::InvalidBaseError>(())
    /// ```
    #[must_use]
    pub fn canonical(self) -> Self {
        let reverse_complement = self.reverse_complement();
        if reverse_complement < self {
            reverse_complement
        } else {
            self
        }
    }

    /// The key this k-mer is counted under: canonical or as found.
    #[must_use]
    pub fn into_key(self, canonical: bool) -> Self {
        if canonical {
            self.canonical()
        } else {
            self
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Kmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Kmer> for String {
    fn from(kmer: Kmer) -> Self {
        kmer.as_str().to_owned()
    }
}
