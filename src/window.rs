//! Sliding-window scan over a sequence.
//!
//! [`Windows`] yields one [`Window`] per start position `0..=len - k`, each
//! already uppercased and classified. Validity is decided per window: a
//! window containing any byte outside `{A, C, G, T}` is invalid as a whole,
//! even where it overlaps valid neighbours.

use std::iter::FusedIterator;

use crate::{error::InvalidBaseError, kmer::Kmer, kmer::KmerLength};

/// A single length-k window of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Window {
    /// Every byte is in the alphabet.
    Valid(Kmer),
    /// At least one byte is outside the alphabet. `error.position` is the
    /// offset of the first such byte in the whole sequence.
    Invalid {
        /// Start of the window in the sequence.
        start: usize,
        error: InvalidBaseError,
    },
}

impl Window {
    /// Returns the k-mer of a valid window.
    pub fn into_kmer(self) -> Option<Kmer> {
        match self {
            Self::Valid(kmer) => Some(kmer),
            Self::Invalid { .. } => None,
        }
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Lazy iterator over every length-k window of a sequence.
///
/// Holds nothing but the borrowed sequence and the next start position, so
/// cloning it restarts the scan from the same point.
///
/// # Example
///
/// ```rust
/// use kcounter::kmer::KmerLength;
/// use kcounter::window::Windows;
///
/// let k = KmerLength::new(3)?;
/// let valid: Vec<String> = Windows::new(b"ACgNTT", k)
///     .filter_map(|w| w.into_kmer())
///     .map(String::from)
///     .collect();
///
/// // ACG is the only window without the N.
/// assert_eq!(valid, ["ACG"]);
/// # Ok::<(), kcounter::error::KmerLengthError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    seq: &'a [u8],
    k: usize,
    pos: usize,
}

impl<'a> Windows<'a> {
    pub const fn new(seq: &'a [u8], k: KmerLength) -> Self {
        Self {
            seq,
            k: k.get(),
            pos: 0,
        }
    }

    /// Iterator over the k-mers of valid windows only.
    pub fn kmers(self) -> impl Iterator<Item = Kmer> + 'a {
        self.filter_map(Window::into_kmer)
    }

    fn remaining(&self) -> usize {
        (self.seq.len() + 1)
            .saturating_sub(self.k)
            .saturating_sub(self.pos)
    }
}

impl Iterator for Windows<'_> {
    type Item = Window;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let start = self.pos;
        self.pos += 1;

        let window = match Kmer::from_sub(&self.seq[start..start + self.k]) {
            Ok(kmer) => Window::Valid(kmer),
            Err(error) => Window::Invalid {
                start,
                error: InvalidBaseError {
                    position: start + error.position,
                    ..error
                },
            },
        };
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Windows<'_> {}

impl FusedIterator for Windows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn k(k: i64) -> KmerLength {
        KmerLength::new(k).unwrap()
    }

    fn valid_kmers(seq: &[u8], len: i64) -> Vec<String> {
        Windows::new(seq, k(len)).kmers().map(String::from).collect()
    }

    #[test]
    fn yields_every_window_in_order() {
        assert_eq!(
            valid_kmers(b"TCATTCGATT", 3),
            ["TCA", "CAT", "ATT", "TTC", "TCG", "CGA", "GAT", "ATT"]
        );
    }

    #[test]
    fn window_count_is_len_minus_k_plus_one() {
        assert_eq!(Windows::new(b"TCATTCGATT", k(3)).len(), 8);
        assert_eq!(Windows::new(b"TCATTCGATT", k(10)).len(), 1);
        assert_eq!(Windows::new(b"TCATTCGATT", k(11)).len(), 0);
        assert_eq!(Windows::new(b"", k(1)).len(), 0);
    }

    #[test]
    fn k_larger_than_sequence_yields_nothing() {
        assert_eq!(Windows::new(b"ACGT", k(5)).next(), None);
        assert_eq!(Windows::new(b"ACGT", k(i64::MAX)).next(), None);
    }

    #[test]
    fn invalid_windows_are_tagged_with_absolute_position() {
        let windows: Vec<Window> = Windows::new(b"ACNT", k(2)).collect();
        assert_eq!(windows.len(), 3);
        assert!(windows[0].is_valid());
        assert_eq!(
            windows[1],
            Window::Invalid {
                start: 1,
                error: InvalidBaseError {
                    base: b'N',
                    position: 2
                }
            }
        );
        assert!(!windows[2].is_valid());
    }

    #[test]
    fn validity_is_decided_per_window() {
        // Only the windows overlapping the N are dropped.
        assert_eq!(
            valid_kmers(b"CAGNACATGGNTCACATYCT", 4),
            ["ACAT", "CATG", "ATGG", "TCAC", "CACA", "ACAT"]
        );
    }

    #[test]
    fn windows_are_uppercased() {
        assert_eq!(valid_kmers(b"tcAt", 2), ["TC", "CA", "AT"]);
    }

    #[test]
    fn non_ascii_bytes_invalidate_windows() {
        assert_eq!(valid_kmers("AéAC".as_bytes(), 2), ["AC"]);
    }

    #[test]
    fn clone_restarts_from_current_position() {
        let mut windows = Windows::new(b"ACGT", k(2));
        windows.next();
        let rest: Vec<Window> = windows.clone().collect();
        assert_eq!(rest, windows.collect::<Vec<_>>());
        assert_eq!(rest.len(), 2);
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut windows = Windows::new(b"AC", k(2));
        assert!(windows.next().is_some());
        assert!(windows.next().is_none());
        assert!(windows.next().is_none());
    }
}
