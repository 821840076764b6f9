//! Where sequences come from: a file, or standard input.

use std::{
    fmt,
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use crate::error::KcounterError;

/// Input source for k-mer counting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    /// A file on disk.
    File(PathBuf),
    /// Standard input.
    #[default]
    Stdin,
}

impl Input {
    /// `-` means stdin; anything else is a file path.
    ///
    /// ```rust
    /// use kcounter::input::Input;
    /// use std::path::Path;
    ///
    /// assert_eq!(Input::from_path(Path::new("-")), Input::Stdin);
    /// assert_eq!(Input::from_option(None), Input::Stdin);
    /// assert!(matches!(Input::from_path(Path::new("genome.fa")), Input::File(_)));
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// A missing path also means stdin.
    #[must_use]
    pub fn from_option(path: Option<&Path>) -> Self {
        path.map_or(Self::Stdin, Self::from_path)
    }

    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin => None,
        }
    }

    /// Opens the source for reading. Files ending in `.gz` are decompressed
    /// when the `gzip` feature is enabled.
    pub(crate) fn open(&self) -> Result<Box<dyn Read>, KcounterError> {
        let Self::File(path) = self else {
            return Ok(Box::new(io::stdin().lock()));
        };

        let file = File::open(path).map_err(|source| KcounterError::SequenceRead {
            source,
            path: path.clone(),
        })?;

        #[cfg(feature = "gzip")]
        {
            if path.extension().is_some_and(|ext| ext == "gz") {
                return Ok(Box::new(GzipSource::new(file, path.clone())));
            }
        }

        Ok(Box::new(file))
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Gzip decoder that wraps decompression failures in
/// [`KcounterError::GzipError`] carrying the file path.
#[cfg(feature = "gzip")]
struct GzipSource {
    decoder: flate2::read::MultiGzDecoder<File>,
    path: PathBuf,
}

#[cfg(feature = "gzip")]
impl GzipSource {
    fn new(file: File, path: PathBuf) -> Self {
        Self {
            decoder: flate2::read::MultiGzDecoder::new(file),
            path,
        }
    }
}

#[cfg(feature = "gzip")]
impl Read for GzipSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.decoder.read(buf).map_err(|source| {
            io::Error::new(
                source.kind(),
                KcounterError::GzipError {
                    source,
                    path: self.path.clone(),
                },
            )
        })
    }
}
