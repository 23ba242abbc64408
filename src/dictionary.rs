//! Common password dictionary
//!
//! Handles loading the list of known-weak passwords and querying it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Environment variable overriding the default dictionary location.
pub const DICTIONARY_PATH_ENV: &str = "PWD_DICTIONARY_PATH";

const DEFAULT_DICTIONARY_PATH: &str = "./assets/common-passwords.txt";

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    Read(#[from] std::io::Error),
}

/// Returns the dictionary file path.
///
/// Priority:
/// 1. Environment variable `PWD_DICTIONARY_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn dictionary_path() -> PathBuf {
    std::env::var(DICTIONARY_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DICTIONARY_PATH))
}

/// A list of known-weak passwords.
///
/// Entries are kept in insertion order. The ascending order used for lookups
/// is computed once, on the first [`contains`](Self::contains) or an explicit
/// [`sort`](Self::sort), and never changes afterwards. The computation is
/// guarded by a [`OnceLock`], so a shared `&Dictionary` can be queried from
/// several threads.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: Vec<String>,
    order: OnceLock<Vec<usize>>,
}

impl Dictionary {
    /// Builds a dictionary from entries in their original order.
    ///
    /// An empty dictionary is valid and matches nothing.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            order: OnceLock::new(),
        }
    }

    /// Reads one entry per line.
    ///
    /// Lines are taken verbatim apart from the `\n` / `\r\n` terminator.
    /// Bytes that are not valid UTF-8 are decoded lossily.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut entries = Vec::new();
        for line in reader.split(b'\n') {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            entries.push(String::from_utf8_lossy(&line).into_owned());
        }
        Ok(Self::new(entries))
    }

    /// Loads the dictionary from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    ///
    /// An empty file is not an error.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: FileNotFound {:?}", path);
            return Err(DictionaryError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let dictionary = Self::from_reader(BufReader::new(file))?;

        #[cfg(feature = "tracing")]
        {
            if dictionary.is_empty() {
                tracing::warn!("Dictionary {:?} is empty, no password will be rejected as common", path);
            } else {
                tracing::info!("Dictionary loaded: {} passwords from {:?}", dictionary.len(), path);
            }
        }

        Ok(dictionary)
    }

    /// Loads the dictionary from [`dictionary_path`].
    pub fn from_env() -> Result<Self, DictionaryError> {
        Self::from_path(dictionary_path())
    }

    /// Forces the one-time sort. Later calls are no-ops.
    pub fn sort(&self) -> &Self {
        self.sorted_order();
        self
    }

    pub fn is_sorted(&self) -> bool {
        self.order.get().is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in their original order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns `true` if `candidate` is exactly one of the entries.
    pub fn contains(&self, candidate: &str) -> bool {
        let order = self.sorted_order();
        // insertion point: first entry not less than the candidate
        let idx = order.partition_point(|&i| self.entries[i].as_str() < candidate);
        order
            .get(idx)
            .is_some_and(|&i| self.entries[i] == candidate)
    }

    fn sorted_order(&self) -> &[usize] {
        self.order.get_or_init(|| {
            let mut order: Vec<usize> = (0..self.entries.len()).collect();
            order.sort_by(|&a, &b| self.entries[a].cmp(&self.entries[b]));

            #[cfg(feature = "tracing")]
            tracing::trace!("Dictionary sorted: {} entries", order.len());

            order
        })
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
