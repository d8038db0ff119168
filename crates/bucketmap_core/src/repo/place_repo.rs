//! Place persistence contracts and JSON document implementation.
//!
//! # Responsibility
//! - Provide load/save APIs over the saved-places document.
//! - Keep JSON and filesystem details inside the persistence boundary.
//!
//! # Invariants
//! - `save` never leaves a partially written document visible: contents
//!   are staged in a temporary file and renamed over the target.
//! - `load` returns the fully decoded list or an error, never a partially
//!   decoded one.

use crate::model::place::Place;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Fixed document name inside the host-provided data directory.
pub const SAVED_PLACES_FILE_NAME: &str = "saved_places.json";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for place persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Io(io::Error),
    Format(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Format(err) => write!(f, "invalid saved-places document: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Format(err) => Some(err),
        }
    }
}

impl From<io::Error> for RepoError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Format(value)
    }
}

/// Repository interface for loading and saving the place list.
pub trait PlaceRepository {
    fn load(&self) -> RepoResult<Vec<Place>>;
    fn save(&self, places: &[Place]) -> RepoResult<()>;
}

/// JSON-document repository over a single file in the host data directory.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository rooted at the host-provided data directory.
    ///
    /// The host passes its application-private documents directory; the
    /// document name inside it is fixed.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SAVED_PLACES_FILE_NAME),
        }
    }

    /// Full path of the saved-places document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlaceRepository for JsonFileRepository {
    fn load(&self) -> RepoResult<Vec<Place>> {
        let file = File::open(&self.path)?;
        let places = serde_json::from_reader(BufReader::new(file))?;
        Ok(places)
    }

    fn save(&self, places: &[Place]) -> RepoResult<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        // The staged file must live in the destination directory: the
        // final rename is only atomic within one filesystem.
        let mut staged = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut staged, places)?;
        staged.flush()?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}
