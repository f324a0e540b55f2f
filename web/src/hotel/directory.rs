use std::collections::HashSet;
use std::path::Path;

use shared_types::HotelRecord;
use thiserror::Error;

use super::data::builtin_hotels;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read hotel data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse hotel data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate hotel id `{0}`")]
    DuplicateId(String),
    #[error("hotel record at index {0} has an empty id")]
    EmptyId(usize),
    #[error("hotel directory already initialized")]
    AlreadyInitialized,
}

/// Read-only source of hotel records, looked up by identifier.
pub trait HotelDirectory: Send + Sync {
    fn find_by_id(&self, id: &str) -> Option<HotelRecord>;

    fn all(&self) -> Vec<HotelRecord>;
}

/// Small fixed reference set held in memory. Lookups scan it linearly.
#[derive(Debug, Clone, Default)]
pub struct StaticHotelDirectory {
    hotels: Vec<HotelRecord>,
}

impl StaticHotelDirectory {
    pub fn new(hotels: Vec<HotelRecord>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for (index, hotel) in hotels.iter().enumerate() {
            if hotel.id.is_empty() {
                return Err(DirectoryError::EmptyId(index));
            }
            if !seen.insert(hotel.id.as_str()) {
                return Err(DirectoryError::DuplicateId(hotel.id.clone()));
            }
        }
        Ok(Self { hotels })
    }

    pub fn builtin() -> Self {
        Self {
            hotels: builtin_hotels(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DirectoryError> {
        let hotels: Vec<HotelRecord> = serde_json::from_str(json)?;
        Self::new(hotels)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

impl HotelDirectory for StaticHotelDirectory {
    fn find_by_id(&self, id: &str) -> Option<HotelRecord> {
        self.hotels.iter().find(|hotel| hotel.id == id).cloned()
    }

    fn all(&self) -> Vec<HotelRecord> {
        self.hotels.clone()
    }
}

#[cfg(feature = "ssr")]
static DIRECTORY: std::sync::OnceLock<StaticHotelDirectory> = std::sync::OnceLock::new();

/// Loads the process-wide directory from `path`, or the built-in set when
/// no path is given. May only be called once.
#[cfg(feature = "ssr")]
pub fn init_directory(path: Option<&Path>) -> Result<usize, DirectoryError> {
    let directory = match path {
        Some(path) => StaticHotelDirectory::load(path)?,
        None => StaticHotelDirectory::builtin(),
    };
    let count = directory.len();

    DIRECTORY
        .set(directory)
        .map_err(|_| DirectoryError::AlreadyInitialized)?;

    Ok(count)
}

#[cfg(feature = "ssr")]
pub fn directory() -> &'static StaticHotelDirectory {
    DIRECTORY.get_or_init(StaticHotelDirectory::builtin)
}
