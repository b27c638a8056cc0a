use std::{
    collections::HashMap,
    fs::{self, File},
    io::{self, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;
use zip::ZipArchive;

mod config;
pub mod models;
pub(crate) mod tokens;
pub use config::*;
use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("{file}:{line}: {message}")]
    Malformed {
        file: String,
        line: usize,
        message: String,
    },
    #[error("Line {line} visits unknown station {station}")]
    UnknownStation { line: String, station: String },
    #[error("Station {0} is declared more than once")]
    DuplicateStation(String),
    #[error("Line {0} is declared more than once")]
    DuplicateLine(String),
}

impl Error {
    pub(crate) fn malformed(file: &str, line: usize, message: String) -> Self {
        Self::Malformed {
            file: file.to_string(),
            line,
            message,
        }
    }
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Directory(PathBuf),
    Zip(PathBuf),
    Memory(HashMap<String, String>),
}

/// Reads a data set from a directory, a zip archive or memory.
#[derive(Default)]
pub struct DataReader {
    config: Config,
    storage: StorageType,
}

impl DataReader {
    pub fn new(config: self::Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.storage = StorageType::Directory(path.into());
        self
    }

    pub fn from_zip<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.storage = StorageType::Zip(path.into());
        self
    }

    /// Reads the data set from a map of file name to file content.
    pub fn from_memory<I, K, V>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let files = files
            .into_iter()
            .map(|(name, content)| (name.into(), content.into()))
            .collect();
        self.storage = StorageType::Memory(files);
        self
    }

    /// Directories are read as is, anything else is opened as a zip archive.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        if path.is_dir() {
            self.from_dir(path)
        } else {
            self.from_zip(path)
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stream_stations<F>(&self, mut f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, RawStation)) -> Result<(), self::Error>,
    {
        let file_name = &self.config.stations_file_name;
        let content = self.read(file_name)?;
        parse_stations(file_name, &content)?
            .into_iter()
            .enumerate()
            .try_for_each(&mut f)
    }

    pub fn stream_lines<F>(&self, mut f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, String)) -> Result<(), self::Error>,
    {
        let content = self.read(&self.config.lines_file_name)?;
        parse_names(&content)
            .into_iter()
            .enumerate()
            .try_for_each(&mut f)
    }

    /// Streams the station names a line visits, in travel order.
    pub fn stream_line_stations<F>(&self, line_name: &str, mut f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, String)) -> Result<(), self::Error>,
    {
        let content = self.read(&self.config.line_stations_file_name(line_name))?;
        parse_names(&content)
            .into_iter()
            .enumerate()
            .try_for_each(&mut f)
    }

    pub fn stream_line_departures<F>(&self, line_name: &str, mut f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, RawDeparture)) -> Result<(), self::Error>,
    {
        let file_name = self.config.line_services_file_name(line_name);
        let content = self.read(&file_name)?;
        parse_departures(&file_name, &content)?
            .into_iter()
            .enumerate()
            .try_for_each(&mut f)
    }

    fn read(&self, file_name: &str) -> Result<String, self::Error> {
        match &self.storage {
            StorageType::None => Err(self::Error::FileNotFound(file_name.to_string())),
            StorageType::Directory(path) => read_from_dir(path, file_name),
            StorageType::Zip(path) => read_from_zip(path, file_name),
            StorageType::Memory(files) => files
                .get(file_name)
                .cloned()
                .ok_or_else(|| self::Error::FileNotFound(file_name.to_string())),
        }
    }
}

fn read_from_dir(dir: &Path, file_name: &str) -> Result<String, self::Error> {
    fs::read_to_string(dir.join(file_name)).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => self::Error::FileNotFound(file_name.to_string()),
        _ => err.into(),
    })
}

fn read_from_zip(zip_path: &Path, file_name: &str) -> Result<String, self::Error> {
    let zip_file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(zip_file)?;
    let index = archive
        .index_for_name(file_name)
        .ok_or_else(|| self::Error::FileNotFound(file_name.to_string()))?;
    let mut file = archive.by_index(index)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}
