//! Wellington regional train catalog.
//!
//! Loads station, line and service data from flat `.data` files into a
//! [`Repository`](repository::Repository) and answers read-only questions about
//! which lines serve which stations.
//!
//! ```no_run
//! use wellington::prelude::*;
//!
//! let data = DataReader::new(Config::default()).from_dir("data");
//! let repository = Repository::new().load_data(data)?;
//! for line in repository.lines_by_station_name("Petone").unwrap_or_default() {
//!     println!("{line}");
//! }
//! # Ok::<(), wellington::data::Error>(())
//! ```

pub mod data;
pub mod prelude;
pub mod repository;
pub mod shared;
