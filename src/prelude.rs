pub use crate::data::{Config, DataReader, Error};
pub use crate::repository::{Repository, Station, TrainLine, TrainService};
pub use crate::shared::{Distance, Identifiable, Time};
