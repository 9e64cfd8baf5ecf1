mod error;
pub mod parser;
pub mod reader;

pub use error::SensorError;
pub use parser::{ReadingParser, Sample};
pub use reader::read_sensor;
