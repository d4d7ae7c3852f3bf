pub mod csv;
pub mod sample;
pub mod source;

pub use csv::{parse_record, CsvSource, MAX_INPUT_SIZE};
pub use sample::{xor, Sample};
pub use source::{SampleIter, SampleSource};
