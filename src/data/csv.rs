//! Branch-trace CSV records.
//!
//! One record per line: `<target>,<history>` where `target` is `0` or `1` and
//! `history` is an unsigned 64-bit integer whose lowest `input_size` bits
//! (bit 0 first) form the input vector. Blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::data::{Sample, SampleIter, SampleSource};
use crate::error::{MlpError, Result};

/// Widest history a record can carry.
pub const MAX_INPUT_SIZE: usize = 64;

/// Parses one non-blank record. Errors carry `line_number` (1-based).
///
/// `input_size` must lie in 1..=`MAX_INPUT_SIZE`.
pub fn parse_record(line: &str, input_size: usize, line_number: usize) -> Result<Sample> {
    check_input_size(input_size)?;
    let format_err = |message: String| MlpError::DataFormat { line: line_number, message };

    let (target_str, history_str) = line
        .split_once(',')
        .ok_or_else(|| format_err(format!("expected `<target>,<history>`, got '{line}'")))?;

    let target: f32 = target_str
        .trim()
        .parse()
        .map_err(|_| format_err(format!("target '{}' is not a number", target_str.trim())))?;
    if target != 0.0 && target != 1.0 {
        return Err(format_err(format!("target must be 0 or 1, got '{}'", target_str.trim())));
    }

    let history: u64 = history_str.trim().parse().map_err(|_| {
        format_err(format!(
            "history '{}' is not an unsigned 64-bit integer",
            history_str.trim()
        ))
    })?;

    Ok(Sample::from_bits(history, input_size, target))
}

fn check_input_size(input_size: usize) -> Result<()> {
    if input_size == 0 || input_size > MAX_INPUT_SIZE {
        return Err(MlpError::InvalidConfig(format!(
            "input_size must be between 1 and {MAX_INPUT_SIZE}, got {input_size}"
        )));
    }
    Ok(())
}

/// Streams samples from a branch-trace CSV file, re-reading it on every pass.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    input_size: usize,
}

impl CsvSource {
    pub fn new<P: AsRef<Path>>(path: P, input_size: usize) -> Result<CsvSource> {
        check_input_size(input_size)?;
        Ok(CsvSource { path: path.as_ref().to_owned(), input_size })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SampleSource for CsvSource {
    fn samples(&self) -> Result<SampleIter<'_>> {
        let reader = BufReader::new(File::open(&self.path)?);
        let input_size = self.input_size;

        let iter = reader
            .lines()
            .enumerate()
            .filter_map(move |(i, line)| match line {
                Err(e) => Some(Err(MlpError::Io(e))),
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => Some(parse_record(&line, input_size, i + 1)),
            });
        Ok(Box::new(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_target_and_low_bits() {
        let s = parse_record("1,6", 4, 1).unwrap();
        assert_eq!(s.target, 1.0);
        assert_eq!(s.input, vec![0.0, 1.0, 1.0, 0.0]);

        let s = parse_record(" 0 , 18446744073709551615 ", 2, 1).unwrap();
        assert_eq!(s.target, 0.0);
        assert_eq!(s.input, vec![1.0, 1.0]);
    }

    #[test]
    fn rejects_malformed_records() {
        for line in ["1", "x,5", "2,5", "0.5,5", "1,-3", "1,abc", "1,18446744073709551616"] {
            let err = parse_record(line, 4, 7).unwrap_err();
            assert!(
                matches!(err, MlpError::DataFormat { line: 7, .. }),
                "'{line}' gave {err:?}"
            );
        }
    }

    #[test]
    fn record_width_is_bounded() {
        assert!(matches!(parse_record("1,5", 65, 1), Err(MlpError::InvalidConfig(_))));
        assert!(matches!(parse_record("1,5", 0, 1), Err(MlpError::InvalidConfig(_))));
        let s = parse_record("1,5", 64, 1).unwrap();
        assert_eq!(s.input.len(), 64);
        assert_eq!(&s.input[..3], &[1.0, 0.0, 1.0]);
    }

    #[test]
    fn rejects_out_of_range_width() {
        assert!(CsvSource::new("x.csv", 0).is_err());
        assert!(CsvSource::new("x.csv", 65).is_err());
        assert_eq!(CsvSource::new("x.csv", 64).unwrap().path(), Path::new("x.csv"));
    }

    #[test]
    fn streams_file_and_restarts_each_pass() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1,1\n\n0,2\n   \n1,3").unwrap();
        let source = CsvSource::new(file.path(), 2).unwrap();

        let first: Vec<Sample> = source.samples().unwrap().collect::<Result<_>>().unwrap();
        let second: Vec<Sample> = source.samples().unwrap().collect::<Result<_>>().unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
        assert_eq!(first[1], Sample::new(vec![0.0, 1.0], 0.0));
    }

    #[test]
    fn error_reports_physical_line_number() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1,1\n\n1,oops").unwrap();
        let source = CsvSource::new(file.path(), 2).unwrap();
        let results: Vec<Result<Sample>> = source.samples().unwrap().collect();
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(MlpError::DataFormat { line: 3, .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = CsvSource::new("/definitely/not/here.csv", 2).unwrap();
        assert!(matches!(source.samples(), Err(MlpError::Io(_))));
    }
}
