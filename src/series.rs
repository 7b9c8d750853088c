//  Copyright 2021 Twitter, Inc
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

use crate::Error;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One benchmark run: the counter upper bound used and the nanoseconds the
/// algorithm took to decide ambiguity for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimingSample {
    pub bound: u64,
    pub duration: u64,
}

/// Loads a two-column CSV (no header) of `bound,duration` samples and
/// returns them sorted ascending by bound. Duplicate bounds are kept and
/// keep their relative order from the file (the sort is stable). Any
/// malformed line fails the whole load; silently skipping lines would mask
/// corrupt benchmark output.
pub fn load_series(path: &Path) -> Result<Vec<TimingSample>, Error> {
    let mut samples = read_samples(path)?;
    samples.sort_by_key(|sample| sample.bound);
    Ok(samples)
}

/// Reads samples in file order, without sorting.
pub(crate) fn read_samples(path: &Path) -> Result<Vec<TimingSample>, Error> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut samples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        samples.push(parse_line(path, index + 1, &line)?);
    }

    Ok(samples)
}

fn parse_line(path: &Path, number: usize, line: &str) -> Result<TimingSample, Error> {
    let malformed = || Error::MalformedLine {
        path: path.to_path_buf(),
        line: number,
        content: line.to_owned(),
    };

    let mut fields = line.split(',');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(bound), Some(duration), None) => {
            let bound = bound.trim().parse().map_err(|_| malformed())?;
            let duration = duration.trim().parse().map_err(|_| malformed())?;
            Ok(TimingSample { bound, duration })
        }
        _ => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_sorts_by_bound() {
        let file = write_csv("20,100\n10,500\n30,999999\n");
        let series = load_series(file.path()).unwrap();
        assert_eq!(
            series,
            vec![
                TimingSample {
                    bound: 10,
                    duration: 500
                },
                TimingSample {
                    bound: 20,
                    duration: 100
                },
                TimingSample {
                    bound: 30,
                    duration: 999999
                },
            ]
        );
    }

    #[test]
    fn load_preserves_line_count() {
        let file = write_csv("3,1\n1,2\n2,3\n1,4\n");
        let series = load_series(file.path()).unwrap();
        assert_eq!(series.len(), 4);
        for pair in series.windows(2) {
            assert!(pair[0].bound <= pair[1].bound);
        }
    }

    #[test]
    fn load_single_line() {
        let file = write_csv("5,42\n");
        let series = load_series(file.path()).unwrap();
        assert_eq!(
            series,
            vec![TimingSample {
                bound: 5,
                duration: 42
            }]
        );
    }

    #[test]
    fn load_empty_file() {
        let file = write_csv("");
        let series = load_series(file.path()).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn duplicate_bounds_keep_file_order() {
        let file = write_csv("5,2\n5,1\n");
        let series = load_series(file.path()).unwrap();
        assert_eq!(
            series,
            vec![
                TimingSample {
                    bound: 5,
                    duration: 2
                },
                TimingSample {
                    bound: 5,
                    duration: 1
                },
            ]
        );
    }

    #[test]
    fn malformed_field_names_the_line() {
        let file = write_csv("1,2\nabc,100\n");
        let error = load_series(file.path()).unwrap_err();
        match error {
            Error::MalformedLine { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "abc,100");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn wrong_column_count_is_malformed() {
        let file = write_csv("1,2,3\n");
        let error = load_series(file.path()).unwrap_err();
        match error {
            Error::MalformedLine { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn blank_line_is_malformed() {
        let file = write_csv("1,2\n\n3,4\n");
        let error = load_series(file.path()).unwrap_err();
        match error {
            Error::MalformedLine { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let error = load_series(Path::new("no_such_times.csv")).unwrap_err();
        match error {
            Error::Open { path, .. } => assert_eq!(path, Path::new("no_such_times.csv")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
