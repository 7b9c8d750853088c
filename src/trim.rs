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

use crate::series::read_samples;
use crate::Error;

use log::debug;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Copies a timing CSV to `output` with its single largest outlier removed:
/// the sample with the maximum duration, ties broken by first occurrence in
/// file order. Remaining samples are written sorted ascending by bound, then
/// duration. A zero- or one-line input produces an empty output file.
///
/// The removal keys on duration alone. A whole-line numeric sort would let a
/// large bound outrank a large duration, which is not what "largest outlier"
/// means for a timing benchmark.
pub fn trim_outlier(input: &Path, output: &Path) -> Result<(), Error> {
    let mut samples = read_samples(input)?;

    let mut largest: Option<usize> = None;
    for (index, sample) in samples.iter().enumerate() {
        if largest.map_or(true, |i| sample.duration > samples[i].duration) {
            largest = Some(index);
        }
    }
    if let Some(index) = largest {
        let removed = samples.remove(index);
        debug!(
            "removed outlier {},{} from {}",
            removed.bound,
            removed.duration,
            input.display()
        );
    }

    samples.sort_by_key(|sample| (sample.bound, sample.duration));

    let file = File::create(output).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    for sample in &samples {
        writeln!(writer, "{},{}", sample.bound, sample.duration).map_err(|source| {
            Error::Write {
                path: output.to_path_buf(),
                source,
            }
        })?;
    }
    writer.flush().map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(())
}
