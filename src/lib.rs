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

//! Renders comparison charts from the timing measurements produced by an
//! ambiguity-analysis benchmark. Two CSV series (approximate and exact
//! analysis) are loaded, the largest outlier is trimmed from the exact
//! series, and two overlaid line charts are written as PNGs.

mod chart;
pub mod logger;
mod series;
mod trim;

pub use crate::chart::plot_comparison;
pub use crate::series::{load_series, TimingSample};
pub use crate::trim::trim_outlier;

use log::{debug, info};
use thiserror::Error;

use std::io;
use std::path::PathBuf;

pub const APPROX_TIMES: &str = "approx_times.csv";
pub const EXACT_TIMES: &str = "exact_times.csv";
pub const EXACT_TIMES_WITHOUT_OUTLIER: &str = "exact_times_without_outlier.csv";

pub const COMPARISON: &str = "comparison.png";
pub const COMPARISON_WITHOUT_OUTLIER: &str = "comparison_without_outlier.png";

const X_DESC: &str = "Max counter upper bound";
const Y_DESC: &str = "Time taken to determine ambiguity (nanoseconds)";

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("{}:{line}: malformed sample {content:?}: expected \"bound,duration\" as decimal integers", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        content: String,
    },
    #[error("chart rendering failed: {0}")]
    Chart(String),
}

/// Runs the full trim, load, render sequence against the fixed filenames in
/// the current working directory. Any failure aborts before a chart is
/// produced, so a partial comparison never reaches disk.
pub fn run() -> Result<(), Error> {
    info!("trimming outlier from {}", EXACT_TIMES);
    trim_outlier(EXACT_TIMES.as_ref(), EXACT_TIMES_WITHOUT_OUTLIER.as_ref())?;

    let approx = load_series(APPROX_TIMES.as_ref())?;
    debug!("loaded {} samples from {}", approx.len(), APPROX_TIMES);
    let exact = load_series(EXACT_TIMES.as_ref())?;
    debug!("loaded {} samples from {}", exact.len(), EXACT_TIMES);
    let exact_trimmed = load_series(EXACT_TIMES_WITHOUT_OUTLIER.as_ref())?;
    debug!(
        "loaded {} samples from {}",
        exact_trimmed.len(),
        EXACT_TIMES_WITHOUT_OUTLIER
    );

    info!("rendering {}", COMPARISON);
    plot_comparison(
        COMPARISON,
        "Comparison of the time taken by each algorithm",
        X_DESC,
        Y_DESC,
        &[
            ("Approximate analysis", &approx),
            ("Exact analysis", &exact),
        ],
    )?;

    info!("rendering {}", COMPARISON_WITHOUT_OUTLIER);
    plot_comparison(
        COMPARISON_WITHOUT_OUTLIER,
        "Comparison of the time taken by each algorithm (with the outlier removed)",
        X_DESC,
        Y_DESC,
        &[
            ("Approximate analysis", &approx),
            ("Exact analysis (without outlier)", &exact_trimmed),
        ],
    )?;

    Ok(())
}
