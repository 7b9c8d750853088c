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

use crate::series::TimingSample;
use crate::Error;

use plotters::prelude::*;

use std::ffi::OsStr;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            (($colour & 0x0000FF) >> 0) as u8,
        )
    };
}

const COLOURS: &[RGBColor] = &[
    hexcolour!(0xAA0000),
    hexcolour!(0x0000FF),
    hexcolour!(0x888888),
    hexcolour!(0xDDCC77),
    hexcolour!(0x999933),
    hexcolour!(0x332288),
];

const SIZE: (u32, u32) = (1280, 720);

/// Draws one 2-D line chart overlaying each named series as
/// (bound, duration) points and writes it to `filename` as a PNG. An empty
/// series contributes an empty curve; a chart with no points at all still
/// renders with a unit axis range. Purely presentational: the samples are
/// drawn exactly as given.
pub fn plot_comparison(
    filename: impl AsRef<OsStr>,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    series: &[(&str, &[TimingSample])],
) -> Result<(), Error> {
    let samples = || series.iter().flat_map(|(_, samples)| samples.iter());
    let x_max = samples().map(|s| s.bound).max().unwrap_or(1).max(1) as f64;
    let y_max = samples().map(|s| s.duration).max().unwrap_or(1).max(1) as f64;

    let root = BitMapBackend::new(filename.as_ref(), SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("Arial", 30))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 100)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_ranged(0.0..x_max * 1.05, 0.0..y_max * 1.05)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_label_style(("Arial", 20))
        .y_label_style(("Arial", 20))
        .draw()
        .map_err(render_error)?;

    for (index, (name, samples)) in series.iter().enumerate() {
        let points = samples
            .iter()
            .map(|s| (s.bound as f64, s.duration as f64));
        chart
            .draw_series(LineSeries::new(
                points,
                COLOURS[index % COLOURS.len()].stroke_width(2),
            ))
            .map_err(render_error)?
            .label(*name)
            .legend(move |(x, y)| {
                Path::new(vec![(x, y), (x + 20, y)], &COLOURS[index % COLOURS.len()])
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.filled())
        .draw()
        .map_err(render_error)?;

    Ok(())
}

fn render_error(error: impl std::fmt::Display) -> Error {
    Error::Chart(error.to_string())
}
