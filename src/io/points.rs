// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use rand::Rng;

use crate::{error::ReadError, geometry::Point2};

/// Read planar points, one per line.
/// Format:
///   x<TAB>y
///   ...
/// Both fields are integers separated by exactly one tab, with no padding.
/// Blank lines are skipped and a trailing `\r` is tolerated. There is no
/// leading count.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point2>, ReadError> {
    let mut points = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        points.push(parse_line(line, i + 1)?);
    }

    Ok(points)
}

pub fn parse_points(text: &str) -> Result<Vec<Point2>, ReadError> {
    read_points(text.as_bytes())
}

pub fn read_points_file<P: AsRef<Path>>(path: P) -> Result<Vec<Point2>, ReadError> {
    let file = File::open(path)?;
    read_points(BufReader::new(file))
}

/// Writes points in the format [`read_points`] accepts.
pub fn write_points<W: Write>(mut out: W, points: &[Point2]) -> std::io::Result<()> {
    for p in points {
        writeln!(out, "{}\t{}", p.x, p.y)?;
    }
    out.flush()
}

/// `count` points with both coordinates uniform in `-extent..=extent`.
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, count: usize, extent: i64) -> Vec<Point2> {
    let extent = extent.abs();
    (0..count)
        .map(|_| {
            Point2::new(
                rng.random_range(-extent..=extent),
                rng.random_range(-extent..=extent),
            )
        })
        .collect()
}

fn parse_line(line: &str, number: usize) -> Result<Point2, ReadError> {
    let fields: Vec<&str> = line.split('\t').collect();
    let [x, y] = fields.as_slice() else {
        return Err(ReadError::Parse {
            line: number,
            message: format!("expected 2 tab-separated fields, got {}", fields.len()),
        });
    };

    let coord = |field: &str, axis: &str| {
        field.parse::<i64>().map_err(|_| ReadError::Parse {
            line: number,
            message: format!("bad {axis} coordinate '{field}'"),
        })
    };

    Ok(Point2::new(coord(*x, "x")?, coord(*y, "y")?))
}
