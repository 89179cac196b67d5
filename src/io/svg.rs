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
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{geometry::Point2, operations::triangulation::Delaunay};

/// Drawing area, in user units, excluding the margin.
const CANVAS: f64 = 512.0;
const MARGIN: f64 = 16.0;

/// Write the triangulation as SVG.
/// Format:
///   one <polygon> per lower hull face, corners in hull order
///   one <circle> per input point
/// The y axis points up; the drawing is scaled uniformly to the canvas.
pub fn write_svg<W: Write>(out: W, dt: &Delaunay) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    let frame = Frame::fit(&dt.points);
    let size = CANVAS + 2.0 * MARGIN;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    )?;

    writeln!(out, r#"  <g fill="none" stroke="black" stroke-width="1">"#)?;
    for t in dt.triangles() {
        let corners: Vec<String> = dt
            .triangle_points(t)
            .iter()
            .map(|p| {
                let (x, y) = frame.map(p);
                format!("{x:.2},{y:.2}")
            })
            .collect();
        writeln!(out, r#"    <polygon points="{}"/>"#, corners.join(" "))?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, r#"  <g fill="red">"#)?;
    for p in &dt.points {
        let (x, y) = frame.map(p);
        writeln!(out, r#"    <circle cx="{x:.2}" cy="{y:.2}" r="2"/>"#)?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, "</svg>")?;
    out.flush()
}

pub fn write_svg_file<P: AsRef<Path>>(path: P, dt: &Delaunay) -> io::Result<()> {
    write_svg(File::create(path)?, dt)
}

struct Frame {
    min_x: f64,
    max_y: f64,
    scale: f64,
}

impl Frame {
    fn fit(points: &[Point2]) -> Self {
        let xs = points.iter().map(|p| p.x);
        let ys = points.iter().map(|p| p.y);
        let (min_x, max_x) = (xs.clone().min().unwrap_or(0), xs.max().unwrap_or(0));
        let (min_y, max_y) = (ys.clone().min().unwrap_or(0), ys.max().unwrap_or(0));

        let span = (max_x - min_x).max(max_y - min_y).max(1) as f64;
        Self {
            min_x: min_x as f64,
            max_y: max_y as f64,
            scale: CANVAS / span,
        }
    }

    fn map(&self, p: &Point2) -> (f64, f64) {
        (
            MARGIN + (p.x as f64 - self.min_x) * self.scale,
            MARGIN + (self.max_y - p.y as f64) * self.scale,
        )
    }
}
