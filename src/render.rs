//! Result-consumer collaborators: SVG scatter rendering.
//!
//! The search itself knows nothing about output. These helpers take a solved
//! instance (the full point set plus the chosen centers) and build a
//! standalone SVG string the caller can write wherever it likes: planets as
//! faint dots, terminal planets as red markers.
//!
//! Layout follows the instance geometry: a square viewport spanning from 1%
//! below the data up to the largest coordinate, so the origin corner stays
//! visible even when every coordinate is positive.

use std::fmt::Write;

use crate::error::{Error, Result};

/// Planet marker fill.
const POINT_COLOR: &str = "#1f77b4";
/// Terminal-planet marker fill.
const CENTER_COLOR: &str = "#ff0000";

/// Render a 2D instance as an SVG scatter plot with `size`-pixel sides.
///
/// Every point and center must have dimensionality 2, otherwise
/// [`Error::DimensionMismatch`]. An empty point set is [`Error::EmptyInput`].
pub fn scatter_svg_2d(points: &[Vec<f32>], centers: &[Vec<f32>], size: u32) -> Result<String> {
    check_dimension(points, centers, 2)?;
    let project = |p: &Vec<f32>| (p[0], p[1]);
    let proj_points: Vec<(f32, f32)> = points.iter().map(project).collect();
    let proj_centers: Vec<(f32, f32)> = centers.iter().map(project).collect();
    Ok(svg_scatter(&proj_points, &proj_centers, size))
}

/// Render a 3D instance as an SVG scatter plot through a fixed isometric
/// projection.
///
/// Every point and center must have dimensionality 3, otherwise
/// [`Error::DimensionMismatch`]. An empty point set is [`Error::EmptyInput`].
pub fn scatter_svg_3d(points: &[Vec<f32>], centers: &[Vec<f32>], size: u32) -> Result<String> {
    check_dimension(points, centers, 3)?;
    // Isometric: x and y recede along the two diagonals, z points up.
    let project = |p: &Vec<f32>| {
        let (x, y, z) = (p[0], p[1], p[2]);
        ((x - y) * 0.866_025_4, (x + y) * 0.5 - z)
    };
    let proj_points: Vec<(f32, f32)> = points.iter().map(project).collect();
    let proj_centers: Vec<(f32, f32)> = centers.iter().map(project).collect();
    Ok(svg_scatter(&proj_points, &proj_centers, size))
}

fn check_dimension(points: &[Vec<f32>], centers: &[Vec<f32>], dim: usize) -> Result<()> {
    if points.is_empty() {
        return Err(Error::EmptyInput);
    }
    if let Some(p) = points.iter().chain(centers.iter()).find(|p| p.len() != dim) {
        return Err(Error::DimensionMismatch {
            expected: dim,
            found: p.len(),
        });
    }
    Ok(())
}

fn svg_scatter(points: &[(f32, f32)], centers: &[(f32, f32)], size: u32) -> String {
    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for &(x, y) in points.iter().chain(centers.iter()) {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    // Square frame over the larger axis span, padded 1% on each side. A
    // degenerate instance (all markers coincident) gets a unit frame.
    let mut span = (max_x - min_x).max(max_y - min_y);
    if span <= 0.0 {
        span = 1.0;
    }
    let pad = 0.01 * span;
    let left_x = min_x - pad;
    let left_y = min_y - pad;
    let scale = size as f32 / (span + 2.0 * pad);

    let s = size as f32;
    let to_px = |x: f32, y: f32| {
        let px = (x - left_x) * scale;
        // SVG y grows downward.
        let py = s - (y - left_y) * scale;
        (px, py)
    };

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    let _ = writeln!(svg, r#"<rect width="{size}" height="{size}" fill="white"/>"#);
    for &(x, y) in points {
        let (px, py) = to_px(x, y);
        let _ = writeln!(
            svg,
            r#"<circle cx="{px:.2}" cy="{py:.2}" r="2" fill="{POINT_COLOR}" fill-opacity="0.2"/>"#
        );
    }
    for &(x, y) in centers {
        let (px, py) = to_px(x, y);
        let _ = writeln!(
            svg,
            r#"<circle cx="{px:.2}" cy="{py:.2}" r="5" fill="{CENTER_COLOR}" fill-opacity="0.5"/>"#
        );
    }
    svg.push_str("</svg>\n");
    svg
}
