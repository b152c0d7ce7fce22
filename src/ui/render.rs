//! Chart rendering: connection topology to painted segments
//!
//! Each chart contributes a set of vertex-index pairs derived from its
//! connection mode. Pair endpoints resolve independently to pixels; an
//! endpoint is undefined when its index is out of range or the log-domain
//! mapping fails. One undefined endpoint degrades the segment to a point
//! at the defined endpoint, two undefined endpoints draw nothing.

use egui::{Painter, Stroke};

use crate::constants::chart::MIN_POINT_RADIUS;
use crate::coord::{Mapper, PixelPoint};
use crate::state::{Chart, ChartStore, ConnectMode};

/// Draw every chart in store order
pub fn draw_charts(painter: &Painter, mapper: &Mapper, charts: &ChartStore) {
    profiling::scope!("draw_charts");
    for (_, chart) in charts.iter() {
        draw_chart(painter, mapper, chart);
    }
}

fn draw_chart(painter: &Painter, mapper: &Mapper, chart: &Chart) {
    let stroke = Stroke::new(chart.width as f32, chart.color);
    let edges = chart.edges.as_deref().unwrap_or(&[]);
    for (i, j) in connection_pairs(chart.connect, chart.vertices.len(), edges) {
        draw_connection(painter, mapper, chart, stroke, i, j);
    }
}

/// Enumerate the vertex-index pairs a connection mode produces
///
/// Indices are not validated here; `Edges` pairs pass through as supplied
/// and out-of-range indices resolve to undefined endpoints later.
pub(crate) fn connection_pairs(
    mode: ConnectMode,
    vertex_count: usize,
    edges: &[(usize, usize)],
) -> Vec<(usize, usize)> {
    let n = vertex_count;
    match mode {
        ConnectMode::None => (0..n).map(|i| (i, i)).collect(),
        ConnectMode::Line => (1..n).map(|i| (i - 1, i)).collect(),
        ConnectMode::Cycle => {
            let mut pairs: Vec<(usize, usize)> = (1..n).map(|i| (i - 1, i)).collect();
            match n {
                0 => {}
                1 => pairs.push((0, 0)),
                _ => pairs.push((n - 1, 0)),
            }
            pairs
        }
        ConnectMode::Edges => edges.to_vec(),
        ConnectMode::Complete => (0..n)
            .flat_map(|i| (i..n).map(move |j| (i, j)))
            .collect(),
    }
}

fn resolve(mapper: &Mapper, chart: &Chart, index: usize) -> Option<PixelPoint> {
    chart
        .vertices
        .get(index)
        .and_then(|&vertex| mapper.to_pixel(vertex))
}

fn draw_connection(
    painter: &Painter,
    mapper: &Mapper,
    chart: &Chart,
    stroke: Stroke,
    i: usize,
    j: usize,
) {
    let p1 = resolve(mapper, chart, i);
    let p2 = resolve(mapper, chart, j);
    match (p1, p2) {
        (None, None) => {}
        (Some(p), None) | (None, Some(p)) => draw_point(painter, p, stroke),
        (Some(a), Some(b)) if a == b => draw_point(painter, a, stroke),
        (Some(a), Some(b)) => {
            painter.line_segment([a.to_pos2(), b.to_pos2()], stroke);
        }
    }
}

/// A degenerate segment: a filled dot of the stroke width
fn draw_point(painter: &Painter, p: PixelPoint, stroke: Stroke) {
    let radius = (stroke.width * 0.5).max(MIN_POINT_RADIUS);
    painter.circle_filled(p.to_pos2(), radius, stroke.color);
}
