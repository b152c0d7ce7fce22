//! Chart records and the keyed chart store

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::constants::chart::{DEFAULT_COLOR, DEFAULT_WIDTH};
use crate::coord::PlotPoint;

/// How a chart's vertices are connected when drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectMode {
    /// Each vertex drawn as an isolated point
    #[default]
    None,
    /// Open polyline: vertex i connected to i+1
    Line,
    /// Closed polyline: the open polyline plus last-to-first
    Cycle,
    /// Only the explicitly supplied index pairs
    Edges,
    /// Every unordered pair, self-pairs included
    Complete,
}

/// A named point set with its styling
#[derive(Debug, Clone)]
pub struct Chart {
    pub vertices: Vec<PlotPoint>,
    pub color: Color32,
    pub width: f64,
    pub connect: ConnectMode,
    /// Vertex index pairs, consulted only when `connect == Edges`
    pub edges: Option<Vec<(usize, usize)>>,
}

impl Chart {
    fn new(vertices: Vec<PlotPoint>) -> Self {
        Self {
            vertices,
            color: DEFAULT_COLOR,
            width: DEFAULT_WIDTH,
            connect: ConnectMode::default(),
            edges: None,
        }
    }
}

/// Insertion-ordered mapping from chart key to chart record
///
/// Enumeration order drives the on-screen legend, so it must be
/// deterministic: charts iterate in the order their keys first appeared.
/// Re-adding an existing key replaces the record in place.
#[derive(Debug, Clone, Default)]
pub struct ChartStore {
    charts: Vec<(String, Chart)>,
}

impl ChartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or fully replace the chart under `key`
    ///
    /// Replacement resets color, width, connection mode, and edges back to
    /// their defaults; only the key's position in the legend survives.
    pub fn add(&mut self, key: impl Into<String>, vertices: Vec<PlotPoint>) {
        let key = key.into();
        let chart = Chart::new(vertices);
        match self.charts.iter().position(|(k, _)| *k == key) {
            Some(slot) => self.charts[slot].1 = chart,
            None => self.charts.push((key, chart)),
        }
    }

    /// Set the stroke color; no-op if the key is absent
    pub fn set_color(&mut self, key: &str, color: Color32) {
        if let Some(chart) = self.get_mut(key) {
            chart.color = color;
        }
    }

    /// Set the stroke width, clamped to >= 0; no-op if the key is absent
    pub fn set_width(&mut self, key: &str, width: f64) {
        if let Some(chart) = self.get_mut(key) {
            chart.width = width.max(0.0);
        }
    }

    /// Set the connection mode; no-op if the key is absent
    pub fn set_connect(&mut self, key: &str, connect: ConnectMode) {
        if let Some(chart) = self.get_mut(key) {
            chart.connect = connect;
        }
    }

    /// Set the explicit edge list; no-op if the key is absent
    pub fn set_edges(&mut self, key: &str, edges: Vec<(usize, usize)>) {
        if let Some(chart) = self.get_mut(key) {
            chart.edges = Some(edges);
        }
    }

    /// Remove the chart under `key`; no-op if absent
    pub fn remove(&mut self, key: &str) {
        self.charts.retain(|(k, _)| k != key);
    }

    pub fn get(&self, key: &str) -> Option<&Chart> {
        self.charts
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, chart)| chart)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Chart> {
        self.charts
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, chart)| chart)
    }

    /// Iterate charts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Chart)> {
        self.charts.iter().map(|(k, chart)| (k.as_str(), chart))
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(n: usize) -> Vec<PlotPoint> {
        (0..n).map(|i| PlotPoint::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn test_add_uses_defaults() {
        let mut store = ChartStore::new();
        store.add("a", points(3));
        let chart = store.get("a").unwrap();
        assert_eq!(chart.color, Color32::BLACK);
        assert_eq!(chart.width, 1.0);
        assert_eq!(chart.connect, ConnectMode::None);
        assert!(chart.edges.is_none());
    }

    #[test]
    fn test_re_add_resets_styling() {
        let mut store = ChartStore::new();
        store.add("a", points(3));
        store.set_color("a", Color32::RED);
        store.set_width("a", 4.0);
        store.set_connect("a", ConnectMode::Cycle);
        store.set_edges("a", vec![(0, 1)]);

        store.add("a", points(5));
        let chart = store.get("a").unwrap();
        assert_eq!(chart.vertices.len(), 5);
        assert_eq!(chart.color, Color32::BLACK);
        assert_eq!(chart.width, 1.0);
        assert_eq!(chart.connect, ConnectMode::None);
        assert!(chart.edges.is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_setters_ignore_unknown_keys() {
        let mut store = ChartStore::new();
        store.set_color("ghost", Color32::RED);
        store.set_width("ghost", 2.0);
        store.set_connect("ghost", ConnectMode::Line);
        store.set_edges("ghost", vec![(0, 1)]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_then_setter_does_not_resurrect() {
        let mut store = ChartStore::new();
        store.add("a", points(2));
        store.remove("a");
        store.set_color("a", Color32::RED);
        store.set_connect("a", ConnectMode::Complete);
        assert!(store.get("a").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_unknown_key_is_noop() {
        let mut store = ChartStore::new();
        store.add("a", points(1));
        store.remove("missing");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut store = ChartStore::new();
        store.add("zebra", points(1));
        store.add("apple", points(1));
        store.add("mango", points(1));
        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);

        // replacing keeps the slot
        store.add("apple", points(9));
        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_negative_width_clamps_to_zero() {
        let mut store = ChartStore::new();
        store.add("a", points(1));
        store.set_width("a", -3.0);
        assert_eq!(store.get("a").unwrap().width, 0.0);
    }
}
