//! Graph, layout and upload settings.

use force_graph::SimulationParameters;
use log::warn;
use serde::{Deserialize, Serialize};

const DEFAULT_SETTINGS: &str = include_str!("../config/graph.json");

/// Light or dark palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

impl Theme {
	/// Color used for node and edge labels on this theme's background.
	pub fn label_color(self) -> &'static str {
		match self {
			Theme::Light => "#000000",
			Theme::Dark => "#ffffff",
		}
	}

	pub fn background(self) -> &'static str {
		match self {
			Theme::Light => "#ffffff",
			Theme::Dark => "#1a1a2e",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
	pub node_size: f64,
	pub edge_size: f64,
	/// Curvature of the first edge in a parallel group.
	pub base_curvature: f64,
	pub search_limit: usize,
	pub portrait_max_bytes: u64,
	pub simulation: SimulationSettings,
}

impl Default for GraphSettings {
	fn default() -> Self {
		Self {
			node_size: 15.0,
			edge_size: 2.0,
			base_curvature: 0.25,
			search_limit: 10,
			portrait_max_bytes: 5_000_000,
			simulation: SimulationSettings::default(),
		}
	}
}

impl GraphSettings {
	pub fn from_json(raw: &str) -> serde_json::Result<Self> {
		serde_json::from_str(raw)
	}

	/// Settings shipped with the app; falls back to defaults if the bundled file is bad.
	pub fn bundled() -> Self {
		Self::from_json(DEFAULT_SETTINGS).unwrap_or_else(|e| {
			warn!("Bundled graph settings are invalid, using defaults: {}", e);
			Self::default()
		})
	}
}

/// Force simulation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
	pub force_charge: f32,
	pub force_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
}

impl Default for SimulationSettings {
	fn default() -> Self {
		Self {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		}
	}
}

impl From<&SimulationSettings> for SimulationParameters {
	fn from(s: &SimulationSettings) -> Self {
		SimulationParameters {
			force_charge: s.force_charge,
			force_spring: s.force_spring,
			force_max: s.force_max,
			node_speed: s.node_speed,
			damping_factor: s.damping_factor,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_file_matches_defaults() {
		assert_eq!(GraphSettings::bundled(), GraphSettings::default());
	}

	#[test]
	fn partial_json_keeps_remaining_defaults() {
		let s = GraphSettings::from_json(r#"{ "base_curvature": 0.5, "simulation": { "force_max": 10.0 } }"#)
			.unwrap();
		assert_eq!(s.base_curvature, 0.5);
		assert_eq!(s.node_size, 15.0);
		assert_eq!(s.simulation.force_max, 10.0);
		assert_eq!(s.simulation.damping_factor, 0.9);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(GraphSettings::from_json("{ node_size: }").is_err());
	}
}
