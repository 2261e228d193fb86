use std::fmt;

use serde::Deserialize;

/// Light source kind.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum LightType {
	Ambient,
	Directional,
	Point,
	Spot,
}

impl fmt::Display for LightType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Light record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LightData {
	/// Light kind.
	pub light_type: LightType,
	/// Linear RGB color.
	pub color: [f32; 3],
	/// Intensity multiplier.
	pub intensity: f32,
	/// Constant, linear and quadratic attenuation.
	#[serde(default = "default_attenuation")]
	pub attenuation: [f32; 3],
	/// Range, `None` for infinite.
	#[serde(default)]
	pub range: Option<f32>,
	/// Inner cone angle in degrees, spot lights only.
	#[serde(default)]
	pub inner_cone_angle: f32,
	/// Outer cone angle in degrees, spot lights only.
	#[serde(default = "default_outer_cone_angle")]
	pub outer_cone_angle: f32,
}

impl LightData {
	/// Light with implicit attenuation, infinite range and default cone.
	pub fn new(light_type: LightType, color: [f32; 3], intensity: f32) -> Self {
		Self {
			light_type,
			color,
			intensity,
			attenuation: default_attenuation(),
			range: None,
			inner_cone_angle: 0.0,
			outer_cone_angle: default_outer_cone_angle(),
		}
	}
}

fn default_attenuation() -> [f32; 3] {
	[1.0, 0.0, 0.0]
}

fn default_outer_cone_angle() -> f32 {
	45.0
}
