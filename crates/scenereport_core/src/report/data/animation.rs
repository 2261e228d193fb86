use std::fmt;

use serde::Deserialize;

use crate::report::data::DataFlags;

/// Property an animation track drives: a builtin target or a custom numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum AnimationTrackTarget {
	/// 2D translation.
	Translation2D,
	/// 3D translation.
	Translation3D,
	/// 2D rotation.
	Rotation2D,
	/// 3D rotation.
	Rotation3D,
	/// 2D scaling.
	Scaling2D,
	/// 3D scaling.
	Scaling3D,
	/// Custom target identified by a numeric id.
	Custom(u32),
}

/// Keyframe value or interpolation result type.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum AnimationValueType {
	Bool,
	Float,
	UnsignedInt,
	Int,
	Vector2,
	Vector3,
	Vector4,
	Complex,
	Quaternion,
	DualQuaternion,
	CubicHermite1D,
	CubicHermite2D,
	CubicHermite3D,
	CubicHermiteComplex,
	CubicHermiteQuaternion,
}

impl fmt::Display for AnimationValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Interpolation between keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Interpolation {
	/// Step to the previous keyframe.
	Constant,
	/// Linear blend.
	Linear,
	/// Spline through the keyframes.
	Spline,
	/// Interpolator supplied by the asset.
	Custom,
}

impl fmt::Display for Interpolation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Behavior outside the keyframe range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Extrapolation {
	/// Continue the interpolation.
	Extrapolated,
	/// Hold the boundary value.
	Constant,
	/// Use a default-constructed value.
	DefaultConstructed,
}

impl fmt::Display for Extrapolation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// One animation track.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimationTrackData {
	/// Animated property.
	pub target_name: AnimationTrackTarget,
	/// Animated object id.
	pub target: u64,
	/// Keyframe value type.
	pub value_type: AnimationValueType,
	/// Interpolated result type.
	pub result_type: AnimationValueType,
	/// Keyframe times.
	pub keys: Vec<f32>,
	/// Interpolation between keyframes.
	pub interpolation: Interpolation,
	/// Extrapolation before the first keyframe.
	pub before: Extrapolation,
	/// Extrapolation after the last keyframe.
	pub after: Extrapolation,
}

impl AnimationTrackData {
	/// Time range covered by the keyframes.
	pub fn duration(&self) -> Option<(f32, f32)> {
		let first = *self.keys.first()?;
		Some(self.keys.iter().fold((first, first), |(min, max), &key| (min.min(key), max.max(key))))
	}
}

/// Animation record.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnimationData {
	/// Storage flags of the keyframe data.
	#[serde(default)]
	pub data_flags: DataFlags,
	/// Explicit duration. When absent the union of track durations is used.
	#[serde(default)]
	pub duration: Option<(f32, f32)>,
	/// Tracks in storage order.
	#[serde(default)]
	pub tracks: Vec<AnimationTrackData>,
}

impl AnimationData {
	/// Explicit duration or the union of all track durations.
	pub fn effective_duration(&self) -> Option<(f32, f32)> {
		if self.duration.is_some() {
			return self.duration;
		}
		self.tracks
			.iter()
			.filter_map(AnimationTrackData::duration)
			.reduce(|(min, max), (begin, end)| (min.min(begin), max.max(end)))
	}
}
