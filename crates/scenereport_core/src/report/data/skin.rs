use serde::Deserialize;

use crate::report::data::DataFlags;

/// Skin record, shared by the 2D and 3D skin categories.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SkinData {
	/// Joint object ids.
	pub joints: Vec<u32>,
	/// Storage flags of the joint list.
	#[serde(default)]
	pub joint_data_flags: DataFlags,
	/// Storage flags of the inverse bind matrices.
	#[serde(default)]
	pub inverse_bind_matrix_data_flags: DataFlags,
}

impl SkinData {
	/// Skin owning its joint list.
	pub fn new(joints: Vec<u32>) -> Self {
		Self {
			joints,
			..Self::default()
		}
	}
}
