use std::fmt;

use bitflags::bitflags;
use serde::Deserialize;

use crate::report::data::DataFlags;

/// Scene field kind: a builtin field or a custom numeric id resolved through the name resolver.
///
/// Builtin variants are declared in canonical report order; custom fields sort after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SceneField {
	/// Parent object index, `-1` for root objects.
	Parent,
	/// Combined transformation matrix.
	Transformation,
	/// Translation component.
	Translation,
	/// Rotation component.
	Rotation,
	/// Scaling component.
	Scaling,
	/// Mesh index.
	Mesh,
	/// Material index for the mesh assigned to the same entry, `-1` for none.
	MeshMaterial,
	/// Light index.
	Light,
	/// Camera index.
	Camera,
	/// Skin index, 2D or 3D depending on the scene.
	Skin,
	/// Opaque per-object importer state.
	ImporterState,
	/// Custom field identified by a numeric id.
	Custom(u32),
}

impl SceneField {
	/// Position in the canonical builtin order, `None` for custom fields.
	pub fn builtin_rank(self) -> Option<usize> {
		Some(match self {
			SceneField::Parent => 0,
			SceneField::Transformation => 1,
			SceneField::Translation => 2,
			SceneField::Rotation => 3,
			SceneField::Scaling => 4,
			SceneField::Mesh => 5,
			SceneField::MeshMaterial => 6,
			SceneField::Light => 7,
			SceneField::Camera => 8,
			SceneField::Skin => 9,
			SceneField::ImporterState => 10,
			SceneField::Custom(_) => return None,
		})
	}

	fn is_transformation_family(self) -> bool {
		matches!(self, SceneField::Transformation | SceneField::Translation | SceneField::Rotation | SceneField::Scaling)
	}
}

/// Storage type of scene field values.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SceneFieldType {
	Bool,
	UnsignedByte,
	Byte,
	UnsignedShort,
	Short,
	UnsignedInt,
	Int,
	UnsignedLong,
	Long,
	Half,
	Float,
	Double,
	Vector2,
	Vector3,
	Vector4,
	Vector2d,
	Vector3d,
	Matrix3x2,
	Matrix3x3,
	Matrix4x3,
	Matrix4x4,
	Complex,
	Quaternion,
	DualComplex,
	DualQuaternion,
	Pointer,
	MutablePointer,
	StringOffset32,
}

impl SceneFieldType {
	fn dimensions(self) -> Option<SceneDimensions> {
		match self {
			SceneFieldType::Vector2 | SceneFieldType::Vector2d | SceneFieldType::Matrix3x2 | SceneFieldType::Matrix3x3 | SceneFieldType::Complex | SceneFieldType::DualComplex => {
				Some(SceneDimensions::Two)
			}
			SceneFieldType::Vector3 | SceneFieldType::Vector3d | SceneFieldType::Matrix4x3 | SceneFieldType::Matrix4x4 | SceneFieldType::Quaternion | SceneFieldType::DualQuaternion => {
				Some(SceneDimensions::Three)
			}
			_ => None,
		}
	}
}

impl fmt::Display for SceneFieldType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Integer type used to store object ids in field mappings.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SceneMappingType {
	UnsignedByte,
	UnsignedShort,
	UnsignedInt,
	UnsignedLong,
}

impl fmt::Display for SceneMappingType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

bitflags! {
	/// Per-field layout flags.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
	#[serde(transparent)]
	pub struct SceneFieldFlags: u8 {
		/// Field views are offsets into shared data rather than owned views.
		const OFFSET_ONLY = 1 << 0;
		/// Mapping is sorted by object id.
		const ORDERED_MAPPING = 1 << 1;
		/// Mapping is the identity `0..n`.
		const IMPLICIT_MAPPING = 1 << 2;
		/// Field values are trivially derivable and may be skipped.
		const TRIVIAL_FIELD = 1 << 3;
	}
}

/// Whether a scene describes a 2D or a 3D hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneDimensions {
	/// Two-dimensional transformations.
	Two,
	/// Three-dimensional transformations.
	Three,
}

impl fmt::Display for SceneDimensions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			SceneDimensions::Two => "2D",
			SceneDimensions::Three => "3D",
		})
	}
}

/// One field of a scene: a mapping of object ids to values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneFieldData {
	/// Field kind.
	pub name: SceneField,
	/// Storage type of each value.
	pub field_type: SceneFieldType,
	/// Array length per entry, `0` for non-array fields.
	#[serde(default)]
	pub array_size: u16,
	/// Layout flags.
	#[serde(default)]
	pub flags: SceneFieldFlags,
	/// Object id per entry.
	#[serde(default)]
	pub mapping: Vec<u64>,
	/// Integer values per entry for index-valued fields (parent, mesh, material, light, camera, skin).
	///
	/// Empty for fields whose payload is opaque to the report.
	#[serde(default)]
	pub values: Vec<i64>,
}

impl SceneFieldData {
	/// Build an index-valued field from parallel mapping and value lists.
	pub fn indices(name: SceneField, field_type: SceneFieldType, mapping: Vec<u64>, values: Vec<i64>) -> Self {
		Self {
			name,
			field_type,
			array_size: 0,
			flags: SceneFieldFlags::empty(),
			mapping,
			values,
		}
	}

	/// Build a field whose values are opaque to the report.
	pub fn opaque(name: SceneField, field_type: SceneFieldType, mapping: Vec<u64>) -> Self {
		Self {
			name,
			field_type,
			array_size: 0,
			flags: SceneFieldFlags::empty(),
			mapping,
			values: Vec::new(),
		}
	}

	/// Number of entries.
	pub fn size(&self) -> usize {
		self.mapping.len()
	}

	/// Whether two fields share kind and storage format.
	pub fn same_format(&self, other: &SceneFieldData) -> bool {
		self.name == other.name && self.field_type == other.field_type && self.array_size == other.array_size
	}
}

/// Scene graph record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneData {
	/// Type of the object id mapping.
	pub mapping_type: SceneMappingType,
	/// Upper bound on object ids this scene maps.
	pub mapping_bound: u64,
	/// Storage flags of the field data.
	#[serde(default)]
	pub data_flags: DataFlags,
	/// Fields in storage order.
	#[serde(default)]
	pub fields: Vec<SceneFieldData>,
}

impl SceneData {
	/// Dimensionality implied by the transformation-family fields, if any.
	pub fn dimensions(&self) -> Option<SceneDimensions> {
		self.fields
			.iter()
			.filter(|field| field.name.is_transformation_family())
			.find_map(|field| field.field_type.dimensions())
	}
}
