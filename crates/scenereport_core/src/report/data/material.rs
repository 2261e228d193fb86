use std::fmt;

use bitflags::bitflags;
use serde::Deserialize;

bitflags! {
	/// Shading models a material provides attributes for.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
	#[serde(transparent)]
	pub struct MaterialTypes: u8 {
		/// Unshaded.
		const FLAT = 1 << 0;
		/// Phong shading.
		const PHONG = 1 << 1;
		/// PBR metallic/roughness workflow.
		const PBR_METALLIC_ROUGHNESS = 1 << 2;
		/// PBR specular/glossiness workflow.
		const PBR_SPECULAR_GLOSSINESS = 1 << 3;
		/// PBR clear coat layer.
		const PBR_CLEAR_COAT = 1 << 4;
	}
}

/// Channel selection for a packed texture.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum MaterialTextureSwizzle {
	R,
	G,
	B,
	A,
	RG,
	GB,
	GA,
	BA,
	RGB,
	GBA,
	RGBA,
}

/// Typed material attribute value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum MaterialValue {
	/// Boolean flag.
	Bool(bool),
	/// Scalar float.
	Float(f32),
	/// Angle in degrees.
	Deg(f32),
	/// Angle in radians.
	Rad(f32),
	/// Unsigned integer. Attributes whose name ends with `Texture` carry texture ids.
	UnsignedInt(u32),
	/// Signed integer.
	Int(i32),
	/// Unsigned 64-bit integer.
	UnsignedLong(u64),
	/// Signed 64-bit integer.
	Long(i64),
	/// Two-component float vector.
	Vector2([f32; 2]),
	/// Three-component float vector.
	Vector3([f32; 3]),
	/// Four-component float vector.
	Vector4([f32; 4]),
	/// Column-major 3x3 matrix.
	Matrix3x3([f32; 9]),
	/// Texture channel selection.
	TextureSwizzle(MaterialTextureSwizzle),
	/// Text.
	String(String),
	/// Opaque read-only pointer.
	Pointer(u64),
	/// Opaque mutable pointer.
	MutablePointer(u64),
	/// Opaque binary blob.
	Buffer(Vec<u8>),
}

impl MaterialValue {
	/// Type name used in reports.
	pub fn type_name(&self) -> &'static str {
		match self {
			MaterialValue::Bool(_) => "Bool",
			MaterialValue::Float(_) => "Float",
			MaterialValue::Deg(_) => "Deg",
			MaterialValue::Rad(_) => "Rad",
			MaterialValue::UnsignedInt(_) => "UnsignedInt",
			MaterialValue::Int(_) => "Int",
			MaterialValue::UnsignedLong(_) => "UnsignedLong",
			MaterialValue::Long(_) => "Long",
			MaterialValue::Vector2(_) => "Vector2",
			MaterialValue::Vector3(_) => "Vector3",
			MaterialValue::Vector4(_) => "Vector4",
			MaterialValue::Matrix3x3(_) => "Matrix3x3",
			MaterialValue::TextureSwizzle(_) => "TextureSwizzle",
			MaterialValue::String(_) => "String",
			MaterialValue::Pointer(_) => "Pointer",
			MaterialValue::MutablePointer(_) => "MutablePointer",
			MaterialValue::Buffer(_) => "Buffer",
		}
	}
}

impl fmt::Display for MaterialTextureSwizzle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Name reserved for the attribute carrying a layer's name.
pub(crate) const LAYER_NAME: &str = "LayerName";

/// Named material attribute.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaterialAttributeData {
	/// Builtin or custom attribute name.
	pub name: String,
	/// Attribute value.
	pub value: MaterialValue,
}

impl MaterialAttributeData {
	/// Attribute from a name and value.
	pub fn new(name: impl Into<String>, value: MaterialValue) -> Self {
		Self { name: name.into(), value }
	}

	/// Texture id when this attribute references a texture.
	pub fn texture_id(&self) -> Option<u32> {
		match self.value {
			MaterialValue::UnsignedInt(id) if self.name.ends_with("Texture") => Some(id),
			_ => None,
		}
	}

	/// Whether two attributes share name and value type.
	pub fn same_format(&self, other: &MaterialAttributeData) -> bool {
		self.name == other.name && self.value.type_name() == other.value.type_name()
	}
}

/// One material layer. Layer 0 is the base material.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MaterialLayerData {
	/// Attributes in storage order.
	#[serde(default)]
	pub attributes: Vec<MaterialAttributeData>,
}

impl MaterialLayerData {
	/// Layer from its attributes.
	pub fn new(attributes: Vec<MaterialAttributeData>) -> Self {
		Self { attributes }
	}

	/// Layer name stored in the `LayerName` attribute.
	pub fn name(&self) -> Option<&str> {
		self.attributes.iter().find_map(|attribute| match &attribute.value {
			MaterialValue::String(name) if attribute.name == LAYER_NAME => Some(name.as_str()),
			_ => None,
		})
	}
}

/// Material record.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MaterialData {
	/// Shading models.
	#[serde(default)]
	pub types: MaterialTypes,
	/// Layers, base layer first.
	#[serde(default)]
	pub layers: Vec<MaterialLayerData>,
}

impl MaterialData {
	/// Single-layer material.
	pub fn new(types: MaterialTypes, attributes: Vec<MaterialAttributeData>) -> Self {
		Self {
			types,
			layers: vec![MaterialLayerData::new(attributes)],
		}
	}

	/// Attributes of all layers in storage order, with their layer index.
	pub fn attributes(&self) -> impl Iterator<Item = (usize, &MaterialAttributeData)> {
		self.layers.iter().enumerate().flat_map(|(layer, data)| data.attributes.iter().map(move |attribute| (layer, attribute)))
	}
}
