use std::fmt;

use serde::Deserialize;

use crate::report::data::DataFlags;

/// Primitive topology of a mesh level.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum MeshPrimitive {
	Points,
	Lines,
	LineStrip,
	LineLoop,
	Triangles,
	TriangleStrip,
	TriangleFan,
	Instances,
	Faces,
	Edges,
	Meshlets,
}

impl fmt::Display for MeshPrimitive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Integer type of an index buffer.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum MeshIndexType {
	UnsignedByte,
	UnsignedShort,
	UnsignedInt,
}

impl MeshIndexType {
	/// Size of one index in bytes.
	pub fn size(self) -> usize {
		match self {
			MeshIndexType::UnsignedByte => 1,
			MeshIndexType::UnsignedShort => 2,
			MeshIndexType::UnsignedInt => 4,
		}
	}
}

impl fmt::Display for MeshIndexType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Little-endian index buffer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeshIndexData {
	/// Index type.
	pub index_type: MeshIndexType,
	/// Raw index bytes.
	#[serde(default)]
	pub data: Vec<u8>,
	/// Storage flags of the index buffer.
	#[serde(default)]
	pub data_flags: DataFlags,
}

impl MeshIndexData {
	/// Number of whole indices in the buffer.
	pub fn count(&self) -> usize {
		self.data.len() / self.index_type.size()
	}
}

/// Vertex attribute kind: a builtin attribute or a custom numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum MeshAttribute {
	/// Vertex position.
	Position,
	/// Tangent, optionally with a bitangent sign in the fourth component.
	Tangent,
	/// Bitangent.
	Bitangent,
	/// Normal.
	Normal,
	/// Texture coordinates.
	TextureCoordinates,
	/// Vertex color.
	Color,
	/// Skin joint ids.
	JointIds,
	/// Skin joint weights.
	Weights,
	/// Per-vertex object id.
	ObjectId,
	/// Custom attribute identified by a numeric id.
	Custom(u16),
}

impl MeshAttribute {
	/// Whether bounds for this attribute compare as integers.
	pub fn is_integral(self) -> bool {
		matches!(self, MeshAttribute::ObjectId)
	}

	/// Whether the bounds pass covers this attribute kind.
	pub fn has_bounds(self) -> bool {
		matches!(
			self,
			MeshAttribute::Position
				| MeshAttribute::Tangent
				| MeshAttribute::Bitangent
				| MeshAttribute::Normal
				| MeshAttribute::TextureCoordinates
				| MeshAttribute::Color
				| MeshAttribute::ObjectId
		)
	}
}

/// Scalar component storage of a vertex format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum VertexComponent {
	/// 32-bit float.
	Float,
	/// 16-bit half float.
	Half,
	/// 64-bit float.
	Double,
	/// 8-bit unsigned integer.
	UnsignedByte,
	/// 8-bit signed integer.
	Byte,
	/// 16-bit unsigned integer.
	UnsignedShort,
	/// 16-bit signed integer.
	Short,
	/// 32-bit unsigned integer.
	UnsignedInt,
	/// 32-bit signed integer.
	Int,
}

impl VertexComponent {
	/// Size of one component in bytes.
	pub fn size(self) -> usize {
		match self {
			VertexComponent::UnsignedByte | VertexComponent::Byte => 1,
			VertexComponent::Half | VertexComponent::UnsignedShort | VertexComponent::Short => 2,
			VertexComponent::Float | VertexComponent::UnsignedInt | VertexComponent::Int => 4,
			VertexComponent::Double => 8,
		}
	}

	/// Whether the component is a floating-point type.
	pub fn is_floating_point(self) -> bool {
		matches!(self, VertexComponent::Float | VertexComponent::Half | VertexComponent::Double)
	}

	fn scalar_name(self) -> &'static str {
		match self {
			VertexComponent::Float => "Float",
			VertexComponent::Half => "Half",
			VertexComponent::Double => "Double",
			VertexComponent::UnsignedByte => "UnsignedByte",
			VertexComponent::Byte => "Byte",
			VertexComponent::UnsignedShort => "UnsignedShort",
			VertexComponent::Short => "Short",
			VertexComponent::UnsignedInt => "UnsignedInt",
			VertexComponent::Int => "Int",
		}
	}

	fn vector_suffix(self) -> &'static str {
		match self {
			VertexComponent::Float => "",
			VertexComponent::Half => "h",
			VertexComponent::Double => "d",
			VertexComponent::UnsignedByte => "ub",
			VertexComponent::Byte => "b",
			VertexComponent::UnsignedShort => "us",
			VertexComponent::Short => "s",
			VertexComponent::UnsignedInt => "ui",
			VertexComponent::Int => "i",
		}
	}
}

/// Vertex format: component type, component count and integer normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct VertexFormat {
	/// Scalar component storage.
	pub component: VertexComponent,
	/// Component count, 1 to 4.
	pub components: u8,
	/// Integer components map to `[0, 1]` or `[-1, 1]`.
	#[serde(default)]
	pub normalized: bool,
}

impl VertexFormat {
	/// Scalar or vector format without normalization.
	pub fn new(component: VertexComponent, components: u8) -> Self {
		Self {
			component,
			components,
			normalized: false,
		}
	}

	/// Normalized integer format.
	pub fn normalized(component: VertexComponent, components: u8) -> Self {
		Self {
			component,
			components,
			normalized: true,
		}
	}

	/// Size of one element in bytes.
	pub fn size(self) -> usize {
		self.component.size() * usize::from(self.components)
	}
}

impl fmt::Display for VertexFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.components <= 1 {
			f.write_str(self.component.scalar_name())?;
		} else {
			write!(f, "Vector{}{}", self.components, self.component.vector_suffix())?;
		}
		if self.normalized {
			f.write_str("Normalized")?;
		}
		Ok(())
	}
}

/// One vertex attribute inside the level's vertex buffer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeshAttributeData {
	/// Attribute kind.
	pub name: MeshAttribute,
	/// Element format.
	pub format: VertexFormat,
	/// Array length per vertex, `0` for non-array attributes.
	#[serde(default)]
	pub array_size: u16,
	/// Byte offset of the first element in the vertex buffer.
	#[serde(default)]
	pub offset: usize,
	/// Byte distance between consecutive elements.
	pub stride: usize,
}

impl MeshAttributeData {
	/// Non-array attribute.
	pub fn new(name: MeshAttribute, format: VertexFormat, offset: usize, stride: usize) -> Self {
		Self {
			name,
			format,
			array_size: 0,
			offset,
			stride,
		}
	}

	/// Whether two attributes share kind and storage format.
	pub fn same_format(&self, other: &MeshAttributeData) -> bool {
		self.name == other.name && self.format == other.format && self.array_size == other.array_size
	}
}

/// One level of a mesh record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeshData {
	/// Primitive topology.
	pub primitive: MeshPrimitive,
	/// Vertex count.
	pub vertex_count: u32,
	/// Optional index buffer.
	#[serde(default)]
	pub index: Option<MeshIndexData>,
	/// Storage flags of the vertex buffer.
	#[serde(default)]
	pub vertex_data_flags: DataFlags,
	/// Raw little-endian vertex bytes shared by all attributes.
	#[serde(default)]
	pub vertex_data: Vec<u8>,
	/// Attributes in storage order.
	#[serde(default)]
	pub attributes: Vec<MeshAttributeData>,
}

impl MeshData {
	/// Attribute-less mesh with just a vertex count.
	pub fn empty(primitive: MeshPrimitive, vertex_count: u32) -> Self {
		Self {
			primitive,
			vertex_count,
			index: None,
			vertex_data_flags: DataFlags::empty(),
			vertex_data: Vec::new(),
			attributes: Vec::new(),
		}
	}
}
