use crate::report::bytes::Cursor;
use crate::report::data::{MeshAttributeData, MeshData, MeshIndexData, VertexComponent, VertexFormat};

/// Per-component minimum and maximum of one attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentRange {
	/// Geometric and color attributes, after normalization.
	Float {
		/// Minimum per component.
		min: Vec<f64>,
		/// Maximum per component.
		max: Vec<f64>,
	},
	/// Id attributes.
	Integer {
		/// Minimum per component.
		min: Vec<i64>,
		/// Maximum per component.
		max: Vec<i64>,
	},
}

/// Bounds of the attribute at `attribute` in the mesh's attribute list.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeBounds {
	/// Position in [`MeshData::attributes`].
	pub attribute: usize,
	/// Component ranges.
	pub range: ComponentRange,
}

/// Bounds of one mesh level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshBounds {
	/// Smallest and largest index, when the level is indexed and non-empty.
	pub index: Option<(u32, u32)>,
	/// Bounds for each covered attribute, in attribute order.
	pub attributes: Vec<AttributeBounds>,
}

impl MeshBounds {
	/// Bounds of the attribute at the given position, if it was covered.
	pub fn attribute(&self, attribute: usize) -> Option<&ComponentRange> {
		self.attributes.iter().find(|item| item.attribute == attribute).map(|item| &item.range)
	}
}

/// Decodes vertex and index buffers of one mesh level into per-component ranges.
///
/// Array attributes, custom attributes and attributes with no vertices are skipped.
/// An attribute whose layout reaches past the vertex buffer is skipped with a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsCalculator;

impl BoundsCalculator {
	/// Compute bounds for one mesh level.
	pub fn compute(&self, mesh: &MeshData) -> MeshBounds {
		let index = mesh.index.as_ref().and_then(index_bounds);
		let attributes = mesh
			.attributes
			.iter()
			.enumerate()
			.filter_map(|(position, attribute)| {
				attribute_bounds(&mesh.vertex_data, mesh.vertex_count, attribute).map(|range| AttributeBounds { attribute: position, range })
			})
			.collect();

		MeshBounds { index, attributes }
	}
}

fn index_bounds(index: &MeshIndexData) -> Option<(u32, u32)> {
	let mut cursor = Cursor::new(&index.data);
	let mut bounds: Option<(u32, u32)> = None;
	for _ in 0..index.count() {
		let value = match index.index_type.size() {
			1 => u32::from(cursor.read_u8()?),
			2 => u32::from(cursor.read_u16_le()?),
			_ => cursor.read_u32_le()?,
		};
		bounds = Some(match bounds {
			Some((min, max)) => (min.min(value), max.max(value)),
			None => (value, value),
		});
	}
	bounds
}

fn attribute_bounds(vertex_data: &[u8], vertex_count: u32, attribute: &MeshAttributeData) -> Option<ComponentRange> {
	if !attribute.name.has_bounds() || attribute.array_size != 0 || vertex_count == 0 {
		return None;
	}

	let format = attribute.format;
	let components = usize::from(format.components.max(1));
	let last = attribute.stride.checked_mul(vertex_count as usize - 1);
	let end = last.and_then(|last| last.checked_add(attribute.offset)).and_then(|start| start.checked_add(format.size()));
	if end.is_none_or(|end| end > vertex_data.len()) {
		log::warn!(
			"{:?} attribute at offset {} with stride {} exceeds the {}-byte vertex buffer, skipping bounds",
			attribute.name,
			attribute.offset,
			attribute.stride,
			vertex_data.len()
		);
		return None;
	}

	let mut cursor = Cursor::new(vertex_data);
	if attribute.name.is_integral() && !format.component.is_floating_point() {
		let mut min = vec![i64::MAX; components];
		let mut max = vec![i64::MIN; components];
		for vertex in 0..vertex_count as usize {
			cursor.seek(attribute.offset + vertex * attribute.stride)?;
			for component in 0..components {
				let value = read_integer(&mut cursor, format.component)?;
				min[component] = min[component].min(value);
				max[component] = max[component].max(value);
			}
		}
		return Some(ComponentRange::Integer { min, max });
	}

	let mut min = vec![f64::INFINITY; components];
	let mut max = vec![f64::NEG_INFINITY; components];
	for vertex in 0..vertex_count as usize {
		cursor.seek(attribute.offset + vertex * attribute.stride)?;
		for component in 0..components {
			let value = read_float(&mut cursor, format)?;
			min[component] = min[component].min(value);
			max[component] = max[component].max(value);
		}
	}
	Some(ComponentRange::Float { min, max })
}

fn read_integer(cursor: &mut Cursor<'_>, component: VertexComponent) -> Option<i64> {
	Some(match component {
		VertexComponent::UnsignedByte => i64::from(cursor.read_u8()?),
		VertexComponent::Byte => i64::from(cursor.read_u8()? as i8),
		VertexComponent::UnsignedShort => i64::from(cursor.read_u16_le()?),
		VertexComponent::Short => i64::from(cursor.read_u16_le()? as i16),
		VertexComponent::UnsignedInt => i64::from(cursor.read_u32_le()?),
		VertexComponent::Int => i64::from(cursor.read_u32_le()? as i32),
		VertexComponent::Half => read_float(cursor, VertexFormat::new(component, 1))? as i64,
		VertexComponent::Float => f32::from_bits(cursor.read_u32_le()?) as i64,
		VertexComponent::Double => f64::from_bits(cursor.read_u64_le()?) as i64,
	})
}

fn read_float(cursor: &mut Cursor<'_>, format: VertexFormat) -> Option<f64> {
	let value = match format.component {
		VertexComponent::Float => f64::from(f32::from_bits(cursor.read_u32_le()?)),
		VertexComponent::Half => f64::from(half_to_f32(cursor.read_u16_le()?)),
		VertexComponent::Double => f64::from_bits(cursor.read_u64_le()?),
		integer => {
			let value = read_integer(cursor, integer)? as f64;
			if !format.normalized {
				return Some(value);
			}
			match integer {
				VertexComponent::UnsignedByte => value / f64::from(u8::MAX),
				VertexComponent::Byte => (value / f64::from(i8::MAX)).max(-1.0),
				VertexComponent::UnsignedShort => value / f64::from(u16::MAX),
				VertexComponent::Short => (value / f64::from(i16::MAX)).max(-1.0),
				VertexComponent::UnsignedInt => value / f64::from(u32::MAX),
				VertexComponent::Int => (value / f64::from(i32::MAX)).max(-1.0),
				_ => value,
			}
		}
	};
	Some(value)
}

/// Expand an IEEE 754 half-precision value.
fn half_to_f32(bits: u16) -> f32 {
	let sign = u32::from(bits >> 15) << 31;
	let exponent = u32::from((bits >> 10) & 0x1f);
	let mantissa = u32::from(bits & 0x3ff);
	match exponent {
		0 => {
			let magnitude = mantissa as f32 * f32::powi(2.0, -24);
			f32::from_bits(magnitude.to_bits() | sign)
		}
		0x1f => f32::from_bits(sign | 0x7f80_0000 | (mantissa << 13)),
		_ => f32::from_bits(sign | ((exponent + 112) << 23) | (mantissa << 13)),
	}
}
