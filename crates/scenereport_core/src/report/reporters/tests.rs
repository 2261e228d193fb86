use super::*;
use crate::report::data::{
	AnimationTrackData, AnimationTrackTarget, AnimationValueType, CompressedPixelFormat, DataFlags, Extrapolation, ImageFlags, ImageFormat, Interpolation, LightType,
	MaterialAttributeData, MaterialLayerData, MaterialTypes, MaterialValue, MeshAttribute, MeshAttributeData, MeshData, MeshPrimitive, PixelFormat, SamplerFilter,
	SamplerMipmap, SamplerWrapping, SceneField, SceneFieldData, SceneFieldType, SceneMappingType, TextureType, VertexComponent, VertexFormat,
};

fn render(refs: &ReferenceAnalyzer, category: Category, id: u32, name: Option<&str>, levels: Vec<Record>) -> String {
	let names = NameResolver::new();
	let ctx = Context::new(&ReportOptions::default(), &names, refs);
	let levels: Vec<_> = levels.into_iter().enumerate().map(|(level, record)| (level as u32, record)).collect();
	let mut lines = Vec::new();
	report(&ctx, category, id, name, &levels, &mut lines);
	lines.join("\n")
}

fn no_refs() -> ReferenceAnalyzer {
	ReferenceAnalyzer::default()
}

fn track(target_name: AnimationTrackTarget, target: u64, value_type: AnimationValueType, keys: Vec<f32>) -> AnimationTrackData {
	AnimationTrackData {
		target_name,
		target,
		value_type,
		result_type: value_type,
		keys,
		interpolation: Interpolation::Linear,
		before: Extrapolation::Constant,
		after: Extrapolation::Extrapolated,
	}
}

mod scene {
	use super::*;

	#[test]
	fn builtin_fields_sort_first_and_repeats_are_flagged() {
		let scene = SceneData {
			mapping_type: SceneMappingType::UnsignedShort,
			mapping_bound: 2,
			data_flags: DataFlags::empty(),
			fields: vec![
				SceneFieldData::opaque(SceneField::Custom(42), SceneFieldType::Double, vec![0]),
				SceneFieldData::opaque(SceneField::Translation, SceneFieldType::Vector3, vec![0]),
				SceneFieldData::opaque(SceneField::Custom(42), SceneFieldType::Double, vec![1]),
			],
		};
		let text = render(&ReferenceAnalyzer::new([(Category::Object, 2)]), Category::Scene, 0, None, vec![Record::Scene(scene)]);
		assert_eq!(
			text,
			"Scene 0
  Bound: 2 objects @ UnsignedShort
  Dimensions: 3D
  Fields:
    Translation @ Vector3, 1 entry
    Custom(42) @ Double, 1 entry
    Custom(42) @ Double, 1 entry [duplicate]"
		);
	}

	#[test]
	fn scanned_scene_annotates_its_targets() {
		let scene = SceneData {
			mapping_type: SceneMappingType::UnsignedInt,
			mapping_bound: 1,
			data_flags: DataFlags::empty(),
			fields: vec![SceneFieldData::indices(SceneField::Light, SceneFieldType::UnsignedInt, vec![0], vec![0])],
		};
		let mut refs = ReferenceAnalyzer::new([(Category::Object, 1), (Category::Light, 2)]);
		refs.scan_scene(0, &scene);

		let light = || Record::Light(LightData::new(LightType::Ambient, [1.0, 1.0, 1.0], 1.0));
		assert!(render(&refs, Category::Light, 0, Some("Sun"), vec![light()]).starts_with("Light 0 (referenced 1 time): Sun\n"));
		assert!(render(&refs, Category::Light, 1, None, vec![light()]).starts_with("Light 1 (unreferenced)\n"));
	}
}

mod animation {
	use super::*;

	#[test]
	fn tracks_show_their_own_duration_when_it_differs() {
		let mut rotation = track(AnimationTrackTarget::Rotation3D, 3, AnimationValueType::Quaternion, vec![0.5, 1.5]);
		rotation.interpolation = Interpolation::Constant;
		rotation.before = Extrapolation::Extrapolated;
		let mut custom = track(AnimationTrackTarget::Custom(7), 5, AnimationValueType::CubicHermite3D, vec![1.0]);
		custom.result_type = AnimationValueType::Vector3;
		custom.interpolation = Interpolation::Spline;
		custom.before = Extrapolation::DefaultConstructed;
		custom.after = Extrapolation::Constant;

		let animation = AnimationData {
			data_flags: DataFlags::OWNED | DataFlags::MUTABLE,
			duration: None,
			tracks: vec![
				track(AnimationTrackTarget::Translation3D, 3, AnimationValueType::Vector3, vec![0.0, 1.0, 2.5]),
				rotation,
				custom,
			],
		};
		let text = render(&no_refs(), Category::Animation, 0, Some("Walk"), vec![Record::Animation(animation)]);
		assert_eq!(
			text,
			"Animation 0: Walk
  Duration: {0, 2.5} (Owned, Mutable)
  Track 0: Translation3D @ Vector3, 3 keyframes
    Target: object 3
    Interpolation: Linear, extrapolation Constant / Extrapolated
  Track 1: Rotation3D @ Quaternion, 2 keyframes, duration {0.5, 1.5}
    Target: object 3
    Interpolation: Constant, extrapolation Extrapolated / Extrapolated
  Track 2: Custom(7) @ CubicHermite3D -> Vector3, 1 keyframe, duration {1, 1}
    Target: object 5
    Interpolation: Spline, extrapolation DefaultConstructed / Constant"
		);
	}

	#[test]
	fn explicit_duration_wins_and_empty_animation_has_none() {
		let animation = AnimationData {
			duration: Some((-1.0, 4.0)),
			tracks: vec![track(AnimationTrackTarget::Scaling2D, 0, AnimationValueType::Vector2, vec![0.0, 1.0])],
			..AnimationData::default()
		};
		let text = render(&no_refs(), Category::Animation, 2, None, vec![Record::Animation(animation)]);
		assert!(text.contains("  Duration: {-1, 4}\n"), "{text}");
		assert!(text.contains("  Track 0: Scaling2D @ Vector2, 2 keyframes, duration {0, 1}\n"), "{text}");

		let empty = render(&no_refs(), Category::Animation, 3, None, vec![Record::Animation(AnimationData::default())]);
		assert_eq!(empty, "Animation 3");
	}
}

mod skin {
	use super::*;

	#[test]
	fn joint_count_and_storage_flags() {
		let skin = SkinData {
			joints: vec![0, 1, 2],
			joint_data_flags: DataFlags::EXTERNALLY_OWNED,
			inverse_bind_matrix_data_flags: DataFlags::OWNED | DataFlags::MUTABLE,
		};
		assert_eq!(
			render(&no_refs(), Category::Skin3D, 1, None, vec![Record::Skin(skin)]),
			"3D skin 1\n  3 joints (ExternallyOwned)\n  Inverse bind matrices (Owned, Mutable)"
		);
		assert_eq!(
			render(&no_refs(), Category::Skin2D, 0, Some("Arm"), vec![Record::Skin(SkinData::new(vec![4]))]),
			"2D skin 0: Arm\n  1 joint"
		);
	}
}

mod light {
	use super::*;

	#[test]
	fn spot_light_lists_cone_attenuation_and_range() {
		let light = LightData {
			attenuation: [0.5, 0.25, 0.125],
			range: Some(15.0),
			inner_cone_angle: 55.0,
			outer_cone_angle: 85.0,
			..LightData::new(LightType::Spot, [0.0, 1.0, 0.25], 2.5)
		};
		assert_eq!(
			render(&no_refs(), Category::Light, 0, None, vec![Record::Light(light)]),
			"Light 0
  Type: Spot, 55° - 85°
  Color: #00ff40 * 2.5
  Attenuation: {0.5, 0.25, 0.125}
  Range: 15"
		);
	}

	#[test]
	fn point_light_range_defaults_to_infinity() {
		let text = render(&no_refs(), Category::Light, 1, None, vec![Record::Light(LightData::new(LightType::Point, [1.0, 0.5, 2.0], 1.0))]);
		assert_eq!(text, "Light 1\n  Type: Point\n  Color: #ff80ff * 1\n  Attenuation: {1, 0, 0}\n  Range: inf");
	}

	#[test]
	fn directional_light_has_no_attenuation() {
		let text = render(&no_refs(), Category::Light, 2, None, vec![Record::Light(LightData::new(LightType::Directional, [0.0, 0.0, 0.0], 0.75))]);
		assert_eq!(text, "Light 2\n  Type: Directional\n  Color: #000000 * 0.75");
	}
}

mod material {
	use super::*;

	fn attribute(name: &str, value: MaterialValue) -> MaterialAttributeData {
		MaterialAttributeData::new(name, value)
	}

	#[test]
	fn layers_values_and_texture_range() {
		let material = MaterialData {
			types: MaterialTypes::PBR_METALLIC_ROUGHNESS | MaterialTypes::PBR_CLEAR_COAT,
			layers: vec![
				MaterialLayerData::new(vec![
					attribute("BaseColor", MaterialValue::Vector4([1.0, 0.5, 0.25, 1.0])),
					attribute("BaseColorTexture", MaterialValue::UnsignedInt(3)),
					attribute("Metalness", MaterialValue::Float(0.5)),
					attribute("Metalness", MaterialValue::Float(0.75)),
					attribute("DoubleSided", MaterialValue::Bool(true)),
				]),
				MaterialLayerData::new(vec![
					attribute("LayerName", MaterialValue::String("ClearCoat".to_owned())),
					attribute("LayerFactor", MaterialValue::Float(0.5)),
				]),
				MaterialLayerData::new(vec![
					attribute("importerData", MaterialValue::Buffer(vec![1, 2, 3])),
					attribute("sourcePointer", MaterialValue::Pointer(0xdead)),
				]),
			],
		};
		let text = render(&ReferenceAnalyzer::new([(Category::Texture, 2)]), Category::Material, 0, None, vec![Record::Material(material)]);
		assert_eq!(
			text,
			"Material 0
  Type: PbrMetallicRoughness, PbrClearCoat
  Base layer:
    BaseColor @ Vector4: {1, 0.5, 0.25, 1}
    BaseColorTexture @ UnsignedInt: 3 (out of range)
    Metalness @ Float: 0.5
    Metalness @ Float: 0.75 [duplicate]
    DoubleSided @ Bool: true
  Layer 1: ClearCoat
    LayerFactor @ Float: 0.5
  Layer 2
    importerData @ Buffer: 3 bytes
    sourcePointer @ Pointer: 0xdead"
		);
	}

	#[test]
	fn empty_base_layer_and_types_are_omitted() {
		let material = MaterialData {
			types: MaterialTypes::empty(),
			layers: vec![
				MaterialLayerData::default(),
				MaterialLayerData::new(vec![attribute("LayerName", MaterialValue::String("Sheen".to_owned()))]),
			],
		};
		let text = render(&no_refs(), Category::Material, 4, Some("Cloth"), vec![Record::Material(material)]);
		assert_eq!(text, "Material 4: Cloth\n  Layer 1: Sheen");
	}
}

mod mesh {
	use super::*;

	#[test]
	fn repeated_attributes_of_one_format_are_flagged() {
		let vector3 = VertexFormat::new(VertexComponent::Float, 3);
		let id = VertexFormat::new(VertexComponent::UnsignedInt, 1);
		let mut weights = MeshAttributeData::new(MeshAttribute::Custom(7), VertexFormat::new(VertexComponent::UnsignedByte, 1), 28, 40);
		weights.array_size = 4;
		let mut more_weights = weights.clone();
		more_weights.offset = 32;
		let mut fewer_weights = weights.clone();
		fewer_weights.array_size = 2;
		fewer_weights.offset = 36;

		let mesh = MeshData {
			attributes: vec![
				MeshAttributeData::new(MeshAttribute::Position, vector3, 0, 40),
				MeshAttributeData::new(MeshAttribute::ObjectId, id, 12, 40),
				MeshAttributeData::new(MeshAttribute::ObjectId, VertexFormat::new(VertexComponent::UnsignedShort, 1), 16, 40),
				MeshAttributeData::new(MeshAttribute::Position, vector3, 16, 40),
				MeshAttributeData::new(MeshAttribute::ObjectId, id, 24, 40),
				weights,
				more_weights,
				fewer_weights,
			],
			..MeshData::empty(MeshPrimitive::Triangles, 3)
		};
		let text = render(&no_refs(), Category::Mesh, 0, Some("Doubled"), vec![Record::Mesh(mesh)]);
		assert_eq!(
			text,
			"Mesh 0: Doubled
  Level 0: Triangles, 3 vertices
    Position @ Vector3, offset 0, stride 40
    ObjectId @ UnsignedInt, offset 12, stride 40
    ObjectId @ UnsignedShort, offset 16, stride 40
    Position @ Vector3, offset 16, stride 40 [duplicate]
    ObjectId @ UnsignedInt, offset 24, stride 40 [duplicate]
    Custom(7) @ UnsignedByte[4], offset 28, stride 40
    Custom(7) @ UnsignedByte[4], offset 32, stride 40 [duplicate]
    Custom(7) @ UnsignedByte[2], offset 36, stride 40"
		);
	}
}

mod texture {
	use super::*;

	#[test]
	fn image_id_is_checked_against_the_sampled_category() {
		let mut texture = TextureData::new(TextureType::Texture2D, SamplerFilter::Linear, SamplerFilter::Nearest, SamplerMipmap::Base, SamplerWrapping::Repeat, 1);
		texture.wrapping = [SamplerWrapping::Repeat, SamplerWrapping::ClampToEdge, SamplerWrapping::MirroredRepeat];
		let refs = ReferenceAnalyzer::new([(Category::Image2D, 1), (Category::Image3D, 2)]);

		assert_eq!(
			render(&refs, Category::Texture, 0, None, vec![Record::Texture(texture.clone())]),
			"Texture 0
  Type: Texture2D, image 1 (out of range)
  Minification: Linear, mipmap Base
  Magnification: Nearest
  Wrapping: {Repeat, ClampToEdge, MirroredRepeat}"
		);

		texture.texture_type = TextureType::Texture3D;
		let text = render(&refs, Category::Texture, 0, None, vec![Record::Texture(texture)]);
		assert!(text.contains("  Type: Texture3D, image 1\n"), "{text}");
	}
}

mod image {
	use super::*;

	#[test]
	fn levels_list_size_format_and_flags() {
		let base = ImageData {
			flags: ImageFlags::ARRAY,
			data_flags: DataFlags::OWNED,
			..ImageData::new(PixelFormat::RGBA8Unorm, vec![4, 2])
		};
		let compressed = ImageData {
			format: ImageFormat::Compressed(CompressedPixelFormat::Bc1RGBAUnorm),
			size: vec![2, 1],
			flags: ImageFlags::empty(),
			data_flags: DataFlags::empty(),
			data_size: 8,
		};
		assert_eq!(
			render(&no_refs(), Category::Image2D, 0, None, vec![Record::Image(base), Record::Image(compressed)]),
			"2D image 0
  Level 0: {4, 2} @ RGBA8Unorm, 32 bytes, Array (Owned)
  Level 1: {2, 1} @ Bc1RGBAUnorm (compressed), 8 bytes"
		);
	}

	#[test]
	fn one_dimensional_size_is_a_scalar() {
		let text = render(&no_refs(), Category::Image1D, 3, Some("Ramp"), vec![Record::Image(ImageData::new(PixelFormat::R8Unorm, vec![16]))]);
		assert_eq!(text, "1D image 3: Ramp\n  Level 0: 16 @ R8Unorm, 16 bytes");
	}
}
