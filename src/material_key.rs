use crate::texture_type::TextureType;
use std::ffi::CStr;

/// Identifies one material property: base name, texture type (semantic) and texture index.
///
/// Non texture keys use 0 for both the texture type and the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialKey {
    pub base_name: &'static CStr,
    pub texture_type: u32,
    pub texture_index: u32,
}

macro_rules! material_keys {
    ($($name:ident => $base_name:literal),* $(,)?) => {
        impl MaterialKey {
            $(
                pub const $name: MaterialKey = MaterialKey::new($base_name);
            )*
        }
    };
}

macro_rules! texture_keys {
    ($($name:ident => $base_name:literal),* $(,)?) => {
        impl MaterialKey {
            $(
                pub const fn $name(texture_type: TextureType, texture_index: u32) -> MaterialKey {
                    MaterialKey::texture_key($base_name, texture_type, texture_index)
                }
            )*
        }
    };
}

material_keys! {
    NAME => c"?mat.name",
    TWOSIDED => c"$mat.twosided",
    SHADING_MODEL => c"$mat.shadingm",
    ENABLE_WIREFRAME => c"$mat.wireframe",
    BLEND_FUNC => c"$mat.blend",
    OPACITY => c"$mat.opacity",
    TRANSPARENCYFACTOR => c"$mat.transparencyfactor",
    BUMPSCALING => c"$mat.bumpscaling",
    SHININESS => c"$mat.shininess",
    REFLECTIVITY => c"$mat.reflectivity",
    SHININESS_STRENGTH => c"$mat.shinpercent",
    REFRACTI => c"$mat.refracti",
    COLOR_DIFFUSE => c"$clr.diffuse",
    COLOR_AMBIENT => c"$clr.ambient",
    COLOR_SPECULAR => c"$clr.specular",
    COLOR_EMISSIVE => c"$clr.emissive",
    COLOR_TRANSPARENT => c"$clr.transparent",
    COLOR_REFLECTIVE => c"$clr.reflective",
    GLOBAL_BACKGROUND_IMAGE => c"?bg.global",
}

texture_keys! {
    texture => c"$tex.file",
    uvw_source => c"$tex.uvwsrc",
    texture_op => c"$tex.op",
    mapping => c"$tex.mapping",
    texture_blend => c"$tex.blend",
    mapping_mode_u => c"$tex.mapmodeu",
    mapping_mode_v => c"$tex.mapmodev",
    texture_flags => c"$tex.flags",
    uv_transform => c"$tex.uvtrafo",
}

impl MaterialKey {
    pub const fn new(base_name: &'static CStr) -> MaterialKey {
        MaterialKey {
            base_name,
            texture_type: 0,
            texture_index: 0,
        }
    }

    pub const fn texture_key(
        base_name: &'static CStr,
        texture_type: TextureType,
        texture_index: u32,
    ) -> MaterialKey {
        MaterialKey {
            base_name,
            texture_type: texture_type as u32,
            texture_index,
        }
    }
}

impl std::fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.base_name.to_string_lossy(),
            self.texture_type,
            self.texture_index
        )
    }
}
