use crate::{
    blend_mode::EBlendMode,
    convert::{copy_array, copy_pointer_array, ConvertToString, ConvertToVec4},
    material_key::MaterialKey,
    shading_mode::EShadingMode,
    texture_type::TextureType,
};
use russimp_sys::*;
use std::cell::OnceCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EPropertyTypeInfo {
    FloatArray,
    DoubleArray,
    String,
    IntegerArray,
    Buffer,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EPropertyTypeValue {
    Buffer(Vec<u8>),
    IntegerArray(Vec<i32>),
    FloatArray(Vec<f32>),
    DoubleArray(Vec<f64>),
    /// `None` when the stored bytes are not a valid length prefixed UTF-8 string.
    String(Option<String>),
}

impl EPropertyTypeInfo {
    pub fn new(t: aiPropertyTypeInfo) -> Option<EPropertyTypeInfo> {
        const AIPROPERTYTYPEINFO_AIPTI_FLOAT: aiPropertyTypeInfo = aiPropertyTypeInfo_aiPTI_Float;
        const AIPROPERTYTYPEINFO_AIPTI_DOUBLE: aiPropertyTypeInfo = aiPropertyTypeInfo_aiPTI_Double;
        const AIPROPERTYTYPEINFO_AIPTI_STRING: aiPropertyTypeInfo = aiPropertyTypeInfo_aiPTI_String;
        const AIPROPERTYTYPEINFO_AIPTI_INTEGER: aiPropertyTypeInfo =
            aiPropertyTypeInfo_aiPTI_Integer;
        const AIPROPERTYTYPEINFO_AIPTI_BUFFER: aiPropertyTypeInfo = aiPropertyTypeInfo_aiPTI_Buffer;
        match t {
            AIPROPERTYTYPEINFO_AIPTI_FLOAT => Some(EPropertyTypeInfo::FloatArray),
            AIPROPERTYTYPEINFO_AIPTI_DOUBLE => Some(EPropertyTypeInfo::DoubleArray),
            AIPROPERTYTYPEINFO_AIPTI_STRING => Some(EPropertyTypeInfo::String),
            AIPROPERTYTYPEINFO_AIPTI_INTEGER => Some(EPropertyTypeInfo::IntegerArray),
            AIPROPERTYTYPEINFO_AIPTI_BUFFER => Some(EPropertyTypeInfo::Buffer),
            _ => None,
        }
    }
}

fn decode_array<T, const N: usize>(data: &[u8], f: fn([u8; N]) -> T) -> Vec<T> {
    data.chunks_exact(N)
        .map(|chunk| {
            let mut bytes = [0u8; N];
            bytes.copy_from_slice(chunk);
            f(bytes)
        })
        .collect()
}

// Strings are stored as a u32 length, the UTF-8 bytes and a terminating NUL.
fn decode_string(data: &[u8]) -> Option<String> {
    let prefix: [u8; 4] = data.get(0..4)?.try_into().ok()?;
    let length = u32::from_ne_bytes(prefix) as usize;
    if length == 0 {
        return None;
    }
    let bytes = data.get(4..4 + length)?;
    std::str::from_utf8(bytes).ok().map(|x| x.to_string())
}

/// A defensive copy of one native material property.
#[derive(Debug, Clone)]
pub struct MaterialProperty {
    pub key: Option<String>,
    /// The texture type for texture properties, 0 otherwise.
    pub semantic: u32,
    /// The texture index for texture properties, 0 otherwise.
    pub index: u32,
    pub property_type_info: Option<EPropertyTypeInfo>,
    pub data: Vec<u8>,
    value: OnceCell<EPropertyTypeValue>,
}

impl MaterialProperty {
    pub fn new(c: &aiMaterialProperty) -> MaterialProperty {
        let key = c.mKey.to_text();
        let property_type_info = EPropertyTypeInfo::new(c.mType);
        if property_type_info.is_none() {
            log::warn!("Material property {:?} has an unknown type", key);
        }
        MaterialProperty {
            key,
            semantic: c.mSemantic,
            index: c.mIndex,
            property_type_info,
            data: copy_array(c.mData as *const u8, c.mDataLength, |x| *x),
            value: OnceCell::new(),
        }
    }

    /// The typed value, specialized on first access.
    pub fn value(&self) -> Option<&EPropertyTypeValue> {
        let property_type_info = self.property_type_info?;
        Some(self.value.get_or_init(|| match property_type_info {
            EPropertyTypeInfo::FloatArray => {
                EPropertyTypeValue::FloatArray(decode_array(&self.data, f32::from_ne_bytes))
            }
            EPropertyTypeInfo::DoubleArray => {
                EPropertyTypeValue::DoubleArray(decode_array(&self.data, f64::from_ne_bytes))
            }
            EPropertyTypeInfo::IntegerArray => {
                EPropertyTypeValue::IntegerArray(decode_array(&self.data, i32::from_ne_bytes))
            }
            EPropertyTypeInfo::String => EPropertyTypeValue::String(decode_string(&self.data)),
            EPropertyTypeInfo::Buffer => EPropertyTypeValue::Buffer(self.data.clone()),
        }))
    }

    pub fn integers(&self) -> Vec<i32> {
        match self.value() {
            Some(EPropertyTypeValue::IntegerArray(values)) => values.clone(),
            Some(EPropertyTypeValue::Buffer(data)) => decode_array(data, i32::from_ne_bytes),
            _ => vec![],
        }
    }

    pub fn first_integer(&self) -> Option<i32> {
        self.integers().first().copied()
    }
}

/// A native material.
///
/// The property records are copied when the material is wrapped, the query functions go to the
/// native material every time they are called.
pub struct Material<'a> {
    c: &'a aiMaterial,
    pub number_of_properties: usize,
    pub number_allocated: usize,
    pub properties: Vec<MaterialProperty>,
}

impl<'a> Material<'a> {
    pub fn borrow_from(c: &'a aiMaterial) -> Material<'a> {
        let properties = copy_pointer_array(c.mProperties, c.mNumProperties, MaterialProperty::new);
        Material {
            c,
            number_of_properties: c.mNumProperties as usize,
            number_allocated: c.mNumAllocated as usize,
            properties,
        }
    }

    pub fn typed_properties(&self) -> impl Iterator<Item = &EPropertyTypeValue> {
        self.properties.iter().filter_map(|x| x.value())
    }

    pub fn get_material_property(&self, key: &MaterialKey) -> Option<MaterialProperty> {
        let mut property: *const aiMaterialProperty = std::ptr::null();
        let status = unsafe {
            aiGetMaterialProperty(
                self.c,
                key.base_name.as_ptr(),
                key.texture_type as _,
                key.texture_index as _,
                &mut property,
            )
        };
        if status != aiReturn_aiReturn_SUCCESS {
            return None;
        }
        unsafe { property.as_ref() }.map(MaterialProperty::new)
    }

    pub fn get_material_texture_count(&self, texture_type: TextureType) -> usize {
        unsafe { aiGetMaterialTextureCount(self.c, texture_type as _) as usize }
    }

    pub fn get_material_texture(&self, texture_type: TextureType, index: u32) -> Option<String> {
        let mut path = aiString {
            length: 0,
            data: [0; 1024],
        };
        let status = unsafe {
            aiGetMaterialTexture(
                self.c,
                texture_type as _,
                index,
                &mut path,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
            )
        };
        if status != aiReturn_aiReturn_SUCCESS {
            return None;
        }
        path.to_text()
    }

    pub fn textures(&self, texture_type: TextureType) -> Vec<String> {
        (0..self.get_material_texture_count(texture_type) as u32)
            .filter_map(|index| self.get_material_texture(texture_type, index))
            .collect()
    }

    pub fn get_material_string(&self, key: &MaterialKey) -> Option<String> {
        let mut string = aiString {
            length: 0,
            data: [0; 1024],
        };
        let status = unsafe {
            aiGetMaterialString(
                self.c,
                key.base_name.as_ptr(),
                key.texture_type as _,
                key.texture_index as _,
                &mut string,
            )
        };
        if status != aiReturn_aiReturn_SUCCESS {
            return None;
        }
        string.to_text()
    }

    pub fn get_material_color(&self, key: &MaterialKey) -> Option<glam::Vec4> {
        let mut color = aiColor4D {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.0,
        };
        let status = unsafe {
            aiGetMaterialColor(
                self.c,
                key.base_name.as_ptr(),
                key.texture_type as _,
                key.texture_index as _,
                &mut color,
            )
        };
        if status != aiReturn_aiReturn_SUCCESS {
            return None;
        }
        Some(color.to_vec4())
    }

    /// At most as many floats as the largest known float property, a uv transform, holds.
    pub fn get_material_float_array(&self, key: &MaterialKey) -> Option<Vec<f32>> {
        let capacity = std::mem::size_of::<aiUVTransform>() / std::mem::size_of::<f32>();
        let mut values = vec![0.0_f32; capacity];
        let mut count = capacity as u32;
        let status = unsafe {
            aiGetMaterialFloatArray(
                self.c,
                key.base_name.as_ptr(),
                key.texture_type as _,
                key.texture_index as _,
                values.as_mut_ptr(),
                &mut count,
            )
        };
        if status != aiReturn_aiReturn_SUCCESS {
            return None;
        }
        values.truncate((count as usize).min(capacity));
        Some(values)
    }

    pub fn get_material_integer_array(&self, key: &MaterialKey) -> Option<Vec<i32>> {
        const CAPACITY: usize = 4;
        let mut values = vec![0_i32; CAPACITY];
        let mut count = CAPACITY as u32;
        let status = unsafe {
            aiGetMaterialIntegerArray(
                self.c,
                key.base_name.as_ptr(),
                key.texture_type as _,
                key.texture_index as _,
                values.as_mut_ptr(),
                &mut count,
            )
        };
        if status != aiReturn_aiReturn_SUCCESS || count == 0 {
            return None;
        }
        values.truncate((count as usize).min(CAPACITY));
        Some(values)
    }

    pub fn name(&self) -> Option<String> {
        self.get_material_string(&MaterialKey::NAME)
    }

    pub fn shading_model(&self) -> Option<EShadingMode> {
        let value = self
            .get_material_property(&MaterialKey::SHADING_MODEL)?
            .first_integer()?;
        Some(EShadingMode::from(value as u32))
    }

    pub fn cull_backfaces(&self) -> Option<bool> {
        let value = self
            .get_material_property(&MaterialKey::TWOSIDED)?
            .first_integer()?;
        Some(value != 1)
    }

    pub fn blend_mode(&self) -> Option<EBlendMode> {
        let value = self
            .get_material_property(&MaterialKey::BLEND_FUNC)?
            .first_integer()?;
        EBlendMode::try_from(value).ok()
    }
}

impl<'a> std::fmt::Debug for Material<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Material")
            .field("number_of_properties", &self.number_of_properties)
            .field("number_allocated", &self.number_allocated)
            .field("properties", &self.properties)
            .finish()
    }
}

impl<'a> std::fmt::Display for Material<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shading = match self.shading_model() {
            Some(shading_model) => shading_model.to_string(),
            None => "<no shading>".to_string(),
        };
        write!(
            f,
            "Material({}; {}; {} diffuse textures)",
            self.name().unwrap_or_else(|| "<no name>".to_string()),
            shading,
            self.get_material_texture_count(TextureType::Diffuse)
        )
    }
}
