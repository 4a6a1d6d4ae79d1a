use crate::{
    bone::Bone,
    convert::{copy_array, copy_pointer_array, ConvertToString, ConvertToVec3, ConvertToVec4},
    face::Face,
    primitive_type::PrimitiveTypes,
};
use russimp_sys::aiMesh;

// Optional vertex channels are null when the mesh does not carry them.
fn copy_vertex_channel<T, U>(
    raw_source: *const T,
    number_of_vertices: u32,
    f: impl FnMut(&T) -> U,
) -> Vec<U> {
    if raw_source.is_null() {
        vec![]
    } else {
        copy_array(raw_source, number_of_vertices, f)
    }
}

#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: Option<String>,
    pub primitive_types: PrimitiveTypes,
    pub vertices: Vec<glam::Vec3>,
    pub normals: Vec<glam::Vec3>,
    pub tangents: Vec<glam::Vec3>,
    pub bitangents: Vec<glam::Vec3>,
    /// Only the channels that exist, in channel order.
    pub texture_coords: Vec<Vec<glam::Vec3>>,
    /// Number of meaningful components of each entry of `texture_coords`.
    pub number_of_uv_components: Vec<u32>,
    pub colors: Vec<Vec<glam::Vec4>>,
    pub faces: Vec<Face>,
    pub bones: Vec<Bone>,
    pub material_index: u32,
}

impl Mesh {
    pub fn new(c: &aiMesh) -> Mesh {
        let number_of_vertices = c.mNumVertices;

        let mut texture_coords = vec![];
        let mut number_of_uv_components = vec![];
        for (ai_texture_coords, components) in c.mTextureCoords.iter().zip(c.mNumUVComponents) {
            if ai_texture_coords.is_null() {
                continue;
            }
            texture_coords.push(copy_array(*ai_texture_coords, number_of_vertices, |x| {
                x.to_vec3()
            }));
            number_of_uv_components.push(components);
        }

        let colors = c
            .mColors
            .iter()
            .filter(|x| !x.is_null())
            .map(|x| copy_array(*x, number_of_vertices, |x| x.to_vec4()))
            .collect();

        Mesh {
            name: c.mName.to_text(),
            primitive_types: PrimitiveTypes::from_bits_retain(c.mPrimitiveTypes),
            vertices: copy_array(c.mVertices, number_of_vertices, |x| x.to_vec3()),
            normals: copy_vertex_channel(c.mNormals, number_of_vertices, |x| x.to_vec3()),
            tangents: copy_vertex_channel(c.mTangents, number_of_vertices, |x| x.to_vec3()),
            bitangents: copy_vertex_channel(c.mBitangents, number_of_vertices, |x| x.to_vec3()),
            texture_coords,
            number_of_uv_components,
            colors,
            faces: copy_array(c.mFaces, c.mNumFaces, Face::new),
            bones: copy_pointer_array(c.mBones, c.mNumBones, Bone::new),
            material_index: c.mMaterialIndex,
        }
    }

    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn number_of_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn number_of_bones(&self) -> usize {
        self.bones.len()
    }

    /// Face indices flattened, for meshes that only contain triangles.
    pub fn triangle_indices(&self) -> Option<Vec<u32>> {
        if self.faces.iter().any(|x| x.indices.len() != 3) {
            return None;
        }
        Some(self.faces.iter().flat_map(|x| x.indices.clone()).collect())
    }
}

#[cfg(test)]
mod test {
    use super::Mesh;
    use crate::{convert::make_ai_string, primitive_type::PrimitiveTypes};
    use russimp_sys::{aiBone, aiFace, aiMesh, aiVector3D};

    fn vector(x: f32, y: f32, z: f32) -> aiVector3D {
        aiVector3D { x, y, z }
    }

    #[test]
    fn copies_triangle() {
        let mut vertices = vec![
            vector(0.0, 0.0, 0.0),
            vector(1.0, 0.0, 0.0),
            vector(0.0, 1.0, 0.0),
        ];
        let mut uvs = vec![
            vector(0.0, 0.0, 0.0),
            vector(1.0, 0.0, 0.0),
            vector(0.0, 1.0, 0.0),
        ];
        let mut indices = vec![0u32, 1, 2];
        let mut faces = vec![aiFace {
            mNumIndices: 3,
            mIndices: indices.as_mut_ptr(),
        }];
        let mut bone: aiBone = unsafe { std::mem::zeroed() };
        bone.mName = make_ai_string("Hips");
        let mut bones: Vec<*mut aiBone> = vec![&mut bone as *mut aiBone, std::ptr::null_mut()];

        let mut native: aiMesh = unsafe { std::mem::zeroed() };
        native.mName = make_ai_string("Triangle");
        native.mPrimitiveTypes = PrimitiveTypes::Triangle.bits();
        native.mNumVertices = 3;
        native.mVertices = vertices.as_mut_ptr();
        native.mTextureCoords[1] = uvs.as_mut_ptr();
        native.mNumUVComponents[1] = 2;
        native.mNumFaces = 1;
        native.mFaces = faces.as_mut_ptr();
        native.mNumBones = 2;
        native.mBones = bones.as_mut_ptr();
        native.mMaterialIndex = 3;

        let mesh = Mesh::new(&native);
        drop(faces);
        drop(indices);
        drop(uvs);
        drop(vertices);

        assert_eq!(mesh.name.as_deref(), Some("Triangle"));
        assert_eq!(mesh.primitive_types, PrimitiveTypes::Triangle);
        assert_eq!(mesh.number_of_vertices(), 3);
        assert_eq!(mesh.vertices[1], glam::vec3(1.0, 0.0, 0.0));
        assert!(mesh.normals.is_empty());
        assert!(mesh.colors.is_empty());
        assert_eq!(mesh.texture_coords.len(), 1);
        assert_eq!(mesh.number_of_uv_components, vec![2]);
        assert_eq!(mesh.texture_coords[0][2], glam::vec3(0.0, 1.0, 0.0));
        assert_eq!(mesh.triangle_indices(), Some(vec![0, 1, 2]));
        assert_eq!(mesh.number_of_bones(), 1);
        assert_eq!(mesh.bones[0].name.as_deref(), Some("Hips"));
        assert_eq!(mesh.material_index, 3);
    }
}
