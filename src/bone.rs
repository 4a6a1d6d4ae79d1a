use crate::{
    convert::{copy_array, ConvertToMat4, ConvertToString},
    vertex_weight::VertexWeight,
};

#[derive(Debug, Clone)]
pub struct Bone {
    /// Multiple bones may affect a single mesh, the name ties the bone to its node.
    pub name: Option<String>,
    /// Transforms from mesh space to bone space in bind pose.
    pub offset_matrix: glam::Mat4,
    pub weights: Vec<VertexWeight>,
}

impl Bone {
    pub fn new(c: &russimp_sys::aiBone) -> Bone {
        let weights = copy_array(c.mWeights, c.mNumWeights, VertexWeight::new);
        Bone {
            name: c.mName.to_text(),
            offset_matrix: c.mOffsetMatrix.to_mat4(),
            weights,
        }
    }

    pub fn number_of_weights(&self) -> usize {
        self.weights.len()
    }
}

#[cfg(test)]
mod test {
    use super::Bone;
    use crate::convert::make_ai_string;
    use russimp_sys::{aiBone, aiVertexWeight};

    fn make_weights(count: u32) -> Vec<aiVertexWeight> {
        (0..count)
            .map(|i| aiVertexWeight {
                mVertexId: i * 2,
                mWeight: 1.0 / (i + 1) as f32,
            })
            .collect()
    }

    #[test]
    fn weights_are_copied() {
        let mut ai_weights = make_weights(4);
        let mut ai_bone: aiBone = unsafe { std::mem::zeroed() };
        ai_bone.mName = make_ai_string("LeftArm");
        ai_bone.mNumWeights = ai_weights.len() as _;
        ai_bone.mWeights = ai_weights.as_mut_ptr();
        ai_bone.mOffsetMatrix.a1 = 1.0;
        ai_bone.mOffsetMatrix.b2 = 1.0;
        ai_bone.mOffsetMatrix.c3 = 1.0;
        ai_bone.mOffsetMatrix.d4 = 1.0;

        let bone = Bone::new(&ai_bone);
        drop(ai_weights);

        assert_eq!(bone.name.as_deref(), Some("LeftArm"));
        assert_eq!(bone.offset_matrix, glam::Mat4::IDENTITY);
        assert_eq!(bone.number_of_weights(), 4);
        assert_eq!(bone.weights[3].vertex_id, 6);
        assert_eq!(bone.weights[3].weight, 0.25);
    }

    #[test]
    fn missing_weight_storage_is_empty() {
        let mut ai_bone: aiBone = unsafe { std::mem::zeroed() };
        ai_bone.mNumWeights = 8;
        let bone = Bone::new(&ai_bone);
        assert_eq!(bone.name, None);
        assert_eq!(bone.number_of_weights(), 0);
    }
}
