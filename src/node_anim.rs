use crate::{
    anim_behaviour::EAnimBehaviour,
    convert::{copy_array, ConvertToString},
    quat_key::QuatKey,
    vector_key::VectorKey,
};

/// Transformations of a single node over time.
#[derive(Debug, Clone)]
pub struct NodeAnimation {
    /// The node affected by this channel. The node must exist and its name must be unique.
    pub node_name: Option<String>,
    pub position_keys: Vec<VectorKey>,
    pub rotation_keys: Vec<QuatKey>,
    pub scaling_keys: Vec<VectorKey>,
    /// Behaviour before the first key.
    pub pre_state: EAnimBehaviour,
    /// Behaviour after the last key.
    pub post_state: EAnimBehaviour,
}

impl NodeAnimation {
    pub fn new(c: &russimp_sys::aiNodeAnim) -> NodeAnimation {
        NodeAnimation {
            node_name: c.mNodeName.to_text(),
            position_keys: copy_array(c.mPositionKeys, c.mNumPositionKeys, VectorKey::new),
            rotation_keys: copy_array(c.mRotationKeys, c.mNumRotationKeys, QuatKey::new),
            scaling_keys: copy_array(c.mScalingKeys, c.mNumScalingKeys, VectorKey::new),
            pre_state: c.mPreState.into(),
            post_state: c.mPostState.into(),
        }
    }

    pub fn number_of_position_keys(&self) -> usize {
        self.position_keys.len()
    }

    pub fn number_of_rotation_keys(&self) -> usize {
        self.rotation_keys.len()
    }

    pub fn number_of_scaling_keys(&self) -> usize {
        self.scaling_keys.len()
    }
}

impl std::fmt::Display for NodeAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NodeAnimation(node_name: '{}'; position_keys: {}; rotation_keys: {}; scaling_keys: {})",
            self.node_name.as_deref().unwrap_or_default(),
            self.number_of_position_keys(),
            self.number_of_rotation_keys(),
            self.number_of_scaling_keys()
        )
    }
}
