use crate::{
    convert::{copy_pointer_array, ConvertToString},
    node_anim::NodeAnimation,
};

#[derive(Debug, Clone)]
pub struct Animation {
    /// May be empty when the exporting package supports a single animation channel only.
    pub name: Option<String>,
    /// Duration in ticks.
    pub duration: f64,
    /// 0 if the imported file does not specify it.
    pub ticks_per_second: f64,
    pub channels: Vec<NodeAnimation>,
    /// Mesh channels are counted but not wrapped.
    pub number_of_mesh_channels: usize,
    /// Morph mesh channels are counted but not wrapped.
    pub number_of_morph_mesh_channels: usize,
}

impl Animation {
    pub fn new(c: &russimp_sys::aiAnimation) -> Animation {
        let channels = copy_pointer_array(c.mChannels, c.mNumChannels, NodeAnimation::new);
        if channels.len() != c.mNumChannels as usize {
            log::warn!(
                "Animation {:?} reports {} channels, {} are readable",
                c.mName.to_text(),
                c.mNumChannels,
                channels.len()
            );
        }
        Animation {
            name: c.mName.to_text(),
            duration: c.mDuration,
            ticks_per_second: c.mTicksPerSecond,
            channels,
            number_of_mesh_channels: c.mNumMeshChannels as usize,
            number_of_morph_mesh_channels: c.mNumMorphMeshChannels as usize,
        }
    }

    pub fn number_of_channels(&self) -> usize {
        self.channels.len()
    }

    pub fn channel(&self, node_name: &str) -> Option<&NodeAnimation> {
        self.channels
            .iter()
            .find(|x| x.node_name.as_deref() == Some(node_name))
    }
}

impl std::fmt::Display for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Animation('{}'; ticks: {}; channels: {})",
            self.name.as_deref().unwrap_or_default(),
            self.duration,
            self.number_of_channels()
        )
    }
}

#[cfg(test)]
mod test {
    use super::Animation;
    use crate::convert::make_ai_string;
    use russimp_sys::*;

    struct NativeWalk {
        position_keys: Vec<aiVectorKey>,
        _rotation_keys: Vec<aiQuatKey>,
        channel: Box<aiNodeAnim>,
        _channels: Vec<*mut aiNodeAnim>,
        animation: aiAnimation,
    }

    fn make_walk() -> NativeWalk {
        let mut position_keys: Vec<aiVectorKey> = (0..3)
            .map(|i| aiVectorKey {
                mTime: i as f64 * 15.0,
                mValue: aiVector3D {
                    x: i as f32,
                    y: 0.0,
                    z: 0.0,
                },
                ..unsafe { std::mem::zeroed() }
            })
            .collect();
        let mut rotation_keys: Vec<aiQuatKey> = vec![aiQuatKey {
            mTime: 0.0,
            mValue: aiQuaternion {
                w: 1.0,
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            ..unsafe { std::mem::zeroed() }
        }];

        let mut channel: Box<aiNodeAnim> = Box::new(unsafe { std::mem::zeroed() });
        channel.mNodeName = make_ai_string("Hips");
        channel.mNumPositionKeys = position_keys.len() as _;
        channel.mPositionKeys = position_keys.as_mut_ptr();
        channel.mNumRotationKeys = rotation_keys.len() as _;
        channel.mRotationKeys = rotation_keys.as_mut_ptr();

        let mut channels = vec![channel.as_mut() as *mut aiNodeAnim];

        let mut animation: aiAnimation = unsafe { std::mem::zeroed() };
        animation.mName = make_ai_string("Walk");
        animation.mDuration = 30.0;
        animation.mTicksPerSecond = 24.0;
        animation.mNumChannels = 1;
        animation.mChannels = channels.as_mut_ptr();

        NativeWalk {
            position_keys,
            _rotation_keys: rotation_keys,
            channel,
            _channels: channels,
            animation,
        }
    }

    #[test]
    fn walk_animation() {
        let native = make_walk();
        let animation = Animation::new(&native.animation);

        assert_eq!(animation.name.as_deref(), Some("Walk"));
        assert_eq!(animation.duration, 30.0);
        assert_eq!(animation.ticks_per_second, 24.0);
        assert_eq!(animation.number_of_channels(), 1);
        let channel = &animation.channels[0];
        assert_eq!(channel.node_name.as_deref(), Some("Hips"));
        assert_eq!(channel.number_of_position_keys(), 3);
        assert_eq!(channel.number_of_rotation_keys(), 1);
        assert_eq!(channel.number_of_scaling_keys(), 0);
        assert!(animation.channel("Hips").is_some());
        assert!(animation.channel("Head").is_none());
        assert_eq!(animation.to_string(), "Animation('Walk'; ticks: 30; channels: 1)");
    }

    #[test]
    fn channels_survive_native_release() {
        let mut native = make_walk();
        let animation = Animation::new(&native.animation);

        for key in native.position_keys.iter_mut() {
            key.mValue.x = -100.0;
        }
        native.channel.mNumPositionKeys = 0;
        drop(native);

        let channel = &animation.channels[0];
        assert_eq!(channel.number_of_position_keys(), 3);
        assert_eq!(channel.position_keys[2].time, 30.0);
        assert_eq!(channel.position_keys[2].value, glam::vec3(2.0, 0.0, 0.0));
        assert_eq!(channel.rotation_keys[0].value, glam::Quat::IDENTITY);
    }

    #[test]
    fn missing_channel_storage_is_empty() {
        let mut ai_animation: aiAnimation = unsafe { std::mem::zeroed() };
        ai_animation.mNumChannels = 4;
        ai_animation.mNumMeshChannels = 2;
        let animation = Animation::new(&ai_animation);
        assert_eq!(animation.name, None);
        assert_eq!(animation.number_of_channels(), 0);
        assert_eq!(animation.number_of_mesh_channels, 2);
        assert_eq!(animation.number_of_morph_mesh_channels, 0);
    }
}
