use russimp_sys::*;
use strum_macros::EnumIter;

/// How a channel behaves before its first key and after its last key.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Default)]
pub enum EAnimBehaviour {
    #[default]
    Default,
    Constant,
    Linear,
    Repeat,
}

impl From<aiAnimBehaviour> for EAnimBehaviour {
    fn from(ai_anim_behaviour: aiAnimBehaviour) -> Self {
        if ai_anim_behaviour == aiAnimBehaviour_aiAnimBehaviour_CONSTANT {
            EAnimBehaviour::Constant
        } else if ai_anim_behaviour == aiAnimBehaviour_aiAnimBehaviour_LINEAR {
            EAnimBehaviour::Linear
        } else if ai_anim_behaviour == aiAnimBehaviour_aiAnimBehaviour_REPEAT {
            EAnimBehaviour::Repeat
        } else {
            EAnimBehaviour::Default
        }
    }
}

#[cfg(test)]
mod test {
    use super::EAnimBehaviour;
    use russimp_sys::*;

    #[test]
    fn native_values_map() {
        assert_eq!(
            EAnimBehaviour::from(aiAnimBehaviour_aiAnimBehaviour_DEFAULT),
            EAnimBehaviour::Default
        );
        assert_eq!(
            EAnimBehaviour::from(aiAnimBehaviour_aiAnimBehaviour_CONSTANT),
            EAnimBehaviour::Constant
        );
        assert_eq!(
            EAnimBehaviour::from(aiAnimBehaviour_aiAnimBehaviour_LINEAR),
            EAnimBehaviour::Linear
        );
        assert_eq!(
            EAnimBehaviour::from(aiAnimBehaviour_aiAnimBehaviour_REPEAT),
            EAnimBehaviour::Repeat
        );
    }

    #[test]
    fn unknown_value_falls_back_to_default() {
        assert_eq!(
            EAnimBehaviour::from(0x7f as aiAnimBehaviour),
            EAnimBehaviour::Default
        );
    }
}
