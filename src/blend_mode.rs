use russimp_sys::*;

/// How the final colour of a pixel is computed from the previous colour in the frame buffer.
///
/// `SourceColor * SourceBlend + DestColor * DestBlend`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EBlendMode {
    /// `SourceColor * SourceAlpha + DestColor * (1 - SourceAlpha)`
    Default,
    /// `SourceColor * 1 + DestColor * 1`
    Additive,
}

impl TryFrom<i32> for EBlendMode {
    type Error = &'static str;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value == aiBlendMode_aiBlendMode_Default as i32 {
            Ok(EBlendMode::Default)
        } else if value == aiBlendMode_aiBlendMode_Additive as i32 {
            Ok(EBlendMode::Additive)
        } else {
            Err("Not a valid value.")
        }
    }
}
