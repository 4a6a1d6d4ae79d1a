use russimp_sys::*;

/// Shading model of a material. Values the wrapper does not know keep their raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EShadingMode {
    /// Per-face, diffuse only. Also known as faceted shading.
    Flat,
    Gouraud,
    Phong,
    Blinn,
    /// Per pixel, also known as comic shading.
    Toon,
    /// Lambertian shading that takes the roughness into account.
    OrenNayar,
    /// Lambertian shading that takes the darkness into account.
    Minnaert,
    /// For metallic surfaces.
    CookTorrance,
    /// Constant light influence of 1.0.
    NoShading,
    Fresnel,
    Unknown(u32),
}

impl EShadingMode {
    pub fn raw_value(&self) -> u32 {
        match self {
            EShadingMode::Flat => aiShadingMode_aiShadingMode_Flat as _,
            EShadingMode::Gouraud => aiShadingMode_aiShadingMode_Gouraud as _,
            EShadingMode::Phong => aiShadingMode_aiShadingMode_Phong as _,
            EShadingMode::Blinn => aiShadingMode_aiShadingMode_Blinn as _,
            EShadingMode::Toon => aiShadingMode_aiShadingMode_Toon as _,
            EShadingMode::OrenNayar => aiShadingMode_aiShadingMode_OrenNayar as _,
            EShadingMode::Minnaert => aiShadingMode_aiShadingMode_Minnaert as _,
            EShadingMode::CookTorrance => aiShadingMode_aiShadingMode_CookTorrance as _,
            EShadingMode::NoShading => aiShadingMode_aiShadingMode_NoShading as _,
            EShadingMode::Fresnel => aiShadingMode_aiShadingMode_Fresnel as _,
            EShadingMode::Unknown(raw_value) => *raw_value,
        }
    }
}

impl From<u32> for EShadingMode {
    fn from(raw_value: u32) -> Self {
        const FLAT: u32 = aiShadingMode_aiShadingMode_Flat as _;
        const GOURAUD: u32 = aiShadingMode_aiShadingMode_Gouraud as _;
        const PHONG: u32 = aiShadingMode_aiShadingMode_Phong as _;
        const BLINN: u32 = aiShadingMode_aiShadingMode_Blinn as _;
        const TOON: u32 = aiShadingMode_aiShadingMode_Toon as _;
        const OREN_NAYAR: u32 = aiShadingMode_aiShadingMode_OrenNayar as _;
        const MINNAERT: u32 = aiShadingMode_aiShadingMode_Minnaert as _;
        const COOK_TORRANCE: u32 = aiShadingMode_aiShadingMode_CookTorrance as _;
        const NO_SHADING: u32 = aiShadingMode_aiShadingMode_NoShading as _;
        const FRESNEL: u32 = aiShadingMode_aiShadingMode_Fresnel as _;
        match raw_value {
            FLAT => EShadingMode::Flat,
            GOURAUD => EShadingMode::Gouraud,
            PHONG => EShadingMode::Phong,
            BLINN => EShadingMode::Blinn,
            TOON => EShadingMode::Toon,
            OREN_NAYAR => EShadingMode::OrenNayar,
            MINNAERT => EShadingMode::Minnaert,
            COOK_TORRANCE => EShadingMode::CookTorrance,
            NO_SHADING => EShadingMode::NoShading,
            FRESNEL => EShadingMode::Fresnel,
            _ => EShadingMode::Unknown(raw_value),
        }
    }
}

impl std::fmt::Display for EShadingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EShadingMode::Flat => f.write_str("flat"),
            EShadingMode::Gouraud => f.write_str("gouraud"),
            EShadingMode::Phong => f.write_str("phong"),
            EShadingMode::Blinn => f.write_str("blinn"),
            EShadingMode::Toon => f.write_str("toon"),
            EShadingMode::OrenNayar => f.write_str("orenNayar"),
            EShadingMode::Minnaert => f.write_str("minnaert"),
            EShadingMode::CookTorrance => f.write_str("cookTorrance"),
            EShadingMode::NoShading => f.write_str("noShading"),
            EShadingMode::Fresnel => f.write_str("fresnel"),
            EShadingMode::Unknown(raw_value) => write!(f, "ShadingMode<Unknown>({raw_value})"),
        }
    }
}
