use bitflags::bitflags;
use russimp_sys::*;

bitflags! {
    /// The kinds of primitives a mesh contains.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PrimitiveTypes: u32 {
        const Point = aiPrimitiveType_aiPrimitiveType_POINT as _;
        const Line = aiPrimitiveType_aiPrimitiveType_LINE as _;
        const Triangle = aiPrimitiveType_aiPrimitiveType_TRIANGLE as _;
        const Polygon = aiPrimitiveType_aiPrimitiveType_POLYGON as _;
        /// Polygons are stored as triangle fans.
        const NgonEncodingFlag = aiPrimitiveType_aiPrimitiveType_NGONEncodingFlag as _;
    }
}
