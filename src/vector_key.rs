use crate::convert::ConvertToVec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorKey {
    pub time: f64,
    pub value: glam::Vec3,
}

impl VectorKey {
    pub fn new(c: &russimp_sys::aiVectorKey) -> VectorKey {
        VectorKey {
            time: c.mTime,
            value: c.mValue.to_vec3(),
        }
    }
}
