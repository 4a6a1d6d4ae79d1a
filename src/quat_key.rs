use crate::convert::ConvertToQuat;

/// A rotation key. The native quaternion is stored as (w, x, y, z), `value` is glam's (x, y, z, w).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuatKey {
    pub time: f64,
    pub value: glam::Quat,
}

impl QuatKey {
    pub fn new(c: &russimp_sys::aiQuatKey) -> QuatKey {
        QuatKey {
            time: c.mTime,
            value: c.mValue.to_quat(),
        }
    }
}
