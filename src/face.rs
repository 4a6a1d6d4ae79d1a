use crate::convert::copy_array;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<u32>,
}

impl Face {
    pub fn new(c: &russimp_sys::aiFace) -> Face {
        Face {
            indices: copy_array(c.mIndices, c.mNumIndices, |x| *x),
        }
    }
}
