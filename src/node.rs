use crate::convert::{copy_array, copy_pointer_array, ConvertToMat4, ConvertToString};
use russimp_sys::aiNode;

/// A node of the scene graph. The whole subtree is copied.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: Option<String>,
    /// Relative to the parent node.
    pub transformation: glam::Mat4,
    /// Indices into the meshes of the scene.
    pub meshes: Vec<u32>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(c: &aiNode) -> Node {
        Node {
            name: c.mName.to_text(),
            transformation: c.mTransformation.to_mat4(),
            meshes: copy_array(c.mMeshes, c.mNumMeshes, |x| *x),
            children: copy_pointer_array(c.mChildren, c.mNumChildren, Node::new),
        }
    }

    pub fn number_of_children(&self) -> usize {
        self.children.len()
    }

    /// Depth first, parents before children.
    pub fn walk<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Node),
    {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Node> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|x| x.find(name))
    }
}
