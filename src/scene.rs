use crate::{
    animation::Animation,
    camera::Camera,
    convert::{copy_array, copy_pointer_array, ConvertToString},
    error::{AssimpError, Error, Result},
    get_assimp_error,
    material::Material,
    mesh::Mesh,
    node::Node,
    post_process_steps::PostProcessSteps,
    progress::{progress_trampoline, ProgressToken},
    progress_io::{self, read_file_with_progress},
    property_store::PropertyStore,
};
use russimp_sys::*;
use std::{ffi::CString, path::Path};

const AI_SCENE_FLAGS_INCOMPLETE: u32 = 0x1;

fn path_to_cstring(path: &Path) -> Result<CString> {
    let path = path.as_os_str().as_encoded_bytes();
    Ok(CString::new(path)?)
}

/// Null entries of the material array are skipped.
fn native_materials(c: &aiScene) -> Vec<&aiMaterial> {
    copy_array(c.mMaterials, c.mNumMaterials, |x| *x)
        .into_iter()
        .filter_map(|x| unsafe { x.as_ref() })
        .collect()
}

/// An imported scene.
///
/// Meshes, animations, cameras and the node tree are copied when the scene is imported. The
/// native scene is kept for the materials and released on drop.
pub struct Scene {
    c: *const aiScene,
    pub name: Option<String>,
    pub flags: u32,
    pub meshes: Vec<Mesh>,
    pub animations: Vec<Animation>,
    pub cameras: Vec<Camera>,
    pub root_node: Option<Node>,
}

impl Scene {
    /// `None` for a null scene. Otherwise the scene takes ownership of `ai_scene`.
    unsafe fn new(ai_scene: *const aiScene) -> Option<Scene> {
        let c = unsafe { ai_scene.as_ref() }?;
        let scene = Scene {
            c: ai_scene,
            name: c.mName.to_text(),
            flags: c.mFlags,
            meshes: copy_pointer_array(c.mMeshes, c.mNumMeshes, Mesh::new),
            animations: copy_pointer_array(c.mAnimations, c.mNumAnimations, Animation::new),
            cameras: copy_pointer_array(c.mCameras, c.mNumCameras, Camera::new),
            root_node: unsafe { c.mRootNode.as_ref() }.map(Node::new),
        };
        log::debug!("{scene}");
        Some(scene)
    }

    pub fn from_file<P: AsRef<Path>>(path: P, flags: PostProcessSteps) -> Result<Scene> {
        let path = path_to_cstring(path.as_ref())?;
        log::trace!("Import {:?}", path);
        unsafe {
            let ai_scene = aiImportFile(path.as_ptr(), flags.bits());
            Self::new(ai_scene).ok_or_else(|| Error::Assimp(get_assimp_error()))
        }
    }

    pub fn from_file_with_properties<P: AsRef<Path>>(
        path: P,
        flags: PostProcessSteps,
        props: &PropertyStore,
    ) -> Result<Scene> {
        let path = path_to_cstring(path.as_ref())?;
        log::trace!("Import {:?} with properties", path);
        unsafe {
            let ai_scene = aiImportFileExWithProperties(
                path.as_ptr(),
                flags.bits(),
                std::ptr::null_mut(),
                props.as_ptr(),
            );
            Self::new(ai_scene).ok_or_else(|| Error::Assimp(get_assimp_error()))
        }
    }

    /// Imports `path` and reports the progress in [0, 1] to `progress`.
    ///
    /// Returning `false` from `progress` cancels the import, which then fails. A panic in
    /// `progress` cancels the import and is resumed once the native import has returned.
    pub fn from_file_with_progress<P, F>(
        path: P,
        flags: PostProcessSteps,
        progress: Option<F>,
    ) -> Result<Scene>
    where
        P: AsRef<Path>,
        F: FnMut(f32) -> bool,
    {
        let Some(progress) = progress else {
            return Self::from_file(path, flags);
        };
        let path = path_to_cstring(path.as_ref())?;
        let mut token = ProgressToken::new(progress);
        let ai_scene = unsafe {
            read_file_with_progress(
                path.as_ptr(),
                flags.bits(),
                Some(progress_trampoline),
                token.user_data(),
                std::ptr::null(),
            )
        };
        let scene = unsafe { Self::new(ai_scene) };
        let panic = token.take_panic();
        drop(token);
        if let Some(payload) = panic {
            drop(scene);
            std::panic::resume_unwind(payload);
        }
        scene.ok_or_else(|| match progress_io::last_error() {
            Some(message) => Error::Assimp(AssimpError::Import(message)),
            None => Error::Assimp(get_assimp_error()),
        })
    }

    /// Materials borrow the native scene.
    pub fn materials(&self) -> Vec<Material<'_>> {
        let Some(c) = (unsafe { self.c.as_ref() }) else {
            return vec![];
        };
        native_materials(c)
            .into_iter()
            .map(Material::borrow_from)
            .collect()
    }

    /// Same count as [`Scene::materials`].
    pub fn number_of_materials(&self) -> usize {
        unsafe { self.c.as_ref() }.map_or(0, |x| native_materials(x).len())
    }

    pub fn is_incomplete(&self) -> bool {
        self.flags & AI_SCENE_FLAGS_INCOMPLETE != 0
    }

    pub fn animation(&self, name: &str) -> Option<&Animation> {
        self.animations
            .iter()
            .find(|x| x.name.as_deref() == Some(name))
    }
}

impl std::fmt::Display for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scene('{}'; meshes: {}; materials: {}; animations: {}; cameras: {})",
            self.name.as_deref().unwrap_or_default(),
            self.meshes.len(),
            self.number_of_materials(),
            self.animations.len(),
            self.cameras.len()
        )
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("flags", &self.flags)
            .field("meshes", &self.meshes)
            .field("animations", &self.animations)
            .field("cameras", &self.cameras)
            .field("root_node", &self.root_node)
            .finish()
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        unsafe {
            aiReleaseImport(self.c);
        }
    }
}
