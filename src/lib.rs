pub mod anim_behaviour;
pub mod animation;
pub mod blend_mode;
pub mod bone;
pub mod camera;
pub mod config;
pub mod convert;
pub mod error;
pub mod face;
pub mod material;
pub mod material_key;
pub mod mesh;
pub mod node;
pub mod node_anim;
pub mod post_process_steps;
pub mod primitive_type;
pub mod progress;
pub mod progress_io;
pub mod property_store;
pub mod quat_key;
pub mod scene;
pub mod shading_mode;
pub mod texture_type;
pub mod vector_key;
pub mod vertex_weight;

fn get_assimp_error_string() -> String {
    let error_buf = unsafe { russimp_sys::aiGetErrorString() };
    if error_buf.is_null() {
        return "Unknown import error".to_string();
    }
    let error = unsafe { std::ffi::CStr::from_ptr(error_buf) }
        .to_string_lossy()
        .to_string();
    if error.is_empty() {
        "Unknown import error".to_string()
    } else {
        error
    }
}

fn get_assimp_error() -> crate::error::AssimpError {
    crate::error::AssimpError::Import(get_assimp_error_string())
}
