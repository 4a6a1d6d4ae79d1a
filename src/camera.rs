use crate::convert::{ConvertToString, ConvertToVec3};

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// There is a node in the scene graph with the same name, it places and animates the camera.
    pub name: Option<String>,
    /// Relative to the coordinate space defined by the corresponding node. Default 0|0|0.
    pub position: glam::Vec3,
    /// Default 0|1|0, not necessarily normalized.
    pub up: glam::Vec3,
    /// Viewing direction. Default 0|0|1, not necessarily normalized.
    pub look_at: glam::Vec3,
    /// Half horizontal field of view angle, in radians. Default 1/4 PI.
    pub horizontal_fov: f32,
    /// Default 0.1.
    pub clip_plane_near: f32,
    /// Default 1000.
    pub clip_plane_far: f32,
    /// Width / height of the screen, 0 if the file does not define it.
    pub aspect: f32,
    /// Half width of the orthographic view box. 0 means a perspective camera.
    pub orthographic_width: f32,
}

impl Camera {
    pub fn new(c: &russimp_sys::aiCamera) -> Camera {
        Camera {
            name: c.mName.to_text(),
            position: c.mPosition.to_vec3(),
            up: c.mUp.to_vec3(),
            look_at: c.mLookAt.to_vec3(),
            horizontal_fov: c.mHorizontalFOV,
            clip_plane_near: c.mClipPlaneNear,
            clip_plane_far: c.mClipPlaneFar,
            aspect: c.mAspect,
            orthographic_width: c.mOrthographicWidth,
        }
    }

    pub fn is_orthographic(&self) -> bool {
        self.orthographic_width != 0.0
    }
}
