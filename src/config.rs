//! Keys of the import properties understood by the engine.

use std::ffi::CStr;

/// Logs the time spent in each import step.
pub const AI_CONFIG_GLOB_MEASURE_TIME: &CStr = c"GLOB_MEASURE_TIME";
pub const AI_CONFIG_IMPORT_NO_SKELETON_MESHES: &CStr = c"IMPORT_NO_SKELETON_MESHES";
/// Degrees, for `CalcTangentSpace`.
pub const AI_CONFIG_PP_CT_MAX_SMOOTHING_ANGLE: &CStr = c"PP_CT_MAX_SMOOTHING_ANGLE";
pub const AI_CONFIG_FBX_USE_SKELETON_BONE_CONTAINER: &CStr =
    c"AI_CONFIG_FBX_USE_SKELETON_BONE_CONTAINER";
/// A `PrimitiveTypes` mask of primitives `SortByPType` drops.
pub const AI_CONFIG_PP_SBP_REMOVE: &CStr = c"PP_SBP_REMOVE";
pub const AI_CONFIG_PP_LBW_MAX_WEIGHTS: &CStr = c"PP_LBW_MAX_WEIGHTS";
