use bitflags::bitflags;
use russimp_sys::*;

bitflags! {
    /// Post-processing applied by the engine after a file has been read.
    ///
    /// The bits are handed to the engine unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct PostProcessSteps: u32 {
        /// Needs normals.
        const CalcTangentSpace = aiPostProcessSteps_aiProcess_CalcTangentSpace as _;
        const JoinIdenticalVertices = aiPostProcessSteps_aiProcess_JoinIdenticalVertices as _;
        const MakeLeftHanded = aiPostProcessSteps_aiProcess_MakeLeftHanded as _;
        const Triangulate = aiPostProcessSteps_aiProcess_Triangulate as _;
        const RemoveComponent = aiPostProcessSteps_aiProcess_RemoveComponent as _;
        const GenNormals = aiPostProcessSteps_aiProcess_GenNormals as _;
        const GenSmoothNormals = aiPostProcessSteps_aiProcess_GenSmoothNormals as _;
        const SplitLargeMeshes = aiPostProcessSteps_aiProcess_SplitLargeMeshes as _;
        const PreTransformVertices = aiPostProcessSteps_aiProcess_PreTransformVertices as _;
        /// See `AI_CONFIG_PP_LBW_MAX_WEIGHTS`.
        const LimitBoneWeights = aiPostProcessSteps_aiProcess_LimitBoneWeights as _;
        const ValidateDataStructure = aiPostProcessSteps_aiProcess_ValidateDataStructure as _;
        const ImproveCacheLocality = aiPostProcessSteps_aiProcess_ImproveCacheLocality as _;
        const RemoveRedundantMaterials = aiPostProcessSteps_aiProcess_RemoveRedundantMaterials as _;
        const FixInfacingNormals = aiPostProcessSteps_aiProcess_FixInfacingNormals as _;
        const PopulateArmatureData = aiPostProcessSteps_aiProcess_PopulateArmatureData as _;
        /// See `AI_CONFIG_PP_SBP_REMOVE`.
        const SortByPType = aiPostProcessSteps_aiProcess_SortByPType as _;
        const FindDegenerates = aiPostProcessSteps_aiProcess_FindDegenerates as _;
        const FindInvalidData = aiPostProcessSteps_aiProcess_FindInvalidData as _;
        const GenUVCoords = aiPostProcessSteps_aiProcess_GenUVCoords as _;
        const TransformUVCoords = aiPostProcessSteps_aiProcess_TransformUVCoords as _;
        const FindInstances = aiPostProcessSteps_aiProcess_FindInstances as _;
        const OptimizeMeshes = aiPostProcessSteps_aiProcess_OptimizeMeshes as _;
        const OptimizeGraph = aiPostProcessSteps_aiProcess_OptimizeGraph as _;
        const FlipUVs = aiPostProcessSteps_aiProcess_FlipUVs as _;
        const FlipWindingOrder = aiPostProcessSteps_aiProcess_FlipWindingOrder as _;
        const SplitByBoneCount = aiPostProcessSteps_aiProcess_SplitByBoneCount as _;
        const Debone = aiPostProcessSteps_aiProcess_Debone as _;
        const GlobalScale = aiPostProcessSteps_aiProcess_GlobalScale as _;
        const EmbedTextures = aiPostProcessSteps_aiProcess_EmbedTextures as _;
        const ForceGenNormals = aiPostProcessSteps_aiProcess_ForceGenNormals as _;
        const DropNormals = aiPostProcessSteps_aiProcess_DropNormals as _;
        const GenBoundingBoxes = aiPostProcessSteps_aiProcess_GenBoundingBoxes as _;
    }
}

#[allow(non_upper_case_globals)]
impl PostProcessSteps {
    pub const ConvertToLeftHanded: PostProcessSteps = PostProcessSteps::MakeLeftHanded
        .union(PostProcessSteps::FlipUVs)
        .union(PostProcessSteps::FlipWindingOrder);

    pub const TargetRealtimeFast: PostProcessSteps = PostProcessSteps::CalcTangentSpace
        .union(PostProcessSteps::GenNormals)
        .union(PostProcessSteps::JoinIdenticalVertices)
        .union(PostProcessSteps::Triangulate)
        .union(PostProcessSteps::GenUVCoords)
        .union(PostProcessSteps::SortByPType);

    pub const TargetRealtimeQuality: PostProcessSteps = PostProcessSteps::CalcTangentSpace
        .union(PostProcessSteps::GenSmoothNormals)
        .union(PostProcessSteps::JoinIdenticalVertices)
        .union(PostProcessSteps::ImproveCacheLocality)
        .union(PostProcessSteps::LimitBoneWeights)
        .union(PostProcessSteps::RemoveRedundantMaterials)
        .union(PostProcessSteps::SplitLargeMeshes)
        .union(PostProcessSteps::Triangulate)
        .union(PostProcessSteps::GenUVCoords)
        .union(PostProcessSteps::SortByPType)
        .union(PostProcessSteps::FindDegenerates)
        .union(PostProcessSteps::FindInvalidData);

    pub const TargetRealtimeMaxQuality: PostProcessSteps = PostProcessSteps::TargetRealtimeQuality
        .union(PostProcessSteps::FindInstances)
        .union(PostProcessSteps::ValidateDataStructure)
        .union(PostProcessSteps::OptimizeMeshes);

    /// Flags that change how a step behaves instead of naming a step of their own.
    pub const Modifiers: PostProcessSteps = PostProcessSteps::ForceGenNormals;

    /// Every step, in the order the engine runs them.
    pub const PipelineOrder: [PostProcessSteps; 30] = [
        PostProcessSteps::ValidateDataStructure,
        PostProcessSteps::MakeLeftHanded,
        PostProcessSteps::FlipUVs,
        PostProcessSteps::FlipWindingOrder,
        PostProcessSteps::RemoveComponent,
        PostProcessSteps::RemoveRedundantMaterials,
        PostProcessSteps::EmbedTextures,
        PostProcessSteps::FindInstances,
        PostProcessSteps::OptimizeGraph,
        PostProcessSteps::OptimizeMeshes,
        PostProcessSteps::FindDegenerates,
        PostProcessSteps::GenUVCoords,
        PostProcessSteps::TransformUVCoords,
        PostProcessSteps::GlobalScale,
        PostProcessSteps::PopulateArmatureData,
        PostProcessSteps::PreTransformVertices,
        PostProcessSteps::Triangulate,
        PostProcessSteps::SortByPType,
        PostProcessSteps::FindInvalidData,
        PostProcessSteps::FixInfacingNormals,
        PostProcessSteps::SplitByBoneCount,
        PostProcessSteps::SplitLargeMeshes,
        PostProcessSteps::GenNormals,
        PostProcessSteps::GenSmoothNormals,
        PostProcessSteps::CalcTangentSpace,
        PostProcessSteps::JoinIdenticalVertices,
        PostProcessSteps::Debone,
        PostProcessSteps::LimitBoneWeights,
        PostProcessSteps::ImproveCacheLocality,
        PostProcessSteps::GenBoundingBoxes,
    ];
}

impl PostProcessSteps {
    /// Splits the set into single steps in engine order, each carrying the requested modifiers.
    ///
    /// Bits that are not a known step end up together in a last entry.
    pub fn pipeline(self) -> Vec<PostProcessSteps> {
        let modifiers = self.intersection(PostProcessSteps::Modifiers);
        let mut remaining = self.difference(PostProcessSteps::Modifiers);
        let mut pipeline = vec![];
        for step in PostProcessSteps::PipelineOrder
            .into_iter()
            .chain([PostProcessSteps::DropNormals])
        {
            if remaining.contains(step) {
                pipeline.push(step | modifiers);
                remaining.remove(step);
            }
        }
        if !remaining.is_empty() {
            pipeline.push(remaining | modifiers);
        }
        pipeline
    }
}
