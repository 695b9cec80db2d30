use super::shapes::ShapeId;

/// Failures surfaced by the scene core.
///
/// Neither variant is expected during normal use: slider ranges keep particle
/// counts in bounds and both shape generators pad to the exact count. A
/// `TargetCountMismatch` therefore marks a configuration bug and regeneration
/// refuses to commit any state when it occurs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("particle count {count} is outside the supported range {min}..={max}")]
    ParticleCountOutOfRange {
        count: usize,
        min: usize,
        max: usize,
    },
    #[error("{shape} generator produced {actual} points, expected {expected}")]
    TargetCountMismatch {
        shape: ShapeId,
        expected: usize,
        actual: usize,
    },
}
