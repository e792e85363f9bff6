use thiserror::Error;

/// Contract violations reported by the engine and its value types.
///
/// Boundary conditions that are policy decisions (clamping an out-of-range index, ignoring a
/// zero-duration drag sample) are never reported as errors.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum SnapError {
    /// `pop`/`shift_front` was called while the host holds no cells.
    #[error("the cell collection is empty")]
    EmptyCollection,
    /// A cell width must be finite and strictly positive.
    #[error("invalid cell width {0}; expected a finite value greater than zero")]
    InvalidCellSize(f32),
}
