//! Error taxonomy for loading, configuring and running delta-stepping.

/// Errors produced by the crate.
///
/// Loading and configuration failures abort a run before the algorithm
/// starts. Unreachable vertices are never an error; they carry the infinity
/// sentinel in the output.
#[derive(Debug, thiserror::Error)]
pub enum SsspError {
    /// A caller passed a value outside the accepted domain (e.g. an unknown edge class tag).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An edge-list line did not have three integer fields.
    #[error("Malformed edge on line {line}: {reason}")]
    MalformedEdge { line: usize, reason: String },

    /// Delta-stepping is only correct for nonnegative weights.
    #[error("Negative edge weight {weight} on line {line} ({from} -> {to})")]
    NegativeWeight { line: usize, from: i64, to: i64, weight: i64 },

    #[error("delta must be positive")]
    NonPositiveDelta,

    #[error("Source vertex {source_vertex} out of range for graph with {vertices} vertices")]
    SourceOutOfRange { source_vertex: u32, vertices: usize },

    #[error("Vertex {vertex} out of range for graph with {vertices} vertices")]
    VertexOutOfRange { vertex: u32, vertices: usize },

    /// A real distance reached the configured infinity sentinel.
    #[error("Distance {distance} of vertex {vertex} is not below the infinity sentinel {infinity}")]
    InfinityTooSmall { vertex: u32, distance: u64, infinity: u64 },

    /// The run observed the cancellation flag before processing `bucket`.
    #[error("Run cancelled before bucket {bucket}")]
    Cancelled { bucket: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl SsspError {
    /// Stable status code used by the C ABI (always negative).
    pub fn code(&self) -> i32 {
        match self {
            SsspError::InvalidArgument(_) => -3,
            SsspError::SourceOutOfRange { .. } => -2,
            SsspError::VertexOutOfRange { .. } => -4,
            SsspError::NonPositiveDelta => -6,
            SsspError::MalformedEdge { .. } => -7,
            SsspError::NegativeWeight { .. } => -8,
            SsspError::InfinityTooSmall { .. } => -9,
            SsspError::Cancelled { .. } => -10,
            SsspError::Io(_) => -11,
            SsspError::Config(_) => -12,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SsspError>;
