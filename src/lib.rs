//! Delta-stepping single-source shortest paths (Meyer & Sanders).
//!
//! Vertices are grouped into buckets of width `delta` by tentative distance.
//! Buckets are drained in increasing index order: light edges (`w <= delta`)
//! are relaxed to a fixed point inside the bucket, then heavy edges
//! (`w > delta`) are relaxed once from every vertex the bucket held.
//!
//! ```
//! use delta_stepping::{delta_stepping, DeltaSteppingConfig, Graph};
//!
//! let g = Graph::from_edges(3, [(0u32, 1u32, 4u64), (1, 2, 3), (0, 2, 10)])?;
//! let sp = delta_stepping(&g, DeltaSteppingConfig::default())?;
//! assert_eq!(sp.to_vec(), vec![0, 4, 7]);
//! # Ok::<(), delta_stepping::SsspError>(())
//! ```
//!
//! Execution is sequential. Request batches are reduced by per-vertex
//! minimum, so a frontier can be sharded and the batches merged in any order.

pub mod baseline;
pub mod buckets;
pub mod config;
pub mod distance;
pub mod driver;
pub mod edge_list;
pub mod error;
pub mod ffi;
pub mod graph;
pub mod relax;
pub mod requests;

pub use baseline::{dijkstra, validate, Mismatch, ValidationReport};
pub use buckets::{bucket_index_for, Buckets};
pub use config::DeltaSteppingConfig;
pub use distance::DistanceMap;
pub use driver::{delta_stepping, DeltaStepping, RunStats, ShortestPaths};
pub use edge_list::{load_edge_list, parse_edge_list, EdgeList};
pub use error::{Result, SsspError};
pub use ffi::SsspResultInfo;
pub use graph::{Edge, Graph};
pub use relax::RunState;
pub use requests::{find_requests, find_requests_by_tag, requests, EdgeClass, RelaxRequest, RequestBatch};
