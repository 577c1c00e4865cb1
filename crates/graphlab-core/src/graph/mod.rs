//! Graph model and storage
//!
//! - `types`: vertices, edges, edge ids, weights and direction policy
//! - `order`: numeric-aware id ordering used by matrix views
//! - `store`: the editable graph with its invariants
//! - `snapshot`: immutable copies handed to algorithm engines
//! - `file`: JSON save/load

pub mod file;
pub mod order;
pub mod snapshot;
pub mod store;
pub mod types;

pub use file::{load, save, GraphFile};
pub use order::{natural_cmp, sort_natural};
pub use snapshot::{Neighbor, Snapshot};
pub use store::GraphStore;
pub use types::{
    format_weight, parse_weight, validate_weight, Direction, Edge, EdgeId, Position, Vertex,
    DEFAULT_WEIGHT,
};
