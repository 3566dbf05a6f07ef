//! A tree of spatial nodes, each carrying a transform relative to its parent.
//!
//! Nodes are stored in a `SceneGraph` arena and addressed by `NodeId`. The graph
//! answers two kinds of questions:
//!
//! 1. How to restructure the tree, with `set_parent`, `insert_at`, `append`,
//! `remove` and `remove_child`. Every structural mutation checks the ancestor
//! chain first, and is rejected as a whole if it would make a node its own
//! ancestor.
//! 2. Where a node is in world space, with `world_position`, `world_rotation`,
//! `world_scale`, `world_matrix` and friends. Nothing is cached, every query walks
//! the ancestor chain, so results are always up to date.
//!
//! Traversal, cloning and path lookup live in `spatial::traverse`.
//!
//! ```
//! use scene_graph::prelude::*;
//!
//! let mut graph = SceneGraph::new();
//! let root = graph.create("root");
//! let arm = graph.create("arm");
//! let hand = graph.create("hand");
//!
//! assert!(graph.append(root, arm));
//! assert!(graph.append(arm, hand));
//! assert!(!graph.append(hand, root));
//!
//! graph.set_local_position(root, [1.0, 0.0, 0.0]);
//! graph.set_local_position(hand, [0.0, 2.0, 0.0]);
//! assert_eq!(graph.world_position(hand), Some([1.0, 2.0, 0.0].into()));
//! ```

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub extern crate cgmath;
extern crate inlinable_string;
extern crate smallvec;

#[macro_use]
pub mod utils;
pub mod errors;
pub mod math;
pub mod settings;
pub mod spatial;

pub mod prelude {
    pub use crate::errors::{Error, Result};
    pub use crate::settings::SceneGraphParams;
    pub use crate::spatial::prelude::*;
    pub use crate::spatial::traverse;
}
