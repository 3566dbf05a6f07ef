pub mod capability;
pub mod graph;
pub mod node;
pub mod transform;
pub mod traverse;

mod world;

pub mod prelude {
    pub use super::capability::Spatial;
    pub use super::graph::SceneGraph;
    pub use super::node::{Node, NodeId};
    pub use super::transform::Transform;
    pub use super::traverse::Walk;
}
