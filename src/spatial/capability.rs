use crate::math::{Matrix4, Quaternion, Vector3};

use super::graph::SceneGraph;
use super::node::NodeId;
use super::transform::Transform;

/// Gives a host object the node capability by composition. The host keeps the
/// `NodeId` of its node, and every call is forwarded to the `SceneGraph` which
/// owns the node.
///
/// ```
/// use scene_graph::prelude::*;
///
/// struct Camera {
///     node: NodeId,
///     fov: f32,
/// }
///
/// impl Spatial for Camera {
///     fn node(&self) -> NodeId {
///         self.node
///     }
/// }
///
/// let mut graph = SceneGraph::new();
/// let rig = graph.create("rig");
/// let camera = Camera { node: graph.create("camera"), fov: 60.0 };
///
/// assert!(camera.set_parent(&mut graph, rig));
/// assert_eq!(camera.parent(&graph), Some(rig));
/// ```
pub trait Spatial {
    fn node(&self) -> NodeId;

    #[inline]
    fn parent(&self, graph: &SceneGraph) -> Option<NodeId> {
        graph.parent(self.node())
    }

    #[inline]
    fn set_parent<T>(&self, graph: &mut SceneGraph, parent: T) -> bool
    where
        T: Into<Option<NodeId>>,
        Self: Sized,
    {
        graph.set_parent(self.node(), parent)
    }

    #[inline]
    fn remove(&self, graph: &mut SceneGraph) -> bool {
        graph.remove(self.node())
    }

    #[inline]
    fn local_transform(&self, graph: &SceneGraph) -> Option<Transform> {
        graph.local_transform(self.node())
    }

    #[inline]
    fn set_local_transform(&self, graph: &mut SceneGraph, transform: Transform) {
        graph.set_local_transform(self.node(), transform)
    }

    #[inline]
    fn world_position(&self, graph: &SceneGraph) -> Option<Vector3<f32>> {
        graph.world_position(self.node())
    }

    #[inline]
    fn set_world_position(&self, graph: &mut SceneGraph, position: Vector3<f32>) {
        graph.set_world_position(self.node(), position)
    }

    #[inline]
    fn world_rotation(&self, graph: &SceneGraph) -> Option<Quaternion<f32>> {
        graph.world_rotation(self.node())
    }

    #[inline]
    fn set_world_rotation(&self, graph: &mut SceneGraph, rotation: Quaternion<f32>) {
        graph.set_world_rotation(self.node(), rotation)
    }

    #[inline]
    fn world_matrix(&self, graph: &SceneGraph) -> Option<Matrix4<f32>> {
        graph.world_matrix(self.node())
    }
}

impl Spatial for NodeId {
    #[inline]
    fn node(&self) -> NodeId {
        *self
    }
}
