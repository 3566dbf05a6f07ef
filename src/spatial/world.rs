use smallvec::SmallVec;

use crate::math::{Matrix3, Matrix4, Quaternion, Vector3};

use super::graph::SceneGraph;
use super::node::NodeId;
use super::transform::Transform;

impl SceneGraph {
    /// Gets the transform in local space.
    #[inline]
    pub fn local_transform(&self, id: NodeId) -> Option<Transform> {
        self.node(id).map(|v| *v.transform())
    }

    /// Sets the transform in local space.
    #[inline]
    pub fn set_local_transform(&mut self, id: NodeId, transform: Transform) {
        if let Some(node) = self.node_mut(id) {
            *node.transform_mut() = transform;
        }
    }

    /// Gets position of the transform in local space.
    #[inline]
    pub fn local_position(&self, id: NodeId) -> Option<Vector3<f32>> {
        self.node(id).map(|v| v.transform().position)
    }

    /// Sets position of the transform in local space.
    #[inline]
    pub fn set_local_position<T>(&mut self, id: NodeId, position: T)
    where
        T: Into<Vector3<f32>>,
    {
        if let Some(node) = self.node_mut(id) {
            node.transform_mut().position = position.into();
        }
    }

    /// Gets rotation of the transform in local space.
    #[inline]
    pub fn local_rotation(&self, id: NodeId) -> Option<Quaternion<f32>> {
        self.node(id).map(|v| v.transform().rotation)
    }

    /// Sets rotation of the transform in local space.
    #[inline]
    pub fn set_local_rotation<T>(&mut self, id: NodeId, rotation: T)
    where
        T: Into<Quaternion<f32>>,
    {
        if let Some(node) = self.node_mut(id) {
            node.transform_mut().rotation = rotation.into();
        }
    }

    /// Gets scale of the transform in local space.
    #[inline]
    pub fn local_scale(&self, id: NodeId) -> Option<Vector3<f32>> {
        self.node(id).map(|v| v.transform().scale)
    }

    /// Sets scale of the transform in local space.
    #[inline]
    pub fn set_local_scale<T>(&mut self, id: NodeId, scale: T)
    where
        T: Into<Vector3<f32>>,
    {
        if let Some(node) = self.node_mut(id) {
            node.transform_mut().scale = scale.into();
        }
    }

    /// Returns an iterator of the local transforms of its ancestors, from its
    /// parent up to the root.
    #[inline]
    fn ancestor_transforms<'a>(&'a self, id: NodeId) -> impl Iterator<Item = &'a Transform> + 'a {
        self.ancestors(id)
            .filter_map(move |v| self.node(v).map(|n| n.transform()))
    }
}

impl SceneGraph {
    /// Gets position of the transform in world space.
    pub fn world_position(&self, id: NodeId) -> Option<Vector3<f32>> {
        let local = self.local_position(id)?;
        Some(
            self.ancestor_transforms(id)
                .fold(local, |acc, t| t.transform_point(acc)),
        )
    }

    /// Sets position of the transform in world space.
    pub fn set_world_position<T>(&mut self, id: NodeId, position: T)
    where
        T: Into<Vector3<f32>>,
    {
        let position: Vector3<f32> = position.into();
        let local = match self.parent(id) {
            Some(parent) => self.inverse_transform_point(parent, position),
            None => Some(position),
        };

        if let Some(local) = local {
            self.set_local_position(id, local);
        }
    }

    /// Gets rotation of the transform in world space.
    pub fn world_rotation(&self, id: NodeId) -> Option<Quaternion<f32>> {
        let local = self.local_rotation(id)?;
        Some(
            self.ancestor_transforms(id)
                .fold(local, |acc, t| t.rotation * acc),
        )
    }

    /// Sets rotation of the transform in world space.
    pub fn set_world_rotation<T>(&mut self, id: NodeId, rotation: T)
    where
        T: Into<Quaternion<f32>>,
    {
        let rotation: Quaternion<f32> = rotation.into();
        let local = match self.parent(id) {
            Some(parent) => self.world_rotation(parent).map(|v| v.conjugate() * rotation),
            None => Some(rotation),
        };

        if let Some(local) = local {
            self.set_local_rotation(id, local);
        }
    }

    /// Gets position and rotation of the transform in world space, with one walk
    /// up the ancestor chain.
    pub fn world_position_and_rotation(
        &self,
        id: NodeId,
    ) -> Option<(Vector3<f32>, Quaternion<f32>)> {
        let local = self.local_transform(id)?;
        Some(
            self.ancestor_transforms(id)
                .fold((local.position, local.rotation), |(p, r), t| {
                    (t.transform_point(p), t.rotation * r)
                }),
        )
    }

    /// Gets scale of the transform in world space, as the matrix left after
    /// taking the world rotation out of the accumulated rotation-scale matrix.
    ///
    /// A parent with non-uniform scale under a rotated child introduces shear,
    /// which this composition does not separate out.
    pub fn world_scale(&self, id: NodeId) -> Option<Matrix3<f32>> {
        let rotation = self.world_rotation(id)?;
        let rs = self.world_rotation_scale(id)?;
        Some(Matrix3::from(rotation.conjugate()) * rs)
    }

    /// Gets the accumulated rotation-scale matrix, `... * parent.R * parent.S * R * S`.
    pub fn world_rotation_scale(&self, id: NodeId) -> Option<Matrix3<f32>> {
        let local = self.local_transform(id)?.rotation_scale_matrix();
        Some(
            self.ancestor_transforms(id)
                .fold(local, |acc, t| t.rotation_scale_matrix() * acc),
        )
    }

    /// Transforms position from world space into the local space of `id`.
    pub fn inverse_transform_point<T>(&self, id: NodeId, position: T) -> Option<Vector3<f32>>
    where
        T: Into<Vector3<f32>>,
    {
        let position: Vector3<f32> = position.into();
        let local = self.node(id)?.transform();

        let epsilon = self.params.scale_epsilon;
        let mut chain: SmallVec<[&Transform; 16]> = SmallVec::new();
        chain.push(local);
        chain.extend(self.ancestor_transforms(id));

        // Converts from the root inward.
        Some(
            chain
                .iter()
                .rev()
                .fold(position, |acc, t| t.inverse_transform_point(acc, epsilon)),
        )
    }

    /// Gets the transform matrix in local space, `T * R * S`.
    #[inline]
    pub fn local_matrix(&self, id: NodeId) -> Option<Matrix4<f32>> {
        self.node(id).map(|v| v.transform().matrix())
    }

    /// Gets the transform matrix in world space,
    /// `... * grandparent.local * parent.local * local`.
    pub fn world_matrix(&self, id: NodeId) -> Option<Matrix4<f32>> {
        let local = self.local_matrix(id)?;
        Some(
            self.ancestor_transforms(id)
                .fold(local, |acc, t| t.matrix() * acc),
        )
    }

    /// Gets the transform matrix in world space without scale.
    pub fn world_rt_matrix(&self, id: NodeId) -> Option<Matrix4<f32>> {
        let (position, rotation) = self.world_position_and_rotation(id)?;
        Some(Matrix4::from_translation(position) * Matrix4::from(rotation))
    }
}
