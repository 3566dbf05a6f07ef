use inlinable_string::InlinableString;
use smallvec::SmallVec;

use super::transform::Transform;

impl_handle!(NodeId);

pub(crate) type Children = SmallVec<[NodeId; 4]>;

/// `Node` is a vertex of the scene graph. It stores the transform relative to
/// its parent, a display name, and the tree relationships.
///
/// `NodeId` are used to record the tree relationships. Every access requires going
/// through the `SceneGraph`, which owns the nodes. The parent link is only a
/// lookup key, the child list of the parent is the owning side of the relation.
///
/// The links can only be changed through the hierarchy operations of `SceneGraph`,
/// which is what keeps the tree acyclic and the child lists consistent.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: InlinableString,
    pub(crate) transform: Transform,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Children,
    pub(crate) enabled: bool,
}

impl Node {
    pub(crate) fn new(name: &str) -> Self {
        Node {
            name: InlinableString::from(name),
            transform: Transform::default(),
            parent: None,
            children: Children::new(),
            enabled: true,
        }
    }

    /// Gets the display name, which is not required to be unique.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    #[inline]
    pub fn set_name<T: AsRef<str>>(&mut self, name: T) {
        self.name = InlinableString::from(name.as_ref());
    }

    /// Gets the transform in local space.
    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Gets the mutable transform in local space.
    #[inline]
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Gets the parent node.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Gets the children in order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Gets the own enabled flag, regardless of its ancestors.
    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Sets the own enabled flag. Use `traverse::set_enabled` to get notified
    /// about the nodes whose effective enablement changes.
    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns ture if this is the root of a hierarchy, aka. has no parent.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns ture if this is the leaf of a hierarchy, aka. has no child.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
