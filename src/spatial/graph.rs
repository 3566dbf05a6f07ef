use crate::errors::{Error, Result};
use crate::settings::SceneGraphParams;
use crate::utils::object_pool::ObjectPool;

use super::node::{Node, NodeId};

/// A simple scene graph that used to store and manipulate the postiion, rotation and scale
/// of the object. We do also keeps a tree relationships betweens object in scene graph, so
/// you can access properties of transformation in both local and world space.
///
/// World space properties are never cached, every query walks up the ancestor chain.
pub struct SceneGraph {
    nodes: ObjectPool<NodeId, Node>,
    pub(crate) params: SceneGraphParams,
}

impl Default for SceneGraph {
    fn default() -> Self {
        SceneGraph::new()
    }
}

impl SceneGraph {
    pub fn new() -> Self {
        SceneGraph::with_params(SceneGraphParams::default())
    }

    pub fn with_params(params: SceneGraphParams) -> Self {
        SceneGraph {
            nodes: ObjectPool::with_capacity(params.capacity),
            params,
        }
    }

    #[inline]
    pub fn params(&self) -> &SceneGraphParams {
        &self.params
    }

    /// Creates a standalone node with identity transform.
    pub fn create<T: AsRef<str>>(&mut self, name: T) -> NodeId {
        self.nodes.create(Node::new(name.as_ref()))
    }

    /// Removes a node and all of its descendants from `SceneGraph`. Returns the
    /// removed nodes in tree order, or `None` if `id` is not alive.
    pub fn delete(&mut self, id: NodeId) -> Option<Vec<NodeId>> {
        if !self.contains(id) {
            return None;
        }

        self.remove(id);

        let mut removes = vec![id];
        removes.extend(self.descendants(id));
        for &v in &removes {
            self.nodes.free(v);
        }

        Some(removes)
    }

    /// Returns true if `id` is alive in this `SceneGraph`.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    /// Returns the number of alive nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Gets the mutable node. Only the name and local transform could be changed
    /// through it, use the hierarchy operations to restructure the tree.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Returns an iterator over all the nodes that have no parent.
    pub fn roots<'a>(&'a self) -> impl Iterator<Item = NodeId> + 'a {
        let nodes = &self.nodes;
        nodes
            .iter()
            .filter(move |&v| nodes.get(v).map(|n| n.is_root()).unwrap_or(false))
    }

    #[inline]
    fn get(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or(Error::NodeNotFound(id))
    }
}

impl SceneGraph {
    #[inline]
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(|v| v.name())
    }

    #[inline]
    pub fn set_name<T: AsRef<str>>(&mut self, id: NodeId, name: T) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.set_name(name);
        }
    }

    /// Gets the parent node.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|v| v.parent)
    }

    /// Gets the children in order. Absent nodes have no children.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(|v| v.children()).unwrap_or(&[])
    }

    /// Returns ture if this is the leaf of a hierarchy, aka. has no child.
    #[inline]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes.get(id).map(|v| v.is_leaf()).unwrap_or(false)
    }

    /// Returns ture if this is the root of a hierarchy, aka. has no parent.
    #[inline]
    pub fn is_root(&self, id: NodeId) -> bool {
        self.nodes.get(id).map(|v| v.is_root()).unwrap_or(false)
    }

    /// Returns an iterator of its ancestors, from its parent up to the root.
    #[inline]
    pub fn ancestors(&self, id: NodeId) -> Ancestors {
        Ancestors {
            cursor: self.parent(id),
            scene: self,
        }
    }

    /// Return true if rhs is one of the ancestor of lhs.
    #[inline]
    pub fn is_ancestor(&self, lhs: NodeId, rhs: NodeId) -> bool {
        self.ancestors(lhs).any(|v| v == rhs)
    }

    /// Returns an iterator of its descendants in depth-first pre-order.
    #[inline]
    pub fn descendants(&self, id: NodeId) -> Descendants {
        let mut stack: Vec<NodeId> = Vec::new();
        stack.extend(self.children(id).iter().rev());

        Descendants { stack, scene: self }
    }
}

impl SceneGraph {
    /// Attachs `child` to the end of `parent`'s children, or detaches it if `parent`
    /// is `None`. Returns false if nothing changed, e.g. `parent` is already the
    /// parent of `child`, or `parent` is `child` itself or one of its descendants.
    pub fn set_parent<T>(&mut self, child: NodeId, parent: T) -> bool
    where
        T: Into<Option<NodeId>>,
    {
        self.try_set_parent(child, parent)
            .map_err(|err| debug!("Failed to set parent. {}", err))
            .is_ok()
    }

    /// Inserts `node` as a child of `parent`, right before the `index`th child.
    /// The index is clamped to the number of children.
    pub fn insert_at(&mut self, parent: NodeId, index: usize, node: NodeId) -> bool {
        self.try_insert_at(parent, index, node)
            .map_err(|err| debug!("Failed to insert node. {}", err))
            .is_ok()
    }

    /// Appends `node` at the end of `parent`'s children.
    pub fn append(&mut self, parent: NodeId, node: NodeId) -> bool {
        self.try_append(parent, node)
            .map_err(|err| debug!("Failed to append node. {}", err))
            .is_ok()
    }

    /// Detaches `id` from its parent. Returns false if it is already a root.
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.parent(id) {
            Some(parent) => self.remove_child(parent, id),
            None => false,
        }
    }

    /// Removes `child` from the children of `parent`. Returns false if it can not
    /// be found there.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        self.try_remove_child(parent, child)
            .map_err(|err| warn!("Failed to remove node. {}", err))
            .is_ok()
    }

    /// The fallible version of `set_parent`.
    pub fn try_set_parent<T>(&mut self, child: NodeId, parent: T) -> Result<()>
    where
        T: Into<Option<NodeId>>,
    {
        let parent = parent.into();
        let old_parent = self.get(child)?.parent;

        if old_parent == parent {
            return Err(Error::AlreadyPlaced(child));
        }

        if let Some(parent) = parent {
            self.get(parent)?;
            if parent == child || self.is_ancestor(parent, child) {
                return Err(Error::CyclicHierarchy(child, parent));
            }
        }

        self.detach(child);

        if let Some(parent) = parent {
            self.attach(parent, None, child);
        }

        Ok(())
    }

    /// The fallible version of `insert_at`.
    pub fn try_insert_at(&mut self, parent: NodeId, index: usize, node: NodeId) -> Result<()> {
        self.check_attachable(parent, node)?;

        let siblings = &self.get(parent)?.children;
        let mut index = index.min(siblings.len());

        if self.get(node)?.parent == Some(parent) {
            if let Some(current) = siblings.iter().position(|&v| v == node) {
                // Removing the node first shifts everything behind it by one.
                if index == current || index == current + 1 {
                    return Err(Error::AlreadyPlaced(node));
                }

                if index > current {
                    index -= 1;
                }
            }
        }

        self.detach(node);
        self.attach(parent, Some(index), node);
        Ok(())
    }

    /// The fallible version of `append`.
    pub fn try_append(&mut self, parent: NodeId, node: NodeId) -> Result<()> {
        self.check_attachable(parent, node)?;

        if self.get(parent)?.children.last() == Some(&node) {
            return Err(Error::AlreadyPlaced(node));
        }

        self.detach(node);
        self.attach(parent, None, node);
        Ok(())
    }

    /// The fallible version of `remove_child`.
    pub fn try_remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let position = self
            .get(parent)?
            .children
            .iter()
            .position(|&v| v == child)
            .ok_or(Error::ChildNotFound(child, parent))?;

        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.remove(position);
        }

        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }

        Ok(())
    }

    /// Makes sure that both nodes are alive, and `node` is neither `parent` nor
    /// one of its ancestors.
    fn check_attachable(&self, parent: NodeId, node: NodeId) -> Result<()> {
        self.get(parent)?;
        self.get(node)?;

        if parent == node || self.is_ancestor(parent, node) {
            return Err(Error::CyclicHierarchy(node, parent));
        }

        Ok(())
    }

    /// Unlinks `id` from its parent's children. Children of `id` are not affected.
    fn detach(&mut self, id: NodeId) {
        let parent = match self.nodes.get_mut(id) {
            Some(node) => node.parent.take(),
            None => return,
        };

        if let Some(node) = parent.and_then(|v| self.nodes.get_mut(v)) {
            if let Some(position) = node.children.iter().position(|&v| v == id) {
                node.children.remove(position);
            }
        }
    }

    /// Links a detached `id` under `parent`, at `index` or at the end.
    fn attach(&mut self, parent: NodeId, index: Option<usize>, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(parent) {
            match index {
                Some(index) => node.children.insert(index, id),
                None => node.children.push(id),
            }
        }

        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = Some(parent);
        }
    }
}

/// An iterator of its ancestors.
pub struct Ancestors<'a> {
    scene: &'a SceneGraph,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let ent = self.cursor?;
        self.cursor = self.scene.parent(ent);
        Some(ent)
    }
}

/// An iterator of its descendants, in depth-first pre-order.
pub struct Descendants<'a> {
    scene: &'a SceneGraph,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let ent = self.stack.pop()?;
        self.stack.extend(self.scene.children(ent).iter().rev());
        Some(ent)
    }
}
