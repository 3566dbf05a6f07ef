//! Traversal and structural utilities. Everything here is built on the public
//! `SceneGraph` operations and keeps no state of its own.

use std::collections::HashMap;

use super::graph::SceneGraph;
use super::node::NodeId;

/// The result of a visitor, which decides whether to walk into the subtree of the
/// node just visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Continue,
    Skip,
}

/// Walks through all the descendants of `root` in depth-first pre-order, calling
/// `visit(child, parent)` on each of them. The root itself is not visited.
pub fn walk<F>(graph: &SceneGraph, root: NodeId, visit: F)
where
    F: FnMut(NodeId, NodeId) -> Walk,
{
    walk_with_post(graph, root, visit, |_, _| {});
}

/// Like `walk`, but also calls `post(child, parent)` once the subtree of `child`
/// has been walked through (or skipped).
pub fn walk_with_post<F, G>(graph: &SceneGraph, root: NodeId, mut pre: F, mut post: G)
where
    F: FnMut(NodeId, NodeId) -> Walk,
    G: FnMut(NodeId, NodeId),
{
    fn recurse<F, G>(graph: &SceneGraph, parent: NodeId, pre: &mut F, post: &mut G)
    where
        F: FnMut(NodeId, NodeId) -> Walk,
        G: FnMut(NodeId, NodeId),
    {
        for &child in graph.children(parent) {
            if pre(child, parent) == Walk::Continue {
                recurse(graph, child, pre, post);
            }

            post(child, parent);
        }
    }

    recurse(graph, root, &mut pre, &mut post);
}

/// Returns `root` followed by all of its descendants in depth-first pre-order.
pub fn flatten(graph: &SceneGraph, root: NodeId) -> Vec<NodeId> {
    if !graph.contains(root) {
        return Vec::new();
    }

    let mut out = vec![root];
    walk(graph, root, |child, _| {
        out.push(child);
        Walk::Continue
    });

    out
}

/// Detaches `new` from wherever it is, and puts it at the position of `old` in the
/// children of `old`'s parent. `old` is detached with its subtree.
///
/// Returns false and changes nothing if `old` is a root, if `old` and `new` are
/// the same node, or if `new` is an ancestor of `old`.
pub fn replace(graph: &mut SceneGraph, old: NodeId, new: NodeId) -> bool {
    if old == new || !graph.contains(old) || !graph.contains(new) {
        return false;
    }

    if graph.is_ancestor(old, new) {
        debug!("Can not replace {} with its ancestor {}.", old, new);
        return false;
    }

    let parent = match graph.parent(old) {
        Some(parent) => parent,
        None => return false,
    };

    // `new` might be a sibling of `old`, so the index is taken after detaching.
    graph.remove(new);

    let index = match graph.children(parent).iter().position(|&v| v == old) {
        Some(index) => index,
        None => return false,
    };

    graph.remove_child(parent, old) && graph.insert_at(parent, index, new)
}

/// Sets the own enabled flag of `id`. If the flag changed, `on_change` is called
/// with `id` and then every descendant whose own flag is enabled; the subtrees of
/// disabled descendants are skipped.
///
/// Returns true if the flag changed.
pub fn set_enabled<F>(graph: &mut SceneGraph, id: NodeId, value: bool, mut on_change: F) -> bool
where
    F: FnMut(NodeId),
{
    let node = match graph.node_mut(id) {
        Some(node) => node,
        None => return false,
    };

    if node.enabled() == value {
        return false;
    }

    node.set_enabled(value);

    on_change(id);

    let graph = &*graph;
    walk(graph, id, |child, _| {
        if graph.node(child).map(|v| v.enabled()).unwrap_or(false) {
            on_change(child);
            Walk::Continue
        } else {
            Walk::Skip
        }
    });

    true
}

/// Returns false if the own flag of `id` (when `include_self`) or of any of its
/// ancestors is disabled.
pub fn enabled_in_hierarchy(graph: &SceneGraph, id: NodeId, include_self: bool) -> bool {
    let enabled = |v| graph.node(v).map(|n| n.enabled()).unwrap_or(false);

    if !graph.contains(id) || (include_self && !enabled(id)) {
        return false;
    }

    graph.ancestors(id).all(enabled)
}

/// Creates a standalone copy of `id` with the same name and local transform.
#[inline]
pub fn clone_node(graph: &mut SceneGraph, id: NodeId) -> Option<NodeId> {
    clone_node_with(graph, id, |_, _| {})
}

/// Like `clone_node`, then calls `hook(source, clone)` so callers could copy the
/// state they associated with the source node.
pub fn clone_node_with<F>(graph: &mut SceneGraph, id: NodeId, mut hook: F) -> Option<NodeId>
where
    F: FnMut(NodeId, NodeId),
{
    let (name, transform) = {
        let node = graph.node(id)?;
        (node.name().to_owned(), *node.transform())
    };

    let clone = graph.create(name);
    graph.set_local_transform(clone, transform);
    hook(id, clone);
    Some(clone)
}

/// Clones the whole subtree of `root`. The returned root is detached, and the
/// clones are linked the same way as their sources.
#[inline]
pub fn deep_clone(graph: &mut SceneGraph, root: NodeId) -> Option<NodeId> {
    deep_clone_with(graph, root, |_, _| {})
}

/// Like `deep_clone`, calling `hook(source, clone)` for every cloned node in
/// tree order.
pub fn deep_clone_with<F>(graph: &mut SceneGraph, root: NodeId, mut hook: F) -> Option<NodeId>
where
    F: FnMut(NodeId, NodeId),
{
    let mut remap = HashMap::new();

    for src in flatten(graph, root) {
        let dst = clone_node_with(graph, src, &mut hook)?;

        // Tree order guarantees the parent has been cloned already.
        if let Some(&parent) = graph.parent(src).and_then(|v| remap.get(&v)) {
            graph.append(parent, dst);
        }

        remap.insert(src, dst);
    }

    remap.get(&root).cloned()
}

/// Finds the node at `path` relative to `root`, e.g. `"n0/n0_0"`. Every segment
/// matches the first child with that name, in children order. Empty segments are
/// ignored, and a path without any segment matches nothing.
pub fn find(graph: &SceneGraph, root: NodeId, path: &str) -> Option<NodeId> {
    let mut segments = path.split('/').filter(|v| !v.is_empty()).peekable();
    segments.peek()?;

    segments.try_fold(root, |cursor, name| {
        graph
            .children(cursor)
            .iter()
            .cloned()
            .find(|&v| graph.name(v) == Some(name))
    })
}

/// Finds all the nodes at `path` relative to `root`, following every sibling
/// with a matching name. The result is in tree order.
pub fn find_all(graph: &SceneGraph, root: NodeId, path: &str) -> Vec<NodeId> {
    let mut segments = path.split('/').filter(|v| !v.is_empty()).peekable();
    if segments.peek().is_none() || !graph.contains(root) {
        return Vec::new();
    }

    segments.fold(vec![root], |cursors, name| {
        cursors
            .iter()
            .flat_map(|&cursor| {
                graph
                    .children(cursor)
                    .iter()
                    .cloned()
                    .filter(move |&v| graph.name(v) == Some(name))
            })
            .collect()
    })
}
