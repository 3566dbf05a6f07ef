extern crate scene_graph;

use scene_graph::math::Vector3;
use scene_graph::prelude::*;

/// root
/// +-- n0
///     +-- n1
///     |   +-- n2
///     +-- n11
///         +-- n22
struct Fixture {
    graph: SceneGraph,
    root: NodeId,
    n0: NodeId,
    n1: NodeId,
    n2: NodeId,
    n11: NodeId,
    n22: NodeId,
}

fn fixture() -> Fixture {
    let mut graph = SceneGraph::new();
    let root = graph.create("root");
    let n0 = graph.create("n0");
    let n1 = graph.create("n1");
    let n2 = graph.create("n2");
    let n11 = graph.create("n11");
    let n22 = graph.create("n22");

    assert!(graph.set_parent(n0, root));
    assert!(graph.set_parent(n1, n0));
    assert!(graph.set_parent(n11, n0));
    assert!(graph.set_parent(n2, n1));
    assert!(graph.set_parent(n22, n11));

    Fixture {
        graph,
        root,
        n0,
        n1,
        n2,
        n11,
        n22,
    }
}

fn names(graph: &SceneGraph, nodes: &[NodeId]) -> Vec<String> {
    nodes
        .iter()
        .map(|&v| graph.name(v).unwrap().to_owned())
        .collect()
}

#[test]
fn walk() {
    let f = fixture();

    let mut visits = Vec::new();
    traverse::walk(&f.graph, f.root, |child, parent| {
        visits.push((child, parent));
        Walk::Continue
    });

    assert_eq!(
        visits,
        [
            (f.n0, f.root),
            (f.n1, f.n0),
            (f.n2, f.n1),
            (f.n11, f.n0),
            (f.n22, f.n11),
        ]
    );

    let mut visits = Vec::new();
    traverse::walk(&f.graph, f.root, |child, _| {
        visits.push(child);
        if child == f.n1 {
            Walk::Skip
        } else {
            Walk::Continue
        }
    });

    assert_eq!(visits, [f.n0, f.n1, f.n11, f.n22]);

    let mut visits = Vec::new();
    traverse::walk(&f.graph, f.n2, |child, _| {
        visits.push(child);
        Walk::Continue
    });

    assert!(visits.is_empty());
}

#[test]
fn walk_with_post() {
    let f = fixture();

    let events = std::cell::RefCell::new(Vec::new());
    traverse::walk_with_post(
        &f.graph,
        f.n0,
        |child, _| {
            events.borrow_mut().push(("pre", child));
            if child == f.n11 {
                Walk::Skip
            } else {
                Walk::Continue
            }
        },
        |child, _| {
            events.borrow_mut().push(("post", child));
        },
    );

    assert_eq!(
        events.into_inner(),
        [
            ("pre", f.n1),
            ("pre", f.n2),
            ("post", f.n2),
            ("post", f.n1),
            ("pre", f.n11),
            ("post", f.n11),
        ]
    );
}

#[test]
fn flatten() {
    let mut f = fixture();

    let nodes = traverse::flatten(&f.graph, f.root);
    assert_eq!(nodes, [f.root, f.n0, f.n1, f.n2, f.n11, f.n22]);
    assert_eq!(nodes[1..].to_vec(), f.graph.descendants(f.root).collect::<Vec<_>>());

    assert_eq!(traverse::flatten(&f.graph, f.n22), [f.n22]);

    f.graph.delete(f.n11);
    assert_eq!(traverse::flatten(&f.graph, f.root), [f.root, f.n0, f.n1, f.n2]);
    assert!(traverse::flatten(&f.graph, f.n11).is_empty());
}

#[test]
fn replace() {
    let mut graph = SceneGraph::new();
    let root = graph.create("root");
    let a = graph.create("a");
    let b = graph.create("b");
    let c = graph.create("c");
    let b0 = graph.create("b0");
    let x = graph.create("x");
    let p = graph.create("p");

    graph.append(root, a);
    graph.append(root, b);
    graph.append(root, c);
    graph.append(b, b0);
    graph.append(p, x);

    assert!(traverse::replace(&mut graph, b, x));
    assert_eq!(graph.children(root), [a, x, c]);
    assert_eq!(graph.parent(x), Some(root));
    assert!(graph.children(p).is_empty());

    // The replaced node leaves with its subtree.
    assert!(graph.is_root(b));
    assert_eq!(graph.children(b), [b0]);

    // Siblings could replace each other.
    assert!(traverse::replace(&mut graph, a, c));
    assert_eq!(graph.children(root), [c, x]);
    assert!(graph.is_root(a));

    // Roots have no position to be taken.
    assert!(!traverse::replace(&mut graph, b, a));
    assert!(graph.is_root(a));
    assert!(graph.is_root(b));

    // Rejected without touching the tree.
    assert!(!traverse::replace(&mut graph, x, x));
    assert!(!traverse::replace(&mut graph, x, root));
    assert_eq!(graph.children(root), [c, x]);
    assert!(graph.is_root(root));

    graph.append(x, a);
    assert!(!traverse::replace(&mut graph, a, root));
    assert_eq!(graph.children(x), [a]);

    let dead = graph.create("dead");
    graph.delete(dead);
    assert!(!traverse::replace(&mut graph, x, dead));
    assert!(!traverse::replace(&mut graph, dead, b));
    assert_eq!(graph.children(root), [c, x]);
}

#[test]
fn set_enabled() {
    let mut f = fixture();
    f.graph.node_mut(f.n11).unwrap().set_enabled(false);

    let mut visits = Vec::new();
    assert!(traverse::set_enabled(&mut f.graph, f.n0, false, |v| {
        visits.push(v)
    }));

    assert_eq!(visits, [f.n0, f.n1, f.n2]);
    assert!(!f.graph.node(f.n0).unwrap().enabled());
    assert!(f.graph.node(f.n1).unwrap().enabled());

    // Nothing changes, nothing visited.
    let mut visits = Vec::new();
    assert!(!traverse::set_enabled(&mut f.graph, f.n0, false, |v| {
        visits.push(v)
    }));
    assert!(visits.is_empty());

    let mut visits = Vec::new();
    assert!(traverse::set_enabled(&mut f.graph, f.n11, true, |v| {
        visits.push(v)
    }));
    assert_eq!(visits, [f.n11, f.n22]);

    f.graph.delete(f.n22);
    assert!(!traverse::set_enabled(&mut f.graph, f.n22, false, |_| {}));
}

#[test]
fn enabled_in_hierarchy() {
    let mut f = fixture();
    f.graph.node_mut(f.n11).unwrap().set_enabled(false);

    assert!(traverse::enabled_in_hierarchy(&f.graph, f.n2, true));
    assert!(!traverse::enabled_in_hierarchy(&f.graph, f.n22, true));
    assert!(!traverse::enabled_in_hierarchy(&f.graph, f.n11, true));
    assert!(traverse::enabled_in_hierarchy(&f.graph, f.n11, false));
    assert!(traverse::enabled_in_hierarchy(&f.graph, f.n1, false));
    assert!(traverse::enabled_in_hierarchy(&f.graph, f.root, true));

    traverse::set_enabled(&mut f.graph, f.root, false, |_| {});
    assert!(!traverse::enabled_in_hierarchy(&f.graph, f.n2, true));
    assert!(traverse::enabled_in_hierarchy(&f.graph, f.root, false));

    f.graph.delete(f.n2);
    assert!(!traverse::enabled_in_hierarchy(&f.graph, f.n2, false));
}

#[test]
fn clone_node() {
    let mut f = fixture();
    f.graph.set_local_position(f.n0, [1.0, 2.0, 3.0]);
    f.graph.set_local_scale(f.n0, [2.0, 2.0, 2.0]);

    let n0 = traverse::clone_node(&mut f.graph, f.n0).unwrap();
    assert_ne!(n0, f.n0);
    assert_eq!(f.graph.name(n0), Some("n0"));
    assert_eq!(f.graph.local_transform(n0), f.graph.local_transform(f.n0));
    assert!(f.graph.is_root(n0));
    assert!(f.graph.is_leaf(n0));

    f.graph.set_local_position(n0, [0.0, 0.0, 0.0]);
    assert_eq!(
        f.graph.local_position(f.n0),
        Some(Vector3::new(1.0, 2.0, 3.0))
    );

    let mut hooked = Vec::new();
    let n2 = traverse::clone_node_with(&mut f.graph, f.n2, |src, dst| hooked.push((src, dst)));
    assert_eq!(hooked, [(f.n2, n2.unwrap())]);

    f.graph.delete(f.n1);
    assert_eq!(traverse::clone_node(&mut f.graph, f.n1), None);
}

#[test]
fn deep_clone() {
    let mut f = fixture();
    f.graph.set_local_position(f.n0, [1.0, 2.0, 3.0]);
    f.graph.set_local_scale(f.n22, [2.0, 2.0, 2.0]);

    let len = f.graph.len();
    let root = traverse::deep_clone(&mut f.graph, f.root).unwrap();
    assert_eq!(f.graph.len(), len * 2);

    assert_ne!(root, f.root);
    assert!(f.graph.is_root(root));
    assert_eq!(f.graph.name(root), Some("root"));

    let n0 = f.graph.children(root)[0];
    assert_ne!(n0, f.n0);
    assert_eq!(f.graph.name(n0), Some("n0"));
    assert_eq!(f.graph.parent(n0), Some(root));

    let src = traverse::flatten(&f.graph, f.root);
    let dst = traverse::flatten(&f.graph, root);
    assert_eq!(names(&f.graph, &src), names(&f.graph, &dst));

    for (&lhs, &rhs) in src.iter().zip(dst.iter()) {
        assert!(!src.contains(&rhs));
        assert_eq!(f.graph.local_transform(lhs), f.graph.local_transform(rhs));
        assert_eq!(f.graph.children(lhs).len(), f.graph.children(rhs).len());
    }

    // Cloning a subtree detaches the copy.
    let mut hooked = Vec::new();
    let n11 = traverse::deep_clone_with(&mut f.graph, f.n11, |src, _| hooked.push(src)).unwrap();
    assert!(f.graph.is_root(n11));
    assert_eq!(f.graph.parent(f.n11), Some(f.n0));
    assert_eq!(hooked, [f.n11, f.n22]);
    assert_eq!(names(&f.graph, f.graph.children(n11)), ["n22"]);
}

#[test]
fn find() {
    let mut graph = SceneGraph::new();
    let root = graph.create("root");

    let tree: &[(&str, &[&str])] = &[
        ("n0", &["n0_0", "n0_1", "n0_0"]),
        ("n1", &[]),
        ("n1", &[]),
        ("n0", &["n0_0", "n0_0", "n3_0", "n0_0"]),
    ];

    for &(name, children) in tree {
        let parent = graph.create(name);
        graph.append(root, parent);

        for &v in children {
            let child = graph.create(v);
            graph.append(parent, child);
        }
    }

    let n0 = graph.children(root)[0];
    let n0_0 = graph.children(n0)[0];
    let n0_0_0 = graph.create("n0_0");
    graph.append(n0_0, n0_0_0);

    let found = traverse::find(&graph, root, "n0/n0_0").unwrap();
    assert_eq!(found, n0_0);
    assert_eq!(graph.name(found), Some("n0_0"));
    assert_eq!(graph.parent(found), Some(n0));
    assert_eq!(graph.children(found).len(), 1);

    assert_eq!(traverse::find(&graph, root, "n0/n0_0/n0_0"), Some(n0_0_0));
    assert_eq!(traverse::find(&graph, root, "/n0//n0_0/"), Some(n0_0));
    assert_eq!(traverse::find(&graph, root, "n0"), Some(n0));

    assert_eq!(traverse::find(&graph, root, "n0/missing"), None);
    assert_eq!(traverse::find(&graph, root, "n3_0"), None);
    assert_eq!(traverse::find(&graph, root, ""), None);
    assert_eq!(traverse::find(&graph, root, "/"), None);

    // Searches the clones the same way.
    let root2 = traverse::deep_clone(&mut graph, root).unwrap();
    let found = traverse::find(&graph, root2, "n0/n0_0").unwrap();
    assert_ne!(found, n0_0);
    assert_eq!(graph.name(graph.parent(found).unwrap()), Some("n0"));
    assert_eq!(graph.children(found).len(), 1);
}

#[test]
fn find_all() {
    let mut graph = SceneGraph::new();
    let root = graph.create("root");
    let a = graph.create("a");
    let b = graph.create("a");
    let a0 = graph.create("x");
    let a1 = graph.create("y");
    let b0 = graph.create("x");
    let b1 = graph.create("x");

    graph.append(root, a);
    graph.append(root, b);
    graph.append(a, a0);
    graph.append(a, a1);
    graph.append(b, b0);
    graph.append(b, b1);

    assert_eq!(traverse::find_all(&graph, root, "a"), [a, b]);
    assert_eq!(traverse::find_all(&graph, root, "a/x"), [a0, b0, b1]);
    assert_eq!(traverse::find_all(&graph, root, "a/y"), [a1]);
    assert_eq!(traverse::find(&graph, root, "a/x"), Some(a0));

    assert!(traverse::find_all(&graph, root, "a/z").is_empty());
    assert!(traverse::find_all(&graph, root, "").is_empty());

    graph.delete(root);
    assert!(traverse::find_all(&graph, root, "a").is_empty());
}
