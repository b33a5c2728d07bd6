//! # Tree Projector
//!
//! Derives a rooted spanning tree from a graph snapshot for the alternate
//! visualization. Independent of any search algorithm.
//!
//! The projection is a breadth-first traversal from the first node in
//! snapshot order: each newly discovered neighbor becomes a child of the
//! node through which it was first reached, cross edges that would close a
//! cycle are silently dropped, and nodes outside the root's component never
//! appear. Given the same snapshot, the result is identical every time.

use crate::graph::GraphSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::Write as _;

/// A node in the projected spanning tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// The graph node's display label.
    pub label: String,
    /// Depth in edges from the root.
    pub level: usize,
    /// Children in discovery order.
    pub children: Vec<TreeNode>,
}

/// Project a snapshot onto a rooted spanning tree.
///
/// Returns `None` for an empty node set. The root is the first node in
/// snapshot order; levels equal the undirected graph-distance from it.
#[must_use]
pub fn project(snapshot: &GraphSnapshot) -> Option<TreeNode> {
    let root_label = snapshot.nodes.first()?.label.clone();

    // Undirected, label-keyed adjacency; neighbor order is edge order.
    let mut adjacency: BTreeMap<&str, Vec<&str>> = snapshot
        .nodes
        .iter()
        .map(|n| (n.label.as_str(), Vec::new()))
        .collect();
    for edge in &snapshot.edges {
        let from = snapshot.node(edge.from).map(|n| n.label.as_str());
        let to = snapshot.node(edge.to).map(|n| n.label.as_str());
        if let (Some(from), Some(to)) = (from, to) {
            if let Some(neighbors) = adjacency.get_mut(from) {
                neighbors.push(to);
            }
            if let Some(neighbors) = adjacency.get_mut(to) {
                neighbors.push(from);
            }
        }
    }

    let mut root = TreeNode {
        label: root_label.clone(),
        level: 0,
        children: Vec::new(),
    };
    let mut visited: BTreeSet<String> = BTreeSet::new();
    visited.insert(root_label.clone());

    // Queue carries paths of child indices, since the tree is built in place.
    let mut queue: VecDeque<(String, Vec<usize>)> = VecDeque::new();
    queue.push_back((root_label, Vec::new()));

    while let Some((label, path)) = queue.pop_front() {
        let neighbors: Vec<String> = adjacency
            .get(label.as_str())
            .map(|ns| ns.iter().map(|s| (*s).to_string()).collect())
            .unwrap_or_default();

        for neighbor in neighbors {
            if visited.insert(neighbor.clone()) {
                let parent = node_at_mut(&mut root, &path);
                let child = TreeNode {
                    label: neighbor.clone(),
                    level: parent.level + 1,
                    children: Vec::new(),
                };
                parent.children.push(child);
                let mut child_path = path.clone();
                child_path.push(parent.children.len() - 1);
                queue.push_back((neighbor, child_path));
            }
        }
    }

    Some(root)
}

/// Walk a child-index path down from the root.
fn node_at_mut<'a>(root: &'a mut TreeNode, path: &[usize]) -> &'a mut TreeNode {
    let mut node = root;
    for &index in path {
        node = &mut node.children[index];
    }
    node
}

/// Render the tree as an indented text layout for the alternate view.
#[must_use]
pub fn render(tree: &TreeNode) -> String {
    let mut out = String::new();
    render_node(tree, true, &mut out);
    out
}

fn render_node(node: &TreeNode, is_root: bool, out: &mut String) {
    let indent = "  ".repeat(node.level);
    if is_root {
        let _ = writeln!(out, "{indent}{} (root)", node.label);
    } else {
        let _ = writeln!(out, "{indent}├─ {}", node.label);
    }
    for child in &node.children {
        render_node(child, false, out);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphStore;

    #[test]
    fn empty_snapshot_projects_to_none() {
        let store = GraphStore::new();
        assert!(project(&store.snapshot()).is_none());
    }

    #[test]
    fn single_node_projects_to_root_only() {
        let mut store = GraphStore::new();
        store.add_node("solo").expect("add");
        let tree = project(&store.snapshot()).expect("tree");
        assert_eq!(tree.label, "solo");
        assert_eq!(tree.level, 0);
        assert!(tree.children.is_empty());
    }

    #[test]
    fn levels_equal_bfs_distance() {
        // A - B - C, plus A - D
        let mut store = GraphStore::new();
        let a = store.add_node("A").expect("add");
        let b = store.add_node("B").expect("add");
        let c = store.add_node("C").expect("add");
        let d = store.add_node("D").expect("add");
        store.add_edge(a, b, 1.0).expect("edge");
        store.add_edge(b, c, 1.0).expect("edge");
        store.add_edge(a, d, 1.0).expect("edge");

        let tree = project(&store.snapshot()).expect("tree");
        assert_eq!(tree.level, 0);
        let labels: Vec<_> = tree.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "D"]);
        assert!(tree.children.iter().all(|c| c.level == 1));
        assert_eq!(tree.children[0].children[0].label, "C");
        assert_eq!(tree.children[0].children[0].level, 2);
    }

    #[test]
    fn cycles_are_broken_by_visited_set() {
        // Triangle A-B-C: C must appear exactly once.
        let mut store = GraphStore::new();
        let a = store.add_node("A").expect("add");
        let b = store.add_node("B").expect("add");
        let c = store.add_node("C").expect("add");
        store.add_edge(a, b, 1.0).expect("edge");
        store.add_edge(b, c, 1.0).expect("edge");
        store.add_edge(c, a, 1.0).expect("edge");

        let tree = project(&store.snapshot()).expect("tree");
        assert_eq!(count_nodes(&tree), 3);
    }

    #[test]
    fn disconnected_components_are_omitted() {
        let mut store = GraphStore::new();
        let a = store.add_node("A").expect("add");
        let b = store.add_node("B").expect("add");
        store.add_node("island").expect("add");
        store.add_edge(a, b, 1.0).expect("edge");

        let tree = project(&store.snapshot()).expect("tree");
        assert_eq!(count_nodes(&tree), 2);
    }

    #[test]
    fn projection_is_idempotent() {
        let store = GraphStore::sample();
        let snapshot = store.snapshot();
        assert_eq!(project(&snapshot), project(&snapshot));
    }

    #[test]
    fn render_marks_root_and_indents_children() {
        let mut store = GraphStore::new();
        let a = store.add_node("A").expect("add");
        let b = store.add_node("B").expect("add");
        store.add_edge(a, b, 1.0).expect("edge");

        let text = render(&project(&store.snapshot()).expect("tree"));
        assert!(text.starts_with("A (root)"));
        assert!(text.contains("  ├─ B"));
    }

    fn count_nodes(tree: &TreeNode) -> usize {
        1 + tree.children.iter().map(count_nodes).sum::<usize>()
    }
}
