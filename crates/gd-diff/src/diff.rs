//! Annotated union of two graph snapshots.

use std::collections::BTreeSet;

use gd_graph::{Edge, Graph, Name};

/// How an item differs between the old and new snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    /// Present in both graphs.
    Unchanged,
    /// Present only in the new graph.
    Added,
    /// Present only in the old graph.
    Removed,
}

impl Change {
    /// Classify by membership. Returns `None` for an item in neither graph.
    pub fn from_membership(in_old: bool, in_new: bool) -> Option<Self> {
        match (in_old, in_new) {
            (true, true) => Some(Change::Unchanged),
            (false, true) => Some(Change::Added),
            (true, false) => Some(Change::Removed),
            (false, false) => None,
        }
    }

    /// The change seen from the opposite direction (old and new swapped).
    pub fn inverse(self) -> Self {
        match self {
            Change::Unchanged => Change::Unchanged,
            Change::Added => Change::Removed,
            Change::Removed => Change::Added,
        }
    }

    /// Graphviz color for this change, if any.
    pub fn color(self) -> Option<&'static str> {
        match self {
            Change::Unchanged => None,
            Change::Added => Some("green"),
            Change::Removed => Some("red"),
        }
    }
}

/// One item of the union together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffEntry<T> {
    pub item: T,
    pub change: Change,
}

/// Per-kind counters for a set of diff entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeCounts {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
}

impl ChangeCounts {
    fn tally<T>(entries: &[DiffEntry<T>]) -> Self {
        entries.iter().fold(Self::default(), |mut counts, entry| {
            match entry.change {
                Change::Unchanged => counts.unchanged += 1,
                Change::Added => counts.added += 1,
                Change::Removed => counts.removed += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.unchanged + self.added + self.removed
    }
}

/// Summary of a diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub nodes: ChangeCounts,
    pub edges: ChangeCounts,
}

impl DiffStats {
    pub fn has_changes(&self) -> bool {
        self.nodes.added + self.nodes.removed + self.edges.added + self.edges.removed > 0
    }
}

/// The union of two graphs, annotated with where each item came from.
///
/// Nodes are sorted by name and edges by (source, target), both byte-wise.
/// Borrows from the two input graphs.
#[derive(Debug, Clone)]
pub struct GraphDiff<'a> {
    nodes: Vec<DiffEntry<&'a Name>>,
    edges: Vec<DiffEntry<&'a Edge>>,
}

impl<'a> GraphDiff<'a> {
    pub fn new(old: &'a Graph, new: &'a Graph) -> Self {
        let nodes = annotated_union(old.nodes(), new.nodes());
        let edges = annotated_union(old.edges(), new.edges());
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[DiffEntry<&'a Name>] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DiffEntry<&'a Edge>] {
        &self.edges
    }

    pub fn stats(&self) -> DiffStats {
        DiffStats {
            nodes: ChangeCounts::tally(&self.nodes),
            edges: ChangeCounts::tally(&self.edges),
        }
    }
}

/// Sorted union of two sets, each item classified by membership.
fn annotated_union<'a, T: Ord>(
    old: &'a BTreeSet<T>,
    new: &'a BTreeSet<T>,
) -> Vec<DiffEntry<&'a T>> {
    old.union(new)
        .filter_map(|item| {
            Change::from_membership(old.contains(item), new.contains(item))
                .map(|change| DiffEntry { item, change })
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use gd_graph::GraphBuilder;
    use proptest::prelude::*;

    fn arb_graph() -> impl Strategy<Value = Graph> {
        (
            prop::collection::btree_set(prop::collection::vec(any::<u8>(), 1..3), 0..8),
            prop::collection::vec((0usize..8, 0usize..8), 0..16),
        )
            .prop_map(|(names, pairs)| {
                let names: Vec<Vec<u8>> = names.into_iter().collect();
                let mut builder = GraphBuilder::new();
                for name in &names {
                    builder.add_node(name.clone());
                }
                if !names.is_empty() {
                    for (s, t) in pairs {
                        let source = names[s % names.len()].clone();
                        let target = names[t % names.len()].clone();
                        builder.add_edge(source, target).unwrap();
                    }
                }
                builder.build()
            })
    }

    proptest! {
        #[test]
        fn node_union_is_complete_sorted_and_unique(old in arb_graph(), new in arb_graph()) {
            let diff = GraphDiff::new(&old, &new);
            let expected: BTreeSet<&Name> = old.nodes().iter().chain(new.nodes()).collect();

            prop_assert_eq!(diff.nodes().len(), expected.len());
            prop_assert!(diff.nodes().windows(2).all(|w| w[0].item.as_bytes() < w[1].item.as_bytes()));
            prop_assert!(diff.edges().windows(2).all(|w| w[0].item < w[1].item));
        }

        #[test]
        fn classification_matches_membership(old in arb_graph(), new in arb_graph()) {
            let diff = GraphDiff::new(&old, &new);
            for entry in diff.nodes() {
                let expected = Change::from_membership(
                    old.contains_node(entry.item),
                    new.contains_node(entry.item),
                );
                prop_assert_eq!(Some(entry.change), expected);
            }
            for entry in diff.edges() {
                let expected = Change::from_membership(
                    old.contains_edge(entry.item),
                    new.contains_edge(entry.item),
                );
                prop_assert_eq!(Some(entry.change), expected);
                let origin = if entry.change == Change::Added { &new } else { &old };
                prop_assert!(origin.contains_node(&entry.item.source));
                prop_assert!(origin.contains_node(&entry.item.target));
            }
        }

        #[test]
        fn swapping_inputs_inverts_changes(old in arb_graph(), new in arb_graph()) {
            let forward = GraphDiff::new(&old, &new);
            let backward = GraphDiff::new(&new, &old);

            prop_assert_eq!(forward.nodes().len(), backward.nodes().len());
            for (f, b) in forward.nodes().iter().zip(backward.nodes()) {
                prop_assert_eq!(f.item, b.item);
                prop_assert_eq!(f.change, b.change.inverse());
            }
            for (f, b) in forward.edges().iter().zip(backward.edges()) {
                prop_assert_eq!(f.item, b.item);
                prop_assert_eq!(f.change, b.change.inverse());
            }
        }
    }
}
