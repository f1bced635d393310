//! Member graph - undirected adjacency structure over joint ids
//!
//! Members are stored as an adjacency list keyed by joint id. The list is
//! symmetric: if B is adjacent to A then A is adjacent to B, and both
//! endpoints of every edge are registered as keys before the edge exists.
//! Adjacency tests and edge edits are O(1) amortized; removing a joint
//! scans every adjacency set, which is acceptable at interactive edit
//! volumes.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::elements::MemberKey;

/// Undirected adjacency structure over joint identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberGraph {
    /// Joint id -> set of adjacent joint ids
    adjacency: BTreeMap<String, BTreeSet<String>>,
}

impl MemberGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over all registered joint ids in lexicographic order
    pub fn joints(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Number of registered joints
    pub fn joint_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether a joint id is registered
    pub fn has_joint(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Whether `b` is adjacent to `a`
    pub fn has_adjacent(&self, a: &str, b: &str) -> bool {
        self.adjacency.get(a).is_some_and(|set| set.contains(b))
    }

    /// Number of members connected to a joint
    pub fn degree(&self, id: &str) -> usize {
        self.adjacency.get(id).map_or(0, BTreeSet::len)
    }

    /// Register a joint. Idempotent: a no-op when already present.
    pub fn add_joint(&mut self, id: &str) {
        self.adjacency.entry(id.to_string()).or_default();
    }

    /// Remove a joint's own adjacency set and strip it from every other
    /// joint's set. Idempotent for unknown ids.
    pub fn remove_joint(&mut self, id: &str) {
        self.adjacency.remove(id);
        for adjacents in self.adjacency.values_mut() {
            adjacents.remove(id);
        }
    }

    /// Insert a one-directional adjacency. Idempotent, set-like. A no-op
    /// when the source joint is unregistered.
    pub fn add_adjacent(&mut self, a: &str, b: &str) {
        if let Some(adjacents) = self.adjacency.get_mut(a) {
            adjacents.insert(b.to_string());
        }
    }

    /// Remove a one-directional adjacency. Idempotent.
    pub fn remove_adjacent(&mut self, a: &str, b: &str) {
        if let Some(adjacents) = self.adjacency.get_mut(a) {
            adjacents.remove(b);
        }
    }

    /// Connect two joints, registering either endpoint that is missing.
    pub fn add_member(&mut self, a: &str, b: &str) {
        self.add_joint(a);
        self.add_joint(b);
        self.add_adjacent(a, b);
        self.add_adjacent(b, a);
    }

    /// Disconnect two joints. Mirrors [`MemberGraph::add_member`]'s leniency:
    /// missing endpoints are registered, then both directed adjacencies are
    /// stripped. The joints themselves persist.
    pub fn remove_member(&mut self, a: &str, b: &str) {
        self.add_joint(a);
        self.add_joint(b);
        self.remove_adjacent(a, b);
        self.remove_adjacent(b, a);
    }

    /// Return every undirected edge exactly once, in canonical order.
    pub fn all_members(&self) -> Vec<MemberKey> {
        self.members_filtered(|_| true)
    }

    /// Return every undirected edge whose endpoints both satisfy `keep`,
    /// exactly once. Restricting the joint set extracts a subgraph without
    /// altering canonical edge identity.
    pub fn members_filtered(&self, keep: impl Fn(&str) -> bool) -> Vec<MemberKey> {
        let mut reviewed: BTreeSet<&str> = BTreeSet::new();
        let mut members = Vec::new();
        for (id, adjacents) in &self.adjacency {
            if !keep(id) {
                continue;
            }
            for adjacent in adjacents {
                // The symmetric copy of this edge was already emitted when
                // `adjacent` was the scan source.
                if !reviewed.contains(adjacent.as_str()) && keep(adjacent) {
                    members.push(MemberKey::new(id, adjacent));
                }
            }
            reviewed.insert(id);
        }
        members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_joint_is_idempotent() {
        let mut graph = MemberGraph::new();
        graph.add_joint("A");
        graph.add_joint("A");
        assert_eq!(graph.joint_count(), 1);
        assert!(graph.has_joint("A"));
    }

    #[test]
    fn test_add_member_registers_missing_joints() {
        let mut graph = MemberGraph::new();
        graph.add_member("A", "B");
        assert!(graph.has_joint("A"));
        assert!(graph.has_joint("B"));
        assert!(graph.has_adjacent("A", "B"));
        assert!(graph.has_adjacent("B", "A"));
    }

    #[test]
    fn test_remove_member_keeps_joints() {
        let mut graph = MemberGraph::new();
        graph.add_member("A", "B");
        graph.remove_member("A", "B");
        assert!(graph.has_joint("A"));
        assert!(graph.has_joint("B"));
        assert_eq!(graph.degree("A"), 0);
        assert_eq!(graph.degree("B"), 0);
        assert!(graph.all_members().is_empty());
    }

    #[test]
    fn test_remove_member_registers_missing_joints() {
        let mut graph = MemberGraph::new();
        graph.remove_member("A", "B");
        assert!(graph.has_joint("A"));
        assert!(graph.has_joint("B"));
        assert!(graph.all_members().is_empty());
    }

    #[test]
    fn test_remove_joint_strips_reverse_adjacency() {
        let mut graph = MemberGraph::new();
        graph.add_member("A", "B");
        graph.add_member("B", "C");
        graph.remove_joint("B");
        assert!(!graph.has_joint("B"));
        assert_eq!(graph.degree("A"), 0);
        assert_eq!(graph.degree("C"), 0);
        for member in graph.all_members() {
            assert!(!member.touches("B"));
        }
    }

    #[test]
    fn test_all_members_reports_each_edge_once() {
        let mut graph = MemberGraph::new();
        graph.add_member("A", "B");
        graph.add_member("B", "C");
        graph.add_member("A", "C");
        let members = graph.all_members();
        assert_eq!(members.len(), 3);
        let mut unique = members.clone();
        unique.dedup();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_members_filtered_extracts_subgraph() {
        let mut graph = MemberGraph::new();
        graph.add_member("A", "B");
        graph.add_member("B", "C");
        graph.add_member("C", "D");
        let members = graph.members_filtered(|id| id != "C");
        assert_eq!(members, vec![MemberKey::new("A", "B")]);
    }
}
