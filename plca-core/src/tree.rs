//! Arena-indexed lifecycle stage forest.
//!
//! Stages live in a flat id-indexed arena; parent/child structure is a list
//! of child ids per node plus an ordered root list. The nested
//! [`StageDef`] form is only used at the serialization boundary, so deep
//! forests never require deep ownership and subtree removal is a loop over
//! ids rather than a recursive drop.
//!
//! Mutations follow a two-level error convention. Structural errors on
//! [`insert`](StageTree::insert) (duplicate id, unknown parent, blank
//! identity) are typed [`PLCAError`]s; the in-place operations
//! ([`update`](StageTree::update), [`remove`](StageTree::remove),
//! [`toggle_expanded`](StageTree::toggle_expanded)) return `false` for an
//! unknown id and change nothing.

use std::collections::{HashMap, HashSet};

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{depth_first_search, DfsEvent};
use serde::{Deserialize, Serialize};

use crate::errors::{PLCAError, PLCAResult};
use crate::stage::{LifecycleStage, StageDef, StagePatch};

#[derive(Debug, Clone, PartialEq)]
struct StageNode {
    stage: LifecycleStage,
    children: Vec<String>,
}

/// A forest of lifecycle stages.
///
/// Every node at every depth carries its own factors and contributes to
/// aggregation independently; nesting is organisational and nothing is
/// inherited from parent to child.
///
/// ```rust
/// use plca_core::{LifecycleStage, StageTree};
///
/// let mut tree = StageTree::new();
/// tree.insert(
///     None,
///     LifecycleStage::new("production", "Production").with_factors(1.2, 1.5, 0.8, 0.6, 1.3),
/// )?;
/// tree.insert(
///     Some("production"),
///     LifecycleStage::new("molding", "Molding").with_factors(0.7, 0.9, 0.3, 0.2, 0.8),
/// )?;
///
/// assert_eq!(tree.len(), 2);
/// assert!(tree.get("production").is_some_and(|stage| stage.expanded));
/// # Ok::<(), plca_core::PLCAError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<StageDef>", into = "Vec<StageDef>")]
pub struct StageTree {
    nodes: HashMap<String, StageNode>,
    roots: Vec<String>,
}

impl StageTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stages in the forest, across all depths.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Look up a stage by id.
    pub fn get(&self, id: &str) -> Option<&LifecycleStage> {
        self.nodes.get(id).map(|node| &node.stage)
    }

    /// Ids of the top-level stages, in insertion order.
    pub fn root_ids(&self) -> &[String] {
        &self.roots
    }

    /// Top-level stages, in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = &LifecycleStage> + '_ {
        self.roots.iter().filter_map(|id| self.get(id))
    }

    /// Child ids of `id`, or `None` if the stage does not exist.
    pub fn child_ids(&self, id: &str) -> Option<&[String]> {
        self.nodes.get(id).map(|node| node.children.as_slice())
    }

    /// Children of `id`, empty if the stage does not exist.
    pub fn children(&self, id: &str) -> impl Iterator<Item = &LifecycleStage> + '_ {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(|node| node.children.iter())
            .filter_map(|child| self.get(child))
    }

    /// Depth-first preorder traversal of the whole forest.
    ///
    /// Roots are visited in insertion order, each immediately followed by its
    /// subtree. Aggregation, serialization and displays all rely on this
    /// order being stable.
    pub fn iter(&self) -> impl Iterator<Item = &LifecycleStage> + '_ {
        let mut stack: Vec<&str> = self.roots.iter().rev().map(String::as_str).collect();
        std::iter::from_fn(move || {
            while let Some(id) = stack.pop() {
                if let Some(node) = self.nodes.get(id) {
                    for child in node.children.iter().rev() {
                        stack.push(child);
                    }
                    return Some(&node.stage);
                }
            }
            None
        })
    }

    /// Insert a stage, as a root when `parent` is `None`.
    ///
    /// Inserting under a parent marks that parent expanded so the new node is
    /// visible in tree views.
    ///
    /// # Errors
    ///
    /// [`PLCAError::EmptyStageIdentity`] when the id or name is blank,
    /// [`PLCAError::DuplicateStage`] when the id is already taken and
    /// [`PLCAError::StageNotFound`] when the parent does not exist. The
    /// forest is unchanged on error.
    pub fn insert(&mut self, parent: Option<&str>, stage: LifecycleStage) -> PLCAResult<()> {
        self.add_node(parent, stage)?;
        if let Some(parent_id) = parent {
            if let Some(node) = self.nodes.get_mut(parent_id) {
                node.stage.expanded = true;
            }
        }
        Ok(())
    }

    // Shared by `insert` and deserialization. Does not touch the parent's
    // expanded flag, so authored collapse state survives loading.
    fn add_node(&mut self, parent: Option<&str>, stage: LifecycleStage) -> PLCAResult<()> {
        if stage.id.trim().is_empty() || stage.name.trim().is_empty() {
            return Err(PLCAError::EmptyStageIdentity);
        }
        if self.nodes.contains_key(&stage.id) {
            return Err(PLCAError::DuplicateStage(stage.id));
        }
        match parent {
            Some(parent_id) => {
                let parent_node = self
                    .nodes
                    .get_mut(parent_id)
                    .ok_or_else(|| PLCAError::StageNotFound(parent_id.to_string()))?;
                parent_node.children.push(stage.id.clone());
            }
            None => self.roots.push(stage.id.clone()),
        }
        self.nodes.insert(
            stage.id.clone(),
            StageNode {
                stage,
                children: Vec::new(),
            },
        );
        Ok(())
    }

    fn graft(&mut self, parent: Option<&str>, def: StageDef) -> PLCAResult<()> {
        let id = def.stage.id.clone();
        self.add_node(parent, def.stage)?;
        for child in def.children {
            self.graft(Some(&id), child)?;
        }
        Ok(())
    }

    /// Apply a patch to the stage with `id`.
    ///
    /// Returns `false` without changes when the stage does not exist. An
    /// empty patch on an existing stage still counts as applied.
    pub fn update(&mut self, id: &str, patch: &StagePatch) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                patch.apply_to(&mut node.stage);
                true
            }
            None => false,
        }
    }

    /// Remove the stage with `id` and its entire subtree.
    ///
    /// Returns `false` when the stage does not exist.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        let mut stack = vec![id.to_string()];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                stack.extend(node.children);
            }
        }
        // Only the subtree's top id is referenced from outside it.
        self.roots.retain(|root| root != id);
        for node in self.nodes.values_mut() {
            node.children.retain(|child| child != id);
        }
        true
    }

    /// Flip the expanded flag of the stage with `id`.
    ///
    /// Returns `false` without changes when the stage does not exist.
    pub fn toggle_expanded(&mut self, id: &str) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.stage.expanded = !node.stage.expanded;
                true
            }
            None => false,
        }
    }

    /// Set the expanded flag on every stage in the forest.
    pub fn set_all_expanded(&mut self, expanded: bool) {
        for node in self.nodes.values_mut() {
            node.stage.expanded = expanded;
        }
    }

    /// Rebuild the nested definition form, preserving order and flags.
    pub fn to_defs(&self) -> Vec<StageDef> {
        self.roots.iter().filter_map(|id| self.def_for(id)).collect()
    }

    fn def_for(&self, id: &str) -> Option<StageDef> {
        let node = self.nodes.get(id)?;
        Some(StageDef {
            stage: node.stage.clone(),
            children: node
                .children
                .iter()
                .filter_map(|child| self.def_for(child))
                .collect(),
        })
    }

    /// Export the forest as a directed graph with stage ids as node weights
    /// and one edge per parent/child link. Nodes are ordered by id so the
    /// output is deterministic.
    pub fn to_graph(&self) -> DiGraph<String, ()> {
        let mut graph = DiGraph::new();
        let mut indices: HashMap<&str, NodeIndex> = HashMap::new();
        let mut ids: Vec<&String> = self.nodes.keys().collect();
        ids.sort();
        for id in ids {
            let index = graph.add_node(id.clone());
            indices.insert(id, index);
        }
        for (id, node) in &self.nodes {
            for child in &node.children {
                if let (Some(&from), Some(&to)) =
                    (indices.get(id.as_str()), indices.get(child.as_str()))
                {
                    graph.add_edge(from, to, ());
                }
            }
        }
        graph
    }

    /// Render the stage forest as a Graphviz DOT diagram.
    ///
    /// Useful for debugging.
    pub fn to_dot(&self) -> String {
        let graph = self.to_graph();
        format!(
            "{:?}",
            Dot::with_attr_getters(
                &graph,
                &[Config::NodeNoLabel, Config::EdgeNoLabel],
                &|_, _| String::new(),
                &|_, (_, id)| format!("label = \"{id}\""),
            )
        )
    }

    /// Check that the arena describes a well-formed forest.
    ///
    /// Verifies referential integrity, that every stage is either a root or
    /// the child of exactly one parent, and that a depth-first search from
    /// the roots reaches every node without back edges. Trees assembled
    /// through the mutation API uphold all of this by construction; the check
    /// exists for forests loaded from external definitions.
    ///
    /// # Errors
    ///
    /// [`PLCAError::MalformedLifecycle`] describing the first violation
    /// found.
    pub fn validate(&self) -> PLCAResult<()> {
        let mut parent_count: HashMap<&str, usize> =
            self.nodes.keys().map(|id| (id.as_str(), 0)).collect();
        for (id, node) in &self.nodes {
            for child in &node.children {
                match parent_count.get_mut(child.as_str()) {
                    Some(count) => *count += 1,
                    None => {
                        return Err(PLCAError::MalformedLifecycle {
                            details: format!("stage '{id}' references unknown child '{child}'"),
                        })
                    }
                }
            }
        }
        let mut root_set: HashSet<&str> = HashSet::new();
        for root in &self.roots {
            if !self.nodes.contains_key(root) {
                return Err(PLCAError::MalformedLifecycle {
                    details: format!("root list references unknown stage '{root}'"),
                });
            }
            if !root_set.insert(root) {
                return Err(PLCAError::MalformedLifecycle {
                    details: format!("stage '{root}' is listed as a root more than once"),
                });
            }
        }
        for (id, count) in &parent_count {
            if *count > 1 {
                return Err(PLCAError::MalformedLifecycle {
                    details: format!("stage '{id}' is referenced as a child {count} times"),
                });
            }
            if *count == 1 && root_set.contains(id) {
                return Err(PLCAError::MalformedLifecycle {
                    details: format!("stage '{id}' is both a root and a child"),
                });
            }
            if *count == 0 && !root_set.contains(id) {
                return Err(PLCAError::MalformedLifecycle {
                    details: format!("stage '{id}' is neither a root nor a child"),
                });
            }
        }
        let graph = self.to_graph();
        let starts: Vec<NodeIndex> = graph
            .node_indices()
            .filter(|index| root_set.contains(graph[*index].as_str()))
            .collect();
        let mut discovered = 0usize;
        let search = depth_first_search(&graph, starts, |event| match event {
            DfsEvent::Discover(_, _) => {
                discovered += 1;
                Ok(())
            }
            DfsEvent::BackEdge(_, _) => Err(()),
            _ => Ok(()),
        });
        if search.is_err() {
            return Err(PLCAError::MalformedLifecycle {
                details: "stage graph contains a cycle".to_string(),
            });
        }
        if discovered != self.nodes.len() {
            return Err(PLCAError::MalformedLifecycle {
                details: format!(
                    "{} stages are unreachable from the roots",
                    self.nodes.len() - discovered
                ),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<StageDef>> for StageTree {
    type Error = PLCAError;

    fn try_from(defs: Vec<StageDef>) -> Result<Self, Self::Error> {
        let mut tree = StageTree::new();
        for def in defs {
            tree.graft(None, def)?;
        }
        Ok(tree)
    }
}

impl From<StageTree> for Vec<StageDef> {
    fn from(tree: StageTree) -> Self {
        tree.to_defs()
    }
}
