//! Addressing nodes by their position in the forest

use std::fmt;

use super::Node;

/// Index path from the forest root to a node.
///
/// `[2, 0]` is the first child of the third root. Paths let rows refer back
/// to nodes without borrowing the forest, so the forest stays free to be
/// mutated between renders. A path is only meaningful against the forest
/// state it was derived from: any sort or collapse change invalidates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Path to a root node.
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path to the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// The raw index sequence.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Depth of the addressed node (roots are at depth 0).
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Looks up the node in `forest`.
    pub fn resolve<'a>(&self, forest: &'a [Node]) -> Option<&'a Node> {
        let (first, rest) = self.0.split_first()?;
        let mut node = forest.get(*first)?;
        for &i in rest {
            node = node.children.get(i)?;
        }
        Some(node)
    }

    /// Looks up the node in `forest` mutably.
    pub fn resolve_mut<'a>(&self, forest: &'a mut [Node]) -> Option<&'a mut Node> {
        let (first, rest) = self.0.split_first()?;
        let mut node = forest.get_mut(*first)?;
        for &i in rest {
            node = node.children.get_mut(i)?;
        }
        Some(node)
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        f.write_str("]")
    }
}
