//! Disjoint-set forest over ingested points.
//!
//! Nodes live in a growable arena and are addressed by their arena index.
//! Each point owns exactly one slot for the lifetime of the forest; slots are
//! never reused. Roots are self-parented and carry the size of their tree.

use std::collections::HashMap;

use crate::{error::ForestError, point::PointId};

type ForestResult<T> = core::result::Result<T, ForestError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SetNode {
    parent: usize,
    size: usize,
}

/// Handle to a freshly created singleton set.
///
/// # Examples
/// ```
/// use tonari_core::{DisjointForest, PointId};
///
/// let mut forest = DisjointForest::new();
/// let handle = forest.create_set(PointId::new(7))?;
/// assert_eq!(handle.index(), 0);
/// # Ok::<(), tonari_core::ForestError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SetHandle(usize);

impl SetHandle {
    /// Arena index of the set's node.
    #[rustfmt::skip]
    #[must_use]
    pub const fn index(self) -> usize { self.0 }
}

/// Result of [`DisjointForest::merge`].
///
/// When both arguments already shared a root, `surviving == absorbed` and
/// nothing changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Root that remains a root after the merge.
    pub surviving: usize,
    /// Root that was re-parented under `surviving`.
    pub absorbed: usize,
}

impl MergeOutcome {
    /// Returns whether the merge left the forest unchanged.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.surviving == self.absorbed
    }
}

/// Union-find structure with full path compression and union by size.
///
/// # Examples
/// ```
/// use tonari_core::{DisjointForest, PointId};
///
/// let mut forest = DisjointForest::new();
/// for id in 0..3 {
///     forest.create_set(PointId::new(id))?;
/// }
/// let outcome = forest.merge(PointId::new(0), PointId::new(2))?;
/// assert!(!outcome.is_noop());
/// assert_eq!(forest.find(PointId::new(2))?, outcome.surviving);
/// assert_eq!(forest.size_of(outcome.surviving), Some(2));
/// # Ok::<(), tonari_core::ForestError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct DisjointForest {
    nodes: Vec<SetNode>,
    elements: HashMap<PointId, usize>,
}

impl DisjointForest {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            elements: HashMap::with_capacity(capacity),
        }
    }

    /// Number of sets ever created (arena length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether no set has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns whether `id` owns a set in the forest.
    #[must_use]
    pub fn contains(&self, id: PointId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Allocates a singleton set for `id` at the end of the arena.
    ///
    /// # Errors
    /// Returns [`ForestError::DuplicateElement`] when `id` already owns a
    /// set; the forest is left unchanged.
    pub fn create_set(&mut self, id: PointId) -> ForestResult<SetHandle> {
        if self.elements.contains_key(&id) {
            return Err(ForestError::DuplicateElement { id });
        }
        let index = self.nodes.len();
        self.nodes.push(SetNode {
            parent: index,
            size: 1,
        });
        self.elements.insert(id, index);
        Ok(SetHandle(index))
    }

    /// Returns the arena index of the root of `id`'s tree.
    ///
    /// Every node visited on the way up is re-linked directly to the root.
    ///
    /// # Errors
    /// Returns [`ForestError::UnknownElement`] when `id` was never registered.
    pub fn find(&mut self, id: PointId) -> ForestResult<usize> {
        let start = self.index_of(id)?;
        Ok(self.find_index(start))
    }

    /// Unions the sets containing `x` and `y`.
    ///
    /// The root of the smaller tree is re-parented under the larger one. On a
    /// size tie the root of `x` survives.
    ///
    /// # Errors
    /// Returns [`ForestError::UnknownElement`] when either point was never
    /// registered.
    pub fn merge(&mut self, x: PointId, y: PointId) -> ForestResult<MergeOutcome> {
        let x_root = self.find(x)?;
        let y_root = self.find(y)?;
        if x_root == y_root {
            return Ok(MergeOutcome {
                surviving: x_root,
                absorbed: x_root,
            });
        }

        let (surviving, absorbed) = if self.nodes[x_root].size < self.nodes[y_root].size {
            (y_root, x_root)
        } else {
            (x_root, y_root)
        };
        self.nodes[absorbed].parent = surviving;
        self.nodes[surviving].size += self.nodes[absorbed].size;
        Ok(MergeOutcome {
            surviving,
            absorbed,
        })
    }

    /// Size of the tree rooted at `root`, or `None` when `root` is not a root.
    #[must_use]
    pub fn size_of(&self, root: usize) -> Option<usize> {
        self.nodes
            .get(root)
            .filter(|node| node.parent == root)
            .map(|node| node.size)
    }

    fn index_of(&self, id: PointId) -> ForestResult<usize> {
        self.elements
            .get(&id)
            .copied()
            .ok_or(ForestError::UnknownElement { id })
    }

    fn find_index(&mut self, start: usize) -> usize {
        let mut root = start;
        while self.nodes[root].parent != root {
            root = self.nodes[root].parent;
        }

        let mut node = start;
        while self.nodes[node].parent != root {
            let parent = self.nodes[node].parent;
            self.nodes[node].parent = root;
            node = parent;
        }
        root
    }
}
