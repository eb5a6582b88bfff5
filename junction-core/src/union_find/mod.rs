//! Union-find (disjoint set union) store used by the cluster query engine.
//!
//! The engine processes edges in non-decreasing weight order and merges the
//! components they join. This module tracks component membership with
//! union-by-size and full path compression, giving near-constant amortised
//! `find` and `union`.
//!
//! Every index is checked against the element count before the forest is
//! touched; callers can only mutate the partition through
//! [`DisjointSet::union`].

use crate::{ClusterError, Result};

/// Disjoint-set forest over the elements `0..len`.
///
/// # Invariants
///
/// - `parent[i] == i` exactly when `i` is a root.
/// - `size[root]` is the number of elements whose root is `root`; sizes of
///   non-root entries are stale and never read.
/// - The sizes of all roots sum to `len`, and `components` is the number of
///   roots.
///
/// # Examples
/// ```
/// use junction_core::DisjointSet;
///
/// let mut set = DisjointSet::new(5)?;
/// assert!(set.union(0, 1)?);
/// assert!(set.union(3, 4)?);
/// assert!(!set.union(1, 0)?);
/// assert!(set.connected(0, 1)?);
/// assert_eq!(set.size(4)?, 2);
/// assert_eq!(set.component_count(), 3);
/// # Ok::<(), junction_core::ClusterError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `element_count` singleton components.
    ///
    /// # Errors
    /// Returns [`ClusterError::EmptyElementSet`] when `element_count == 0`.
    pub fn new(element_count: usize) -> Result<Self> {
        if element_count == 0 {
            return Err(ClusterError::EmptyElementSet);
        }
        Ok(Self {
            parent: (0..element_count).collect(),
            size: vec![1; element_count],
            components: element_count,
        })
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the store holds no elements.
    ///
    /// Construction rejects empty stores, so this is always `false`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns the root of the component containing `element`.
    ///
    /// Every node visited on the way up is repointed at the root, so a
    /// repeated lookup reaches the root in one step.
    ///
    /// # Errors
    /// Returns [`ClusterError::ElementOutOfRange`] for an invalid index.
    pub fn find(&mut self, element: usize) -> Result<usize> {
        self.check(element)?;
        Ok(self.find_root(element))
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// The root of the smaller component is attached beneath the root of the
    /// larger one. When both components have the same size the root of
    /// `left` survives.
    ///
    /// Returns `false` without touching any size when both elements already
    /// share a root.
    ///
    /// # Errors
    /// Returns [`ClusterError::ElementOutOfRange`] for an invalid index.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        self.check(left)?;
        self.check(right)?;

        let mut survivor = self.find_root(left);
        let mut absorbed = self.find_root(right);
        if survivor == absorbed {
            return Ok(false);
        }

        let mut survivor_size = self.root_size(survivor)?;
        let mut absorbed_size = self.root_size(absorbed)?;
        if survivor_size < absorbed_size {
            std::mem::swap(&mut survivor, &mut absorbed);
            std::mem::swap(&mut survivor_size, &mut absorbed_size);
        }
        *slot(&mut self.parent, absorbed)? = survivor;
        *slot(&mut self.size, survivor)? = survivor_size.saturating_add(absorbed_size);
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`ClusterError::ElementOutOfRange`] for an invalid index.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Returns the size of the component containing `element`.
    ///
    /// # Errors
    /// Returns [`ClusterError::ElementOutOfRange`] for an invalid index.
    pub fn size(&mut self, element: usize) -> Result<usize> {
        let root = self.find(element)?;
        self.root_size(root)
    }

    /// Returns the size of every component, one entry per root, in ascending
    /// root order.
    #[must_use]
    pub fn component_sizes(&self) -> Vec<usize> {
        self.root_sizes().collect()
    }

    /// Returns the size of the largest component.
    #[must_use]
    pub fn largest_component(&self) -> usize {
        self.root_sizes().max().unwrap_or(0)
    }

    fn root_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.parent
            .iter()
            .zip(&self.size)
            .enumerate()
            .filter(|&(node, (&parent, _))| node == parent)
            .map(|(_, (_, &size))| size)
    }

    fn root_size(&self, root: usize) -> Result<usize> {
        self.size
            .get(root)
            .copied()
            .ok_or(ClusterError::ElementOutOfRange {
                element: root,
                element_count: self.len(),
            })
    }

    fn check(&self, element: usize) -> Result<()> {
        if element < self.len() {
            Ok(())
        } else {
            Err(ClusterError::ElementOutOfRange {
                element,
                element_count: self.len(),
            })
        }
    }

    /// Walks to the root of `node`, then repoints the whole path at it.
    /// `node` must already be in range.
    fn find_root(&mut self, node: usize) -> usize {
        let mut root = node;
        while let Some(&next) = self.parent.get(root) {
            if next == root {
                break;
            }
            root = next;
        }

        let mut current = node;
        while let Some(link) = self.parent.get_mut(current) {
            if *link == root {
                break;
            }
            current = std::mem::replace(link, root);
        }

        root
    }
}

/// Mutable access to `values[index]`, reporting an out-of-range index as an
/// error instead of panicking.
fn slot(values: &mut [usize], index: usize) -> Result<&mut usize> {
    let element_count = values.len();
    values
        .get_mut(index)
        .ok_or(ClusterError::ElementOutOfRange {
            element: index,
            element_count,
        })
}
