//! Component size summaries.

use core::fmt;

/// Sizes of every connected component, largest first.
///
/// # Examples
/// ```
/// use tonari_core::ComponentSizes;
///
/// let sizes = ComponentSizes::from_unsorted(vec![1, 3, 2]);
/// assert_eq!(sizes.as_slice(), &[3, 2, 1]);
/// assert_eq!(sizes.point_count(), 6);
/// assert_eq!(sizes.to_string(), "[3, 2, 1]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentSizes {
    sizes: Vec<usize>,
}

impl ComponentSizes {
    /// Sorts `sizes` into descending order.
    #[must_use]
    pub fn from_unsorted(mut sizes: Vec<usize>) -> Self {
        sizes.sort_unstable_by(|left, right| right.cmp(left));
        Self { sizes }
    }

    /// Sizes in non-increasing order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns the underlying sizes.
    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.sizes
    }

    /// Number of components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.sizes.len()
    }

    /// Total number of points across all components.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.sizes.iter().sum()
    }

    /// Size of the largest component, if any.
    #[must_use]
    pub fn largest(&self) -> Option<usize> {
        self.sizes.first().copied()
    }

    /// Returns whether there are no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl fmt::Display for ComponentSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, size) in self.sizes.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{size}")?;
        }
        f.write_str("]")
    }
}
