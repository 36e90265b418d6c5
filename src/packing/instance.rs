//! Problem instance: item sizes and bin capacity.

use crate::error::ConfigError;

/// An immutable one-dimensional bin packing instance.
///
/// Item order matters: position `i` of a chromosome is item `i`.
///
/// # Examples
///
/// ```
/// use u_binpack::packing::ProblemInstance;
///
/// let instance = ProblemInstance::new(vec![4.0, 8.0, 1.0, 4.0], 10.0).unwrap();
/// assert_eq!(instance.item_count(), 4);
/// assert_eq!(instance.max_bins(), 4);
/// assert_eq!(instance.lower_bound(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProblemInstance {
    item_sizes: Vec<f64>,
    capacity: f64,
}

impl ProblemInstance {
    /// Creates an instance, rejecting empty item lists, non-positive or
    /// non-finite sizes, and non-positive or non-finite capacity.
    ///
    /// Items larger than the capacity are accepted: such an instance has no
    /// feasible packing, and the search minimizes overflow instead.
    pub fn new(item_sizes: Vec<f64>, capacity: f64) -> Result<Self, ConfigError> {
        if item_sizes.is_empty() {
            return Err(ConfigError::NoItems);
        }
        if let Some((index, &size)) = item_sizes
            .iter()
            .enumerate()
            .find(|(_, &s)| !(s.is_finite() && s > 0.0))
        {
            return Err(ConfigError::InvalidItemSize { index, size });
        }
        if !(capacity.is_finite() && capacity > 0.0) {
            return Err(ConfigError::InvalidCapacity(capacity));
        }
        Ok(Self {
            item_sizes,
            capacity,
        })
    }

    /// Convenience constructor for integer sizes.
    pub fn from_integers(item_sizes: &[u32], capacity: u32) -> Result<Self, ConfigError> {
        Self::new(
            item_sizes.iter().map(|&s| f64::from(s)).collect(),
            f64::from(capacity),
        )
    }

    /// Item sizes in item order.
    pub fn item_sizes(&self) -> &[f64] {
        &self.item_sizes
    }

    /// Bin capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Number of items (`N`), which is also the chromosome length.
    pub fn item_count(&self) -> usize {
        self.item_sizes.len()
    }

    /// Size of the bin-index range `[0, max_bins)`.
    ///
    /// One bin per item is the worst case, so `N` labels always suffice.
    pub fn max_bins(&self) -> usize {
        self.item_sizes.len()
    }

    /// Sum of all item sizes.
    pub fn total_size(&self) -> f64 {
        self.item_sizes.iter().sum()
    }

    /// `ceil(total_size / capacity)`: no packing can use fewer bins.
    pub fn lower_bound(&self) -> usize {
        (self.total_size() / self.capacity).ceil() as usize
    }
}
