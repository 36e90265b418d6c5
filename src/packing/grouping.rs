//! Bin grouping: the item sizes assigned to each bin index.

use std::collections::BTreeMap;

/// Mapping from bin index to the sizes of the items assigned to it.
///
/// Built on demand from a chromosome; never stored on it. Only bins that
/// received at least one item appear, and iteration is in bin-index order.
///
/// # Examples
///
/// ```
/// use u_binpack::packing::BinGrouping;
///
/// let grouping = BinGrouping::from_chromosome(&[2, 0, 2], &[4.0, 8.0, 1.0]);
/// let bins: Vec<_> = grouping.iter().collect();
/// assert_eq!(bins, vec![(0, &[8.0][..]), (2, &[4.0, 1.0][..])]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinGrouping {
    bins: BTreeMap<usize, Vec<f64>>,
}

impl BinGrouping {
    /// Groups `item_sizes` by the bin indices in `chromosome`.
    ///
    /// Within a bin, items keep their item order.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn from_chromosome(chromosome: &[usize], item_sizes: &[f64]) -> Self {
        assert_eq!(
            chromosome.len(),
            item_sizes.len(),
            "chromosome length must equal item count"
        );

        let mut bins: BTreeMap<usize, Vec<f64>> = BTreeMap::new();
        for (&bin, &size) in chromosome.iter().zip(item_sizes) {
            bins.entry(bin).or_default().push(size);
        }
        Self { bins }
    }

    /// Iterates `(bin_index, item_sizes)` in ascending bin index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[f64])> + '_ {
        self.bins.iter().map(|(&bin, items)| (bin, items.as_slice()))
    }

    /// Iterates `(bin_index, total_size)` in ascending bin index.
    pub fn loads(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.bins
            .iter()
            .map(|(&bin, items)| (bin, items.iter().sum()))
    }

    /// Items assigned to `bin`, if any.
    pub fn get(&self, bin: usize) -> Option<&[f64]> {
        self.bins.get(&bin).map(Vec::as_slice)
    }

    /// Number of bins with a strictly positive total.
    pub fn bins_used(&self) -> usize {
        self.loads().filter(|&(_, load)| load > 0.0).count()
    }

    /// Sum over bins of `max(0, load - capacity)`.
    pub fn overflow(&self, capacity: f64) -> f64 {
        self.loads()
            .map(|(_, load)| (load - capacity).max(0.0))
            .sum()
    }

    /// Consumes the grouping, returning the underlying map.
    pub fn into_inner(self) -> BTreeMap<usize, Vec<f64>> {
        self.bins
    }
}
