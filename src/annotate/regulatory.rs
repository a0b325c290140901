//! Lookup of regulatory regions by chromosomal position.

use bio::data_structures::interval_tree::ArrayBackedIntervalTree;
use indexmap::IndexMap;

/// Alias for the interval tree that we use.
type IntervalTree = ArrayBackedIntervalTree<i32, u32>;

/// Answers whether a chromosomal position falls into a regulatory region.
pub trait RegulatoryRegionIndex {
    /// Whether any regulatory region contains the given position.
    ///
    /// `chromosome` is the chromosome number (1..22, X as 23, Y as 24, MT as
    /// 25), `position` is 1-based.
    fn contains(&self, chromosome: i32, position: i32) -> bool;
}

/// One regulatory region, with 1-based inclusive coordinates.
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, derive_new::new,
)]
pub struct RegulatoryFeature {
    /// Chromosome number of the region.
    pub chromosome: i32,
    /// 1-based start position.
    pub start: i32,
    /// 1-based (inclusive) end position.
    pub end: i32,
}

/// Region index backed by one interval tree per chromosome.
#[derive(Debug, Default)]
pub struct ChromosomalRegionIndex {
    /// The features, in insertion order.
    features: Vec<RegulatoryFeature>,
    /// Interval trees with indices into `features`, by chromosome number.
    trees: IndexMap<i32, IntervalTree>,
}

impl ChromosomalRegionIndex {
    /// Build an index from the given features.
    ///
    /// Features with `start > end` cannot be indexed and are skipped with a
    /// warning.
    pub fn from_features(features: Vec<RegulatoryFeature>) -> Self {
        let mut kept = Vec::new();
        let mut trees: IndexMap<i32, IntervalTree> = IndexMap::new();
        for feature in features {
            if feature.start > feature.end {
                tracing::warn!("skipping regulatory feature with start > end: {:?}", feature);
                continue;
            }
            trees
                .entry(feature.chromosome)
                .or_insert_with(IntervalTree::new)
                .insert((feature.start)..(feature.end + 1), kept.len() as u32);
            kept.push(feature);
        }
        for tree in trees.values_mut() {
            tree.index();
        }
        Self {
            features: kept,
            trees,
        }
    }

    /// The indexed features, in insertion order.
    pub fn features(&self) -> &[RegulatoryFeature] {
        &self.features
    }

    /// Number of indexed features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the index holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl RegulatoryRegionIndex for ChromosomalRegionIndex {
    fn contains(&self, chromosome: i32, position: i32) -> bool {
        match self.trees.get(&chromosome) {
            Some(tree) => !tree.find(position..(position + 1)).is_empty(),
            None => false,
        }
    }
}
