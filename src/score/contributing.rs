//! Selection of the alleles that contribute to a gene's score.

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

use crate::mendel::modes::ModeOfInheritance;
use crate::model::variant::{VariantId, VariantRecord};

/// Which alleles contribute to which mode's gene score.
///
/// Kept separate from the variant records themselves so that selection under
/// one mode never mutates shared variant state.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Contributions {
    /// Contributing allele identities by mode, in marking order.
    by_mode: IndexMap<ModeOfInheritance, IndexSet<VariantId>>,
}

impl Contributions {
    /// Mark the allele as contributing under the mode.  Idempotent.
    pub fn mark(&mut self, mode: ModeOfInheritance, id: VariantId) {
        self.by_mode.entry(mode).or_default().insert(id);
    }

    /// Whether the allele contributes under the mode.
    pub fn contributes(&self, mode: ModeOfInheritance, id: &VariantId) -> bool {
        self.by_mode
            .get(&mode)
            .map(|ids| ids.contains(id))
            .unwrap_or(false)
    }

    /// The alleles marked under the mode, in marking order.
    pub fn under_mode(&self, mode: ModeOfInheritance) -> Vec<&VariantId> {
        self.by_mode
            .get(&mode)
            .map(|ids| ids.iter().collect())
            .unwrap_or_default()
    }

    /// Whether nothing has been marked.
    pub fn is_empty(&self) -> bool {
        self.by_mode.values().all(|ids| ids.is_empty())
    }
}

/// A candidate compound-heterozygous pair with its combined score.
#[derive(Debug, Clone, PartialEq)]
pub struct CompHetPair {
    /// First allele of the pair.
    pub allele_one: Option<VariantRecord>,
    /// Second allele of the pair.
    pub allele_two: Option<VariantRecord>,
    /// Combined score, the mean of the present alleles' scores.
    pub score: f64,
}

impl CompHetPair {
    /// Build a pair; absent alleles contribute a score of zero.
    pub fn new(allele_one: Option<VariantRecord>, allele_two: Option<VariantRecord>) -> Self {
        let score = (Self::score_of(&allele_one) + Self::score_of(&allele_two)) / 2.0;
        Self {
            allele_one,
            allele_two,
            score,
        }
    }

    fn score_of(allele: &Option<VariantRecord>) -> f64 {
        allele
            .as_ref()
            .map(|record| f64::from(record.variant_score))
            .unwrap_or(0.0)
    }
}

/// Source of candidate compound-heterozygous pairs within one gene.
///
/// Implementations must only yield pairs whose alleles can lie on opposite
/// haplotypes of the proband.
pub trait TransPairGenerator {
    /// The candidate pairs among the given variants.
    fn candidate_pairs(&self, variants: &[VariantRecord])
        -> Vec<(VariantRecord, VariantRecord)>;
}

/// Pair generator yielding all pairs of proband-heterozygous variants.
///
/// Does not check phase, so it over-generates for unphased data; suitable
/// for tests and single-sample analyses where phase is unknown anyway.
pub struct NaiveTransPairGenerator {
    /// Name of the proband sample.
    proband: String,
}

impl NaiveTransPairGenerator {
    /// Construct for the given proband sample.
    pub fn new(proband: &str) -> Self {
        Self {
            proband: proband.to_string(),
        }
    }
}

impl TransPairGenerator for NaiveTransPairGenerator {
    fn candidate_pairs(
        &self,
        variants: &[VariantRecord],
    ) -> Vec<(VariantRecord, VariantRecord)> {
        variants
            .iter()
            .filter(|record| record.sample_genotype(&self.proband).is_het())
            .cloned()
            .tuple_combinations()
            .collect()
    }
}

/// Selects the contributing alleles of one gene for one mode of inheritance.
pub struct ContributingAlleleSelector<G> {
    /// Name of the proband sample.
    proband: String,
    /// Source of candidate compound-heterozygous pairs.
    pair_generator: G,
}

impl<G> ContributingAlleleSelector<G>
where
    G: TransPairGenerator,
{
    /// Construct for the given proband sample and pair generator.
    pub fn new(proband: &str, pair_generator: G) -> Self {
        Self {
            proband: proband.to_string(),
            pair_generator,
        }
    }

    /// Select the alleles contributing to the gene's score under the mode.
    ///
    /// `compatible` must already be restricted to the variants compatible
    /// with the mode.  The winners are marked in `contributions` and
    /// returned; an empty input yields an empty selection.
    pub fn select(
        &self,
        mode: ModeOfInheritance,
        compatible: &[VariantRecord],
        contributions: &mut Contributions,
    ) -> Vec<VariantRecord> {
        if compatible.is_empty() {
            return Vec::new();
        }
        match mode {
            ModeOfInheritance::AutosomalRecessive | ModeOfInheritance::XRecessive => {
                self.select_recessive(mode, compatible, contributions)
            }
            _ => self.select_non_recessive(mode, compatible, contributions),
        }
    }

    /// Recessive selection: the best compound-heterozygous pair competes
    /// with the best homozygous-alternative variant.
    ///
    /// On exact score equality the pair wins.  This is long-standing
    /// behaviour that ranked lists depend on; do not change it.
    fn select_recessive(
        &self,
        mode: ModeOfInheritance,
        compatible: &[VariantRecord],
        contributions: &mut Contributions,
    ) -> Vec<VariantRecord> {
        let best_pair = self
            .pair_generator
            .candidate_pairs(compatible)
            .into_iter()
            .map(|(one, two)| CompHetPair::new(Some(one), Some(two)))
            .fold(None, |best: Option<CompHetPair>, pair| match best {
                Some(b) => {
                    if pair.score > b.score {
                        Some(pair)
                    } else {
                        Some(b)
                    }
                }
                None => Some(pair),
            });
        let best_hom_alt = compatible
            .iter()
            .filter(|record| record.sample_genotype(&self.proband).is_hom_alt())
            .fold(None, |best: Option<&VariantRecord>, record| match best {
                Some(b) => {
                    if record.variant_score > b.variant_score {
                        Some(record)
                    } else {
                        Some(b)
                    }
                }
                None => Some(record),
            });

        let best_hom_alt_score = best_hom_alt
            .map(|record| f64::from(record.variant_score))
            .unwrap_or(0.0);
        match best_pair {
            Some(pair) if pair.score >= best_hom_alt_score => {
                tracing::debug!("top scoring comp het: {:?}", &pair);
                let winners: Vec<VariantRecord> = [pair.allele_one, pair.allele_two]
                    .into_iter()
                    .flatten()
                    .collect();
                for record in &winners {
                    contributions.mark(mode, record.id.clone());
                }
                winners
            }
            _ => match best_hom_alt {
                Some(record) => {
                    tracing::debug!("top scoring hom alt: {:?}", record);
                    contributions.mark(mode, record.id.clone());
                    vec![record.clone()]
                }
                None => Vec::new(),
            },
        }
    }

    /// Non-recessive selection: the single best-scoring variant, the
    /// earliest one on ties.
    fn select_non_recessive(
        &self,
        mode: ModeOfInheritance,
        compatible: &[VariantRecord],
        contributions: &mut Contributions,
    ) -> Vec<VariantRecord> {
        let best = compatible
            .iter()
            .fold(None, |best: Option<&VariantRecord>, record| match best {
                Some(b) => {
                    if record.variant_score > b.variant_score {
                        Some(record)
                    } else {
                        Some(b)
                    }
                }
                None => Some(record),
            });
        match best {
            Some(record) => {
                contributions.mark(mode, record.id.clone());
                vec![record.clone()]
            }
            None => Vec::new(),
        }
    }
}
