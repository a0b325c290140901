//! Scoring genes from their variants' inheritance compatibility.

pub mod contributing;

use rayon::prelude::*;

use crate::mendel::annotator::InheritanceAnnotator;
use crate::mendel::calls::MendelianChecker;
use crate::mendel::modes::ModeOfInheritance;
use crate::model::variant::VariantRecord;
use crate::score::contributing::{ContributingAlleleSelector, Contributions, TransPairGenerator};

/// Score of one gene under one mode of inheritance.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, derive_new::new)]
pub struct GeneScore {
    /// The mode the score was computed under.
    pub mode: ModeOfInheritance,
    /// The gene's variant score under this mode, the mean of the
    /// contributing alleles' scores.
    pub variant_score: f32,
    /// The contributing alleles, one or two.
    pub contributing: Vec<VariantRecord>,
}

/// The variants of one gene, the unit of parallel scoring.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, derive_new::new)]
pub struct GeneVariants {
    /// Symbol of the gene.
    pub gene_symbol: String,
    /// The gene's variants.
    pub variants: Vec<VariantRecord>,
}

/// Result of scoring one gene.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, derive_new::new)]
pub struct GeneResult {
    /// Symbol of the gene.
    pub gene_symbol: String,
    /// One score per compatible mode, in mode declaration order.
    pub scores: Vec<GeneScore>,
    /// Which alleles contribute under which mode.
    pub contributions: Contributions,
}

/// Scores one gene at a time by combining inheritance compatibility and
/// contributing-allele selection.
pub struct GeneScorer<C, G> {
    /// Computes per-mode compatibility of the gene's variants.
    annotator: InheritanceAnnotator<C>,
    /// Selects the contributing alleles per mode.
    selector: ContributingAlleleSelector<G>,
}

impl<C, G> GeneScorer<C, G>
where
    C: MendelianChecker,
    G: TransPairGenerator,
{
    /// Construct from the annotator and selector.
    pub fn new(
        annotator: InheritanceAnnotator<C>,
        selector: ContributingAlleleSelector<G>,
    ) -> Self {
        Self {
            annotator,
            selector,
        }
    }

    /// Score one gene's variants under each compatible mode.
    ///
    /// Variants that failed the upstream filters are ignored.  Yields one
    /// `GeneScore` per compatible mode together with the contribution marks
    /// made while scoring.
    pub fn score_gene(&self, variants: &[VariantRecord]) -> (Vec<GeneScore>, Contributions) {
        let passed: Vec<VariantRecord> = variants
            .iter()
            .filter(|record| record.passed_filters)
            .cloned()
            .collect();
        let compatible = self.annotator.compatible_modes(&passed);

        let mut contributions = Contributions::default();
        let mut scores = Vec::new();
        for (mode, records) in &compatible {
            let contributing = self.selector.select(*mode, records, &mut contributions);
            let variant_score = combined_score(&contributing);
            scores.push(GeneScore::new(*mode, variant_score, contributing));
        }
        (scores, contributions)
    }
}

/// The mean of the contributing alleles' scores, zero for none.
fn combined_score(contributing: &[VariantRecord]) -> f32 {
    match contributing {
        [] => 0.0,
        [single] => single.variant_score,
        _ => {
            let sum: f64 = contributing
                .iter()
                .map(|record| f64::from(record.variant_score))
                .sum();
            (sum / contributing.len() as f64) as f32
        }
    }
}

/// Score all genes in parallel, one task per gene, preserving input order.
pub fn score_genes<C, G>(scorer: &GeneScorer<C, G>, genes: &[GeneVariants]) -> Vec<GeneResult>
where
    C: MendelianChecker + Sync,
    G: TransPairGenerator + Sync,
{
    genes
        .par_iter()
        .map(|gene| {
            let (scores, contributions) = scorer.score_gene(&gene.variants);
            GeneResult::new(gene.gene_symbol.clone(), scores, contributions)
        })
        .collect()
}
