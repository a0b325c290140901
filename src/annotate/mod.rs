//! Assigning annotated alleles to genes and resolving their effects.

pub mod regulatory;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::annotate::regulatory::RegulatoryRegionIndex;
use crate::common::GenomeRelease;
use crate::model::allele::AllelePosition;
use crate::model::variant::{
    AnnotatedAllele, AnnotatedAlleleBuilder, PutativeImpact, TranscriptAnnotation, VariantEffect,
};

/// Highest impact class that still allows splitting an allele across genes.
///
/// Large alleles annotated to several genes are only split when the overall
/// effect is at most this severe; below it, per-gene assignment is not
/// meaningful.
pub const SPLIT_IMPACT_THRESHOLD: PutativeImpact = PutativeImpact::Moderate;

/// Gene symbol assigned when no annotation is attributable to a gene.
pub const UNKNOWN_GENE_SYMBOL: &str = ".";

/// Splits transcript annotations of one allele into per-gene instances.
///
/// Effect prediction itself happens upstream; this type decides how many
/// annotated instances an allele yields, which gene each one is assigned to,
/// and which single effect represents it.
pub struct AnnotationSplitter<R> {
    /// Genome release the coordinates refer to.
    genome_release: GenomeRelease,
    /// Index of regulatory regions for the effect override.
    regulatory_regions: R,
}

impl<R> AnnotationSplitter<R>
where
    R: RegulatoryRegionIndex,
{
    /// Construct given the genome release and the regulatory region index.
    pub fn new(genome_release: GenomeRelease, regulatory_regions: R) -> Self {
        Self {
            genome_release,
            regulatory_regions,
        }
    }

    /// Build the annotated instances of one allele.
    ///
    /// The allele is split into one instance per gene iff it has more than
    /// one annotation, its top impact is at most `SPLIT_IMPACT_THRESHOLD`,
    /// and more than one distinct gene symbol remains after restricting the
    /// annotations to that impact class.  Otherwise a single instance carries
    /// all annotations.
    pub fn split(
        &self,
        chromosome: i32,
        chromosome_name: &str,
        allele: &AllelePosition,
        annotations: Vec<TranscriptAnnotation>,
    ) -> Result<Vec<AnnotatedAllele>, anyhow::Error> {
        if Self::should_split(&annotations) {
            let mut by_gene: IndexMap<String, Vec<TranscriptAnnotation>> = IndexMap::new();
            for annotation in annotations {
                by_gene
                    .entry(annotation.gene_symbol.clone())
                    .or_default()
                    .push(annotation);
            }
            by_gene
                .into_iter()
                .map(|(_, group)| {
                    self.build_annotated_allele(chromosome, chromosome_name, allele, group)
                })
                .collect()
        } else {
            Ok(vec![self.build_annotated_allele(
                chromosome,
                chromosome_name,
                allele,
                annotations,
            )?])
        }
    }

    /// Decide whether to split, checking the cheapest condition first.
    fn should_split(annotations: &[TranscriptAnnotation]) -> bool {
        if annotations.len() <= 1 {
            return false;
        }
        let top_impact = match highest_impact_annotation(annotations) {
            Some(annotation) => annotation.variant_effect.impact(),
            None => return false,
        };
        if top_impact > SPLIT_IMPACT_THRESHOLD {
            return false;
        }
        if annotations
            .iter()
            .map(|annotation| &annotation.gene_symbol)
            .unique()
            .count()
            <= 1
        {
            return false;
        }
        annotations
            .iter()
            .filter(|annotation| annotation.variant_effect.impact() <= SPLIT_IMPACT_THRESHOLD)
            .map(|annotation| &annotation.gene_symbol)
            .unique()
            .count()
            > 1
    }

    fn build_annotated_allele(
        &self,
        chromosome: i32,
        chromosome_name: &str,
        allele: &AllelePosition,
        annotations: Vec<TranscriptAnnotation>,
    ) -> Result<AnnotatedAllele, anyhow::Error> {
        let (gene_symbol, gene_id, effect) = match highest_impact_annotation(&annotations) {
            Some(annotation) => (
                build_gene_symbol(&annotation.gene_symbol),
                annotation.gene_id.clone(),
                annotation.variant_effect,
            ),
            None => (
                UNKNOWN_GENE_SYMBOL.to_string(),
                String::new(),
                VariantEffect::SequenceVariant,
            ),
        };
        AnnotatedAlleleBuilder::default()
            .genome_release(self.genome_release)
            .chromosome(chromosome)
            .chromosome_name(chromosome_name.to_string())
            .position(allele.pos())
            .reference(allele.reference().to_string())
            .alternative(allele.alternative().to_string())
            .gene_id(gene_id)
            .gene_symbol(gene_symbol)
            .variant_effect(self.resolve_variant_effect(effect, chromosome, allele))
            .transcript_annotations(annotations)
            .build()
            .map_err(|e| anyhow::anyhow!("could not build annotated allele: {}", e))
    }

    /// Resolve the final effect of one instance.
    fn resolve_variant_effect(
        &self,
        effect: VariantEffect,
        chromosome: i32,
        allele: &AllelePosition,
    ) -> VariantEffect {
        if allele.is_symbolic() {
            return VariantEffect::StructuralVariant;
        }
        // Regulatory regions can overlap coding annotations, so only the
        // intergenic and upstream effects are overridden.
        if matches!(
            effect,
            VariantEffect::IntergenicVariant | VariantEffect::UpstreamGeneVariant
        ) && self.regulatory_regions.contains(chromosome, allele.pos())
        {
            return VariantEffect::RegulatoryRegionVariant;
        }
        effect
    }
}

/// The most pathogenic annotation, first-seen wins ties.
fn highest_impact_annotation(
    annotations: &[TranscriptAnnotation],
) -> Option<&TranscriptAnnotation> {
    annotations.iter().fold(None, |best, annotation| match best {
        Some(b) if b.variant_effect <= annotation.variant_effect => Some(b),
        _ => Some(annotation),
    })
}

fn build_gene_symbol(gene_symbol: &str) -> String {
    if gene_symbol.is_empty() {
        UNKNOWN_GENE_SYMBOL.to_string()
    } else {
        gene_symbol.to_string()
    }
}
