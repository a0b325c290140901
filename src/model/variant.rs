//! Variant effects, per-transcript annotations, and variant records.

use indexmap::IndexMap;

use crate::common::GenomeRelease;
use crate::model::genotype::SampleGenotype;

/// Putative impact class of a variant effect, most severe first.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Clone,
    Copy,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum PutativeImpact {
    /// Assumed disruptive change, e.g., truncation or loss of function.
    High,
    /// Non-disruptive change that might alter protein effectiveness.
    Moderate,
    /// Change assumed to be mostly harmless to protein behaviour.
    Low,
    /// Non-coding annotation or no impact prediction available.
    Modifier,
}

/// Variant effects.
///
/// Variants are declared in decreasing order of putative pathogenicity, so
/// the derived `Ord` ranks effects and the first effect of a sorted list is
/// the highest-impact one.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Default,
    Clone,
    Copy,
    strum::EnumIter,
)]
pub enum VariantEffect {
    // high impact
    /// Transcript ablation.
    #[serde(rename = "transcript_ablation")]
    TranscriptAblation,
    /// Exon loss variant.
    #[serde(rename = "exon_loss_variant")]
    ExonLossVariant,
    /// Splice acceptor variant.
    #[serde(rename = "splice_acceptor_variant")]
    SpliceAcceptorVariant,
    /// Splice donor variant.
    #[serde(rename = "splice_donor_variant")]
    SpliceDonorVariant,
    /// Stop gained.
    #[serde(rename = "stop_gained")]
    StopGained,
    /// Frameshift elongation.
    #[serde(rename = "frameshift_elongation")]
    FrameshiftElongation,
    /// Frameshift truncation.
    #[serde(rename = "frameshift_truncation")]
    FrameshiftTruncation,
    /// Frameshift variant.
    #[serde(rename = "frameshift_variant")]
    FrameshiftVariant,
    /// Complex substitution.
    #[serde(rename = "complex_substitution")]
    ComplexSubstitution,
    /// Multi-nucleotide variant.
    #[serde(rename = "mnv")]
    Mnv,
    /// Stop lost.
    #[serde(rename = "stop_lost")]
    StopLost,
    /// Start lost.
    #[serde(rename = "start_lost")]
    StartLost,
    /// Internal feature elongation.
    #[serde(rename = "internal_feature_elongation")]
    InternalFeatureElongation,
    /// Feature truncation.
    #[serde(rename = "feature_truncation")]
    FeatureTruncation,

    // moderate impact
    /// Disruptive in-frame insertion.
    #[serde(rename = "disruptive_inframe_insertion")]
    DisruptiveInframeInsertion,
    /// Disruptive in-frame deletion.
    #[serde(rename = "disruptive_inframe_deletion")]
    DisruptiveInframeDeletion,
    /// In-frame insertion.
    #[serde(rename = "inframe_insertion")]
    InframeInsertion,
    /// In-frame deletion.
    #[serde(rename = "inframe_deletion")]
    InframeDeletion,
    /// Missense variant.
    #[serde(rename = "missense_variant")]
    MissenseVariant,

    // low impact
    /// Splice region variant.
    #[serde(rename = "splice_region_variant")]
    SpliceRegionVariant,
    /// Stop retained variant.
    #[serde(rename = "stop_retained_variant")]
    StopRetainedVariant,
    /// Synonymous variant.
    #[serde(rename = "synonymous_variant")]
    SynonymousVariant,
    /// Coding transcript intron variant.
    #[serde(rename = "coding_transcript_intron_variant")]
    CodingTranscriptIntronVariant,

    // modifier
    /// 5' UTR exon variant.
    #[serde(rename = "5_prime_UTR_exon_variant")]
    FivePrimeUtrExonVariant,
    /// 5' UTR intron variant.
    #[serde(rename = "5_prime_UTR_intron_variant")]
    FivePrimeUtrIntronVariant,
    /// 3' UTR exon variant.
    #[serde(rename = "3_prime_UTR_exon_variant")]
    ThreePrimeUtrExonVariant,
    /// 3' UTR intron variant.
    #[serde(rename = "3_prime_UTR_intron_variant")]
    ThreePrimeUtrIntronVariant,
    /// Non-coding transcript exon variant.
    #[serde(rename = "non_coding_transcript_exon_variant")]
    NonCodingTranscriptExonVariant,
    /// Non-coding transcript intron variant.
    #[serde(rename = "non_coding_transcript_intron_variant")]
    NonCodingTranscriptIntronVariant,
    /// Direct tandem duplication.
    #[serde(rename = "direct_tandem_duplication")]
    DirectTandemDuplication,
    /// Upstream gene variant.
    #[serde(rename = "upstream_gene_variant")]
    UpstreamGeneVariant,
    /// Downstream gene variant.
    #[serde(rename = "downstream_gene_variant")]
    DownstreamGeneVariant,
    /// Regulatory region variant.
    #[serde(rename = "regulatory_region_variant")]
    RegulatoryRegionVariant,
    /// Intergenic variant.
    #[serde(rename = "intergenic_variant")]
    IntergenicVariant,
    /// Structural variant.
    #[serde(rename = "structural_variant")]
    StructuralVariant,
    /// Sequence variant, used when no more specific annotation is available.
    #[default]
    #[serde(rename = "sequence_variant")]
    SequenceVariant,
}

impl VariantEffect {
    /// Return vector of all values of `VariantEffect`.
    pub fn all() -> Vec<Self> {
        use strum::IntoEnumIterator;

        Self::iter().collect()
    }

    /// Return the putative impact class of this effect.
    pub fn impact(&self) -> PutativeImpact {
        match self {
            VariantEffect::TranscriptAblation
            | VariantEffect::ExonLossVariant
            | VariantEffect::SpliceAcceptorVariant
            | VariantEffect::SpliceDonorVariant
            | VariantEffect::StopGained
            | VariantEffect::FrameshiftElongation
            | VariantEffect::FrameshiftTruncation
            | VariantEffect::FrameshiftVariant
            | VariantEffect::ComplexSubstitution
            | VariantEffect::Mnv
            | VariantEffect::StopLost
            | VariantEffect::StartLost
            | VariantEffect::InternalFeatureElongation
            | VariantEffect::FeatureTruncation => PutativeImpact::High,
            VariantEffect::DisruptiveInframeInsertion
            | VariantEffect::DisruptiveInframeDeletion
            | VariantEffect::InframeInsertion
            | VariantEffect::InframeDeletion
            | VariantEffect::MissenseVariant => PutativeImpact::Moderate,
            VariantEffect::SpliceRegionVariant
            | VariantEffect::StopRetainedVariant
            | VariantEffect::SynonymousVariant
            | VariantEffect::CodingTranscriptIntronVariant => PutativeImpact::Low,
            VariantEffect::FivePrimeUtrExonVariant
            | VariantEffect::FivePrimeUtrIntronVariant
            | VariantEffect::ThreePrimeUtrExonVariant
            | VariantEffect::ThreePrimeUtrIntronVariant
            | VariantEffect::NonCodingTranscriptExonVariant
            | VariantEffect::NonCodingTranscriptIntronVariant
            | VariantEffect::DirectTandemDuplication
            | VariantEffect::UpstreamGeneVariant
            | VariantEffect::DownstreamGeneVariant
            | VariantEffect::RegulatoryRegionVariant
            | VariantEffect::IntergenicVariant
            | VariantEffect::StructuralVariant
            | VariantEffect::SequenceVariant => PutativeImpact::Modifier,
        }
    }
}

/// One transcript-level annotation of an allele.
#[derive(
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    derive_builder::Builder,
)]
#[builder(default)]
pub struct TranscriptAnnotation {
    /// Predicted effect on this transcript.
    pub variant_effect: VariantEffect,
    /// Transcript accession.
    pub accession: String,
    /// Symbol of the transcript's gene.
    pub gene_symbol: String,
    /// Gene identifier from the annotation source.
    pub gene_id: String,
    /// HGVS genomic sequence change.
    pub hgvs_genomic: String,
    /// HGVS cDNA sequence change.
    pub hgvs_cdna: String,
    /// HGVS protein sequence change.
    pub hgvs_protein: String,
    /// Distance to the nearest gene for intergenic and up-/downstream
    /// annotations, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_from_nearest_gene: Option<i32>,
}

/// One genomic change annotated against one gene.
///
/// A single raw genomic change may yield several `AnnotatedAllele` values,
/// one per gene group (cf. `annotate::AnnotationSplitter`).  Values are
/// immutable once built; downstream filter and score state lives outside of
/// this type.
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, derive_builder::Builder,
)]
pub struct AnnotatedAllele {
    /// Genome release of the coordinate.
    pub genome_release: GenomeRelease,
    /// Chromosome number (1..22, X as 23, Y as 24, MT as 25).
    pub chromosome: i32,
    /// Chromosome name as given by the caller.
    pub chromosome_name: String,
    /// 1-based position of the first base of the REF string.
    pub position: i32,
    /// Reference allele.
    pub reference: String,
    /// Alternative allele.
    pub alternative: String,
    /// Identifier of the assigned gene, `""` if none is attributable.
    pub gene_id: String,
    /// Symbol of the assigned gene, `"."` if none is attributable.
    pub gene_symbol: String,
    /// Resolved variant effect.
    pub variant_effect: VariantEffect,
    /// The transcript annotations this instance was built from.
    pub transcript_annotations: Vec<TranscriptAnnotation>,
}

/// Opaque identity token for one variant allele.
///
/// Back-references the caller's full variant representation; the decision
/// core only compares and hashes it.
#[derive(
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct VariantId(String);

impl VariantId {
    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VariantId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for VariantId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One variant allele with genotypes and filter state, as consumed by the
/// inheritance and scoring machinery.
#[derive(
    Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize, derive_new::new,
)]
pub struct VariantRecord {
    /// Identity token of the variant allele.
    pub id: VariantId,
    /// Chromosome number (1..22, X as 23, Y as 24, MT as 25).
    pub chromosome: i32,
    /// Genotypes by sample name.
    pub genotypes: IndexMap<String, SampleGenotype>,
    /// Combined deleteriousness score of the variant, higher is worse.
    pub variant_score: f32,
    /// Highest population allele frequency in percent, 0 if unknown.
    pub frequency_max_percent: f32,
    /// Whether the variant is on the curated whitelist.
    pub whitelisted: bool,
    /// Whether the variant passed all upstream filters.
    pub passed_filters: bool,
}

impl VariantRecord {
    /// Return the genotype of the given sample, no-call if absent.
    pub fn sample_genotype(&self, sample: &str) -> SampleGenotype {
        self.genotypes.get(sample).copied().unwrap_or_default()
    }
}
