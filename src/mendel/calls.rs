//! Genotype call shapes handed to Mendelian compatibility checkers.

use enum_map::EnumMap;
use indexmap::IndexMap;
use strum_macros::{Display, EnumIter, EnumString};

use crate::mendel::modes::{ModeOfInheritance, SubModeOfInheritance};
use crate::model::genotype::{AlleleCall, SampleGenotype};

/// Supporting code for mendelian compatibility checkers.
pub mod checker {
    /// Error type for checker implementations.
    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        /// The pedigree does not fit the genotype samples.
        #[error("pedigree is incompatible with the genotype samples: {0}")]
        IncompatiblePedigree(String),
    }
}

/// Chromosome class relevant for Mendelian compatibility.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Clone,
    Copy,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChromosomeType {
    /// Chromosomes 1..22.
    Autosomal,
    /// The X chromosome.
    XChromosomal,
    /// The Y chromosome.
    YChromosomal,
    /// The mitochondrial genome.
    Mitochondrial,
}

impl ChromosomeType {
    /// Map a chromosome number (1..25 convention, X as 23, Y as 24, MT as
    /// 25) to its class.
    pub fn from_chromosome_number(chromosome: i32) -> Self {
        match chromosome {
            23 => ChromosomeType::XChromosomal,
            24 => ChromosomeType::YChromosomal,
            25 => ChromosomeType::Mitochondrial,
            _ => ChromosomeType::Autosomal,
        }
    }
}

/// Genotype of one sample as a list of allele numbers.
#[derive(
    Debug, Default, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, derive_new::new,
)]
pub struct Genotype {
    /// The allele numbers of the calls, `NO_CALL` for missing calls.
    pub allele_numbers: Vec<i32>,
}

impl Genotype {
    /// Allele number of a missing call.
    pub const NO_CALL: i32 = -1;
    /// Allele number of a reference call.
    pub const REF: i32 = 0;
    /// Allele number of the alternative allele under consideration.
    pub const ALT: i32 = 1;
    /// Allele number of any other alternative allele.
    pub const OTHER_ALT: i32 = 2;
}

impl From<SampleGenotype> for Genotype {
    fn from(genotype: SampleGenotype) -> Self {
        let allele_numbers = genotype
            .calls()
            .iter()
            .map(|call| match call {
                AlleleCall::Ref => Genotype::REF,
                AlleleCall::Alt => Genotype::ALT,
                AlleleCall::OtherAlt => Genotype::OTHER_ALT,
                AlleleCall::NoCall => Genotype::NO_CALL,
            })
            .collect();
        Self { allele_numbers }
    }
}

/// Genotypes of all pedigree samples for one variant, as handed to a
/// checker.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, derive_new::new)]
pub struct GenotypeCalls {
    /// Class of the variant's chromosome.
    pub chrom_type: ChromosomeType,
    /// Genotype by sample name.
    pub genotypes: IndexMap<String, Genotype>,
    /// Opaque back-reference to the caller's variant.  Checkers must pass it
    /// through untouched.
    pub payload: usize,
}

/// Oracle deciding Mendelian compatibility of genotype calls.
///
/// Implementations encapsulate the actual segregation logic; the annotator
/// in `mendel::annotator` only prepares their input and interprets their
/// output.
pub trait MendelianChecker {
    /// Return, for each mode of inheritance, the calls compatible with it.
    fn check_modes(
        &self,
        calls: &[GenotypeCalls],
    ) -> Result<EnumMap<ModeOfInheritance, Vec<GenotypeCalls>>, checker::Error>;

    /// Return, for each sub-mode of inheritance, the calls compatible with
    /// it.
    fn check_sub_modes(
        &self,
        calls: &[GenotypeCalls],
    ) -> Result<EnumMap<SubModeOfInheritance, Vec<GenotypeCalls>>, checker::Error>;
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{ChromosomeType, Genotype};
    use crate::model::genotype::{AlleleCall, SampleGenotype};

    #[rstest::rstest]
    #[case(1, ChromosomeType::Autosomal)]
    #[case(7, ChromosomeType::Autosomal)]
    #[case(22, ChromosomeType::Autosomal)]
    #[case(23, ChromosomeType::XChromosomal)]
    #[case(24, ChromosomeType::YChromosomal)]
    #[case(25, ChromosomeType::Mitochondrial)]
    fn chromosome_type_from_number(#[case] chromosome: i32, #[case] expected: ChromosomeType) {
        assert_eq!(expected, ChromosomeType::from_chromosome_number(chromosome));
    }

    #[rstest::rstest]
    #[case(ChromosomeType::Autosomal, "autosomal")]
    #[case(ChromosomeType::XChromosomal, "x_chromosomal")]
    #[case(ChromosomeType::YChromosomal, "y_chromosomal")]
    #[case(ChromosomeType::Mitochondrial, "mitochondrial")]
    fn chromosome_type_display_parse_round_trip(
        #[case] chrom_type: ChromosomeType,
        #[case] expected: &str,
    ) -> Result<(), anyhow::Error> {
        assert_eq!(expected, chrom_type.to_string());
        let parsed: ChromosomeType = expected.parse()?;
        assert_eq!(chrom_type, parsed);

        Ok(())
    }

    #[rstest::rstest]
    #[case(SampleGenotype::hom_ref(), vec![0, 0])]
    #[case(SampleGenotype::het(), vec![0, 1])]
    #[case(SampleGenotype::hom_alt(), vec![1, 1])]
    #[case(SampleGenotype::no_call(), vec![-1, -1])]
    #[case(SampleGenotype::of(AlleleCall::Alt, AlleleCall::OtherAlt), vec![1, 2])]
    fn genotype_from_sample_genotype(
        #[case] genotype: SampleGenotype,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(expected, Genotype::from(genotype).allele_numbers);
    }
}
