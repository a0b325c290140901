//! Annotating gene variants with their compatible modes of inheritance.

use indexmap::IndexMap;

use crate::mendel::calls::{ChromosomeType, Genotype, GenotypeCalls, MendelianChecker};
use crate::mendel::modes::{InheritanceModeOptions, ModeOfInheritance, SubModeOfInheritance};
use crate::model::pedigree::Pedigree;
use crate::model::variant::VariantRecord;

/// Supporting code for `InheritanceAnnotator`.
pub mod inheritance_annotator {
    /// Error type for annotator construction.
    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        /// The pedigree cannot anchor a segregation analysis.
        #[error("pedigree has no named, affected individual")]
        EmptyPedigree,
    }
}

/// Annotates the variants of one gene with their compatible modes of
/// inheritance.
///
/// The segregation logic itself lives behind the `MendelianChecker` trait;
/// this type converts variants into checker input, maps the checker's
/// verdicts back, and applies the per-mode frequency ceilings of
/// `InheritanceModeOptions`.
pub struct InheritanceAnnotator<C> {
    /// The pedigree of the analysed family.
    pedigree: Pedigree,
    /// Frequency ceilings by sub-mode.
    options: InheritanceModeOptions,
    /// The compatibility oracle.
    checker: C,
}

impl<C> InheritanceAnnotator<C>
where
    C: MendelianChecker,
{
    /// Construct for the given pedigree, options, and checker.
    ///
    /// Fails if the pedigree has no named, affected individual, as
    /// segregation analysis has nothing to anchor on then.
    pub fn new(
        pedigree: Pedigree,
        options: InheritanceModeOptions,
        checker: C,
    ) -> Result<Self, inheritance_annotator::Error> {
        if !pedigree.has_affected() {
            return Err(inheritance_annotator::Error::EmptyPedigree);
        }
        Ok(Self {
            pedigree,
            options,
            checker,
        })
    }

    /// The pedigree the annotator was built for.
    pub fn pedigree(&self) -> &Pedigree {
        &self.pedigree
    }

    /// The frequency ceiling options.
    pub fn options(&self) -> &InheritanceModeOptions {
        &self.options
    }

    /// The modes with a defined frequency ceiling.
    pub fn defined_modes(&self) -> Vec<ModeOfInheritance> {
        self.options.defined_modes()
    }

    /// Compute the modes of inheritance each variant is compatible with.
    ///
    /// The variants are expected to belong to one gene and to have passed the
    /// upstream filters.  Modes without a defined ceiling and modes left
    /// without variants after applying the ceilings are omitted from the
    /// result; an inconsistent pedigree is logged and yields an empty result.
    pub fn compatible_modes(
        &self,
        variants: &[VariantRecord],
    ) -> IndexMap<ModeOfInheritance, Vec<VariantRecord>> {
        let calls = self.build_genotype_calls(variants);
        let checked = match self.checker.check_modes(&calls) {
            Ok(checked) => checked,
            Err(e) => {
                tracing::error!("could not check compatible inheritance modes: {}", e);
                return IndexMap::new();
            }
        };

        let defined_modes = self.options.defined_modes();
        let mut result = IndexMap::new();
        for (mode, compatible_calls) in &checked {
            if !defined_modes.contains(&mode) {
                continue;
            }
            let max_freq = self.options.max_freq_for_mode(mode);
            let records = self.collect_compatible(variants, compatible_calls, max_freq);
            if !records.is_empty() {
                result.insert(mode, records);
            }
        }
        result
    }

    /// As `compatible_modes`, but resolved to sub-modes with their own
    /// frequency ceilings.
    pub fn compatible_sub_modes(
        &self,
        variants: &[VariantRecord],
    ) -> IndexMap<SubModeOfInheritance, Vec<VariantRecord>> {
        let calls = self.build_genotype_calls(variants);
        let checked = match self.checker.check_sub_modes(&calls) {
            Ok(checked) => checked,
            Err(e) => {
                tracing::error!("could not check compatible inheritance sub-modes: {}", e);
                return IndexMap::new();
            }
        };

        let defined_sub_modes = self.options.defined_sub_modes();
        let mut result = IndexMap::new();
        for (sub_mode, compatible_calls) in &checked {
            if !defined_sub_modes.contains(&sub_mode) {
                continue;
            }
            let max_freq = self.options.max_freq_for_sub_mode(sub_mode);
            let records = self.collect_compatible(variants, compatible_calls, max_freq);
            if !records.is_empty() {
                result.insert(sub_mode, records);
            }
        }
        result
    }

    /// Convert the variants into checker input, one `GenotypeCalls` per
    /// variant with its input index as payload.
    fn build_genotype_calls(&self, variants: &[VariantRecord]) -> Vec<GenotypeCalls> {
        variants
            .iter()
            .enumerate()
            .map(|(payload, record)| {
                let mut genotypes = IndexMap::new();
                for name in self.pedigree.individuals.keys() {
                    let sample_genotype = record.sample_genotype(name);
                    let genotype = Genotype::from(sample_genotype);
                    tracing::debug!(
                        "converted sample {} genotype {} to {:?}",
                        name,
                        sample_genotype,
                        genotype
                    );
                    genotypes.insert(name.clone(), genotype);
                }
                let calls = GenotypeCalls::new(
                    ChromosomeType::from_chromosome_number(record.chromosome),
                    genotypes,
                    payload,
                );
                tracing::debug!("built genotype calls for variant {}: {:?}", record.id, calls);
                calls
            })
            .collect()
    }

    /// Map checker verdicts back to records and apply the frequency ceiling.
    fn collect_compatible(
        &self,
        variants: &[VariantRecord],
        compatible_calls: &[GenotypeCalls],
        max_freq: Option<f32>,
    ) -> Vec<VariantRecord> {
        compatible_calls
            .iter()
            .map(|calls| variants[calls.payload].clone())
            .filter(|record| passes_frequency(record, max_freq))
            .collect()
    }
}

/// Whether the record's maximum frequency is under the ceiling; whitelisted
/// records always pass.
fn passes_frequency(record: &VariantRecord, max_freq: Option<f32>) -> bool {
    match max_freq {
        Some(ceiling) => record.frequency_max_percent <= ceiling || record.whitelisted,
        None => true,
    }
}
