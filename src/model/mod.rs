//! Data model for the prioritisation decision core.

pub mod allele;
pub mod genotype;
pub mod pedigree;
pub mod variant;

pub use allele::AllelePosition;
pub use genotype::{AlleleCall, SampleGenotype};
pub use pedigree::{Disease, Individual, Pedigree, Sex};
pub use variant::{
    AnnotatedAllele, PutativeImpact, TranscriptAnnotation, VariantEffect, VariantId, VariantRecord,
};
