//! Mendelian inheritance compatibility of gene variants.
//!
//! The module is organised around one seam: `calls::MendelianChecker` is the
//! oracle that decides segregation compatibility, while
//! `annotator::InheritanceAnnotator` prepares its input from variant records
//! and turns its verdicts into per-mode variant lists, applying the
//! frequency ceilings of `modes::InheritanceModeOptions`.

pub mod annotator;
pub mod calls;
pub mod modes;

pub use annotator::InheritanceAnnotator;
pub use calls::{ChromosomeType, Genotype, GenotypeCalls, MendelianChecker};
pub use modes::{InheritanceModeOptions, ModeOfInheritance, SubModeOfInheritance};
