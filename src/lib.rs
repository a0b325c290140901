//! Decision core for prioritising variants in rare disease analysis.
//!
//! The crate takes the annotated, filtered variants of one case and decides,
//! per gene, which modes of inheritance they segregate under and which
//! alleles drive the gene's score:
//!
//! - `model`: allele trimming, genotypes, pedigrees, and variant records;
//! - `annotate`: assignment of multi-gene annotations to genes and effect
//!   resolution;
//! - `mendel`: inheritance compatibility of a gene's variants, with the
//!   segregation logic behind the `MendelianChecker` seam;
//! - `score`: contributing-allele selection and parallel gene scoring.
//!
//! Variant calling, annotation sources, and filtering happen upstream; their
//! results enter through the types in `model`.

pub mod annotate;
pub mod common;
pub mod mendel;
pub mod model;
pub mod score;
