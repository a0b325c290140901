//! Per-sample genotype calls for a single alternate allele.

/// Call of one chromosomal copy with respect to a single alternate allele.
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
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AlleleCall {
    /// The reference allele.
    Ref,
    /// The alternate allele under consideration.
    Alt,
    /// A different alternate allele at the same site.
    OtherAlt,
    /// No call could be made for this copy.
    #[default]
    NoCall,
}

/// Diploid genotype of one sample as an ordered pair of allele calls.
///
/// The order of the two calls is only meaningful when phase is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SampleGenotype {
    /// The two allele calls.
    calls: [AlleleCall; 2],
}

impl SampleGenotype {
    /// Construct from two allele calls.
    pub fn of(a: AlleleCall, b: AlleleCall) -> Self {
        Self { calls: [a, b] }
    }

    /// Homozygous reference genotype (`0/0`).
    pub fn hom_ref() -> Self {
        Self::of(AlleleCall::Ref, AlleleCall::Ref)
    }

    /// Heterozygous genotype (`0/1`).
    pub fn het() -> Self {
        Self::of(AlleleCall::Ref, AlleleCall::Alt)
    }

    /// Homozygous alternate genotype (`1/1`).
    pub fn hom_alt() -> Self {
        Self::of(AlleleCall::Alt, AlleleCall::Alt)
    }

    /// Genotype without any call (`./.`).
    pub fn no_call() -> Self {
        Self::of(AlleleCall::NoCall, AlleleCall::NoCall)
    }

    /// The two allele calls in order.
    pub fn calls(&self) -> [AlleleCall; 2] {
        self.calls
    }

    /// Whether the sample carries exactly one copy of the alternate allele.
    pub fn is_het(&self) -> bool {
        self.calls.iter().filter(|c| **c == AlleleCall::Alt).count() == 1
    }

    /// Whether both calls are the reference allele.
    pub fn is_hom_ref(&self) -> bool {
        self.calls == [AlleleCall::Ref, AlleleCall::Ref]
    }

    /// Whether both calls are the alternate allele.
    pub fn is_hom_alt(&self) -> bool {
        self.calls == [AlleleCall::Alt, AlleleCall::Alt]
    }

    /// Whether both copies are uncalled.
    pub fn is_no_call(&self) -> bool {
        self.calls == [AlleleCall::NoCall, AlleleCall::NoCall]
    }
}

impl Default for SampleGenotype {
    fn default() -> Self {
        Self::no_call()
    }
}

impl std::fmt::Display for SampleGenotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.calls[0], self.calls[1])
    }
}
