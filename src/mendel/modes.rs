//! Modes of inheritance and their frequency ceilings.

use enum_map::EnumMap;
use itertools::Itertools;
use strum_macros::{Display, EnumIter, EnumString};

/// Mode of inheritance.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    enum_map::Enum,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
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
pub enum ModeOfInheritance {
    /// Autosomal dominant inheritance.
    AutosomalDominant,
    /// Autosomal recessive inheritance.
    AutosomalRecessive,
    /// X-linked dominant inheritance.
    XDominant,
    /// X-linked recessive inheritance.
    XRecessive,
    /// Mitochondrial inheritance.
    Mitochondrial,
    /// Any mode of inheritance.
    Any,
}

impl ModeOfInheritance {
    /// The sub-modes making up this mode.
    pub fn sub_modes(&self) -> Vec<SubModeOfInheritance> {
        match self {
            ModeOfInheritance::AutosomalDominant => vec![SubModeOfInheritance::AutosomalDominant],
            ModeOfInheritance::AutosomalRecessive => vec![
                SubModeOfInheritance::AutosomalRecessiveCompHet,
                SubModeOfInheritance::AutosomalRecessiveHomAlt,
            ],
            ModeOfInheritance::XDominant => vec![SubModeOfInheritance::XDominant],
            ModeOfInheritance::XRecessive => vec![
                SubModeOfInheritance::XRecessiveCompHet,
                SubModeOfInheritance::XRecessiveHomAlt,
            ],
            ModeOfInheritance::Mitochondrial => vec![SubModeOfInheritance::Mitochondrial],
            ModeOfInheritance::Any => vec![SubModeOfInheritance::Any],
        }
    }
}

/// Sub-mode of inheritance, distinguishing the recessive configurations.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    enum_map::Enum,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
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
pub enum SubModeOfInheritance {
    /// Autosomal dominant inheritance.
    AutosomalDominant,
    /// Autosomal recessive, compound heterozygous configuration.
    AutosomalRecessiveCompHet,
    /// Autosomal recessive, homozygous alternative configuration.
    AutosomalRecessiveHomAlt,
    /// X-linked dominant inheritance.
    XDominant,
    /// X-linked recessive, compound heterozygous configuration.
    XRecessiveCompHet,
    /// X-linked recessive, homozygous alternative configuration.
    XRecessiveHomAlt,
    /// Mitochondrial inheritance.
    Mitochondrial,
    /// Any mode of inheritance.
    Any,
}

impl SubModeOfInheritance {
    /// The mode this sub-mode belongs to.
    pub fn to_mode(&self) -> ModeOfInheritance {
        match self {
            SubModeOfInheritance::AutosomalDominant => ModeOfInheritance::AutosomalDominant,
            SubModeOfInheritance::AutosomalRecessiveCompHet
            | SubModeOfInheritance::AutosomalRecessiveHomAlt => {
                ModeOfInheritance::AutosomalRecessive
            }
            SubModeOfInheritance::XDominant => ModeOfInheritance::XDominant,
            SubModeOfInheritance::XRecessiveCompHet | SubModeOfInheritance::XRecessiveHomAlt => {
                ModeOfInheritance::XRecessive
            }
            SubModeOfInheritance::Mitochondrial => ModeOfInheritance::Mitochondrial,
            SubModeOfInheritance::Any => ModeOfInheritance::Any,
        }
    }
}

/// Maximum population frequency ceilings per sub-mode of inheritance.
///
/// A sub-mode with no ceiling is undefined; variants compatible with it are
/// dropped from the results altogether (cf. `mendel::annotator`).
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InheritanceModeOptions {
    /// Ceiling in percent by sub-mode, `None` leaves the sub-mode undefined.
    max_freqs: EnumMap<SubModeOfInheritance, Option<f32>>,
}

impl InheritanceModeOptions {
    /// Construct from sub-mode/ceiling pairs; ceilings are percentages.
    pub fn new(values: impl IntoIterator<Item = (SubModeOfInheritance, f32)>) -> Self {
        let mut max_freqs = EnumMap::default();
        for (sub_mode, max_freq) in values {
            max_freqs[sub_mode] = Some(max_freq);
        }
        Self { max_freqs }
    }

    /// The default ceilings for rare disease analysis.
    pub fn defaults() -> Self {
        Self::new([
            (SubModeOfInheritance::AutosomalDominant, 0.1),
            (SubModeOfInheritance::AutosomalRecessiveCompHet, 2.0),
            (SubModeOfInheritance::AutosomalRecessiveHomAlt, 0.1),
            (SubModeOfInheritance::XDominant, 0.1),
            (SubModeOfInheritance::XRecessiveCompHet, 2.0),
            (SubModeOfInheritance::XRecessiveHomAlt, 0.1),
            (SubModeOfInheritance::Mitochondrial, 0.2),
        ])
    }

    /// Options with no defined sub-mode.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The ceiling for the given sub-mode, `None` when undefined.
    ///
    /// `Any` aggregates over all defined sub-modes.
    pub fn max_freq_for_sub_mode(&self, sub_mode: SubModeOfInheritance) -> Option<f32> {
        match sub_mode {
            SubModeOfInheritance::Any => self.max_freq(),
            _ => self.max_freqs[sub_mode],
        }
    }

    /// The ceiling for the given mode, the maximum over its sub-modes.
    pub fn max_freq_for_mode(&self, mode: ModeOfInheritance) -> Option<f32> {
        match mode {
            ModeOfInheritance::Any => self.max_freq(),
            _ => mode
                .sub_modes()
                .into_iter()
                .filter_map(|sub_mode| self.max_freqs[sub_mode])
                .reduce(f32::max),
        }
    }

    /// The overall maximum ceiling, `None` when no sub-mode is defined.
    pub fn max_freq(&self) -> Option<f32> {
        self.max_freqs.values().filter_map(|v| *v).reduce(f32::max)
    }

    /// The sub-modes with a defined ceiling, in declaration order.
    pub fn defined_sub_modes(&self) -> Vec<SubModeOfInheritance> {
        self.max_freqs
            .iter()
            .filter_map(|(sub_mode, max_freq)| max_freq.map(|_| sub_mode))
            .collect()
    }

    /// The modes with at least one defined sub-mode, in declaration order.
    pub fn defined_modes(&self) -> Vec<ModeOfInheritance> {
        self.defined_sub_modes()
            .into_iter()
            .map(|sub_mode| sub_mode.to_mode())
            .unique()
            .collect()
    }

    /// Whether no sub-mode is defined.
    pub fn is_empty(&self) -> bool {
        self.max_freqs.values().all(|max_freq| max_freq.is_none())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{InheritanceModeOptions, ModeOfInheritance, SubModeOfInheritance};

    #[rstest::rstest]
    #[case(SubModeOfInheritance::AutosomalDominant, ModeOfInheritance::AutosomalDominant)]
    #[case(
        SubModeOfInheritance::AutosomalRecessiveCompHet,
        ModeOfInheritance::AutosomalRecessive
    )]
    #[case(
        SubModeOfInheritance::AutosomalRecessiveHomAlt,
        ModeOfInheritance::AutosomalRecessive
    )]
    #[case(SubModeOfInheritance::XDominant, ModeOfInheritance::XDominant)]
    #[case(SubModeOfInheritance::XRecessiveCompHet, ModeOfInheritance::XRecessive)]
    #[case(SubModeOfInheritance::XRecessiveHomAlt, ModeOfInheritance::XRecessive)]
    #[case(SubModeOfInheritance::Mitochondrial, ModeOfInheritance::Mitochondrial)]
    #[case(SubModeOfInheritance::Any, ModeOfInheritance::Any)]
    fn sub_mode_to_mode(#[case] sub_mode: SubModeOfInheritance, #[case] expected: ModeOfInheritance) {
        assert_eq!(expected, sub_mode.to_mode());
    }

    #[test]
    fn mode_sub_modes_round_trip() {
        use strum::IntoEnumIterator;

        for mode in ModeOfInheritance::iter() {
            for sub_mode in mode.sub_modes() {
                assert_eq!(mode, sub_mode.to_mode());
            }
        }
    }

    #[rstest::rstest]
    #[case(ModeOfInheritance::AutosomalDominant, "autosomal_dominant")]
    #[case(ModeOfInheritance::XRecessive, "x_recessive")]
    #[case(ModeOfInheritance::Mitochondrial, "mitochondrial")]
    #[case(ModeOfInheritance::Any, "any")]
    fn mode_display_parse_round_trip(
        #[case] mode: ModeOfInheritance,
        #[case] expected: &str,
    ) -> Result<(), anyhow::Error> {
        assert_eq!(expected, mode.to_string());
        let parsed: ModeOfInheritance = expected.parse()?;
        assert_eq!(mode, parsed);

        Ok(())
    }

    #[rstest::rstest]
    #[case(
        SubModeOfInheritance::AutosomalRecessiveCompHet,
        "autosomal_recessive_comp_het"
    )]
    #[case(SubModeOfInheritance::XRecessiveHomAlt, "x_recessive_hom_alt")]
    fn sub_mode_display_parse_round_trip(
        #[case] sub_mode: SubModeOfInheritance,
        #[case] expected: &str,
    ) -> Result<(), anyhow::Error> {
        assert_eq!(expected, sub_mode.to_string());
        let parsed: SubModeOfInheritance = expected.parse()?;
        assert_eq!(sub_mode, parsed);

        Ok(())
    }

    #[test]
    fn defaults_table() {
        let options = InheritanceModeOptions::defaults();

        assert_eq!(
            Some(0.1),
            options.max_freq_for_sub_mode(SubModeOfInheritance::AutosomalDominant)
        );
        assert_eq!(
            Some(2.0),
            options.max_freq_for_sub_mode(SubModeOfInheritance::AutosomalRecessiveCompHet)
        );
        assert_eq!(
            Some(0.1),
            options.max_freq_for_sub_mode(SubModeOfInheritance::AutosomalRecessiveHomAlt)
        );
        assert_eq!(
            Some(0.2),
            options.max_freq_for_sub_mode(SubModeOfInheritance::Mitochondrial)
        );
        assert_eq!(Some(2.0), options.max_freq());
        assert!(!options.is_empty());
    }

    #[test]
    fn max_freq_for_mode_aggregates_sub_modes() {
        let options = InheritanceModeOptions::defaults();

        assert_eq!(
            Some(0.1),
            options.max_freq_for_mode(ModeOfInheritance::AutosomalDominant)
        );
        // the larger of the comp-het and hom-alt ceilings
        assert_eq!(
            Some(2.0),
            options.max_freq_for_mode(ModeOfInheritance::AutosomalRecessive)
        );
        assert_eq!(
            Some(2.0),
            options.max_freq_for_mode(ModeOfInheritance::XRecessive)
        );
        assert_eq!(Some(2.0), options.max_freq_for_mode(ModeOfInheritance::Any));
    }

    #[test]
    fn empty_options_define_nothing() {
        let options = InheritanceModeOptions::empty();

        assert!(options.is_empty());
        assert_eq!(None, options.max_freq());
        assert_eq!(
            None,
            options.max_freq_for_mode(ModeOfInheritance::AutosomalDominant)
        );
        assert!(options.defined_modes().is_empty());
        assert!(options.defined_sub_modes().is_empty());
    }

    #[test]
    fn defined_modes_deduplicates_recessive_sub_modes() {
        let options = InheritanceModeOptions::new([
            (SubModeOfInheritance::AutosomalRecessiveCompHet, 2.0),
            (SubModeOfInheritance::AutosomalRecessiveHomAlt, 0.1),
            (SubModeOfInheritance::XDominant, 0.1),
        ]);

        assert_eq!(
            vec![
                ModeOfInheritance::AutosomalRecessive,
                ModeOfInheritance::XDominant
            ],
            options.defined_modes()
        );
        assert_eq!(
            vec![
                SubModeOfInheritance::AutosomalRecessiveCompHet,
                SubModeOfInheritance::AutosomalRecessiveHomAlt,
                SubModeOfInheritance::XDominant,
            ],
            options.defined_sub_modes()
        );
    }

    #[test]
    fn options_serde_round_trip() -> Result<(), anyhow::Error> {
        let options = InheritanceModeOptions::defaults();
        let json = serde_json::to_string(&options)?;
        let restored: InheritanceModeOptions = serde_json::from_str(&json)?;

        assert_eq!(options, restored);

        Ok(())
    }
}
