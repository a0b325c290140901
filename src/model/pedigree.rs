//! Pedigree representation used for inheritance checking.

use indexmap::IndexMap;

/// Sex of an individual from the pedigree.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
pub enum Sex {
    /// Sex is unknown.
    #[default]
    Unknown,
    /// Male.
    Male,
    /// Female.
    Female,
}

/// Disease state of an individual from the pedigree.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
pub enum Disease {
    /// Disease state is unknown.
    #[default]
    Unknown,
    /// Unaffected by the disease.
    Unaffected,
    /// Affected by the disease.
    Affected,
}

/// One individual from the pedigree.
#[derive(
    Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, derive_new::new,
)]
pub struct Individual {
    /// Name of the family.
    pub family: String,
    /// Name of the individual.
    pub name: String,
    /// Name of the father, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father: Option<String>,
    /// Name of the mother, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother: Option<String>,
    /// Sex of the individual.
    pub sex: Sex,
    /// Disease state of the individual.
    pub disease: Disease,
}

/// Pedigree with the individuals accessible by name, in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Pedigree {
    /// The individuals of the pedigree, by name.
    pub individuals: IndexMap<String, Individual>,
}

impl Pedigree {
    /// Construct a single-sample pedigree of one affected individual.
    pub fn just_proband(name: &str) -> Self {
        Self::from_iter([Individual {
            family: String::from("FAM"),
            name: name.to_string(),
            disease: Disease::Affected,
            ..Default::default()
        }])
    }

    /// Whether the pedigree contains at least one named, affected individual.
    pub fn has_affected(&self) -> bool {
        self.individuals
            .values()
            .any(|individual| !individual.name.is_empty() && individual.disease == Disease::Affected)
    }

    /// Number of individuals in the pedigree.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the pedigree has no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}

impl FromIterator<Individual> for Pedigree {
    fn from_iter<T: IntoIterator<Item = Individual>>(iter: T) -> Self {
        Self {
            individuals: iter
                .into_iter()
                .map(|individual| (individual.name.clone(), individual))
                .collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{Disease, Individual, Pedigree, Sex};

    fn trio() -> Pedigree {
        Pedigree::from_iter([
            Individual {
                family: String::from("FAM"),
                name: String::from("index"),
                father: Some(String::from("father")),
                mother: Some(String::from("mother")),
                sex: Sex::Male,
                disease: Disease::Affected,
            },
            Individual {
                family: String::from("FAM"),
                name: String::from("father"),
                sex: Sex::Male,
                disease: Disease::Unaffected,
                ..Default::default()
            },
            Individual {
                family: String::from("FAM"),
                name: String::from("mother"),
                sex: Sex::Female,
                disease: Disease::Unaffected,
                ..Default::default()
            },
        ])
    }

    #[test]
    fn just_proband() {
        let pedigree = Pedigree::just_proband("sample");

        assert_eq!(1, pedigree.len());
        assert!(pedigree.has_affected());
        assert_eq!(
            Disease::Affected,
            pedigree.individuals.get("sample").map(|i| i.disease).unwrap()
        );
    }

    #[test]
    fn has_affected() {
        assert!(trio().has_affected());
        assert!(!Pedigree::default().has_affected());

        let unaffected_only = Pedigree::from_iter([Individual {
            family: String::from("FAM"),
            name: String::from("sibling"),
            disease: Disease::Unaffected,
            ..Default::default()
        }]);
        assert!(!unaffected_only.has_affected());
    }

    #[test]
    fn preserves_insertion_order() {
        let names = trio()
            .individuals
            .keys()
            .cloned()
            .collect::<Vec<_>>();

        assert_eq!(vec!["index", "father", "mother"], names);
    }

    #[test]
    fn serde_round_trip() -> Result<(), anyhow::Error> {
        let pedigree = trio();
        let json = serde_json::to_string(&pedigree)?;
        let from_json: Pedigree = serde_json::from_str(&json)?;

        assert_eq!(pedigree, from_json);

        Ok(())
    }

    #[rstest::rstest]
    #[case("Male", Sex::Male)]
    #[case("Female", Sex::Female)]
    #[case("Unknown", Sex::Unknown)]
    fn sex_from_str(#[case] s: &str, #[case] expected: Sex) -> Result<(), anyhow::Error> {
        let sex: Sex = s.parse()?;

        assert_eq!(expected, sex);

        Ok(())
    }

    #[rstest::rstest]
    #[case("Affected", Disease::Affected)]
    #[case("Unaffected", Disease::Unaffected)]
    #[case("Unknown", Disease::Unknown)]
    fn disease_from_str(#[case] s: &str, #[case] expected: Disease) -> Result<(), anyhow::Error> {
        let disease: Disease = s.parse()?;

        assert_eq!(expected, disease);

        Ok(())
    }
}
