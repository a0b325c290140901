//! Common functionality.

use biocommons_bioutils::assemblies::Assembly;
use indexmap::IndexMap;

/// Definition of canonical chromosome names.
pub const CHROMS: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17",
    "18", "19", "20", "21", "22", "X", "Y", "MT",
];

/// Build mapping of chromosome names to chromosome numbers.
///
/// Numbers are 1-based with `X` as 23, `Y` as 24, and `MT` as 25, the
/// convention used by the Mendelian inheritance machinery.
pub fn build_chrom_map() -> IndexMap<String, i32> {
    let mut result = IndexMap::new();
    for (i, &chrom_name) in CHROMS.iter().enumerate() {
        let chrom_no = (i + 1) as i32;
        result.insert(chrom_name.to_owned(), chrom_no);
        result.insert(format!("chr{chrom_name}"), chrom_no);
    }
    result.insert("x".to_owned(), 23);
    result.insert("y".to_owned(), 24);
    result.insert("chrx".to_owned(), 23);
    result.insert("chry".to_owned(), 24);
    result.insert("mt".to_owned(), 25);
    result.insert("m".to_owned(), 25);
    result.insert("M".to_owned(), 25);
    result.insert("chrmt".to_owned(), 25);
    result.insert("chrm".to_owned(), 25);
    result.insert("chrM".to_owned(), 25);
    result
}

/// Resolve a single chromosome name to its number.
///
/// Builds the name map on every call; for repeated lookups, build it once
/// with [`build_chrom_map`].
pub fn chromosome_number(name: &str) -> Option<i32> {
    build_chrom_map().get(name).copied()
}

/// Select the genome release to use.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Clone,
    Copy,
    Debug,
    strum::Display,
    PartialEq,
    Eq,
    enum_map::Enum,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum GenomeRelease {
    /// GRCh37 / hg19
    #[strum(serialize = "grch37")]
    Grch37,
    /// GRCh38 / hg38
    #[strum(serialize = "grch38")]
    Grch38,
}

impl GenomeRelease {
    pub fn name(&self) -> String {
        match self {
            GenomeRelease::Grch37 => String::from("GRCh37"),
            GenomeRelease::Grch38 => String::from("GRCh38"),
        }
    }
}

impl From<GenomeRelease> for Assembly {
    fn from(val: GenomeRelease) -> Self {
        match val {
            GenomeRelease::Grch37 => Assembly::Grch37p10,
            GenomeRelease::Grch38 => Assembly::Grch38,
        }
    }
}

impl From<Assembly> for GenomeRelease {
    fn from(assembly: Assembly) -> Self {
        match assembly {
            Assembly::Grch37 | Assembly::Grch37p10 => GenomeRelease::Grch37,
            Assembly::Grch38 => GenomeRelease::Grch38,
        }
    }
}

impl std::str::FromStr for GenomeRelease {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_ascii_lowercase();
        match s.as_str() {
            "grch37" | "hg19" | "hg37" => Ok(GenomeRelease::Grch37),
            "grch38" | "hg38" => Ok(GenomeRelease::Grch38),
            _ => Err(anyhow::anyhow!("Unknown genome release: {}", s)),
        }
    }
}

/// The version of the `priovar` package.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    #[rstest::rstest]
    #[case("1", 1)]
    #[case("chr1", 1)]
    #[case("22", 22)]
    #[case("X", 23)]
    #[case("chrx", 23)]
    #[case("Y", 24)]
    #[case("MT", 25)]
    #[case("chrM", 25)]
    #[case("m", 25)]
    fn build_chrom_map_names(#[case] name: &str, #[case] expected: i32) {
        let map = super::build_chrom_map();
        assert_eq!(Some(&expected), map.get(name));
    }

    #[test]
    fn chromosome_number_unknown() {
        assert_eq!(None, super::chromosome_number("chrUn_gl000220"));
    }

    #[rstest::rstest]
    #[case(crate::common::GenomeRelease::Grch37, "GRCh37")]
    #[case(crate::common::GenomeRelease::Grch38, "GRCh38")]
    fn genome_release_name(#[case] release: super::GenomeRelease, #[case] expected: &str) {
        assert_eq!(expected, release.name());
    }

    #[rstest::rstest]
    #[case(
        crate::common::GenomeRelease::Grch37,
        biocommons_bioutils::assemblies::Assembly::Grch37p10
    )]
    #[case(
        crate::common::GenomeRelease::Grch38,
        biocommons_bioutils::assemblies::Assembly::Grch38
    )]
    fn assembly_from_genome_release(
        #[case] release: super::GenomeRelease,
        #[case] assembly: biocommons_bioutils::assemblies::Assembly,
    ) -> Result<(), anyhow::Error> {
        let res: biocommons_bioutils::assemblies::Assembly = release.into();

        assert_eq!(res, assembly);

        Ok(())
    }

    #[rstest::rstest]
    #[case(
        crate::common::GenomeRelease::Grch37,
        biocommons_bioutils::assemblies::Assembly::Grch37
    )]
    #[case(
        crate::common::GenomeRelease::Grch37,
        biocommons_bioutils::assemblies::Assembly::Grch37p10
    )]
    #[case(
        crate::common::GenomeRelease::Grch38,
        biocommons_bioutils::assemblies::Assembly::Grch38
    )]
    fn genome_release_from_assembly(
        #[case] release: super::GenomeRelease,
        #[case] assembly: biocommons_bioutils::assemblies::Assembly,
    ) -> Result<(), anyhow::Error> {
        let res: super::GenomeRelease = assembly.into();

        assert_eq!(res, release);

        Ok(())
    }

    #[rstest::rstest]
    #[case(crate::common::GenomeRelease::Grch37, "grch37")]
    #[case(crate::common::GenomeRelease::Grch37, "hg19")]
    #[case(crate::common::GenomeRelease::Grch38, "grch38")]
    #[case(crate::common::GenomeRelease::Grch38, "hg38")]
    fn genome_release_from_str(
        #[case] release: super::GenomeRelease,
        #[case] s: &str,
    ) -> Result<(), anyhow::Error> {
        let res: super::GenomeRelease = s.parse()?;

        assert_eq!(res, release);

        Ok(())
    }
}
