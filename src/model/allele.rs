//! Single-allele variant coordinates and two-sided trimming.

/// Characters that mark a symbolic allele when leading or trailing.
const SYMBOLIC_MARKERS: &[char] = &['<', '>', '.'];

/// Supporting code for `AllelePosition`.
pub mod allele_position {
    /// Error type for `AllelePosition::trim()`.
    #[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
    pub enum Error {
        #[error("REF allele must not be empty")]
        EmptyRef,
        #[error("ALT allele must not be empty")]
        EmptyAlt,
        #[error("allele string is not ASCII: {0:?}")]
        NotAscii(String),
    }
}

/// Whether the REF/ALT pair uses symbolic notation (angle brackets, breakend
/// brackets, or a leading/trailing `.`).
pub fn is_symbolic(reference: &str, alternative: &str) -> bool {
    // The VCF spec only mentions ALT alleles as having symbolic characters,
    // so check these first, then check the REF just in case.
    allele_is_symbolic(alternative) || allele_is_symbolic(reference)
}

fn allele_is_symbolic(allele: &str) -> bool {
    allele.starts_with(SYMBOLIC_MARKERS)
        || allele.ends_with(SYMBOLIC_MARKERS)
        || allele.contains('[')
        || allele.contains(']')
}

/// Minimised single-allele variant coordinates.
///
/// Coordinates follow the VCF convention, i.e., 1-based inclusive positions.
/// [`AllelePosition::trim`] right trims, then left trims, and adjusts the
/// position accordingly, following Tan et al. 2015
/// (<https://dx.doi.org/10.1093/bioinformatics/btv112>).  It does not left
/// align as that requires reference genome access, which is assumed to have
/// happened upstream.
///
/// A trimmed allele has no common leading or trailing bases on both sides, or
/// one side is down to a single base, or the allele is symbolic and was left
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AllelePosition {
    /// 1-based position of the first base of the REF string.
    pos: i32,
    /// Reference allele.
    reference: String,
    /// Alternative allele.
    alternative: String,
}

impl AllelePosition {
    /// Construct an exact, untrimmed representation of the input coordinates.
    pub fn new(pos: i32, reference: &str, alternative: &str) -> Self {
        Self {
            pos,
            reference: reference.to_string(),
            alternative: alternative.to_string(),
        }
    }

    /// Trim the right, then the left side of the given variant allele.
    ///
    /// Symbolic alleles are returned byte for byte as given.  Empty and
    /// non-ASCII allele strings are rejected; monomorphic sites must be
    /// given as a symbolic `.` allele, not as an empty string.
    pub fn trim(
        pos: i32,
        reference: &str,
        alternative: &str,
    ) -> Result<Self, allele_position::Error> {
        if reference.is_empty() {
            return Err(allele_position::Error::EmptyRef);
        }
        if alternative.is_empty() {
            return Err(allele_position::Error::EmptyAlt);
        }
        if is_symbolic(reference, alternative) {
            return Ok(Self::new(pos, reference, alternative));
        }
        if !reference.is_ascii() {
            return Err(allele_position::Error::NotAscii(reference.to_string()));
        }
        if !alternative.is_ascii() {
            return Err(allele_position::Error::NotAscii(alternative.to_string()));
        }
        if reference.len() == 1 || alternative.len() == 1 {
            return Ok(Self::new(pos, reference, alternative));
        }

        let ref_bytes = reference.as_bytes();
        let alt_bytes = alternative.as_bytes();

        // Scan from right to left; stop as soon as either side is down to a
        // single base.
        let diff = ref_bytes.len() as isize - alt_bytes.len() as isize;
        let mut right = ref_bytes.len() as isize;
        while right > 1
            && right - diff > 1
            && ref_bytes[right as usize - 1] == alt_bytes[(right - diff) as usize - 1]
        {
            right -= 1;
        }
        let ref_end = right as usize;
        let alt_end = (right - diff) as usize;

        // Scan from left to right, then correct the cursor so as not to fall
        // off the right end of either side.
        let mut left = 0;
        while left < ref_end && left < alt_end && ref_bytes[left] == alt_bytes[left] {
            left += 1;
        }
        if left > 0 && (left == ref_end || left == alt_end) {
            left -= 1;
        }

        Ok(Self::new(
            pos + left as i32,
            &reference[left..ref_end],
            &alternative[left..alt_end],
        ))
    }

    /// 1-based position of the first base of the REF string.
    pub fn pos(&self) -> i32 {
        self.pos
    }

    /// Reference allele.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Alternative allele.
    pub fn alternative(&self) -> &str {
        &self.alternative
    }

    /// Whether REF or ALT uses symbolic notation.
    pub fn is_symbolic(&self) -> bool {
        is_symbolic(&self.reference, &self.alternative)
    }

    /// Whether this is a single nucleotide variant.
    pub fn is_snv(&self) -> bool {
        self.reference.len() == 1 && self.alternative.len() == 1
    }

    /// Whether this is a deletion with respect to the reference.
    pub fn is_deletion(&self) -> bool {
        self.reference.len() > self.alternative.len()
    }

    /// Whether this is an insertion with respect to the reference.
    pub fn is_insertion(&self) -> bool {
        self.reference.len() < self.alternative.len()
    }
}

impl std::fmt::Display for AllelePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}>{}", self.pos, self.reference, self.alternative)
    }
}
