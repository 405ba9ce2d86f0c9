use std::num::ParseIntError;

/// Decodes a genotype token like `0/1` into its allele indices.
///
/// Any piece that is not a non-negative integer (a `.` missing-data
/// sentinel, an empty string, a negative number) is an error.
pub fn parse_genotype(token: &str) -> Result<Vec<u32>, ParseIntError> {
    token.split('/').map(|allele| allele.parse::<u32>()).collect()
}
