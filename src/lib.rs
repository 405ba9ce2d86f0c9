pub mod count_vcf_records;
pub mod errors;
pub mod open_vcf;
pub mod parse_genotypes;
