use std::io::BufRead;
use std::path::Path;

use crate::errors::VcfCountError;
use crate::open_vcf::open_vcf;
use crate::parse_genotypes::parse_genotype;

/// CHROM through FORMAT; sample columns start after these.
const FIXED_FIELD_COUNT: usize = 9;

/// Counts data records in a VCF stream, decoding every per-sample genotype
/// on the way so that a malformed token aborts the run.
///
/// A line counts when its raw first character is not `#`; blank lines and
/// lines with fewer than ten fields count too, they just carry no genotypes.
pub fn count_vcf_records<R: BufRead>(reader: R) -> Result<u64, VcfCountError> {
    let mut snps_read: u64 = 0;
    let mut line_number: u64 = 0;

    for line in reader.lines() {
        line_number += 1;
        let line = line.map_err(|source| VcfCountError::ReadLine {
            line_number,
            source,
        })?;

        // Header check happens on the raw line, before any trimming
        if line.starts_with('#') {
            continue;
        }

        for (idx, token) in line
            .trim_end()
            .split('\t')
            .skip(FIXED_FIELD_COUNT)
            .enumerate()
        {
            parse_genotype(token).map_err(|source| VcfCountError::MalformedGenotype {
                line_number,
                sample: idx + 1,
                token: token.to_string(),
                source,
            })?;
        }

        snps_read += 1;
    }

    Ok(snps_read)
}

pub fn count_vcf_records_in_file(file_path: &Path) -> Result<u64, VcfCountError> {
    let reader = open_vcf(file_path)?;
    count_vcf_records(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    #[test]
    fn test_count_skips_headers() {
        let vcf = "##fileformat=VCFv4.2\n\
                   #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\n\
                   c1\t100\t.\tA\tG\t60\tPASS\t.\tGT\t0/1\n";
        let count = count_vcf_records(BufReader::new(vcf.as_bytes())).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_malformed_genotype_reports_line_and_sample() {
        let vcf = "#CHROM\n\
                   c1\t.\t.\t.\t.\t.\t.\t.\t.\t0/0\t./.\n";
        let err = count_vcf_records(BufReader::new(vcf.as_bytes())).unwrap_err();
        match err {
            VcfCountError::MalformedGenotype {
                line_number,
                sample,
                token,
                ..
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(sample, 2);
                assert_eq!(token, "./.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
