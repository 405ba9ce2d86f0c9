//! # VCF SNP Counter
//!
//! A streaming record counter for VCF (Variant Call Format) files. Counts
//! non-header lines while decoding every per-sample genotype field, so a
//! malformed genotype stops the run instead of slipping through.
//!
//! ## Quick Start
//!
//! ```bash
//! # Count records in a compressed VCF
//! vcf-snp-counter sample.vcf.gz
//!
//! # Plain-text VCF with timing information on stderr
//! vcf-snp-counter sample.vcf -v
//! ```

mod count_vcf_records;
mod errors;
mod open_vcf;
mod parse_genotypes;

use clap::Parser;
use std::path::Path;
use std::time::Instant;

use crate::count_vcf_records::count_vcf_records_in_file;

#[derive(Parser)]
#[command(
    name = "vcf-snp-counter",
    version = "0.1.0",
    about = "🧬 Streaming SNP record counter for VCF files with genotype validation",
    long_about = "A Rust command-line tool that streams a VCF (Variant Call Format) file, plain text or gzip-compressed, and counts its data records. Every per-sample genotype field is decoded into allele indices along the way, so a malformed genotype (e.g. a `.` missing-data sentinel) aborts the run with a message naming the offending line and field.",
    after_help = "EXAMPLES:
    Count records in a compressed VCF:
      vcf-snp-counter sample.vcf.gz

    Count records in a plain-text VCF:
      vcf-snp-counter sample.vcf

    Show progress and timing on stderr:
      vcf-snp-counter sample.vcf.gz -v"
)]
struct Cli {
    /// Input VCF file (plain text or gzip-compressed)
    #[arg(value_name = "INPUT_FILE")]
    input_file: String,

    /// Verbose output (progress and timing, written to stderr)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    // Validate input file
    if !Path::new(&cli.input_file).exists() {
        eprintln!("❌ Error: File '{}' not found", cli.input_file);
        std::process::exit(1);
    }

    if cli.verbose {
        eprintln!("🧬 VCF SNP Counter Starting...");
        eprintln!("📁 Input file: {}", cli.input_file);
    }

    let read_start = Instant::now();
    let snps_read = match count_vcf_records_in_file(Path::new(&cli.input_file)) {
        Ok(count) => count,
        Err(e) => {
            eprintln!("❌ Error reading VCF file: {e}");
            std::process::exit(1);
        }
    };

    if cli.verbose {
        let read_time = read_start.elapsed();
        let records_per_sec = snps_read as f64 / read_time.as_secs_f64();
        eprintln!("✅ File read completed in {read_time:.2?}");
        eprintln!("📈 Processing rate: {records_per_sec:.0} records/sec");
    }

    // The one stdout line; everything else goes to stderr
    println!("SNPs read {snps_read}");
}
