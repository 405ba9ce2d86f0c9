use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VcfCountError {
    #[error("could not open `{path}`: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading line {line_number}: {source}")]
    ReadLine {
        line_number: u64,
        #[source]
        source: io::Error,
    },
    #[error(
        "line {line_number}, sample {sample}: genotype `{token}` is not a \
         `/`-separated list of allele indices: {source}"
    )]
    MalformedGenotype {
        line_number: u64,
        sample: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}
