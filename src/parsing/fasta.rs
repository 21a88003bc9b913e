//! Reader for FASTA files using noodles.
//!
//! Loads the first record of a FASTA file as a plain sequence.
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::warn;

use crate::parsing::ParseError;
use crate::utils::validation::check_sequence_length;

/// A named sequence read from a FASTA file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaSequence {
    pub name: String,
    /// Upper-cased sequence
    pub sequence: Vec<u8>,
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read the first sequence of a FASTA file.
///
/// Further records are ignored with a warning.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidFormat` if the file holds no record, or
/// `ParseError::SequenceTooLong` if the sequence exceeds `max_length`.
pub fn read_first_sequence(path: &Path, max_length: usize) -> Result<FastaSequence, ParseError> {
    let file = std::fs::File::open(path)?;

    if is_gzipped(path) {
        let reader = BufReader::new(MultiGzDecoder::new(file));
        read_first_record(&mut fasta::io::Reader::new(reader), max_length)
    } else {
        let reader = BufReader::new(file);
        read_first_record(&mut fasta::io::Reader::new(reader), max_length)
    }
}

/// Read the first record from a noodles FASTA reader
fn read_first_record<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
    max_length: usize,
) -> Result<FastaSequence, ParseError> {
    let mut records = reader.records();

    let record = records
        .next()
        .ok_or_else(|| ParseError::InvalidFormat("No sequences found in FASTA file".to_string()))?
        .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

    let name = String::from_utf8_lossy(record.name()).to_string();
    let sequence: Vec<u8> = record
        .sequence()
        .as_ref()
        .iter()
        .map(u8::to_ascii_uppercase)
        .collect();

    check_sequence_length(sequence.len(), max_length)
        .map_err(|_| ParseError::SequenceTooLong(sequence.len()))?;

    if records.next().is_some() {
        warn!("FASTA file has more than one record; using '{name}' only");
    }

    Ok(FastaSequence { name, sequence })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, content: &[u8]) -> NamedTempFile {
        let mut temp = NamedTempFile::with_suffix(suffix).unwrap();
        temp.write_all(content).unwrap();
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fna.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Reference.FA")));

        assert!(!is_fasta_file(Path::new("test.bam")));
        assert!(!is_fasta_file(Path::new("test.fai")));
    }

    #[test]
    fn test_read_multiline_record() {
        let temp = write_temp(".fa", b">ref description\nacgtACGT\nTTGC\n");

        let seq = read_first_sequence(temp.path(), 1000).unwrap();
        assert_eq!(seq.name, "ref");
        assert_eq!(seq.sequence, b"ACGTACGTTTGC".to_vec());
    }

    #[test]
    fn test_only_first_record_is_used() {
        let temp = write_temp(".fa", b">first\nCAT\n>second\nGGGG\n");

        let seq = read_first_sequence(temp.path(), 1000).unwrap();
        assert_eq!(seq.name, "first");
        assert_eq!(seq.sequence, b"CAT".to_vec());
    }

    #[test]
    fn test_read_gzipped() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">obs\nCATCAT\n").unwrap();
        let temp = write_temp(".fa.gz", &encoder.finish().unwrap());

        let seq = read_first_sequence(temp.path(), 1000).unwrap();
        assert_eq!(seq.sequence, b"CATCAT".to_vec());
    }

    #[test]
    fn test_empty_file() {
        let temp = write_temp(".fa", b"");
        assert!(matches!(
            read_first_sequence(temp.path(), 1000),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_too_long() {
        let temp = write_temp(".fa", b">long\nACGTACGT\n");
        assert!(matches!(
            read_first_sequence(temp.path(), 4),
            Err(ParseError::SequenceTooLong(8))
        ));
    }
}
