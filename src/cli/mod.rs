//! Command-line interface for hgvs-describe.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **describe**: Describe how an observed sequence differs from a reference
//!
//! ## Usage
//!
//! ```text
//! # Describe two literal sequences
//! hgvs-describe describe CAT CATCAT
//!
//! # Read both sequences from FASTA files and name the reference
//! hgvs-describe describe reference.fa observed.fa --fasta --prefix 'NM_002001.2:c.'
//!
//! # JSON output for scripting
//! hgvs-describe --format json describe AAAA AAAAA
//! ```

use clap::{Parser, Subcommand};

pub mod describe;

#[derive(Parser)]
#[command(name = "hgvs-describe")]
#[command(version)]
#[command(about = "Describe the difference between two DNA sequences in HGVS notation")]
#[command(
    long_about = "hgvs-describe compares an observed sequence with a reference and reports the edits between them as an HGVS allele description.\n\nIt recognizes:\n- Substitutions, deletions, insertions and deletion-insertions\n- Tandem duplications, shifted to their 3' position\n- Inversions, ignoring self-complementary stretches\n- Compound alleles, when they are shorter than a single deletion-insertion"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Describe an observed sequence relative to a reference sequence
    Describe(describe::DescribeArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
