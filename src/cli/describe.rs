use std::path::Path;

use clap::Args;
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::core::allele::Allele;
use crate::core::variant::RawVar;
use crate::describe::{DescribeConfig, Describer, DEFAULT_MAX_DEPTH};
use crate::parsing::fasta::{is_fasta_file, read_first_sequence};
use crate::utils::validation::{normalize_sequence, MAX_SEQUENCE_LENGTH};

#[derive(Args)]
pub struct DescribeArgs {
    /// Reference sequence (or FASTA file with --fasta)
    #[arg(required = true)]
    pub reference: String,

    /// Observed sequence (or FASTA file with --fasta)
    #[arg(required = true)]
    pub observed: String,

    /// Treat both arguments as FASTA files and use their first record
    #[arg(long)]
    pub fasta: bool,

    /// Text prepended to the description, e.g. "NM_002001.2:c."
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Maximum depth of nested decompositions
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Maximum length of each input sequence
    #[arg(long, default_value_t = MAX_SEQUENCE_LENGTH)]
    pub max_length: usize,

    /// Apply the description to the reference and check it yields the observed sequence
    #[arg(long)]
    pub verify: bool,
}

/// Execute describe subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be read, exceeds the length limit, or
/// the description cannot be computed or verified.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DescribeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reference = load_sequence(&args.reference, &args, "reference")?;
    let observed = load_sequence(&args.observed, &args, "observed")?;

    if verbose {
        eprintln!(
            "Reference: {} bases, observed: {} bases",
            reference.len(),
            observed.len()
        );
    }

    let describer = Describer::new(DescribeConfig {
        max_depth: args.max_depth,
    });
    let allele = describer.describe(&reference, &observed)?;
    info!(variants = allele.len(), "described {}", allele);

    if args.verify {
        let rebuilt = allele.apply(&reference)?;
        anyhow::ensure!(
            rebuilt == observed,
            "Description {allele} does not reproduce the observed sequence"
        );
        if verbose {
            eprintln!("Verified: description reproduces the observed sequence");
        }
    }

    match format {
        OutputFormat::Text => print_text_description(&args.prefix, &allele),
        OutputFormat::Json => print_json_description(&args.prefix, &allele)?,
        OutputFormat::Tsv => print_tsv_variants(allele.variants()),
    }

    Ok(())
}

fn load_sequence(value: &str, args: &DescribeArgs, label: &str) -> anyhow::Result<Vec<u8>> {
    if args.fasta {
        let path = Path::new(value);
        if !is_fasta_file(path) {
            warn!("{label} file {} has no FASTA extension; reading anyway", path.display());
        }
        let record = read_first_sequence(path, args.max_length)
            .map_err(|e| anyhow::anyhow!("Failed to read {label} from {}: {e}", path.display()))?;
        return Ok(record.sequence);
    }

    normalize_sequence(value, args.max_length)
        .map_err(|e| anyhow::anyhow!("Invalid {label} sequence: {e}"))
}

fn print_text_description(prefix: &str, allele: &Allele) {
    println!("{prefix}{allele}");
    println!();
    print_tsv_variants(allele.variants());
}

fn print_json_description(prefix: &str, allele: &Allele) -> anyhow::Result<()> {
    let mut variants = Vec::with_capacity(allele.len());
    for variant in allele.variants() {
        let mut value = serde_json::to_value(variant)?;
        value["hgvs"] = serde_json::Value::String(variant.to_string());
        variants.push(value);
    }

    let output = serde_json::json!({
        "description": format!("{prefix}{allele}"),
        "variants": variants,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_variants(variants: &[RawVar]) {
    println!("start\tend\ttype\tdel\tins\tshift\thgvs");
    for v in variants {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            v.start,
            v.last(),
            v.kind,
            v.deleted,
            v.inserted,
            v.shift,
            v
        );
    }
}
