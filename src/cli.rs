use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use genomesync::analyzer::{AnalysisConfig, DEFAULT_TM_WINDOW};
use genomesync::kmer::{DEFAULT_K, DEFAULT_MAX_LENGTH, DEFAULT_TOP_N};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Write JSON here instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(long, global = true, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(short, long, global = true, default_value_t = 1, help = "Num threads")]
    pub threads: usize,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compare two genomes and normalize their metrics for a radar chart
    Compare {
        #[arg(help = "First genome FASTA file (.fasta, .fa, .fna, optionally .gz)")]
        genome_a: PathBuf,

        #[arg(help = "Second genome FASTA file")]
        genome_b: PathBuf,
    },
    /// Compute statistics for a single genome
    Analyze {
        #[arg(help = "Genome FASTA file (.fasta, .fa, .fna, optionally .gz)")]
        genome: PathBuf,
    },
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AnalysisArgs {
    #[arg(long, global = true, default_value_t = DEFAULT_K, help = "k-mer length")]
    pub kmer_size: usize,

    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_LENGTH,
        help = "Sequences longer than this are downsampled before k-mer counting"
    )]
    pub kmer_sample_limit: usize,

    #[arg(long, global = true, default_value_t = DEFAULT_TOP_N, help = "Number of k-mers to report")]
    pub top_kmers: usize,

    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_TM_WINDOW,
        help = "Leading bases used for the melting temperature"
    )]
    pub tm_window: usize,
}

impl From<&AnalysisArgs> for AnalysisConfig {
    fn from(args: &AnalysisArgs) -> Self {
        AnalysisConfig {
            kmer_size: args.kmer_size,
            kmer_sample_limit: args.kmer_sample_limit,
            top_kmers: args.top_kmers,
            tm_window: args.tm_window,
        }
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}
