mod cli;

use std::process::ExitCode;

use log::{error, info};

use cli::Command;
use genomesync::{
    analyzer::analyze_with, compare::compare_genomes, io::load_upload, output::emit,
    AnalysisConfig, AnalysisError, ErrorKind,
};

fn run(args: &cli::Args) -> anyhow::Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()?;

    let config = AnalysisConfig::from(&args.analysis);
    config.validate()?;

    match &args.command {
        Command::Compare { genome_a, genome_b } => {
            info!(
                "Received analysis request: {} vs {}",
                genome_a.display(),
                genome_b.display()
            );
            let upload_a = load_upload(genome_a)?;
            let upload_b = load_upload(genome_b)?;
            info!(
                "File sizes: A={} bytes, B={} bytes",
                upload_a.content.len(),
                upload_b.content.len()
            );

            let report = compare_genomes(&upload_a, &upload_b, &config)?;
            emit(args.output.as_ref(), &report, args.pretty)?;
        }
        Command::Analyze { genome } => {
            let upload = load_upload(genome)?;
            let result = analyze_with(&upload.content, &upload.filename, &config)?;
            emit(args.output.as_ref(), &result, args.pretty)?;
        }
    }

    info!("Analysis complete!");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::parse_args();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<AnalysisError>().map(AnalysisError::kind) {
            Some(ErrorKind::Parse) => {
                error!("Validation error: {}", e);
                ExitCode::from(2)
            }
            _ => {
                error!("Analysis failed: {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}
