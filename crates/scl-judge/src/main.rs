//! SCL judge - materializes one program per test case and submits them
//!
//! Usage: scl-judge [OPTIONS] <scl> <solution> <cases> --lang <language>

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser as ClapParser;
use log::{info, warn};
use scl_judge::{
    Dispatcher, HttpSandboxClient, JudgeConfig, MaterializedCase, Materializer, cancellation, load_cases,
};
use scl_toolchain::common::DiagnosticReporter;
use scl_toolchain::driver::Pipeline;
use scl_toolchain::frontend::FrontendConfig;
use scl_toolchain::types::{RegistryOptions, TargetLanguage};
use serde_json::json;

#[derive(ClapParser, Debug)]
#[command(name = "scl-judge")]
#[command(version)]
#[command(about = "Materialize SCL test cases and dispatch them to a sandbox", long_about = None)]
struct Args {
    /// SCL file describing the function signature
    scl: PathBuf,

    /// Candidate solution: the body of `execute`
    solution: PathBuf,

    /// Test cases as a JSON array
    cases: PathBuf,

    /// Target language id
    #[arg(short, long = "lang")]
    lang: String,

    /// Judge configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sandbox endpoint, overriding the configuration
    #[arg(long)]
    endpoint: Option<String>,

    /// Maximum submissions in flight, overriding the configuration
    #[arg(long)]
    max_concurrency: Option<usize>,

    /// Write the programs under this directory instead of submitting them
    #[arg(long, value_name = "DIR")]
    dry_run: Option<PathBuf>,

    /// Accept the legacy `return -> <name>` dialect
    #[arg(long)]
    legacy: bool,

    /// Fall back to the integer binding for missing scalar bindings
    #[arg(long)]
    lenient: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let result = tokio::runtime::Runtime::new()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| runtime.block_on(run(&args)));
    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => JudgeConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => JudgeConfig::default(),
    };
    if let Some(endpoint) = &args.endpoint {
        config.sandbox.endpoint.clone_from(endpoint);
    }
    if let Some(max) = args.max_concurrency {
        config.sandbox.max_concurrency = max;
    }
    let options = RegistryOptions {
        lenient_fallback: args.lenient || config.lenient_fallback,
    };

    let language: TargetLanguage = args.lang.parse()?;
    let source = fs::read_to_string(&args.scl).with_context(|| format!("reading {}", args.scl.display()))?;
    let body = fs::read_to_string(&args.solution).with_context(|| format!("reading {}", args.solution.display()))?;
    let cases = load_cases(&args.cases).with_context(|| format!("reading {}", args.cases.display()))?;

    let filename = args.scl.display().to_string();
    let mut reporter = DiagnosticReporter::new();
    let file_id = reporter.add_file(&filename, &source);

    let pipeline = Pipeline::new(options)?;
    let frontend_config = FrontendConfig {
        verbose: args.verbose,
        legacy_dialect: args.legacy,
        ..FrontendConfig::default()
    };
    let parsed = pipeline.compile_source(&source, &filename, &frontend_config, &reporter, file_id)?;

    let materializer = Materializer::new(options)?;
    let programs = materializer.materialize_all(&parsed, language, &body, &cases)?;
    info!("materialized {} case(s) for {}", programs.len(), language);

    if let Some(dir) = &args.dry_run {
        return write_programs(dir, &programs);
    }

    let client = HttpSandboxClient::new(&config.sandbox)?;
    let dispatcher = Dispatcher::new(Arc::new(client), config.sandbox.max_concurrency);
    let (handle, token) = cancellation();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, cancelling outstanding submissions");
            handle.cancel();
        }
    });

    let mut failures = 0;
    for outcome in dispatcher.dispatch(programs, token).await {
        let line = match outcome.result {
            Ok(submission) => json!({
                "caseNo": outcome.case_no,
                "caseId": outcome.case_id,
                "status": submission.status,
                "response": submission.body,
            }),
            Err(e) => {
                failures += 1;
                json!({
                    "caseNo": outcome.case_no,
                    "caseId": outcome.case_id,
                    "error": e.to_string(),
                    "retryable": e.is_retryable(),
                })
            }
        };
        println!("{}", line);
    }

    if failures > 0 {
        anyhow::bail!("{} of {} submission(s) failed", failures, cases.len());
    }
    Ok(())
}

fn write_programs(dir: &Path, programs: &[MaterializedCase]) -> anyhow::Result<()> {
    for program in programs {
        let case_dir = dir.join(format!("case-{}", program.case_no));
        fs::create_dir_all(&case_dir)?;
        let path = case_dir.join(program.language.file_name());
        fs::write(&path, &program.code).with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }
    Ok(())
}
