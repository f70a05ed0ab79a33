//! SCL Compiler - generates starter code and stdin harnesses from SCL
//!
//! Usage: sclc [OPTIONS] <input> [-l <language>]... [-o <output>]

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, bail};
use clap::Parser as ClapParser;
use log::info;
use scl_toolchain::backend::GenerateOptions;
use scl_toolchain::common::DiagnosticReporter;
use scl_toolchain::driver::Pipeline;
use scl_toolchain::frontend::FrontendConfig;
use scl_toolchain::types::{RegistryOptions, TargetLanguage};

#[derive(ClapParser, Debug)]
#[command(name = "sclc")]
#[command(version)]
#[command(about = "Structured Call Language compiler: multi-language stubs and harnesses", long_about = None)]
struct Args {
    /// Input SCL file
    #[arg(required_unless_present = "list_languages")]
    input: Option<PathBuf>,

    /// Target language id (repeatable; all languages when omitted)
    #[arg(short, long = "lang")]
    lang: Vec<String>,

    /// Output file (single language) or directory (several languages)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit only the `execute` stub (starter code)
    #[arg(long)]
    stub_only: bool,

    /// Accept the legacy `return -> <name>` dialect
    #[arg(long)]
    legacy: bool,

    /// Fall back to the integer binding for missing scalar bindings
    #[arg(long)]
    lenient: bool,

    /// List supported languages and exit
    #[arg(long)]
    list_languages: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dump tokens (for debugging)
    #[arg(long)]
    dump_tokens: bool,

    /// Dump IR (for debugging)
    #[arg(long)]
    dump_ir: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(&args) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(RegistryOptions {
        lenient_fallback: args.lenient,
    })?;

    if args.list_languages {
        for language in pipeline.backends().languages() {
            println!("{}", language);
        }
        return Ok(());
    }

    let Some(input) = &args.input else {
        bail!("no input file given");
    };
    let source = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let filename = input.display().to_string();

    let mut reporter = DiagnosticReporter::new();
    let file_id = reporter.add_file(&filename, &source);

    let languages = if args.lang.is_empty() {
        pipeline.backends().languages()
    } else {
        args.lang
            .iter()
            .map(|id| id.parse::<TargetLanguage>())
            .collect::<Result<Vec<_>, _>>()?
    };

    let config = FrontendConfig {
        dump_tokens: args.dump_tokens,
        dump_ir: args.dump_ir,
        verbose: args.verbose,
        legacy_dialect: args.legacy,
    };
    let parsed = pipeline.compile_source(&source, &filename, &config, &reporter, file_id)?;
    info!("{}: {} input(s), returns {}", filename, parsed.inputs.len(), parsed.returns());

    let options = GenerateOptions {
        stub_only: args.stub_only,
    };
    let mut failures = 0;
    for (language, result) in pipeline.generate_each(&parsed, &languages, options) {
        match result {
            Ok(code) => write_output(args.output.as_deref(), language, languages.len() > 1, &code)?,
            Err(e) => {
                eprintln!("error: {}: {}", language, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("generation failed for {} of {} language(s)", failures, languages.len());
    }
    Ok(())
}

fn write_output(output: Option<&Path>, language: TargetLanguage, several: bool, code: &str) -> anyhow::Result<()> {
    match output {
        Some(dir) if several => {
            let dir = dir.join(language.id());
            fs::create_dir_all(&dir)?;
            let path = dir.join(language.file_name());
            fs::write(&path, code).with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        Some(path) => {
            fs::write(path, code).with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None if several => {
            println!("=== {} ===", language);
            print!("{}", code);
            println!();
        }
        None => print!("{}", code),
    }
    Ok(())
}
