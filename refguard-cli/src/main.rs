use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use refguard::{init_logging, load_config, run_validation, Scope};
use refguard_core::{ReferenceValidator, ValidationReport};

#[derive(Parser)]
#[command(name = "refguard")]
#[command(about = "Check reference documentation for size, structure and broken links")]
struct Args {
    /// Reference root containing the documents to check
    #[arg(short, long, default_value = "docs/reference")]
    root: PathBuf,

    /// Validate a single document (path relative to the root)
    #[arg(short, long, conflicts_with = "category")]
    file: Option<String>,

    /// Validate one category (a subdirectory directly under the root)
    #[arg(short, long)]
    category: Option<String>,

    /// Path to custom config file (YAML format)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report format: text or json
    #[arg(short = 'F', long, default_value = "text")]
    format: String,

    /// Also write the report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log each document and rule as it is evaluated
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ Validation failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ValidationReport> {
    // JSON on stdout must stay machine-readable, so progress lines are text-only
    let chatty = args.format != "json";

    let config = load_config(args.config.as_deref())?;
    if let Some(config_path) = args.config.as_ref().filter(|_| chatty) {
        println!("📋 Loaded config from: {}", config_path.display());
    }

    let scope = match (&args.file, &args.category) {
        (Some(file), _) => Scope::File(file.clone()),
        (None, Some(category)) => Scope::Category(category.clone()),
        (None, None) => Scope::All,
    };

    if chatty {
        println!("🔍 Validating {} under {}", scope, args.root.display());
    }
    let validator = ReferenceValidator::with_config(&args.root, config);
    let report = run_validation(&validator, &scope)?;

    match args.format.as_str() {
        "json" => println!("{}", report.to_json()?),
        "text" => print!("{}", report.render_text()),
        other => {
            println!("⚠️  Unknown report format '{other}', using text");
            print!("{}", report.render_text());
        }
    }

    if let Some(output) = &args.output {
        save_report(&report, output, &args.format, chatty)?;
    }

    if chatty {
        if report.is_success() {
            println!("✅ All documents valid");
        } else {
            println!("❌ {} invalid document(s)", report.invalid);
        }
    }

    Ok(report)
}

fn save_report(report: &ValidationReport, output_path: &Path, format: &str, chatty: bool) -> Result<()> {
    report.save_with_format(output_path, format)?;
    if chatty {
        println!("💾 Report saved to: {}", output_path.display());
    }
    Ok(())
}
