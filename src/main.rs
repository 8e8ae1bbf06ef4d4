use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

use shard::ast::printer::to_alt;
use shard::compiler::{CompilationPipeline, CompilationState};
use shard::lexer::format_tokens;

#[derive(Parser)]
#[command(name = "shard")]
#[command(author, version, about = "Front end for the Shard language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a Shard source file and print its projections
    Parse {
        /// The source file to parse
        input: PathBuf,

        /// Dump the token stream
        #[arg(long)]
        tokens: bool,

        /// Dump the AST as JSON
        #[arg(long)]
        json: bool,

        /// Dump the AST in source-like form (the default projection)
        #[arg(long)]
        alt: bool,
    },

    /// Check a Shard source file for errors
    Check {
        /// The source file to check
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Parse {
            input,
            tokens,
            json,
            alt,
        } => parse(input, tokens, json, alt),
        Commands::Check { input } => check(input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn load(input: &Path) -> Result<CompilationPipeline> {
    let state = CompilationState::new(input)
        .with_context(|| format!("Failed to load {:?}", input))?;
    Ok(CompilationPipeline::new(state))
}

fn parse(input: PathBuf, dump_tokens: bool, dump_json: bool, dump_alt: bool) -> Result<()> {
    log::info!("Parsing {:?}", input);

    let dump_alt = dump_alt || !(dump_tokens || dump_json);
    let headed = [dump_tokens, dump_json, dump_alt].iter().filter(|f| **f).count() > 1;
    let section = |title: &str| {
        if headed {
            println!("{}", format!("=== {} ===", title).blue().bold());
        }
    };

    let mut pipeline = load(&input)?;

    let tokens = pipeline.tokenize();
    if let (true, Some(tokens)) = (dump_tokens, &tokens) {
        section("Tokens");
        println!("{}", format_tokens(tokens));
    }

    let program = match tokens {
        Some(_) => pipeline.parse(),
        None => None,
    };

    if let Some(program) = &program {
        if dump_json {
            section("AST");
            println!("{}", program.to_json()?);
        }
        if dump_alt {
            section("Alt AST");
            print!("{}", to_alt(program));
        }
    }

    pipeline.report_errors()?;
    if pipeline.state().has_errors() {
        anyhow::bail!("could not parse {:?}", input);
    }
    Ok(())
}

fn check(input: PathBuf) -> Result<()> {
    log::info!("Checking {:?}", input);

    let mut pipeline = load(&input)?;
    pipeline.run()?;

    if pipeline.state().has_errors() {
        anyhow::bail!("could not parse {:?}", input);
    }

    println!("{}: No errors found", "success".green().bold());
    Ok(())
}
