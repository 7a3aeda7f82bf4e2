//! Command-line interface for grammar-outline
//! Prints the structural outline of a grammar file, its tokens, or rewrites for its left-recursive rules.
//!
//! Usage:
//!   grammar-outline outline `<path>` [--format `<format>`] [--config `<file>`] [--line-numbers]
//!   grammar-outline tokens `<path>`          - One token per line: line, kind, span, text
//!   grammar-outline left-recursion `<path>`  - Suggested rewrite of each left-recursive rule
//!   grammar-outline list-formats           - List the available output formats
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`, e.g. `RUST_LOG=grammar_outline=debug`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use grammar_outline::outline::ast::snapshot_from_outline;
use grammar_outline::outline::config::Loader;
use grammar_outline::outline::error::OutlineError;
use grammar_outline::outline::formats::{FormatRegistry, TreevizFormatter};
use grammar_outline::outline::lexing::tokenize;
use grammar_outline::outline::parsing::{analyze, Analyzer};
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the grammar file")
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .index(1)
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .init();

    let matches = Command::new("grammar-outline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Structural outline of ANTLR-style grammar files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("outline")
                .about("Print rules, alternatives and groups of a grammar")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats); defaults to the configured one"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the built-in defaults")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("line-numbers")
                        .long("line-numbers")
                        .help("Prefix treeviz lines with source line numbers")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream of a grammar")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("left-recursion")
                .about("Suggest rewrites for directly left-recursive rules")
                .arg(path_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("outline", outline_matches)) => handle_outline_command(outline_matches),
        Some(("tokens", tokens_matches)) => handle_tokens_command(&path_of(tokens_matches)),
        Some(("left-recursion", lr_matches)) => handle_left_recursion_command(&path_of(lr_matches)),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn path_of(matches: &ArgMatches) -> PathBuf {
    // Required by clap
    matches.get_one::<PathBuf>("path").cloned().unwrap_or_default()
}

fn read_source(path: &Path) -> Result<String, OutlineError> {
    let source = std::fs::read_to_string(path).map_err(|e| OutlineError::io(path, e))?;
    debug!(path = %path.display(), bytes = source.len(), "read grammar");
    Ok(source)
}

/// Handle the outline command
fn handle_outline_command(matches: &ArgMatches) -> Result<(), OutlineError> {
    let mut loader = Loader::new();
    if let Some(config) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(config);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("line-numbers") {
        loader = loader.set_override("output.show_line_numbers", true)?;
    }
    let config = loader.build()?;

    let source = read_source(&path_of(matches))?;
    let tokenized = tokenize(&source);
    let outline = Analyzer::new(config.markers()).analyze(tokenized.tokens());
    let snapshot = snapshot_from_outline(&outline, tokenized.lines());

    let mut registry = FormatRegistry::with_defaults();
    if config.output.show_line_numbers {
        registry.register(TreevizFormatter::with_line_numbers());
    }
    let output = registry.serialize(&snapshot, &config.output.format)?;
    print!("{}", output);
    Ok(())
}

/// Handle the tokens command
fn handle_tokens_command(path: &Path) -> Result<(), OutlineError> {
    let source = read_source(path)?;
    for token in tokenize(&source).tokens() {
        println!("{}", token);
    }
    Ok(())
}

/// Handle the left-recursion command
fn handle_left_recursion_command(path: &Path) -> Result<(), OutlineError> {
    let source = read_source(path)?;
    let tokenized = tokenize(&source);
    let outline = analyze(tokenized.tokens());

    let mut count = 0;
    for rule in outline.left_recursive_rules() {
        println!("{} : {} ;", rule.name(), rule.eliminate_left_recursion());
        count += 1;
    }
    info!(rules = outline.rules().len(), left_recursive = count, "left recursion check done");
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for (name, description) in FormatRegistry::with_defaults().describe_formats() {
        println!("  {}", name);
        println!("    {}", description);
    }
}
