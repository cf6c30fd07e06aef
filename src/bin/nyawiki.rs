//! Command-line interface for nyawiki
//!
//! Usage:
//!   nyawiki `<path>` [--config `<file>`] [--to `<variant>`] [--format `<format>`]
//!   nyawiki --list-formats
//!
//! Without a path the process exits with status 1 and prints nothing.

use clap::{Arg, ArgAction, Command};
use nyawiki::wiki::config::{Loader, WikiConfig};
use nyawiki::wiki::conversion::{build_converter, Variant};
use nyawiki::wiki::formats::FormatRegistry;
use nyawiki::wiki::generator::WikiGenerator;
use nyawiki::wiki::logging;

fn main() {
    let matches = Command::new("nyawiki")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a Markdown outline from Go comment blocks")
        .arg(
            Arg::new("path")
                .help("Path to the source file")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .help("Target script variant: zh-cn, zh-hans, zh-tw, zh-hant, zh-hk, none")
                .value_parser(parse_variant),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: markdown)"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let Some(path) = matches.get_one::<String>("path") else {
        std::process::exit(1);
    };

    let config = load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<Variant>("to").copied(),
        matches.get_one::<String>("format"),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    logging::init(&config.logging.level);
    handle_generate_command(path, &config);
}

fn load_config(
    file: Option<&String>,
    to: Option<Variant>,
    format: Option<&String>,
) -> Result<WikiConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(file) = file {
        loader = loader.with_file(file);
    }
    if let Some(to) = to {
        loader = loader.set_override("conversion.target", to.as_str())?;
    }
    if let Some(format) = format {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build()
}

fn parse_variant(name: &str) -> Result<Variant, String> {
    Variant::parse(name).ok_or_else(|| format!("unknown variant '{}'", name))
}

/// Handle the default command: outline one file to stdout
fn handle_generate_command(path: &str, config: &WikiConfig) {
    let registry = FormatRegistry::with_defaults();
    let formatter = registry.get(&config.output.format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    });

    let converter = build_converter(
        config.conversion.target,
        config.conversion.dictionary.as_deref(),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = WikiGenerator::new(converter.as_ref(), formatter).run_path(path, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}
