// Command-line interface for tinymark
//
// Converts a constrained markdown file to HTML or to ANSI-styled terminal text.
// All conversion logic lives in the tinymark crate; this binary only picks the
// target, moves bytes in and out and turns errors into exit codes.
//
// Target selection, first match wins:
//  1. --to <format>
//  2. the extension of --output, unless convert.detect_from_extension is off
//  3. html, when --output is given at all
//  4. convert.default_format from configuration (ansi out of the box)
//
// Usage:
//  tinymark <input> [--to <format>] [--output <file>]  - Convert a file
//  tinymark --list-formats                             - List available formats
//
// Configuration is read from ./tinymark.toml when present, then from --config.
// Logging goes to stderr; -v raises the configured level, RUST_LOG overrides it.

use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;
use std::fs;
use std::str::FromStr;
use tinymark::{formats::AVAILABLE_FORMATS, FormatError, FormatRegistry, RenderTarget};
use tinymark_config::{ConvertConfig, Loader, TinymarkConfig};

fn build_cli() -> Command {
    Command::new("tinymark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render constrained markdown as HTML or ANSI terminal text")
        .long_about(
            "tinymark converts a small, strict subset of markdown.\n\n\
            Supported markup:\n  \
            **bold**, __bold__, _italic_, `monospaced`,\n  \
            # heading, ## subheading, ``` fenced blocks ```, blank-line paragraphs\n\n\
            Nested or unbalanced markers are rejected with an error instead of\n\
            being passed through.\n\n\
            Examples:\n  \
            tinymark notes.md                      # ANSI text on stdout\n  \
            tinymark notes.md --to html            # HTML on stdout\n  \
            tinymark notes.md -o notes.html        # HTML file"
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Markdown file to convert")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .help("Target format")
                .long_help(
                    "Target format to convert to.\n\n\
                    If not specified, it is detected from the --output extension\n\
                    (.html/.htm, .ans/.ansi), falls back to html when an output file is\n\
                    given, and otherwise to the configured default (ansi)."
                )
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .visible_alias("out")
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tinymark.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Raise the log level (repeatable)")
                .action(ArgAction::Count),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_logging(&config, matches.get_count("verbose"));

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let to = matches.get_one::<String>("to").map(|s| s.as_str());
    let output = matches.get_one::<String>("output").map(|s| s.as_str());

    let registry = FormatRegistry::default();
    let target = resolve_target(to, output, &config.convert, &registry).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    handle_convert_command(input, target, output);
}

/// Handle the convert command
fn handle_convert_command(input: &str, target: RenderTarget, output: Option<&str>) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    log::info!("converting '{input}' to {target}");
    let rendered = tinymark::transform(&source, target).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(path, rendered).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            log::info!("wrote '{path}'");
        }
        None => println!("{rendered}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let extensions = format
                .file_extensions()
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {name:<6} {} ({extensions})", format.description());
        }
    }
}

/// Pick the render target for a conversion.
fn resolve_target(
    to: Option<&str>,
    output: Option<&str>,
    convert: &ConvertConfig,
    registry: &FormatRegistry,
) -> Result<RenderTarget, FormatError> {
    if let Some(name) = to {
        return RenderTarget::from_str(name);
    }

    if let Some(path) = output {
        if convert.detect_from_extension {
            if let Some(detected) = registry.detect_format_from_filename(path) {
                log::debug!("target {detected} detected from '{path}'");
                return RenderTarget::from_str(&detected);
            }
        }
        return Ok(RenderTarget::Html);
    }

    Ok(convert.default_format)
}

fn load_cli_config(explicit_path: Option<&str>) -> TinymarkConfig {
    let loader = Loader::new().with_optional_file("tinymark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn init_logging(config: &TinymarkConfig, verbosity: u8) {
    let base = LevelFilter::from_str(&config.logging.level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level '{}' in configuration",
            config.logging.level
        );
        std::process::exit(1);
    });

    env_logger::Builder::new()
        .filter_level(raise_level(base, verbosity))
        .parse_default_env()
        .init();
}

/// Step `base` up once per `-v`, saturating at trace.
fn raise_level(base: LevelFilter, steps: u8) -> LevelFilter {
    LevelFilter::iter()
        .skip_while(|level| *level != base)
        .nth(steps as usize)
        .unwrap_or(LevelFilter::Trace)
}
