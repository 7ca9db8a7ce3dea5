use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of tinymark::formats::AVAILABLE_FORMATS
// We need to duplicate this here since build scripts can't access the library
const AVAILABLE_FORMATS: &[&str] = &["ansi", "html"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("tinymark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render constrained markdown as HTML or ANSI terminal text")
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "tinymark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "tinymark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "tinymark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
