use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &["tree", "plain"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("subverso")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering and inspecting SubVerso highlighted JSON")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the payload file")
                .required_unless_present("list-outputs")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("transform")
                .help("Inspect transform to apply (e.g., 'tree', 'plain')")
                .required(false)
                .value_parser(clap::builder::PossibleValuesParser::new(
                    AVAILABLE_TRANSFORMS,
                ))
                .index(2)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("list-outputs")
                .long("list-outputs")
                .help("List available outputs")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "subverso", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "subverso", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "subverso", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
