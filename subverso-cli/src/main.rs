// Command-line interface for subverso payloads
//
// This binary provides commands for rendering and inspecting SubVerso
// highlighted JSON payloads.
//
// The main role of the subverso program is to interface with highlighted
// payloads: converting them to publishable output, or inspecting their
// decoded structure during development. The core capabilities come from the
// subverso-render crate; this crate is a thin shell over that library.
//
// Converting:
//
// The target output can be auto-detected from the -o file extension, while
// being overridable by an explicit --to flag; with neither, the configured
// default output is used.
// Usage:
//  subverso <input> [--to <output>] [--base64] [--output <file>]  - Render a payload (default)
//  subverso convert <input> ...                                   - Same as above (explicit)
//  subverso inspect <path> [<transform>]      - Inspect the decoded tree (defaults to "tree")
//  subverso css                               - Print the stylesheet for the HTML output
//  subverso --list-outputs                    - List available outputs and transforms
//
// Extra Parameters:
//
// Output-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the output.
// Example:
//  subverso proof.json --to html --extra-document --extra-custom-css "pre { margin: 0 }"

mod transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use subverso_config::{Loader, SubversoConfig};
use subverso_render::OutputRegistry;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // Found an extra-* argument
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                let next = &args[i + 1];
                !next.starts_with('-') && !next.starts_with("--")
            } else {
                false
            };

            if has_value {
                // Explicit value provided
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2; // Skip both the key and value
            } else {
                // No value, treat as boolean flag (default to "true")
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("subverso")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering and inspecting SubVerso highlighted JSON")
        .long_about(
            "subverso is a command-line tool for working with SubVerso highlighted\n\
            JSON payloads (syntax-highlighted Lean code with semantic metadata).\n\n\
            Commands:\n  \
            - convert: Render a payload to HTML, plain text, or a tree listing\n  \
            - inspect: View the decoded structure of a payload\n  \
            - css:     Print the stylesheet matching the HTML output\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass output-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            subverso inspect proof.json                 # View decoded tree\n  \
            subverso proof.json --to html               # Render to HTML (stdout)\n  \
            subverso proof.json --base64 -o out.html    # Base64 payload to HTML file\n  \
            subverso proof.json --to html --extra-document  # Complete HTML page",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-outputs")
                .long("list-outputs")
                .help("List available outputs and inspect transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a subverso.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the decoded structure of a payload")
                .long_about(
                    "View the canonical tree a payload decodes to.\n\n\
                    Transforms:\n  \
                    - tree:   One-node-per-line structure listing (default)\n  \
                    - plain:  Visible text with all highlighting stripped\n\n\
                    Extra Parameters:\n  \
                    --extra-positions false   Hide tactic source ranges in tree output\n\n\
                    Examples:\n  \
                    subverso inspect proof.json           # Tree listing (default)\n  \
                    subverso inspect proof.json plain     # Just the source text\n  \
                    subverso inspect proof.b64 --base64   # Base64-encoded payload",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the payload file ('-' for stdin)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'tree'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("base64")
                        .long("base64")
                        .help("Treat the payload as base64-encoded JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a payload to an output format (default command)")
                .long_about(
                    "Render a highlighted payload to an output format.\n\n\
                    Supported outputs:\n  \
                    - html:    HTML fragment with semantic CSS classes (.html)\n  \
                    - text:    Plain text with highlighting stripped (.txt)\n  \
                    - treeviz: Decoded structure listing (.tree)\n\n\
                    The output is auto-detected from the -o file extension when --to\n\
                    is omitted; with neither, the configured default output is used.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    subverso convert proof.json --to html          # HTML fragment (stdout)\n  \
                    subverso convert proof.b64 --base64 -o out.html  # Base64 payload to file\n  \
                    subverso proof.json --to text                  # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input payload file ('-' for stdin)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target output (auto-detected from -o extension if omitted)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("base64")
                        .long("base64")
                        .help("Treat the payload as base64-encoded JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("css")
                .about("Output the stylesheet matching the HTML output")
                .long_about(
                    "Outputs the fixed stylesheet covering the CSS classes emitted by\n\
                    the HTML output.\n\n\
                    Use this when assembling a hosting page yourself. The output can be\n\
                    saved to a file, customized, and passed via --extra-custom-css to\n\
                    the convert command to extend the default styles.\n\n\
                    Examples:\n  \
                    subverso css                  # Print stylesheet to stdout\n  \
                    subverso css > highlight.css  # Save to file for editing",
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // First, try normal parsing with cleaned args
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like a file ("-" means stdin and also counts)
            if cleaned_args.len() > 1
                && (cleaned_args[1] == "-" || !cleaned_args[1].starts_with('-'))
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "css"
                && cleaned_args[1] != "help"
            {
                // Inject "convert" as the subcommand
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                // Try parsing again with "convert" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject convert, show original error
                e.exit();
            }
        }
    };

    if matches.get_flag("list-outputs") {
        handle_list_outputs_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("tree");
            let base64 = sub_matches.get_flag("base64");
            handle_inspect_command(path, transform, base64, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());

            // Resolve the target output: --to, then -o extension, then config
            let to = if let Some(t) = sub_matches.get_one::<String>("to") {
                t.to_string()
            } else {
                let registry = OutputRegistry::default();
                output
                    .and_then(|path| registry.detect_output_from_filename(path))
                    .unwrap_or_else(|| config.convert.default_output.clone())
            };

            let base64 = sub_matches.get_flag("base64");
            handle_convert_command(input, &to, base64, output, &extra_params, &config);
        }
        Some(("css", _)) => {
            handle_css_command();
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    base64: bool,
    extra_params: &HashMap<String, String>,
    config: &SubversoConfig,
) {
    let (source, origin) = read_payload(path);

    let params = build_inspect_params(config, extra_params);

    let output = transforms::execute_transform(&source, &origin, base64, transform, &params)
        .unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: &str,
    base64: bool,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &SubversoConfig,
) {
    let registry = OutputRegistry::default();

    // Validate the output exists before reading anything
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let (source, origin) = read_payload(input);

    let node = if base64 {
        subverso_render::decode_base64(&source, &origin)
    } else {
        subverso_render::decode(&source, &origin)
    }
    .unwrap_or_else(|e| {
        eprintln!("Decode error: {e}");
        std::process::exit(1);
    });

    let mut output_options = HashMap::new();
    if to == "html" {
        if config.convert.html.document {
            output_options.insert("document".to_string(), "true".to_string());
        }
        if !config.convert.html.custom_css.is_empty() {
            output_options.insert(
                "custom-css".to_string(),
                config.convert.html.custom_css.clone(),
            );
        }
    } else if to == "treeviz" && !config.inspect.tree.show_positions {
        output_options.insert("positions".to_string(), "false".to_string());
    }
    for (key, value) in extra_params {
        output_options.insert(key.clone(), value.clone());
    }

    let rendered = registry
        .render_with_options(&node, to, &output_options)
        .unwrap_or_else(|e| {
            eprintln!("Render error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, rendered).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{rendered}");
        }
    }
}

/// Handle the css command
fn handle_css_command() {
    print!("{}", subverso_render::stylesheet());
}

/// Handle the list-outputs command
fn handle_list_outputs_command() {
    println!("Available outputs:");
    let registry = OutputRegistry::default();
    for output_name in registry.list_outputs() {
        println!("  {output_name}");
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

/// Read a payload from a file, or from stdin when the path is "-".
/// Returns the payload text and the origin label used in decode errors.
fn read_payload(path: &str) -> (String, String) {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {e}");
                std::process::exit(1);
            });
        (source, "<stdin>".to_string())
    } else {
        let source = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file '{path}': {e}");
            std::process::exit(1);
        });
        (source, path.to_string())
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> SubversoConfig {
    let loader = Loader::new().with_optional_file("subverso.toml");
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

fn apply_config_overrides(config: &mut SubversoConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("positions") {
        config.inspect.tree.show_positions = parse_bool_arg("positions", &raw);
        // Re-inject for the output layer, which reads it as an option
        extra_params.insert(
            "positions".to_string(),
            config.inspect.tree.show_positions.to_string(),
        );
    }
}

fn build_inspect_params(
    config: &SubversoConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    params.insert(
        "positions".to_string(),
        config.inspect.tree.show_positions.to_string(),
    );

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn parse_bool_arg(name: &str, raw: &str) -> bool {
    match raw {
        "true" | "1" | "yes" => true,
        "false" | "0" | "no" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{name}");
            std::process::exit(1);
        }
    }
}
