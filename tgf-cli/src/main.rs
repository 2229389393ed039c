//! Command-line interface for tgf
//! This binary parses TGF (trivial graph format) files and converts them
//! into diagram, tabular and fact-based text formats.
//!
//! Usage:
//!   tgf `<path>` --puml [--csv ...] [-o `<output>`]   - Convert a TGF file
//!   tgf --puml < input.tgf                            - Convert from stdin
//!   tgf --list-formats                                - List available formats

use clap::{Arg, ArgAction, Command};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tgf_convert::FormatRegistry;
use tgf_parser::{TgfModel, TgfParser};

/// Format flags in the fixed order conversions run in.
const FORMAT_FLAGS: [(&str, &str); 8] = [
    ("puml", "convert TGF to a PlantUML node diagram"),
    ("puml-mindmap", "convert TGF to a PlantUML mindmap"),
    ("puml-wbs", "convert TGF to a PlantUML work breakdown structure"),
    ("csv", "convert TGF to csv"),
    ("json", "convert TGF to json"),
    ("yaml", "convert TGF to yaml"),
    ("datalog-value", "convert TGF to datalog value schema"),
    ("datalog-property", "convert TGF to datalog property schema"),
];

fn main() {
    let mut command = Command::new("tgf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("parse, and convert TGF file format")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Read from TGF file; if not specified read TGF from stdin")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write to file; if not specified write to stdout. With more than one format the format extension is appended"),
        )
        .arg(
            Arg::new("overwrite")
                .long("overwrite")
                .help("Overwrite existing output files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dump-model")
                .long("dump-model")
                .help("Pretty-print the parsed model as JSON")
                .action(ArgAction::SetTrue),
        );
    for (name, help) in FORMAT_FLAGS {
        command = command.arg(
            Arg::new(name)
                .long(name)
                .help(help)
                .action(ArgAction::SetTrue),
        );
    }
    let matches = command.get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let requested: Vec<&str> = FORMAT_FLAGS
        .iter()
        .map(|&(name, _)| name)
        .filter(|name| matches.get_flag(name))
        .collect();
    let dump_model = matches.get_flag("dump-model");
    if requested.is_empty() && !dump_model {
        eprintln!("No conversion format specified.");
        std::process::exit(1);
    }

    let input_path = matches.get_one::<String>("path").cloned();
    let model = parse_input(input_path.as_deref());

    if dump_model {
        handle_dump_model_command(&model);
    }
    handle_convert_command(
        &model,
        &requested,
        input_path.as_deref(),
        matches.get_one::<String>("output").map(String::as_str),
        matches.get_flag("overwrite"),
    );
}

/// Parse the input file, or stdin when no path is given.
fn parse_input(path: Option<&str>) -> TgfModel {
    let parser = TgfParser::new();
    let parsed = match path {
        Some(path) => match File::open(path) {
            Ok(file) => parser.parse(BufReader::new(file)),
            Err(err) => {
                eprintln!("Cannot read {}: {}", path, err);
                std::process::exit(1);
            }
        },
        None => parser.parse(io::stdin().lock()),
    };
    parsed.unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    })
}

/// Run the requested conversions and write each result to stdout or to its
/// output file.
fn handle_convert_command(
    model: &TgfModel,
    requested: &[&str],
    input_path: Option<&str>,
    output: Option<&str>,
    overwrite: bool,
) {
    let registry = FormatRegistry::with_defaults();
    let multiple = requested.len() > 1;

    for name in requested {
        // Flag names mirror the registry, so the lookup only fails if the
        // two drift apart.
        let format = registry.get(name).unwrap_or_else(|err| {
            eprintln!("{}", err);
            std::process::exit(1);
        });
        let rendered = format.serialize(model).unwrap_or_else(|err| {
            eprintln!("{}", err);
            std::process::exit(1);
        });

        eprintln!(
            ">>> input: {}, format: {}",
            input_path.unwrap_or("stdin"),
            name
        );
        match output_target(output, multiple, format.file_extension()) {
            None => print!("{}", rendered),
            Some(path) => {
                if !overwrite && path.exists() {
                    eprintln!(
                        "Output file {} already exists, not overwriting it.",
                        path.display()
                    );
                    continue;
                }
                if let Err(err) = std::fs::write(&path, &rendered) {
                    eprintln!("Cannot write to file {}: {}", path.display(), err);
                }
            }
        }
    }
}

/// Output file for one conversion: the base path as-is for a single
/// format, the base path plus the format extension when several formats
/// share one base.
fn output_target(output: Option<&str>, multiple: bool, extension: &str) -> Option<PathBuf> {
    output.map(|base| {
        if multiple {
            PathBuf::from(format!("{}{}", base, extension))
        } else {
            PathBuf::from(base)
        }
    })
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  --{} ({})", name, format.file_extension());
            println!("    {}", format.description());
            println!();
        }
    }
}

/// Handle the dump-model command
fn handle_dump_model_command(model: &TgfModel) {
    let rendered = serde_json::to_string_pretty(model).unwrap_or_else(|err| {
        eprintln!("Error formatting model: {}", err);
        std::process::exit(1);
    });
    println!("{}", rendered);
}
