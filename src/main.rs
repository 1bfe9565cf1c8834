/// Unific - record query demo CLI
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process;

use unific::query::field;
use unific::{RecordSet, Term, Unifier, UnifyConfig, VERSION};

fn print_usage() {
    eprintln!("Unific v{}", VERSION);
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    unific [OPTIONS]");
    eprintln!();
    eprintln!("Runs the demo queries against the built-in people records.");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -h, --help           Print this help message");
    eprintln!("    -v, --version        Print version information");
    eprintln!("    -o, --output <FILE>  Write output to FILE (default: stdout)");
    eprintln!("    -c, --config <FILE>  Read [unify] settings from a TOML file");
    eprintln!("    --trace [LEVEL]      Log unification steps (default level 1)");
    eprintln!("    --occurs-check       Reject cyclic bindings");
    eprintln!();
    eprintln!("ENVIRONMENT:");
    eprintln!("    UNIFIC_TRACE         Same as --trace; a number sets the level");
}

fn print_version() {
    println!("Unific {}", VERSION);
}

struct Options {
    output: Option<String>,
    config: Option<String>,
    trace: Option<u8>,
    occurs_check: bool,
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().collect();

    let mut output = None;
    let mut config = None;
    let mut trace = None;
    let mut occurs_check = false;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing output file after -o".to_string());
                }
                output = Some(args[i].clone());
            }
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing config file after -c".to_string());
                }
                config = Some(args[i].clone());
            }
            "--trace" => {
                // Optional numeric level
                match args.get(i + 1).and_then(|s| s.parse::<u8>().ok()) {
                    Some(level) => {
                        trace = Some(level);
                        i += 1;
                    }
                    None => trace = Some(1),
                }
            }
            "--occurs-check" => {
                occurs_check = true;
            }
            arg => {
                return Err(format!("Unknown option: {}", arg));
            }
        }
        i += 1;
    }

    Ok(Options {
        output,
        config,
        trace,
        occurs_check,
    })
}

fn trace_from_env() -> Option<u8> {
    env::var("UNIFIC_TRACE")
        .ok()
        .map(|value| value.trim().parse::<u8>().unwrap_or(1))
}

fn build_config(options: &Options) -> Result<UnifyConfig, String> {
    let mut config = match &options.config {
        Some(path) => UnifyConfig::load(Path::new(path)).map_err(|e| e.to_string())?,
        None => UnifyConfig::default(),
    };

    if let Some(level) = options.trace.or_else(trace_from_env) {
        config.trace_level = level;
    }
    if options.occurs_check {
        config.occurs_check = true;
    }
    Ok(config)
}

fn init_logging(config: &UnifyConfig) {
    let max_level = match config.trace_level {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();
}

fn format_found(found: &[&Term]) -> String {
    let mut out = String::new();
    for record in found {
        let first = field(record, "first").unwrap_or("?");
        let last = field(record, "last").unwrap_or("?");
        out.push_str(&format!("found: {} {}\n", first, last));
    }
    out
}

fn run_queries(unifier: &Unifier) -> String {
    let db = RecordSet::people();
    let queries: [(&str, Vec<(&str, Term)>); 3] = [
        ("People named John:", vec![("first", Term::string("John"))]),
        ("Forty-year-olds:", vec![("age", Term::Long(40))]),
        (
            "Forty-year-old people named John:",
            vec![("first", Term::string("John")), ("age", Term::Long(40))],
        ),
    ];

    let sections: Vec<String> = queries
        .iter()
        .map(|(title, fields)| {
            let found = db.query(unifier, fields);
            format!("{}\n{}", title, format_found(&found))
        })
        .collect();
    sections.join("\n")
}

fn write_output(output: Option<&str>, content: &str) -> Result<(), String> {
    match output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .map_err(|e| format!("Failed to create output file '{}': {}", path, e))?;
            file.write_all(content.as_bytes())
                .map_err(|e| format!("Failed to write to output file '{}': {}", path, e))?;
            Ok(())
        }
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}

fn main() {
    let options = match parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    let config = match build_config(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    init_logging(&config);

    let unifier = Unifier::from_config(&config);
    let output = run_queries(&unifier);

    if let Err(e) = write_output(options.output.as_deref(), &output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
