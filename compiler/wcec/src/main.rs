//! WebCee compiler CLI.

use std::path::Path;

use wce_diagnostic::ColorMode;
use wcec::commands::{
    build_files, check_file, explain_error, lex_file, list_containers, parse_build_args,
    parse_file,
};

fn main() {
    wcec::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let ok = match command {
        "build" => match parse_build_args(&args[2..]) {
            Ok(options) => build_files(&options),
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!();
                eprintln!("Usage: wcec build <file.wce>... [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  -o <path>                   Output file (single input; '-' for stdout)");
                eprintln!("  --emit-on-error             Generate code even if errors were reported");
                eprintln!("  --color=<auto|always|never> Diagnostic coloring");
                eprintln!("  --indent=<n>                Spaces per nesting level (default 4)");
                false
            }
        },
        "check" | "lex" | "parse" | "containers" => {
            let Some((path, color)) = file_and_color(&args[2..]) else {
                eprintln!("Usage: wcec {command} <file.wce> [--color=<auto|always|never>]");
                std::process::exit(1);
            };
            let path = Path::new(path);
            match command {
                "check" => check_file(path, color),
                "lex" => lex_file(path, color),
                "parse" => parse_file(path, color),
                _ => list_containers(path, color),
            }
        }
        "explain" | "--explain" => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: wcec explain <ERROR_CODE>");
                eprintln!("Example: wcec explain WCE106");
                std::process::exit(1);
            };
            explain_error(code)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("wcec {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

/// One file path plus an optional `--color=` flag, in any order.
fn file_and_color(args: &[String]) -> Option<(&str, ColorMode)> {
    let mut path = None;
    let mut color = ColorMode::Auto;
    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            color = ColorMode::from_flag(value)?;
        } else if path.is_none() && !arg.starts_with('-') {
            path = Some(arg.as_str());
        } else {
            return None;
        }
    }
    path.map(|p| (p, color))
}

fn print_usage() {
    println!("WebCee compiler");
    println!();
    println!("Usage: wcec <command> [options]");
    println!();
    println!("Commands:");
    println!("  build <file.wce>...      Compile to C (writes <file>.c next to each input)");
    println!("  check <file.wce>         Report diagnostics only");
    println!("  lex <file.wce>           Tokenize and display tokens");
    println!("  parse <file.wce>         Parse and display the syntax tree");
    println!("  containers <file.wce>    List the <name>_begin/<name>_end symbols needed");
    println!("  explain <code>           Explain an error code (e.g., WCE106)");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Build options:");
    println!("  -o <path>                Output file (single input; '-' for stdout)");
    println!("  --emit-on-error          Generate code even if errors were reported");
    println!("  --color=<mode>           auto, always or never (NO_COLOR is honored)");
    println!("  --indent=<n>             Spaces per nesting level (default 4)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG                 Enable logging, e.g. RUST_LOG=wce_parse=debug");
    println!("  WCE_LOG_TREE=1           Indented span tree instead of flat log lines");
    println!();
    println!("Examples:");
    println!("  wcec build ui.wce");
    println!("  wcec build ui.wce -o -         # print generated code");
    println!("  wcec build a.wce b.wce c.wce   # compile in parallel");
    println!("  wcec explain WCE106");
}
