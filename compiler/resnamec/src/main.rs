//! Resource name compiler CLI.

use resnamec::commands::{
    check, describe, format_name, load_schema, parse_name, CommandError, FormatOptions,
};

fn main() {
    resnamec::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let mut stdout = std::io::stdout().lock();

    let result = match command.as_str() {
        "check" => {
            require_args(&args, 3, "resnamec check <schema.toml>");
            load_schema(&args[2]).and_then(|schema| check(&schema, &mut stdout))
        }
        "describe" => {
            require_args(&args, 3, "resnamec describe <schema.toml>");
            load_schema(&args[2]).and_then(|schema| describe(&schema, &mut stdout))
        }
        "parse" | "parse-full" => {
            require_args(&args, 5, &format!("resnamec {command} <schema.toml> <type> <name>"));
            let full = command == "parse-full";
            load_schema(&args[2])
                .and_then(|schema| parse_name(&schema, &args[3], &args[4], full, &mut stdout))
        }
        "format" => {
            require_args(
                &args,
                4,
                "resnamec format <schema.toml> <type> [--pattern N] [--full] key=value...",
            );
            run_format(&args, &mut stdout)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("resnamec {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_format(args: &[String], out: &mut impl std::io::Write) -> Result<(), CommandError> {
    let options = FormatOptions::parse(&args[4..])?;
    let schema = load_schema(&args[2])?;
    format_name(&schema, &args[3], options, out)
}

fn require_args(args: &[String], count: usize, usage: &str) {
    if args.len() < count {
        eprintln!("Usage: {usage}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Resource name compiler");
    println!();
    println!("Usage: resnamec <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <schema.toml>                      Compile a schema and summarize it");
    println!("  describe <schema.toml>                   Show derived identifiers and accessors");
    println!("  parse <schema.toml> <type> <name>        Parse a relative name");
    println!("  parse-full <schema.toml> <type> <name>   Parse a full name (with authority)");
    println!("  format <schema.toml> <type> [options] key=value...");
    println!("                                           Render a name from its fields");
    println!("  help                                     Show this help message");
    println!("  version                                  Show version information");
    println!();
    println!("Format options:");
    println!("  --pattern <N>       Pattern of a multi-pattern resource");
    println!("  --full              Prefix the resource authority");
    println!();
    println!("Examples:");
    println!("  resnamec check schema.toml");
    println!("  resnamec parse schema.toml example.com/Book authors/a/books/b");
    println!("  resnamec format schema.toml example.com/Thing --full thing=foo");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=resname_match=trace) to enable tracing.");
}
