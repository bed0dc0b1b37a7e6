//! Resume Compiler CLI
//!
//! Usage:
//!   resume-compiler [OPTIONS] [FILE]
//!
//! Options:
//!   --check                  Validate only
//!   -o, --output <PATH>      Write HTML to a file
//!   -t, --template <NAME>    Template: print or interactive
//!   -c, --config <FILE>      Configuration file (TOML format)
//!   --json                   Print the result as a JSON report
//!   --rules                  Show the résumé schema rules
//!   -v, --verbose            Debug logging on stderr
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_compiler::error::format_json_error;
use resume_compiler::tools::{self, VALID_MESSAGE};
use resume_compiler::{check, compile_with_config, CompileError, CompilerConfig, HtmlTemplate};

#[derive(Parser)]
#[command(name = "resume-compiler")]
#[command(about = "Validate résumé JSON and compile it to HTML")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Validate only, do not render
    #[arg(long)]
    check: bool,

    /// Write HTML to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Template to render into (print or interactive)
    #[arg(short, long)]
    template: Option<HtmlTemplate>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the result as a JSON report
    #[arg(long)]
    json: bool,

    /// Show the résumé schema rules
    #[arg(long)]
    rules: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.rules {
        print_rules();
        return;
    }

    init_logging(cli.verbose);

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let config = match &cli.config {
        Some(path) => match CompilerConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => CompilerConfig::default(),
    };

    let mut html_config = config.html_config();
    if let Some(template) = cli.template {
        html_config = html_config.with_template(template);
    }

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if cli.json {
        let (valid, report) = if cli.check {
            let report = tools::validate_resume(&source);
            (report.valid, serde_json::to_string_pretty(&report))
        } else {
            let report = tools::compile_resume_with_config(&source, &html_config);
            (report.valid, serde_json::to_string_pretty(&report))
        };
        match report {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error encoding report: {}", e);
                std::process::exit(1);
            }
        }
        if !valid {
            std::process::exit(1);
        }
        return;
    }

    if cli.check {
        match check(&source) {
            Ok(()) => println!("{}", VALID_MESSAGE),
            Err(e) => fail(&e, &source, &filename),
        }
        return;
    }

    let html = match compile_with_config(&source, &html_config) {
        Ok(html) => html,
        Err(e) => fail(&e, &source, &filename),
    };

    let destination = cli.output.clone().or_else(|| {
        cli.input
            .as_deref()
            .and_then(|input| config.output_path(input))
    });

    match destination {
        Some(path) => {
            if let Err(e) = write_output(&path, &html) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            debug!(path = %path.display(), "wrote resume html");
        }
        // The document already ends with a newline
        None => print!("{}", html),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn fail(err: &CompileError, source: &str, filename: &str) -> ! {
    match err {
        CompileError::InvalidJson(json_err) => {
            eprint!("{}", format_json_error(source, filename, json_err))
        }
        other => eprintln!("Error: {}", other),
    }
    std::process::exit(1);
}

fn write_output(path: &Path, html: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)
}

fn print_intro() {
    println!(
        r#"Resume Compiler - Validate résumé JSON and compile it to HTML

USAGE:
    resume-compiler [OPTIONS] [FILE]
    cat resume.json | resume-compiler

OPTIONS:
    --check            Validate only
    -o, --output       Write HTML to a file instead of stdout
    -t, --template     print (default) or interactive
    -c, --config       Configuration file (TOML)
    --json             Print a {{valid, message, html}} JSON report
    --rules            Show the résumé schema rules
    -v, --verbose      Debug logging on stderr
    -h, --help         Print help

QUICK START:
    resume-compiler resume.json > resume.html

Run --rules for the fields a résumé must and may contain."#
    );
}

const RULES: &str = r#"RESUME SCHEMA
=============

The résumé is a single JSON object. Checks stop at the first violation.

REQUIRED FIELDS
---------------
name, location, phone, email    Non-empty strings (whitespace-only is empty)

OPTIONAL FIELDS
---------------
website                         String, shown in the header when non-empty
technicalSkills                 Array of strings
education                       Array of objects
experience                      Array of objects
projects                        Array of objects
publications                    Array of objects

SECTION ITEMS
-------------
education     institution, location, graduationDate, degree
              optional: gpa, coursework (array of strings)
experience    title, company, location, dateRange
              optional: bullets (array of strings)
projects      name, dateRange
              optional: bullets (array of strings); the first
              bullet is shown as a subtitle
publications  title, citation
              optional: bullets (array of strings)

TECHNICAL SKILLS
----------------
"Languages: Rust, Python"       Category "Languages" with two items
"Docker"                        No colon: listed under "Other"

Repeated categories are merged in first-seen order.

MARKUP
------
**text**                        Bold, anywhere except the name
An unmatched ** turns bold on for the rest of the text."#;

fn print_rules() {
    println!("{}", RULES);
}
