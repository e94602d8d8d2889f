mod debug_report;

use std::io::{self, IsTerminal, Read};
use strcalc::{add, add_verbose};
use tracing_subscriber::{EnvFilter, fmt};

/// Exit code for a successful run.
const EXIT_OK: i32 = 0;
/// Exit code when the input could not be summed.
const EXIT_CALC: i32 = 1;
/// Exit code for invalid arguments or unreadable input.
const EXIT_USAGE: i32 = 2;

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();

    let code = run(std::env::args().skip(1), io::stdin(), io::stdout().is_terminal());
    std::process::exit(code);
}

/// Parse `args`, evaluate, print, and return the process exit code.
fn run(args: impl IntoIterator<Item = String>, stdin: impl Read, color: bool) -> i32 {
    let config = match parse_args(args, stdin, color) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return EXIT_USAGE;
        }
    };

    if config.verbose {
        let report = add_verbose(&config.input);
        debug_report::print_run(&report, config.color);
        return if report.outcome.is_ok() { EXIT_OK } else { EXIT_CALC };
    }

    match add(&config.input) {
        Ok(sum) => {
            println!("{sum}");
            EXIT_OK
        }
        Err(err) => {
            eprintln!("error: {err}");
            EXIT_CALC
        }
    }
}

struct CliConfig {
    input: String,
    verbose: bool,
    color: bool,
}

/// `args` excludes the program name; `stdin` is only read when no input
/// was given on the command line.
fn parse_args(args: impl IntoIterator<Item = String>, stdin: impl Read, color: bool) -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut escapes = false;
    let mut verbose = false;
    let mut color = color;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("strcalc {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-e" | "--escapes" => escapes = true,
            "-v" | "--verbose" => verbose = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>();
                if !rest.is_empty() {
                    set_input(&mut input, rest.join(" "))?;
                }
                break;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=").to_string();
                set_input(&mut input, value)?;
            }
            _ if arg.starts_with('-') && arg.len() > 1 && !looks_numeric(&arg) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input(stdin)?,
    };
    let input = if escapes { unescape(&input) } else { input };

    Ok(CliConfig { input, verbose, color })
}

fn set_input(slot: &mut Option<String>, value: String) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *slot = Some(value);
    Ok(())
}

/// `-3,4` is input with a negative number, not an option.
fn looks_numeric(arg: &str) -> bool {
    arg[1..].starts_with(|c: char| c.is_ascii_digit())
}

fn read_stdin_input(mut stdin: impl Read) -> Result<String, String> {
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;

    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

/// Expand `\n`, `\t` and `\\`; any other backslash sequence is kept as-is.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                chars.next();
                out.push('\n');
            }
            Some('t') => {
                chars.next();
                out.push('\t');
            }
            Some('\\') => {
                chars.next();
                out.push('\\');
            }
            _ => out.push('\\'),
        }
    }

    out
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "strcalc {version}

Sum delimiter-separated numbers.

Usage:
  strcalc [OPTIONS] [--] <input...>
  strcalc [OPTIONS] --input <text>

Input:
  Numbers are separated by ',' or newlines. A first line of the form
  //[d1][d2]... declares custom delimiters instead. Numbers above {max}
  are ignored; negative numbers are an error.

Options:
  -i, --input <text>         Input text. If omitted, reads remaining args,
                             or stdin when no args are provided.
  -e, --escapes              Interpret \\n, \\t and \\\\ in the input.
  -v, --verbose              Print a stage-by-stage report.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter, e.g. RUST_LOG=strcalc=trace.

Exit codes:
  0  Success.
  1  The input could not be summed.
  2  Invalid arguments or unreadable input.
",
        version = env!("CARGO_PKG_VERSION"),
        max = strcalc::MAX_NUMBER,
    )
}
