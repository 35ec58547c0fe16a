mod debug_report;

use hmm_phonology::{Options, decompose_verbose};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(CliError::Usage(err)) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
        Err(CliError::Io(err)) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let options = Options { tone_numbers: config.tone_numbers };
    let breakdowns: Vec<_> = split_syllables(&config.input).map(|s| decompose_verbose(s, &options)).collect();
    debug_report::print_breakdowns(&breakdowns, config.verbose, config.color);
}

enum CliError {
    Usage(String),
    Io(String),
}

struct CliConfig {
    input: String,
    tone_numbers: bool,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, CliError> {
    let mut input: Option<String> = None;
    let mut tone_numbers = false;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("hmm-phonology {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "-n" | "--numbers" => tone_numbers = true,
            "-v" | "--verbose" => verbose = true,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| usage("error: --input expects a value"))?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                set_input(&mut input, value.to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(CliError::Usage(format!("error: unknown option '{arg}'")));
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
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(CliError::Usage(format!("error: no input provided\n\n{}", help_text())));
    }

    Ok(CliConfig { input, tone_numbers, verbose, color })
}

fn usage(msg: &str) -> CliError {
    CliError::Usage(msg.to_string())
}

fn set_input(input: &mut Option<String>, value: String) -> Result<(), CliError> {
    if input.is_some() {
        return Err(usage("error: input provided multiple times"));
    }
    *input = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, CliError> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| CliError::Io(format!("error: failed to read stdin: {err}")))?;
    Ok(buffer)
}

/// Syllables are separated by whitespace, apostrophes or hyphens (`xī'ān`, `píng-guǒ`).
fn split_syllables(input: &str) -> impl Iterator<Item = &str> {
    input.split(|c: char| c.is_whitespace() || matches!(c, '\'' | '’' | '-')).filter(|s| !s.is_empty())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "hmm-phonology {version}

Split pinyin syllables into Hanzi Movie Method actor, set and tone room.

Usage:
  hmm-phonology [OPTIONS] [--] <syllable...>
  hmm-phonology [OPTIONS] --input <text>

Options:
  -i, --input <text>         Syllables to decompose. If omitted, reads remaining
                             args or stdin when no args are provided.
  -n, --numbers              Accept numbered tones (hao3) as well as tone marks.
  -v, --verbose              Show which rule decided each part.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Failed to read input.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
