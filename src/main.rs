use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use hashq::cmd::digest::{self, DigestCommandOptions};
use hashq::domain::error::DigestError;
use hashq::util::seed::parse_seed;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(
    name = "hashq",
    version,
    about = "Deterministic streaming wyhash digests"
)]
struct Cli {
    /// Seed as decimal or 0x-prefixed hex (default 0).
    #[arg(long, default_value = "0")]
    seed: String,

    /// Emit one JSON report object per input instead of checksum lines.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Files to digest; stdin when empty, `-` also selects stdin.
    inputs: Vec<PathBuf>,
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    let seed = match parse_seed(&cli.seed) {
        Ok(seed) => seed,
        Err(error) => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"flag": "--seed"}),
                3,
            );
            return 3;
        }
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();

    if cli.inputs.is_empty() {
        return digest_stdin(&mut output, seed, cli.json);
    }

    for path in &cli.inputs {
        let exit_code = if path.as_os_str() == "-" {
            digest_stdin(&mut output, seed, cli.json)
        } else {
            digest_file(path, &mut output, seed, cli.json)
        };
        if exit_code != 0 {
            return exit_code;
        }
    }
    0
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn digest_stdin<W: io::Write>(output: &mut W, seed: u64, json: bool) -> i32 {
    let options = DigestCommandOptions {
        seed,
        json,
        label: "-".to_string(),
    };
    let stdin = io::stdin();
    match digest::run(stdin.lock(), output, &options) {
        Ok(()) => 0,
        Err(error) => report_digest_error(&error, "-"),
    }
}

fn digest_file<W: io::Write>(path: &PathBuf, output: &mut W, seed: u64, json: bool) -> i32 {
    let options = DigestCommandOptions {
        seed,
        json,
        label: path.display().to_string(),
    };
    match File::open(path) {
        Ok(file) => match digest::run(file, output, &options) {
            Ok(()) => 0,
            Err(error) => report_digest_error(&error, &options.label),
        },
        Err(err) => {
            emit_error(
                "input_usage_error",
                format!("failed to open input file `{}`: {err}", path.display()),
                json!({"command": "digest", "input": path}),
                3,
            );
            3
        }
    }
}

fn report_digest_error(error: &DigestError, input: &str) -> i32 {
    let (exit_code, error_kind) = map_digest_error(error);
    emit_error(
        error_kind,
        error.to_string(),
        json!({"command": "digest", "input": input}),
        exit_code,
    );
    exit_code
}

fn map_digest_error(error: &DigestError) -> (i32, &'static str) {
    match error {
        DigestError::ReadInput { .. } => (3, "input_usage_error"),
        DigestError::WriteOutput { .. } | DigestError::Stream { .. } => (1, "internal_error"),
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
