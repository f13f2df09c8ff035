// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::path::Path;
use std::process::{Command, ExitCode};

fn run(root: &Path, cmd: &str) -> Result<(), String> {
    let status = Command::new("sh")
        .arg("-lc")
        .arg(cmd)
        .current_dir(root)
        .status()
        .map_err(|e| format!("failed to run `{cmd}`: {e}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("command failed: {cmd}"))
    }
}

fn hash_password(password: Option<String>) -> Result<(), String> {
    let password = password.ok_or("usage: xtask hash-password <password>")?;
    println!("{}", cena_core::sha256_hex(password.as_bytes()));
    Ok(())
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let arg = args.next().unwrap_or_else(|| "help".to_string());
    let Some(root) = Path::new(env!("CARGO_MANIFEST_DIR")).parent() else {
        eprintln!("xtask must live inside the workspace");
        return ExitCode::FAILURE;
    };

    let result = match arg.as_str() {
        "openapi" => run(
            root,
            "cargo run -q -p cena-api --bin openapi -- --out docs/openapi.json",
        ),
        "hash-password" => hash_password(args.next()),
        "check" => run(
            root,
            "cargo fmt --all -- --check && cargo clippy --workspace --all-targets -- -D warnings && cargo test --workspace",
        ),
        "help" | "--help" | "-h" => {
            eprintln!("xtask commands:");
            eprintln!("  openapi                    write docs/openapi.json");
            eprintln!("  hash-password <password>   print the digest for a users file entry");
            eprintln!("  check                      fmt, clippy and tests");
            Ok(())
        }
        _ => Err(format!(
            "unknown xtask command: {arg} (try `cargo run -p xtask -- help`)"
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
