// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), String> {
    let mut out: Option<PathBuf> = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--out" {
            out = args.next().map(PathBuf::from);
        }
    }
    let out = out.ok_or_else(|| "missing --out <path>".to_string())?;

    let spec = cena_api::openapi_v1_spec();
    let mut bytes = serde_json::to_vec_pretty(&spec).map_err(|e| e.to_string())?;
    bytes.push(b'\n');
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    fs::write(&out, bytes).map_err(|e| e.to_string())?;
    println!("wrote OpenAPI spec: {}", out.display());
    Ok(())
}
