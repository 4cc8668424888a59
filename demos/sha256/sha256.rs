/*
 * Copyright (C) 2023-2026 Ligero, Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! SHA-256 Hash Example
//!
//! Prints one digest per input text, or the digest of stdin when no text is
//! given. `--check <hex>` compares the first digest against a reference and
//! exits with status 1 on mismatch. Set `RUST_LOG=trace` to see hasher logs.

use clap::Parser;
use sha256ref::{Digest, Hasher};
use std::io::{self, Read};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "sha256", about = "Print SHA-256 digests of texts or of stdin")]
struct Args {
    /// Texts to hash; stdin is hashed when none are given
    inputs: Vec<String>,

    /// Reference digest (64 hex characters) for the first input
    #[arg(long)]
    check: Option<Digest>,
}

fn hash_stdin() -> Result<Digest, Box<dyn std::error::Error>> {
    let mut hasher = Hasher::new();
    let mut stdin = io::stdin().lock();
    let mut buf = [0u8; 8192];
    loop {
        let n = stdin.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n])?;
    }
    Ok(hasher.finalize()?)
}

/// Print the digests and report whether the reference (if any) matched
fn run(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
    let first = if args.inputs.is_empty() {
        let digest = hash_stdin()?;
        println!("{}  -", digest);
        digest
    } else {
        let mut digests = Vec::with_capacity(args.inputs.len());
        for input in &args.inputs {
            let digest = sha256ref::hash(input.as_bytes())?;
            println!("{}  {:?}", digest, input);
            digests.push(digest);
        }
        digests[0]
    };

    Ok(args.check.map_or(true, |expected| first == expected))
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("digest mismatch");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
    }
}
