//! Build script for the now-playing service.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory, next to where `config::load_env` looks for the real
//! `.env` file, so a fresh install has a template to fill in.
//!
//! # Destination Location
//!
//! - Linux: `~/.local/share/nowplaying/.env.example`
//! - macOS: `~/Library/Application Support/nowplaying/.env.example`
//! - Windows: `%LOCALAPPDATA%/nowplaying/.env.example`
//!
//! A missing template or an unwritable data directory only produces a cargo
//! warning; the build itself never depends on the copy.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("nowplaying");

    let copied = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::copy(&env_example_path, out_dir.join(".env.example")));
    if let Err(e) = copied {
        println!(
            "cargo:warning=could not copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}
