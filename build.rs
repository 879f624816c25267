//! This build script validates the default configuration file (`default_config.toml`)

#![allow(dead_code, reason = "Some items may be unused in this build script context")]
#![allow(unused_imports, reason = "Some items may be unused in this build script context")]

use ohno::IntoAppError;
use std::process;

type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[path = "src/normalize.rs"]
mod normalize;

#[path = "src/config.rs"]
mod config;

fn main() {
    match config::Config::parse(config::DEFAULT_CONFIG_TOML).into_app_err("unable to load default_config.toml") {
        Ok(_) => {
            println!("cargo:rerun-if-changed=default_config.toml");
            println!("cargo:rerun-if-changed=src/config.rs");
            println!("cargo:rerun-if-changed=src/normalize.rs");
        }
        Err(e) => {
            eprintln!("{e:?}");
            process::exit(1);
        }
    }
}
