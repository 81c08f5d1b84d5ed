use std::env;
use std::fs;

const ENV_FILE: &str = ".env";
const VAR_PREFIX: &str = "BOOKSTAY_";

// Lift BOOKSTAY_* entries from .env into rustc-env so the frontend can read
// them through option_env! at compile time.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={ENV_FILE}");

    let Ok(contents) = fs::read_to_string(ENV_FILE) else {
        println!("cargo:warning=no {ENV_FILE} found; the built-in backend URL applies (copy .env.example to override)");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if !key.starts_with(VAR_PREFIX) {
            continue;
        }
        // An exported variable wins over the file.
        if env::var(key).is_err() {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
