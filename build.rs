use std::env;
use std::fs;
use std::path::Path;

/// Keys forwarded from `.env` into `option_env!` at compile time.
const FORWARDED_KEYS: &[&str] = &["API_BASE_URL", "PROXY_TARGET", "ENVIRONMENT", "ENABLE_LOGGING"];

fn main() {
    let env_file = Path::new(".env");
    let mut from_file: Vec<(String, String)> = Vec::new();

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !FORWARDED_KEYS.contains(&key) {
                        continue;
                    }

                    // The process environment wins over the file
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                        from_file.push((key.to_string(), value.to_string()));
                    }
                }
            }
        }
    }

    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let is_set = |key: &str| {
        env::var(key).map(|v| !v.is_empty()).unwrap_or(false)
            || from_file.iter().any(|(k, v)| k == key && !v.is_empty())
    };

    if !is_set("API_BASE_URL") && !is_set("PROXY_TARGET") {
        println!(
            "cargo:warning=Neither API_BASE_URL nor PROXY_TARGET is set. Calls to /api/* will hit the \
             static file server and likely return 404. Set PROXY_TARGET to your backend URL for local development."
        );
    }

    println!("cargo:rerun-if-changed=build.rs");
}
