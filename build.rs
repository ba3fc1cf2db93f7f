// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    // Generate Rust code with the compiled-in values
    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const CONSUL_ADDR: &str = "{consul_addr}";
pub const DATACENTER: &str = "{datacenter}";
pub const DEFAULT_DATACENTER: &str = "{default_datacenter}";
pub const TIMEOUT_SECS: u64 = {timeout_secs};

pub const OUTPUT_FORMAT: &str = "{output_format}";
"#,
        consul_addr = config.consul_addr,
        datacenter = config.datacenter,
        default_datacenter = config.default_datacenter,
        timeout_secs = config.timeout_secs,
        output_format = config.output_format,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    consul_addr: String,
    datacenter: String,
    default_datacenter: String,
    timeout_secs: u64,
    output_format: String,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            consul_addr: "http://127.0.0.1:8500".to_string(),
            datacenter: "dc1".to_string(),
            default_datacenter: "dc1".to_string(),
            timeout_secs: 30,
            output_format: "text".to_string(),
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_consul = false;
    let mut in_output = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Track which section we're in
        if trimmed.starts_with("consul:") {
            in_consul = true;
            in_output = false;
            continue;
        } else if trimmed.starts_with("output:") {
            in_consul = false;
            in_output = true;
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            let value = value.trim_matches('"').trim_matches('\'');
            if in_consul {
                match key {
                    "address" => config.consul_addr = value.to_string(),
                    "datacenter" => config.datacenter = value.to_string(),
                    "default_datacenter" => config.default_datacenter = value.to_string(),
                    "timeout_secs" => config.timeout_secs = value.parse().unwrap_or(30),
                    _ => {}
                }
            } else if in_output && key == "format" {
                config.output_format = parse_output_format(value);
            }
        }
    }

    config
}

fn parse_output_format(value: &str) -> String {
    let format = value.to_lowercase();
    if !matches!(format.as_str(), "text" | "json") {
        panic!("src/config.yaml: output.format must be `text` or `json`, got `{}`", value);
    }
    format
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    // Find the colon separator
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}
