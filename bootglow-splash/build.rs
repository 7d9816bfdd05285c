//! Build script for bootglow-splash
//!
//! Validates the embedded splash.toml at compile time, so a broken default
//! never reaches a device.

use std::fs;
use std::path::Path;

/// Sections every splash.toml must carry
const REQUIRED_SECTIONS: [&str; 6] = [
    "display",
    "colors",
    "progress",
    "gesture",
    "channel",
    "splash_image",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    validate_config();
}

/// Validate splash.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=splash.toml");

    let config_path = Path::new("splash.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: splash.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The splash embeds its default configuration at build time.      ║\n\
            ║  Please restore splash.toml in the bootglow-splash directory.    ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read splash.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in splash.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_required_sections(&config, &mut errors);
    validate_colors(&config, &mut errors);
    validate_progress(&config, &mut errors);
    validate_gesture(&config, &mut errors);
    validate_names(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid splash configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=splash.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn validate_required_sections(config: &toml::Value, errors: &mut Vec<String>) {
    for section in REQUIRED_SECTIONS {
        match config.get(section) {
            Some(toml::Value::Table(_)) => {}
            Some(_) => errors.push(format!("[{}] must be a table", section)),
            None => errors.push(format!("Missing [{}] section", section)),
        }
    }
}

/// Every color is an `[r, g, b]` array of 0-255 integers
fn validate_colors(config: &toml::Value, errors: &mut Vec<String>) {
    let colors = match config.get("colors") {
        Some(toml::Value::Table(t)) => t,
        _ => return,
    };

    for (name, value) in colors {
        let valid = match value {
            toml::Value::Array(parts) => {
                parts.len() == 3
                    && parts
                        .iter()
                        .all(|p| matches!(p, toml::Value::Integer(c) if (0..=255).contains(c)))
            }
            _ => false,
        };
        if !valid {
            errors.push(format!("[colors] {} must be [r, g, b] with 0-255", name));
        }
    }
}

fn validate_progress(config: &toml::Value, errors: &mut Vec<String>) {
    let progress = match config.get("progress") {
        Some(toml::Value::Table(t)) => t,
        _ => return,
    };

    for key in ["bar_width", "bar_height"] {
        if let Some(value) = progress.get(key) {
            match value.as_integer() {
                Some(n) if n > 0 => {}
                _ => errors.push(format!("[progress] {} must be a positive integer", key)),
            }
        }
    }

    if let Some(value) = progress.get("infinite_relative_size") {
        match value.as_integer() {
            Some(n) if n >= 1 => {}
            _ => errors.push("[progress] infinite_relative_size must be >= 1".to_string()),
        }
    }
}

fn validate_gesture(config: &toml::Value, errors: &mut Vec<String>) {
    let gesture = match config.get("gesture") {
        Some(toml::Value::Table(t)) => t,
        _ => return,
    };

    let feedback = gesture.get("feedback_threshold").and_then(|v| v.as_integer());
    let trigger = gesture.get("trigger_threshold").and_then(|v| v.as_integer());

    match (feedback, trigger) {
        (Some(feedback), Some(trigger)) => {
            if feedback < 0 || trigger < 0 {
                errors.push("[gesture] thresholds must not be negative".to_string());
            }
            if feedback >= trigger {
                errors.push(format!(
                    "[gesture] feedback_threshold ({}) must be below trigger ({})",
                    feedback, trigger
                ));
            }
        }
        _ => errors.push("[gesture] needs integer feedback and trigger thresholds".to_string()),
    }
}

/// File names must fit the fixed-capacity strings and carry no separator
fn validate_names(config: &toml::Value, errors: &mut Vec<String>) {
    const MAX_NAME_LEN: usize = 32;
    const MAX_PATH_LEN: usize = 128;

    let checks = [
        ("channel", "fifo_name", MAX_NAME_LEN, false),
        ("channel", "launcher_file", MAX_NAME_LEN, false),
        ("channel", "progress_file", MAX_PATH_LEN, true),
        ("display", "device", MAX_PATH_LEN, true),
        ("splash_image", "partition", MAX_PATH_LEN, true),
        ("splash_image", "mount_point", MAX_PATH_LEN, true),
        ("splash_image", "file_name", MAX_NAME_LEN, false),
    ];

    for (section, key, max, is_path) in checks {
        let value = match config.get(section).and_then(|s| s.get(key)) {
            Some(toml::Value::String(s)) => s,
            Some(_) => {
                errors.push(format!("[{}] {} must be a string", section, key));
                continue;
            }
            None => continue,
        };
        if value.is_empty() || value.len() > max {
            errors.push(format!("[{}] {} must be 1-{} bytes", section, key, max));
        }
        if !is_path && value.contains('/') {
            errors.push(format!("[{}] {} must be a bare file name", section, key));
        }
    }
}
