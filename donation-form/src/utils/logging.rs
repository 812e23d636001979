// Logging utilities
// Structured logging with JSON and human-readable formats, plus donor PII masking

use log::Level;
use serde_json::json;
use std::collections::HashMap;

/// Mask a personal value, keeping the first and last characters for support.
pub fn mask_sensitive(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }

    let visible = 3;
    let start: String = chars[..visible].iter().collect();
    let end: String = chars[chars.len() - visible..].iter().collect();

    format!("{}...{}", start, end)
}

/// Mask an e-mail address: keep the first character of the local part and the domain.
pub fn mask_email(email: &str) -> String {
    let e = email.trim();
    if e.is_empty() {
        return String::new();
    }

    match e.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        // Not an address we recognize; never echo it.
        _ => "***".to_string(),
    }
}

/// Parse phase and step from log message
/// Extracts [PHASE: ...] and [STEP: ...] patterns
pub fn parse_log_metadata(message: &str) -> (Option<String>, Option<String>, String) {
    let (phase, rest) = extract_tag(message, "[PHASE:");
    let (step, cleaned) = extract_tag(&rest, "[STEP:");
    (phase, step, cleaned)
}

fn extract_tag(message: &str, tag: &str) -> (Option<String>, String) {
    let Some(start) = message.find(tag) else {
        return (None, message.to_string());
    };
    let Some(end) = message[start..].find(']') else {
        return (None, message.to_string());
    };

    let value = message[start + tag.len()..start + end].trim().to_string();
    let cleaned = format!("{} {}", &message[..start], &message[start + end + 1..])
        .trim()
        .to_string();
    (Some(value), cleaned)
}

/// Format log entry as JSON for structured logging
pub fn format_json_log(
    timestamp: &str,
    level: Level,
    target: &str,
    message: &str,
    phase: Option<&str>,
    step: Option<&str>,
    details: Option<&HashMap<String, serde_json::Value>>,
) -> String {
    let mut log_entry = json!({
        "timestamp": timestamp,
        "level": level.as_str(),
        "target": target,
        "message": message,
    });

    if let Some(phase) = phase {
        log_entry["phase"] = json!(phase);
    }

    if let Some(step) = step {
        log_entry["step"] = json!(step);
    }

    if let Some(details) = details {
        log_entry["details"] = json!(details);
    }

    serde_json::to_string(&log_entry).unwrap_or_else(|_| "{}".to_string())
}

/// Format log entry as human-readable text
pub fn format_human_readable_log(
    timestamp: &str,
    level: Level,
    target: &str,
    message: &str,
    phase: Option<&str>,
    step: Option<&str>,
) -> String {
    let mut log_line = format!("[{}] [{}]", timestamp, level.as_str());

    if let Some(phase) = phase {
        log_line.push_str(&format!(" [PHASE: {}]", phase));
    }

    if let Some(step) = step {
        log_line.push_str(&format!(" [STEP: {}]", step));
    }

    log_line.push_str(&format!(" [{}] {}", target, message));
    log_line
}
