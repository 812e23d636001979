// Clothing donation registration form
// Main library entry point

pub mod config;
pub mod form;
pub mod models;
pub mod smoke;
mod tui;
pub mod utils;

use crate::config::FormConfig;
use anyhow::{Context, Result};
use log::{error, info};
use std::path::{Path, PathBuf};

/// Initialize logging system with dual format (JSON + human-readable).
///
/// Returns the resolved log folder.
pub fn init_logging(with_stdout: bool, log_dir_override: Option<&Path>) -> Result<PathBuf> {
    let log_dir = utils::path_resolver::resolve_log_folder(log_dir_override)?;

    let timestamp = chrono::Utc::now().format("%Y-%m-%d-%H%M%S");
    let json_log_file = log_dir.join(format!("form-{}.log", timestamp));
    let txt_log_file = log_dir.join(format!("form-{}.txt", timestamp));

    build_dispatch(with_stdout, &json_log_file, &txt_log_file)?
        .apply()
        .context("A logger is already installed for this process")?;

    info!(
        "[PHASE: initialization] Logging initialized, log directory: {:?}",
        log_dir
    );
    Ok(log_dir)
}

/// JSON lines into `json_log_file`, human-readable lines into `txt_log_file`.
/// `fern` terminates every entry with a newline, so formatters must not add one.
fn build_dispatch(
    with_stdout: bool,
    json_log_file: &Path,
    txt_log_file: &Path,
) -> Result<fern::Dispatch> {
    // stdout stays off in TUI mode so log lines never land on the alternate screen.
    let mut dispatch = fern::Dispatch::new().level(log::LevelFilter::Debug);

    if with_stdout {
        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .level(log::LevelFilter::Info)
                .format(|out, message, record| {
                    let txt_line = human_line(&message.to_string(), record);
                    out.finish(format_args!("{}", txt_line));
                })
                .chain(std::io::stdout()),
        );
    }

    dispatch = dispatch
        .chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    let timestamp_utc = chrono::Utc::now().to_rfc3339();
                    let (phase, step, cleaned_message) =
                        utils::logging::parse_log_metadata(&message.to_string());
                    let json_line = utils::logging::format_json_log(
                        &timestamp_utc,
                        record.level(),
                        record.target(),
                        &cleaned_message,
                        phase.as_deref(),
                        step.as_deref(),
                        None,
                    );
                    out.finish(format_args!("{}", json_line));
                })
                .chain(fern::log_file(json_log_file)?),
        )
        .chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    let txt_line = human_line(&message.to_string(), record);
                    out.finish(format_args!("{}", txt_line));
                })
                .chain(fern::log_file(txt_log_file)?),
        );

    Ok(dispatch)
}

fn human_line(message: &str, record: &log::Record) -> String {
    let timestamp_local = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let (phase, step, cleaned_message) = utils::logging::parse_log_metadata(message);
    utils::logging::format_human_readable_log(
        &timestamp_local.to_string(),
        record.level(),
        record.target(),
        &cleaned_message,
        phase.as_deref(),
        step.as_deref(),
    )
}

fn load_config_or_exit(config_path: Option<&Path>) -> FormConfig {
    match FormConfig::load(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            std::process::exit(2);
        }
    }
}

/// Interactive terminal form.
pub fn run_tui(config_path: Option<&Path>) {
    let config = load_config_or_exit(config_path);

    // Initialize logging (no stdout to avoid corrupting the TUI)
    if let Err(e) = init_logging(false, config.log_dir.as_deref()) {
        eprintln!("Failed to initialize logging: {:#}", e);
    }

    info!(
        "[PHASE: initialization] Donation form starting at {}",
        chrono::Utc::now()
    );

    if let Err(e) = tui::run(config) {
        error!("[PHASE: tui] [STEP: fatal] TUI exited with error: {:?}", e);
        eprintln!("Donation form error: {}", e);
        std::process::exit(1);
    }
}

/// Non-interactive TUI smoke mode (for automated checks).
/// Renders a single frame into an in-memory backend and exits.
pub fn run_tui_smoke(target: Option<String>, config_path: Option<&Path>) {
    let config = load_config_or_exit(config_path);

    if let Err(e) = init_logging(false, config.log_dir.as_deref()) {
        eprintln!("Failed to initialize logging: {:#}", e);
    }

    let target = target.as_deref().unwrap_or("form");
    if let Err(e) = tui::smoke(&config, target) {
        error!(
            "[PHASE: tui] [STEP: smoke] TUI smoke exited with error: {:?}",
            e
        );
        eprintln!("Donation form error: {}", e);
        std::process::exit(1);
    }
}

/// Non-interactive submit proof mode.
/// Writes `submit_smoke_transcript.log` into the log folder and exits 0/1.
pub fn run_submit_smoke(config_path: Option<&Path>) {
    let config = load_config_or_exit(config_path);

    let log_dir = match init_logging(true, config.log_dir.as_deref()) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to initialize logging: {:#}", e);
            match utils::path_resolver::resolve_log_folder(config.log_dir.as_deref()) {
                Ok(dir) => dir,
                Err(_) => utils::path_resolver::resolve_deployment_folder(),
            }
        }
    };

    match smoke::submit_smoke(&config, &log_dir) {
        Ok(path) => {
            info!(
                "[PHASE: submit] [STEP: smoke] Submit smoke passed, transcript: {:?}",
                path
            );
        }
        Err(e) => {
            error!(
                "[PHASE: submit] [STEP: smoke] Submit smoke failed: {:#}",
                e
            );
            eprintln!("Submit smoke failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Print the effective configuration as TOML.
pub fn print_config(config_path: Option<&Path>) {
    let config = load_config_or_exit(config_path);
    match config.to_toml_string() {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    }
}
