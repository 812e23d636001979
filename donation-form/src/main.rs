use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let config_path = match config_path_arg(&args) {
        Ok(path) => path,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(2);
        }
    };
    let config_path = config_path.as_deref();

    if args.iter().any(|a| a == "--print-config") {
        donation_form::print_config(config_path);
        return;
    }

    // Non-interactive submit proof mode (deterministic).
    // Writes `submit_smoke_transcript.log` into the log folder and exits 0/1.
    if args.iter().any(|a| a == "--submit-smoke") {
        donation_form::run_submit_smoke(config_path);
        return;
    }

    // Non-interactive TUI smoke test mode (for automated checks).
    // Usage: --tui-smoke or --tui-smoke=form|office|errors|confirm
    if let Some(arg) = args
        .iter()
        .find(|a| a.as_str() == "--tui-smoke" || a.starts_with("--tui-smoke="))
    {
        let target = arg
            .split_once('=')
            .map(|(_, v)| v.to_string())
            .filter(|v| !v.trim().is_empty());
        donation_form::run_tui_smoke(target, config_path);
        return;
    }

    donation_form::run_tui(config_path);
}

/// `--config <path>` or `--config=<path>`. A missing or flag-like value is an error.
fn config_path_arg(args: &[String]) -> Result<Option<PathBuf>, String> {
    let value = if let Some(i) = args.iter().position(|a| a == "--config") {
        args.get(i + 1).map(String::as_str)
    } else if let Some(v) = args.iter().find_map(|a| a.strip_prefix("--config=")) {
        Some(v)
    } else {
        return Ok(None);
    };

    match value.map(str::trim) {
        Some(v) if !v.is_empty() && !v.starts_with("--") => Ok(Some(PathBuf::from(v))),
        _ => Err("--config requires a file path, e.g. --config donation-form.toml".to_string()),
    }
}
