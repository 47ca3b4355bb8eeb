//! E-bike dashboard demo: drives the dashboard state from a telemetry source
//! and prints one line per frame.

use std::path::{Path, PathBuf};
use std::process;

use log::{info, warn};

use ebike_dash::config::{DashboardConfig, SourceKind};
use ebike_dash::dashboard::DemoRunner;
use ebike_dash::io::export::export_csv;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    preset: Option<String>,
    trace: Option<String>,
    ticks: Option<usize>,
    seed_override: Option<u64>,
    frames_out: Option<String>,
}

fn print_help() {
    eprintln!("ebike-dash: e-bike dashboard state demo");
    eprintln!();
    eprintln!("Usage: ebike-dash [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>       Load configuration from TOML file");
    eprintln!(
        "  --preset <name>       Use a built-in preset ({})",
        DashboardConfig::PRESETS.join(", ")
    );
    eprintln!("  --trace <path>        Replay power readings from a CSV trace");
    eprintln!("  --ticks <n>           Number of steps to run");
    eprintln!("  --seed <u64>          Override random walk seed");
    eprintln!("  --frames-out <path>   Export frames to CSV");
    eprintln!("  --help                Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the demo preset is used.");
    eprintln!("Set RUST_LOG=debug for runner diagnostics.");
}

fn require_value(args: &[String], i: usize, flag: &str, what: &str) -> String {
    match args.get(i) {
        Some(v) => v.clone(),
        None => {
            eprintln!("error: {flag} requires {what}");
            process::exit(1);
        }
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        preset: None,
        trace: None,
        ticks: None,
        seed_override: None,
        frames_out: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                cli.config_path = Some(require_value(&args, i, "--config", "a path argument"));
            }
            "--preset" => {
                i += 1;
                cli.preset = Some(require_value(&args, i, "--preset", "a name argument"));
            }
            "--trace" => {
                i += 1;
                cli.trace = Some(require_value(&args, i, "--trace", "a path argument"));
            }
            "--ticks" => {
                i += 1;
                let raw = require_value(&args, i, "--ticks", "a count argument");
                if let Ok(n) = raw.parse::<usize>() {
                    cli.ticks = Some(n);
                } else {
                    eprintln!("error: --ticks value \"{raw}\" is not a valid count");
                    process::exit(1);
                }
            }
            "--seed" => {
                i += 1;
                let raw = require_value(&args, i, "--seed", "a u64 argument");
                if let Ok(s) = raw.parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{raw}\" is not a valid u64");
                    process::exit(1);
                }
            }
            "--frames-out" => {
                i += 1;
                cli.frames_out = Some(require_value(&args, i, "--frames-out", "a path argument"));
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    if cli.config_path.is_some() && cli.preset.is_some() {
        eprintln!("error: --config and --preset are mutually exclusive");
        process::exit(1);
    }

    cli
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = parse_args();

    // --config takes priority, then --preset, then the demo default
    let mut config = if let Some(ref path) = cli.config_path {
        match DashboardConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match DashboardConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        DashboardConfig::demo()
    };

    if let Some(ref path) = cli.trace {
        config.source.kind = SourceKind::Replay;
        config.source.trace = Some(PathBuf::from(path));
    }
    if let Some(seed) = cli.seed_override {
        if config.source.kind != SourceKind::RandomWalk {
            warn!("--seed only affects the random_walk source");
        }
        config.source.seed = seed;
    }
    let ticks = cli.ticks.unwrap_or(config.timers.run_ticks);

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let source = match config.source.build() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    info!(
        "running {ticks} steps of {} ms with {} source",
        config.timers.tick_ms,
        source.source_kind()
    );

    let mut runner = match DemoRunner::new(&config, source) {
        Ok(runner) => runner,
        Err(errors) => {
            for e in &errors {
                eprintln!("{e}");
            }
            process::exit(1);
        }
    };
    let frames = runner.run(ticks);

    for frame in &frames {
        println!("{frame}");
    }
    println!();
    println!("{}", runner.dashboard().side_panel());

    if let Some(ref path) = cli.frames_out {
        if let Err(e) = export_csv(&frames, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        info!("frames written to {path}");
    }
}
