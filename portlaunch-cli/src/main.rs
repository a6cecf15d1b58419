use anyhow::Context;
use clap::Parser;
use portlaunch_core::{LaunchError, LaunchReport, LaunchSettings, Layout};
use portlaunch_runner::{console, Launcher};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "portlaunch")]
#[command(about = "Start a project with its bundled portable runtime", long_about = None)]
struct Cli {
    /// Project root (defaults to the directory containing this executable)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Settings file (defaults to <root>/portlaunch.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Runtime directory, relative to the project root
    #[arg(long)]
    runtime_dir: Option<String>,

    /// Runtime executable, relative to the runtime directory
    #[arg(long)]
    executable: Option<String>,

    /// Script passed to the runtime
    #[arg(long)]
    entry_script: Option<String>,

    /// Exit without waiting for Enter
    #[arg(long)]
    no_pause: bool,

    /// Write a JSON launch report to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    // Paths given on the command line are relative to where we were invoked
    let invoked_from = std::env::current_dir()?;
    cli.config = cli.config.map(|path| invoked_from.join(path));
    cli.report = cli.report.map(|path| invoked_from.join(path));

    let root = resolve_root(cli.root.as_deref(), &invoked_from)?;
    std::env::set_current_dir(&root)
        .with_context(|| format!("Failed to change directory to {}", root.display()))?;
    debug!(root = %root.display(), "Anchored to project root");

    let settings = load_settings(&cli, &root)?;
    if settings.utf8_console {
        console::enable_utf8_console();
    }
    let pause = settings.pause;

    let layout = Layout::new(&root, settings);
    println!("Starting {} ...", layout.entry_script().display());

    match Launcher::new(layout).launch().await {
        Ok(report) => {
            print_exit_status(&report);
            if let Some(path) = &cli.report {
                write_report(path, &report)?;
            }
            println!("Application finished.");
            wait_for_user(pause);
            Ok(())
        }
        Err(LaunchError::MissingRuntime { path }) => {
            println!("Error: runtime executable not found: {}", path.display());
            println!("Make sure the bundled runtime is deployed next to the launcher.");
            wait_for_user(pause);
            process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_root(root: Option<&Path>, invoked_from: &Path) -> anyhow::Result<PathBuf> {
    match root {
        Some(dir) => Ok(invoked_from.join(dir)),
        None => {
            let exe = std::env::current_exe().context("Failed to locate the launcher executable")?;
            exe.parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| anyhow::anyhow!("Launcher path has no parent: {}", exe.display()))
        }
    }
}

fn load_settings(cli: &Cli, root: &Path) -> anyhow::Result<LaunchSettings> {
    let mut settings = match &cli.config {
        Some(path) => LaunchSettings::load(path)?,
        None => LaunchSettings::discover(root)?,
    };

    if let Some(dir) = &cli.runtime_dir {
        settings = settings.with_runtime_dir(dir.as_str());
    }
    if let Some(name) = &cli.executable {
        settings = settings.with_executable(name.as_str());
    }
    if let Some(script) = &cli.entry_script {
        settings = settings.with_entry_script(script.as_str());
    }
    if cli.no_pause {
        settings = settings.with_pause(false);
    }

    Ok(settings)
}

fn print_exit_status(report: &LaunchReport) {
    match report.exit_code {
        Some(code) => println!("Application exited with code {}", code),
        None => println!("Application was terminated by a signal"),
    }
}

fn write_report(path: &Path, report: &LaunchReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write launch report to {}", path.display()))?;
    Ok(())
}

fn wait_for_user(enabled: bool) {
    if !enabled {
        return;
    }
    if let Err(e) = console::pause() {
        debug!(error = %e, "Pause interrupted");
    }
}
