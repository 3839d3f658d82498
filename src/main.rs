// Inherit lint configuration from lib.rs for consistency
#![allow(clippy::missing_errors_doc, clippy::needless_pass_by_value)]

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use giftlog::cli::commands::{Cli, Command, StreamersCommand};
use giftlog::cli::output;
use giftlog::config::Config;
use giftlog::operations;
use giftlog::registry::StreamerRegistry;
use giftlog::scan::{group_by_uid, FileScanner};

fn main() {
    // Logs go to stderr, stdout carries JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

type CmdResult = Result<(), Box<dyn std::fmt::Display>>;

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

fn run(cli: Cli) -> CmdResult {
    let config = match &cli.root {
        Some(root) => Config::new(root),
        None => Config::from_cwd().map_err(map_err)?,
    };
    let printer = Printer { pretty: cli.pretty };

    match cli.command {
        Command::Init => cmd_init(&config, printer),
        Command::Scan { path, group } => cmd_scan(&config, path, group, printer),
        Command::Import { path } => cmd_import(&config, path, printer),
        Command::Streamers { command } => cmd_streamers(&config, command, printer),
    }
}

#[derive(Clone, Copy)]
struct Printer {
    pretty: bool,
}

impl Printer {
    fn print<T: Serialize>(self, result: &T) {
        if self.pretty {
            println!("{}", output::format_pretty(result));
        } else {
            println!("{}", output::format_json(result));
        }
    }
}

fn scan_target(config: &Config, path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| config.data_dir.clone())
}

fn cmd_init(config: &Config, printer: Printer) -> CmdResult {
    let created = config.ensure_layout().map_err(map_err)?;
    let registry = StreamerRegistry::from_config(config);

    #[derive(Serialize)]
    struct InitOutput {
        root: PathBuf,
        created: Vec<PathBuf>,
        registry: PathBuf,
        streamers: usize,
    }
    printer.print(&InitOutput {
        root: config.project_root.clone(),
        created,
        registry: registry.path().to_path_buf(),
        streamers: registry.len(),
    });
    Ok(())
}

fn cmd_scan(config: &Config, path: Option<PathBuf>, group: bool, printer: Printer) -> CmdResult {
    let scanner = FileScanner::with_settings(&config.settings.scan);
    let records = scanner.scan(scan_target(config, path));
    if group {
        printer.print(&group_by_uid(records));
    } else {
        printer.print(&records);
    }
    Ok(())
}

fn cmd_import(config: &Config, path: Option<PathBuf>, printer: Printer) -> CmdResult {
    let scanner = FileScanner::with_settings(&config.settings.scan);
    let mut registry = StreamerRegistry::from_config(config);
    let result = operations::import_path(&scanner, &mut registry, &scan_target(config, path));
    printer.print(&result);
    Ok(())
}

fn cmd_streamers(config: &Config, command: StreamersCommand, printer: Printer) -> CmdResult {
    let mut registry = StreamerRegistry::from_config(config);
    match command {
        StreamersCommand::List => printer.print(&registry.get_all_streamers()),
        StreamersCommand::Get { uid } => {
            let profile = operations::get_streamer(&registry, &uid).map_err(map_err)?;
            printer.print(profile);
        }
        StreamersCommand::Register { uid, name } => {
            let profile = registry.register_new_streamer(&uid, name.as_deref());
            printer.print(profile);
        }
        StreamersCommand::Update { uid, name, color } => {
            let profile =
                operations::update_streamer(&mut registry, &uid, name.as_deref(), color.as_deref())
                    .map_err(map_err)?;
            printer.print(profile);
        }
    }
    Ok(())
}
