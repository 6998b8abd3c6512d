use clap::{Parser, Subcommand};
use envcheck::commands::{self, RunOptions};
use envcheck::core::error::{ExitCode, print_error};
use envcheck::telemetry::{get_subscriber, init_subscriber};
use std::path::PathBuf;

/// Run named suites of environment health checks
#[derive(Parser)]
#[command(name = "envcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Path to envcheck.toml (default: search the current directory)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Log filter used when RUST_LOG is not set
  #[arg(long, global = true, default_value = "info")]
  log_level: String,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run one or more check suites
  Run {
    /// Names of the suites to run
    suites: Vec<String>,
    /// Run every configured suite
    #[arg(short, long, conflicts_with = "suites")]
    all: bool,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
    /// Log runs whose worst outcome is a warning (overrides config)
    #[arg(long)]
    log_on_warning: Option<bool>,
    /// Log runs whose worst outcome is an error (overrides config)
    #[arg(long)]
    log_on_error: Option<bool>,
  },

  /// List configured suites and their checks
  List {
    /// Output in JSON format
    #[arg(long)]
    json: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  if let Err(e) = init_subscriber(get_subscriber(cli.log_level.clone())) {
    eprintln!("Warning: {}", e);
  }

  let result = match cli.command {
    Commands::Run {
      suites,
      all,
      json,
      log_on_warning,
      log_on_error,
    } => commands::run_suites(&RunOptions {
      suites,
      all,
      json,
      config: cli.config,
      log_on_warning,
      log_on_error,
    }),
    Commands::List { json } => commands::run_list(cli.config.as_deref(), json).map(|()| ExitCode::Ok),
  };

  match result {
    Ok(code) => std::process::exit(code.as_i32()),
    Err(e) => {
      print_error(&e);
      std::process::exit(e.exit_code().as_i32());
    }
  }
}
