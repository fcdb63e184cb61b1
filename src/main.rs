mod commands;

use autospec::AutospecChecks;
use autospec::core::context::AutospecContext;
use autospec::core::error::{AutospecError, print_error};
use autospec::koji_init;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Release and changelog helpers for RPM spec files
#[derive(Parser)]
#[command(name = "autospec")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Log debug output (command lines, paths) to stderr
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Config file to use instead of searching for autospec.toml
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Koji hub URL, overriding the config file
  #[arg(long, global = true)]
  koji_url: Option<String>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Parse epoch:version-release strings
  Evr {
    /// EVR strings to parse
    #[arg(required = true)]
    evrs: Vec<String>,
    /// Sort oldest to newest using rpm's version ordering
    #[arg(long)]
    sort: bool,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Check whether a spec file uses %autorelease or %autochangelog
  Uses {
    /// Path to the spec file
    specfile: PathBuf,
    /// Skip the %autorelease check
    #[arg(long)]
    no_autorelease: bool,
    /// Skip the %autochangelog check
    #[arg(long)]
    no_autochangelog: bool,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Print the version set in <PATH>/<NAME>.spec
  Version {
    /// Package directory (default: current directory)
    #[arg(default_value = ".")]
    path: PathBuf,
    /// Package name (default: base name of PATH)
    #[arg(long)]
    name: Option<String>,
    /// Prefix the version with its epoch when one is set
    #[arg(long)]
    epoch: bool,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Print the current commit hash of a repository
  Head {
    /// Repository directory (default: current directory)
    #[arg(default_value = ".")]
    path: PathBuf,
    /// Extra options passed to `git log`
    #[arg(last = true)]
    log_options: Vec<String>,
  },

  /// Check out a commit and print the resulting HEAD
  Checkout {
    /// Commit (or any ref) to check out
    commit: String,
    /// Repository directory (default: current directory)
    #[arg(long, default_value = ".")]
    path: PathBuf,
    /// Extra options passed to `git checkout`
    #[arg(last = true)]
    options: Vec<String>,
  },

  /// Check that git and rpm are usable and show the Koji hub
  Doctor {
    /// Output results in JSON format
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
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

/// Log to stderr, filtered by AUTOSPEC_LOG (default: warn, or debug with -v)
fn init_logging(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_env("AUTOSPEC_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .with_target(false)
    .init();
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let current_dir = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("Error: Failed to get current directory: {}", e);
      std::process::exit(1);
    }
  };

  // EVR parsing needs neither config nor tools
  if let Commands::Evr { evrs, sort, json } = &cli.command {
    if let Err(err) = commands::run_evr(evrs, *sort, *json) {
      handle_error(err);
    }
    return;
  }

  let mut ctx = match AutospecContext::load(&current_dir, cli.config.as_deref()) {
    Ok(ctx) => ctx,
    Err(err) => handle_error(err),
  };
  if let Some(url) = cli.koji_url {
    ctx = ctx.with_koji(koji_init(url));
  }

  let result = match cli.command {
    Commands::Evr { .. } => Ok(()),
    Commands::Uses {
      specfile,
      no_autorelease,
      no_autochangelog,
      json,
    } => commands::run_uses(
      &ctx,
      &specfile,
      AutospecChecks {
        autorelease: !no_autorelease,
        autochangelog: !no_autochangelog,
      },
      json,
    ),
    Commands::Version { path, name, epoch, json } => commands::run_version(&ctx, &path, name.as_deref(), epoch, json),
    Commands::Head { path, log_options } => commands::run_head(&ctx, &path, &log_options),
    Commands::Checkout { commit, path, options } => commands::run_checkout(&ctx, &path, &commit, &options),
    Commands::Doctor { json } => commands::run_doctor(&ctx, json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: AutospecError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
