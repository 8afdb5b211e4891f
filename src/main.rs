//! CLI entry point for reposize

use std::process;

use clap::Parser;
use env_logger::Env;
use reposize::{Analyzer, CloneConfig, WalkerConfig, print_json};

#[derive(Parser, Debug)]
#[command(name = "reposize")]
#[command(about = "Clone a git repository and report file and folder sizes as JSON")]
#[command(version)]
struct Args {
    /// Repository URL (anything git can clone, including a local path)
    url: String,

    /// Do not initialize or update submodules
    #[arg(long = "no-submodules")]
    no_submodules: bool,

    /// Shallow clone with history truncated to N commits
    #[arg(long = "depth", value_name = "N")]
    depth: Option<i32>,

    /// Leave the .git directory out of the report and the total
    #[arg(long = "skip-git-dir")]
    skip_git_dir: bool,

    /// Ignore files and directories matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Print JSON on a single line instead of pretty-printing
    #[arg(long = "compact")]
    compact: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let clone_config = CloneConfig {
        recurse_submodules: !args.no_submodules,
        depth: args.depth,
    };
    let walker_config = WalkerConfig {
        skip_git_dir: args.skip_git_dir,
        ignore_patterns: args.ignore.clone(),
    };

    let analysis = Analyzer::with_git(clone_config, walker_config).analyze(&args.url);

    if let Err(e) = print_json(&analysis, !args.compact) {
        eprintln!("reposize: error writing output: {}", e);
        process::exit(1);
    }

    if !analysis.is_success() {
        process::exit(1);
    }
}
