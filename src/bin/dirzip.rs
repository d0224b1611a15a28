//! dirzip - 目录打包命令行工具
//!
//! 命令格式: dirzip [-v] [-q] <DIR>...
//!
//! 每个目录 `<DIR>` 打包为同级的 `<DIR>.zip`，遇到第一个错误即退出。

use clap::{ArgAction, Parser};
use dirzip::DirectoryArchiver;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// 退出码定义
const EXIT_FAILURE: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "dirzip", version, about = "Archive directories into sibling ZIP files")]
struct Cli {
    /// Directories to archive
    #[arg(required = true, value_name = "DIR")]
    dirs: Vec<PathBuf>,

    /// Do not store modification times and permissions
    #[arg(long)]
    no_metadata: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors and do not print archive paths
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn default_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.default_filter());

    if let Err(err) = run(&cli) {
        eprintln!("dirzip error: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        return ExitCode::from(EXIT_FAILURE);
    }
    ExitCode::SUCCESS
}

/// RUST_LOG 优先，否则按 -v/-q 选择级别
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> dirzip::Result<()> {
    for dir in &cli.dirs {
        let output = DirectoryArchiver::new(dir)
            .preserve_metadata(!cli.no_metadata)
            .build()?;

        if !cli.quiet {
            println!("{}", output.archive.display());
        }
    }
    Ok(())
}
