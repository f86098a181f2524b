use crate::cli::Cli;
use clap::Parser;
use godebug_lib::walker::source_files;
use godebug_lib::{process_file, FileOutcome};
use log::{debug, info, Level, LevelFilter};
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let root = Path::new(".");

    // Collect the whole traversal up front so a walk failure aborts the run
    // before any file is touched.
    let files: Vec<PathBuf> = source_files(root).collect::<Result<_, _>>()?;
    debug!("Found {} candidate files under {}", files.len(), root.display());

    for path in files {
        info!("Processing {}", path.display());
        match process_file(&path)? {
            FileOutcome::Written { debug: debug_path, nodebug } => {
                debug!(
                    "Generated {} and {}",
                    debug_path.display(),
                    nodebug.display()
                );
            }
            FileOutcome::Skipped => {}
        }
    }

    Ok(())
}

/// Builds the logger once from the parsed options instead of reading
/// process-wide flags: `-d` enables debug and informational messages, `-v`
/// informational only; warnings and alerts always print.
fn init_logging(cli: &Cli) {
    let level = if cli.debug {
        LevelFilter::Debug
    } else if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            let tag = match record.level() {
                Level::Error => "\x1b[31m[Alert]\x1b[0m -",
                Level::Warn => "\x1b[33m[Warn]\x1b[0m  -",
                Level::Info => "\x1b[32m[Info]\x1b[0m  -",
                _ => "\x1b[35m[Debug]\x1b[0m -",
            };
            writeln!(buf, "{} {}", tag, record.args())
        })
        .init();
}
