#[macro_use]
extern crate log;

use log::LevelFilter;
use signal_hook::SIGINT;
use std::sync::{atomic::AtomicBool, Arc};
use std::{io, path::PathBuf, process::exit};
use structopt::StructOpt;

use tbpl_reporter::{
    configuration::command_line::{LogLevel, Opt},
    configuration::manifest::Manifest,
    connection::{Publisher, WriterTransport},
    runner::ManifestRunner,
    Error, Result, TbplReporter,
};

const DRY_RUN_ENDPOINT: &str = "stdout";

fn main() {
    let options = Opt::from_args();

    if let Err(e) = init_logging(
        options.logging.unwrap_or(LogLevel::Info).into(),
        &options.log_output_file,
    ) {
        eprintln!("Failed to initialise logging: {}", e);
        exit(2);
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    if let Err(e) = signal_hook::flag::register(SIGINT, Arc::clone(&interrupted)) {
        warn!("Cannot install signal handler: {}", e);
    }

    let manifest = match Manifest::from(options.file) {
        Ok(manifest) => manifest,
        Err(e) => {
            error!("Failed to load manifest file {}", e);
            exit(1);
        }
    };
    debug!("Loaded manifest {:#?}", manifest);

    match replay(&manifest, options.dry_run, interrupted) {
        Ok(()) => {}
        Err(Error::Interrupted) => {
            info!("Received SIGINT, stopped run '{}'", manifest.name);
            exit(130);
        }
        Err(e) => {
            error!("Run '{}' aborted: {}", manifest.name, e);
            exit(1);
        }
    }
}

fn replay(manifest: &Manifest, dry_run: bool, interrupted: Arc<AtomicBool>) -> Result<()> {
    let mut runner = ManifestRunner::new(manifest);
    runner.interrupt_on(interrupted);
    if dry_run {
        let transport = WriterTransport::new(io::stdout());
        TbplReporter::attach_with(&mut runner, Publisher::with_transport(DRY_RUN_ENDPOINT, transport));
    } else {
        TbplReporter::attach(&mut runner)?;
    }
    runner.run()
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> std::result::Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}
