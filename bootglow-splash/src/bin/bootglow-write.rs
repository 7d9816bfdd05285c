//! bootglow-write: send one command to the running splash
//!
//! ```text
//! bootglow-write "PROGRESS 40"
//! bootglow-write "MSG Starting services"
//! bootglow-write QUIT
//! ```

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bootglow_core::config::{DeviceProfile, KernelFlags};
use bootglow_hal::{BootCounter, BOOT_COUNTER_CLEAR};
use bootglow_hal_linux::write_command;
use bootglow_splash::cli::USAGE_EXIT_CODE;
use bootglow_splash::{config, runtime};
use clap::Parser;
use log::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "bootglow-write")]
#[command(version)]
#[command(about = "Send a command to the bootglow splash")]
struct Args {
    /// Command text, e.g. "PROGRESS 40", "MSG text" or QUIT
    command: String,

    /// Configuration file replacing the embedded one
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(USAGE_EXIT_CODE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = config::load(
        args.config.as_deref(),
        env::var_os(config::CONFIG_ENV).map(PathBuf::from),
    );
    let tmp_dir = runtime::tmp_dir(&|name: &str| env::var(name).ok());
    let fifo = runtime::fifo_path(&config, &tmp_dir);

    match write_command(&fifo, &args.command) {
        Ok(()) => {
            info!("sent {:?} to {}", args.command, fifo.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            if args.command == "QUIT" {
                clear_boot_counter();
            }
            ExitCode::from(USAGE_EXIT_CODE)
        }
    }
}

/// The splash is gone, so the boot still counts as successful
fn clear_boot_counter() {
    let cmdline = runtime::read_cmdline(Path::new(runtime::CMDLINE_PATH));
    let profile = DeviceProfile::lookup(&KernelFlags::parse(&cmdline));
    let mut counter = runtime::boot_counter_for(profile.boot_counter);
    match counter.set(BOOT_COUNTER_CLEAR) {
        Ok(()) => info!("boot counter cleared"),
        Err(e) => warn!("cannot clear boot counter: {}", e),
    }
}
