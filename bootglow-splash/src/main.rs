//! bootglow-splash daemon entry point

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use bootglow_display::Screen;
use bootglow_hal::{Backlight, BootCounter, ConsoleSwitch, BOOT_COUNTER_CLEAR};
use bootglow_hal_linux::{FbDevice, FifoChannel, SysfsBacklight, VtConsole};
use bootglow_splash::cli::{Args, USAGE_EXIT_CODE};
use bootglow_splash::platform::{LinuxPlatform, Platform};
use bootglow_splash::{config, signals, startup};
use bootglow_splash::{EventLoop, LaunchOptions, LoopExit, LoopSettings, RuntimeContext};
use log::{error, info, warn};

/// Pause before exiting so the console reset settles
const EXIT_GRACE: Duration = Duration::from_secs(1);

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::parse_from_env(env::args_os()) {
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

    if let Err(e) = signals::install() {
        error!("cannot install signal handlers: {}", e);
        return ExitCode::from(USAGE_EXIT_CODE);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(USAGE_EXIT_CODE)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = config::load(
        args.config.as_deref(),
        env::var_os(config::CONFIG_ENV).map(PathBuf::from),
    );
    let context = RuntimeContext::from_system(LaunchOptions::from(args), config);
    info!(
        "framebuffer {}, fifo {}, fast boot {}",
        context.framebuffer.display(),
        context.fifo_path().display(),
        context.fast_boot()
    );

    let channel = FifoChannel::create(context.fifo_path()).context("cannot create control fifo")?;

    let mut console = VtConsole::new();
    if context.options.console_switch {
        console.switch();
    }

    let mut platform = LinuxPlatform::new(&context, channel, console);
    let result = show(&context, &mut platform);

    let mut console = platform.release();
    if context.options.console_switch {
        console.reset();
    }
    thread::sleep(EXIT_GRACE);
    result
}

/// Map the framebuffer, draw the boot screen and serve the loop
fn show(context: &RuntimeContext, platform: &mut LinuxPlatform) -> Result<()> {
    let mut screen = open_screen(context)?;

    if context.options.blackscreen {
        info!("black screen requested, nothing drawn");
    } else {
        let image = startup::load_splash_image(context);
        startup::draw_boot_screen(&mut screen, context, image.as_deref());
    }

    if let Err(e) = SysfsBacklight::default().restore() {
        warn!("backlight: {}", e);
    }

    let exit = EventLoop::new(&mut screen, &mut *platform, LoopSettings::from(context)).run();
    info!("splash finished: {:?}", exit);

    if matches!(exit, LoopExit::Signal | LoopExit::Interrupted) {
        platform.console().reset();
    }
    drop(screen);

    if let Err(e) = platform.boot_counter().set(BOOT_COUNTER_CLEAR) {
        warn!("cannot clear boot counter: {}", e);
    }
    Ok(())
}

fn open_screen(context: &RuntimeContext) -> Result<Screen<FbDevice>> {
    let fb = FbDevice::open(&context.framebuffer)
        .with_context(|| format!("cannot open {}", context.framebuffer.display()))?;
    let info = fb.screen_info();
    let surface = bootglow_display::Surface::new(fb, info, context.options.rotation)
        .map_err(|e| anyhow!("unusable framebuffer: {}", e))?;
    let options = startup::screen_options(context, surface.width());
    Ok(Screen::new(surface, options))
}
