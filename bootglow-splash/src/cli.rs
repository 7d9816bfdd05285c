//! Command line of the splash daemon
//!
//! Boot scripts pass the historical single-dash spellings `-np` and `-xp`.
//! They are rewritten to their long forms before clap sees them, since clap
//! would read them as bundled short flags.

use std::ffi::OsString;
use std::path::PathBuf;

use bootglow_display::Rotation;
use clap::Parser;

/// Exit status for a command line that cannot be parsed
pub const USAGE_EXIT_CODE: u8 = 255;

/// Framebuffer boot splash with a tap-tap service gesture
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "bootglow-splash")]
#[command(version)]
#[command(about = "Framebuffer boot splash with progress bar and tap-tap service gesture")]
pub struct Args {
    /// Stay on the current virtual terminal
    #[arg(short = 'n', long)]
    pub no_console_switch: bool,

    /// Do not draw the progress bar (also `-np`)
    #[arg(long)]
    pub no_progress_bar: bool,

    /// Animate an indeterminate progress bar and ignore PROGRESS (also `-xp`)
    #[arg(long)]
    pub infinite_progress: bool,

    /// Screen rotation in degrees
    #[arg(short, long, value_name = "0|90|180|270", default_value = "0", value_parser = parse_angle)]
    pub angle: Rotation,

    /// Never open the touch device
    #[arg(long)]
    pub notouch: bool,

    /// Leave the screen untouched at startup
    #[arg(long)]
    pub blackscreen: bool,

    /// Configuration file replacing the embedded one
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parse `args` (program name first)
    pub fn parse_from_env<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(args.into_iter().map(|arg| normalize(arg.into())))
    }
}

/// Rewrite a legacy single-dash long option
fn normalize(arg: OsString) -> OsString {
    match arg.to_str() {
        Some("-np") => "--no-progress-bar".into(),
        Some("-xp") => "--infinite-progress".into(),
        _ => arg,
    }
}

fn parse_angle(s: &str) -> Result<Rotation, String> {
    s.trim()
        .parse::<u32>()
        .ok()
        .and_then(Rotation::from_degrees)
        .ok_or_else(|| format!("unsupported angle '{}', expected 0, 90, 180 or 270", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::parse_from_env(std::iter::once("bootglow-splash").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert!(!args.no_console_switch);
        assert!(!args.no_progress_bar);
        assert!(!args.infinite_progress);
        assert!(!args.notouch);
        assert!(!args.blackscreen);
        assert_eq!(args.angle, Rotation::Deg0);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_legacy_spellings() {
        let args = parse(&["-n", "-np", "-xp", "-a", "90"]).unwrap();
        assert!(args.no_console_switch);
        assert!(args.no_progress_bar);
        assert!(args.infinite_progress);
        assert_eq!(args.angle, Rotation::Deg90);
    }

    #[test]
    fn test_long_flags() {
        let args = parse(&[
            "--no-console-switch",
            "--angle",
            "270",
            "--notouch",
            "--blackscreen",
            "--config",
            "/etc/splash.toml",
        ])
        .unwrap();
        assert!(args.no_console_switch);
        assert!(args.notouch);
        assert!(args.blackscreen);
        assert_eq!(args.angle, Rotation::Deg270);
        assert_eq!(args.config, Some(PathBuf::from("/etc/splash.toml")));
    }

    #[test]
    fn test_rejects_bad_angle() {
        assert!(parse(&["-a", "45"]).is_err());
        assert!(parse(&["--angle", "x"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(parse(&["--fullscreen"]).is_err());
        assert!(parse(&["-p"]).is_err());
    }
}
