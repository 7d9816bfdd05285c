//! Kernel command line flags
//!
//! The bootloader passes the board identity on the kernel command line:
//! `hw_code=<n>` selects the device profile, `touch_type=<n>` picks between
//! touch controllers on boards that ship with more than one, and the
//! `fastboot=y` + `hw_dispid=122` pair enables the fast-boot gesture path.

/// Display id of the panels that support the fast-boot path
pub const FAST_BOOT_DISPLAY_ID: i32 = 122;

/// Board identity parsed from `/proc/cmdline`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KernelFlags {
    /// `hw_code=` value, `None` when absent or malformed
    pub hw_code: Option<i32>,
    /// `touch_type=` value, `None` when absent or malformed
    pub touch_type: Option<i32>,
    /// `fastboot=y` present
    pub fastboot: bool,
    /// `hw_dispid=122` present
    pub wu16_display: bool,
}

impl KernelFlags {
    /// Parse the kernel command line
    ///
    /// Unknown parameters are ignored. A numeric value is the longest run of
    /// an optional sign and digits after the `=`, anything following it is
    /// ignored (`hw_code=117abc` yields 117).
    pub fn parse(cmdline: &str) -> Self {
        let mut flags = Self::default();

        for param in cmdline.split_ascii_whitespace() {
            let (key, value) = match param.split_once('=') {
                Some(kv) => kv,
                None => continue,
            };
            match key {
                "hw_code" => flags.hw_code = leading_int(value),
                "touch_type" => flags.touch_type = leading_int(value),
                "fastboot" => flags.fastboot = value == "y",
                "hw_dispid" => {
                    flags.wu16_display = leading_int(value) == Some(FAST_BOOT_DISPLAY_ID)
                }
                _ => {}
            }
        }

        flags
    }

    /// Both fast-boot conditions hold
    pub fn fast_boot(&self) -> bool {
        self.fastboot && self.wu16_display
    }
}

/// Integer prefix of `s`, the way `sscanf("%d")` reads it
fn leading_int(s: &str) -> Option<i32> {
    let bytes = s.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typical_cmdline() {
        let flags = KernelFlags::parse(
            "console=ttymxc0,115200 hw_code=131 touch_type=10 root=/dev/mmcblk1p2 rootwait",
        );
        assert_eq!(flags.hw_code, Some(131));
        assert_eq!(flags.touch_type, Some(10));
        assert!(!flags.fastboot);
        assert!(!flags.fast_boot());
    }

    #[test]
    fn test_missing_values() {
        let flags = KernelFlags::parse("quiet splash");
        assert_eq!(flags, KernelFlags::default());

        let flags = KernelFlags::parse("hw_code= touch_type=x");
        assert_eq!(flags.hw_code, None);
        assert_eq!(flags.touch_type, None);
    }

    #[test]
    fn test_numeric_prefix() {
        let flags = KernelFlags::parse("hw_code=117abc\n");
        assert_eq!(flags.hw_code, Some(117));
    }

    #[test]
    fn test_fast_boot_needs_both_flags() {
        assert!(KernelFlags::parse("fastboot=y hw_dispid=122").fast_boot());
        assert!(!KernelFlags::parse("fastboot=y hw_dispid=121").fast_boot());
        assert!(!KernelFlags::parse("fastboot=n hw_dispid=122").fast_boot());
        assert!(!KernelFlags::parse("hw_dispid=122").fast_boot());
    }
}
