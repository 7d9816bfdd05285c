//! Per-device profile table
//!
//! Every board-specific decision is looked up here once, keyed by the
//! `hw_code` kernel parameter: which input event nodes carry the touch
//! controller, whether touch calibration is offered, and where the boot
//! counter lives.

use super::cmdline::KernelFlags;

/// Hardware codes with board-specific behavior
pub mod hw {
    pub const ECO: i32 = 110;
    pub const BE15A: i32 = 114;
    pub const EX7XX: i32 = 115;
    pub const ETOP6XXL: i32 = 116;
    pub const PGDXCA16: i32 = 117;
    pub const EX7XXQ: i32 = 118;
    pub const ETOP705: i32 = 120;
    pub const WU16: i32 = 121;
    pub const US03WU16: i32 = 122;
    pub const AUTEC: i32 = 123;
    pub const PGDXCA18: i32 = 131;
    pub const X5HH: i32 = 136;
    pub const X5BS: i32 = 137;
    pub const JS8XX: i32 = 139;
    pub const AB19: i32 = 140;
    pub const BE15B: i32 = 142;
    pub const NS02WU20: i32 = 144;
    pub const EX8XX: i32 = 145;
    pub const US04WU10: i32 = 147;
    pub const PGDXCA7LE: i32 = 149;
    pub const X5HHWIRED: i32 = 150;
}

/// `touch_type` value of the analog controller variant
pub const TOUCH_TYPE_ANALOG: i32 = 10;

/// Input vendor ids of touch controllers that need no calibration
pub const SELF_CALIBRATING_VENDORS: [&str; 2] = ["Vendor=0eef", "Vendor=222a"];

/// Whether the touch calibration choice is offered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationPolicy {
    /// Always offered
    Show,
    /// Never offered
    Hide,
    /// Offered unless a self-calibrating controller is attached
    ProbeVendors,
}

impl CalibrationPolicy {
    /// Resolve the policy against the contents of `/proc/bus/input/devices`
    ///
    /// `input_devices` is `None` when the file could not be read; the probe
    /// then offers calibration.
    pub fn hidden(&self, input_devices: Option<&str>) -> bool {
        match self {
            CalibrationPolicy::Show => false,
            CalibrationPolicy::Hide => true,
            CalibrationPolicy::ProbeVendors => input_devices
                .map(|text| {
                    text.lines().any(|line| {
                        SELF_CALIBRATING_VENDORS
                            .iter()
                            .any(|vendor| line.contains(vendor))
                    })
                })
                .unwrap_or(false),
        }
    }
}

/// Medium holding the boot counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootCounterStore {
    /// eMMC boot partition
    Emmc,
    /// RTC battery-backed NVRAM
    Nvram,
}

/// Board-specific decisions for one hardware code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Hardware code the profile was resolved for
    pub hw_code: Option<i32>,
    /// `/dev/input/eventN` numbers to try, in order
    pub touch_events: &'static [u8],
    /// Touch calibration visibility
    pub calibration: CalibrationPolicy,
    /// Boot counter medium
    pub boot_counter: BootCounterStore,
}

impl DeviceProfile {
    /// Resolve the profile for the board described by `flags`
    pub fn lookup(flags: &KernelFlags) -> Self {
        Self {
            hw_code: flags.hw_code,
            touch_events: touch_events(flags),
            calibration: calibration_policy(flags.hw_code),
            boot_counter: boot_counter_store(flags.hw_code),
        }
    }
}

fn touch_events(flags: &KernelFlags) -> &'static [u8] {
    use hw::*;

    match flags.hw_code {
        Some(ECO | BE15A | BE15B | PGDXCA16 | AB19) => &[0],
        Some(PGDXCA18 | PGDXCA7LE) => {
            if flags.touch_type == Some(TOUCH_TYPE_ANALOG) {
                &[2]
            } else {
                &[0]
            }
        }
        Some(WU16 | US03WU16 | EX8XX | NS02WU20 | JS8XX) => &[2],
        Some(AUTEC) => &[1, 0],
        Some(US04WU10) => &[3],
        _ => &[1],
    }
}

fn calibration_policy(hw_code: Option<i32>) -> CalibrationPolicy {
    use hw::*;

    match hw_code {
        Some(
            ECO | BE15A | BE15B | ETOP6XXL | PGDXCA16 | PGDXCA18 | AB19 | ETOP705 | AUTEC | X5HH
            | X5BS | X5HHWIRED,
        ) => CalibrationPolicy::Show,
        Some(EX7XX | EX7XXQ) => CalibrationPolicy::ProbeVendors,
        _ => CalibrationPolicy::Hide,
    }
}

fn boot_counter_store(hw_code: Option<i32>) -> BootCounterStore {
    use hw::*;

    match hw_code {
        Some(PGDXCA16 | PGDXCA18 | PGDXCA7LE) => BootCounterStore::Emmc,
        _ => BootCounterStore::Nvram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(cmdline: &str) -> DeviceProfile {
        DeviceProfile::lookup(&KernelFlags::parse(cmdline))
    }

    #[test]
    fn test_touch_event_table() {
        assert_eq!(profile("hw_code=110").touch_events, &[0]);
        assert_eq!(profile("hw_code=140").touch_events, &[0]);
        assert_eq!(profile("hw_code=121").touch_events, &[2]);
        assert_eq!(profile("hw_code=139").touch_events, &[2]);
        assert_eq!(profile("hw_code=123").touch_events, &[1, 0]);
        assert_eq!(profile("hw_code=147").touch_events, &[3]);
        assert_eq!(profile("hw_code=999").touch_events, &[1]);
        assert_eq!(profile("").touch_events, &[1]);
    }

    #[test]
    fn test_touch_type_selects_controller() {
        assert_eq!(profile("hw_code=131 touch_type=10").touch_events, &[2]);
        assert_eq!(profile("hw_code=131 touch_type=3").touch_events, &[0]);
        assert_eq!(profile("hw_code=149").touch_events, &[0]);
        assert_eq!(profile("hw_code=149 touch_type=10").touch_events, &[2]);
    }

    #[test]
    fn test_calibration_policy() {
        for code in [110, 114, 142, 116, 117, 131, 140, 120, 123, 136, 137, 150] {
            assert_eq!(calibration_policy(Some(code)), CalibrationPolicy::Show);
        }
        assert_eq!(calibration_policy(Some(115)), CalibrationPolicy::ProbeVendors);
        assert_eq!(calibration_policy(Some(118)), CalibrationPolicy::ProbeVendors);
        assert_eq!(calibration_policy(Some(121)), CalibrationPolicy::Hide);
        assert_eq!(calibration_policy(None), CalibrationPolicy::Hide);
    }

    #[test]
    fn test_vendor_probe() {
        let ilitek = "I: Bus=0003 Vendor=222a Product=0001 Version=0110\nN: Name=\"ILITEK\"\n";
        let other = "I: Bus=0018 Vendor=0000 Product=0000 Version=0000\n";

        let policy = CalibrationPolicy::ProbeVendors;
        assert!(policy.hidden(Some(ilitek)));
        assert!(!policy.hidden(Some(other)));
        assert!(!policy.hidden(None));

        assert!(!CalibrationPolicy::Show.hidden(Some(ilitek)));
        assert!(CalibrationPolicy::Hide.hidden(None));
    }

    #[test]
    fn test_boot_counter_store() {
        assert_eq!(profile("hw_code=117").boot_counter, BootCounterStore::Emmc);
        assert_eq!(profile("hw_code=131").boot_counter, BootCounterStore::Emmc);
        assert_eq!(profile("hw_code=149").boot_counter, BootCounterStore::Emmc);
        assert_eq!(profile("hw_code=110").boot_counter, BootCounterStore::Nvram);
    }
}
