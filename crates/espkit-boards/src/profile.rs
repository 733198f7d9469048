//! Board profile record.

/// Static description of one supported hardware target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardProfile {
    /// Catalog key, also used as the PlatformIO environment name.
    pub id: &'static str,
    /// Human-readable board name.
    pub name: &'static str,
    /// PlatformIO platform (e.g. `espressif32`).
    pub platform: &'static str,
    /// PlatformIO board tag. Usually equal to `id`, but not always.
    pub board: &'static str,
    /// Firmware framework (e.g. `arduino`).
    pub framework: &'static str,
    /// Upload baud rate.
    pub upload_speed: u32,
    /// Serial monitor baud rate.
    pub monitor_speed: u32,
    /// Flash size label (e.g. `4MB`).
    pub flash_size: &'static str,
    /// Whether the board carries external PSRAM.
    pub psram: bool,
    /// GPIO number of the on-board LED.
    pub led_pin: u8,
    /// One-line description.
    pub description: &'static str,
}

impl BoardProfile {
    /// `Yes`/`No` rendering of the PSRAM flag.
    pub fn psram_label(&self) -> &'static str {
        if self.psram {
            "Yes"
        } else {
            "No"
        }
    }

    /// Environment name used for debug builds.
    pub fn debug_env(&self) -> String {
        format!("{}_debug", self.id)
    }

    /// Environment name used for over-the-air uploads.
    pub fn ota_env(&self) -> String {
        format!("{}_ota", self.id)
    }
}
