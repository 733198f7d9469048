//! The built-in board table.

use crate::error::{BoardError, Result};
use crate::profile::BoardProfile;

const PLATFORM: &str = "espressif32";
const FRAMEWORK: &str = "arduino";
const UPLOAD_SPEED: u32 = 921_600;
const MONITOR_SPEED: u32 = 115_200;

static BOARDS: [BoardProfile; 9] = [
    BoardProfile {
        id: "esp32dev",
        name: "ESP32 Development Board (Generic)",
        platform: PLATFORM,
        board: "esp32dev",
        framework: FRAMEWORK,
        upload_speed: UPLOAD_SPEED,
        monitor_speed: MONITOR_SPEED,
        flash_size: "4MB",
        psram: false,
        led_pin: 2,
        description: "Generic ESP32 development board (NodeMCU-32S, DevKit, etc.)",
    },
    BoardProfile {
        id: "esp32-s2-saola-1",
        name: "ESP32-S2-Saola-1",
        platform: PLATFORM,
        board: "esp32-s2-saola-1",
        framework: FRAMEWORK,
        upload_speed: UPLOAD_SPEED,
        monitor_speed: MONITOR_SPEED,
        flash_size: "4MB",
        psram: false,
        led_pin: 18,
        description: "ESP32-S2 development board with USB-OTG support",
    },
    BoardProfile {
        id: "esp32-s3-devkitc-1",
        name: "ESP32-S3-DevKitC-1",
        platform: PLATFORM,
        board: "esp32-s3-devkitc-1",
        framework: FRAMEWORK,
        upload_speed: UPLOAD_SPEED,
        monitor_speed: MONITOR_SPEED,
        flash_size: "8MB",
        psram: true,
        led_pin: 48,
        description: "ESP32-S3 development board with WiFi, Bluetooth, and AI acceleration",
    },
    BoardProfile {
        id: "esp32-c3-devkitm-1",
        name: "ESP32-C3-DevKitM-1",
        platform: PLATFORM,
        board: "esp32-c3-devkitm-1",
        framework: FRAMEWORK,
        upload_speed: UPLOAD_SPEED,
        monitor_speed: MONITOR_SPEED,
        flash_size: "4MB",
        psram: false,
        led_pin: 8,
        description: "ESP32-C3 RISC-V development board with WiFi and Bluetooth 5",
    },
    BoardProfile {
        id: "esp32-c6-devkitc-1",
        name: "ESP32-C6-DevKitC-1",
        platform: PLATFORM,
        board: "esp32-c6-devkitc-1",
        framework: FRAMEWORK,
        upload_speed: UPLOAD_SPEED,
        monitor_speed: MONITOR_SPEED,
        flash_size: "8MB",
        psram: false,
        led_pin: 8,
        description: "ESP32-C6 RISC-V development board with WiFi 6, Bluetooth 5, and Zigbee/Thread",
    },
    BoardProfile {
        id: "esp32-s3-box",
        name: "ESP32-S3-BOX",
        platform: PLATFORM,
        board: "esp32-s3-box",
        framework: FRAMEWORK,
        upload_speed: UPLOAD_SPEED,
        monitor_speed: MONITOR_SPEED,
        flash_size: "16MB",
        psram: true,
        led_pin: 47,
        description: "ESP32-S3-BOX AI development board with display and audio",
    },
    BoardProfile {
        id: "esp32-wrover-kit",
        name: "ESP32-WROVER-KIT",
        platform: PLATFORM,
        board: "esp32-wrover-kit",
        framework: FRAMEWORK,
        upload_speed: UPLOAD_SPEED,
        monitor_speed: MONITOR_SPEED,
        flash_size: "4MB",
        psram: true,
        led_pin: 2,
        description: "ESP32-WROVER development board with PSRAM and camera support",
    },
    BoardProfile {
        id: "ttgo-t-display",
        name: "TTGO T-Display",
        platform: PLATFORM,
        board: "ttgo-t1",
        framework: FRAMEWORK,
        upload_speed: UPLOAD_SPEED,
        monitor_speed: MONITOR_SPEED,
        flash_size: "4MB",
        psram: false,
        led_pin: 2,
        description: "TTGO T-Display ESP32 with built-in TFT display",
    },
    BoardProfile {
        id: "m5stack-core-esp32",
        name: "M5Stack Core",
        platform: PLATFORM,
        board: "m5stack-core-esp32",
        framework: FRAMEWORK,
        upload_speed: UPLOAD_SPEED,
        monitor_speed: MONITOR_SPEED,
        flash_size: "16MB",
        psram: true,
        led_pin: 2,
        description: "M5Stack Core development kit with display, buttons, and speaker",
    },
];

/// All built-in boards, in menu order.
pub fn boards() -> &'static [BoardProfile] {
    &BOARDS
}

/// Look up a board by identifier.
pub fn find_board(id: &str) -> Option<&'static BoardProfile> {
    BOARDS.iter().find(|b| b.id == id)
}

/// Resolve a board identifier, failing with [`BoardError::UnknownBoard`].
pub fn select_board(id: &str) -> Result<&'static BoardProfile> {
    find_board(id).ok_or_else(|| BoardError::UnknownBoard { id: id.to_string() })
}
