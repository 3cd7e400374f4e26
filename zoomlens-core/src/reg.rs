//! Lens controller register map
//!
//! All multi-byte register values are big-endian on the wire.

/// Default 7-bit I2C address of the lens controller
pub const CHIP_ADDR: u8 = 0x0C;

/// Focus target position
pub const FOCUS: u8 = 0x00;
/// Zoom target position
pub const ZOOM: u8 = 0x01;
/// Busy flag (non-zero while a motor command is in progress)
pub const BUSY: u8 = 0x04;
/// Pan servo angle
pub const MOTOR_X: u8 = 0x05;
/// Tilt servo angle
pub const MOTOR_Y: u8 = 0x06;
/// Focus reset (homing) trigger
pub const FOCUS_RESET: u8 = 0x0A;
/// Zoom reset (homing) trigger
pub const ZOOM_RESET: u8 = 0x0B;
/// IR-cut filter (1 = open, 0 = closed)
pub const IRCUT: u8 = 0x0C;
/// Combined focus + zoom move (4-byte block)
pub const MOVE: u8 = 0x0F;
/// Controller reset trigger
pub const RESET: u8 = 0x10;
/// Operating mode
pub const MODE: u8 = 0x30;
/// Firmware version
pub const VERSION: u8 = 0x40;
/// Calibration map, words 0-10
pub const CALIBRATION_MAP_LOW: u8 = 0x50;
/// Calibration map, words 11-21
pub const CALIBRATION_MAP_HIGH: u8 = 0x51;
