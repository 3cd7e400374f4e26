//! Lens options
//!
//! An option is one controllable parameter of the lens module. Each option
//! has a fixed descriptor with its register, accepted range and, for the
//! motorized axes, a reset (homing) register.

use crate::marshal;
use crate::reg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base of the numeric option codes used by host tooling
pub const OPTION_CODE_BASE: u16 = 0x1000;

/// Controllable lens parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum LensOption {
    /// Focus motor position
    Focus = 0,
    /// Zoom motor position
    Zoom = 1,
    /// Pan servo angle (degrees)
    MotorX = 2,
    /// Tilt servo angle (degrees)
    MotorY = 3,
    /// IR-cut filter
    IrCut = 4,
    /// Operating mode
    Mode = 5,
    /// Controller reset trigger
    Reset = 6,
}

/// Register, range and reset register of one option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OptionDescriptor {
    /// Register holding the option value
    pub register: u8,
    /// Smallest accepted value
    pub min: u16,
    /// Largest accepted value
    pub max: u16,
    /// Register that homes the axis, if the option is resettable
    pub reset_register: Option<u8>,
}

impl OptionDescriptor {
    const fn new(register: u8, min: u16, max: u16, reset_register: Option<u8>) -> Self {
        Self {
            register,
            min,
            max,
            reset_register,
        }
    }

    /// Clamp a requested value into `[min, max]`
    pub fn clamp(&self, value: i32) -> u16 {
        marshal::to_wire(value.clamp(self.min as i32, self.max as i32))
    }

    /// Check if the option can be reset
    pub const fn is_resettable(&self) -> bool {
        self.reset_register.is_some()
    }
}

/// Option table, indexed by `LensOption as usize`
static OPTION_TABLE: [OptionDescriptor; 7] = [
    OptionDescriptor::new(reg::FOCUS, 0, 2100, Some(reg::FOCUS_RESET)),
    OptionDescriptor::new(reg::ZOOM, 0, 2100, Some(reg::ZOOM_RESET)),
    OptionDescriptor::new(reg::MOTOR_X, 0, 180, None),
    OptionDescriptor::new(reg::MOTOR_Y, 0, 180, None),
    OptionDescriptor::new(reg::IRCUT, 0, 1, None),
    OptionDescriptor::new(reg::MODE, 0, 1, None),
    OptionDescriptor::new(reg::RESET, 0, 1, None),
];

impl LensOption {
    /// All options in table order
    pub const ALL: [LensOption; 7] = [
        LensOption::Focus,
        LensOption::Zoom,
        LensOption::MotorX,
        LensOption::MotorY,
        LensOption::IrCut,
        LensOption::Mode,
        LensOption::Reset,
    ];

    /// Get the static descriptor for this option
    pub fn descriptor(self) -> &'static OptionDescriptor {
        &OPTION_TABLE[self as usize]
    }

    /// Numeric option code (`0x1001` for focus through `0x1007` for reset)
    pub const fn code(self) -> u16 {
        OPTION_CODE_BASE | (self as u16 + 1)
    }

    /// Look up an option by its numeric code
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.code() == code)
    }
}

/// Order the fields of a combined move write
///
/// The controller expects the axis mapped to register 0x00 first. With the
/// stock table that is focus at 0x00, but the order is taken from the table
/// so a remapped zoom axis follows automatically.
pub fn move_fields(focus: u16, zoom: u16) -> (u16, u16) {
    if LensOption::Zoom.descriptor().register == 0x00 {
        (focus, zoom)
    } else {
        (zoom, focus)
    }
}

/// Clamp raw focus and zoom targets and order them for a combined move
///
/// Each axis is clamped to its own range before ordering.
pub fn move_targets(focus: i32, zoom: i32) -> (u16, u16) {
    move_fields(
        LensOption::Focus.descriptor().clamp(focus),
        LensOption::Zoom.descriptor().clamp(zoom),
    )
}
