//! Hardware-side report structures

use crate::display::FlagSet;

/// Hardware probe output.
#[derive(Debug, Clone)]
pub struct HardwareReport {
    pub flags: FlagSet,
}
