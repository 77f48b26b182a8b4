/// Outcome of a moisture read.
///
/// Percentages are not clamped, so values below 0 or above 100 are possible
/// while the sensor is drifting but has not yet been declared faulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// Moisture as a percentage of the calibrated range
    Percent(i32),

    /// Persistent sensor fault (too many consecutive bad samples, or the
    /// running average left the calibrated range)
    Fault,
}

impl Reading {
    /// Integer used to signal a fault in the legacy integer encoding
    pub const ERROR_SENTINEL: i32 = -1;

    pub fn is_fault(&self) -> bool {
        matches!(self, Reading::Fault)
    }

    pub fn percent(&self) -> Option<i32> {
        match self {
            Reading::Percent(p) => Some(*p),
            Reading::Fault => None,
        }
    }

    /// Collapse to a single integer, `ERROR_SENTINEL` on fault.
    ///
    /// Lossy: a genuine reading of -1% is indistinguishable from a fault.
    pub fn to_sentinel(self) -> i32 {
        match self {
            Reading::Percent(p) => p,
            Reading::Fault => Self::ERROR_SENTINEL,
        }
    }
}
