use serde::{Deserialize, Serialize};

/// Shift assigned to a driver for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    ShiftPagi,  // morning
    ShiftSore,  // afternoon
    ShiftMalam, // night
    Libur,      // day off
    Custom,
}

impl ShiftType {
    pub const ALL: [ShiftType; 5] = [
        ShiftType::ShiftPagi,
        ShiftType::ShiftSore,
        ShiftType::ShiftMalam,
        ShiftType::Libur,
        ShiftType::Custom,
    ];

    /// Convert enum → wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::ShiftPagi => "shift_pagi",
            ShiftType::ShiftSore => "shift_sore",
            ShiftType::ShiftMalam => "shift_malam",
            ShiftType::Libur => "libur",
            ShiftType::Custom => "custom",
        }
    }

    /// Convert wire string → enum (case-insensitive, surrounding blanks ignored)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == code)
    }

    /// Human label used in tables.
    pub fn label(&self) -> &'static str {
        match self {
            ShiftType::ShiftPagi => "Pagi",
            ShiftType::ShiftSore => "Sore",
            ShiftType::ShiftMalam => "Malam",
            ShiftType::Libur => "Libur",
            ShiftType::Custom => "Custom",
        }
    }

    /// Start/end times implied by the shift type.
    ///
    /// `Custom` has no preset: the operator types the times by hand, so the
    /// caller must leave the time fields untouched.
    pub fn default_times(&self) -> Option<(&'static str, &'static str)> {
        match self {
            ShiftType::ShiftPagi => Some(("07:00", "15:00")),
            ShiftType::ShiftSore => Some(("15:00", "23:00")),
            ShiftType::ShiftMalam => Some(("23:00", "07:00")),
            ShiftType::Libur => Some(("00:00", "00:00")),
            ShiftType::Custom => None,
        }
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
