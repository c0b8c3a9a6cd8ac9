use crate::errors::{AppError, AppResult};
use crate::models::shift_type::ShiftType;
use crate::utils::time::normalize_time;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Editable columns of a driver shift row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftField {
    ShiftType,
    CustomStartTime,
    CustomEndTime,
    LocationId,
    Notes,
}

impl ShiftField {
    /// Column order used by the table views.
    pub const ALL: [ShiftField; 5] = [
        ShiftField::ShiftType,
        ShiftField::CustomStartTime,
        ShiftField::CustomEndTime,
        ShiftField::LocationId,
        ShiftField::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftField::ShiftType => "shift_type",
            ShiftField::CustomStartTime => "custom_start_time",
            ShiftField::CustomEndTime => "custom_end_time",
            ShiftField::LocationId => "location_id",
            ShiftField::Notes => "notes",
        }
    }

    /// Accepts the wire name plus a few short aliases for the CLI.
    pub fn from_name(name: &str) -> AppResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "shift_type" | "shift" | "type" => Ok(ShiftField::ShiftType),
            "custom_start_time" | "start" | "in" => Ok(ShiftField::CustomStartTime),
            "custom_end_time" | "end" | "out" => Ok(ShiftField::CustomEndTime),
            "location_id" | "location" => Ok(ShiftField::LocationId),
            "notes" | "note" => Ok(ShiftField::Notes),
            other => Err(AppError::InvalidField(other.to_string())),
        }
    }

    /// Changing a trigger field re-derives other fields.
    pub fn is_trigger(&self) -> bool {
        matches!(self, ShiftField::ShiftType)
    }

    pub fn is_time(&self) -> bool {
        matches!(self, ShiftField::CustomStartTime | ShiftField::CustomEndTime)
    }

    /// Parse raw CLI text into the value shape the field carries.
    ///
    /// Empty input clears the field. Notes are kept verbatim, whitespace
    /// included; shift codes are stored in their wire form.
    pub fn parse_value(&self, input: &str) -> AppResult<FieldValue> {
        let raw = input.trim();
        if raw.is_empty() && (*self != ShiftField::Notes || input.is_empty()) {
            return Ok(FieldValue::Empty);
        }

        let invalid = || AppError::InvalidValue {
            field: self.as_str().to_string(),
            value: raw.to_string(),
        };

        match self {
            ShiftField::ShiftType => ShiftType::from_code(raw)
                .map(|t| FieldValue::text(t.as_str()))
                .ok_or_else(invalid),
            ShiftField::LocationId => raw
                .parse::<i64>()
                .map(FieldValue::Number)
                .map_err(|_| invalid()),
            ShiftField::CustomStartTime | ShiftField::CustomEndTime => normalize_time(raw)
                .map(FieldValue::Text)
                .ok_or_else(|| AppError::InvalidTime(raw.to_string())),
            ShiftField::Notes => Ok(FieldValue::text(input)),
        }
    }
}

impl fmt::Display for ShiftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar value of one cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    #[default]
    Empty,
    Number(i64),
    Text(String),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    pub fn from_opt_str(s: Option<&str>) -> Self {
        match s {
            Some(v) => FieldValue::Text(v.to_string()),
            None => FieldValue::Empty,
        }
    }

    pub fn from_opt_i64(n: Option<i64>) -> Self {
        n.map(FieldValue::Number).unwrap_or(FieldValue::Empty)
    }

    /// Canonical string form: `Empty` and `""` collapse to the same value.
    /// Text is kept as-is, whitespace included.
    pub fn canonical(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Empty => None,
        }
    }

    /// Value equality for dirty detection on `field`.
    ///
    /// Null equals empty string. Time fields compare in `HH:MM` form and
    /// shift types by code when both sides are recognisable.
    pub fn same_as(&self, other: &FieldValue, field: ShiftField) -> bool {
        let a = self.canonical();
        let b = other.canonical();

        if field == ShiftField::ShiftType
            && let (Some(ta), Some(tb)) = (ShiftType::from_code(&a), ShiftType::from_code(&b))
        {
            return ta == tb;
        }

        if field.is_time()
            && let (Some(na), Some(nb)) = (normalize_time(&a), normalize_time(&b))
        {
            return na == nb;
        }

        a == b
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}
