pub mod driver_shift;
pub mod field;
pub mod journal;
pub mod shift_type;

pub use driver_shift::{DriverShift, RowId};
pub use field::{FieldValue, ShiftField};
pub use journal::{JournalEntry, JournalLine};
pub use shift_type::ShiftType;
