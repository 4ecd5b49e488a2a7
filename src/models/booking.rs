use serde::Serialize;

/// A single row of the `Booking` table. `status` stays a raw integer so
/// that codes outside the known set survive a round trip; they render as
/// "Unknown" but are never rejected.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub status: i64,
}

/// Known booking states. Code 2 ("Finished") is reserved but never
/// assigned; it renders as "Unknown" like any other stray value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Booked,
}

impl BookingStatus {
    pub const fn code(self) -> i64 {
        match self {
            BookingStatus::Pending => 0,
            BookingStatus::Booked => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(BookingStatus::Pending),
            1 => Some(BookingStatus::Booked),
            _ => None,
        }
    }

    pub fn label(code: i64) -> &'static str {
        match Self::from_code(code) {
            Some(BookingStatus::Pending) => "Pending",
            Some(BookingStatus::Booked) => "Booked",
            None => "Unknown",
        }
    }
}
