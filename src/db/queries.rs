use rusqlite::{params, Connection};

use crate::models::Booking;

/// Inserts a booking unless one already exists for the same `(date, time)`
/// pair. Returns `false` when the pair is taken and nothing was inserted.
///
/// The existence check and the insert are two separate statements; two
/// concurrent writers can both pass the check.
pub fn create_booking(
    conn: &Connection,
    date: &str,
    time: &str,
    status: i64,
) -> anyhow::Result<bool> {
    let existing: i64 = conn.query_row(
        "SELECT COUNT(*) FROM Booking WHERE date = ?1 AND time = ?2",
        params![date, time],
        |row| row.get(0),
    )?;

    if existing > 0 {
        return Ok(false);
    }

    conn.execute(
        "INSERT INTO Booking (date, time, status) VALUES (?1, ?2, ?3)",
        params![date, time, status],
    )?;
    Ok(true)
}

/// Deletes the booking with the given id. Returns `false` when no row
/// matched.
pub fn delete_booking(conn: &Connection, id: i64) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM Booking WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

/// With no filter, returns the "recent" view: every booking dated after
/// yesterday, regardless of status. With a status filter, returns every
/// booking with that status and no date floor. Both views are ordered by
/// date then time.
pub fn get_bookings_by_status(
    conn: &Connection,
    status: Option<i64>,
) -> anyhow::Result<Vec<Booking>> {
    let mut bookings = vec![];

    match status {
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, date, time, status FROM Booking
                 WHERE date > date('now', '-1 day')
                 ORDER BY date ASC, time ASC",
            )?;
            let rows = stmt.query_map([], parse_booking_row)?;
            for row in rows {
                bookings.push(row?);
            }
        }
        Some(status) => {
            let mut stmt = conn.prepare(
                "SELECT id, date, time, status FROM Booking
                 WHERE status = ?1
                 ORDER BY date ASC, time ASC",
            )?;
            let rows = stmt.query_map(params![status], parse_booking_row)?;
            for row in rows {
                bookings.push(row?);
            }
        }
    }

    Ok(bookings)
}

fn parse_booking_row(row: &rusqlite::Row) -> rusqlite::Result<Booking> {
    Ok(Booking {
        id: row.get(0)?,
        date: row.get(1)?,
        time: row.get(2)?,
        status: row.get(3)?,
    })
}
