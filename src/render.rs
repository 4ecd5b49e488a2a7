use crate::models::{Booking, BookingStatus};

const STYLE: &str = "\
        body { font-family: Arial, sans-serif; }
        .container { width: 80%; margin: auto; text-align: center; }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; }
        th, td { padding: 10px; border: 1px solid #ddd; }
        th { background-color: #f4f4f4; }";

/// Renders the full booking page: creation form, status filter, and the
/// bookings table with per-row delete controls.
pub fn booking_page(bookings: &[Booking], filter: Option<i64>) -> String {
    let mut rows = String::new();
    for booking in bookings {
        rows.push_str(&format!(
            r#"                <tr>
                    <td>{date}</td>
                    <td>{time}</td>
                    <td>{status}</td>
                    <td>
                        <form method="post" action="/" style="display:inline;">
                            <input type="hidden" name="action" value="delete">
                            <input type="hidden" name="id" value="{id}">
                            <button type="submit" onclick="return confirm('Are you sure you want to delete this booking?');">Delete</button>
                        </form>
                    </td>
                </tr>
"#,
            date = escape(&booking.date),
            time = escape(&booking.time),
            status = escape(BookingStatus::label(booking.status)),
            id = booking.id,
        ));
    }

    let pending_selected = selected(filter, BookingStatus::Pending);
    let booked_selected = selected(filter, BookingStatus::Booked);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Booking System</title>
    <style>
{STYLE}
    </style>
</head>
<body>
    <div class="container">
        <h1>Booking System</h1>

        <h2>Create New Booking</h2>
        <form method="post" action="/">
            <input type="hidden" name="action" value="create">
            <label for="date">Date:</label>
            <input type="date" id="date" name="date" required>
            <label for="time">Time:</label>
            <input type="time" id="time" name="time" required>
            <button type="submit">Create Booking</button>
        </form>

        <h2>View Bookings</h2>
        <form method="get" action="/">
            <label for="status_filter">Filter by Status: </label>
            <select name="status" id="status_filter" onchange="this.form.submit()">
                <option value="">All</option>
                <option value="0"{pending_selected}>Pending</option>
                <option value="1"{booked_selected}>Booked</option>
            </select>
        </form>

        <table>
            <thead>
                <tr>
                    <th>Date</th>
                    <th>Time</th>
                    <th>Status</th>
                    <th>Actions</th>
                </tr>
            </thead>
            <tbody>
{rows}            </tbody>
        </table>
    </div>
</body>
</html>
"#
    )
}

fn selected(filter: Option<i64>, status: BookingStatus) -> &'static str {
    if filter == Some(status.code()) {
        " selected"
    } else {
        ""
    }
}

/// Escapes text for embedding in HTML element and attribute content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
