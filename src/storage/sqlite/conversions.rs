//! SQLite row conversion functions.
//!
//! The single place where tabular rows are reshaped into keyed records;
//! every query in the repository goes through one of these.

use rusqlite::Row;

use crate::models::{Contact, ContactResponse};

/// Convert a SQLite row to a Contact.
///
/// Expected columns: id, first_name, last_name, email, message, consent,
/// submission_date, ip_address, user_agent, status, notes
pub fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
    let consent: i64 = row.get(5)?;

    Ok(Contact {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        message: row.get(4)?,
        consent: consent != 0,
        submission_date: row.get(6)?,
        ip_address: row.get(7)?,
        user_agent: row.get(8)?,
        status: row.get(9)?,
        notes: row.get(10)?,
    })
}

/// Convert a SQLite row to a ContactResponse.
///
/// Expected columns: id, contact_id, response_date, response_text, responded_by
pub fn row_to_response(row: &Row) -> rusqlite::Result<ContactResponse> {
    Ok(ContactResponse {
        id: row.get(0)?,
        contact_id: row.get(1)?,
        response_date: row.get(2)?,
        response_text: row.get(3)?,
        responded_by: row.get(4)?,
    })
}
