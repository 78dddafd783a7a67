//! SQLite schema definitions and SQL query constants.
//!
//! All SQL used by the repository lives here as pure data, no I/O.

/// SQL statement to create both tables. Idempotent, applied on every startup.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Contact form submissions
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL,
    message TEXT NOT NULL,
    consent INTEGER NOT NULL DEFAULT 0,
    submission_date TEXT DEFAULT (datetime('now')),
    ip_address TEXT,
    user_agent TEXT,
    status TEXT DEFAULT 'new',
    notes TEXT
);

-- Follow-up responses sent for a contact
CREATE TABLE IF NOT EXISTS contact_responses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    contact_id INTEGER NOT NULL,
    response_date TEXT DEFAULT (datetime('now')),
    response_text TEXT NOT NULL,
    responded_by TEXT,
    FOREIGN KEY (contact_id) REFERENCES contacts(id) ON DELETE CASCADE
);
"#;

pub const INSERT_CONTACT: &str = r#"
INSERT INTO contacts (first_name, last_name, email, message, consent, ip_address, user_agent)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_ALL_CONTACTS: &str = r#"
SELECT id, first_name, last_name, email, message, consent, submission_date,
       ip_address, user_agent, status, notes
FROM contacts
ORDER BY submission_date DESC
"#;

pub const SELECT_CONTACT_BY_ID: &str = r#"
SELECT id, first_name, last_name, email, message, consent, submission_date,
       ip_address, user_agent, status, notes
FROM contacts
WHERE id = ?1
"#;

pub const INSERT_RESPONSE: &str = r#"
INSERT INTO contact_responses (contact_id, response_text, responded_by)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_RESPONSES_BY_CONTACT: &str = r#"
SELECT id, contact_id, response_date, response_text, responded_by
FROM contact_responses
WHERE contact_id = ?1
ORDER BY response_date ASC
"#;
