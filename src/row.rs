use std::fmt;

use crate::{EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, ROW_SIZE, USERNAME_OFFSET, USERNAME_SIZE};

/// A row in its on-page form: `[id:4 LE][username:32][email:255]`.
pub type EncodedRow = [u8; ROW_SIZE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Row {
    pub fn new(id: u32, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Packs the row into its fixed-width layout.
    ///
    /// Text longer than its column is cut at the column width, byte-wise.
    pub fn encode(&self) -> EncodedRow {
        let mut buf = [0u8; ROW_SIZE];
        buf[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());
        write_column(
            &mut buf[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE],
            &self.username,
        );
        write_column(&mut buf[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE], &self.email);
        buf
    }

    /// Unpacks a row from a slot of at least `ROW_SIZE` bytes. Zero padding
    /// is dropped: a column ends at its first NUL byte.
    pub fn decode(buf: &[u8]) -> Self {
        let mut id = [0u8; ID_SIZE];
        id.copy_from_slice(&buf[ID_OFFSET..ID_OFFSET + ID_SIZE]);
        Self {
            id: u32::from_le_bytes(id),
            username: read_column(&buf[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]),
            email: read_column(&buf[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]),
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

fn write_column(column: &mut [u8], value: &str) {
    let bytes = value.as_bytes();
    let len = bytes.len().min(column.len());
    column[..len].copy_from_slice(&bytes[..len]);
}

fn read_column(column: &[u8]) -> String {
    let end = column.iter().position(|&b| b == 0).unwrap_or(column.len());
    String::from_utf8_lossy(&column[..end]).into_owned()
}
