//! A single-table, in-memory record store.
//!
//! Rows are packed into a fixed array of pages using the layout
//! `[id:4 LE][username:32][email:255]`. Commands come in as text lines
//! through [`Database::submit`].

pub mod error;
pub mod executor;
pub mod row;
pub mod statement;
pub mod table;

pub use error::{SyntaxError, TableError};
pub use executor::{Database, Outcome};
pub use row::{EncodedRow, Row};
pub use statement::Statement;
pub use table::{Rows, Table, slot_offset};

pub const COLUMN_USERNAME_SIZE: usize = 32;
pub const COLUMN_EMAIL_SIZE: usize = 255;
pub const ID_SIZE: usize = size_of::<u32>();
pub const USERNAME_SIZE: usize = COLUMN_USERNAME_SIZE;
pub const EMAIL_SIZE: usize = COLUMN_EMAIL_SIZE;

pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

pub const PAGE_SIZE: usize = 4096;
pub const TABLE_MAX_PAGES: usize = 100;
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;
