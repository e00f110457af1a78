//! Fixed-capacity paged row storage.
//!
//! The table owns one arena of `TABLE_MAX_PAGES * PAGE_SIZE` bytes. Row `n`
//! always lives on page `n / ROWS_PER_PAGE` at slot `n % ROWS_PER_PAGE`, so a
//! row never straddles two pages and the tail of every page stays unused.

use std::iter::FusedIterator;

use crate::error::TableError;
use crate::row::{EncodedRow, Row};
use crate::{PAGE_SIZE, ROW_SIZE, ROWS_PER_PAGE, TABLE_MAX_PAGES, TABLE_MAX_ROWS};

/// Byte offset of row `row_index` within the arena.
pub const fn slot_offset(row_index: usize) -> usize {
    let page = row_index / ROWS_PER_PAGE;
    let slot = row_index % ROWS_PER_PAGE;
    page * PAGE_SIZE + slot * ROW_SIZE
}

pub struct Table {
    pages: Box<[u8]>,
    num_rows: usize,
}

impl Table {
    pub fn new() -> Self {
        Self {
            pages: vec![0u8; TABLE_MAX_PAGES * PAGE_SIZE].into_boxed_slice(),
            num_rows: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.num_rows
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    pub fn is_full(&self) -> bool {
        self.num_rows >= TABLE_MAX_ROWS
    }

    /// Appends a row. Nothing is written when the table is full.
    pub fn insert(&mut self, row: &EncodedRow) -> Result<(), TableError> {
        if self.is_full() {
            return Err(TableError::Full {
                max_rows: TABLE_MAX_ROWS,
            });
        }

        let offset = slot_offset(self.num_rows);
        self.pages[offset..offset + ROW_SIZE].copy_from_slice(row);
        self.num_rows += 1;
        Ok(())
    }

    pub fn row(&self, row_index: usize) -> Option<Row> {
        (row_index < self.num_rows).then(|| Row::decode(self.slot(row_index)))
    }

    /// Iterates rows in insertion order, up to the row count at call time.
    pub fn scan(&self) -> Rows<'_> {
        Rows {
            table: self,
            next: 0,
            end: self.num_rows,
        }
    }

    fn slot(&self, row_index: usize) -> &[u8] {
        let offset = slot_offset(row_index);
        &self.pages[offset..offset + ROW_SIZE]
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`Table::scan`].
pub struct Rows<'a> {
    table: &'a Table,
    next: usize,
    end: usize,
}

impl Iterator for Rows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.next >= self.end {
            return None;
        }
        let row = self.table.row(self.next);
        self.next += 1;
        row
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}
