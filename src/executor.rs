use std::fmt;

use tracing::{debug, warn};

use crate::error::{SyntaxError, TableError};
use crate::row::Row;
use crate::statement::Statement;
use crate::table::Table;

/// Result of running one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Inserted,
    Rows(Vec<Row>),
    SyntaxError(SyntaxError),
    InvalidOperation(String),
    TableFull,
    UnrecognizedCommand(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Inserted => write!(f, "Executed."),
            Outcome::Rows(rows) => {
                for row in rows {
                    writeln!(f, "{row}")?;
                }
                write!(f, "Executed.")
            }
            Outcome::SyntaxError(_) => write!(f, "Syntax error. Could not parse statement."),
            Outcome::InvalidOperation(command) => write!(f, "Unrecognized command: {command}"),
            Outcome::TableFull => write!(f, "Error: Table full."),
            Outcome::UnrecognizedCommand(command) => {
                write!(f, "Unrecognized meta-command: {command}")
            }
        }
    }
}

/// Runs a statement against the table.
pub fn execute(statement: Statement, table: &mut Table) -> Outcome {
    match statement {
        Statement::Insert(row) => match table.insert(&row) {
            Ok(()) => {
                debug!(rows = table.len(), "row inserted");
                Outcome::Inserted
            }
            Err(TableError::Full { max_rows }) => {
                warn!(max_rows, "insert rejected, table full");
                Outcome::TableFull
            }
        },
        Statement::Select => Outcome::Rows(table.scan().collect()),
        Statement::Error(err) => Outcome::SyntaxError(err),
        Statement::Invalid(command) => Outcome::InvalidOperation(command),
    }
}

/// The store plus its command pipeline.
#[derive(Default)]
pub struct Database {
    table: Table,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Parses and runs one command line.
    ///
    /// Meta-commands (lines starting with `.`) are the caller's business;
    /// any that get here are reported as unrecognized.
    pub fn submit(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        if line.starts_with('.') {
            return Outcome::UnrecognizedCommand(line.to_string());
        }
        let statement = Statement::prepare(line);
        debug!(?statement, "prepared");
        execute(statement, &mut self.table)
    }
}
