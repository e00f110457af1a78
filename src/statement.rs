use tracing::debug;

use crate::error::SyntaxError;
use crate::row::{EncodedRow, Row};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A row, already encoded, ready to append.
    Insert(Box<EncodedRow>),
    Select,
    /// An `insert` whose fields did not parse.
    Error(SyntaxError),
    /// A line that does not start with a known keyword.
    Invalid(String),
}

impl Statement {
    /// Classifies a command line. Never fails: bad input becomes
    /// [`Statement::Error`] or [`Statement::Invalid`].
    pub fn prepare(input: &str) -> Statement {
        let input = input.trim();
        if let Some(fields) = input.strip_prefix("insert") {
            match parse_insert(fields) {
                Ok(row) => Statement::Insert(Box::new(row.encode())),
                Err(err) => {
                    debug!(%err, input, "insert rejected");
                    Statement::Error(err)
                }
            }
        } else if input.starts_with("select") {
            Statement::Select
        } else {
            debug!(input, "unrecognized command");
            Statement::Invalid(input.to_string())
        }
    }
}

// insert <id> <username> <email>
fn parse_insert(fields: &str) -> Result<Row, SyntaxError> {
    let mut fields = fields.split_whitespace();

    let id = fields.next().ok_or(SyntaxError::MissingField("id"))?;
    let id: u32 = id
        .parse()
        .map_err(|_| SyntaxError::InvalidId(id.to_string()))?;
    let username = fields.next().ok_or(SyntaxError::MissingField("username"))?;
    let email = fields.next().ok_or(SyntaxError::MissingField("email"))?;

    // Anything after the email is ignored.
    Ok(Row::new(id, username, email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_encodes_row() {
        let stmt = Statement::prepare("insert 1 alice alice@example.com");
        let expected = Row::new(1, "alice", "alice@example.com").encode();
        assert_eq!(stmt, Statement::Insert(Box::new(expected)));
    }

    #[test]
    fn insert_tolerates_extra_whitespace() {
        let stmt = Statement::prepare("  insert   7\tbob  bob@example.com  ");
        let expected = Row::new(7, "bob", "bob@example.com").encode();
        assert_eq!(stmt, Statement::Insert(Box::new(expected)));
    }

    #[test]
    fn insert_with_missing_fields() {
        assert_eq!(
            Statement::prepare("insert"),
            Statement::Error(SyntaxError::MissingField("id"))
        );
        assert_eq!(
            Statement::prepare("insert 1 alice"),
            Statement::Error(SyntaxError::MissingField("email"))
        );
    }

    #[test]
    fn insert_with_bad_id() {
        assert_eq!(
            Statement::prepare("insert abc"),
            Statement::Error(SyntaxError::InvalidId("abc".into()))
        );
        assert_eq!(
            Statement::prepare("insert -1 a b"),
            Statement::Error(SyntaxError::InvalidId("-1".into()))
        );
        assert_eq!(
            Statement::prepare("insert 4294967296 a b"),
            Statement::Error(SyntaxError::InvalidId("4294967296".into()))
        );
    }

    #[test]
    fn insert_ignores_trailing_fields() {
        let stmt = Statement::prepare("insert 1 alice alice@example.com extra");
        let expected = Row::new(1, "alice", "alice@example.com").encode();
        assert_eq!(stmt, Statement::Insert(Box::new(expected)));
    }

    #[test]
    fn select() {
        assert_eq!(Statement::prepare("select"), Statement::Select);
        assert_eq!(Statement::prepare("select * from users"), Statement::Select);
    }

    #[test]
    fn unknown_keyword() {
        assert_eq!(
            Statement::prepare("delete 1"),
            Statement::Invalid("delete 1".into())
        );
        assert_eq!(Statement::prepare(""), Statement::Invalid(String::new()));
    }
}
