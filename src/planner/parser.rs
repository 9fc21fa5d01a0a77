use crate::planner::{error::PrepareError, Statement};
use crate::types::{row::Row, COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE};

pub struct StatementParser;

impl StatementParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, input: &str) -> Result<Statement, PrepareError> {
        if input.starts_with("insert") {
            return self.parse_insert(input);
        }
        if input == "select" {
            return Ok(Statement::Select);
        }
        Err(PrepareError::UnrecognizedStatement(input.to_string()))
    }

    fn parse_insert(&self, input: &str) -> Result<Statement, PrepareError> {
        let fields: Vec<&str> = input.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(PrepareError::SyntaxError);
        }

        let id: i64 = fields[1].parse().map_err(|_| PrepareError::NegativeId)?;
        if id < 0 {
            return Err(PrepareError::NegativeId);
        }
        let id = u32::try_from(id).map_err(|_| PrepareError::SyntaxError)?;

        let username = fields[2];
        let email = fields[3];
        // Column limits count Unicode scalars, not bytes
        if username.chars().count() > COLUMN_USERNAME_SIZE
            || email.chars().count() > COLUMN_EMAIL_SIZE
        {
            return Err(PrepareError::StringTooLong);
        }

        Ok(Statement::Insert {
            row: Row::new(id, username, email),
        })
    }
}
