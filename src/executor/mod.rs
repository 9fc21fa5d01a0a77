pub mod error;
pub mod insert;
pub mod select;

use crate::planner::Statement;
use crate::storage::table::Table;
use crate::types::row::Row;

use self::error::ExecuteError;

#[derive(Debug)]
pub enum StatementResult {
    Success,
    Rows(Vec<Row>),
}

pub fn execute_statement(
    statement: Statement,
    table: &mut Table,
) -> Result<StatementResult, ExecuteError> {
    match statement {
        Statement::Insert { row } => {
            insert::execute_insert(table, &row)?;
            Ok(StatementResult::Success)
        }
        Statement::Select => Ok(StatementResult::Rows(select::execute_select(table)?)),
    }
}
