use crate::executor::error::ExecuteError;
use crate::storage::cursor::Cursor;
use crate::storage::table::Table;
use crate::types::error::DatabaseError;
use crate::types::row::Row;

/// Cursor-backed full-table scan.
pub struct SelectScan<'a> {
    cursor: Cursor<'a>,
}

impl<'a> SelectScan<'a> {
    pub fn new(table: &'a mut Table) -> Result<Self, DatabaseError> {
        Ok(SelectScan {
            cursor: Cursor::start(table)?,
        })
    }
}

impl Iterator for SelectScan<'_> {
    type Item = Result<Row, DatabaseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.end_of_table() {
            return None;
        }

        let row = self.cursor.value().and_then(|bytes| Row::from_bytes(bytes));
        if row.is_ok() {
            if let Err(e) = self.cursor.advance() {
                return Some(Err(e));
            }
        }
        Some(row)
    }
}

pub fn execute_select(table: &mut Table) -> Result<Vec<Row>, ExecuteError> {
    let scan = SelectScan::new(table)?;
    let mut rows = Vec::new();
    for row in scan {
        rows.push(row?);
    }
    Ok(rows)
}
