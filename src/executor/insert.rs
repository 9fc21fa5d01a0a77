use crate::executor::error::ExecuteError;
use crate::storage::cursor::Cursor;
use crate::storage::node::LeafNode;
use crate::storage::table::Table;
use crate::storage::LEAF_NODE_MAX_CELLS;
use crate::types::row::Row;

/// Insert a row at its ordered position in the root leaf, rejecting
/// duplicates by key.
pub fn execute_insert(table: &mut Table, row: &Row) -> Result<(), ExecuteError> {
    let root_page_num = table.root_page_num;
    let page = table.pager.get_page(root_page_num)?;
    let num_cells = LeafNode::new(&mut page.data).num_cells();
    if num_cells as usize >= LEAF_NODE_MAX_CELLS {
        return Err(ExecuteError::TableFull);
    }

    let mut cursor = Cursor::find(table, row.id)?;
    if cursor.cell_num() < num_cells && cursor.key()? == row.id {
        return Err(ExecuteError::DuplicateKey);
    }

    cursor.leaf_insert(row.id, row)?;
    Ok(())
}
