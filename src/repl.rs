use std::str::FromStr;

use thiserror::Error;

use crate::storage::node::LeafNode;
use crate::storage::table::Table;
use crate::storage::{
    COMMON_NODE_HEADER_SIZE, LEAF_NODE_HEADER_SIZE, LEAF_NODE_MAX_CELLS, LEAF_NODE_NUM_CELLS_SIZE,
    LEAF_NODE_SPACE_FOR_CELLS,
};
use crate::types::error::Result;
use crate::types::ROW_SIZE;

/// Dot-prefixed REPL directives, handled before statement parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaCommand {
    Exit,
    Btree,
    Constants,
}

#[derive(Debug, PartialEq, Error)]
pub enum MetaCommandError {
    #[error("Unrecognized command '{0}'.")]
    Unrecognized(String),
}

impl FromStr for MetaCommand {
    type Err = MetaCommandError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            ".exit" => Ok(MetaCommand::Exit),
            ".btree" => Ok(MetaCommand::Btree),
            ".constants" => Ok(MetaCommand::Constants),
            _ => Err(MetaCommandError::Unrecognized(s.to_string())),
        }
    }
}

/// Dump the root leaf for `.btree`.
pub fn print_tree(table: &mut Table) -> Result<()> {
    let root_page_num = table.root_page_num;
    let page = table.pager.get_page(root_page_num)?;
    let node = LeafNode::new(&mut page.data);
    let num_cells = node.num_cells();

    println!("Tree:");
    println!("leaf (size {})", num_cells);
    for cell_num in 0..num_cells {
        println!("  - {} : {}", cell_num, node.key(cell_num as usize));
    }
    Ok(())
}

pub fn print_constants() {
    println!("Constants:");
    println!("RowSize: {}", ROW_SIZE);
    println!("CommonNodeHeaderSize: {}", COMMON_NODE_HEADER_SIZE);
    println!("LeafNodeHeaderSize: {}", LEAF_NODE_HEADER_SIZE);
    println!("LeafNodeNumCellsSize: {}", LEAF_NODE_NUM_CELLS_SIZE);
    println!("LeafNodeSpaceForCells: {}", LEAF_NODE_SPACE_FOR_CELLS);
    println!("LeafNodeMaxCells: {}", LEAF_NODE_MAX_CELLS);
}
