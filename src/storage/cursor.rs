use crate::storage::node::{LeafNode, NodeType};
use crate::storage::table::Table;
use crate::types::{
    error::{DatabaseError, Result},
    row::Row,
    CellNum, PageNum,
};

/// A logical position in the table: page index, cell index, and an
/// end-of-table flag. Used both for iteration and for locating an
/// insertion point.
pub struct Cursor<'a> {
    table: &'a mut Table,
    page_num: PageNum,
    cell_num: CellNum,
    end_of_table: bool,
}

impl<'a> Cursor<'a> {
    /// Position at the first cell of the root leaf.
    pub fn start(table: &'a mut Table) -> Result<Self> {
        let page_num = table.root_page_num;
        let page = table.pager.get_page(page_num)?;
        let num_cells = LeafNode::new(&mut page.data).num_cells();

        Ok(Cursor {
            table,
            page_num,
            cell_num: 0,
            end_of_table: num_cells == 0,
        })
    }

    /// Position at the cell holding `key`, or at the slot where it
    /// would be inserted.
    pub fn find(table: &'a mut Table, key: u32) -> Result<Self> {
        let page_num = table.root_page_num;
        let page = table.pager.get_page(page_num)?;
        let node = LeafNode::new(&mut page.data);

        let cell_num = match node.node_type()? {
            NodeType::Leaf => node.find(key),
            NodeType::Internal => return Err(DatabaseError::InternalNodeSearch),
        };

        Ok(Cursor {
            table,
            page_num,
            cell_num,
            end_of_table: false,
        })
    }

    pub fn cell_num(&self) -> CellNum {
        self.cell_num
    }

    pub fn end_of_table(&self) -> bool {
        self.end_of_table
    }

    /// Key stored at the cursor position.
    pub fn key(&mut self) -> Result<u32> {
        let page = self.table.pager.get_page(self.page_num)?;
        Ok(LeafNode::new(&mut page.data).key(self.cell_num as usize))
    }

    /// The value region of the current cell.
    pub fn value(&mut self) -> Result<&mut [u8]> {
        let page = self.table.pager.get_page(self.page_num)?;
        Ok(LeafNode::new(&mut page.data).into_value(self.cell_num as usize))
    }

    pub fn advance(&mut self) -> Result<()> {
        let page = self.table.pager.get_page(self.page_num)?;
        let num_cells = LeafNode::new(&mut page.data).num_cells();

        self.cell_num += 1;
        if self.cell_num >= num_cells {
            self.end_of_table = true;
        }
        Ok(())
    }

    /// Ordered insert of `key` and `row` at the cursor position.
    pub fn leaf_insert(&mut self, key: u32, row: &Row) -> Result<()> {
        let cell_num = self.cell_num as usize;
        let page = self.table.pager.get_page(self.page_num)?;
        LeafNode::new(&mut page.data).insert(cell_num, key, row)
    }
}
