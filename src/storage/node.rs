use serde::{Deserialize, Serialize};

use crate::storage::{
    LEAF_NODE_CELL_SIZE, LEAF_NODE_HEADER_SIZE, LEAF_NODE_KEY_OFFSET, LEAF_NODE_KEY_SIZE,
    LEAF_NODE_MAX_CELLS, LEAF_NODE_NUM_CELLS_OFFSET, LEAF_NODE_NUM_CELLS_SIZE, LEAF_NODE_VALUE_OFFSET,
    LEAF_NODE_VALUE_SIZE, NODE_TYPE_OFFSET, NODE_TYPE_SIZE,
};
use crate::types::{
    error::{DatabaseError, Result},
    row::Row,
    CellNum,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeType {
    Internal = 0,
    Leaf = 1,
}

impl NodeType {
    pub fn from_u16(value: u16) -> Result<Self> {
        match value {
            0 => Ok(NodeType::Internal),
            1 => Ok(NodeType::Leaf),
            _ => Err(DatabaseError::InvalidNodeType(value)),
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            NodeType::Internal => 0,
            NodeType::Leaf => 1,
        }
    }
}

/*
 * Leaf Page Layout on Disk
 * ┌────────────────────────────────────────────────────────────┐
 * │                  NODE HEADER (12 bytes)                    │
 * │  node_type(2) | is_root(2) | parent_pointer(4) |           │
 * │  num_cells(4)                                              │
 * ├────────────────────────────────────────────────────────────┤
 * │                      CELL ARRAY                            │
 * │  [cell 0: key(4)|row(1152)] [cell 1: ...] [cell 2: ...]    │
 * ├────────────────────────────────────────────────────────────┤
 * │                     UNUSED SPACE                           │
 * └────────────────────────────────────────────────────────────┘
 * All integers big-endian. Keys are strictly increasing by cell
 * index.
 */

pub struct LeafNode<'a> {
    buffer: &'a mut [u8],
}

impl<'a> LeafNode<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        LeafNode { buffer }
    }

    /// Stamp a fresh page as an empty leaf.
    pub fn initialize(&mut self) {
        self.set_node_type(NodeType::Leaf);
        self.set_num_cells(0);
    }

    pub fn node_type(&self) -> Result<NodeType> {
        let tag = u16::from_be_bytes([
            self.buffer[NODE_TYPE_OFFSET],
            self.buffer[NODE_TYPE_OFFSET + 1],
        ]);
        NodeType::from_u16(tag)
    }

    pub fn set_node_type(&mut self, node_type: NodeType) {
        self.buffer[NODE_TYPE_OFFSET..NODE_TYPE_OFFSET + NODE_TYPE_SIZE]
            .copy_from_slice(&node_type.as_u16().to_be_bytes());
    }

    pub fn num_cells(&self) -> CellNum {
        u32::from_be_bytes([
            self.buffer[LEAF_NODE_NUM_CELLS_OFFSET],
            self.buffer[LEAF_NODE_NUM_CELLS_OFFSET + 1],
            self.buffer[LEAF_NODE_NUM_CELLS_OFFSET + 2],
            self.buffer[LEAF_NODE_NUM_CELLS_OFFSET + 3],
        ])
    }

    pub fn set_num_cells(&mut self, num_cells: CellNum) {
        self.buffer[LEAF_NODE_NUM_CELLS_OFFSET..LEAF_NODE_NUM_CELLS_OFFSET + LEAF_NODE_NUM_CELLS_SIZE]
            .copy_from_slice(&num_cells.to_be_bytes());
    }

    fn cell_offset(cell_num: usize) -> usize {
        LEAF_NODE_HEADER_SIZE + cell_num * LEAF_NODE_CELL_SIZE
    }

    pub fn cell(&mut self, cell_num: usize) -> &mut [u8] {
        let offset = Self::cell_offset(cell_num);
        &mut self.buffer[offset..offset + LEAF_NODE_CELL_SIZE]
    }

    /// Overwrite a whole cell, key and value region together.
    pub fn set_cell(&mut self, cell_num: usize, bytes: &[u8]) -> Result<()> {
        if bytes.len() != LEAF_NODE_CELL_SIZE {
            return Err(DatabaseError::Serialization {
                details: format!("cell buffer must be {} bytes, got {}", LEAF_NODE_CELL_SIZE, bytes.len()),
            });
        }
        self.cell(cell_num).copy_from_slice(bytes);
        Ok(())
    }

    pub fn key(&self, cell_num: usize) -> u32 {
        let offset = Self::cell_offset(cell_num) + LEAF_NODE_KEY_OFFSET;
        u32::from_be_bytes([
            self.buffer[offset],
            self.buffer[offset + 1],
            self.buffer[offset + 2],
            self.buffer[offset + 3],
        ])
    }

    pub fn set_key(&mut self, cell_num: usize, key: u32) {
        let offset = Self::cell_offset(cell_num) + LEAF_NODE_KEY_OFFSET;
        self.buffer[offset..offset + LEAF_NODE_KEY_SIZE].copy_from_slice(&key.to_be_bytes());
    }

    pub fn value(&mut self, cell_num: usize) -> &mut [u8] {
        let offset = Self::cell_offset(cell_num) + LEAF_NODE_VALUE_OFFSET;
        &mut self.buffer[offset..offset + LEAF_NODE_VALUE_SIZE]
    }

    /// Like `value`, but gives the slice the page buffer's lifetime.
    pub fn into_value(self, cell_num: usize) -> &'a mut [u8] {
        let offset = Self::cell_offset(cell_num) + LEAF_NODE_VALUE_OFFSET;
        &mut self.buffer[offset..offset + LEAF_NODE_VALUE_SIZE]
    }

    /// Binary search for the slot holding `key`, or the slot where it
    /// would be inserted to keep the cell array ordered.
    pub fn find(&self, key: u32) -> CellNum {
        let mut min: CellNum = 0;
        let mut one_past_max = self.num_cells();
        while min != one_past_max {
            let mid = (min + one_past_max) / 2;
            let key_at_mid = self.key(mid as usize);
            if key == key_at_mid {
                return mid;
            }
            if key < key_at_mid {
                one_past_max = mid;
            } else {
                min = mid + 1;
            }
        }
        min
    }

    /// Ordered insert at `cell_num`, shifting later cells one slot
    /// right. A full leaf is the seam where node splitting goes.
    pub fn insert(&mut self, cell_num: usize, key: u32, row: &Row) -> Result<()> {
        let num_cells = self.num_cells() as usize;
        if num_cells >= LEAF_NODE_MAX_CELLS {
            return Err(DatabaseError::LeafNodeSplit);
        }

        if cell_num < num_cells {
            let start = Self::cell_offset(cell_num);
            let end = Self::cell_offset(num_cells);
            self.buffer.copy_within(start..end, start + LEAF_NODE_CELL_SIZE);
        }

        self.set_num_cells(num_cells as CellNum + 1);
        self.set_key(cell_num, key);
        row.serialize_into(self.value(cell_num))
    }
}
