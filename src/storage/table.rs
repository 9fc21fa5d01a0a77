use std::path::Path;

use crate::storage::node::LeafNode;
use crate::storage::pager::Pager;
use crate::types::{error::Result, PageNum};

/// Thin owner of the Pager plus the root page index. The single
/// hard-coded table always roots at page 0.
pub struct Table {
    pub pager: Pager,
    pub root_page_num: PageNum,
}

impl Table {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut pager = Pager::open(path)?;

        if pager.num_pages == 0 {
            // New database file: page 0 starts life as an empty leaf.
            let page = pager.get_page(0)?;
            LeafNode::new(&mut page.data).initialize();
        }

        Ok(Table {
            pager,
            root_page_num: 0,
        })
    }

    /// Flush every loaded page and release the file. Mutations made
    /// since the last close are lost if the process dies before this
    /// runs.
    pub fn close(mut self) -> Result<()> {
        self.pager.close()
    }
}
