use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use crate::types::{
    error::{DatabaseError, Result},
    PageNum, MAX_PAGES, PAGE_SIZE,
};

#[derive(Debug)]
pub struct Page {
    pub data: [u8; PAGE_SIZE],
}

impl Page {
    pub fn new() -> Self {
        Page {
            data: [0u8; PAGE_SIZE],
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the database file and the in-memory page cache. Every page
/// that is ever read or written passes through `get_page`.
#[derive(Debug)]
pub struct Pager {
    file: File,
    pub file_length: u64,
    pub num_pages: u32,
    pages: HashMap<PageNum, Page>,
}

impl Pager {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .mode(0o600)
            .open(path)?;
        let file_length = file.seek(SeekFrom::End(0))?;

        if file_length as usize % PAGE_SIZE != 0 {
            return Err(DatabaseError::CorruptFile);
        }

        Ok(Pager {
            file,
            file_length,
            num_pages: (file_length / PAGE_SIZE as u64) as u32,
            pages: HashMap::new(),
        })
    }

    pub fn get_page(&mut self, page_num: PageNum) -> Result<&mut Page> {
        if page_num > MAX_PAGES {
            return Err(DatabaseError::PageOutOfBounds {
                page_num,
                max: MAX_PAGES,
            });
        }

        if !self.pages.contains_key(&page_num) {
            // Cache miss. Allocate a zeroed page and load from file.
            let mut page = Page::new();
            let pages_on_disk = (self.file_length / PAGE_SIZE as u64) as u32;

            if page_num <= pages_on_disk {
                self.file
                    .seek(SeekFrom::Start(page_num as u64 * PAGE_SIZE as u64))?;
                match self.file.read_exact(&mut page.data) {
                    // Reading past the end of the file fills with zeroes
                    Err(e) if e.kind() == ErrorKind::UnexpectedEof => {}
                    other => other?,
                }
            }

            if page_num >= self.num_pages {
                self.num_pages = page_num + 1;
            }

            self.pages.insert(page_num, page);
        }

        Ok(self.pages.get_mut(&page_num).unwrap())
    }

    /// Write a cached page back to its file offset, all 4096 bytes.
    pub fn flush(&mut self, page_num: PageNum) -> Result<()> {
        let page = self
            .pages
            .get(&page_num)
            .ok_or(DatabaseError::FlushNullPage)?;

        self.file
            .seek(SeekFrom::Start(page_num as u64 * PAGE_SIZE as u64))
            .map_err(DatabaseError::Seek)?;
        self.file
            .write_all(&page.data)
            .map_err(DatabaseError::Write)?;

        Ok(())
    }

    /// Flush and evict every cached page, in page order.
    pub fn close(&mut self) -> Result<()> {
        for page_num in 0..self.num_pages {
            if self.pages.contains_key(&page_num) {
                self.flush(page_num)?;
                self.pages.remove(&page_num);
            }
        }
        Ok(())
    }
}
