pub mod error;
pub mod row;

// Common type aliases
pub type PageNum = u32;
pub type CellNum = u32;

pub const PAGE_SIZE: usize = 4096;
pub const MAX_PAGES: u32 = 100;

// Hard-coded table schema: (id, username, email)
pub const COLUMN_USERNAME_SIZE: usize = 32;
pub const COLUMN_EMAIL_SIZE: usize = 255;

/*
 * Row layout: fixed-width record, one 4-byte big-endian unit per
 * stored character, unused slots zero.
 */
pub const ID_SIZE: usize = 4;
pub const USERNAME_SIZE: usize = COLUMN_USERNAME_SIZE * 4;
pub const EMAIL_SIZE: usize = COLUMN_EMAIL_SIZE * 4;
pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;
