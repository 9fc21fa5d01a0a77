use std::fs;
use std::io::Write;

use tempfile::NamedTempFile;

use lumbung::storage::pager::Pager;
use lumbung::types::error::DatabaseError;
use lumbung::types::{MAX_PAGES, PAGE_SIZE};
use lumbung::utils::mock::TempDatabase;

#[test]
fn test_open_empty_file() {
    let temp_file = NamedTempFile::new().unwrap();
    let pager = Pager::open(temp_file.path()).unwrap();
    assert_eq!(pager.file_length, 0);
    assert_eq!(pager.num_pages, 0);
}

#[test]
fn test_open_creates_missing_file() {
    let db = TempDatabase::with_prefix("pager_create");
    let pager = Pager::open(db.path()).unwrap();
    assert_eq!(pager.num_pages, 0);
    assert!(db.path().exists());
}

#[test]
fn test_open_rejects_partial_page_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(&[0u8; 100]).unwrap();
    temp_file.flush().unwrap();

    let err = Pager::open(temp_file.path()).unwrap_err();
    assert!(matches!(err, DatabaseError::CorruptFile));
    assert_eq!(
        err.to_string(),
        "Db file is not a whole number of pages. Corrupt file."
    );
}

#[test]
fn test_get_page_allocates_zeroed_page() {
    let temp_file = NamedTempFile::new().unwrap();
    let mut pager = Pager::open(temp_file.path()).unwrap();

    let page = pager.get_page(0).unwrap();
    assert!(page.data.iter().all(|&b| b == 0));
    assert_eq!(pager.num_pages, 1);
}

#[test]
fn test_get_page_out_of_bounds() {
    let temp_file = NamedTempFile::new().unwrap();
    let mut pager = Pager::open(temp_file.path()).unwrap();

    let err = pager.get_page(MAX_PAGES + 1).unwrap_err();
    assert!(matches!(err, DatabaseError::PageOutOfBounds { .. }));
    assert_eq!(
        err.to_string(),
        "Tried to fetch page number out of bounds. 101 > 100"
    );
}

#[test]
fn test_flush_absent_page() {
    let temp_file = NamedTempFile::new().unwrap();
    let mut pager = Pager::open(temp_file.path()).unwrap();

    let err = pager.flush(0).unwrap_err();
    assert!(matches!(err, DatabaseError::FlushNullPage));
    assert_eq!(err.to_string(), "Tried to flush null page");
}

#[test]
fn test_flush_writes_full_page_and_reload_reads_it() {
    let temp_file = NamedTempFile::new().unwrap();

    {
        let mut pager = Pager::open(temp_file.path()).unwrap();
        let page = pager.get_page(0).unwrap();
        page.data[0] = 0xab;
        page.data[PAGE_SIZE - 1] = 0xcd;
        pager.flush(0).unwrap();
    }

    assert_eq!(
        fs::metadata(temp_file.path()).unwrap().len(),
        PAGE_SIZE as u64
    );

    let mut pager = Pager::open(temp_file.path()).unwrap();
    assert_eq!(pager.num_pages, 1);
    let page = pager.get_page(0).unwrap();
    assert_eq!(page.data[0], 0xab);
    assert_eq!(page.data[PAGE_SIZE - 1], 0xcd);
}

#[test]
fn test_close_flushes_every_loaded_page() {
    let temp_file = NamedTempFile::new().unwrap();

    {
        let mut pager = Pager::open(temp_file.path()).unwrap();
        pager.get_page(0).unwrap().data[10] = 1;
        pager.get_page(1).unwrap().data[10] = 2;
        pager.close().unwrap();
    }

    assert_eq!(
        fs::metadata(temp_file.path()).unwrap().len(),
        2 * PAGE_SIZE as u64
    );

    let mut pager = Pager::open(temp_file.path()).unwrap();
    assert_eq!(pager.num_pages, 2);
    assert_eq!(pager.get_page(0).unwrap().data[10], 1);
    assert_eq!(pager.get_page(1).unwrap().data[10], 2);
}
