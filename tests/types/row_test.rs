use lumbung::types::error::DatabaseError;
use lumbung::types::row::Row;
use lumbung::types::{COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE, ROW_SIZE};

#[test]
fn test_serialize_round_trip() {
    let row = Row::new(1, "user1", "person1@example.com");
    let mut buffer = vec![0u8; ROW_SIZE];
    row.serialize_into(&mut buffer).unwrap();

    let decoded = Row::from_bytes(&buffer).unwrap();
    assert_eq!(decoded, row);
}

#[test]
fn test_id_is_big_endian() {
    let row = Row::new(0x01020304, "a", "b");
    let mut buffer = vec![0u8; ROW_SIZE];
    row.serialize_into(&mut buffer).unwrap();
    assert_eq!(&buffer[0..4], &[0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn test_max_length_strings_round_trip() {
    let username = "a".repeat(COLUMN_USERNAME_SIZE);
    let email = "a".repeat(COLUMN_EMAIL_SIZE);
    let row = Row::new(1, &username, &email);

    let mut buffer = vec![0u8; ROW_SIZE];
    row.serialize_into(&mut buffer).unwrap();
    let decoded = Row::from_bytes(&buffer).unwrap();

    assert_eq!(decoded.username, username);
    assert_eq!(decoded.email, email);
}

#[test]
fn test_non_ascii_characters_round_trip() {
    // One 4-byte unit per scalar, so multi-byte UTF-8 input survives
    let row = Row::new(7, "héllo wörld", "mail@exämple.com");
    let mut buffer = vec![0u8; ROW_SIZE];
    row.serialize_into(&mut buffer).unwrap();

    let decoded = Row::from_bytes(&buffer).unwrap();
    assert_eq!(decoded, row);
}

#[test]
fn test_serialize_zeroes_stale_bytes() {
    let mut buffer = vec![0xffu8; ROW_SIZE];
    let row = Row::new(1, "ab", "cd");
    row.serialize_into(&mut buffer).unwrap();

    let decoded = Row::from_bytes(&buffer).unwrap();
    assert_eq!(decoded.username, "ab");
    assert_eq!(decoded.email, "cd");
}

#[test]
fn test_display_format() {
    let row = Row::new(1, "user1", "person1@example.com");
    assert_eq!(row.to_string(), "(1, user1, person1@example.com)");
}

#[test]
fn test_short_buffers_are_rejected() {
    let row = Row::new(1, "a", "b");
    let mut short = vec![0u8; ROW_SIZE - 1];
    assert!(matches!(
        row.serialize_into(&mut short),
        Err(DatabaseError::Serialization { .. })
    ));
    assert!(matches!(
        Row::from_bytes(&short),
        Err(DatabaseError::Serialization { .. })
    ));
}
