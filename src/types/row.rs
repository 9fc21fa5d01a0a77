use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{
    error::{DatabaseError, Result},
    EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, ROW_SIZE, USERNAME_OFFSET, USERNAME_SIZE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Row {
    pub fn new(id: u32, username: &str, email: &str) -> Self {
        Self {
            id,
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    /// Serialize into a cell's value region: id, then the username and
    /// email character arrays, all big-endian, zero padded.
    pub fn serialize_into(&self, buffer: &mut [u8]) -> Result<()> {
        if buffer.len() < ROW_SIZE {
            return Err(DatabaseError::Serialization {
                details: format!("row buffer too short: {} bytes", buffer.len()),
            });
        }

        buffer[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_be_bytes());
        write_fixed_text(
            &mut buffer[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE],
            &self.username,
        );
        write_fixed_text(
            &mut buffer[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE],
            &self.email,
        );

        Ok(())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < ROW_SIZE {
            return Err(DatabaseError::Serialization {
                details: format!("row buffer too short: {} bytes", bytes.len()),
            });
        }

        let id = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let username = read_fixed_text(&bytes[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]);
        let email = read_fixed_text(&bytes[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]);

        Ok(Row {
            id,
            username,
            email,
        })
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

fn write_fixed_text(slots: &mut [u8], text: &str) {
    slots.fill(0);
    for (unit, ch) in slots.chunks_exact_mut(4).zip(text.chars()) {
        unit.copy_from_slice(&(ch as u32).to_be_bytes());
    }
}

/// Decode a fixed character array, trimming the trailing zero units.
fn read_fixed_text(slots: &[u8]) -> String {
    slots
        .chunks_exact(4)
        .map(|unit| u32::from_be_bytes([unit[0], unit[1], unit[2], unit[3]]))
        .take_while(|&unit| unit != 0)
        .filter_map(char::from_u32)
        .collect()
}
