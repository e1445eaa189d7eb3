//! # Board Snapshots
//!
//! A [`Snapshot`] is a detached copy of every lamp's on/off state in
//! row-major order. It has two external encodings:
//!
//! - JSON: an array of `0`/`1` integers, used for export and import
//! - compact text: a string of `'0'`/`'1'` characters, used for display
//!   and debugging
//!
//! Snapshots own their data, so mutating the live board never changes a
//! snapshot that was taken earlier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::board::BoardError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Snapshot(Vec<bool>);

impl Snapshot {
    pub fn new(lamps: Vec<bool>) -> Self {
        Self(lamps)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// The `0`/`1` integer form used by the JSON encoding.
    pub fn to_bits(&self) -> Vec<u8> {
        self.0.iter().map(|&on| u8::from(on)).collect()
    }

    /// Parse the JSON array form.
    ///
    /// Anything other than an array of `0`/`1` integers is a
    /// [`BoardError::MalformedImport`].
    pub fn from_json(text: &str) -> Result<Self, BoardError> {
        serde_json::from_str(text).map_err(|e| BoardError::MalformedImport(e.to_string()))
    }

    pub fn to_json(&self) -> String {
        // Vec<u8> serialization cannot fail.
        serde_json::to_string(&self.to_bits()).unwrap_or_else(|_| String::from("[]"))
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|&on| u8::from(on)))
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = Vec::<u8>::deserialize(deserializer)?;
        bits.into_iter()
            .enumerate()
            .map(|(index, bit)| match bit {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(<D::Error as serde::de::Error>::custom(format!(
                    "lamp {} has value {}, expected 0 or 1",
                    index, other
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Snapshot)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &on in &self.0 {
            f.write_str(if on { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Snapshot {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(index, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(BoardError::MalformedImport(format!(
                    "unexpected character {:?} at position {}",
                    other, index
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Snapshot)
    }
}
