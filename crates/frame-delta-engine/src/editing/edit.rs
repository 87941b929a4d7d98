use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Wire form of a patch entry: `[low, high, data]`.
///
/// `low` and `high` are character offsets into the *original* base string.
/// Negative offsets cannot be represented and are rejected when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize, String)", into = "(usize, usize, String)")]
pub struct EditRecord {
    pub low: usize,
    pub high: usize,
    pub data: String,
}

impl EditRecord {
    pub fn new(low: usize, high: usize, data: impl Into<String>) -> Self {
        Self {
            low,
            high,
            data: data.into(),
        }
    }
}

impl From<(usize, usize, String)> for EditRecord {
    fn from((low, high, data): (usize, usize, String)) -> Self {
        Self { low, high, data }
    }
}

impl From<EditRecord> for (usize, usize, String) {
    fn from(record: EditRecord) -> Self {
        (record.low, record.high, record.data)
    }
}

/// A single positional edit against the original offsets of a base string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EditRecord", into = "EditRecord")]
pub enum Edit {
    /// Blank out every character in `range`
    Delete { range: Range<usize> },
    /// Put `data` in front of the character at `at`, or append when `at` is past the end
    Insert { at: usize, data: String },
    /// Blank out `range`, then store `data` in the first cell of it
    Replace { range: Range<usize>, data: String },
}

impl Edit {
    pub fn delete(range: Range<usize>) -> Self {
        Edit::Delete { range }
    }

    pub fn insert(at: usize, data: impl Into<String>) -> Self {
        Edit::Insert {
            at,
            data: data.into(),
        }
    }

    pub fn replace(range: Range<usize>, data: impl Into<String>) -> Self {
        Edit::Replace {
            range,
            data: data.into(),
        }
    }

    /// Converts back to the `[low, high, data]` shape understood by other consumers
    pub fn to_record(&self) -> EditRecord {
        EditRecord::from(self.clone())
    }
}

/// Infers the operation from the record's shape.
///
/// Empty data is a delete; equal offsets are an insert; anything else is a replace.
impl From<EditRecord> for Edit {
    fn from(record: EditRecord) -> Self {
        let EditRecord { low, high, data } = record;
        if data.is_empty() {
            Edit::Delete { range: low..high }
        } else if low == high {
            Edit::Insert { at: low, data }
        } else {
            Edit::Replace {
                range: low..high,
                data,
            }
        }
    }
}

impl From<Edit> for EditRecord {
    fn from(edit: Edit) -> Self {
        match edit {
            Edit::Delete { range } => EditRecord::new(range.start, range.end, ""),
            Edit::Insert { at, data } => EditRecord::new(at, at, data),
            Edit::Replace { range, data } => EditRecord::new(range.start, range.end, data),
        }
    }
}
