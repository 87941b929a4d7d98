use serde::{Deserialize, Serialize};

use crate::editing::{CellBuffer, Edit, EditRecord};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("edit range ends at {index} but the buffer only has {len} cells")]
    OutOfRange { index: usize, len: usize },
    #[error("edit range {low}..{high} is inverted")]
    InvertedRange { low: usize, high: usize },
    #[error("replace at {at} covers no characters")]
    EmptyReplace { at: usize },
}

/// An ordered batch of edits, all expressed in the base string's original offsets.
///
/// Serialized as the differ emits it: a JSON array of `[low, high, data]` triples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch {
    edits: Vec<Edit>,
}

impl Patch {
    pub fn new(edits: Vec<Edit>) -> Self {
        Self { edits }
    }

    /// Build a patch from wire records, inferring each operation
    pub fn from_records(records: impl IntoIterator<Item = EditRecord>) -> Self {
        records.into_iter().map(Edit::from).collect()
    }

    pub fn push(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edit> {
        self.edits.iter()
    }

    pub fn to_records(&self) -> Vec<EditRecord> {
        self.edits.iter().map(Edit::to_record).collect()
    }

    pub fn apply_to(&self, base: &str) -> Result<String, PatchError> {
        apply_patch(base, &self.edits)
    }
}

impl FromIterator<Edit> for Patch {
    fn from_iter<I: IntoIterator<Item = Edit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Patch {
    type Item = &'a Edit;
    type IntoIter = std::slice::Iter<'a, Edit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.iter()
    }
}

impl From<Vec<Edit>> for Patch {
    fn from(edits: Vec<Edit>) -> Self {
        Self::new(edits)
    }
}

/// Apply `edits` in order to `base` and return the reconstructed string.
///
/// Every edit addresses the original offsets of `base`, no matter how much
/// text earlier edits removed or added. The first edit that does not fit the
/// buffer aborts the whole batch.
pub fn apply_patch(base: &str, edits: &[Edit]) -> Result<String, PatchError> {
    let mut buffer = CellBuffer::new(base);
    log::trace!("applying {} edits to {} cells", edits.len(), buffer.len());

    for (position, edit) in edits.iter().enumerate() {
        buffer.apply(edit).inspect_err(|e| {
            log::debug!("edit {position} rejected: {e}");
        })?;
    }

    Ok(buffer.materialize())
}

/// Infer operations from wire records and apply them to `base`
pub fn apply_records(base: &str, records: &[EditRecord]) -> Result<String, PatchError> {
    let edits: Vec<Edit> = records.iter().cloned().map(Edit::from).collect();
    apply_patch(base, &edits)
}
