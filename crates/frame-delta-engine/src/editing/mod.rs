/*!
 * # Editing Core Module
 *
 * Applies batches of positional edits to a base string.
 *
 * ## Architecture Overview
 *
 * ### 1. Explicit Edit Algebra
 * - Every patch entry is an **`Edit`** (`Delete`, `Insert`, `Replace`)
 * - The differ's wire shape `[low, high, data]` is an **`EditRecord`**; the operation
 *   is inferred once, when the record is converted into an `Edit`
 * - Apply never re-inspects the shape of the data
 *
 * ### 2. Snapshot Index Space
 * - The base string is exploded into a **`CellBuffer`**, one cell per character
 * - Every edit in a batch addresses the *original* offsets of the base
 * - Deleted characters leave empty cells behind, inserted text is folded into an
 *   existing cell, so no edit ever shifts the offsets seen by the next one
 * - The buffer is materialised once, after the whole batch has landed
 *
 * ## Module Structure
 *
 * - **`edit`**: `Edit` enum, `EditRecord` wire triple and the inference rules
 * - **`cells`**: `CellBuffer`, the offset-stable intermediate representation
 * - **`patch`**: `Patch` batches, `apply_patch` and `PatchError`
 *
 * ## Usage Pattern
 *
 * ```rust
 * use frame_delta_engine::editing::*;
 *
 * let patch: Patch = serde_json::from_str(r#"[[0, 1, ""], [5, 6, ""]]"#).unwrap();
 * assert_eq!(patch.apply_to("abcdef").unwrap(), "bcde");
 *
 * let edits = [Edit::Insert { at: 2, data: "X".to_string() }];
 * assert_eq!(apply_patch("abcdef", &edits).unwrap(), "abXcdef");
 * ```
 */

pub mod cells;
pub mod edit;
pub mod patch;

pub use cells::CellBuffer;
pub use edit::{Edit, EditRecord};
pub use patch::{Patch, PatchError, apply_patch, apply_records};
