//! Frame playback over a diff-encoded frame sequence.
//!
//! A sequence stores a few complete frames (checkpoints, frame 0 always
//! among them) and one [`Patch`] per transition. Any frame is rebuilt by
//! replaying patches from a known frame.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::editing::{Patch, PatchError};
use crate::wrap::strip_line_wraps;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("frame {frame} is out of range for a sequence of {count} frames")]
    FrameOutOfRange { frame: usize, count: usize },
    #[error("frame sequence has no checkpoint for frame 0")]
    MissingFirstCheckpoint,
    #[error("checkpoint {frame} is out of range for a sequence of {count} frames")]
    CheckpointOutOfRange { frame: usize, count: usize },
    #[error("diff {diff} could not be applied: {source}")]
    Patch {
        diff: usize,
        #[source]
        source: PatchError,
    },
}

/// Checkpoint frames plus the patches that lead from each frame to the next
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSequence {
    checkpoints: BTreeMap<usize, String>,
    #[serde(default)]
    diffs: Vec<Patch>,
}

impl FrameSequence {
    pub fn new(first: impl Into<String>, diffs: Vec<Patch>) -> Self {
        let mut checkpoints = BTreeMap::new();
        checkpoints.insert(0, first.into());
        Self { checkpoints, diffs }
    }

    /// Store a complete copy of `frame` so lookups can start from it
    pub fn with_checkpoint(
        mut self,
        frame: usize,
        text: impl Into<String>,
    ) -> Result<Self, PlaybackError> {
        let count = self.frame_count();
        if frame >= count {
            return Err(PlaybackError::CheckpointOutOfRange { frame, count });
        }
        self.checkpoints.insert(frame, text.into());
        Ok(self)
    }

    pub fn frame_count(&self) -> usize {
        self.diffs.len() + 1
    }

    pub fn diffs(&self) -> &[Patch] {
        &self.diffs
    }

    pub fn checkpoint(&self, frame: usize) -> Option<&str> {
        self.checkpoints.get(&frame).map(String::as_str)
    }

    /// Remove line wraps from every checkpoint so diff offsets line up with them
    pub fn strip_line_wraps(&mut self) {
        for text in self.checkpoints.values_mut() {
            *text = strip_line_wraps(text);
        }
    }

    /// Check the invariants a deserialized sequence may not hold
    pub fn validate(&self) -> Result<(), PlaybackError> {
        if !self.checkpoints.contains_key(&0) {
            return Err(PlaybackError::MissingFirstCheckpoint);
        }
        let count = self.frame_count();
        if let Some((&frame, _)) = self.checkpoints.range(count..).next() {
            return Err(PlaybackError::CheckpointOutOfRange { frame, count });
        }
        Ok(())
    }

    /// Rebuild `frame`, starting from the closest checkpoint at or before it
    pub fn frame(&self, frame: usize) -> Result<String, PlaybackError> {
        self.check_frame(frame)?;
        let (&start, base) = self
            .checkpoints
            .range(..=frame)
            .next_back()
            .ok_or(PlaybackError::MissingFirstCheckpoint)?;
        self.replay(base.clone(), start, frame)
    }

    /// Rebuild every frame in order
    pub fn render_all(&self) -> Result<Vec<String>, PlaybackError> {
        let mut current = self
            .checkpoint(0)
            .ok_or(PlaybackError::MissingFirstCheckpoint)?
            .to_string();
        let mut frames = Vec::with_capacity(self.frame_count());
        for (diff, patch) in self.diffs.iter().enumerate() {
            let next = patch
                .apply_to(&current)
                .map_err(|source| PlaybackError::Patch { diff, source })?;
            frames.push(std::mem::replace(&mut current, next));
        }
        frames.push(current);
        Ok(frames)
    }

    fn check_frame(&self, frame: usize) -> Result<(), PlaybackError> {
        let count = self.frame_count();
        if frame >= count {
            return Err(PlaybackError::FrameOutOfRange { frame, count });
        }
        Ok(())
    }

    /// Apply diffs `from..to` to `base`, the text of frame `from`
    fn replay(&self, base: String, from: usize, to: usize) -> Result<String, PlaybackError> {
        log::trace!("replaying diffs {from}..{to}");
        let mut text = base;
        for diff in from..to {
            text = self.diffs[diff]
                .apply_to(&text)
                .map_err(|source| PlaybackError::Patch { diff, source })?;
        }
        Ok(text)
    }
}

/// What happens when a step runs off either end of the sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopMode {
    /// Stop at the end
    #[default]
    Once,
    /// Jump back to the other end and keep going
    Loop,
    /// Turn around
    Reflect,
}

/// Playback direction after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
    Paused,
}

/// Cursor over a [`FrameSequence`] holding the text of the current frame
#[derive(Debug, Clone)]
pub struct FramePlayer {
    sequence: FrameSequence,
    current_frame: usize,
    current: String,
}

impl FramePlayer {
    pub fn new(sequence: FrameSequence) -> Result<Self, PlaybackError> {
        sequence.validate()?;
        let current = sequence
            .checkpoint(0)
            .ok_or(PlaybackError::MissingFirstCheckpoint)?
            .to_string();
        Ok(Self {
            sequence,
            current_frame: 0,
            current,
        })
    }

    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn current_text(&self) -> &str {
        &self.current
    }

    pub fn frame_count(&self) -> usize {
        self.sequence.frame_count()
    }

    /// Move to `frame`.
    ///
    /// Checkpointed frames are used as-is. Moving forward replays from the
    /// current frame; moving backward replays from frame 0.
    pub fn set_frame(&mut self, frame: usize) -> Result<&str, PlaybackError> {
        self.sequence.check_frame(frame)?;

        let text = if let Some(checkpoint) = self.sequence.checkpoint(frame) {
            checkpoint.to_string()
        } else if self.current_frame < frame {
            self.sequence
                .replay(self.current.clone(), self.current_frame, frame)?
        } else {
            let first = self
                .sequence
                .checkpoint(0)
                .ok_or(PlaybackError::MissingFirstCheckpoint)?;
            self.sequence.replay(first.to_string(), 0, frame)?
        };

        self.current_frame = frame;
        self.current = text;
        Ok(&self.current)
    }

    pub fn next_frame(&mut self) -> Result<&str, PlaybackError> {
        let last = self.frame_count() - 1;
        self.set_frame((self.current_frame + 1).min(last))
    }

    pub fn previous_frame(&mut self) -> Result<&str, PlaybackError> {
        self.set_frame(self.current_frame.saturating_sub(1))
    }

    pub fn first_frame(&mut self) -> Result<&str, PlaybackError> {
        self.set_frame(0)
    }

    pub fn last_frame(&mut self) -> Result<&str, PlaybackError> {
        self.set_frame(self.frame_count() - 1)
    }

    /// Advance one frame, handling the end of the sequence according to `mode`
    pub fn step_forward(&mut self, mode: LoopMode) -> Result<Direction, PlaybackError> {
        if self.current_frame + 1 < self.frame_count() {
            self.next_frame()?;
            return Ok(Direction::Forward);
        }
        match mode {
            LoopMode::Loop => {
                self.first_frame()?;
                Ok(Direction::Forward)
            }
            LoopMode::Reflect => {
                self.last_frame()?;
                Ok(Direction::Reverse)
            }
            LoopMode::Once => {
                self.last_frame()?;
                Ok(Direction::Paused)
            }
        }
    }

    /// Go back one frame, handling the start of the sequence according to `mode`
    pub fn step_reverse(&mut self, mode: LoopMode) -> Result<Direction, PlaybackError> {
        if self.current_frame > 0 {
            self.previous_frame()?;
            return Ok(Direction::Reverse);
        }
        match mode {
            LoopMode::Loop => {
                self.last_frame()?;
                Ok(Direction::Reverse)
            }
            LoopMode::Reflect => {
                self.first_frame()?;
                Ok(Direction::Forward)
            }
            LoopMode::Once => {
                self.first_frame()?;
                Ok(Direction::Paused)
            }
        }
    }
}
