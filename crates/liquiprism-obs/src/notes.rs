//! Mapping births to note events.
//!
//! A sound engine is an outside collaborator: this module only decides
//! *which* notes a tick produced. Sending them anywhere is the caller's
//! job.
//!
//! Each face owns one channel. A newborn cell at `(row, col)` becomes a
//! note at `base + row + col`, clamped to the top of the 7-bit range, and
//! only the first `max_notes` births of a face (in row-major order) sound
//! per tick.
//!
//! Constructed via the builder pattern: [`NoteMapper::builder`].

use liquiprism_core::{FaceId, FACE_COUNT};
use liquiprism_space::{Cube, Face};

use crate::births::newborn_cells;

/// Highest value a note number or velocity can take.
pub const MAX_DATA_VALUE: u8 = 127;

/// Highest channel number.
pub const MAX_CHANNEL: u8 = 15;

/// One note triggered by a birth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoteEvent {
    /// Face the birth happened on.
    pub face: FaceId,
    /// Channel assigned to that face.
    pub channel: u8,
    /// Note number, at most [`MAX_DATA_VALUE`].
    pub note: u8,
    /// Note velocity.
    pub velocity: u8,
}

/// Turns newborn cells into [`NoteEvent`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteMapper {
    base_note: u8,
    max_notes: usize,
    velocity: u8,
    channels: [u8; FACE_COUNT],
}

/// Builder for [`NoteMapper`].
///
/// Every field has a default; see [`NoteMapper::builder`].
pub struct NoteMapperBuilder {
    base_note: u8,
    max_notes: usize,
    velocity: u8,
    channels: [u8; FACE_COUNT],
}

impl NoteMapper {
    /// Create a builder with base note 60, two notes per face, velocity
    /// 80 and face `i` on channel `i`.
    pub fn builder() -> NoteMapperBuilder {
        NoteMapperBuilder {
            base_note: 60,
            max_notes: 2,
            velocity: 80,
            channels: [0, 1, 2, 3, 4, 5],
        }
    }

    /// Channel assigned to `face`, or `None` for an unknown face.
    pub fn channel(&self, face: FaceId) -> Option<u8> {
        self.channels.get(face.index()).copied()
    }

    /// Note number for a birth at `(row, col)`.
    pub fn note_for(&self, row: usize, col: usize) -> u8 {
        let offset = row.saturating_add(col);
        let note = usize::from(self.base_note).saturating_add(offset);
        // Clamped to MAX_DATA_VALUE, so the cast is lossless.
        note.min(usize::from(MAX_DATA_VALUE)) as u8
    }

    /// Events for the births on one face.
    ///
    /// Returns nothing for a face id this mapper has no channel for.
    pub fn face_events(&self, face_id: FaceId, face: &Face) -> Vec<NoteEvent> {
        let Some(channel) = self.channel(face_id) else {
            return Vec::new();
        };
        newborn_cells(face)
            .into_iter()
            .take(self.max_notes)
            .map(|(row, col)| NoteEvent {
                face: face_id,
                channel,
                note: self.note_for(row, col),
                velocity: self.velocity,
            })
            .collect()
    }

    /// Events for every face of `cube`, faces in ascending order.
    pub fn cube_events(&self, cube: &Cube) -> Vec<NoteEvent> {
        cube.iter()
            .flat_map(|(id, face)| self.face_events(id, face))
            .collect()
    }
}

impl Default for NoteMapper {
    fn default() -> Self {
        Self {
            base_note: 60,
            max_notes: 2,
            velocity: 80,
            channels: [0, 1, 2, 3, 4, 5],
        }
    }
}

impl NoteMapperBuilder {
    /// Note number for a birth at `(0, 0)` (default: 60).
    pub fn base_note(mut self, note: u8) -> Self {
        self.base_note = note;
        self
    }

    /// Births per face that sound on one tick (default: 2).
    pub fn max_notes(mut self, n: usize) -> Self {
        self.max_notes = n;
        self
    }

    /// Velocity of every event (default: 80).
    pub fn velocity(mut self, velocity: u8) -> Self {
        self.velocity = velocity;
        self
    }

    /// Channel per face, indexed by face id (default: `[0, 1, 2, 3, 4, 5]`).
    pub fn channels(mut self, channels: [u8; FACE_COUNT]) -> Self {
        self.channels = channels;
        self
    }

    /// Build the mapper, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `base_note` or `velocity` exceeds 127
    /// - `velocity` is 0 (a zero-velocity note-on reads as a note-off)
    /// - any channel exceeds 15
    pub fn build(self) -> Result<NoteMapper, String> {
        if self.base_note > MAX_DATA_VALUE {
            return Err(format!(
                "base_note must be <= {MAX_DATA_VALUE}, got {}",
                self.base_note
            ));
        }
        if self.velocity == 0 || self.velocity > MAX_DATA_VALUE {
            return Err(format!(
                "velocity must be in 1..={MAX_DATA_VALUE}, got {}",
                self.velocity
            ));
        }
        if let Some((face, &ch)) = self
            .channels
            .iter()
            .enumerate()
            .find(|&(_, &ch)| ch > MAX_CHANNEL)
        {
            return Err(format!(
                "channel for face {face} must be <= {MAX_CHANNEL}, got {ch}"
            ));
        }

        Ok(NoteMapper {
            base_note: self.base_note,
            max_notes: self.max_notes,
            velocity: self.velocity,
            channels: self.channels,
        })
    }
}
