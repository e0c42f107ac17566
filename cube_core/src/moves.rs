//! Move tokens, the per-solve move record, and move-sequence compression.

use std::fmt;

use itertools::Itertools;
use thiserror::Error;

use crate::face::Face;

/// The direction of a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    #[must_use]
    pub const fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// One applied quarter turn, as recorded during a solve and as consumed by
/// the actuation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveToken {
    pub face: Face,
    pub direction: Direction,
}

impl MoveToken {
    #[must_use]
    pub const fn clockwise(face: Face) -> MoveToken {
        MoveToken {
            face,
            direction: Direction::Clockwise,
        }
    }

    #[must_use]
    pub const fn counter_clockwise(face: Face) -> MoveToken {
        MoveToken {
            face,
            direction: Direction::CounterClockwise,
        }
    }

    /// The token undoing this one: same face, opposite direction.
    #[must_use]
    pub const fn inverse(self) -> MoveToken {
        MoveToken {
            face: self.face,
            direction: self.direction.inverse(),
        }
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face),
            Direction::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}

/// A move-notation parse failure.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("unknown face letter in move `{0}`")]
    UnknownFace(String),
    #[error("unsupported move suffix in `{0}`, expected nothing, `'`, or `2`")]
    UnknownSuffix(String),
}

/// Parse a whitespace-separated move sequence in face-turn notation.
///
/// `U` is one clockwise quarter turn, `U'` one counter-clockwise quarter turn,
/// and `U2` expands to two clockwise quarter turns.
///
/// # Errors
///
/// Fails on an unknown face letter or an unsupported suffix.
pub fn parse_move_sequence(input: &str) -> Result<Vec<MoveToken>, ParseMoveError> {
    let mut tokens = Vec::new();
    for word in input.split_whitespace() {
        let mut chars = word.chars();
        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(|| ParseMoveError::UnknownFace(word.to_owned()))?;
        match chars.as_str() {
            "" => tokens.push(MoveToken::clockwise(face)),
            "'" => tokens.push(MoveToken::counter_clockwise(face)),
            "2" => {
                tokens.push(MoveToken::clockwise(face));
                tokens.push(MoveToken::clockwise(face));
            }
            _ => return Err(ParseMoveError::UnknownSuffix(word.to_owned())),
        }
    }
    Ok(tokens)
}

/// The ordered, append-only record of the quarter turns applied during one
/// solve invocation.
///
/// A recorder is owned by the `solve()` call that created it and threaded
/// through every rotation, so a solve never observes another solve's moves.
/// Only the rotation mutator itself can append.
#[derive(Debug, Default)]
pub struct MoveRecorder {
    tokens: Vec<MoveToken>,
}

impl MoveRecorder {
    #[must_use]
    pub fn new() -> MoveRecorder {
        MoveRecorder::default()
    }

    pub(crate) fn record_clockwise(&mut self, face: Face) {
        self.tokens.push(MoveToken::clockwise(face));
    }

    #[must_use]
    pub fn tokens(&self) -> &[MoveToken] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Consume the record and return the compressed move sequence.
    #[must_use]
    pub fn into_compressed(self) -> Vec<MoveToken> {
        compress_moves(&self.tokens)
    }
}

/// Collapse redundant runs in a recorded move sequence.
///
/// The record is scanned once, left to right, as maximal runs of identical
/// tokens (same face and same direction). A run of length `n` keeps `n mod 4`
/// tokens, four same-direction quarter turns being a full rotation; a
/// remainder of three is emitted as a single turn in the opposite direction.
/// So a run of 4 vanishes, 3 inverts to 1, 5 keeps 1, and 7 inverts to 1.
///
/// Tokens that become adjacent when a run between them vanishes are not
/// re-combined; compression is a single pass over the record.
#[must_use]
pub fn compress_moves(tokens: &[MoveToken]) -> Vec<MoveToken> {
    let mut compressed = Vec::with_capacity(tokens.len());
    for (token, run) in &tokens.iter().chunk_by(|&&token| token) {
        match run.count() % 4 {
            0 => {}
            3 => compressed.push(token.inverse()),
            keep => compressed.extend(std::iter::repeat_n(token, keep)),
        }
    }
    compressed
}
