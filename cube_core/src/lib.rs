#![warn(clippy::pedantic)]

//! Permutation/orientation model of a 3x3 cube.
//!
//! The cube is stored as two independent (permutation, orientation) pairs, one
//! for the 8 corner cubies and one for the 12 edge cubies, rather than as 54
//! facelet colors. A quarter turn is then an O(1) four-element cycle update,
//! and testing for the solved state is an equality check against the identity
//! arrays.
//!
//! The single state-changing primitive is [`CubeState::rotate`], which records
//! every quarter turn it applies into a caller-owned [`MoveRecorder`].
//! [`CubeState::apply_move`] performs the same mutation without recording; it
//! is the entry point for physically detected turns, which are not part of a
//! solve's output.

pub mod face;
pub mod moves;
pub mod state;

pub use face::{Color, Face};
pub use moves::{
    Direction, MoveRecorder, MoveToken, ParseMoveError, compress_moves, parse_move_sequence,
};
pub use state::{CornerId, CubeState, EdgeId, InvalidState, UnsolvableState};
