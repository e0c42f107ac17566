#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines, clippy::cast_possible_truncation)]

//! Layer-by-layer solver for the 3x3 cube.
//!
//! [`solve`] runs seven strictly ordered phases, each driving its own goal
//! predicate over the cube state to a fixed point before the next begins:
//!
//! 1. first-layer edges (white cross)
//! 2. first-layer corners (white face)
//! 3. middle-layer edges
//! 4. last-layer edge orientation (yellow cross)
//! 5. last-layer corner permutation
//! 6. last-layer corner orientation
//! 7. final edge permutation
//!
//! Every phase is composed exclusively of the rotation mutator and the two
//! hand-twist commutators, so the whole solve is captured by the move
//! recorder and compressed at the end. The solver is deterministic and total
//! for any state satisfying the cube's group invariant; states that violate
//! it are rejected up front rather than looping forever.

mod first_layer;
mod last_layer;
mod middle_layer;

use cube_core::{CornerId, CubeState, EdgeId, Face, MoveRecorder, MoveToken, UnsolvableState};
use log::{debug, info};
use thiserror::Error;

/// A solve failure.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SolveError {
    #[error("cube state failed the solvability check: {0}")]
    Unsolvable(#[from] UnsolvableState),
}

/// The four side faces in the ring order the phase macros index them by:
/// `SIDE_RING[i]` is the face between edge slots `i` and `(i + 1) % 4` of the
/// up ring.
pub(crate) const SIDE_RING: [Face; 4] = [Face::Front, Face::Right, Face::Back, Face::Left];

/// The side face at `i` steps around the ring.
pub(crate) fn side(i: u8) -> Face {
    SIDE_RING[usize::from(i % 4)]
}

/// One in-flight solve: the cube being mutated plus the move record owned by
/// this invocation.
pub(crate) struct SolveRun<'a> {
    cube: &'a mut CubeState,
    recorder: MoveRecorder,
}

impl SolveRun<'_> {
    pub(crate) fn new(cube: &mut CubeState) -> SolveRun<'_> {
        SolveRun {
            cube,
            recorder: MoveRecorder::new(),
        }
    }

    pub(crate) fn rotate(&mut self, face: Face, quarter_turns: i32) {
        self.cube.rotate(face, quarter_turns, &mut self.recorder);
    }

    pub(crate) fn right_hand(&mut self, top: Face, side: Face) {
        self.cube.twist_right_hand(top, side, &mut self.recorder);
    }

    pub(crate) fn left_hand(&mut self, top: Face, side: Face) {
        self.cube.twist_left_hand(top, side, &mut self.recorder);
    }

    pub(crate) fn corner_at(&self, slot: u8) -> CornerId {
        self.cube.corner_at(CornerId::new(slot))
    }

    pub(crate) fn corner_twist(&self, slot: u8) -> u8 {
        self.cube.corner_twist(CornerId::new(slot))
    }

    pub(crate) fn corner_home(&self, slot: u8) -> bool {
        self.corner_at(slot) == CornerId::new(slot)
    }

    pub(crate) fn edge_at(&self, slot: u8) -> EdgeId {
        self.cube.edge_at(EdgeId::new(slot))
    }

    pub(crate) fn edge_flip(&self, slot: u8) -> u8 {
        self.cube.edge_flip(EdgeId::new(slot))
    }

    pub(crate) fn edge_home(&self, slot: u8) -> bool {
        self.edge_at(slot) == EdgeId::new(slot)
    }
}

/// Compute an ordered quarter-turn sequence that solves `cube`, leaving the
/// state solved and returning the compressed move record.
///
/// A solved cube yields an empty sequence. The cube's group invariant is
/// validated once at entry; the phases assume solvability and would otherwise
/// not terminate.
///
/// # Errors
///
/// [`SolveError::Unsolvable`] if the state cannot be reached by legal quarter
/// turns from solved (for example after a corrupted `apply_move` stream).
pub fn solve(cube: &mut CubeState) -> Result<Vec<MoveToken>, SolveError> {
    cube.check_solvable()?;

    let mut run = SolveRun::new(cube);
    run.first_layer_edges();
    debug!("first-layer edges placed ({} raw moves)", run.recorder.len());
    run.first_layer_corners();
    debug!(
        "first-layer corners placed ({} raw moves)",
        run.recorder.len()
    );
    run.middle_layer_edges();
    debug!(
        "middle-layer edges placed ({} raw moves)",
        run.recorder.len()
    );
    run.last_layer_cross();
    debug!("last-layer cross oriented ({} raw moves)", run.recorder.len());
    run.last_layer_corner_permutation();
    debug!(
        "last-layer corners permuted ({} raw moves)",
        run.recorder.len()
    );
    run.last_layer_corner_orientation();
    debug!(
        "last-layer corners oriented ({} raw moves)",
        run.recorder.len()
    );
    run.final_edge_cycle();
    debug_assert!(run.cube.is_solved());

    let raw_len = run.recorder.len();
    let moves = run.recorder.into_compressed();
    info!("solved in {} moves ({raw_len} before compression)", moves.len());
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::Direction;

    fn scrambled(seed: u64, length: usize) -> CubeState {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut cube = CubeState::solved();
        for _ in 0..length {
            let face = Face::ALL[rng.usize(..6)];
            let direction = if rng.bool() {
                Direction::Clockwise
            } else {
                Direction::CounterClockwise
            };
            cube.apply_move(face, direction);
        }
        cube
    }

    #[test_log::test]
    fn phases_reach_their_goals_in_order() {
        for seed in 0..25 {
            let mut cube = scrambled(seed, 40);
            let mut run = SolveRun::new(&mut cube);

            run.first_layer_edges();
            assert!(
                (0..4).all(|slot| run.edge_home(slot) && run.edge_flip(slot) == 0),
                "white cross not in place (seed {seed})"
            );

            run.first_layer_corners();
            assert!(
                (0..4).all(|slot| run.corner_home(slot) && run.corner_twist(slot) == 0),
                "white corners not in place (seed {seed})"
            );

            run.middle_layer_edges();
            assert!(
                (4..8).all(|slot| run.edge_home(slot) && run.edge_flip(slot) == 0),
                "middle edges not in place (seed {seed})"
            );

            run.last_layer_cross();
            assert!(
                (8..12).all(|slot| run.edge_flip(slot) == 0),
                "yellow cross not oriented (seed {seed})"
            );

            run.last_layer_corner_permutation();
            assert!(
                (4..8).all(|slot| run.corner_home(slot)),
                "bottom corners not permuted (seed {seed})"
            );

            run.last_layer_corner_orientation();
            assert!(
                (0..8).all(|slot| run.corner_home(slot) && run.corner_twist(slot) == 0),
                "corners not fully solved (seed {seed})"
            );

            run.final_edge_cycle();
            assert!(cube.is_solved(), "cube not solved (seed {seed})");
        }
    }

    #[test_log::test]
    fn oriented_cross_is_left_untouched() {
        let mut cube = CubeState::solved();
        let mut run = SolveRun::new(&mut cube);
        run.last_layer_cross();
        assert!(run.recorder.is_empty());
        assert!(cube.is_solved());
    }

    #[test_log::test]
    fn cross_orientation_is_idempotent() {
        for seed in 0..10 {
            let mut cube = scrambled(seed, 40);
            let mut run = SolveRun::new(&mut cube);
            run.first_layer_edges();
            run.first_layer_corners();
            run.middle_layer_edges();
            run.last_layer_cross();
            let moves_so_far = run.recorder.len();
            run.last_layer_cross();
            assert_eq!(
                run.recorder.len(),
                moves_so_far,
                "re-running the cross phase moved (seed {seed})"
            );
        }
    }
}
