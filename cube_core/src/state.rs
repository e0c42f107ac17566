//! The cube state and its single mutator, the quarter-turn rotation.

use thiserror::Error;

use crate::face::Face;
use crate::moves::{Direction, MoveRecorder};

/// Identifies one of the 8 corner cubies, and equally the slot that is its
/// home. Slots 0-3 ring the up face, slots 4-7 ring the down face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerId(u8);

/// Identifies one of the 12 edge cubies, and equally the slot that is its
/// home. Slots 0-3 ring the up face, 4-7 are the middle layer, 8-11 ring the
/// down face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(u8);

impl CornerId {
    pub const COUNT: usize = 8;

    /// # Panics
    ///
    /// Panics if `index >= 8`. An out-of-range id is unrepresentable.
    #[must_use]
    pub const fn new(index: u8) -> CornerId {
        assert!(index < 8);
        CornerId(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Position of this slot within its 4-slot layer ring.
    #[must_use]
    pub const fn ring_index(self) -> u8 {
        self.0 % 4
    }
}

impl EdgeId {
    pub const COUNT: usize = 12;

    /// # Panics
    ///
    /// Panics if `index >= 12`. An out-of-range id is unrepresentable.
    #[must_use]
    pub const fn new(index: u8) -> EdgeId {
        assert!(index < 12);
        EdgeId(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Position of this slot within its 4-slot layer ring.
    #[must_use]
    pub const fn ring_index(self) -> u8 {
        self.0 % 4
    }
}

/// A structurally malformed state handed to [`CubeState::from_parts`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidState {
    #[error("corner positions are not a permutation of 0..8")]
    CornerPermutation,
    #[error("edge positions are not a permutation of 0..12")]
    EdgePermutation,
    #[error("corner orientation {0} out of range 0..3")]
    CornerOrientation(u8),
    #[error("edge orientation {0} out of range 0..2")]
    EdgeOrientation(u8),
}

/// A structurally valid state that no sequence of legal quarter turns can
/// reach from solved. Solving such a state would never terminate, so it is
/// rejected up front instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnsolvableState {
    #[error("corner twist sum is {0} (mod 3), expected 0")]
    CornerTwist(u8),
    #[error("edge flip sum is odd")]
    EdgeFlip,
    #[error("corner and edge permutation parities differ")]
    PermutationParity,
}

// Per-face slot 4-cycles, one permutation step per clockwise quarter turn.
// Orientation deltas attach to the traversed cycle edge, not to the
// destination slot.
const CORNER_CYCLES: [[CornerId; 4]; 6] = [
    [CornerId(1), CornerId(2), CornerId(3), CornerId(0)], // U
    [CornerId(7), CornerId(6), CornerId(5), CornerId(4)], // D
    [CornerId(3), CornerId(7), CornerId(4), CornerId(0)], // F
    [CornerId(5), CornerId(6), CornerId(2), CornerId(1)], // B
    [CornerId(6), CornerId(7), CornerId(3), CornerId(2)], // L
    [CornerId(4), CornerId(5), CornerId(1), CornerId(0)], // R
];

const EDGE_CYCLES: [[EdgeId; 4]; 6] = [
    [EdgeId(1), EdgeId(2), EdgeId(3), EdgeId(0)],   // U
    [EdgeId(11), EdgeId(10), EdgeId(9), EdgeId(8)], // D
    [EdgeId(7), EdgeId(8), EdgeId(4), EdgeId(0)],   // F
    [EdgeId(5), EdgeId(10), EdgeId(6), EdgeId(2)],  // B
    [EdgeId(6), EdgeId(11), EdgeId(7), EdgeId(3)],  // L
    [EdgeId(4), EdgeId(9), EdgeId(5), EdgeId(1)],   // R
];

const CORNER_TWIST_DELTAS: [[u8; 4]; 6] = [
    [0, 0, 0, 0], // U
    [0, 0, 0, 0], // D
    [2, 1, 2, 1], // F
    [1, 2, 1, 2], // B
    [1, 2, 1, 2], // L
    [1, 2, 1, 2], // R
];

// Only the two side axes invert edge chirality.
const EDGE_FLIPS: [bool; 6] = [false, false, false, false, true, true];

/// The permutation/orientation representation of all 8 corner and 12 edge
/// cubies.
///
/// `corner_perm[i]` is the corner currently occupying slot `i` and
/// `corner_ori[i]` its twist relative to home, mod 3; the edge arrays are the
/// same with flips mod 2. Solved means every position equals its index and
/// every orientation is zero.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CubeState {
    corner_perm: [CornerId; 8],
    corner_ori: [u8; 8],
    edge_perm: [EdgeId; 12],
    edge_ori: [u8; 12],
}

impl Default for CubeState {
    fn default() -> Self {
        CubeState::solved()
    }
}

impl CubeState {
    /// The solved identity state.
    #[must_use]
    pub const fn solved() -> CubeState {
        CubeState {
            corner_perm: [
                CornerId(0),
                CornerId(1),
                CornerId(2),
                CornerId(3),
                CornerId(4),
                CornerId(5),
                CornerId(6),
                CornerId(7),
            ],
            corner_ori: [0; 8],
            edge_perm: [
                EdgeId(0),
                EdgeId(1),
                EdgeId(2),
                EdgeId(3),
                EdgeId(4),
                EdgeId(5),
                EdgeId(6),
                EdgeId(7),
                EdgeId(8),
                EdgeId(9),
                EdgeId(10),
                EdgeId(11),
            ],
            edge_ori: [0; 12],
        }
    }

    /// Build a state from raw permutation and orientation arrays, validating
    /// structure only (true permutations, orientations in range). Whether the
    /// state is reachable by legal turns is checked separately by
    /// [`CubeState::check_solvable`].
    ///
    /// # Errors
    ///
    /// Fails if either position array is not a permutation or an orientation
    /// is out of range.
    pub fn from_parts(
        corner_perm: [u8; 8],
        corner_ori: [u8; 8],
        edge_perm: [u8; 12],
        edge_ori: [u8; 12],
    ) -> Result<CubeState, InvalidState> {
        let mut seen = [false; 8];
        for &position in &corner_perm {
            if position >= 8 || seen[position as usize] {
                return Err(InvalidState::CornerPermutation);
            }
            seen[position as usize] = true;
        }
        let mut seen = [false; 12];
        for &position in &edge_perm {
            if position >= 12 || seen[position as usize] {
                return Err(InvalidState::EdgePermutation);
            }
            seen[position as usize] = true;
        }
        if let Some(&twist) = corner_ori.iter().find(|&&twist| twist >= 3) {
            return Err(InvalidState::CornerOrientation(twist));
        }
        if let Some(&flip) = edge_ori.iter().find(|&&flip| flip >= 2) {
            return Err(InvalidState::EdgeOrientation(flip));
        }
        Ok(CubeState {
            corner_perm: corner_perm.map(CornerId),
            corner_ori,
            edge_perm: edge_perm.map(EdgeId),
            edge_ori,
        })
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == CubeState::solved()
    }

    /// The corner currently occupying `slot`.
    #[must_use]
    pub fn corner_at(&self, slot: CornerId) -> CornerId {
        self.corner_perm[slot.index()]
    }

    /// The twist of the corner in `slot`, mod 3.
    #[must_use]
    pub fn corner_twist(&self, slot: CornerId) -> u8 {
        self.corner_ori[slot.index()]
    }

    /// The edge currently occupying `slot`.
    #[must_use]
    pub fn edge_at(&self, slot: EdgeId) -> EdgeId {
        self.edge_perm[slot.index()]
    }

    /// The flip of the edge in `slot`, mod 2.
    #[must_use]
    pub fn edge_flip(&self, slot: EdgeId) -> u8 {
        self.edge_ori[slot.index()]
    }

    /// Rotate `face` by `quarter_turns` quarter turns, clockwise for positive
    /// counts, recording one clockwise token per applied turn. The count is
    /// normalized into 0..4, so a multiple of four (including zero) is a
    /// no-op that records nothing.
    pub fn rotate(&mut self, face: Face, quarter_turns: i32, recorder: &mut MoveRecorder) {
        for _ in 0..quarter_turns.rem_euclid(4) {
            recorder.record_clockwise(face);
            self.turn_once(face);
        }
    }

    /// Mutate exactly as `rotate(face, ±1)` would, without recording.
    ///
    /// This is the actuation layer's entry point for physically detected
    /// quarter turns, which are not part of a solve's output.
    pub fn apply_move(&mut self, face: Face, direction: Direction) {
        let turns = match direction {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => 3,
        };
        for _ in 0..turns {
            self.turn_once(face);
        }
    }

    /// One clockwise quarter turn: shift the face's corner and edge 4-cycles
    /// a single step, applying the per-cycle-edge orientation deltas.
    fn turn_once(&mut self, face: Face) {
        let cycle = &CORNER_CYCLES[face.index()];
        let deltas = &CORNER_TWIST_DELTAS[face.index()];
        let first_piece = self.corner_perm[cycle[0].index()];
        let first_twist = self.corner_ori[cycle[0].index()];
        for j in 0..3 {
            self.corner_perm[cycle[j].index()] = self.corner_perm[cycle[j + 1].index()];
            self.corner_ori[cycle[j].index()] =
                (self.corner_ori[cycle[j + 1].index()] + deltas[j]) % 3;
        }
        self.corner_perm[cycle[3].index()] = first_piece;
        self.corner_ori[cycle[3].index()] = (first_twist + deltas[3]) % 3;

        let cycle = &EDGE_CYCLES[face.index()];
        let flip = u8::from(EDGE_FLIPS[face.index()]);
        let first_piece = self.edge_perm[cycle[0].index()];
        let first_flip = self.edge_ori[cycle[0].index()];
        for j in 0..3 {
            self.edge_perm[cycle[j].index()] = self.edge_perm[cycle[j + 1].index()];
            self.edge_ori[cycle[j].index()] = self.edge_ori[cycle[j + 1].index()] ^ flip;
        }
        self.edge_perm[cycle[3].index()] = first_piece;
        self.edge_ori[cycle[3].index()] = first_flip ^ flip;
    }

    /// Right-hand twist: a four-move commutator used as an atomic building
    /// block by the solver phases.
    pub fn twist_right_hand(&mut self, top: Face, side: Face, recorder: &mut MoveRecorder) {
        self.rotate(side, 1, recorder);
        self.rotate(top, 1, recorder);
        self.rotate(side, -1, recorder);
        self.rotate(top, -1, recorder);
    }

    /// Left-hand twist, the mirror of [`CubeState::twist_right_hand`].
    pub fn twist_left_hand(&mut self, top: Face, side: Face, recorder: &mut MoveRecorder) {
        self.rotate(side, -1, recorder);
        self.rotate(top, -1, recorder);
        self.rotate(side, 1, recorder);
        self.rotate(top, 1, recorder);
    }

    /// Verify the group invariant every state reachable by legal quarter
    /// turns satisfies: corner twist sum divisible by 3, edge flip sum even,
    /// and matching corner/edge permutation parity.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn check_solvable(&self) -> Result<(), UnsolvableState> {
        let twist_sum = self.corner_ori.iter().sum::<u8>() % 3;
        if twist_sum != 0 {
            return Err(UnsolvableState::CornerTwist(twist_sum));
        }
        if self.edge_ori.iter().sum::<u8>() % 2 != 0 {
            return Err(UnsolvableState::EdgeFlip);
        }
        let corner_parity = permutation_parity(self.corner_perm.map(CornerId::index));
        let edge_parity = permutation_parity(self.edge_perm.map(EdgeId::index));
        if corner_parity != edge_parity {
            return Err(UnsolvableState::PermutationParity);
        }
        Ok(())
    }
}

fn permutation_parity<const N: usize>(positions: [usize; N]) -> bool {
    let mut inversions = 0;
    for i in 0..N {
        for j in i + 1..N {
            if positions[i] > positions[j] {
                inversions += 1;
            }
        }
    }
    inversions % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrambled() -> CubeState {
        let mut cube = CubeState::solved();
        let mut recorder = MoveRecorder::new();
        cube.rotate(Face::Front, 1, &mut recorder);
        cube.rotate(Face::Right, 2, &mut recorder);
        cube.rotate(Face::Up, -1, &mut recorder);
        cube.rotate(Face::Left, 1, &mut recorder);
        cube
    }

    #[test]
    fn four_turns_are_the_identity() {
        for face in Face::ALL {
            let start = scrambled();
            let mut cube = start.clone();
            let mut recorder = MoveRecorder::new();
            for _ in 0..4 {
                cube.rotate(face, 1, &mut recorder);
            }
            assert_eq!(cube, start, "four {face} turns changed the state");
        }
    }

    #[test]
    fn clockwise_then_counter_clockwise_is_the_identity() {
        for face in Face::ALL {
            let start = scrambled();
            let mut cube = start.clone();
            let mut recorder = MoveRecorder::new();
            cube.rotate(face, 1, &mut recorder);
            cube.rotate(face, -1, &mut recorder);
            assert_eq!(cube, start);
        }
    }

    #[test]
    fn rotation_count_is_normalized() {
        let mut expected = CubeState::solved();
        let mut recorder = MoveRecorder::new();
        expected.rotate(Face::Back, 3, &mut recorder);
        assert_eq!(recorder.len(), 3);

        let mut cube = CubeState::solved();
        let mut recorder = MoveRecorder::new();
        cube.rotate(Face::Back, -5, &mut recorder);
        assert_eq!(cube, expected);
        assert_eq!(recorder.len(), 3);

        cube.rotate(Face::Back, 0, &mut recorder);
        cube.rotate(Face::Back, 4, &mut recorder);
        assert_eq!(cube, expected);
        assert_eq!(recorder.len(), 3, "no-op rotations must record nothing");
    }

    #[test]
    fn apply_move_matches_rotate_without_recording() {
        let mut via_rotate = CubeState::solved();
        let mut recorder = MoveRecorder::new();
        via_rotate.rotate(Face::Right, -1, &mut recorder);
        assert_eq!(recorder.len(), 3);

        let mut via_apply = CubeState::solved();
        via_apply.apply_move(Face::Right, Direction::CounterClockwise);
        assert_eq!(via_apply, via_rotate);
    }

    #[test]
    fn orientation_sums_stay_invariant_under_random_turns() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut cube = CubeState::solved();
        for _ in 0..200 {
            let face = Face::ALL[rng.usize(..6)];
            let direction = if rng.bool() {
                Direction::Clockwise
            } else {
                Direction::CounterClockwise
            };
            cube.apply_move(face, direction);
            cube.check_solvable().unwrap();
        }
    }

    #[test]
    fn from_parts_validates_structure() {
        let solved = CubeState::solved();
        let identity_corners: [u8; 8] = std::array::from_fn(|i| i as u8);
        let identity_edges: [u8; 12] = std::array::from_fn(|i| i as u8);

        assert_eq!(
            CubeState::from_parts(identity_corners, [0; 8], identity_edges, [0; 12]),
            Ok(solved)
        );
        assert_eq!(
            CubeState::from_parts([0; 8], [0; 8], identity_edges, [0; 12]),
            Err(InvalidState::CornerPermutation)
        );
        assert_eq!(
            CubeState::from_parts(
                identity_corners,
                [3, 0, 0, 0, 0, 0, 0, 0],
                identity_edges,
                [0; 12]
            ),
            Err(InvalidState::CornerOrientation(3))
        );
        assert_eq!(
            CubeState::from_parts(identity_corners, [0; 8], identity_edges, [2; 12]),
            Err(InvalidState::EdgeOrientation(2))
        );
    }

    #[test]
    fn check_solvable_rejects_injected_states() {
        let identity_corners: [u8; 8] = std::array::from_fn(|i| i as u8);
        let identity_edges: [u8; 12] = std::array::from_fn(|i| i as u8);

        let twisted = CubeState::from_parts(
            identity_corners,
            [1, 0, 0, 0, 0, 0, 0, 0],
            identity_edges,
            [0; 12],
        )
        .unwrap();
        assert_eq!(
            twisted.check_solvable(),
            Err(UnsolvableState::CornerTwist(1))
        );

        let flipped = CubeState::from_parts(
            identity_corners,
            [0; 8],
            identity_edges,
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        )
        .unwrap();
        assert_eq!(flipped.check_solvable(), Err(UnsolvableState::EdgeFlip));

        let swapped = CubeState::from_parts(
            [1, 0, 2, 3, 4, 5, 6, 7],
            [0; 8],
            identity_edges,
            [0; 12],
        )
        .unwrap();
        assert_eq!(
            swapped.check_solvable(),
            Err(UnsolvableState::PermutationParity)
        );

        scrambled().check_solvable().unwrap();
    }
}
