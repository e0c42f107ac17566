//! Phases 4 through 7: orienting and permuting the last layer.

use cube_core::Face;

use crate::{SolveRun, side};

impl SolveRun<'_> {
    fn down_edge_flips(&self) -> [u8; 4] {
        [8, 9, 10, 11].map(|slot| self.edge_flip(slot))
    }

    /// Phase 4: orient the four down-ring edges (the yellow cross).
    ///
    /// The flip pattern is classified as all-flipped, an opposite pair, or an
    /// adjacent pair; each pattern has one fixed macro, the adjacent-pair one
    /// applied after the first macro reduces the other patterns to it.
    pub(crate) fn last_layer_cross(&mut self) {
        let flips = self.down_edge_flips();
        if flips == [0, 0, 0, 0] {
            return;
        }
        if flips == [1, 1, 1, 1] {
            self.rotate(Face::Front, 1);
            self.right_hand(Face::Down, Face::Left);
            self.rotate(Face::Front, -1);
        } else if flips[0] == 0 && flips[2] == 0 {
            self.rotate(Face::Left, 1);
            self.right_hand(Face::Down, Face::Back);
            self.rotate(Face::Left, -1);
        } else if flips[1] == 0 && flips[3] == 0 {
            self.rotate(Face::Front, 1);
            self.right_hand(Face::Down, Face::Left);
            self.rotate(Face::Front, -1);
        }

        let flips = self.down_edge_flips();
        if flips != [0, 0, 0, 0] {
            for ring in 0..4 {
                if flips[usize::from(ring)] == 0 && flips[usize::from((ring + 1) % 4)] == 0 {
                    self.rotate(side(ring + 3), 1);
                    self.right_hand(Face::Down, side(ring + 2));
                    self.right_hand(Face::Down, side(ring + 2));
                    self.rotate(side(ring + 3), -1);
                    break;
                }
            }
        }
    }

    /// Phase 5: permute the down-ring corners into their home slots.
    ///
    /// Rotate the down face up to four times looking for two adjacent
    /// correctly placed corners; cycling the opposite pair with triple
    /// hand-twists then finishes the ring. When no adjacent pair exists a
    /// fixed priming macro is guaranteed to create one.
    pub(crate) fn last_layer_corner_permutation(&mut self) {
        loop {
            let mut ring_solved = false;
            let mut cycled_pair = false;
            for _ in 0..4 {
                if (4..8).all(|slot| self.corner_home(slot)) {
                    ring_solved = true;
                    break;
                }
                let adjacent_pair = (0..4)
                    .find(|&ring| self.corner_home(4 + ring) && self.corner_home(4 + (ring + 1) % 4));
                if let Some(ring) = adjacent_pair {
                    let right_side = side(ring + 3);
                    for _ in 0..3 {
                        self.right_hand(Face::Down, right_side);
                    }
                    let left_side = side(ring);
                    for _ in 0..3 {
                        self.left_hand(Face::Down, left_side);
                    }
                    cycled_pair = true;
                    break;
                }
                self.rotate(Face::Down, 1);
            }
            if ring_solved {
                break;
            }
            if !cycled_pair {
                for _ in 0..3 {
                    self.right_hand(Face::Down, Face::Left);
                }
                for _ in 0..3 {
                    self.left_hand(Face::Down, Face::Front);
                }
            }
        }
    }

    /// Phase 6: orient the down-ring corners.
    ///
    /// Each corner is brought into slot 4 in turn and hand-twisted until it
    /// sits home and untwisted; the intermediate states scramble the first
    /// layer but the full four-corner cycle restores it.
    pub(crate) fn last_layer_corner_orientation(&mut self) {
        for target in 4u8..8 {
            while !(self.corner_at(4).index() == usize::from(target) && self.corner_twist(4) == 0) {
                self.right_hand(Face::Up, Face::Right);
            }
            self.rotate(Face::Down, -1);
        }
    }

    /// Phase 7: permute the down-ring edges, completing the solve.
    ///
    /// With everything else solved the four down edges are either home, a
    /// 3-cycle with one fixed edge, or a fixed-point-free displacement; the
    /// latter is primed into a 3-cycle first, then one of two mirrored
    /// twelve-twist macros rotates the cycle out.
    pub(crate) fn final_edge_cycle(&mut self) {
        if (8..12).all(|slot| self.edge_home(slot)) {
            return;
        }
        if (8..12).all(|slot| !self.edge_home(slot)) {
            self.right_hand(Face::Down, Face::Left);
            self.left_hand(Face::Down, Face::Right);
            for _ in 0..5 {
                self.right_hand(Face::Down, Face::Left);
            }
            for _ in 0..5 {
                self.left_hand(Face::Down, Face::Right);
            }
        }
        for ring in 0..4 {
            if self.edge_home(8 + ring) {
                let right_side = side(ring + 3);
                let left_side = side(ring + 1);
                if self.edge_at(8 + (2 + ring) % 4).index() == usize::from(8 + (3 + ring) % 4) {
                    self.left_hand(Face::Down, left_side);
                    self.right_hand(Face::Down, right_side);
                    for _ in 0..5 {
                        self.left_hand(Face::Down, left_side);
                    }
                    for _ in 0..5 {
                        self.right_hand(Face::Down, right_side);
                    }
                } else if self.edge_at(8 + (2 + ring) % 4).index() == usize::from(8 + (1 + ring) % 4)
                {
                    self.right_hand(Face::Down, right_side);
                    self.left_hand(Face::Down, left_side);
                    for _ in 0..5 {
                        self.right_hand(Face::Down, right_side);
                    }
                    for _ in 0..5 {
                        self.left_hand(Face::Down, left_side);
                    }
                }
                break;
            }
        }
    }
}
