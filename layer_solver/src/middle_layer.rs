//! Phase 3: the middle-layer edges.

use cube_core::Face;

use crate::{SolveRun, side};

/// Down-ring staging slot for a middle edge, indexed by [flip][piece ring
/// index]. The edge is rotated here before the two-twist insertion so that
/// the insertion leaves it unflipped.
const STAGING_SLOTS: [[u8; 4]; 2] = [[11, 11, 9, 9], [10, 8, 8, 10]];

impl SolveRun<'_> {
    /// Phase 3: place the four edges belonging to slots 4-7 home and
    /// unflipped.
    ///
    /// Slots are swept from 11 down to 0. A middle edge stuck in the middle
    /// ring is ejected into the down ring with a twist pair; a down-ring edge
    /// is staged under its target and inserted with the twist pair matching
    /// its approach direction. The first layer holds slots 0-3, so a middle
    /// edge can never be found there.
    pub(crate) fn middle_layer_edges(&mut self) {
        loop {
            let mut fixed_any = false;
            for slot in (0..12).rev() {
                let piece = self.edge_at(slot);
                if !(4..8).contains(&piece.index()) {
                    continue;
                }
                if self.edge_flip(slot) == 0 && piece.index() == usize::from(slot) {
                    continue;
                }
                let ring = piece.ring_index();
                match slot {
                    4..=7 => {
                        fixed_any = true;
                        self.right_hand(Face::Down, side(slot - 4));
                        self.left_hand(Face::Down, side(slot - 3));
                    }
                    8..=11 => {
                        fixed_any = true;
                        let staging = STAGING_SLOTS[usize::from(self.edge_flip(slot))]
                            [usize::from(ring)];
                        self.rotate(Face::Down, i32::from((4 + staging - slot) % 4));
                        match (12 + piece.index() as u8 - staging) % 4 {
                            1 => {
                                self.left_hand(Face::Down, side(ring + 1));
                                self.right_hand(Face::Down, side(ring));
                            }
                            2 => {
                                self.right_hand(Face::Down, side(ring));
                                self.left_hand(Face::Down, side(ring + 1));
                            }
                            _ => {}
                        }
                    }
                    _ => {}
                }
            }
            if !fixed_any {
                break;
            }
        }
    }
}
