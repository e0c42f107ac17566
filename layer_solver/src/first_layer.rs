//! Phases 1 and 2: the white cross and the white corners.

use cube_core::Face;

use crate::{SolveRun, side};

impl SolveRun<'_> {
    /// Phase 1: place the four edges belonging to slots 0-3 home and
    /// unflipped.
    ///
    /// Each sweep scans all twelve slots and applies the corrective macro for
    /// every first-layer edge found out of place; sweeps repeat until one
    /// finds nothing to fix.
    pub(crate) fn first_layer_edges(&mut self) {
        loop {
            let mut fixed_any = false;
            for slot in 0..12 {
                let piece = self.edge_at(slot);
                if piece.index() >= 4 {
                    continue;
                }
                let flip = self.edge_flip(slot);
                if flip == 0 && piece.index() == usize::from(slot) {
                    continue;
                }
                fixed_any = true;
                self.place_cross_edge(slot, piece.index() as u8, flip);
            }
            if !fixed_any {
                break;
            }
        }
    }

    /// One corrective macro for a first-layer edge, selected by its current
    /// slot and flip.
    fn place_cross_edge(&mut self, slot: u8, piece: u8, flip: u8) {
        match slot {
            // Up ring, wrong slot or flipped in place: dip into the side,
            // carry it around the up face, and restore.
            0..=3 => {
                if flip == 0 {
                    let carry = i32::from((4 + piece - slot) % 4);
                    self.rotate(side(slot), 1);
                    self.rotate(Face::Up, carry);
                    self.rotate(side(slot), -1);
                    self.rotate(Face::Up, -carry);
                } else {
                    let carry = i32::from((3 + piece - slot) % 4);
                    self.rotate(side(slot), 1);
                    self.rotate(Face::Up, carry);
                    self.rotate(side(slot + 1), 1);
                    self.rotate(Face::Up, -carry);
                }
            }
            // Middle ring: each slot has its own escape face per flip.
            4 => {
                if flip == 0 {
                    self.carry_up(piece % 4, Face::Front, -1);
                } else {
                    self.carry_up((3 + piece) % 4, Face::Right, 1);
                }
            }
            5 => {
                if flip == 0 {
                    self.carry_up((2 + piece) % 4, Face::Back, 1);
                } else {
                    self.carry_up((3 + piece) % 4, Face::Right, -1);
                }
            }
            6 => {
                if flip == 0 {
                    self.carry_up((2 + piece) % 4, Face::Back, -1);
                } else {
                    self.carry_up((1 + piece) % 4, Face::Left, 1);
                }
            }
            7 => {
                if flip == 0 {
                    self.carry_up(piece % 4, Face::Front, 1);
                } else {
                    self.carry_up((1 + piece) % 4, Face::Left, -1);
                }
            }
            // Down ring: align under the target and push it straight up, or
            // for a flipped edge step it sideways through the adjacent sides.
            8..=11 => {
                if flip == 0 {
                    self.rotate(Face::Down, i32::from((12 + piece - slot) % 4));
                    self.rotate(side(piece), 2);
                } else {
                    let mut ring = slot - 8;
                    if (4 + piece - ring) % 2 == 0 {
                        self.rotate(Face::Down, 1);
                        ring = (ring + 1) % 4;
                    }
                    match (4 + piece - ring) % 4 {
                        1 => {
                            self.rotate(side(ring), -1);
                            self.rotate(side(ring + 1), 1);
                        }
                        3 => {
                            self.rotate(side(ring), 1);
                            self.rotate(side(ring + 3), -1);
                        }
                        _ => unreachable!("offset forced odd by the pre-rotation"),
                    }
                }
            }
            _ => unreachable!("edge slot out of range"),
        }
    }

    /// Rotate the up face `carry` steps, turn `escape` by `quarter_turns`,
    /// and rotate the up face back.
    fn carry_up(&mut self, carry: u8, escape: Face, quarter_turns: i32) {
        let carry = i32::from(carry);
        self.rotate(Face::Up, carry);
        self.rotate(escape, quarter_turns);
        self.rotate(Face::Up, -carry);
    }

    /// Phase 2: place the four corners belonging to slots 0-3 home and
    /// untwisted. One corner is corrected per iteration.
    pub(crate) fn first_layer_corners(&mut self) {
        loop {
            let Some(slot) = (0..8).find(|&slot| {
                let piece = self.corner_at(slot);
                piece.index() < 4 && !(self.corner_twist(slot) == 0 && piece.index() == usize::from(slot))
            }) else {
                break;
            };
            self.place_first_layer_corner(slot);
        }
    }

    /// Correct one first-layer corner. A corner stuck in the up ring is first
    /// ejected into the down ring; a down-ring corner with its white sticker
    /// facing down is first re-twisted under a free up slot. Both re-dispatch
    /// on the slot the piece provably lands in, then the twist-1/twist-2
    /// insertion runs.
    fn place_first_layer_corner(&mut self, slot: u8) {
        let piece = self.corner_at(slot).index() as u8;
        let mut slot = slot;

        if slot < 4 {
            if self.corner_twist(slot) <= 1 {
                self.rotate(side(slot + 1), -1);
                self.rotate(Face::Down, -1);
                self.rotate(side(slot + 1), 1);
                slot = (slot + 3) % 4 + 4;
            } else {
                self.rotate(side(slot), 1);
                self.rotate(Face::Down, 1);
                self.rotate(side(slot), -1);
                slot = (slot + 1) % 4 + 4;
            }
        } else if self.corner_twist(slot) == 0 {
            let top = (slot + 1) % 4;
            let mut top_rotations = 0;
            while self.corner_at(top).index() < 4 {
                self.rotate(Face::Up, 1);
                top_rotations += 1;
            }
            self.rotate(side(top + 1), -1);
            self.rotate(Face::Down, 2);
            self.rotate(side(top + 1), 1);
            self.rotate(Face::Up, -top_rotations);
            slot = top + 4;
        }

        match self.corner_twist(slot) {
            1 => {
                while self.corner_at((piece + 3) % 4 + 4).index() != usize::from(piece) {
                    self.rotate(Face::Down, 1);
                }
                self.rotate(side(piece + 1), -1);
                self.rotate(Face::Down, 1);
                self.rotate(side(piece + 1), 1);
            }
            2 => {
                while self.corner_at((piece + 1) % 4 + 4).index() != usize::from(piece) {
                    self.rotate(Face::Down, 1);
                }
                self.rotate(side(piece), 1);
                self.rotate(Face::Down, -1);
                self.rotate(side(piece), -1);
            }
            _ => {}
        }
    }
}
