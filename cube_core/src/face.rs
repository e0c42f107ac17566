//! The six face axes and their center-sticker colors.

use std::fmt;

/// One of the six face axes of the cube.
///
/// Each face doubles as the identity of a move token and as the argument to
/// the rotation mutator. The discriminants index the rotation lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Up = 0,
    Down = 1,
    Front = 2,
    Back = 3,
    Left = 4,
    Right = 5,
}

/// The color of a face's center sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
}

impl Face {
    /// All faces in table-index order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// The index of this face into the per-face rotation tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The color of this face's center sticker. The mapping is fixed: the
    /// white face is up and the green face is front.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
        }
    }

    /// The face letter in standard face-turn notation.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    /// Parse a face from its notation letter.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Face> {
        Some(match letter {
            'U' => Face::Up,
            'D' => Face::Down,
            'F' => Face::Front,
            'B' => Face::Back,
            'L' => Face::Left,
            'R' => Face::Right,
            _ => return None,
        })
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
        assert_eq!(Face::from_letter('X'), None);
    }

    #[test]
    fn indices_are_table_order() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }
}
