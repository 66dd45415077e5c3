use serde::{Deserialize, Serialize};
use std::fmt;

/// The colour of a player's piece. Black is always Mr X; every other colour is a detective.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Colour {
    Black,
    Blue,
    Green,
    Red,
    White,
    Yellow,
}

impl Colour {
    pub fn is_mr_x(self) -> bool {
        self == Colour::Black
    }

    pub fn is_detective(self) -> bool {
        !self.is_mr_x()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Colour::Black => "Black",
            Colour::Blue => "Blue",
            Colour::Green => "Green",
            Colour::Red => "Red",
            Colour::White => "White",
            Colour::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}
