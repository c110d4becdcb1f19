/// A cell on the board in Little-Endian Rank-File order: `x` counts files from the left,
/// `y` counts ranks from the bottom, and `(0, 0)` is bit 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Position {
            x: index % width,
            y: index / width,
        }
    }

    pub fn to_index(&self, width: usize) -> usize {
        self.y * width + self.x
    }

    pub fn is_valid(&self, width: usize, height: usize) -> bool {
        self.x < width && self.y < height
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
