use grid_util::point::Point;
use core::fmt;
use std::ops::Add;

/// The four cardinal move directions on a 4-connected grid.
///
/// The declaration order (up, down, right, left) is also the order in which
/// neighbours are explored during a search. All moves have the same cost, so
/// this order never changes the length of a found path, but it does decide
/// which of several equally short paths is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// All directions in the fixed exploration order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// The unit (x, y) delta of a single move, with y growing downwards.
    pub fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
            Direction::Right => Point::new(1, 0),
            Direction::Left => Point::new(-1, 0),
        }
    }

    /// Single-letter encoding used in move strings.
    pub fn as_char(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Right => 'R',
            Direction::Left => 'L',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'R' => Ok(Direction::Right),
            'L' => Ok(Direction::Left),
            _ => Err(c),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(self, dir: Direction) -> Point {
        self + dir.delta()
    }
}
