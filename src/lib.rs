//! # grid_bfs
//!
//! A grid-based shortest-path system for uniform-cost 4-connected grids.
//! Implements [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search)
//! with labelled edges so that a query yields both the visited cells and the
//! step-by-step moves (`U`, `D`, `R`, `L`) realizing them. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
mod bfs;
pub mod direction;

pub use crate::direction::Direction;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use thiserror::Error;

use crate::bfs::bfs_labelled;
use core::fmt;
use std::str::FromStr;

/// Contract violations on [find_path](PathingGrid::find_path) inputs. A
/// missing path is not an error and is reported as [None] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("{point} is out of bounds on a {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
}

/// Failures when reading a grid from its ASCII form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseGridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unrecognized cell character {0:?}")]
    BadCell(char),
}

/// A shortest path found by [find_path](PathingGrid::find_path): the ordered
/// cells from start to goal together with the moves taken between them. The
/// move sequence is always one shorter than the cell sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridPath {
    pub cells: Vec<Point>,
    pub moves: Vec<Direction>,
}

impl GridPath {
    /// Number of moves, which equals the graph distance between the endpoints.
    pub fn distance(&self) -> usize {
        self.moves.len()
    }

    /// The moves encoded as a string of `U`/`D`/`R`/`L` letters.
    pub fn moves_string(&self) -> String {
        self.moves.iter().map(|m| m.as_char()).collect()
    }
}

/// Replays a move sequence from a starting point, yielding every visited
/// cell. A path returned by [find_path](PathingGrid::find_path) satisfies
/// `moves_to_path(path.cells[0], &path.moves) == path.cells`.
pub fn moves_to_path(start: Point, moves: &[Direction]) -> Vec<Point> {
    let mut path = Vec::with_capacity(moves.len() + 1);
    let mut current = start;
    path.push(current);
    for &dir in moves {
        current = current + dir;
        path.push(current);
    }
    path
}

/// [PathingGrid] maintains information about components using a [UnionFind] structure in addition to the raw
/// [bool] grid values in the [BoolGrid] that determine whether a space is occupied ([true]) or
/// empty ([false]). Implements [Grid] by building on [BoolGrid].
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl PathingGrid {
    fn get_neighbours(&self, point: Point) -> Vec<Point> {
        Direction::CARDINAL
            .into_iter()
            .map(|dir| point + dir)
            .filter(|p| self.can_move_to(*p))
            .collect::<Vec<Point>>()
    }
    fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.grid.get(pos.x as usize, pos.y as usize)
    }
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }
    /// The open neighbours of a cell in the fixed [Direction::CARDINAL]
    /// order, each labelled with the move reaching it. The order decides
    /// which of several equally short paths a search returns.
    fn pathfinding_neighborhood(&self, pos: &Point) -> Vec<(Point, Direction)> {
        Direction::CARDINAL
            .into_iter()
            .map(|dir| (*pos + dir, dir))
            .filter(|&(p, _)| self.can_move_to(p))
            .collect::<Vec<_>>()
    }
    fn check_bounds(&self, point: Point) -> Result<(), PathError> {
        if self.in_bounds(point.x, point.y) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                point,
                width: self.width(),
                height: self.height(),
            })
        }
    }
    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }
    /// Checks if start and goal are on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            if self.components.equiv(start_ix, goal_ix) {
                false
            } else {
                info!("{} and {} are not equivalent components", start_ix, goal_ix);
                true
            }
        } else {
            true
        }
    }
    /// Computes a shortest path from start to goal using BFS, returning the
    /// visited cells together with the moves realizing them, or [None] if
    /// the goal cannot be reached. An out-of-bounds start or goal is
    /// rejected with [PathError::OutOfBounds] before anything else happens.
    ///
    /// A query from a cell to itself succeeds with a singleton path and no
    /// moves regardless of the cell contents. Any other query whose start
    /// or goal is occupied reports no path, since an occupied cell belongs
    /// to no component. Components must be up to date when this is called;
    /// see [update](Self::update).
    pub fn find_path(&self, start: Point, goal: Point) -> Result<Option<GridPath>, PathError> {
        self.check_bounds(start)?;
        self.check_bounds(goal)?;
        if start == goal {
            return Ok(Some(GridPath {
                cells: vec![start],
                moves: Vec::new(),
            }));
        }
        if self.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(None);
        }
        info!("{} is reachable from {}, computing path", goal, start);
        let result = bfs_labelled(
            &start,
            |node| self.pathfinding_neighborhood(node),
            |node| *node == goal,
        );
        Ok(result.map(|(cells, moves)| GridPath { cells, moves }))
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if !self.grid.get(x, y) {
                    let parent_ix = self.grid.get_ix(x, y);
                    let point = Point::new(x as i32, y as i32);
                    let neighbours = vec![
                        Point::new(point.x, point.y + 1),
                        Point::new(point.x + 1, point.y),
                    ]
                    .into_iter()
                    .filter(|p| self.grid.point_in_bounds(*p) && !self.grid.get_point(*p))
                    .map(|p| self.grid.get_ix(p.x as usize, p.y as usize))
                    .collect::<Vec<usize>>();
                    for ix in neighbours {
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                write!(f, "{}", if self.grid.get(x, y) { '#' } else { '-' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for PathingGrid {
    type Err = ParseGridError;

    /// Reads a grid from rows of `-` (empty) and `#` (occupied) characters,
    /// one line per row, and generates its components. All rows must have
    /// the same width.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().filter(|line| !line.is_empty()).collect();
        let expected = rows.first().map_or(0, |row| row.chars().count());
        if expected == 0 {
            return Err(ParseGridError::Empty);
        }
        let mut grid = PathingGrid::new(expected, rows.len(), false);
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != expected {
                return Err(ParseGridError::RaggedRow { row: y, len, expected });
            }
            for (x, c) in row.chars().enumerate() {
                match c {
                    '-' => {}
                    '#' => grid.grid.set(x, y, true),
                    _ => return Err(ParseGridError::BadCell(c)),
                }
            }
        }
        grid.generate_components();
        Ok(grid)
    }
}

impl Grid<bool> for PathingGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        PathingGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        }
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        let p = Point::new(x as i32, y as i32);
        if self.grid.get(x, y) != blocked && blocked {
            self.components_dirty = true;
        } else {
            for p in self.get_neighbours(p) {
                self.components.union(
                    self.grid.get_ix(x, y),
                    self.grid.get_ix(p.x as usize, p.y as usize),
                );
            }
        }
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
