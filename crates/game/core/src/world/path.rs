use crate::geometry::Coord;

/// Options shaping the cells returned by [`GridMap::path_to`](super::GridMap::path_to).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PathOptions {
    /// Keep the start cell as the first step.
    pub include_start: bool,
    /// Keep the end cell as the last step.
    pub include_end: bool,
}

impl PathOptions {
    /// Steps a walker has to take: everything after the start, up to and
    /// including the destination.
    pub const WALK: Self = Self {
        include_start: false,
        include_end: true,
    };
}

/// A route across the grid, consumed one step at a time.
///
/// Cells are stored back to front so taking the next step is a pop.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Path {
    remaining: Vec<Coord>,
}

impl Path {
    /// Builds a path from steps in walking order.
    pub fn from_steps(mut steps: Vec<Coord>) -> Self {
        steps.reverse();
        Self { remaining: steps }
    }

    /// Takes the next step off the route.
    pub fn next_step(&mut self) -> Option<Coord> {
        self.remaining.pop()
    }

    pub fn peek(&self) -> Option<Coord> {
        self.remaining.last().copied()
    }

    /// Final cell of the route, if any steps remain.
    pub fn destination(&self) -> Option<Coord> {
        self.remaining.first().copied()
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn clear(&mut self) {
        self.remaining.clear();
    }
}
