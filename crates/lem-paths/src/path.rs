//! The `Path` value type.

use std::fmt;

use lem_colony::Colony;
use lem_core::RoomId;

/// A simple path: starts at the start room, ends at the end room, and never
/// repeats a room.
///
/// Produced by a [`PathFinder`](crate::PathFinder) and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    rooms: Vec<RoomId>,
}

impl Path {
    /// Wrap a room sequence.  Callers guarantee it has at least two rooms and
    /// no repeats.
    pub fn new(rooms: Vec<RoomId>) -> Self {
        debug_assert!(rooms.len() >= 2, "a path joins two distinct rooms");
        Self { rooms }
    }

    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Number of rooms, terminals included.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Number of tunnels traversed (`len - 1`).
    pub fn edge_count(&self) -> usize {
        if self.is_empty() { 0 } else { self.len() - 1 }
    }

    /// `true` for a single tunnel straight from start to end.
    pub fn is_direct(&self) -> bool {
        self.rooms.len() == 2
    }

    /// Rooms strictly between the start and the end.
    pub fn interior(&self) -> &[RoomId] {
        match self.rooms.len() {
            0..=2 => &[],
            n => &self.rooms[1..n - 1],
        }
    }

    /// Number of interior rooms this path shares with `other`'s interior.
    pub fn shared_interior(&self, other: &Path) -> usize {
        let theirs = other.interior();
        self.interior().iter().filter(|r| theirs.contains(r)).count()
    }

    /// Mean tunnel degree of the interior rooms, or `None` for a direct path.
    pub fn mean_interior_degree(&self, colony: &Colony) -> Option<f64> {
        let interior = self.interior();
        if interior.is_empty() {
            return None;
        }
        let total: u64 = interior.iter().map(|&r| u64::from(colony.degree(r))).sum();
        Some(total as f64 / interior.len() as f64)
    }

    /// Borrowing display adapter that prints room names, e.g. `s -> a -> e`.
    pub fn display<'a>(&'a self, colony: &'a Colony) -> PathDisplay<'a> {
        PathDisplay { path: self, colony }
    }
}

/// See [`Path::display`].
pub struct PathDisplay<'a> {
    path:   &'a Path,
    colony: &'a Colony,
}

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &room) in self.path.rooms.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(self.colony.name(room))?;
        }
        Ok(())
    }
}
