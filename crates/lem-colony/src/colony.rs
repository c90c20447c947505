//! Colony representation and builder.
//!
//! # Data layout
//!
//! Rooms are stored in a dense table indexed by [`RoomId`] (declaration
//! order).  Traversal adjacency uses **Compressed Sparse Row (CSR)** format:
//! the neighbours of room `r` occupy
//!
//! ```text
//! adjacency[ adjacency_start[r] .. adjacency_start[r+1] ]
//! ```
//!
//! Neighbour lists are de-duplicated and exclude self-loops, so repeated
//! tunnel lines between the same pair behave as one connection.  The raw
//! tunnel list is kept as declared; [`Colony::degree`] counts every tunnel
//! line touching a room.

use rustc_hash::FxHashMap;

use lem_core::{Point, RoomId};

use crate::{ColonyError, ColonyResult};

// ── Room ──────────────────────────────────────────────────────────────────────

/// A room (graph vertex) with its declared coordinates and terminal role.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub name:     String,
    pub pos:      Point,
    pub is_start: bool,
    pub is_end:   bool,
}

// ── Colony ────────────────────────────────────────────────────────────────────

/// The parsed colony: rooms, tunnels, ant count, start/end designation, and
/// the verbatim input lines.
///
/// Immutable after construction.  Build one with [`ColonyBuilder`] or
/// [`parse_colony`](crate::parse_colony).
#[derive(Debug, Clone)]
pub struct Colony {
    rooms:           Vec<Room>,
    name_index:      FxHashMap<String, RoomId>,
    tunnels:         Vec<(RoomId, RoomId)>,
    adjacency_start: Vec<u32>,
    adjacency:       Vec<RoomId>,
    degree:          Vec<u32>,
    ant_count:       u32,
    start:           RoomId,
    end:             RoomId,
    input:           Vec<String>,
}

impl Colony {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn tunnel_count(&self) -> usize {
        self.tunnels.len()
    }

    pub fn ant_count(&self) -> u32 {
        self.ant_count
    }

    pub fn start(&self) -> RoomId {
        self.start
    }

    pub fn end(&self) -> RoomId {
        self.end
    }

    /// `true` for the start and end rooms, which are exempt from occupancy.
    #[inline]
    pub fn is_terminal(&self, room: RoomId) -> bool {
        room == self.start || room == self.end
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    #[inline]
    pub fn name(&self, id: RoomId) -> &str {
        &self.rooms[id.index()].name
    }

    #[inline]
    pub fn pos(&self, id: RoomId) -> Point {
        self.rooms[id.index()].pos
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.name_index.get(name).copied()
    }

    /// All rooms in declaration order, paired with their ids.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        self.rooms
            .iter()
            .enumerate()
            .map(|(i, r)| (RoomId(i as u32), r))
    }

    /// Tunnels exactly as declared (duplicates and self-loops included).
    pub fn tunnels(&self) -> &[(RoomId, RoomId)] {
        &self.tunnels
    }

    /// The verbatim input lines, for echoing.
    pub fn input(&self) -> &[String] {
        &self.input
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Distinct neighbours of `room`, in first-declared tunnel order.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> &[RoomId] {
        let start = self.adjacency_start[room.index()] as usize;
        let end   = self.adjacency_start[room.index() + 1] as usize;
        &self.adjacency[start..end]
    }

    /// Number of tunnel lines touching `room`.
    #[inline]
    pub fn degree(&self, room: RoomId) -> u32 {
        self.degree[room.index()]
    }
}

// ── ColonyBuilder ─────────────────────────────────────────────────────────────

/// Construct a [`Colony`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use lem_core::Point;
/// use lem_colony::ColonyBuilder;
///
/// let mut b = ColonyBuilder::new(3);
/// let s = b.add_room("start", Point::new(0, 0)).unwrap();
/// let e = b.add_room("end", Point::new(1, 0)).unwrap();
/// b.mark_start(s).unwrap();
/// b.mark_end(e).unwrap();
/// b.add_tunnel(s, e);
/// let colony = b.build().unwrap();
/// assert_eq!(colony.neighbors(s), &[e]);
/// ```
#[derive(Debug, Default)]
pub struct ColonyBuilder {
    rooms:      Vec<Room>,
    name_index: FxHashMap<String, RoomId>,
    tunnels:    Vec<(RoomId, RoomId)>,
    ant_count:  u32,
    start:      Option<RoomId>,
    end:        Option<RoomId>,
    input:      Vec<String>,
}

impl ColonyBuilder {
    pub fn new(ant_count: u32) -> Self {
        Self { ant_count, ..Self::default() }
    }

    /// Add a room and return its `RoomId` (sequential from 0).
    pub fn add_room(&mut self, name: &str, pos: Point) -> ColonyResult<RoomId> {
        if self.name_index.contains_key(name) {
            return Err(ColonyError::DuplicateRoom(name.to_owned()));
        }
        let id = RoomId::try_from(self.rooms.len()).map_err(|_| ColonyError::TooManyRooms)?;
        self.rooms.push(Room {
            name:     name.to_owned(),
            pos,
            is_start: false,
            is_end:   false,
        });
        self.name_index.insert(name.to_owned(), id);
        Ok(id)
    }

    pub fn mark_start(&mut self, id: RoomId) -> ColonyResult<()> {
        if self.start.is_some() {
            return Err(ColonyError::DuplicateStart);
        }
        let room = &mut self.rooms[id.index()];
        if room.is_end {
            return Err(ColonyError::StartIsEnd(room.name.clone()));
        }
        room.is_start = true;
        self.start = Some(id);
        Ok(())
    }

    pub fn mark_end(&mut self, id: RoomId) -> ColonyResult<()> {
        if self.end.is_some() {
            return Err(ColonyError::DuplicateEnd);
        }
        let room = &mut self.rooms[id.index()];
        if room.is_start {
            return Err(ColonyError::StartIsEnd(room.name.clone()));
        }
        room.is_end = true;
        self.end = Some(id);
        Ok(())
    }

    /// Add an undirected tunnel between two previously added rooms.
    pub fn add_tunnel(&mut self, a: RoomId, b: RoomId) {
        self.tunnels.push((a, b));
    }

    /// Look up a room added earlier.
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.name_index.get(name).copied()
    }

    /// Record one verbatim input line for the echo.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push(line.into());
    }

    pub fn room_count(&self) -> usize { self.rooms.len() }
    pub fn tunnel_count(&self) -> usize { self.tunnels.len() }

    /// Consume the builder and produce a [`Colony`].
    ///
    /// Fails if the ant count is zero or either terminal room is missing.
    pub fn build(self) -> ColonyResult<Colony> {
        if self.ant_count == 0 {
            return Err(ColonyError::NoAnts);
        }
        let start = self.start.ok_or(ColonyError::MissingStart)?;
        let end   = self.end.ok_or(ColonyError::MissingEnd)?;

        let room_count = self.rooms.len();

        let mut degree = vec![0u32; room_count];
        let mut lists: Vec<Vec<RoomId>> = vec![Vec::new(); room_count];
        for &(a, b) in &self.tunnels {
            degree[a.index()] += 1;
            if a == b {
                continue;
            }
            degree[b.index()] += 1;
            if !lists[a.index()].contains(&b) {
                lists[a.index()].push(b);
                lists[b.index()].push(a);
            }
        }

        // Flatten neighbour lists into CSR.
        let mut adjacency_start = Vec::with_capacity(room_count + 1);
        let mut adjacency = Vec::with_capacity(lists.iter().map(Vec::len).sum());
        adjacency_start.push(0u32);
        for list in &lists {
            adjacency.extend_from_slice(list);
            adjacency_start.push(adjacency.len() as u32);
        }

        Ok(Colony {
            rooms: self.rooms,
            name_index: self.name_index,
            tunnels: self.tunnels,
            adjacency_start,
            adjacency,
            degree,
            ant_count: self.ant_count,
            start,
            end,
            input: self.input,
        })
    }
}
