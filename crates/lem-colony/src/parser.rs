//! Colony map parser.
//!
//! # Format
//!
//! ```text
//! 3            <- ant count (line 1, positive integer)
//! ##start      <- next room line is the start room
//! start 0 0    <- room: <name> <x> <y>
//! ##end
//! end 4 0
//! mid 2 1
//! # comment
//! start-mid    <- tunnel: <name>-<name>, both rooms already declared
//! mid-end
//! ```
//!
//! Blank lines and `#` comments are ignored.  A `##start` / `##end` marker
//! stays pending until the next room line consumes it.  Room names may not
//! begin with `L` (reserved for move tokens) or `#`.
//!
//! Every line, including the ant count and comments, is kept verbatim in
//! [`Colony::input`] for echoing.

use std::path::Path;

use lem_core::{Point, RoomId};

use crate::{Colony, ColonyBuilder, ColonyError, ColonyResult};

const START_MARKER: &str = "##start";
const END_MARKER: &str = "##end";
const MOVE_PREFIX: char = 'L';
const COMMENT_PREFIX: char = '#';
const TUNNEL_SEPARATOR: char = '-';

// ── Public API ────────────────────────────────────────────────────────────────

/// Read and parse a colony map file.
pub fn load_colony(path: &Path) -> ColonyResult<Colony> {
    let text = std::fs::read_to_string(path)?;
    parse_colony(&text)
}

/// Parse a colony from the full text of a map.
pub fn parse_colony(text: &str) -> ColonyResult<Colony> {
    let mut lines = text.lines();

    let first = lines
        .next()
        .ok_or_else(|| ColonyError::format(1, "missing ant count"))?;
    let ant_count = parse_ant_count(first)?;

    let mut builder = ColonyBuilder::new(ant_count);
    builder.push_input(first);

    let mut pending_start = false;
    let mut pending_end = false;

    for (i, line) in lines.enumerate() {
        let line_no = i + 2;
        builder.push_input(line);

        if line.trim().is_empty() {
            continue;
        }
        if line == START_MARKER {
            pending_start = true;
            continue;
        }
        if line == END_MARKER {
            pending_end = true;
            continue;
        }
        if line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if let [tunnel] = fields.as_slice() {
            if tunnel.contains(TUNNEL_SEPARATOR) {
                parse_tunnel(tunnel, line_no, &mut builder)?;
                continue;
            }
        }

        let id = parse_room(&fields, line_no, &mut builder)?;
        if pending_start {
            builder.mark_start(id)?;
            pending_start = false;
        }
        if pending_end {
            builder.mark_end(id)?;
            pending_end = false;
        }
    }

    let colony = builder.build()?;
    tracing::debug!(
        rooms   = colony.room_count(),
        tunnels = colony.tunnel_count(),
        ants    = colony.ant_count(),
        "parsed colony"
    );
    Ok(colony)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_ant_count(line: &str) -> ColonyResult<u32> {
    match line.parse::<u32>() {
        Ok(0) => Err(ColonyError::NoAnts),
        Ok(n) => Ok(n),
        Err(_) => Err(ColonyError::format(
            1,
            format!("ant count {line:?} is not a positive integer"),
        )),
    }
}

fn parse_room(
    fields:  &[&str],
    line_no: usize,
    builder: &mut ColonyBuilder,
) -> ColonyResult<RoomId> {
    let [name, x, y] = fields else {
        return Err(ColonyError::format(
            line_no,
            format!("expected `<name> <x> <y>`, found {} fields", fields.len()),
        ));
    };
    if name.starts_with(MOVE_PREFIX) || name.starts_with(COMMENT_PREFIX) {
        return Err(ColonyError::format(
            line_no,
            format!("room name {name:?} may not start with {MOVE_PREFIX:?} or {COMMENT_PREFIX:?}"),
        ));
    }
    let x = parse_coordinate(x, line_no)?;
    let y = parse_coordinate(y, line_no)?;
    builder.add_room(name, Point::new(x, y))
}

fn parse_coordinate(s: &str, line_no: usize) -> ColonyResult<i64> {
    s.parse::<i64>().map_err(|_| {
        ColonyError::format(line_no, format!("coordinate {s:?} is not an integer"))
    })
}

fn parse_tunnel(token: &str, line_no: usize, builder: &mut ColonyBuilder) -> ColonyResult<()> {
    let parts: Vec<&str> = token.split(TUNNEL_SEPARATOR).collect();
    let [a, b] = parts.as_slice() else {
        return Err(ColonyError::format(
            line_no,
            format!("tunnel {token:?} must join exactly two rooms"),
        ));
    };
    let lookup = |name: &str| {
        builder.room_id(name).ok_or_else(|| {
            ColonyError::format(line_no, format!("tunnel references unknown room {name:?}"))
        })
    };
    let a = lookup(*a)?;
    let b = lookup(*b)?;
    builder.add_tunnel(a, b);
    Ok(())
}
