//! Room connectivity
//!
//! Two passes over the room list:
//! 1. Greedy: every room without a connection is joined to its nearest
//!    unconnected neighbour.
//! 2. Repair: while some rooms are not reachable from the main room, join the
//!    closest pair of edge tiles between the unreachable and reachable sets.
//!
//! Distances are squared Euclidean distances between edge tiles. The first
//! pair found wins ties, so results only depend on room and tile order.

use log::{debug, trace, warn};

use crate::cave::{Coordinates, Grid};
use crate::error::GenerationError;

use super::corridor::carve_corridor;
use super::room::{link, mark_accessible, Room};

/// One carved connection between two rooms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub room_a: usize,
    pub room_b: usize,
    pub from: Coordinates,
    pub to: Coordinates,
    /// Rasterized centre line of the corridor
    pub line: Vec<Coordinates>,
}

/// Summary of a connection run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connections {
    pub passages: Vec<Passage>,
    /// Passages added by the repair pass
    pub repairs: usize,
}

/// Closest known pair of edge tiles between two rooms
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: i64,
    room_a: usize,
    room_b: usize,
    from: Coordinates,
    to: Coordinates,
}

/// Keep `best` unless the pair (a, b) has a strictly closer pair of edge tiles
fn closest_pair(rooms: &[Room], a: usize, b: usize, best: &mut Option<Candidate>) {
    for &from in &rooms[a].edge_tiles {
        for &to in &rooms[b].edge_tiles {
            let distance = from.distance_squared(to);
            if best.is_none_or(|c| distance < c.distance) {
                *best = Some(Candidate {
                    distance,
                    room_a: a,
                    room_b: b,
                    from,
                    to,
                });
            }
        }
    }
}

/// Connect two rooms and carve the corridor between them
fn create_passage(
    grid: &mut Grid,
    rooms: &mut [Room],
    candidate: Candidate,
    corridor_radius: u32,
) -> Passage {
    let Candidate {
        room_a,
        room_b,
        from,
        to,
        ..
    } = candidate;

    link(rooms, room_a, room_b);
    if rooms[room_a].is_accessible_from_main {
        mark_accessible(rooms, room_b);
    } else if rooms[room_b].is_accessible_from_main {
        mark_accessible(rooms, room_a);
    }

    let line = carve_corridor(grid, from, to, corridor_radius);
    trace!("passage {room_a} -> {room_b}: {from} to {to} ({} points)", line.len());

    Passage {
        room_a,
        room_b,
        from,
        to,
        line,
    }
}

/// Greedy pass: join each still-unconnected room to its nearest other room.
pub fn connect_nearest(grid: &mut Grid, rooms: &mut [Room], corridor_radius: u32) -> Vec<Passage> {
    let mut passages = Vec::new();

    for a in 0..rooms.len() {
        if !rooms[a].connected.is_empty() {
            continue;
        }

        let mut best = None;
        for b in 0..rooms.len() {
            if a == b || rooms[a].is_connected(b) {
                continue;
            }
            closest_pair(rooms, a, b, &mut best);
        }

        if let Some(candidate) = best {
            passages.push(create_passage(grid, rooms, candidate, corridor_radius));
        }
    }

    passages
}

/// Repair pass: join unreachable rooms to the main room's component until none
/// remain. Each round makes at least one more room reachable, so the loop is
/// capped at the number of rooms.
pub fn connect_to_main(
    grid: &mut Grid,
    rooms: &mut [Room],
    corridor_radius: u32,
) -> Result<Vec<Passage>, GenerationError> {
    let mut passages = Vec::new();

    for _ in 0..=rooms.len() {
        let (reachable, unreachable): (Vec<usize>, Vec<usize>) =
            (0..rooms.len()).partition(|&i| rooms[i].is_accessible_from_main);
        if unreachable.is_empty() {
            return Ok(passages);
        }

        let mut best = None;
        for &a in &unreachable {
            for &b in &reachable {
                if rooms[a].is_connected(b) {
                    continue;
                }
                closest_pair(rooms, a, b, &mut best);
            }
        }

        let Some(candidate) = best else {
            return Err(GenerationError::DisconnectedRooms {
                remaining: unreachable.len(),
            });
        };
        passages.push(create_passage(grid, rooms, candidate, corridor_radius));
    }

    let remaining = rooms.iter().filter(|r| !r.is_accessible_from_main).count();
    if remaining == 0 {
        Ok(passages)
    } else {
        Err(GenerationError::DisconnectedRooms { remaining })
    }
}

/// Mark the main room, then run both passes.
///
/// `rooms` must be sorted largest first; room 0 becomes the main room.
pub fn connect_rooms(
    grid: &mut Grid,
    rooms: &mut [Room],
    corridor_radius: u32,
) -> Result<Connections, GenerationError> {
    let Some(main) = rooms.first_mut() else {
        return Err(GenerationError::NoSurvivingRooms { threshold: 0 });
    };
    main.is_main = true;
    main.is_accessible_from_main = true;

    let mut passages = connect_nearest(grid, rooms, corridor_radius);
    let greedy = passages.len();
    let repairs = connect_to_main(grid, rooms, corridor_radius)?;
    if !repairs.is_empty() {
        warn!(
            "greedy pass left {} passage(s) short of full connectivity",
            repairs.len()
        );
    }

    let repairs_count = repairs.len();
    passages.extend(repairs);
    debug!(
        "connected {} rooms with {} passages ({} greedy, {} repair)",
        rooms.len(),
        passages.len(),
        greedy,
        repairs_count
    );

    Ok(Connections {
        passages,
        repairs: repairs_count,
    })
}
