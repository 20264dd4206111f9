#![forbid(unsafe_code)]

//! Spiral search for the next unclaimed grid coordinate.
//!
//! The grid is walked in square rings around the origin. Ring `r` holds every
//! coordinate whose Chebyshev distance from the origin is `r`. Within a ring,
//! positions are visited in a fixed order (see [`ring_positions`]) and the
//! first unoccupied one wins, so allocation is deterministic for a given
//! occupancy pattern.

use std::collections::HashSet;

/// An `(x, z)` grid coordinate.
pub type GridPos = (i32, i32);

/// Largest radius whose ring is fully addressable with `i32` coordinates.
pub const MAX_RADIUS: u32 = i32::MAX as u32;

/// Number of positions on a ring.
pub fn ring_capacity(radius: u32) -> u64 {
    if radius == 0 { 1 } else { 8 * u64::from(radius) }
}

/// Enumerates every position of a ring exactly once, in allocation order.
///
/// For each offset `a` from `0` up to `radius` (the corner last) the
/// candidates are `(a,r) (r,a) (-a,r) (r,-a) (-r,a) (a,-r) (-a,-r) (-r,-a)`,
/// with repeats skipped. Ring 1 therefore yields
/// `(0,1) (1,0) (-1,0) (0,-1) (1,1) (-1,1) (1,-1) (-1,-1)`.
///
/// Radii beyond [`MAX_RADIUS`] yield nothing.
pub fn ring_positions(radius: u32) -> RingPositions {
    match i32::try_from(radius) {
        Ok(radius) => RingPositions {
            radius,
            offset: 0,
            slot: 0,
            done: false,
        },
        Err(_) => RingPositions {
            radius: 0,
            offset: 0,
            slot: 0,
            done: true,
        },
    }
}

#[derive(Clone, Debug)]
pub struct RingPositions {
    radius: i32,
    offset: i32,
    slot: u8,
    done: bool,
}

const SLOTS: u8 = 8;

fn candidate(a: i32, r: i32, slot: u8) -> GridPos {
    match slot {
        0 => (a, r),
        1 => (r, a),
        2 => (-a, r),
        3 => (r, -a),
        4 => (-r, a),
        5 => (a, -r),
        6 => (-a, -r),
        _ => (-r, -a),
    }
}

impl Iterator for RingPositions {
    type Item = GridPos;

    fn next(&mut self) -> Option<GridPos> {
        while !self.done {
            if self.slot == SLOTS {
                if self.offset == self.radius {
                    self.done = true;
                    break;
                }
                self.offset += 1;
                self.slot = 0;
            }
            let slot = self.slot;
            self.slot += 1;

            let pos = candidate(self.offset, self.radius, slot);
            // Offsets 0 and `radius` fold some slots onto the same cell.
            let repeated =
                (0..slot).any(|earlier| candidate(self.offset, self.radius, earlier) == pos);
            if !repeated {
                return Some(pos);
            }
        }
        None
    }
}

/// First position of `radius` absent from `occupied`, in ring order.
pub fn first_free_on_ring(radius: u32, occupied: &HashSet<GridPos>) -> Option<GridPos> {
    ring_positions(radius).find(|pos| !occupied.contains(pos))
}

/// Walks rings outward from the origin until a free position turns up.
///
/// `occupied_on_ring` is asked for the occupied coordinates of one ring at a
/// time, so callers can stream occupancy from storage instead of loading the
/// whole grid. A ring whose occupancy count equals its capacity is skipped
/// without scanning.
///
/// With `limit > 0` only rings `0..limit` are searched; `limit == 0` searches
/// until the coordinate space runs out. Exhaustion yields `Ok(None)`.
pub fn next_free<E, F>(limit: u32, mut occupied_on_ring: F) -> Result<Option<GridPos>, E>
where
    F: FnMut(u32) -> Result<HashSet<GridPos>, E>,
{
    let mut radius: u32 = 0;
    while radius <= MAX_RADIUS && (limit == 0 || radius < limit) {
        let occupied = occupied_on_ring(radius)?;
        if occupied.len() as u64 != ring_capacity(radius) {
            if let Some(pos) = first_free_on_ring(radius, &occupied) {
                return Ok(Some(pos));
            }
        }
        radius += 1;
    }
    Ok(None)
}
