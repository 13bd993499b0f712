//! Corridor rasterization
//!
//! A corridor is an integer line between two tiles with a filled disk stamped
//! on every point of the line.

use crate::cave::{Coordinates, Grid, TileType};

/// Integer points on the line from `from` to `to`, both endpoints included.
///
/// The line is always traced from the smaller endpoint, so
/// `line(b, a)` is exactly `line(a, b)` reversed.
pub fn line(from: Coordinates, to: Coordinates) -> Vec<Coordinates> {
    if to < from {
        let mut points = trace(to, from);
        points.reverse();
        points
    } else {
        trace(from, to)
    }
}

/// Incremental line: one step along the dominant axis per point, with the
/// minor axis stepping whenever the accumulated error reaches the dominant delta
fn trace(from: Coordinates, to: Coordinates) -> Vec<Coordinates> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let inverted = dx.abs() < dy.abs();
    let (longest, shortest, step, gradient_step) = if inverted {
        (dy.abs(), dx.abs(), dy.signum(), dx.signum())
    } else {
        (dx.abs(), dy.abs(), dx.signum(), dy.signum())
    };

    let mut points = Vec::with_capacity(longest as usize + 1);
    let (mut x, mut y) = (from.x, from.y);
    let mut accumulation = longest / 2;

    for _ in 0..=longest {
        points.push(Coordinates::new(x, y));
        if inverted {
            y += step;
        } else {
            x += step;
        }

        accumulation += shortest;
        if accumulation >= longest {
            if inverted {
                x += gradient_step;
            } else {
                y += gradient_step;
            }
            accumulation -= longest;
        }
    }

    points
}

/// Offsets of a filled disk of `radius` (`dx² + dy² <= r²`).
///
/// Radii above `i32::MAX` are treated as `i32::MAX`.
pub fn disk(radius: u32) -> impl Iterator<Item = (i32, i32)> {
    let r = i64::from(radius.min(i32::MAX as u32));
    (-r..=r).flat_map(move |dx| {
        (-r..=r)
            .filter(move |dy| dx * dx + dy * dy <= r * r)
            .map(move |dy| (dx as i32, dy as i32))
    })
}

/// Largest radius that can still change `grid`: no two tiles are further
/// apart than `width + height`.
fn effective_radius(grid: &Grid, radius: u32) -> u32 {
    let reach = u32::try_from(grid.width() + grid.height()).unwrap_or(u32::MAX);
    radius.min(reach)
}

/// Stamp a floor disk around `center`, clipped to the grid interior.
/// Returns the number of tiles that became floor.
pub fn stamp_disk(grid: &mut Grid, center: Coordinates, radius: u32) -> usize {
    let mut carved = 0;
    for (dx, dy) in disk(effective_radius(grid, radius)) {
        let c = center.offset(dx, dy);
        if grid.tile_type(c) == Some(TileType::Wall) && grid.set_type(c, TileType::Floor) {
            carved += 1;
        }
    }
    carved
}

/// Carve a corridor between two tiles. Returns the rasterized line.
pub fn carve_corridor(
    grid: &mut Grid,
    from: Coordinates,
    to: Coordinates,
    radius: u32,
) -> Vec<Coordinates> {
    let points = line(from, to);
    for &point in &points {
        stamp_disk(grid, point, radius);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coordinates {
        Coordinates::new(x, y)
    }

    #[test]
    fn test_single_point() {
        assert_eq!(line(c(3, 3), c(3, 3)), vec![c(3, 3)]);
    }

    #[test]
    fn test_horizontal_and_vertical() {
        assert_eq!(line(c(1, 2), c(4, 2)), vec![c(1, 2), c(2, 2), c(3, 2), c(4, 2)]);
        assert_eq!(line(c(2, 4), c(2, 1)), vec![c(2, 4), c(2, 3), c(2, 2), c(2, 1)]);
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(
            line(c(1, 1), c(4, 4)),
            vec![c(1, 1), c(2, 2), c(3, 3), c(4, 4)]
        );
    }

    #[test]
    fn test_shallow_line() {
        // longest = 4, shortest = 2, error starts at 2
        assert_eq!(
            line(c(0, 0), c(4, 2)),
            vec![c(0, 0), c(1, 1), c(2, 1), c(3, 2), c(4, 2)]
        );
    }

    #[test]
    fn test_steep_line_ends_on_target() {
        let points = line(c(2, 1), c(5, 9));
        assert_eq!(points.first(), Some(&c(2, 1)));
        assert_eq!(points.last(), Some(&c(5, 9)));
        assert_eq!(points.len(), 9);
        for pair in points.windows(2) {
            assert_eq!(pair[1].y - pair[0].y, 1);
            assert!((pair[1].x - pair[0].x).abs() <= 1);
        }
    }

    #[test]
    fn test_reverse_is_mirror() {
        let forward = line(c(1, 7), c(6, 2));
        let mut backward = line(c(6, 2), c(1, 7));
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_disk_shapes() {
        assert_eq!(disk(0).count(), 1);
        assert_eq!(disk(1).count(), 5);
        assert_eq!(disk(2).count(), 13);
    }

    #[test]
    fn test_stamp_clips_to_interior() {
        let mut grid = Grid::new(6, 6, 1.0);
        let carved = stamp_disk(&mut grid, c(1, 1), 1);
        // (0,1) and (1,0) are border
        assert_eq!(carved, 3);
        assert!(grid.is_floor(c(1, 1)));
        assert!(grid.is_floor(c(2, 1)));
        assert!(grid.is_floor(c(1, 2)));
        assert!(!grid.is_floor(c(0, 1)));
    }

    #[test]
    fn test_huge_radius_fills_interior() {
        let mut grid = Grid::new(10, 10, 1.0);
        assert_eq!(stamp_disk(&mut grid, c(1, 1), u32::MAX), 64);
        assert_eq!(grid.count(TileType::Floor), 64);
        assert!(!grid.is_floor(c(0, 0)));
    }

    #[test]
    fn test_radius_is_capped_by_grid_size() {
        let mut capped = Grid::new(12, 7, 1.0);
        let mut huge = Grid::new(12, 7, 1.0);
        carve_corridor(&mut capped, c(1, 1), c(2, 1), 19);
        carve_corridor(&mut huge, c(1, 1), c(2, 1), 50_000);
        assert_eq!(capped, huge);
        assert_eq!(effective_radius(&huge, 50_000), 19);
    }

    #[test]
    fn test_carve_corridor() {
        let mut grid = Grid::new(10, 10, 1.0);
        let points = carve_corridor(&mut grid, c(2, 2), c(7, 2), 0);
        assert_eq!(points.len(), 6);
        assert_eq!(grid.count(TileType::Floor), 6);
    }
}
