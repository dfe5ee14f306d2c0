//! External boundary tracing over a binary mask.
//!
//! Components are discovered by a row-major scan with stack-based flood
//! claiming (8-connectivity), so the first pixel seen of each component is
//! its top-most, left-most boundary pixel. From that seed the outer
//! boundary is walked with Moore neighbor tracing: scan the 8-neighborhood
//! clockwise starting just past the backtrack direction, step to the first
//! "on" pixel, repeat until the walk re-enters the seed and is about to
//! repeat its first move. Interior pixels and nested hole boundaries are
//! never visited.
use super::approx::compress_collinear;
use crate::image::ImageU8;
use crate::types::{Contour, Point};

// 8-neighborhood in clockwise order starting from west.
const DX: [i32; 8] = [-1, -1, 0, 1, 1, 1, 0, -1];
const DY: [i32; 8] = [0, -1, -1, -1, 0, 1, 1, 1];

/// Trace the external boundary of every connected component of pixels
/// strictly above `threshold`, in row-major discovery order.
pub fn external_contours(edge_map: &ImageU8, threshold: u8) -> Vec<Contour> {
    let w = edge_map.w;
    let h = edge_map.h;
    let n = w * h;

    let mask: Vec<u8> = edge_map
        .data
        .iter()
        .map(|&v| u8::from(v > threshold))
        .collect();

    let mut claimed = vec![0u8; n];
    let mut stack = Vec::new();
    let mut contours = Vec::new();

    for seed in 0..n {
        if mask[seed] == 0 || claimed[seed] != 0 {
            continue;
        }

        flood_claim(&mask, &mut claimed, &mut stack, w, h, seed);
        let boundary = trace_boundary(&mask, w, h, seed);
        contours.push(compress_collinear(&boundary));
    }

    contours
}

/// Mark every pixel of the component containing `seed` as claimed.
fn flood_claim(
    mask: &[u8],
    claimed: &mut [u8],
    stack: &mut Vec<usize>,
    w: usize,
    h: usize,
    seed: usize,
) {
    stack.clear();
    claimed[seed] = 1;
    stack.push(seed);

    while let Some(p) = stack.pop() {
        for dir in 0..8 {
            let Some(nb) = neighbor_index(p, dir, w, h) else {
                continue;
            };
            if mask[nb] != 0 && claimed[nb] == 0 {
                claimed[nb] = 1;
                stack.push(nb);
            }
        }
    }
}

/// Moore neighbor walk around the component whose first row-major pixel is
/// `seed`. Returns the boundary as an open polyline (the closing segment
/// back to the seed is implicit).
fn trace_boundary(mask: &[u8], w: usize, h: usize, seed: usize) -> Contour {
    let mut contour = vec![to_point(seed, w)];

    // The seed is the first pixel in row-major order, so its west neighbor
    // is guaranteed off; starting the scan there is always valid.
    let Some((first_dir, second)) = next_on_neighbor(mask, w, h, seed, 0) else {
        return contour; // isolated pixel
    };

    let mut cur = second;
    let mut back = opposite(first_dir);

    let cap = 8 * mask.len() + 8;
    for _ in 0..cap {
        if cur == seed {
            // Jacob's stopping criterion: done once the walk would repeat
            // its first move out of the seed.
            let Some((dir, next)) = next_on_neighbor(mask, w, h, seed, back) else {
                break;
            };
            if dir == first_dir && next == second {
                break;
            }
            contour.push(to_point(cur, w));
            cur = next;
            back = opposite(dir);
            continue;
        }

        contour.push(to_point(cur, w));
        let Some((dir, next)) = next_on_neighbor(mask, w, h, cur, back) else {
            break;
        };
        cur = next;
        back = opposite(dir);
    }

    contour
}

/// First "on" neighbor of `p`, scanning clockwise starting just past
/// `back_dir`.
#[inline]
fn next_on_neighbor(
    mask: &[u8],
    w: usize,
    h: usize,
    p: usize,
    back_dir: usize,
) -> Option<(usize, usize)> {
    for k in 1..=8 {
        let dir = (back_dir + k) & 7;
        let Some(nb) = neighbor_index(p, dir, w, h) else {
            continue;
        };
        if mask[nb] != 0 {
            return Some((dir, nb));
        }
    }
    None
}

#[inline]
fn neighbor_index(p: usize, dir: usize, w: usize, h: usize) -> Option<usize> {
    let x = (p % w) as i32 + DX[dir];
    let y = (p / w) as i32 + DY[dir];
    if x < 0 || y < 0 || x >= w as i32 || y >= h as i32 {
        return None;
    }
    Some(y as usize * w + x as usize)
}

#[inline]
fn opposite(dir: usize) -> usize {
    (dir + 4) & 7
}

#[inline]
fn to_point(idx: usize, w: usize) -> Point {
    Point::new((idx % w) as i32, (idx / w) as i32)
}
