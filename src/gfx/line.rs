//! Integer line rasterization
//!
//! Octant-normalized Bresenham: the same stepping loop handles every slope
//! and direction by making the longest displacement the primary axis. No
//! floating point, no division; exactly `max(|dx|, |dy|) + 1` pixels are
//! plotted, endpoints included.

use glam::IVec2;

use super::color::Color;
use super::surface::Surface;

/// Draw an 8-connected line from `p0` to `p1` inclusive
///
/// Both endpoints (and therefore every plotted pixel) must lie inside the
/// surface; see [`Surface::plot`]. A zero-length line plots a single pixel.
pub fn draw_line(fb: &mut Surface, p0: IVec2, p1: IVec2, color: Color) {
    let w = p1.x - p0.x;
    let h = p1.y - p0.y;

    // Primary step always follows the longest axis; the secondary step only
    // fires on iterations where the error accumulator stays low.
    let mut dx1 = 0;
    let mut dy1 = 0;
    let mut dx2 = 0;
    let mut dy2 = 0;
    if w < 0 {
        dx1 = -1;
        dx2 = -1;
    } else if w > 0 {
        dx1 = 1;
        dx2 = 1;
    }
    if h < 0 {
        dy1 = -1;
    } else if h > 0 {
        dy1 = 1;
    }

    let mut longest = w.abs();
    let mut shortest = h.abs();
    if shortest > longest {
        // Vertical displacement dominates: swap axis roles and redirect the
        // secondary step to y.
        std::mem::swap(&mut longest, &mut shortest);
        dy2 = if h < 0 {
            -1
        } else if h > 0 {
            1
        } else {
            0
        };
        dx2 = 0;
    }

    let mut x = p0.x;
    let mut y = p0.y;
    let mut numerator = longest >> 1;
    for _ in 0..=longest {
        fb.plot(x, y, color);
        numerator += shortest;
        if numerator > longest {
            numerator -= longest;
            x += dx1;
            y += dy1;
        } else {
            x += dx2;
            y += dy2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::ivec2;
    use proptest::prelude::*;

    const WHITE: Color = Color::rgb(31, 31, 31);

    fn plotted(fb: &Surface) -> usize {
        fb.as_raw().iter().filter(|&&px| px != 0).count()
    }

    #[test]
    fn test_degenerate_line_is_one_pixel() {
        let mut fb = Surface::new(16, 16);
        draw_line(&mut fb, ivec2(5, 5), ivec2(5, 5), WHITE);
        assert_eq!(plotted(&fb), 1);
        assert_eq!(fb.pixel(5, 5), Some(WHITE));
    }

    #[test]
    fn test_horizontal_line_is_contiguous() {
        let mut fb = Surface::new(32, 8);
        draw_line(&mut fb, ivec2(3, 4), ivec2(20, 4), WHITE);
        for x in 3..=20 {
            assert_eq!(fb.pixel(x, 4), Some(WHITE), "gap at x={x}");
        }
        assert_eq!(plotted(&fb), 18);
    }

    #[test]
    fn test_vertical_line_both_directions() {
        let mut fb = Surface::new(8, 32);
        draw_line(&mut fb, ivec2(4, 20), ivec2(4, 3), WHITE);
        for y in 3..=20 {
            assert_eq!(fb.pixel(4, y), Some(WHITE), "gap at y={y}");
        }
        assert_eq!(plotted(&fb), 18);
    }

    #[test]
    fn test_diagonal_hits_every_cell_once() {
        let mut fb = Surface::new(16, 16);
        draw_line(&mut fb, ivec2(0, 0), ivec2(10, 10), WHITE);
        assert_eq!(plotted(&fb), 11);
        for i in 0..=10 {
            assert_eq!(fb.pixel(i, i), Some(WHITE));
        }
    }

    proptest! {
        #[test]
        fn line_plots_longest_plus_one(
            x0 in 0i32..64, y0 in 0i32..48,
            x1 in 0i32..64, y1 in 0i32..48,
        ) {
            let mut fb = Surface::new(64, 48);
            draw_line(&mut fb, ivec2(x0, y0), ivec2(x1, y1), WHITE);
            let longest = (x1 - x0).abs().max((y1 - y0).abs()) as usize;
            prop_assert_eq!(plotted(&fb), longest + 1);
        }

        #[test]
        fn line_includes_both_endpoints(
            x0 in 0i32..64, y0 in 0i32..48,
            x1 in 0i32..64, y1 in 0i32..48,
        ) {
            let mut fb = Surface::new(64, 48);
            draw_line(&mut fb, ivec2(x0, y0), ivec2(x1, y1), WHITE);
            prop_assert_eq!(fb.pixel(x0, y0), Some(WHITE));
            prop_assert_eq!(fb.pixel(x1, y1), Some(WHITE));
        }
    }
}
