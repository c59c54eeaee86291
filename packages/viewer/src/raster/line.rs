/// Pixels on the segment `from -> to` after rounding both ends, endpoints
/// included (Bresenham, all octants).
pub fn line_pixels(from: (f32, f32), to: (f32, f32)) -> impl Iterator<Item = (i32, i32)> {
    let (mut x, mut y) = (from.0.round() as i32, from.1.round() as i32);
    let (x1, y1) = (to.0.round() as i32, to.1.round() as i32);
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut done = false;

    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let out = (x, y);
        if x == x1 && y == y1 {
            done = true;
            return Some(out);
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
        Some(out)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_and_vertical() {
        let h: Vec<_> = line_pixels((0., 0.), (3., 0.)).collect();
        assert_eq!(vec![(0, 0), (1, 0), (2, 0), (3, 0)], h);
        let v: Vec<_> = line_pixels((2., 2.), (2., -1.)).collect();
        assert_eq!(vec![(2, 2), (2, 1), (2, 0), (2, -1)], v);
    }

    #[test]
    fn single_point() {
        assert_eq!(vec![(5, 5)], line_pixels((5.2, 4.8), (4.9, 5.1)).collect::<Vec<_>>());
    }

    #[test]
    fn steep_line_is_connected() {
        let pts: Vec<_> = line_pixels((0., 0.), (3., 10.)).collect();
        assert_eq!(Some(&(3, 10)), pts.last());
        assert_eq!(11, pts.len());
        for w in pts.windows(2) {
            assert!((w[0].0 - w[1].0).abs() <= 1 && (w[0].1 - w[1].1).abs() <= 1);
        }
    }
}
