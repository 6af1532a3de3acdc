//! Bilinear interpolation on uniformly spaced lattices.
//!
//! The lattice is described by an origin, a constant step and a number of
//! cells per axis; values are supplied as the four corners of the cell that
//! encloses the target point.

use mf_core::Real;

/// Locate `x` on the uniform axis `origin + step · n`, `n ∈ [0, cells]`.
///
/// Returns the cell index `n = floor((x − origin) / step)` together with
/// the fractional offset `(x − (origin + step · n)) / step`.  A point on the
/// upper edge of the axis is assigned to the last cell with offset `1`.
///
/// A position within a few ULPs of a lattice node is snapped onto it, so a
/// node reproduces its own index with offset exactly `0` (or `1` on the
/// upper edge).
///
/// The caller is responsible for checking that `x` lies on the axis.
pub fn locate_uniform(x: Real, origin: Real, step: Real, cells: usize) -> (usize, Real) {
    let raw = (x - origin) / step;
    let node = raw.round();
    let pos = if (raw - node).abs() <= NODE_SNAP_ULPS * Real::EPSILON * node.abs().max(1.0) {
        node
    } else {
        raw
    };
    let n = (pos.floor().max(0.0) as usize).min(cells - 1);
    (n, pos - n as Real)
}

const NODE_SNAP_ULPS: Real = 64.0;

/// Blend the four corners of a lattice cell.
///
/// `corners[p][q]` is the value at offset `p` along the first axis and `q`
/// along the second; `l1` and `w1` are the fractional offsets along the
/// first and second axis respectively.
pub fn bilinear_blend(l1: Real, w1: Real, corners: [[Real; 2]; 2]) -> Real {
    let l0 = 1.0 - l1;
    let w0 = 1.0 - w1;
    l1 * w1 * corners[1][1]
        + l1 * w0 * corners[1][0]
        + l0 * w1 * corners[0][1]
        + l0 * w0 * corners[0][0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn locate_inside_cells() {
        assert_eq!(locate_uniform(5.0, 0.0, 20.0, 1), (0, 0.25));
        let (n, frac) = locate_uniform(13.0, 10.0, 2.0, 5);
        assert_eq!(n, 1);
        assert_abs_diff_eq!(frac, 0.5, epsilon = 1e-15);
    }

    #[test]
    fn nodes_snap_to_zero_offset() {
        // 0.29 / 0.01 evaluates to 28.999…
        assert_eq!(locate_uniform(0.29, 0.0, 0.01, 100), (29, 0.0));
        for i in 0..=100usize {
            let x = 0.01 * i as f64;
            let (n, frac) = locate_uniform(x, 0.0, 0.01, 100);
            assert_eq!(n + frac as usize, i);
            assert!(frac == 0.0 || (n == 99 && frac == 1.0));
        }
        let h = 100.0 / 7.0;
        for j in 0..=7usize {
            let (n, frac) = locate_uniform(50.0 + h * j as f64, 50.0, h, 7);
            assert_eq!((n as f64 + frac), j as f64);
        }
    }

    #[test]
    fn upper_edge_maps_to_last_cell() {
        assert_eq!(locate_uniform(20.0, 0.0, 4.0, 5), (4, 1.0));
        assert_eq!(locate_uniform(1.0, 0.0, 0.01, 100), (99, 1.0));
    }

    #[test]
    fn blend_midpoint_is_corner_average() {
        let v = bilinear_blend(0.5, 0.5, [[0.0, 1.0], [2.0, 3.0]]);
        assert_abs_diff_eq!(v, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn blend_quarter_point() {
        // rows [1, 2] and [3, 4], a quarter of the way along both axes
        let v = bilinear_blend(0.25, 0.25, [[1.0, 2.0], [3.0, 4.0]]);
        assert_abs_diff_eq!(v, 1.75, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn blend_reproduces_bilinear_functions(
            l in 0.0f64..=1.0,
            w in 0.0f64..=1.0,
            c0 in -10.0f64..10.0,
            cl in -10.0f64..10.0,
            cw in -10.0f64..10.0,
            clw in -10.0f64..10.0,
        ) {
            let f = |x: f64, y: f64| c0 + cl * x + cw * y + clw * x * y;
            let corners = [[f(0.0, 0.0), f(0.0, 1.0)], [f(1.0, 0.0), f(1.0, 1.0)]];
            prop_assert!((bilinear_blend(l, w, corners) - f(l, w)).abs() < 1e-9);
        }
    }
}
