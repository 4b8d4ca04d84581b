//! Slope-dependent running speed.

use crate::{
    encoding::{
        FlagLayout,
        speed::{MAX_SPEED, MEAN_SPEED, MIN_SPEED, SLOW_SPEED},
    },
    structures::{Edge, WayTags},
};

/// Slopes within this band count as flat.
pub const FLAT_SLOPE: f64 = 0.005;

/// Edges shorter than this (in metres) keep their base speed.
pub const MIN_DISTANCE: f64 = 2.0;

/// Speed over a slope with a fixed vertical rate, clamped to
/// `[MIN_SPEED, MAX_SPEED]`. `None` for flat slopes.
///
/// With `h` the climb and `s` the planar distance, the time is
/// `h/v_vert + s/v_hor` and `v = sqrt(s² + h²) / time`, which reduces to
/// `sqrt(1 + slope²) / (slope + 1/v_hor)`.
pub fn slope_speed(slope: f64) -> Option<f64> {
    let horizontal = if slope > FLAT_SLOPE {
        SLOW_SPEED
    } else if slope < -FLAT_SLOPE {
        // TODO: check with the course planners whether downhill should use a faster constant than MEAN_SPEED
        MEAN_SPEED
    } else {
        return None;
    };

    let speed = slope.hypot(1.0) / (slope + 1.0 / horizontal);
    Some(speed.clamp(MIN_SPEED, MAX_SPEED))
}

/// Rewrites the average speed of `edge` from its elevation profile.
///
/// Leaves the edge untouched without elevation data, on tunnels, bridges
/// and steps, on edges shorter than [`MIN_DISTANCE`] and on edges with no
/// access in either direction.
pub fn adjust<W: WayTags + ?Sized>(way: &W, edge: &mut Edge, layout: &FlagLayout) {
    if !edge.geometry.is_3d() {
        return;
    }

    // elevation models are unreliable inside tunnels and under bridges
    if way.has_tag("tunnel", "yes") || way.has_tag("bridge", "yes") || way.has_tag("highway", "steps")
    {
        return;
    }

    if edge.distance.is_nan() || edge.distance < MIN_DISTANCE {
        return;
    }

    if !layout.access(edge.flags, false) && !layout.access(edge.flags, true) {
        return;
    }

    let last = edge.geometry.size() - 1;
    let (Some(first_ele), Some(last_ele)) =
        (edge.geometry.elevation(0), edge.geometry.elevation(last))
    else {
        return;
    };

    let slope = (last_ele - first_ele).abs() / edge.distance;
    if let Some(speed) = slope_speed(slope) {
        layout.set_speed(&mut edge.flags, speed);
    }
}
