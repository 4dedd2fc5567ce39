//! Swept AABB collision test
//!
//! The tricky part of the kernel: computing, for one moving rectangle against
//! one static rectangle, the fraction of this frame's motion at which the two
//! first touch, plus the contact normal. Pure function, no side effects.

use glam::Vec2;

use super::rect::{Rect, ranges_intersect};

/// Entry/exit window placeholder for an axis that does not constrain the
/// collision (zero velocity with ranges already overlapping). The values only
/// need to lose every max/min against a real axis window while keeping
/// `entry < 0 < exit`.
pub(crate) const OPEN_WINDOW_ENTRY: f32 = -100.0;
pub(crate) const OPEN_WINDOW_EXIT: f32 = 100.0;

/// Outcome of a swept test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepResult {
    /// 1 when the mover can travel its full velocity without contact, in
    /// [0, 1) when contact happens at that fraction of the motion, negative
    /// when the rectangles already overlap - then `-ratio` is the fraction of
    /// the current velocity needed to separate them.
    pub ratio: f32,
    /// Contact normal: exactly one component is ±1 on a hit, zero on a miss
    /// or when already overlapping.
    pub normal: Vec2,
}

impl SweepResult {
    pub fn miss() -> Self {
        Self {
            ratio: 1.0,
            normal: Vec2::ZERO,
        }
    }
}

/// Collision window on one axis, in units of the frame's motion.
///
/// `None` means the axis ranges are disjoint and velocity cannot close the
/// gap, so no collision is possible at any time.
fn axis_window(
    mover_lo: f32,
    mover_hi: f32,
    obstacle_lo: f32,
    obstacle_hi: f32,
    v: f32,
) -> Option<(f32, f32)> {
    if v == 0.0 {
        if ranges_intersect(mover_lo, mover_hi, obstacle_lo, obstacle_hi) {
            Some((OPEN_WINDOW_ENTRY, OPEN_WINDOW_EXIT))
        } else {
            None
        }
    } else if v > 0.0 {
        // Intersection starts when the mover's trailing-to-leading edge gap
        // closes, ends once the opposite edges pass each other.
        Some(((obstacle_lo - mover_hi) / v, (obstacle_hi - mover_lo) / v))
    } else {
        // Same, with the edges swapped for the opposite direction.
        Some(((obstacle_hi - mover_lo) / v, (obstacle_lo - mover_hi) / v))
    }
}

/// Sweep `mover` by `vel` against a static `obstacle`.
pub fn sweep_aabb(mover: &Rect, vel: Vec2, obstacle: &Rect) -> SweepResult {
    let Some((entry_x, exit_x)) = axis_window(
        mover.left(),
        mover.right(),
        obstacle.left(),
        obstacle.right(),
        vel.x,
    ) else {
        return SweepResult::miss();
    };
    let Some((entry_y, exit_y)) = axis_window(
        mover.top(),
        mover.bottom(),
        obstacle.top(),
        obstacle.bottom(),
        vel.y,
    ) else {
        return SweepResult::miss();
    };

    // Contact starts once *both* axes intersect and ends as soon as *either*
    // stops intersecting.
    let entry = entry_x.max(entry_y);
    let exit = exit_x.min(exit_y);

    if entry > exit || entry < 0.0 || entry > 1.0 {
        if entry < 0.0 && exit > 0.0 {
            // Already inside. Report the (negative) fraction of the current
            // velocity that would just separate the pair.
            return SweepResult {
                ratio: -exit,
                normal: Vec2::ZERO,
            };
        }
        return SweepResult::miss();
    }

    // The later axis to start intersecting carries the contact normal. An
    // exact tie goes to Y.
    let normal = if entry_x > entry_y {
        Vec2::new(if vel.x > 0.0 { -1.0 } else { 1.0 }, 0.0)
    } else {
        Vec2::new(0.0, if vel.y > 0.0 { -1.0 } else { 1.0 })
    };

    SweepResult {
        ratio: entry,
        normal,
    }
}
