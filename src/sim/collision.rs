//! Collision detection and response for the ball
//!
//! Everything here works on a circle (the ball) against axis-aligned
//! rectangles (bricks and the paddle).

use glam::Vec2;

use super::rect::Rect;
use crate::consts::PADDLE_DEFLECTION;

/// Check whether a circle overlaps a rectangle
///
/// Edge contact counts as overlap. Near the corners the circle must reach the
/// corner point itself, not just the rectangle's bounding box. The rectangle's
/// centre is truncated to whole pixels first, so a brick centred at x = 249.5
/// is tested as if centred at 249.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let half = rect.half_size();
    let dist = (center - rect.center().trunc()).abs();

    if dist.x > half.x + radius || dist.y > half.y + radius {
        return false;
    }

    if dist.x <= half.x || dist.y <= half.y {
        return true;
    }

    (dist - half).length_squared() <= radius * radius
}

/// Brick face the ball most likely struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitFace {
    Left,
    Right,
    Top,
    Bottom,
}

impl HitFace {
    /// Reflect a velocity off this face (side faces flip x, top/bottom flip y)
    pub fn reflect(self, velocity: Vec2) -> Vec2 {
        match self {
            HitFace::Left | HitFace::Right => Vec2::new(-velocity.x, velocity.y),
            HitFace::Top | HitFace::Bottom => Vec2::new(velocity.x, -velocity.y),
        }
    }
}

/// Pick the face of `rect` with the smallest penetration by the ball's bounding box
///
/// On equal overlaps the side faces win over top/bottom.
pub fn hit_face(center: Vec2, radius: f32, rect: &Rect) -> HitFace {
    let overlaps = [
        (HitFace::Left, center.x + radius - rect.left()),
        (HitFace::Right, rect.right() - (center.x - radius)),
        (HitFace::Top, center.y + radius - rect.top()),
        (HitFace::Bottom, rect.bottom() - (center.y - radius)),
    ];

    let mut best = overlaps[0];
    for candidate in &overlaps[1..] {
        if candidate.1 < best.1 {
            best = *candidate;
        }
    }
    best.0
}

/// Horizontal velocity after a paddle hit, proportional to the offset from paddle center
#[inline]
pub fn paddle_deflection(ball_x: f32, paddle: &Rect) -> f32 {
    (ball_x - paddle.center().x) * PADDLE_DEFLECTION
}
