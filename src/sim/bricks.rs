//! The brick field: a fixed ROWS x COLS grid of destructible targets

use glam::Vec2;

use super::collision::circle_rect_overlap;
use super::rect::Rect;
use crate::color::Color;
use crate::consts::*;

/// A single brick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    /// Fixed at construction
    pub rect: Rect,
    pub color: Color,
    /// Opacity used for the intro fade-in, 0..=1
    pub fade: f32,
    pub active: bool,
}

/// Grid of bricks stored row-major, with a running count of active bricks
#[derive(Debug, Clone)]
pub struct BrickField {
    bricks: [[Brick; COLS]; ROWS],
    remaining: usize,
}

impl Default for BrickField {
    fn default() -> Self {
        Self::new()
    }
}

impl BrickField {
    /// Lay out the grid with its row/column color gradient; every brick starts active and invisible
    pub fn new() -> Self {
        let bricks = std::array::from_fn(|row| std::array::from_fn(|col| Brick {
            rect: brick_rect(row, col),
            color: brick_color(row, col),
            fade: 0.0,
            active: true,
        }));

        Self {
            bricks,
            remaining: BRICK_COUNT,
        }
    }

    /// Number of bricks still standing
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Count active bricks by scanning the grid (matches `remaining()`)
    pub fn active_count(&self) -> usize {
        self.iter().filter(|(_, _, b)| b.active).count()
    }

    pub fn get(&self, row: usize, col: usize) -> &Brick {
        &self.bricks[row][col]
    }

    /// Iterate `(row, col, brick)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Brick)> {
        self.bricks
            .iter()
            .enumerate()
            .flat_map(|(row, line)| line.iter().enumerate().map(move |(col, b)| (row, col, b)))
    }

    /// First active brick (row-major) overlapping the ball
    pub fn first_hit(&self, center: Vec2, radius: f32) -> Option<(usize, usize)> {
        self.iter()
            .find(|(_, _, b)| b.active && circle_rect_overlap(center, radius, &b.rect))
            .map(|(row, col, _)| (row, col))
    }

    /// Knock out a brick, returning a copy of it as it was before destruction
    ///
    /// Returns `None` if the brick was already inactive.
    pub fn destroy(&mut self, row: usize, col: usize) -> Option<Brick> {
        let brick = &mut self.bricks[row][col];
        if !brick.active {
            return None;
        }
        let before = *brick;
        brick.active = false;
        brick.fade = 0.0;
        self.remaining -= 1;
        Some(before)
    }

    /// One step of the intro fade-in for every active, not yet opaque brick
    pub fn fade_in_step(&mut self) {
        for brick in self.bricks.iter_mut().flatten() {
            if brick.active && brick.fade < 1.0 {
                brick.fade = (brick.fade + BRICK_FADE_STEP).min(1.0);
            }
        }
    }

    /// Snap every active brick to full opacity
    pub fn reveal(&mut self) {
        for brick in self.bricks.iter_mut().flatten().filter(|b| b.active) {
            brick.fade = 1.0;
        }
    }

    /// Reactivate every brick; fade and color are left as they are
    pub fn reset(&mut self) {
        for brick in self.bricks.iter_mut().flatten() {
            brick.active = true;
        }
        self.remaining = BRICK_COUNT;
    }
}

fn brick_rect(row: usize, col: usize) -> Rect {
    Rect::new(
        col as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICKS_LEFT,
        row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICKS_TOP,
        BRICK_WIDTH,
        BRICK_HEIGHT,
    )
}

/// Red-to-green gradient by row, blended 20% toward the column gradient
fn brick_color(row: usize, col: usize) -> Color {
    let row_t = row as f32 / (ROWS - 1) as f32;
    let col_t = col as f32 / (COLS - 1) as f32;
    let by_row = Color::RED.lerp(Color::GREEN, row_t);
    let by_col = Color::RED.lerp(Color::GREEN, col_t);
    by_row.lerp(by_col, 0.2)
}
