//! Per-frame simulation step
//!
//! `tick` is the pure half of the frame loop: it mutates the state in the
//! fixed order the display protocol requires and emits the draw commands
//! the driver must apply, in order. Erase commands use the pre-move
//! positions; draw commands use the post-move positions. That ordering is
//! the only thing preventing ghosting on the single-buffered surface, so it
//! is preserved verbatim.

use super::state::GameState;
use crate::consts::{BACKGROUND, PADDLE_SPEED};
use crate::gfx::{Color, Rect};

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left paddle up/down
    pub p1_up: bool,
    pub p1_down: bool,
    /// Right paddle up/down
    pub p2_up: bool,
    pub p2_down: bool,
}

/// One rectangle fill for the driver to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOp {
    pub rect: Rect,
    pub color: Color,
}

/// Vertical delta for one paddle; down is evaluated second and wins a tie
fn paddle_delta(up: bool, down: bool) -> i32 {
    let mut delta = 0;
    if up {
        delta = -PADDLE_SPEED;
    }
    if down {
        delta = PADDLE_SPEED;
    }
    delta
}

/// Advance the match by one frame, returning the six draw commands
///
/// Order: erase ball, erase both paddles (old positions) - advance ball -
/// deflect against paddle 1 then paddle 2 - slide paddle 1 - slide paddle 2
/// - draw ball, draw both paddles (new positions).
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<DrawOp> {
    let mut ops = Vec::with_capacity(6);
    ops.push(DrawOp {
        rect: state.ball.rect(),
        color: BACKGROUND,
    });
    ops.push(DrawOp {
        rect: state.paddles[0].rect(),
        color: BACKGROUND,
    });
    ops.push(DrawOp {
        rect: state.paddles[1].rect(),
        color: BACKGROUND,
    });

    let arena = state.arena;
    state.ball.advance(arena, &mut state.rng);
    state.ball.deflect(&state.paddles[0], &mut state.rng);
    state.ball.deflect(&state.paddles[1], &mut state.rng);

    let delta = paddle_delta(input.p1_up, input.p1_down);
    state.paddles[0].slide(delta, arena);
    let delta = paddle_delta(input.p2_up, input.p2_down);
    state.paddles[1].slide(delta, arena);

    state.frame_ticks += 1;

    ops.push(DrawOp {
        rect: state.ball.rect(),
        color: state.ball.color,
    });
    ops.push(DrawOp {
        rect: state.paddles[0].rect(),
        color: state.paddles[0].color,
    });
    ops.push(DrawOp {
        rect: state.paddles[1].rect(),
        color: state.paddles[1].color,
    });
    ops
}
