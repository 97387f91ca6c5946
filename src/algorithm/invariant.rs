//! Debug-only checks on the color state machine.
//!
//! Release builds compile these away.

use super::color::Color;

/// The only color a vertex may move to from `from`, if any.
const fn next_color(from: Color) -> Option<Color> {
    match from {
        Color::Unvisited => Some(Color::Discovered),
        Color::Discovered => Some(Color::Finished),
        Color::Finished => None,
    }
}

/// Debug-asserts that `from -> to` is a forward, single-step transition.
#[inline(always)]
pub(crate) fn debug_assert_transition(from: Color, to: Color) {
    debug_assert!(
        matches!(next_color(from), Some(next) if next == to),
        "color moved backwards or skipped a step: {from:?} -> {to:?}",
    );
}

/// Debug-asserts that a reopened vertex was finished.
#[inline(always)]
pub(crate) fn debug_assert_reopen(from: Color) {
    debug_assert!(
        from == Color::Finished,
        "only finished vertices can be reopened, found {from:?}",
    );
}
