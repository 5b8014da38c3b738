//! Frame synchronizer
//!
//! One blocking call per frame: spin until the scan position enters the
//! vertical blank, then spin until it leaves. The spin has no yield and no
//! timeout - the target is a single-core environment whose clock never
//! stalls, and the busy-wait IS the frame pacing.

use super::display::DisplayBackend;

/// Block until the display enters, then exits, its vertical-blank interval
pub fn await_vblank<D: DisplayBackend>(display: &D) {
    let visible = display.surface().height() as u16;
    while display.scanline() < visible {}
    while display.scanline() >= visible {}
}
