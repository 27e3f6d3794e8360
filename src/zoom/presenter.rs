use anyhow::Result;

use crate::zoom::magnify::MagnifiedFrame;
use crate::zoom::region::CursorPosition;

/// Strategy for getting the magnified view in front of the user. One
/// implementation paints its own floating window, the other feeds an external
/// panel surface; the controller drives both identically. Neither performs
/// clamping or capture work, and neither may intercept input aimed at other
/// applications.
pub trait OverlayPresenter {
    /// Overlay visibility follows the toggle state.
    fn set_active(&mut self, active: bool);

    /// Called on every tick whose polled cursor differs from the previous
    /// one, in both toggle states.
    fn cursor_moved(&mut self, cursor: CursorPosition);

    /// Deliver one magnified frame. Only called while active.
    fn present(&mut self, frame: &MagnifiedFrame, cursor: CursorPosition) -> Result<()>;
}
