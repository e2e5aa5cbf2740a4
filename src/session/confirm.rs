/// Answers the "delete everything?" question asked before clearing the board.
///
/// Implemented for closures, so a UI can pop up a dialog, and for `bool`,
/// so headless callers can always accept or always decline.
pub trait ClearConfirmation {
    /// Returns true to go ahead with the clear.
    fn confirm_clear(&mut self) -> bool;
}

impl<F> ClearConfirmation for F
where
    F: FnMut() -> bool,
{
    fn confirm_clear(&mut self) -> bool {
        self()
    }
}

impl ClearConfirmation for bool {
    fn confirm_clear(&mut self) -> bool {
        *self
    }
}
