/// Renderer trait for drawing a screen's state with Ratatui
///
/// Renderers only read state; anything that changes the game goes through
/// the engine.
pub trait Renderer<S: ?Sized> {
    /// Render the current state into the Ratatui Frame
    fn render(frame: &mut ratatui::Frame, state: &S);
}
