use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the props pattern: they receive data via struct
/// fields (often borrowed from `App`/`TuiState`) and render into a `Rect`.
/// Stateful components split into a persistent `*State` struct living in
/// `TuiState` and a transient render wrapper created each frame with
/// borrowed state.
///
/// `render` takes `&mut self` so components can update internal
/// presentation state (scroll offsets, list selection) during the render
/// pass, aligning with ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
