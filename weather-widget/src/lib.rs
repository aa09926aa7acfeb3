//! Terminal front end for the weather widget
//!
//! Built on the tui-dispatch effect runtime:
//! 1. Event (keyboard) -> WeatherPanel.handle_event() -> Actions
//! 2. Actions dispatched to the EffectStore; the reducer returns effects
//! 3. `Effect::RunWidget` spawns a controller run on the TaskManager
//! 4. The controller renders into an [`ActionSurface`](surface::ActionSurface),
//!    which feeds each widget state back as an action
//! 5. If state changed, re-render

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod effect;
pub mod reducer;
pub mod state;
pub mod surface;
pub mod terminal;
