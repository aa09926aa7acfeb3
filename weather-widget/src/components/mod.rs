pub mod conditions_body;
pub mod help_bar;
pub mod weather_panel;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use conditions_body::{ConditionsBody, ConditionsBodyProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use weather_panel::{WeatherPanel, WeatherPanelProps, ERROR_ICON, SPINNERS};
