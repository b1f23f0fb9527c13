mod chart;
pub mod format;
mod renderer;
mod state;
pub mod theme;
mod widgets;

pub use renderer::render;
pub use state::{ActionKind, AppState, Feed, LoadKey, LoadRequest, Ticket, ToastKind, View};
pub use theme::Theme;
