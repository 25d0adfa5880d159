//! Screen controllers for the application.
//!
//! Each screen controller owns its state and handles both rendering and
//! events. The app drives a single screen:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                    App                      │
//! │   poll event ──► screen.handle_event(...)   │
//! │   timeout    ──► screen.tick()              │
//! │   every loop ──► screen.render(...)         │
//! │                                             │
//! │   ScreenAction::Finish(result) ends the run │
//! └─────────────────────────────────────────────┘
//! ```

pub mod chooser;
pub mod screen_trait;

pub use chooser::ChooserScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
