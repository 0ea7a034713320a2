//! UI-Komponenten: Canvas, Input-Handling, Status-Bar, Dialoge.

mod canvas;
pub mod dialogs;
/// UI-Layer mit egui
///
/// Maus und Tastatur werden in `AppIntent`s übersetzt, gezeichnet wird
/// ausschließlich aus der `RenderScene`.
pub mod input;
mod keyboard;
pub mod status;

pub use canvas::render_canvas;
pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use status::render_status_bar;
