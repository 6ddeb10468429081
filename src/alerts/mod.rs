//! Alert rendering
//!
//! Turns host alert events into SMS through the Free Mobile renderer.

mod dispatcher;
mod freemobile;
mod renderer;

pub use dispatcher::AlertDispatcher;
pub use freemobile::{FreeMobileSms, RENDERER_NAME, TEST_MESSAGE};
pub use renderer::AlertRenderer;
