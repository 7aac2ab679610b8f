//! ST7789 display encoder
//!
//! Drawing is staged: widgets queue solid fills, and the controller
//! flushes a bounded number of them per tick.

pub mod chunk;
pub mod frame;
mod graphics;
pub mod st7789;

pub use chunk::Chunks;
pub use frame::{FrameQueue, PendingFill, FRAME_QUEUE_LEN};
pub use st7789::St7789;
