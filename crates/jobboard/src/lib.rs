pub mod board;
pub mod config;
pub mod error;
pub mod telemetry;

pub use board::{board_router, BoardStore, JobBoard, MemoryStore};
pub use error::AppError;
