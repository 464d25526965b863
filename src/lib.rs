pub mod cli;
pub mod display;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod statistics;
pub mod types;

// Re-export commonly used items
pub use error::NormalizeError;
pub use statistics::print_statistics;
