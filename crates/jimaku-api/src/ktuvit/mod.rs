pub mod client;
pub mod error;
pub mod types;

pub use client::KtuvitClient;
pub use error::KtuvitError;
