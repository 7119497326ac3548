mod cli;
mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::LoadArgs;
pub use types::{HttpMethod, PositiveU64, PositiveUsize};
