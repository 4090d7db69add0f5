pub mod components;
pub mod errors;
pub mod execution;
pub mod types;

#[cfg(test)]
mod tests;
