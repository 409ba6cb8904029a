pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
pub mod highlight;
pub mod input;
pub mod path;
pub mod prompt;

#[cfg(test)]
mod test_support;
