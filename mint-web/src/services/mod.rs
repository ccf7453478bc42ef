//! Browser and network services

pub mod download;
pub mod scheduler;
pub mod store;
pub mod wallet;

#[cfg(test)]
pub(crate) mod testing;
