pub mod ark_client;

pub use ark_client::*;
