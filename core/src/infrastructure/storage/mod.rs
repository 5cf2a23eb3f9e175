pub mod temp_upload_store;

pub use temp_upload_store::*;
