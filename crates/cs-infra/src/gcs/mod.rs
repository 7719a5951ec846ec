//! Google Cloud Storage backend over the XML API.

mod object_store;
mod token;

pub use object_store::GcsObjectStore;
pub use token::{AccessTokenProvider, ENV_ACCESS_TOKEN};
