mod common;
mod local;

pub use common::{file_uri_to_path, png_to_decoded_image};
pub use local::LocalClipboard;
