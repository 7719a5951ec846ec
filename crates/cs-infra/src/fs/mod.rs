pub mod file_reader;
pub mod object_store;

pub use file_reader::TokioFileReader;
pub use object_store::FsObjectStore;
