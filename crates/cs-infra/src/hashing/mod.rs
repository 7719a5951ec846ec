mod md5_hasher;

pub use md5_hasher::Md5Hasher;
