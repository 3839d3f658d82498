pub mod file_meta;
pub mod profile;

pub use file_meta::{FileMeta, FileType};
pub use profile::StreamerProfile;
