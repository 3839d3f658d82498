pub mod group;
pub mod pattern;
pub mod scanner;

pub use group::{group_by_uid, UidGroups};
pub use pattern::classify_name;
pub use scanner::FileScanner;
