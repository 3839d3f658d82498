pub mod document;
pub mod palette;
pub mod store;

pub use document::RegistryDocument;
pub use palette::{color_for_uid, is_hex_color};
pub use store::StreamerRegistry;
