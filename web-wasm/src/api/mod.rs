pub mod client;
pub mod download;

pub use client::{collect_files, dropped_files, FetchTransport, PickedFile};
pub use download::trigger_download;
