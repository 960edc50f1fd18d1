pub mod schema;

pub use schema::{GitInfo, ReadSetRecord, SyncOutput};
