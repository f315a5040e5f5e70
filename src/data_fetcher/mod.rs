pub mod api;
pub mod models;
pub mod processors;

pub use api::{ContestApi, ContestQuery, NotFoundReason, SecondaryOutcome};
pub use models::{ContestId, ContestRecord, ContestSource, ContestTiming};
pub use processors::{convert_timestring, filter_contests};
