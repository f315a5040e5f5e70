pub mod clist;
pub mod contest;
pub mod vjudge;

pub use clist::{ClistContest, ClistContestList};
pub use contest::{ContestDuration, ContestId, ContestRecord, ContestSource, ContestTiming};
pub use vjudge::VjudgeListing;
