pub mod audit;
pub mod category;
pub mod details;
pub mod lenient;
pub mod report;
pub mod view;

pub use audit::{Audit, AuditStatus, LearnMoreLink, ScoreDisplayMode};
pub use category::{AuditRef, Category, CategoryKey};
pub use details::{
    AuditDetails, DebugDataDetails, FilmstripDetails, FilmstripFrame, ListDetails,
    OpportunityDetails, OpportunityItem, TableDetails, TableHeading, UnknownDetails,
};
pub use report::{AuditReport, LighthouseResult};
pub use view::{
    BucketKind, CategoryBucket, CategoryScore, CategorySection, ScoreBand, ScoreSummary,
    ViewModel, ViewState,
};
