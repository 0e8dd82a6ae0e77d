pub mod classification;
pub mod outcome;
pub mod shortlist;

pub use classification::{
    Classification, CompanyFilter, ReportSection, SubsectorRanking, SubsectorSection,
};
pub use outcome::FetchOutcome;
pub use shortlist::{PeerCompany, RankedCompany, Shortlist};
