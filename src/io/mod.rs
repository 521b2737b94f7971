/// CSV export of estimate reports.
pub mod export;
