/// CSV export of dashboard frames.
pub mod export;
