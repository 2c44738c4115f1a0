pub mod ai_status;
pub mod dispatch;
pub mod ingest;
pub mod next;
pub mod overview;
pub mod progress;
pub mod risks;
pub mod summarize;
