pub mod application;
pub mod domain;

// Re-exports for easy external access - only export what's actually used
pub use application::{
    BatchOrchestrator, BatchService, BufferSink, JsonLineSink, ProgressEmitter, ProgressMessage,
    ProgressPayload, ProgressSink,
};
pub use domain::{
    BatchItem, BatchMode, BatchReport, BatchRequest, BatchSummary, CoordinateFormat,
    DelimiterMode, ErrorEntry, ItemResult, Outcome, OutcomePayload, RouteInputMode,
};
