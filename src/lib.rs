pub mod modules;
pub mod shared;

// Re-exports for embedding: the batch engine and the pieces a caller
// wires around it.
pub use modules::batch::{
    BatchItem, BatchMode, BatchOrchestrator, BatchReport, BatchRequest, BatchService,
    BatchSummary, BufferSink, CoordinateFormat, DelimiterMode, ErrorEntry, ItemResult,
    JsonLineSink, Outcome, OutcomePayload, ProgressEmitter, ProgressMessage, ProgressPayload,
    ProgressSink, RouteInputMode,
};
pub use modules::dataset::{augment_table, build_items, ColumnSelection, CsvTable};
pub use modules::provider::{
    create_provider, GeoPoint, GeoProviderClient, ProviderConfig, ProviderFailure, ProviderKind,
    ReverseLocation, RouteSummary, TokenManager,
};
pub use shared::errors::{AppError, AppResult, ErrorKind};
pub use shared::utils::init_logger;
pub use shared::TokenStore;
