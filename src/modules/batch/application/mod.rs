pub mod orchestrator;
pub mod progress;
pub mod service;

pub use orchestrator::BatchOrchestrator;
pub use progress::{
    BufferSink, JsonLineSink, ProgressEmitter, ProgressMessage, ProgressPayload, ProgressSink,
};
pub use service::BatchService;
