mod logs;
mod metrics;
mod otel;
mod parse_datetime;
pub mod serde_helpers;
mod shutdown;
mod validation;

pub use self::logs::init_logger;
pub use self::metrics::{Labels, Method, Metrics, Status};
pub use self::otel::{OperationTracer, Telemetry, TracingContext};
pub use self::parse_datetime::parse_datetime;
pub use self::shutdown::shutdown_signal;
pub use self::validation::{validation_details, validation_messages};
