//! Observability: in-process counters for store activity and the sink
//! boundary every runtime event flows through.

pub mod metrics;
pub mod sink;

pub use metrics::{EventOps, EventState, OwnerCounters};
pub use sink::{BindingEvent, EventSink, metrics_report, metrics_reset_all, with_event_sink};
