pub mod arrivals;
pub mod average_tracker;
pub mod traits;
pub mod wait_queue;
pub mod washer;

// Re-export commonly used types
pub use arrivals::{ArrivalGenerator, DEFAULT_ARRIVAL_PROBABILITY};
pub use average_tracker::AverageTracker;
pub use traits::{Cycle, React};
pub use wait_queue::WaitQueue;
pub use washer::Washer;
