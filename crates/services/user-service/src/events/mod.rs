//! Event publisher adapters implementing the
//! [`EventPublisher`](crate::ports::EventPublisher) port.

mod log;
mod memory;
mod redis;

pub use self::log::LogEventPublisher;
pub use self::memory::InMemoryEventPublisher;
pub use self::redis::RedisEventPublisher;
