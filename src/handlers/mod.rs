//! Handler implementations

pub mod redis;
pub mod stream;
pub mod udp;

pub use redis::{RedisClient, RedisHandler};
pub use stream::StreamHandler;
pub use udp::{UdpHandler, UdpWriter};
