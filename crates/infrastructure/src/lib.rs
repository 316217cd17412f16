//! iterdns Infrastructure Layer
//!
//! Wire-level adapters for the application ports: a hickory-proto backed
//! message codec and a blocking UDP transport.
pub mod dns;
