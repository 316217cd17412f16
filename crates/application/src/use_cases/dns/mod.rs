pub mod resolve_domain;

pub use resolve_domain::{IterativeResolver, Resolution, DEFAULT_MAX_REDIRECTS};
