pub mod answer_policy;
pub mod delegation_extractor;
pub mod delegation_lookup;
pub mod name_server_client;
pub mod resolution_cache;

pub use answer_policy::answer_from;
pub use delegation_extractor::{extract_server_ips, first_address, ns_target_names};
pub use delegation_lookup::DelegationLookup;
pub use name_server_client::NameServerClient;
pub use resolution_cache::{CacheEntry, CacheRecord, ResolutionCache};
