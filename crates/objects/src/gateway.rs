//! Gateway endpoint discovery payloads.

use patchwire_presence::record;

record! {
    pub struct SessionStartLimit {
        pub total: u32 => value "total",
        pub remaining: u32 => value "remaining",
        /// Milliseconds until the limit resets.
        pub reset_after: u64 => value "reset_after",
        pub max_concurrency: u32 => value "max_concurrency",
    }
}

record! {
    /// Response of the gateway endpoints. `shards` and `session_start_limit`
    /// are only sent to bots.
    pub struct GatewayEndpoint {
        pub url: String => value "url",
        pub shards: u32 => value "shards",
        pub session_start_limit: SessionStartLimit => value "session_start_limit",
    }
}
