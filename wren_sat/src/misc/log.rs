/*!
Items related to [logging](log).

Calls to the log macros are made throughout the library, keyed to a target
per subsystem so output can be narrowed to relevant parts.

No log implementation is linked by the library.
For example, with [env_logger](https://docs.rs/env_logger) initialised by an
application, logs of propagation can be filtered with `RUST_LOG=propagation …`.
*/

/// Targets to be used within a [log] macro.
pub mod targets {
    pub const ANALYSIS: &str = "analysis";
    pub const BACKJUMP: &str = "backjump";
    pub const DECISION: &str = "decision";
    pub const INGESTION: &str = "ingestion";
    pub const PROPAGATION: &str = "propagation";
}
