// Pure scoring library. No I/O, no async; the HTTP surface lives in
// focusmeter-server.
pub mod config;
pub mod consts;
pub mod core_types;
pub mod error;
pub mod scorer;
