//! Agent-facing surface: tool/resource dispatch, the stdio JSON-RPC loop,
//! and the sample-data seed. Transport framing stops here; everything below
//! this module speaks typed values and translated errors.

pub mod resources;
pub mod rpc;
pub mod seed;
pub mod tools;
