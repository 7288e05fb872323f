//! Generated protobuf and gRPC bindings.
//!
//! Sources live in `proto/`; the Rust code under `src/gen` is produced by `buf generate`
//! and checked in so builds do not need `protoc`.

mod gen;

pub use gen::catalog;
