//! sysgen-core
//!
//! Model and renderers for the syscall table generator: a YAML call
//! specification goes in, five mutually-consistent kernel/userspace ABI
//! artifacts come out.
//!
//! Numbering is positional: a call's id is its 0-based position in the spec's
//! `calls` mapping. The mapping's document order is therefore load-bearing,
//! and [`spec::SyscallSpec::parse`] preserves it explicitly instead of going
//! through an unordered map type.

pub mod emit;
pub mod registry;
pub mod spec;

pub use emit::{generate, Artifact};
pub use registry::{Registry, RegisteredCall, ARG_SLOTS};
pub use spec::{Arg, CallSpec, SpecError, SyscallSpec};
