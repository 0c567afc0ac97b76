//! Kernel dispatch-macro table (`syscalls.inc`).
//!
//! The kernel build includes this file under its own `DISPATCH` definition to
//! populate the handler table, so the line shape is an artifact-format
//! contract, not a style choice.

use std::fmt;

use crate::registry::{Registry, RegisteredCall};

/// One `DISPATCH(0x<id>, <name>[, <type name>, ...])` invocation.
#[derive(Debug)]
struct MacroLine<'a> {
    call: &'a RegisteredCall,
}

impl fmt::Display for MacroLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DISPATCH({}, {}", self.call.hex_id(), self.call.spec.name)?;
        for arg in &self.call.spec.args {
            write!(f, ", {} {}", arg.ty, arg.name)?;
        }
        write!(f, ")")
    }
}

pub fn render(registry: &Registry) -> String {
    let mut out = String::new();
    for call in registry.calls() {
        out.push_str(&format!("{}\n", MacroLine { call }));
    }
    out
}
