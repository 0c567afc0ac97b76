//! Shared C-declaration formatting.

use std::fmt;

use crate::registry::RegisteredCall;

/// The head of a C function declaration or definition,
/// `<ret> <name>(<type name, ...>)`.
///
/// `prefix` lets the binding artifacts mangle the name (`sysbind_read`)
/// while the kernel listing declares the bare name.
#[derive(Debug)]
pub struct Prototype<'a> {
    pub ret: &'a str,
    pub name: String,
    pub args: String,
}

impl<'a> Prototype<'a> {
    pub fn new(call: &'a RegisteredCall, prefix: &str) -> Self {
        Self {
            ret: &call.spec.ret,
            name: format!("{prefix}{}", call.spec.name),
            args: call.formal_args(),
        }
    }
}

impl fmt::Display for Prototype<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}({})", self.ret, self.name, self.args)
    }
}
