//! Trampoline source (`sysbind.c`).
//!
//! Each body widens its arguments into the six dispatch registers and hands
//! off to `__syscall_eintr`, which the architecture layer provides and which
//! restarts the call when a signal interrupts it. The generated code relies
//! on that restart behavior; nothing here retries.

use std::fmt;

use crate::emit::cdecl::Prototype;
use crate::registry::{Registry, RegisteredCall};

const PROLOGUE: &str = "\
#include <sys/sysbind.h>
#include <sys/syscall.h>

extern long __syscall_eintr(int num, unsigned long long a, unsigned long long b,
                            unsigned long long c, unsigned long long d,
                            unsigned long long e, unsigned long long f);
";

/// One marshalling function body.
#[derive(Debug)]
struct Trampoline<'a> {
    call: &'a RegisteredCall,
}

impl fmt::Display for Trampoline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let call = self.call;
        let slots = call.slots().map(|slot| match slot {
            Some(arg) => format!("(unsigned long long){}", arg.name),
            None => "0".to_owned(),
        });
        writeln!(f, "{} {{", Prototype::new(call, "sysbind_"))?;
        writeln!(
            f,
            "    return ({})__syscall_eintr({}, {});",
            call.spec.ret,
            call.hex_id(),
            slots.join(", "),
        )?;
        write!(f, "}}")
    }
}

pub fn render(registry: &Registry) -> String {
    let mut out = String::from(PROLOGUE);
    for call in registry.calls() {
        out.push('\n');
        out.push_str(&format!("{}\n", Trampoline { call }));
    }
    out
}
