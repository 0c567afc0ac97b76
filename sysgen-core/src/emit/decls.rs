//! Kernel declaration listing (`syscall.def.h`).
//!
//! The `sys` namespace is a naming boundary only; the kernel implements each
//! declaration wherever it likes and the dispatch table references them by
//! qualified name.

use crate::emit::cdecl::Prototype;
use crate::registry::Registry;

pub fn render(registry: &Registry, kernel_includes: &[String]) -> String {
    let mut out = String::new();
    for inc in kernel_includes {
        out.push_str(&format!("#include {inc}\n"));
    }
    out.push_str("namespace sys {\n");
    for call in registry.calls() {
        out.push_str(&format!("  {};\n", Prototype::new(call, "")));
    }
    out.push_str("}  // namespace sys\n");
    out
}
