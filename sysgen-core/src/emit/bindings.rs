//! Userspace binding header (`sysbind.h`).
//!
//! Included by libc internals (C) and by in-tree C++ userspace alike, hence
//! the `extern "C"` guard. Kernel-side translation units that want the
//! prototypes define `KERNEL` and get the kernel include list instead.

use crate::emit::cdecl::Prototype;
use crate::registry::Registry;

pub fn render(
    registry: &Registry,
    kernel_includes: &[String],
    userspace_includes: &[String],
) -> String {
    let mut out = String::from("#pragma once\n\n");

    out.push_str("#ifdef KERNEL\n");
    for inc in kernel_includes {
        out.push_str(&format!("#include {inc}\n"));
    }
    out.push_str("#else\n");
    for inc in userspace_includes {
        out.push_str(&format!("#include {inc}\n"));
    }
    out.push_str("#endif\n\n");

    out.push_str("#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n");
    for call in registry.calls() {
        out.push_str(&format!("{};\n", Prototype::new(call, "sysbind_")));
    }
    out.push_str("\n#ifdef __cplusplus\n}\n#endif\n");
    out
}
