//! Artifact renderers.
//!
//! Each artifact is built from a small structured model over the registry and
//! rendered by its own formatter, so tests can check ids, names and types
//! without diffing raw text. All five artifacts of a run come from the same
//! [`Registry`]; there is no other source of numbering.

pub mod bindings;
pub mod cdecl;
pub mod constants;
pub mod decls;
pub mod dispatch;
pub mod trampoline;

use crate::registry::Registry;
use crate::spec::{SpecError, SyscallSpec};

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: &'static str,
    pub contents: String,
}

/// Render the full artifact set, or nothing.
///
/// Validation runs first: a spec that fails to register produces no artifacts
/// at all. A kernel artifact and a userspace artifact disagreeing on even one
/// id is an ABI break, so a partial set is never observable.
pub fn generate(spec: &SyscallSpec) -> Result<Vec<Artifact>, SpecError> {
    let registry = Registry::build(spec)?;
    log::debug!("rendering artifacts for {} calls", registry.len());
    Ok(vec![
        Artifact {
            filename: "syscalls.inc",
            contents: dispatch::render(&registry),
        },
        Artifact {
            filename: "syscall_defs.h",
            contents: constants::render(&registry),
        },
        Artifact {
            filename: "syscall.def.h",
            contents: decls::render(&registry, &spec.kernel_includes),
        },
        Artifact {
            filename: "sysbind.h",
            contents: bindings::render(&registry, &spec.kernel_includes, &spec.userspace_includes),
        },
        Artifact {
            filename: "sysbind.c",
            contents: trampoline::render(&registry),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{SpecError, SyscallSpec};

    const SPEC: &str = "\
calls:
  restart: {}
  read:
    ret: long
    args: [\"fd: int\", \"buf: void*\", \"len: size_t\"]
kernel:
  includes: [\"<types.h>\"]
userspace:
  includes: [\"<sys/types.h>\"]
";

    #[test]
    fn regeneration_is_byte_identical() {
        let spec = SyscallSpec::parse(SPEC).unwrap();
        let first = generate(&spec).unwrap();
        let second = generate(&spec).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ids_agree_across_artifacts() {
        let spec = SyscallSpec::parse(SPEC).unwrap();
        let artifacts = generate(&spec).unwrap();
        let table = &artifacts[0].contents;
        let defs = &artifacts[1].contents;
        let tramp = &artifacts[4].contents;
        for hex in ["0x00", "0x01"] {
            assert!(table.contains(hex), "{hex} missing from dispatch table");
            assert!(defs.contains(&format!("({hex})")), "{hex} missing from constants");
            assert!(tramp.contains(&format!("__syscall_eintr({hex},")), "{hex} missing from trampolines");
        }
    }

    #[test]
    fn invalid_spec_produces_no_artifacts() {
        let spec = SyscallSpec::parse(
            "calls:\n  wide:\n    args: [\"a: int\", \"b: int\", \"c: int\", \"d: int\", \"e: int\", \"f: int\", \"g: int\"]\n",
        )
        .unwrap();
        assert!(matches!(
            generate(&spec),
            Err(SpecError::TooManyArgs { .. })
        ));
    }
}
