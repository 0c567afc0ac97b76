//! Userspace constant table (`syscall_defs.h`).

use std::fmt;

use crate::registry::{Registry, RegisteredCall};

/// Field width of the `SYS_<name>` column; keeps the ids aligned.
const NAME_FIELD_WIDTH: usize = 28;

/// One `#define SYS_<name> (0x<id>)` line.
#[derive(Debug)]
struct Define<'a> {
    call: &'a RegisteredCall,
}

impl fmt::Display for Define<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = format!("SYS_{}", self.call.spec.name);
        write!(
            f,
            "#define {name:<width$}({})",
            self.call.hex_id(),
            width = NAME_FIELD_WIDTH,
        )
    }
}

pub fn render(registry: &Registry) -> String {
    let mut out = String::new();
    for call in registry.calls() {
        out.push_str(&format!("{}\n", Define { call }));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::SyscallSpec;

    #[test]
    fn names_pad_to_the_value_column() {
        let spec = SyscallSpec::parse("calls:\n  read:\n    ret: int\n").unwrap();
        let reg = Registry::build(&spec).unwrap();
        assert_eq!(
            render(&reg),
            "#define SYS_read                    (0x00)\n"
        );
    }

    #[test]
    fn ids_render_like_the_dispatch_table() {
        let mut yaml = String::from("calls:\n");
        for i in 0..16 {
            yaml.push_str(&format!("  c{i}: {{}}\n"));
        }
        let reg = Registry::build(&SyscallSpec::parse(&yaml).unwrap()).unwrap();
        let out = render(&reg);
        assert!(out.contains("(0x0f)"));
        assert!(!out.contains("(0xF)"));
    }
}
