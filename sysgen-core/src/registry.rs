//! Call numbering and the register-slot convention.
//!
//! Ids are assigned by a single pass over the calls in specification order;
//! there is no counter state anywhere else, so two loads of the same spec
//! cannot disagree.

use crate::spec::{Arg, CallSpec, SpecError, SyscallSpec};

/// Number of positional argument registers in the dispatch convention.
pub const ARG_SLOTS: usize = 6;

/// A call with its assigned id.
#[derive(Debug, Clone)]
pub struct RegisteredCall {
    pub id: usize,
    pub spec: CallSpec,
}

impl RegisteredCall {
    /// The id exactly as it appears in any artifact that prints one.
    ///
    /// Every emitter goes through this, which is what keeps the kernel table
    /// and the userspace table byte-identical on ids.
    pub fn hex_id(&self) -> String {
        format!("0x{:02x}", self.id)
    }

    /// Formal parameter list, `"int fd, void* buf"`. Empty for no arguments.
    pub fn formal_args(&self) -> String {
        self.spec
            .args
            .iter()
            .map(|a| format!("{} {}", a.ty, a.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Arguments mapped onto the register slots, in order. Slots past the
    /// declared arguments stay `None` and are zero-filled by the trampoline.
    pub fn slots(&self) -> [Option<&Arg>; ARG_SLOTS] {
        let mut slots = [None; ARG_SLOTS];
        for (slot, arg) in slots.iter_mut().zip(&self.spec.args) {
            *slot = Some(arg);
        }
        slots
    }
}

/// The finalized, immutable call table all emitters render from.
#[derive(Debug, Default)]
pub struct Registry {
    calls: Vec<RegisteredCall>,
}

impl Registry {
    /// Number the calls in specification order, 0-based and contiguous.
    ///
    /// A call that cannot fit the register convention fails the whole build
    /// here, before any artifact exists to disagree with another.
    pub fn build(spec: &SyscallSpec) -> Result<Self, SpecError> {
        let calls = spec
            .calls
            .iter()
            .enumerate()
            .map(|(id, call)| {
                if call.args.len() > ARG_SLOTS {
                    return Err(SpecError::TooManyArgs {
                        call: call.name.clone(),
                        count: call.args.len(),
                        max: ARG_SLOTS,
                    });
                }
                Ok(RegisteredCall {
                    id,
                    spec: call.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { calls })
    }

    pub fn calls(&self) -> &[RegisteredCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}
