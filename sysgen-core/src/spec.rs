//! Spec loading and normalization.
//!
//! The input is a YAML document with a `calls` mapping plus kernel-side and
//! userspace-side include lists. `calls` stays a mapping for readability, but
//! its document order is a format-level guarantee: it decides id assignment.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

#[derive(thiserror::Error, Debug)]
pub enum SpecError {
    #[error("call `{call}`: malformed argument `{arg}` (expected \"name: type\")")]
    MalformedArg { call: String, arg: String },

    #[error("duplicate call name `{call}`")]
    DuplicateCall { call: String },

    #[error("call `{call}` declares {count} arguments, the register convention has {max}")]
    TooManyArgs { call: String, count: usize, max: usize },

    #[error("spec is not valid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One call as written in the spec file. Unknown fields land in `meta` so a
/// spec can carry annotations the generator does not interpret yet.
#[derive(Debug, Default, Deserialize)]
pub struct CallDef {
    #[serde(default)]
    pub ret: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(flatten)]
    pub meta: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct IncludeSection {
    #[serde(default)]
    includes: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSpec {
    #[serde(default, deserialize_with = "ordered_calls")]
    calls: Vec<(String, CallDef)>,
    #[serde(default)]
    kernel: IncludeSection,
    #[serde(default)]
    userspace: IncludeSection,
}

/// Deserialize the `calls` mapping entry by entry, keeping document order.
///
/// Going through a map visitor (instead of a map type) also makes duplicate
/// keys visible to the caller rather than silently last-one-wins.
fn ordered_calls<'de, D>(de: D) -> Result<Vec<(String, CallDef)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CallsVisitor;

    impl<'de> Visitor<'de> for CallsVisitor {
        type Value = Vec<(String, CallDef)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a mapping of call name to definition")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut calls = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(name) = map.next_key::<String>()? {
                // `name:` with no body is a zero-argument, void call
                let def = map.next_value::<Option<CallDef>>()?.unwrap_or_default();
                calls.push((name, def));
            }
            Ok(calls)
        }
    }

    de.deserialize_map(CallsVisitor)
}

/// A normalized `name: type` argument pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pub name: String,
    pub ty: String,
}

/// A normalized call: defaults applied, argument strings split.
#[derive(Debug, Clone)]
pub struct CallSpec {
    pub name: String,
    pub ret: String,
    pub args: Vec<Arg>,
    pub meta: BTreeMap<String, serde_yaml::Value>,
}

/// The loaded specification, calls in author-declared order.
#[derive(Debug, Default)]
pub struct SyscallSpec {
    pub calls: Vec<CallSpec>,
    pub kernel_includes: Vec<String>,
    pub userspace_includes: Vec<String>,
}

impl SyscallSpec {
    pub fn parse(text: &str) -> Result<Self, SpecError> {
        let raw: RawSpec = serde_yaml::from_str(text)?;

        let mut seen = HashSet::new();
        let mut calls = Vec::with_capacity(raw.calls.len());
        for (name, def) in raw.calls {
            if !seen.insert(name.clone()) {
                return Err(SpecError::DuplicateCall { call: name });
            }
            let args = def
                .args
                .iter()
                .map(|raw_arg| split_arg(&name, raw_arg))
                .collect::<Result<Vec<_>, _>>()?;
            calls.push(CallSpec {
                ret: def.ret.unwrap_or_else(|| "void".to_owned()),
                args,
                meta: def.meta,
                name,
            });
        }

        Ok(Self {
            calls,
            kernel_includes: raw.kernel.includes,
            userspace_includes: raw.userspace.includes,
        })
    }
}

/// Split one `"name: type"` argument string on the first `:`.
fn split_arg(call: &str, raw: &str) -> Result<Arg, SpecError> {
    let malformed = || SpecError::MalformedArg {
        call: call.to_owned(),
        arg: raw.to_owned(),
    };
    let (name, ty) = raw.split_once(':').ok_or_else(malformed)?;
    let (name, ty) = (name.trim(), ty.trim());
    if name.is_empty() || ty.is_empty() {
        return Err(malformed());
    }
    Ok(Arg {
        name: name.to_owned(),
        ty: ty.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calls_keep_document_order() {
        let spec = SyscallSpec::parse(
            "calls:\n  zeta: {}\n  alpha: {}\n  mu: {}\n",
        )
        .unwrap();
        let names: Vec<_> = spec.calls.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "mu"]);
    }

    #[test]
    fn defaults_apply() {
        let spec = SyscallSpec::parse("calls:\n  restart:\n").unwrap();
        let call = &spec.calls[0];
        assert_eq!(call.ret, "void");
        assert!(call.args.is_empty());
        assert!(spec.kernel_includes.is_empty());
    }

    #[test]
    fn arg_strings_split_on_first_separator() {
        let spec = SyscallSpec::parse(
            "calls:\n  stat:\n    ret: int\n    args: [\"statbuf: struct stat*\"]\n",
        )
        .unwrap();
        assert_eq!(
            spec.calls[0].args[0],
            Arg {
                name: "statbuf".to_owned(),
                ty: "struct stat*".to_owned(),
            }
        );
    }

    #[test]
    fn missing_separator_is_rejected() {
        let err = SyscallSpec::parse("calls:\n  open:\n    args: [\"path\"]\n").unwrap_err();
        match err {
            SpecError::MalformedArg { call, arg } => {
                assert_eq!(call, "open");
                assert_eq!(arg, "path");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_call_names_are_rejected() {
        let err = SyscallSpec::parse("calls:\n  fork: {}\n  fork: {}\n").unwrap_err();
        match err {
            SpecError::DuplicateCall { call } => assert_eq!(call, "fork"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_fields_are_kept_as_metadata() {
        let spec = SyscallSpec::parse(
            "calls:\n  mount:\n    ret: int\n    since: \"0.4\"\n",
        )
        .unwrap();
        assert!(spec.calls[0].meta.contains_key("since"));
    }

    #[test]
    fn include_lists_load() {
        let spec = SyscallSpec::parse(
            "calls: {}\nkernel:\n  includes: [\"<types.h>\"]\nuserspace:\n  includes: [\"<sys/types.h>\"]\n",
        )
        .unwrap();
        assert_eq!(spec.kernel_includes, ["<types.h>"]);
        assert_eq!(spec.userspace_includes, ["<sys/types.h>"]);
    }
}
