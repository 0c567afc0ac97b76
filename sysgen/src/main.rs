use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use sysgen_core::emit;
use sysgen_core::spec::SyscallSpec;

/// Regenerate the syscall ABI artifacts from a YAML specification.
///
/// All five artifacts are rendered in memory first; nothing is written unless
/// the whole spec validates, so the kernel-side and userspace-side tables can
/// never get out of step with each other on disk.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the syscall specification.
    #[clap(short, long)]
    spec: String,

    /// Directory the artifacts are written into (created if missing).
    #[clap(short, long)]
    out_dir: String,
}

fn generate(spec_path: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> Result<()> {
    let spec_path = spec_path.as_ref();
    let text = std::fs::read_to_string(spec_path)
        .with_context(|| format!("reading spec {}", spec_path.display()))?;
    let spec = SyscallSpec::parse(&text)?;
    let artifacts = emit::generate(&spec)?;
    log::info!("{} calls registered", spec.calls.len());

    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    for artifact in &artifacts {
        let path = out_dir.join(artifact.filename);
        std::fs::write(&path, &artifact.contents)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = generate(args.spec, args.out_dir) {
        log::error!("Error: {e:#}");
        std::process::exit(1);
    }
}
