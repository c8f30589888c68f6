use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::path::Path;

use anyhow::{Result, bail};

use crate::config::Config;
use crate::container::ContainerCommand;
use crate::databases;
use crate::mount::{AccessMode, MountSpec};

use super::types::{InvocationPlan, PlanInput};

/// Mount name of the only writable mount.
pub const OUTPUT_MOUNT: &str = "output";

/// Mount name for the `index`-th input FASTA file.
pub fn fasta_mount_name(index: usize) -> String {
    format!("fasta_path_{index}")
}

/// Reject inputs whose basenames collide. The entry point names each
/// prediction's output directory after the FASTA basename, so duplicates
/// would overwrite each other.
pub fn check_unique_basenames(paths: &[impl AsRef<Path>], cwd: &Path) -> Result<()> {
    let mut seen: HashMap<OsString, &Path> = HashMap::new();
    for path in paths {
        let path = path.as_ref();
        let resolved = crate::mount::absolutize(path, cwd);
        let Some(base) = resolved.file_name() else {
            bail!("FASTA path {} has no file name", path.display());
        };
        if let Some(prev) = seen.get(base) {
            bail!(
                "FASTA paths {} and {} share the basename {}; \
                 basenames must be unique because they name the output directories",
                prev.display(),
                path.display(),
                base.display()
            );
        }
        seen.insert(base.to_os_string(), path);
    }
    Ok(())
}

impl InvocationPlan {
    /// Resolve every host path into a mount and rewrite the entry point's
    /// flags to point at the container-visible paths.
    pub fn build(cfg: &Config, input: &PlanInput, cwd: &Path) -> Result<Self> {
        if input.fasta_paths.is_empty() {
            bail!("at least one FASTA path is required");
        }
        if input.models.is_empty() {
            bail!("at least one model is required");
        }
        check_unique_basenames(&input.fasta_paths, cwd)?;

        let root = cfg.mount_root.as_str();
        let mut mounts = Vec::new();
        let mut flags = Vec::new();

        let mut fasta_targets = Vec::with_capacity(input.fasta_paths.len());
        for (i, path) in input.fasta_paths.iter().enumerate() {
            let name = fasta_mount_name(i);
            let mount = MountSpec::new(root, &name, path, AccessMode::ReadOnly, cwd)?;
            fasta_targets.push(mount.container_path.clone());
            mounts.push(mount);
        }
        flags.push(format!("--fasta_paths={}", fasta_targets.join(",")));

        for (name, path) in databases::resolve_all(&input.data_dir) {
            let mount = MountSpec::new(root, name, &path, AccessMode::ReadOnly, cwd)?;
            flags.push(format!("--{name}={}", mount.container_path));
            mounts.push(mount);
        }

        let output = MountSpec::new(
            root,
            OUTPUT_MOUNT,
            &input.output_dir,
            AccessMode::ReadWrite,
            cwd,
        )?;
        flags.push(format!("--output_dir={}", output.container_path));
        mounts.push(output);

        let models: Vec<&str> = input.models.iter().map(|m| m.as_str()).collect();
        flags.extend([
            format!("--model_names={}", models.join(",")),
            format!(
                "--max_template_date={}",
                input.max_template_date.format("%Y-%m-%d")
            ),
            format!("--preset={}", input.preset),
            format!("--benchmark={}", input.benchmark),
            "--logtostderr".to_string(),
        ]);

        let mut names = HashSet::new();
        for mount in &mounts {
            if !names.insert(mount.name.as_str()) {
                bail!("duplicate mount name {:?}", mount.name);
            }
            tracing::debug!(
                name = %mount.name,
                bind = %mount.bind_arg(),
                container_path = %mount.container_path,
                "planned mount"
            );
        }

        Ok(Self {
            runtime: cfg.runtime.clone(),
            gpu: cfg.gpu,
            mounts,
            env: cfg.env.clone(),
            image: cfg.image.clone(),
            entrypoint: cfg.entrypoint.clone(),
            flags,
        })
    }

    /// Comma-joined `source:target:mode` list for `--bind`.
    pub fn bind_arg(&self) -> String {
        self.mounts
            .iter()
            .map(MountSpec::bind_arg)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Render the runtime argv:
    /// `exec [--nv] --bind <mounts> --env=K=V... <image> <entrypoint> <flags...>`.
    pub fn to_command(&self) -> ContainerCommand {
        let mut args = vec!["exec".to_string()];
        if self.gpu {
            args.push("--nv".into());
        }
        args.extend(["--bind".to_string(), self.bind_arg()]);
        args.extend(self.env.iter().map(|(k, v)| format!("--env={k}={v}")));
        args.extend([self.image.clone(), self.entrypoint.clone()]);
        args.extend(self.flags.iter().cloned());

        ContainerCommand {
            program: self.runtime.clone(),
            args,
        }
    }
}
