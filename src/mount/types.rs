use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use super::path::absolutize;

/// Characters that delimit entries and fields in a `--bind` list.
const BIND_SEPARATORS: [char; 2] = [',', ':'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    ReadOnly,
    ReadWrite,
}

impl AccessMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessMode::ReadOnly => "ro",
            AccessMode::ReadWrite => "rw",
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bind mount. The parent directory of `host_path` is mounted at
/// `<root>/<name>`, so the resource itself shows up at `container_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountSpec {
    pub name: String,
    /// Absolute, normalised host path of the resource.
    pub host_path: PathBuf,
    /// Host directory that gets bound.
    pub source: String,
    /// Mount point inside the container.
    pub target: String,
    /// Where the resource is visible inside the container.
    pub container_path: String,
    pub mode: AccessMode,
}

impl MountSpec {
    /// Plan a mount for `path` under `root`.
    ///
    /// Fails when `name` is unusable as a single path segment, when `path`
    /// has no basename (the filesystem root), or when the bound directory or
    /// basename cannot be written into a `--bind` list verbatim.
    pub fn new(root: &str, name: &str, path: &Path, mode: AccessMode, cwd: &Path) -> Result<Self> {
        if name.is_empty() || name.contains(BIND_SEPARATORS) || name.contains('/') {
            bail!("invalid mount name {name:?}");
        }

        let host_path = absolutize(path, cwd);
        let (Some(parent), Some(base)) = (host_path.parent(), host_path.file_name()) else {
            bail!(
                "cannot mount {}: path has no parent directory",
                host_path.display()
            );
        };

        let Some(source) = parent.to_str() else {
            bail!(
                "cannot mount {}: parent directory is not valid UTF-8",
                host_path.display()
            );
        };
        if source.contains(BIND_SEPARATORS) {
            bail!(
                "cannot mount {}: parent directory {source:?} contains ',' or ':'",
                host_path.display()
            );
        }
        let Some(base) = base.to_str() else {
            bail!(
                "cannot mount {}: file name is not valid UTF-8",
                host_path.display()
            );
        };

        let target = format!("{}/{name}", root.trim_end_matches('/'));
        let container_path = format!("{target}/{base}");

        Ok(Self {
            name: name.to_string(),
            source: source.to_string(),
            host_path,
            target,
            container_path,
            mode,
        })
    }

    /// `source:target:mode`, as taken by `--bind`.
    pub fn bind_arg(&self) -> String {
        format!("{}:{}:{}", self.source, self.target, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CWD: &str = "/work";

    fn mount(name: &str, path: &str, mode: AccessMode) -> MountSpec {
        MountSpec::new("/mnt", name, Path::new(path), mode, Path::new(CWD)).unwrap()
    }

    #[test]
    fn mounts_parent_and_exposes_basename() {
        let m = mount("fasta_path_0", "/a/seq1.fasta", AccessMode::ReadOnly);
        assert_eq!(m.source, "/a");
        assert_eq!(m.target, "/mnt/fasta_path_0");
        assert_eq!(m.container_path, "/mnt/fasta_path_0/seq1.fasta");
        assert_eq!(m.bind_arg(), "/a:/mnt/fasta_path_0:ro");
    }

    #[test]
    fn container_path_ignores_host_depth() {
        let shallow = mount("x", "/seq.fa", AccessMode::ReadOnly);
        let deep = mount("x", "/very/deep/nested/dir/seq.fa", AccessMode::ReadOnly);
        assert_eq!(shallow.container_path, deep.container_path);
        assert_eq!(shallow.container_path, "/mnt/x/seq.fa");
    }

    #[test]
    fn same_inputs_give_same_mount() {
        let a = mount("output", "results/", AccessMode::ReadWrite);
        let b = mount("output", "results/", AccessMode::ReadWrite);
        assert_eq!(a, b);
    }

    #[test]
    fn relative_directory_resolves_against_cwd() {
        let m = mount("output", "results/", AccessMode::ReadWrite);
        assert_eq!(m.host_path, PathBuf::from("/work/results"));
        assert_eq!(m.bind_arg(), "/work:/mnt/output:rw");
        assert_eq!(m.container_path, "/mnt/output/results");
    }

    #[test]
    fn trailing_slash_on_root_is_tolerated() {
        let m = MountSpec::new(
            "/mnt/",
            "pdb70_database_path",
            Path::new("/db/pdb70/pdb70"),
            AccessMode::ReadOnly,
            Path::new(CWD),
        )
        .unwrap();
        assert_eq!(m.container_path, "/mnt/pdb70_database_path/pdb70");
    }

    #[test]
    fn filesystem_root_is_rejected() {
        let res = MountSpec::new("/mnt", "x", Path::new("/"), AccessMode::ReadOnly, Path::new(CWD));
        assert!(res.is_err());
    }

    #[test]
    fn bad_names_are_rejected() {
        for name in ["", "a/b", "a:b", "a,b"] {
            let res = MountSpec::new(
                "/mnt",
                name,
                Path::new("/a/b"),
                AccessMode::ReadOnly,
                Path::new(CWD),
            );
            assert!(res.is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn separators_in_parent_directory_are_rejected() {
        for path in ["/data,x/seq.fasta", "/data:x/seq.fasta", "rel,dir/seq.fasta"] {
            let res = MountSpec::new(
                "/mnt",
                "fasta_path_0",
                Path::new(path),
                AccessMode::ReadOnly,
                Path::new(CWD),
            );
            let err = res.expect_err(path);
            assert!(format!("{err:#}").contains("seq.fasta"), "{err:#}");
        }
    }

    #[test]
    fn separators_in_basename_are_allowed() {
        let m = mount("x", "/a/odd,name:1.fa", AccessMode::ReadOnly);
        assert_eq!(m.bind_arg(), "/a:/mnt/x:ro");
        assert_eq!(m.container_path, "/mnt/x/odd,name:1.fa");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_are_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bad_base = Path::new(OsStr::from_bytes(b"/a/seq\xff.fa"));
        let res = MountSpec::new("/mnt", "x", bad_base, AccessMode::ReadOnly, Path::new(CWD));
        assert!(format!("{:#}", res.unwrap_err()).contains("file name is not valid UTF-8"));

        let bad_parent = Path::new(OsStr::from_bytes(b"/a\xfe/seq.fa"));
        let res = MountSpec::new("/mnt", "x", bad_parent, AccessMode::ReadOnly, Path::new(CWD));
        assert!(format!("{:#}", res.unwrap_err()).contains("parent directory is not valid UTF-8"));
    }
}
