use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against `cwd` and normalise it lexically.
///
/// `.` components are dropped and `..` pops one component (never past the
/// root). Symlinks are not resolved. Trailing separators vanish, so
/// `./databases/` and `databases` name the same directory.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(p) => out.push(p.as_os_str()),
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(c) => out.push(c),
        }
    }
    out
}
