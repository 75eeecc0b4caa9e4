//! Resolution of the file argument to the absolute path sent to the editor.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::CommandError;

/// Make `arg` absolute against `cwd` and normalize it lexically: `.` is
/// dropped and `..` removes the preceding component. Symlinks are kept.
pub fn absolutize(arg: &Path, cwd: &Path) -> PathBuf {
    let joined = if arg.is_absolute() {
        arg.to_path_buf()
    } else {
        cwd.join(arg)
    };
    normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                }
            }
            c => components.push(c),
        }
    }
    components.iter().collect()
}

/// Resolve the file argument to an absolute path as UTF-8 text.
///
/// Only a path that definitely does not exist is rejected. Other lookup
/// failures (permissions, a file used as a directory) are left for the
/// editor to report.
pub fn resolve_target(arg: &Path, cwd: Option<&Path>) -> Result<String, CommandError> {
    let absolute = match cwd {
        _ if arg.is_absolute() => normalize(arg),
        Some(cwd) => absolutize(arg, cwd),
        None => return Err(CommandError::InvalidPath { path: arg.to_path_buf() }),
    };

    match absolute.try_exists() {
        Ok(true) => {}
        Ok(false) => return Err(CommandError::NotFound { path: absolute }),
        Err(e) => debug!("Cannot check {}: {e}", absolute.display()),
    }

    match absolute.to_str() {
        Some(text) => Ok(text.to_string()),
        None => Err(CommandError::InvalidPath { path: absolute }),
    }
}
