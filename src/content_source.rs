use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use tauri::WebviewUrl;

use crate::{ContentSource, ShellError};

pub(crate) fn validate_relative(path: &Path) -> Result<(), ShellError> {
    if path.as_os_str().is_empty() {
        return Err(ShellError::invalid_content_path(path));
    }

    let escapes = path.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(ShellError::invalid_content_path(path));
    }

    Ok(())
}

/// Joins `relative` onto the application directory. The process working
/// directory never takes part in the result.
pub(crate) fn resolve_in_app_dir(app_dir: &Path, relative: &Path) -> Result<PathBuf, ShellError> {
    validate_relative(relative)?;
    Ok(app_dir.join(relative))
}

pub(crate) fn content_url(source: &ContentSource) -> WebviewUrl {
    WebviewUrl::App(source.relative_path().to_path_buf())
}

/// A missing script is not fatal: the window opens without it.
pub(crate) fn load_preload_script(app_dir: &Path, relative: &Path) -> Result<Option<String>, ShellError> {
    let path = resolve_in_app_dir(app_dir, relative)?;
    match fs::read_to_string(&path) {
        Ok(script) => Ok(Some(script)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "preload script not found; continuing without it");
            Ok(None)
        }
        Err(source) => Err(ShellError::PreloadRead { path, source }),
    }
}
