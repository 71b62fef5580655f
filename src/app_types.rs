use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use crate::{
    lifecycle::LifecycleController, ShellError, CONTENT_ENTRY, MAIN_WINDOW_HEIGHT,
    MAIN_WINDOW_LABEL, MAIN_WINDOW_MIN_HEIGHT, MAIN_WINDOW_MIN_WIDTH, MAIN_WINDOW_TITLE,
    MAIN_WINDOW_WIDTH, PRELOAD_SCRIPT,
};

/// Document loaded into the window, relative to the application's own asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ContentSource {
    relative_path: PathBuf,
}

impl ContentSource {
    pub(crate) fn relative_path(&self) -> &Path {
        &self.relative_path
    }
}

impl Default for ContentSource {
    fn default() -> Self {
        Self {
            relative_path: PathBuf::from(CONTENT_ENTRY),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowConfig {
    pub(crate) title: String,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) min_width: f64,
    pub(crate) min_height: f64,
    pub(crate) content: ContentSource,
    pub(crate) preload: Option<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: MAIN_WINDOW_TITLE.to_string(),
            width: MAIN_WINDOW_WIDTH,
            height: MAIN_WINDOW_HEIGHT,
            min_width: MAIN_WINDOW_MIN_WIDTH,
            min_height: MAIN_WINDOW_MIN_HEIGHT,
            content: ContentSource::default(),
            preload: Some(PathBuf::from(PRELOAD_SCRIPT)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlatformCapability {
    /// The app stays alive with zero windows (macOS dock convention).
    BackgroundResident,
    TerminateOnClose,
}

impl PlatformCapability {
    pub(crate) fn current() -> Self {
        Self::for_target(cfg!(target_os = "macos"))
    }

    fn for_target(is_macos: bool) -> Self {
        if is_macos {
            Self::BackgroundResident
        } else {
            Self::TerminateOnClose
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleState {
    NoWindow,
    RunningWithWindow,
    RunningWithoutWindow,
    Terminated,
}

/// Tauri managed state: the controller plus the window label sequence.
#[derive(Debug)]
pub(crate) struct LifecycleStateHandle {
    controller: Mutex<LifecycleController>,
    window_sequence: AtomicUsize,
}

impl LifecycleStateHandle {
    pub(crate) fn new(controller: LifecycleController) -> Self {
        Self {
            controller: Mutex::new(controller),
            window_sequence: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_controller<T>(
        &self,
        f: impl FnOnce(&mut LifecycleController) -> Result<T, ShellError>,
    ) -> Result<T, ShellError> {
        let mut guard = self
            .controller
            .lock()
            .map_err(|_| ShellError::StatePoisoned)?;
        f(&mut *guard)
    }

    /// `main` for the first window, `main-2`, `main-3`, ... afterwards.
    pub(crate) fn next_window_label(&self) -> String {
        let index = self.window_sequence.fetch_add(1, Ordering::Relaxed);
        window_label_for_index(index)
    }
}

fn window_label_for_index(index: usize) -> String {
    if index == 0 {
        MAIN_WINDOW_LABEL.to_string()
    } else {
        format!("{MAIN_WINDOW_LABEL}-{}", index + 1)
    }
}
