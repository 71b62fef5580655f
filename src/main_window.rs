use tauri::{AppHandle, Manager, Runtime, WebviewWindowBuilder};

use crate::{
    content_source, lifecycle::WindowHost, LifecycleStateHandle, ShellError, WindowConfig,
    FATAL_EXIT_CODE,
};

/// [`WindowHost`] backed by a live Tauri application.
pub(crate) struct TauriWindowHost<'a, R: Runtime> {
    app_handle: &'a AppHandle<R>,
    state: &'a LifecycleStateHandle,
}

impl<'a, R: Runtime> TauriWindowHost<'a, R> {
    pub(crate) fn new(app_handle: &'a AppHandle<R>, state: &'a LifecycleStateHandle) -> Self {
        Self { app_handle, state }
    }

    fn preload_script(&self, config: &WindowConfig) -> Result<Option<String>, ShellError> {
        let Some(relative) = config.preload.as_deref() else {
            return Ok(None);
        };
        let app_dir = self
            .app_handle
            .path()
            .resource_dir()
            .map_err(ShellError::ResourceDir)?;
        content_source::load_preload_script(&app_dir, relative)
    }
}

impl<R: Runtime> WindowHost for TauriWindowHost<'_, R> {
    fn open_window_count(&self) -> usize {
        self.app_handle.webview_windows().len()
    }

    fn create_window(&self, config: &WindowConfig) -> Result<(), ShellError> {
        let label = self.state.next_window_label();
        let mut builder = WebviewWindowBuilder::new(
            self.app_handle,
            label.as_str(),
            content_source::content_url(&config.content),
        )
        .title(config.title.as_str())
        .inner_size(config.width, config.height)
        .min_inner_size(config.min_width, config.min_height);

        if let Some(script) = self.preload_script(config)? {
            builder = builder.initialization_script(&script);
        }

        builder
            .build()
            .map_err(|source| ShellError::WindowBuild {
                label: label.clone(),
                source,
            })?;
        tracing::info!(
            label = %label,
            content = %config.content.relative_path().display(),
            "window created"
        );
        Ok(())
    }

    /// When Tauri already exits after the last window closed, this request is a no-op repeat.
    fn quit(&self) {
        self.app_handle.exit(0);
    }
}

/// Stand-in for the host's default fatal behavior on startup failures.
pub(crate) fn exit_fatal<R: Runtime>(app_handle: &AppHandle<R>, error: &ShellError) {
    tracing::error!(%error, "fatal lifecycle error, exiting");
    app_handle.exit(FATAL_EXIT_CODE);
}
