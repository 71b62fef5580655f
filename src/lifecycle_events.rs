use tauri::{AppHandle, ExitRequestApi, Manager, Runtime};

use crate::{
    lifecycle::AllWindowsClosedDecision, main_window, main_window::TauriWindowHost,
    LifecycleStateHandle,
};

/// Tauri reports "last window closed" as an exit request without a code;
/// explicit `exit(code)` calls carry one and are never vetoed.
fn is_all_windows_closed_request(code: Option<i32>) -> bool {
    code.is_none()
}

fn should_prevent_exit(decision: AllWindowsClosedDecision) -> bool {
    decision == AllWindowsClosedDecision::StayResident
}

pub(crate) fn handle_ready<R: Runtime>(app_handle: &AppHandle<R>) {
    let state = app_handle.state::<LifecycleStateHandle>();
    let host = TauriWindowHost::new(app_handle, &state);
    if let Err(error) = state.with_controller(|controller| controller.on_ready(&host)) {
        main_window::exit_fatal(app_handle, &error);
    }
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub(crate) fn handle_activate<R: Runtime>(app_handle: &AppHandle<R>) {
    let state = app_handle.state::<LifecycleStateHandle>();
    let host = TauriWindowHost::new(app_handle, &state);
    if let Err(error) = state.with_controller(|controller| controller.on_activate(&host)) {
        main_window::exit_fatal(app_handle, &error);
    }
}

pub(crate) fn handle_exit_requested<R: Runtime>(
    app_handle: &AppHandle<R>,
    api: &ExitRequestApi,
    code: Option<i32>,
) {
    if !is_all_windows_closed_request(code) {
        tracing::info!(?code, "explicit exit requested");
        return;
    }

    let state = app_handle.state::<LifecycleStateHandle>();
    let host = TauriWindowHost::new(app_handle, &state);
    match state.with_controller(|controller| Ok(controller.on_all_windows_closed(&host))) {
        Ok(decision) if should_prevent_exit(decision) => api.prevent_exit(),
        Ok(_) => {}
        Err(error) => tracing::error!(%error, "failed to handle all-windows-closed signal"),
    }
}

pub(crate) fn handle_window_destroyed<R: Runtime>(app_handle: &AppHandle<R>, label: &str) {
    let remaining = app_handle.webview_windows().len();
    tracing::debug!(label, remaining, "window destroyed");
}

pub(crate) fn handle_exit_event<R: Runtime>(app_handle: &AppHandle<R>) {
    let state = app_handle.state::<LifecycleStateHandle>();
    match state.with_controller(|controller| Ok(controller.state())) {
        Ok(lifecycle_state) => tracing::info!(?lifecycle_state, "desktop process exiting"),
        Err(error) => tracing::warn!(%error, "desktop process exiting"),
    }
}
