use tauri::{RunEvent, WindowEvent};

use crate::{
    lifecycle::LifecycleController, lifecycle_events, logging, LifecycleStateHandle,
    PlatformCapability, WindowConfig,
};

pub(crate) fn run() {
    logging::init_logging();

    let platform = PlatformCapability::current();
    tracing::info!(?platform, "desktop process starting");

    let controller = LifecycleController::new(platform, WindowConfig::default());

    let app = match tauri::Builder::default()
        .manage(LifecycleStateHandle::new(controller))
        .build(tauri::generate_context!())
    {
        Ok(app) => app,
        Err(error) => {
            tracing::error!(%error, "failed to build tauri application");
            std::process::exit(crate::FATAL_EXIT_CODE);
        }
    };

    app.run(|app_handle, event| match event {
        RunEvent::Ready => lifecycle_events::handle_ready(app_handle),
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => lifecycle_events::handle_activate(app_handle),
        RunEvent::WindowEvent {
            label,
            event: WindowEvent::Destroyed,
            ..
        } => lifecycle_events::handle_window_destroyed(app_handle, &label),
        RunEvent::ExitRequested { code, api, .. } => {
            lifecycle_events::handle_exit_requested(app_handle, &api, code);
        }
        RunEvent::Exit => lifecycle_events::handle_exit_event(app_handle),
        _ => {}
    });
}
