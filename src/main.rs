#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod content_source;
mod errors;
mod lifecycle;
mod lifecycle_events;
mod logging;
mod main_window;

pub(crate) use app_constants::*;
pub(crate) use app_types::{
    ContentSource, LifecycleState, LifecycleStateHandle, PlatformCapability, WindowConfig,
};
pub(crate) use errors::ShellError;

fn main() {
    app_runtime::run();
}
