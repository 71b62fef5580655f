pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "Rectangular Tube Joint Visualizer";

pub(crate) const MAIN_WINDOW_WIDTH: f64 = 1000.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 700.0;
pub(crate) const MAIN_WINDOW_MIN_WIDTH: f64 = 800.0;
pub(crate) const MAIN_WINDOW_MIN_HEIGHT: f64 = 600.0;

/// Entry document, relative to the bundled asset root (`frontendDist`).
pub(crate) const CONTENT_ENTRY: &str = "index.html";
/// Preload script, relative to the resource directory.
pub(crate) const PRELOAD_SCRIPT: &str = "preload.js";

pub(crate) const LOG_FILTER_ENV: &str = "TUBEJOINT_LOG";
pub(crate) const DEFAULT_LOG_DIRECTIVE: &str = "tube_joint_shell=info";

pub(crate) const FATAL_EXIT_CODE: i32 = 1;
