//! Application lifecycle controller.
//!
//! Mediates between the host runtime's lifecycle signals (ready, activate,
//! all windows closed) and window creation. The host is reached only through
//! [`WindowHost`], so the rules here run without a windowing system.

use crate::{LifecycleState, PlatformCapability, ShellError, WindowConfig};

/// Window operations the controller needs from the host runtime.
pub(crate) trait WindowHost {
    /// Number of windows currently open, as tracked by the host.
    fn open_window_count(&self) -> usize;

    fn create_window(&self, config: &WindowConfig) -> Result<(), ShellError>;

    fn quit(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActivateDecision {
    CreateWindow,
    KeepExistingWindows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AllWindowsClosedDecision {
    Quit,
    StayResident,
}

pub(crate) fn decide_activate(open_windows: usize) -> ActivateDecision {
    if open_windows == 0 {
        ActivateDecision::CreateWindow
    } else {
        ActivateDecision::KeepExistingWindows
    }
}

pub(crate) fn decide_all_windows_closed(platform: PlatformCapability) -> AllWindowsClosedDecision {
    match platform {
        PlatformCapability::BackgroundResident => AllWindowsClosedDecision::StayResident,
        PlatformCapability::TerminateOnClose => AllWindowsClosedDecision::Quit,
    }
}

#[derive(Debug)]
pub(crate) struct LifecycleController {
    platform: PlatformCapability,
    window_config: WindowConfig,
    state: LifecycleState,
    ready_handled: bool,
}

impl LifecycleController {
    pub(crate) fn new(platform: PlatformCapability, window_config: WindowConfig) -> Self {
        Self {
            platform,
            window_config,
            state: LifecycleState::NoWindow,
            ready_handled: false,
        }
    }

    pub(crate) fn state(&self) -> LifecycleState {
        self.state
    }

    pub(crate) fn on_ready<H: WindowHost>(&mut self, host: &H) -> Result<(), ShellError> {
        if self.ready_handled {
            tracing::warn!("ready signal received more than once; ignoring");
            return Ok(());
        }
        self.ready_handled = true;

        tracing::info!(platform = ?self.platform, "host runtime ready, creating primary window");
        self.create_window(host)
    }

    pub(crate) fn on_activate<H: WindowHost>(&mut self, host: &H) -> Result<ActivateDecision, ShellError> {
        if self.state == LifecycleState::Terminated {
            return Ok(ActivateDecision::KeepExistingWindows);
        }

        let open_windows = host.open_window_count();
        let decision = decide_activate(open_windows);
        tracing::debug!(open_windows, ?decision, "activate signal");

        if decision == ActivateDecision::CreateWindow {
            self.create_window(host)?;
        }
        Ok(decision)
    }

    pub(crate) fn on_all_windows_closed<H: WindowHost>(&mut self, host: &H) -> AllWindowsClosedDecision {
        let decision = decide_all_windows_closed(self.platform);
        match decision {
            AllWindowsClosedDecision::Quit => {
                tracing::info!("all windows closed, quitting");
                self.state = LifecycleState::Terminated;
                host.quit();
            }
            AllWindowsClosedDecision::StayResident => {
                tracing::info!("all windows closed, staying resident in background");
                self.state = LifecycleState::RunningWithoutWindow;
            }
        }
        decision
    }

    fn create_window<H: WindowHost>(&mut self, host: &H) -> Result<(), ShellError> {
        host.create_window(&self.window_config)?;
        self.state = LifecycleState::RunningWithWindow;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct FakeHost {
        open_windows: Cell<usize>,
        created: RefCell<Vec<WindowConfig>>,
        quit_calls: Cell<usize>,
        fail_create: Cell<bool>,
    }

    impl FakeHost {
        fn with_open_windows(count: usize) -> Self {
            let host = Self::default();
            host.open_windows.set(count);
            host
        }

        fn close_all(&self) {
            self.open_windows.set(0);
        }
    }

    impl WindowHost for FakeHost {
        fn open_window_count(&self) -> usize {
            self.open_windows.get()
        }

        fn create_window(&self, config: &WindowConfig) -> Result<(), ShellError> {
            if self.fail_create.get() {
                return Err(ShellError::invalid_content_path("missing.html"));
            }
            self.created.borrow_mut().push(config.clone());
            self.open_windows.set(self.open_windows.get() + 1);
            Ok(())
        }

        fn quit(&self) {
            self.quit_calls.set(self.quit_calls.get() + 1);
        }
    }

    fn controller(platform: PlatformCapability) -> LifecycleController {
        LifecycleController::new(platform, WindowConfig::default())
    }

    #[test]
    fn decide_activate_creates_only_when_no_windows_are_open() {
        assert_eq!(decide_activate(0), ActivateDecision::CreateWindow);
        assert_eq!(decide_activate(1), ActivateDecision::KeepExistingWindows);
        assert_eq!(decide_activate(3), ActivateDecision::KeepExistingWindows);
    }

    #[test]
    fn decide_all_windows_closed_follows_platform() {
        assert_eq!(
            decide_all_windows_closed(PlatformCapability::TerminateOnClose),
            AllWindowsClosedDecision::Quit
        );
        assert_eq!(
            decide_all_windows_closed(PlatformCapability::BackgroundResident),
            AllWindowsClosedDecision::StayResident
        );
    }

    #[test]
    fn on_ready_creates_exactly_one_window_with_fixed_geometry() {
        let host = FakeHost::default();
        let mut controller = controller(PlatformCapability::TerminateOnClose);
        assert_eq!(controller.state(), LifecycleState::NoWindow);

        controller.on_ready(&host).expect("ready should create window");

        let created = host.created.borrow();
        assert_eq!(created.len(), 1);
        assert_eq!((created[0].width, created[0].height), (1000.0, 700.0));
        assert_eq!((created[0].min_width, created[0].min_height), (800.0, 600.0));
        assert_eq!(controller.state(), LifecycleState::RunningWithWindow);
    }

    #[test]
    fn on_ready_ignores_repeated_signal() {
        let host = FakeHost::default();
        let mut controller = controller(PlatformCapability::TerminateOnClose);

        controller.on_ready(&host).expect("first ready");
        controller.on_ready(&host).expect("second ready is ignored");

        assert_eq!(host.created.borrow().len(), 1);
    }

    #[test]
    fn on_ready_propagates_window_creation_failure() {
        let host = FakeHost::default();
        host.fail_create.set(true);
        let mut controller = controller(PlatformCapability::TerminateOnClose);

        assert!(controller.on_ready(&host).is_err());
        assert_eq!(controller.state(), LifecycleState::NoWindow);
    }

    #[test]
    fn on_activate_with_zero_windows_creates_one_window_with_same_config() {
        let host = FakeHost::default();
        let mut controller = controller(PlatformCapability::BackgroundResident);
        controller.on_ready(&host).expect("ready");
        host.close_all();
        controller.on_all_windows_closed(&host);

        let decision = controller.on_activate(&host).expect("activate");

        assert_eq!(decision, ActivateDecision::CreateWindow);
        let created = host.created.borrow();
        assert_eq!(created.len(), 2);
        assert_eq!(created[0], created[1]);
        assert_eq!(controller.state(), LifecycleState::RunningWithWindow);
    }

    #[test]
    fn on_activate_with_open_windows_is_a_no_op() {
        let host = FakeHost::with_open_windows(2);
        let mut controller = controller(PlatformCapability::BackgroundResident);

        let decision = controller.on_activate(&host).expect("activate");

        assert_eq!(decision, ActivateDecision::KeepExistingWindows);
        assert!(host.created.borrow().is_empty());
    }

    #[test]
    fn on_all_windows_closed_quits_on_terminate_platform() {
        let host = FakeHost::default();
        let mut controller = controller(PlatformCapability::TerminateOnClose);
        controller.on_ready(&host).expect("ready");
        host.close_all();

        let decision = controller.on_all_windows_closed(&host);

        assert_eq!(decision, AllWindowsClosedDecision::Quit);
        assert_eq!(host.quit_calls.get(), 1);
        assert_eq!(controller.state(), LifecycleState::Terminated);
    }

    #[test]
    fn on_all_windows_closed_stays_resident_on_background_platform() {
        let host = FakeHost::default();
        let mut controller = controller(PlatformCapability::BackgroundResident);
        controller.on_ready(&host).expect("ready");
        host.close_all();

        let decision = controller.on_all_windows_closed(&host);

        assert_eq!(decision, AllWindowsClosedDecision::StayResident);
        assert_eq!(host.quit_calls.get(), 0);
        assert_eq!(controller.state(), LifecycleState::RunningWithoutWindow);
    }

    #[test]
    fn on_activate_after_termination_creates_nothing() {
        let host = FakeHost::default();
        let mut controller = controller(PlatformCapability::TerminateOnClose);
        controller.on_ready(&host).expect("ready");
        host.close_all();
        controller.on_all_windows_closed(&host);

        let decision = controller.on_activate(&host).expect("activate");

        assert_eq!(decision, ActivateDecision::KeepExistingWindows);
        assert_eq!(host.created.borrow().len(), 1);
    }
}
