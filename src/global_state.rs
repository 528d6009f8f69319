use leptos::*;
use once_cell::sync::OnceCell;

/// Process-wide reactive signals shared between the logger bridge and the
/// presentation components.
pub struct Globals {
    pub log_lines: RwSignal<Vec<String>>,
    pub logs_paused: RwSignal<bool>,
    pub stream_live: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        log_lines: create_rw_signal(Vec::new()),
        logs_paused: create_rw_signal(false),
        stream_live: create_rw_signal(false),
    })
}

pub fn log_lines() -> RwSignal<Vec<String>> {
    globals().log_lines
}

pub fn logs_paused() -> RwSignal<bool> {
    globals().logs_paused
}

pub fn stream_live() -> RwSignal<bool> {
    globals().stream_live
}
