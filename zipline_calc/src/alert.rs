//! Pluggable notification for unsafe designs.
//!
//! Callers choose how loudly to react when a resolved geometry turns out
//! unsafe; nothing here fires implicitly.

/// Receives the outcome of a safety evaluation.
pub trait AlertSink {
    fn notify(&self, unsafe_geometry: bool);
}

/// Logs a warning when the geometry is unsafe.
pub struct LogAlert;

impl AlertSink for LogAlert {
    fn notify(&self, unsafe_geometry: bool) {
        if unsafe_geometry {
            log::warn!("design is unsafe: rider contacts ground at the sag point");
        }
    }
}

/// Rings the terminal bell when the geometry is unsafe.
pub struct TerminalBell;

impl AlertSink for TerminalBell {
    fn notify(&self, unsafe_geometry: bool) {
        if unsafe_geometry {
            use std::io::Write;
            print!("\x07");
            let _ = std::io::stdout().flush();
        }
    }
}

/// Discards every notification.
pub struct SilentAlert;

impl AlertSink for SilentAlert {
    fn notify(&self, _unsafe_geometry: bool) {}
}
