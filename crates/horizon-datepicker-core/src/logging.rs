//! Logging facilities for Horizon Datepicker.
//!
//! Horizon Datepicker uses the `tracing` crate for instrumentation. To see
//! logs, install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_datepicker=debug")
//!         .init();
//! }
//! ```
//!
//! Rejected text edits are logged at `warn`, accepted writes at `debug`,
//! signal and overlay traffic at `trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_datepicker_core::signal";
    /// Reactive cell target.
    pub const REACTIVE: &str = "horizon_datepicker_core::reactive";
    /// Date formatting and parsing target.
    pub const FORMAT: &str = "horizon_datepicker::format";
    /// Overlay open/close target.
    pub const OVERLAY: &str = "horizon_datepicker::overlay";
    /// Text/calendar synchronization target.
    pub const SYNC: &str = "horizon_datepicker::sync";
    /// Picker mount and render target.
    pub const WIDGETS: &str = "horizon_datepicker::widgets";
    /// Picker configuration target.
    pub const CONFIG: &str = "horizon_datepicker::config";
}
