//! Overlay open/closed state.
//!
//! A picker's `open` argument is either a plain default or a cell the caller
//! owns. [`OverlayState::adopt`] resolves it exactly once:
//!
//! - [`OpenFlag::Shared`]: reads and writes go straight to the caller's cell,
//!   so the caller observes every transition and can toggle the overlay itself.
//! - [`OpenFlag::Fixed`]: an internal cell is seeded from the default. Later
//!   defaults passed through [`OverlayState::rebind`] are ignored.

use horizon_datepicker_core::Reactive;
use horizon_datepicker_core::logging::targets;

/// The `open` argument of a picker.
#[derive(Debug, Clone)]
pub enum OpenFlag {
    /// Seed for an internally owned flag.
    Fixed(bool),
    /// A flag owned by the caller.
    Shared(Reactive<bool>),
}

impl Default for OpenFlag {
    fn default() -> Self {
        Self::Fixed(false)
    }
}

impl From<bool> for OpenFlag {
    fn from(open: bool) -> Self {
        Self::Fixed(open)
    }
}

impl From<Reactive<bool>> for OpenFlag {
    fn from(cell: Reactive<bool>) -> Self {
        Self::Shared(cell)
    }
}

impl From<&Reactive<bool>> for OpenFlag {
    fn from(cell: &Reactive<bool>) -> Self {
        Self::Shared(cell.clone())
    }
}

/// Whether the overlay is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayPhase {
    Closed,
    Open,
}

impl From<bool> for OverlayPhase {
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}

/// Holder of a picker's open flag.
#[derive(Debug)]
pub struct OverlayState {
    cell: Reactive<bool>,
    controlled: bool,
}

impl OverlayState {
    /// Resolve the `open` argument at mount.
    pub fn adopt(flag: OpenFlag) -> Self {
        match flag {
            OpenFlag::Shared(cell) => Self {
                cell,
                controlled: true,
            },
            OpenFlag::Fixed(open) => Self {
                cell: Reactive::new(open),
                controlled: false,
            },
        }
    }

    /// Apply the `open` argument of a later render.
    ///
    /// A plain default never reseeds the flag. A caller cell takes over
    /// delegation unless it is the cell already in use.
    pub fn rebind(&mut self, flag: OpenFlag) {
        match flag {
            OpenFlag::Fixed(open) => {
                tracing::trace!(target: targets::OVERLAY, open, "ignoring default after mount");
            }
            OpenFlag::Shared(cell) => {
                if !self.cell.ptr_eq(&cell) {
                    tracing::trace!(target: targets::OVERLAY, "delegating to a new caller flag");
                    self.cell = cell;
                    self.controlled = true;
                }
            }
        }
    }

    /// Whether the caller owns the flag.
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.cell.get()
    }

    /// Current phase.
    pub fn phase(&self) -> OverlayPhase {
        self.is_open().into()
    }

    /// Set the flag, returning `true` if it changed.
    pub fn set_open(&self, open: bool) -> bool {
        let changed = self.cell.set(open);
        if changed {
            tracing::trace!(target: targets::OVERLAY, open, controlled = self.controlled, "overlay toggled");
        }
        changed
    }

    /// Open the overlay.
    pub fn open(&self) -> bool {
        self.set_open(true)
    }

    /// Close the overlay.
    pub fn close(&self) -> bool {
        self.set_open(false)
    }

    /// The cell backing the flag.
    pub fn cell(&self) -> &Reactive<bool> {
        &self.cell
    }

    /// A handle that can only close the overlay.
    ///
    /// The handle is tied to the cell in use when it was created.
    pub fn close_handle(&self) -> CloseHandle {
        CloseHandle {
            cell: self.cell.clone(),
        }
    }
}

/// Capability to close one picker's overlay.
///
/// Passed to the default close control and to caller-supplied children.
#[derive(Debug, Clone)]
pub struct CloseHandle {
    cell: Reactive<bool>,
}

impl CloseHandle {
    /// Close the overlay, returning `true` if it was open.
    pub fn close(&self) -> bool {
        self.cell.set(false)
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.cell.get()
    }
}

static_assertions::assert_impl_all!(OverlayState: Send, Sync);
static_assertions::assert_impl_all!(CloseHandle: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_default_seeds_internal_flag() {
        let overlay = OverlayState::adopt(OpenFlag::from(true));
        assert!(!overlay.is_controlled());
        assert_eq!(overlay.phase(), OverlayPhase::Open);

        assert!(overlay.close());
        assert!(!overlay.close());
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
    }

    #[test]
    fn test_fixed_default_is_adopted_once() {
        let mut overlay = OverlayState::adopt(OpenFlag::default());
        overlay.open();

        overlay.rebind(OpenFlag::Fixed(false));
        assert!(overlay.is_open());
    }

    #[test]
    fn test_shared_flag_passthrough() {
        let flag = Reactive::new(false);
        let overlay = OverlayState::adopt(OpenFlag::from(&flag));
        assert!(overlay.is_controlled());

        overlay.open();
        assert!(flag.get());

        flag.set(false);
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
    }

    #[test]
    fn test_rebind_to_new_shared_flag() {
        let mut overlay = OverlayState::adopt(OpenFlag::Fixed(false));
        let flag = Reactive::new(true);

        overlay.rebind(flag.clone().into());
        assert!(overlay.is_controlled());
        assert!(overlay.is_open());
        assert!(overlay.cell().ptr_eq(&flag));
    }

    #[test]
    fn test_close_handle() {
        let overlay = OverlayState::adopt(OpenFlag::Fixed(true));
        let handle = overlay.close_handle();
        assert!(handle.is_open());

        assert!(handle.close());
        assert!(!overlay.is_open());
        assert!(!handle.close());
    }
}
