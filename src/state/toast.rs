#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays visible before auto-dismissing.
pub const DISMISS_MS: u32 = 3000;

/// The transient notification shown after every mutation round trip.
///
/// Only one toast exists at a time; a newer toast replaces the current one
/// and bumps `seq` so the older toast's dismiss timer becomes a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub success: bool,
    pub visible: bool,
    pub seq: u64,
}

impl ToastState {
    /// Show a new toast, returning its sequence number for the dismiss timer.
    pub fn show(&mut self, message: String, success: bool) -> u64 {
        self.message = message;
        self.success = success;
        self.visible = true;
        self.seq += 1;
        self.seq
    }

    /// Hide the toast, unless a newer one has replaced it.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.visible = false;
        }
    }
}
