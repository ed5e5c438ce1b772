/// Pending-flag coalescing of recompute requests.
///
/// Any number of `request` calls between two ticks collapse into one; only
/// the first returns `true`, telling the caller to queue an animation frame.
#[derive(Clone, Debug, Default)]
pub struct Coalescer {
    pending: bool,
    requested: u64,
    coalesced: u64,
    ticks: u64,
}

impl Coalescer {
    #[inline]
    pub fn request(&mut self) -> bool {
        self.requested += 1;
        if self.pending {
            self.coalesced += 1;
            return false;
        }
        self.pending = true;
        true
    }

    /// Clear the pending flag at the start of a tick. Returns whether a tick
    /// was actually pending.
    #[inline]
    pub fn begin_tick(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.ticks += 1;
        true
    }

    /// Drop a queued tick without running it (failed or cancelled frame request).
    #[inline]
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn requested(&self) -> u64 {
        self.requested
    }

    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
