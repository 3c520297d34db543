use futures::future::{AbortHandle, AbortRegistration};

/// Identifies one read started from a [`FetchSlot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    generation: u64,
}

impl RequestToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// The single pending-read slot of a view.
///
/// Starting a read aborts the one before it and bumps the generation, so a
/// result can only land if nothing newer was started and the view is still open.
#[derive(Debug, Default)]
pub struct FetchSlot {
    generation: u64,
    in_flight: Option<AbortHandle>,
    closed: bool,
}

impl FetchSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> (RequestToken, AbortRegistration) {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }
        self.generation += 1;
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight = Some(handle);
        (RequestToken { generation: self.generation }, registration)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        !self.closed && token.generation == self.generation
    }

    /// Releases the slot if `token` is still current; returns whether the result may be applied.
    pub fn finish(&mut self, token: RequestToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.in_flight = None;
        true
    }

    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The view went away: abort and reject everything from now on.
    pub fn close(&mut self) {
        self.closed = true;
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_supersedes_older() {
        let mut slot = FetchSlot::new();
        let (first, _r1) = slot.begin();
        let (second, _r2) = slot.begin();
        assert!(!slot.finish(first));
        assert!(slot.finish(second));
        assert!(!slot.has_in_flight());
    }

    #[test]
    fn closed_slot_rejects_results() {
        let mut slot = FetchSlot::new();
        let (token, _r) = slot.begin();
        slot.close();
        assert!(slot.is_closed());
        assert!(!slot.finish(token));
    }
}
