/// Process-lifetime polling state owned by the monitor loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// `from_date` sent on the next fetch
    pub cursor: i64,
    /// Last status line delivered to the chat, empty until the first one
    pub last_status: String,
}

impl PollState {
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_status: String::new(),
        }
    }

    pub fn is_new(&self, status: &str) -> bool {
        self.last_status != status
    }

    /// Remember a freshly notified status. The cursor only moves forward once a
    /// previous status existed, so the first answer after start-up never hides
    /// the change that produced it.
    pub fn record(&mut self, status: String, now: i64) {
        if !self.last_status.is_empty() {
            self.cursor = now;
        }
        self.last_status = status;
    }
}
