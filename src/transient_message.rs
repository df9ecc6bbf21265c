use super::*;

const LIFETIME: Duration = Duration::from_secs(3);

#[derive(Clone, Debug)]
pub(crate) struct TransientMessage {
  current: String,
  expires_at: Instant,
  previous: String,
}

impl TransientMessage {
  pub(crate) fn current(&self) -> &str {
    &self.current
  }

  pub(crate) fn is_expired(&self) -> bool {
    self.is_expired_at(Instant::now())
  }

  fn is_expired_at(&self, now: Instant) -> bool {
    now >= self.expires_at
  }

  pub(crate) fn new(current: String, previous: String) -> Self {
    Self {
      current,
      expires_at: Instant::now() + LIFETIME,
      previous,
    }
  }

  pub(crate) fn previous(&self) -> &str {
    &self.previous
  }
}
