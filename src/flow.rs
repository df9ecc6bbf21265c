use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FlowTarget {
  Page { number: usize, step: isize },
  Thread(Entry),
}

/// One cancellable fetch.
///
/// Clones share the liveness flag, so the copy carried by the fetch task
/// observes a cancellation made by the control loop.
#[derive(Clone, Debug)]
pub(crate) struct Flow {
  alive: Arc<AtomicBool>,
  id: u64,
  target: FlowTarget,
}

impl Flow {
  pub(crate) fn cancel(&self) {
    self.alive.store(false, Ordering::SeqCst);
  }

  pub(crate) fn id(&self) -> u64 {
    self.id
  }

  pub(crate) fn is_alive(&self) -> bool {
    self.alive.load(Ordering::SeqCst)
  }

  pub(crate) fn new(id: u64, target: FlowTarget) -> Self {
    Self {
      alive: Arc::new(AtomicBool::new(true)),
      id,
      target,
    }
  }

  pub(crate) fn target(&self) -> &FlowTarget {
    &self.target
  }
}
