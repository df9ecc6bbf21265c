use super::*;

pub(crate) enum Event {
  Input(KeyEvent),
  InputClosed,
  Listing {
    flow: Flow,
    result: Result<TableOfContents, Error>,
  },
  Redraw,
  Thread {
    flow: Flow,
    result: Result<Thread, Error>,
  },
  Tick,
}
