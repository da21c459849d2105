use tokio::sync::watch;

/// Single-value cell holding a component's display state.
///
/// Writers go through `set`, renderers read with `get`.
#[derive(Debug)]
pub struct Signal<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Signal<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replaces the value; succeeds with no receiver attached
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }
}

impl<T: Clone + Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
