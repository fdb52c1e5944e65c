/// Receives events emitted while a model runs.
///
/// Observers let callers monitor a call without changing its API or its
/// result, enabling console reports, logging, or collection in tests.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer.
pub trait Observer<E> {
    /// Observes a single event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}

/// Forwards each event to both observers, first to last.
impl<E, A, B> Observer<E> for (A, B)
where
    A: Observer<E>,
    B: Observer<E>,
{
    fn observe(&mut self, event: &E) {
        self.0.observe(event);
        self.1.observe(event);
    }
}
