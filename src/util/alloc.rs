use std::cell::Cell;
use std::rc::Rc;

/// A value which increments a shared counter when it is dropped, so that tests can observe when a
/// collection releases the values it owns.
#[derive(Debug)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    /// Creates a new CountedDrop reporting to `counter`.
    pub fn new(counter: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop(Rc::clone(counter))
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// A shared call counter, cloned into closures whose invocations a test wants to observe.
#[derive(Debug, Default, Clone)]
pub struct CallCounter(Rc<Cell<usize>>);

impl CallCounter {
    /// Records one call.
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    /// Returns the number of calls recorded so far.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}
