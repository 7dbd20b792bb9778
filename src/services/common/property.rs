use std::fmt::{self, Debug};

use futures::stream::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A value published to the hosting UI that can be read or watched.
///
/// Watchers receive the current value on subscription and every change
/// after that. Setting an equal value does not notify anyone.
#[derive(Clone)]
pub struct Property<T: Clone + Send + Sync + 'static> {
    tx: watch::Sender<T>,
    rx: watch::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(initial: T) -> Self {
        let (tx, rx) = watch::channel(initial);
        Self { tx, rx }
    }

    /// Replace the value, notifying watchers if it changed.
    ///
    /// Returns whether the value changed. Only the crate publishes values.
    pub(crate) fn set(&self, new_value: T) -> bool
    where
        T: PartialEq,
    {
        self.tx.send_if_modified(|current| {
            if *current != new_value {
                *current = new_value;
                true
            } else {
                false
            }
        })
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Stream of values, starting with the current one.
    pub fn watch(&self) -> impl Stream<Item = T> + Send + 'static {
        WatchStream::new(self.rx.clone())
    }
}

impl<T: Clone + Send + Sync + Debug + 'static> Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
