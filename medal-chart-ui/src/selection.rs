//! The cross-view selection store.
//!
//! A single optional country key, published by the bar chart and observed
//! by every focus view. This is the only contract between views: no view
//! ever reads another view's internal state. The store is owned by the
//! composition root and handed to views via Dioxus context rather than
//! living as ambient global state.

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber = Rc<dyn Fn(Option<&str>)>;

struct Inner {
    selected: Option<String>,
    subscribers: Vec<Subscriber>,
    notifying: bool,
    pending: Option<Option<String>>,
}

/// Single-writer, multi-reader broadcast of the currently selected country.
///
/// `set_selected` notifies every subscriber synchronously, in registration
/// order, with no deduplication (publishing the current value again still
/// broadcasts). A `set_selected` issued from inside a notification is
/// queued and delivered after the current pass finishes, latest value wins,
/// so subscribers never observe interleaved broadcasts.
#[derive(Clone)]
pub struct SelectionStore {
    inner: Rc<RefCell<Inner>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        SelectionStore {
            inner: Rc::new(RefCell::new(Inner {
                selected: None,
                subscribers: Vec::new(),
                notifying: false,
                pending: None,
            })),
        }
    }

    /// The currently selected country key, if any.
    pub fn selected(&self) -> Option<String> {
        self.inner.borrow().selected.clone()
    }

    /// Register a callback for the page lifetime. There is no unsubscribe;
    /// views live as long as the page does.
    pub fn subscribe(&self, f: impl Fn(Option<&str>) + 'static) {
        self.inner.borrow_mut().subscribers.push(Rc::new(f));
    }

    /// Overwrite the selection and broadcast the new value.
    pub fn set_selected(&self, key: Option<String>) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.notifying {
                inner.pending = Some(key);
                return;
            }
            inner.notifying = true;
            inner.selected = key;
        }

        loop {
            // Snapshot outside the borrow: subscribers may read the store
            // or publish again while being notified.
            let (value, subscribers) = {
                let inner = self.inner.borrow();
                (inner.selected.clone(), inner.subscribers.clone())
            };
            for subscriber in &subscribers {
                subscriber(value.as_deref());
            }

            let mut inner = self.inner.borrow_mut();
            match inner.pending.take() {
                Some(next) => inner.selected = next,
                None => {
                    inner.notifying = false;
                    return;
                }
            }
        }
    }

    /// Toggle semantics used by the bar chart: clicking an already-selected
    /// key clears the selection.
    pub fn toggle(&self, key: &str) {
        let next = if self.selected().as_deref() == Some(key) {
            None
        } else {
            Some(key.to_string())
        };
        self.set_selected(next);
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        SelectionStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_broadcast_in_registration_order() {
        let store = SelectionStore::new();
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        for name in ["first", "second", "third"] {
            let seen = Rc::clone(&seen);
            store.subscribe(move |key| {
                seen.borrow_mut()
                    .push(format!("{name}:{}", key.unwrap_or("-")));
            });
        }

        store.set_selected(Some("USA".to_string()));
        assert_eq!(
            *seen.borrow(),
            vec!["first:USA", "second:USA", "third:USA"]
        );
        assert_eq!(store.selected(), Some("USA".to_string()));
    }

    #[test]
    fn test_same_key_still_broadcasts() {
        let store = SelectionStore::new();
        let count = Rc::new(RefCell::new(0));
        {
            let count = Rc::clone(&count);
            store.subscribe(move |_| *count.borrow_mut() += 1);
        }
        store.set_selected(Some("USA".to_string()));
        store.set_selected(Some("USA".to_string()));
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_toggle_clears_on_repeat() {
        let store = SelectionStore::new();
        store.toggle("USA");
        assert_eq!(store.selected(), Some("USA".to_string()));
        store.toggle("USA");
        assert_eq!(store.selected(), None);
        store.toggle("USA");
        store.toggle("CHN");
        assert_eq!(store.selected(), Some("CHN".to_string()));
    }

    #[test]
    fn test_reentrant_publish_is_deferred_not_interleaved() {
        let store = SelectionStore::new();
        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));

        // First subscriber republishes once while being notified.
        {
            let publisher = store.clone();
            let fired = RefCell::new(false);
            store.subscribe(move |key| {
                if key == Some("USA") && !*fired.borrow() {
                    *fired.borrow_mut() = true;
                    publisher.set_selected(Some("CHN".to_string()));
                }
            });
        }
        {
            let seen = Rc::clone(&seen);
            store.subscribe(move |key| seen.borrow_mut().push(key.map(str::to_string)));
        }

        store.set_selected(Some("USA".to_string()));

        // The second subscriber saw the USA pass complete, then the queued
        // CHN pass; never a half-finished broadcast.
        assert_eq!(
            *seen.borrow(),
            vec![Some("USA".to_string()), Some("CHN".to_string())]
        );
        assert_eq!(store.selected(), Some("CHN".to_string()));
    }

    #[test]
    fn test_clear_broadcasts_none() {
        let store = SelectionStore::new();
        let last: Rc<RefCell<Option<Option<String>>>> = Rc::new(RefCell::new(None));
        {
            let last = Rc::clone(&last);
            store.subscribe(move |key| *last.borrow_mut() = Some(key.map(str::to_string)));
        }
        store.set_selected(Some("FRA".to_string()));
        store.set_selected(None);
        assert_eq!(*last.borrow(), Some(None));
        assert_eq!(store.selected(), None);
    }
}
