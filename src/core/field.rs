use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type ChangeListener = Arc<dyn Fn(&DateField) + Send + Sync>;

#[derive(Debug, Default)]
struct FieldState {
    value: String,
    min: String,
}

struct FieldInner {
    id: String,
    state: Mutex<FieldState>,
    listeners: Mutex<Vec<ChangeListener>>,
}

/// A date-valued form field: a raw string value plus a minimum bound.
/// Handles are cheap to clone and share the same underlying field.
#[derive(Clone)]
pub struct DateField {
    inner: Arc<FieldInner>,
}

impl DateField {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(FieldInner {
                id: id.into(),
                state: Mutex::new(FieldState::default()),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    pub fn value(&self) -> String {
        lock(&self.inner.state).value.clone()
    }

    pub fn min(&self) -> String {
        lock(&self.inner.state).min.clone()
    }

    /// The value parsed as a `YYYY-MM-DD` calendar date. Empty or
    /// malformed values read as `None` (field unset).
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.value(), "%Y-%m-%d").ok()
    }

    /// Programmatic write. Does not notify subscribers; only `edit` does.
    pub fn set_value(&self, value: &str) {
        lock(&self.inner.state).value = value.to_string();
    }

    pub fn set_min(&self, min: &str) {
        lock(&self.inner.state).min = min.to_string();
    }

    /// A user-style edit: writes the value, then notifies subscribers.
    pub fn edit(&self, value: &str) {
        self.set_value(value);
        self.notify();
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&DateField) + Send + Sync + 'static,
    {
        lock(&self.inner.listeners).push(Arc::new(listener));
    }

    fn notify(&self) {
        // Listeners run without any field lock held, so they may freely
        // read and write this field or others.
        let listeners: Vec<ChangeListener> = lock(&self.inner.listeners).clone();
        for listener in listeners {
            listener(self);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A poisoned lock only means a listener panicked mid-write; the
    // string state is still usable.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A set of named fields, the stand-in for the page that owns the inputs.
#[derive(Default)]
pub struct Form {
    fields: HashMap<String, DateField>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field under `id` and returns a handle to it.
    pub fn add(&mut self, id: &str) -> DateField {
        let field = DateField::new(id);
        self.fields.insert(id.to_string(), field.clone());
        field
    }

    pub fn get(&self, id: &str) -> Option<DateField> {
        self.fields.get(id).cloned()
    }
}
