use crate::core::field::{DateField, Form};

pub const CHECK_IN_FIELD: &str = "check_in";
pub const CHECK_OUT_FIELD: &str = "check_out";

/// Keeps a check-out field's minimum bound equal to the check-in field's
/// value, and pushes an already-chosen check-out date forward whenever it
/// falls before the newly selected check-in date.
pub struct DateRangeGuard {
    check_in: DateField,
    check_out: DateField,
}

impl DateRangeGuard {
    /// Binds the guard to two field handles and subscribes to check-in
    /// edits. Existing values are left untouched; the first edit after
    /// binding establishes the bound.
    pub fn bind(check_in: DateField, check_out: DateField) -> Self {
        let guard = Self {
            check_in,
            check_out,
        };
        let check_out = guard.check_out.clone();
        guard.check_in.subscribe(move |check_in| {
            Self::on_check_in_change(check_in, &check_out);
        });
        guard
    }

    /// Looks up the two well-known fields on a form and binds to them.
    /// Returns `None` without subscribing anything if either is absent.
    pub fn attach(form: &Form) -> Option<Self> {
        let check_in = form.get(CHECK_IN_FIELD)?;
        let check_out = form.get(CHECK_OUT_FIELD)?;
        Some(Self::bind(check_in, check_out))
    }

    pub fn check_in(&self) -> &DateField {
        &self.check_in
    }

    pub fn check_out(&self) -> &DateField {
        &self.check_out
    }

    fn on_check_in_change(check_in: &DateField, check_out: &DateField) {
        let start = check_in.value();
        check_out.set_min(&start);

        // An empty check-out is never compared, and a value that does not
        // parse as a calendar date counts as unset on either side.
        if check_out.value().is_empty() {
            return;
        }
        if let (Some(from), Some(until)) = (check_in.date(), check_out.date()) {
            if until < from {
                check_out.set_value(&start);
            }
        }
    }
}
