use serde::Serialize;

use crate::core::guard::{CHECK_IN_FIELD, CHECK_OUT_FIELD};
use crate::core::{DateRangeGuard, Form};

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub value: String,
    pub min: String,
}

/// The booking form's two date fields as the client should render them.
#[derive(Debug, Clone, Serialize)]
pub struct BookingFormState {
    pub check_in: FieldView,
    pub check_out: FieldView,
}

/// Replays the caller-supplied dates through the date-range guard: the
/// check-out value is preset, the guard is attached, then check-in is
/// edited. The returned state carries the derived minimum bound and the
/// clamped check-out value.
pub fn booking_form_state(check_in: &str, check_out: &str) -> BookingFormState {
    let mut form = Form::new();
    let check_in_field = form.add(CHECK_IN_FIELD);
    let check_out_field = form.add(CHECK_OUT_FIELD);

    check_out_field.set_value(check_out);
    let _binding = DateRangeGuard::attach(&form);
    check_in_field.edit(check_in);

    BookingFormState {
        check_in: FieldView {
            value: check_in_field.value(),
            min: check_in_field.min(),
        },
        check_out: FieldView {
            value: check_out_field.value(),
            min: check_out_field.min(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_state_mirrors_bound() {
        let state = booking_form_state("2024-06-10", "");
        assert_eq!(state.check_in.value, "2024-06-10");
        assert_eq!(state.check_out.min, "2024-06-10");
        assert_eq!(state.check_out.value, "");
    }

    #[test]
    fn test_form_state_clamps_earlier_check_out() {
        let state = booking_form_state("2024-06-12", "2024-06-05");
        assert_eq!(state.check_out.value, "2024-06-12");
        assert_eq!(state.check_out.min, "2024-06-12");
    }

    #[test]
    fn test_form_state_with_no_dates_is_empty() {
        let state = booking_form_state("", "");
        assert_eq!(state.check_in.value, "");
        assert_eq!(state.check_out.min, "");
        assert_eq!(state.check_out.value, "");
    }
}
