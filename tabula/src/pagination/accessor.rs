//! Two-way binding adapter.
//!
//! Lets a control act as a plain form field: the host writes a value in,
//! reads it back, and is told when the user changes it.

/// A control whose value can be bound to a form field.
pub trait ValueAccessor {
    /// The bound value type.
    type Value;

    /// Read the current value.
    fn value(&self) -> Self::Value;

    /// Write a value from the model side.
    ///
    /// Does not fire the change callback.
    fn write_value(&mut self, value: Self::Value);

    /// Register the callback fired when the user changes the value.
    ///
    /// Replaces any previously registered callback.
    fn register_on_change(&mut self, callback: Box<dyn FnMut(Self::Value) + Send>);

    /// Enable or disable the control.
    fn set_disabled_state(&mut self, disabled: bool);
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::pagination::Paginator;

    #[test]
    fn test_on_change_fires_for_navigation_only() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut p = Paginator::new(10).with_total_items(50);
        let sink = Arc::clone(&seen);
        p.register_on_change(Box::new(move |page| sink.lock().unwrap().push(page)));

        p.write_value(3);
        assert_eq!(p.value(), 3);
        p.go_to_next();
        p.go_to_next();
        p.go_to_next();
        p.set_page_size(25);

        assert_eq!(*seen.lock().unwrap(), vec![4, 5, 1]);
    }

    #[test]
    fn test_write_value_clamps() {
        let mut p = Paginator::new(10).with_total_items(30);
        p.write_value(9);
        assert_eq!(p.value(), 3);
        p.write_value(0);
        assert_eq!(p.value(), 1);
    }

    #[test]
    fn test_disabled_state() {
        let mut p = Paginator::new(10).with_total_items(30);
        p.set_disabled_state(true);
        assert!(p.is_disabled());
        assert_eq!(p.go_to_next(), None);
    }
}
