//! Row count spinner state.

use lattice_bench_core::{Property, Signal};

/// Direction of a spinner arrow click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinStep {
    Up,
    Down,
}

/// A bounded integer spinner.
///
/// Values are clamped to `minimum..=maximum`; a spinner without a maximum is
/// unbounded above. `value_changed` fires only when the clamped value moves.
///
/// The value is changed only by the owning panel, which resizes the bound
/// model in the same handler.
pub struct SpinnerState {
    value: Property<usize>,
    minimum: usize,
    maximum: Option<usize>,
    step: usize,
    pub value_changed: Signal<usize>,
}

impl SpinnerState {
    /// Creates a spinner. The initial value is clamped into range.
    pub fn new(value: usize, minimum: usize, maximum: Option<usize>, step: usize) -> Self {
        let spinner = Self {
            value: Property::new(minimum),
            minimum,
            maximum,
            step: step.max(1),
            value_changed: Signal::new(),
        };
        spinner.value.set_silent(spinner.clamp(value));
        spinner
    }

    pub fn value(&self) -> usize {
        self.value.get()
    }

    pub fn minimum(&self) -> usize {
        self.minimum
    }

    pub fn maximum(&self) -> Option<usize> {
        self.maximum
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// The clamped value one step away from the current one.
    pub fn stepped(&self, step: SpinStep) -> usize {
        let value = self.value();
        self.clamp(match step {
            SpinStep::Up => value.saturating_add(self.step),
            SpinStep::Down => value.saturating_sub(self.step),
        })
    }

    /// Sets the value, clamped into range, and returns the value now held.
    pub(crate) fn set_value(&self, value: usize) -> usize {
        let value = self.clamp(value);
        if self.value.set(value) {
            self.value_changed.emit(value);
        }
        value
    }

    fn clamp(&self, value: usize) -> usize {
        let value = value.max(self.minimum);
        match self.maximum {
            Some(max) => value.min(max),
            None => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_clamps_to_range() {
        let spinner = SpinnerState::new(5, 20, Some(100), 20);
        assert_eq!(spinner.value(), 20);
        assert_eq!(spinner.set_value(500), 100);
        assert_eq!(spinner.set_value(spinner.stepped(SpinStep::Down)), 80);
    }

    #[test]
    fn test_unbounded_steps() {
        let spinner = SpinnerState::new(20, 0, None, 10);
        assert_eq!(spinner.set_value(spinner.stepped(SpinStep::Up)), 30);
        assert_eq!(spinner.set_value(0), 0);
        assert_eq!(spinner.set_value(spinner.stepped(SpinStep::Down)), 0);
    }

    #[test]
    fn test_value_changed_only_on_change() {
        let spinner = SpinnerState::new(20, 0, None, 10);
        let values = Arc::new(Mutex::new(Vec::new()));
        let recv = values.clone();
        spinner
            .value_changed
            .connect(move |&v| recv.lock().push(v));

        spinner.set_value(20);
        spinner.set_value(35);
        spinner.set_value(spinner.stepped(SpinStep::Up));

        assert_eq!(*values.lock(), vec![35, 45]);
    }

    #[test]
    fn test_stepped_does_not_move_value() {
        let spinner = SpinnerState::new(20, 20, None, 20);
        assert_eq!(spinner.stepped(SpinStep::Up), 40);
        assert_eq!(spinner.stepped(SpinStep::Down), 20);
        assert_eq!(spinner.value(), 20);
    }
}
