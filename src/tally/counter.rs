use core::fmt;
use std::rc::Rc;

use yew::Reducible;

/// Click count held by the page. Starts at zero and only ever grows.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub struct Counter {
    value: u64,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CounterAction {
    Increment,
}

impl Counter {
    pub fn new() -> Self {
        Counter { value: 0 }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn apply(&mut self, action: CounterAction) {
        match action {
            CounterAction::Increment => self.increment(),
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Reducible for Counter {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        Rc::new(next)
    }
}
