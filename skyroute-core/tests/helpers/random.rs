use crate::utils::{Float, Random};
use std::cell::RefCell;

/// A test double which replays scripted integer and real draws.
pub struct FakeRandom {
    ints: RefCell<Vec<i32>>,
    reals: RefCell<Vec<Float>>,
}

impl FakeRandom {
    /// Creates a new instance of `FakeRandom` replaying values in the given order.
    pub fn new(ints: Vec<i32>, reals: Vec<Float>) -> Self {
        fn reversed<T>(mut values: Vec<T>) -> RefCell<Vec<T>> {
            values.reverse();
            RefCell::new(values)
        }

        Self { ints: reversed(ints), reals: reversed(reals) }
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        self.ints.borrow_mut().pop().expect("no more scripted int values")
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        assert!(min < max);
        self.reals.borrow_mut().pop().expect("no more scripted real values")
    }
}
