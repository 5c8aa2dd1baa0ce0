//! Ordered list of the tests a host can select by name.

use crate::error::{Result, TestbedError};
use crate::harness::Test;
use crate::scenes::Pendulum;

/// One selectable test: its display name and the factory that builds it.
#[derive(Clone, Copy, Debug)]
pub struct TestEntry {
    pub name: &'static str,
    pub create: fn() -> Result<Box<dyn Test>>,
}

impl TestEntry {
    pub fn build(&self) -> Result<Box<dyn Test>> {
        (self.create)()
    }
}

pub static TESTS: &[TestEntry] = &[TestEntry {
    name: Pendulum::NAME,
    create: Pendulum::create,
}];

pub fn names() -> impl Iterator<Item = &'static str> {
    TESTS.iter().map(|entry| entry.name)
}

/// Look up a test by name, ignoring ASCII case.
pub fn find(name: &str) -> Result<&'static TestEntry> {
    TESTS
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| TestbedError::UnknownTest(name.to_owned()))
}
