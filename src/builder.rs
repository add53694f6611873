use crate::error::Result;
use crate::reserved::Reserved;
use crate::{Finder, DEFAULT_TARGET};

pub struct FinderBuilder<'q> {
    queue: &'q [i64],
    target: Option<i64>,
    reserved: Reserved,
}

impl<'q> FinderBuilder<'q> {
    pub fn new(queue: &'q [i64]) -> Self {
        Self {
            queue,
            target: None,
            reserved: Reserved::new(),
        }
    }
    pub fn with_target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }
    pub fn with_reserved<I: IntoIterator<Item = usize>>(mut self, reserved: I) -> Self {
        self.reserved.extend(reserved);
        self
    }
    pub fn build(self) -> Result<Finder<'q>> {
        let target = self.target.unwrap_or(DEFAULT_TARGET);
        Finder::from_parts(self.queue, target, self.reserved)
    }
}
