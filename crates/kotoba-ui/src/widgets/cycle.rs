/// Cyclic selection over a fixed set of options
#[derive(Debug, Clone)]
pub struct Cycle<T: 'static> {
    options: &'static [T],
    index: usize,
}

impl<T: Copy> Cycle<T> {
    /// `options` must not be empty
    pub const fn new(options: &'static [T]) -> Self {
        Self { options, index: 0 }
    }

    pub fn current(&self) -> T {
        self.options[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn options(&self) -> &'static [T] {
        self.options
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.options.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.options.len() - 1) % self.options.len();
    }
}
