/// ## Machine configuration

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) stack_size: usize,
    pub(crate) division_scale: Option<usize>,
    pub(crate) max_call_depth: usize,
    pub(crate) max_steps: Option<usize>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            stack_size: 4,
            division_scale: Some(12),
            max_call_depth: u16::max_value() as usize,
            max_steps: None,
        }
    }
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    /// Register stack capacity. Clamped to at least one register.
    pub fn stack_size(mut self, size: usize) -> Config {
        self.stack_size = size.max(1);
        self
    }

    /// Fractional digits kept by `/`. `None` leaves division undefined.
    pub fn division_scale(mut self, scale: Option<usize>) -> Config {
        self.division_scale = scale;
        self
    }

    /// Nested `xeq` calls allowed. The program body itself is not counted.
    pub fn max_call_depth(mut self, depth: usize) -> Config {
        self.max_call_depth = depth;
        self
    }

    /// Budget of executed statements for one run.
    pub fn max_steps(mut self, steps: Option<usize>) -> Config {
        self.max_steps = steps;
        self
    }
}
