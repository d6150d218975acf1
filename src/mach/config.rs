/// Run settings shared by the interpreter and its runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Statements a run may execute before it is stopped.
    pub step_limit: usize,
    /// Statements per `Runtime::execute` slice.
    pub cycles: usize,
    pub tab_width: usize,
    /// Seed for `RANDOM`; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            step_limit: 20000,
            cycles: 5000,
            tab_width: 4,
            seed: None,
        }
    }
}
