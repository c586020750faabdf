//! Flag line rendering

use crate::config::Config;

/// Ordered collection of optional flags. Absent entries keep their slot
/// until rendering, where they are suppressed without disturbing the
/// order of the remaining flags.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    flags: Vec<Option<String>>,
}

impl FlagSet {
    pub fn push(&mut self, flag: Option<String>) {
        self.flags.push(flag);
    }

    /// Present flags in insertion order.
    pub fn present(&self) -> Vec<&str> {
        self.flags.iter().filter_map(|flag| flag.as_deref()).collect()
    }

    /// Join the present flags with the configured separator behind the
    /// configured line prefix.
    pub fn render(&self, config: &Config) -> String {
        format!(
            "{}{}",
            config.flag_prefix,
            self.present().join(&config.separator)
        )
    }
}

impl From<Vec<Option<String>>> for FlagSet {
    fn from(flags: Vec<Option<String>>) -> Self {
        FlagSet { flags }
    }
}
