//! Demo configuration: defaults, environment variables, CLI overrides.

use clap::ValueEnum;

/// Output rendering for demo results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One formatted line per element.
    Text,
    /// Pretty-printed JSON of the result collection.
    Json,
}

/// Knobs shared by the demonstrations.
///
/// Layering, lowest priority first: built-in defaults, environment
/// variables, CLI flags.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// How many elements demos over infinite sources take.
    pub take_count: usize,

    /// Page size for the pagination demo.
    pub page_size: usize,

    /// Output rendering.
    pub format: OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            take_count: 20,
            page_size: 10,
            format: OutputFormat::Text,
        }
    }
}

impl DemoConfig {
    /// Create a config from environment variables, falling back to
    /// defaults.
    ///
    /// Environment variables:
    /// - `SEQFLOW_TAKE_COUNT`: element budget over infinite sources
    /// - `SEQFLOW_PAGE_SIZE`: pagination page size
    /// - `SEQFLOW_FORMAT`: `text` or `json`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SEQFLOW_TAKE_COUNT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.take_count = v;
            }
        }

        if let Ok(s) = std::env::var("SEQFLOW_PAGE_SIZE") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.page_size = v;
            }
        }

        if let Ok(s) = std::env::var("SEQFLOW_FORMAT") {
            match s.to_ascii_lowercase().as_str() {
                "text" => cfg.format = OutputFormat::Text,
                "json" => cfg.format = OutputFormat::Json,
                _ => {}
            }
        }

        cfg
    }

    /// Layer CLI flag overrides on top.
    pub fn apply_overrides(
        &mut self,
        take: Option<usize>,
        page_size: Option<usize>,
        format: Option<OutputFormat>,
    ) {
        if let Some(take) = take {
            self.take_count = take;
        }
        if let Some(size) = page_size {
            self.page_size = size;
        }
        if let Some(format) = format {
            self.format = format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_take_priority_over_defaults() {
        let mut cfg = DemoConfig::default();
        cfg.apply_overrides(Some(5), None, Some(OutputFormat::Json));
        assert_eq!(cfg.take_count, 5);
        assert_eq!(cfg.page_size, DemoConfig::default().page_size);
        assert_eq!(cfg.format, OutputFormat::Json);
    }
}
