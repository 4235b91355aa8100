//! Presentation-level configuration
//!
//! Resolved from the `[output]` section and the `--no-color` / `--quiet`
//! flags by the binary.

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Total width of a turn box, borders included
    pub box_width: usize,
    /// Show spinners while members work
    pub spinner: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            box_width: 80,
            spinner: true,
        }
    }
}

impl OutputConfig {
    /// Narrowest box that still leaves room for text
    pub const MIN_BOX_WIDTH: usize = 20;

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_box_width(mut self, width: usize) -> Self {
        self.box_width = width.max(Self::MIN_BOX_WIDTH);
        self
    }

    pub fn with_spinner(mut self, spinner: bool) -> Self {
        self.spinner = spinner;
        self
    }
}
