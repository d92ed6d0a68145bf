//! Configuration for code generation.

use aura_core::Colors;

/// Configuration shared by every target.
#[derive(Clone, Debug)]
pub struct Config {
    /// Inline the prelude instead of referring to an external one
    pub(crate) emit_prelude: bool,
    /// One level of indentation
    pub(crate) indent: String,
    /// Highlighting for terminal display
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emit_prelude: true,
            indent: "    ".to_owned(),
            colors: Colors::OFF,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inline the prelude (default), or reference `aura_core.h` /
    /// `aura_core::prelude` instead.
    pub fn emit_prelude(mut self, value: bool) -> Self {
        self.emit_prelude = value;
        self
    }

    /// Indent with `width` spaces.
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }

    /// Indent with one tab per level.
    pub fn tabs(mut self) -> Self {
        self.indent = "\t".to_owned();
        self
    }

    /// Dim section comments with ANSI colors, for terminal display.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}
