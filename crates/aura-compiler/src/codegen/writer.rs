//! Line-oriented output buffer with indentation.

use aura_core::Colors;

use super::Config;

pub(crate) struct Writer<'c> {
    config: &'c Config,
    depth: usize,
    output: String,
}

impl<'c> Writer<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            depth: 0,
            output: String::new(),
        }
    }

    pub fn config(&self) -> &'c Config {
        self.config
    }

    pub fn colors(&self) -> Colors {
        self.config.colors
    }

    /// Write one line at the current depth. Empty lines carry no indentation.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.output.push_str(&self.config.indent);
            }
            self.output.push_str(text);
        }
        self.output.push('\n');
    }

    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// `// <text>`, dimmed.
    pub fn comment(&mut self, text: &str) {
        let c = self.colors();
        self.line(&format!("{}// {}{}", c.dim, text, c.reset));
    }

    /// Blank line, then `// Section <name>`.
    pub fn section(&mut self, name: &str) {
        self.blank();
        self.comment(&format!("Section {name}"));
    }

    /// Output with exactly one trailing newline.
    pub fn finish(mut self) -> String {
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }
}
