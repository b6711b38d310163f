//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Render a title with an underline.
    fn title(&mut self, text: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair, such as `Aliases: 3`.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a key-value pair nested under the current section.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// Render a numbered list item (pipeline phases, in order).
    fn numbered_item(&mut self, index: usize, text: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render an added item (e.g., a written file).
    fn added_item(&mut self, text: &str);

    /// Render a removed item (e.g., a deleted file).
    fn removed_item(&mut self, text: &str);

    /// Render an error diagnostic. Terminal output sends it to stderr.
    fn error(&mut self, msg: &str);

    /// Render a warning diagnostic. Terminal output sends it to stderr.
    fn warning(&mut self, msg: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Plain terminal output. Diagnostics go to stderr, everything else to stdout.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{text}");
        println!("{}", "=".repeat(text.chars().count()));
    }

    fn section(&mut self, name: &str) {
        println!("{name}:");
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{key}: {value}");
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {key}: {value}");
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        println!("  {index}. {text}");
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {text}");
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {text}");
    }

    fn removed_item(&mut self, text: &str) {
        println!("  - {text}");
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {msg}");
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {msg}");
    }

    fn divider(&mut self, label: &str) {
        println!("── {label} ──");
    }

    fn preformatted(&mut self, text: &str) {
        println!("{text}");
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered lines for assertions in report tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder(pub Vec<String>);

#[cfg(test)]
impl Recorder {
    pub fn contains(&self, line: &str) -> bool {
        self.0.iter().any(|l| l == line)
    }
}

#[cfg(test)]
impl Output for Recorder {
    fn title(&mut self, text: &str) {
        self.0.push(format!("# {text}"));
    }
    fn section(&mut self, name: &str) {
        self.0.push(format!("{name}:"));
    }
    fn key_value(&mut self, key: &str, value: &str) {
        self.0.push(format!("{key}: {value}"));
    }
    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.0.push(format!("  {key}: {value}"));
    }
    fn numbered_item(&mut self, index: usize, text: &str) {
        self.0.push(format!("  {index}. {text}"));
    }
    fn list_item(&mut self, text: &str) {
        self.0.push(format!("  - {text}"));
    }
    fn added_item(&mut self, text: &str) {
        self.0.push(format!("  + {text}"));
    }
    fn removed_item(&mut self, text: &str) {
        self.0.push(format!("  - {text}"));
    }
    fn error(&mut self, msg: &str) {
        self.0.push(format!("error: {msg}"));
    }
    fn warning(&mut self, msg: &str) {
        self.0.push(format!("warning: {msg}"));
    }
    fn divider(&mut self, label: &str) {
        self.0.push(format!("-- {label} --"));
    }
    fn preformatted(&mut self, text: &str) {
        self.0.push(text.to_string());
    }
    fn newline(&mut self) {
        self.0.push(String::new());
    }
}
