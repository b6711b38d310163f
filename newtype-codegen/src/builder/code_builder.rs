use super::{CodeFragment, Renderable};

const INDENT: &str = "    ";

/// Flattens fragment trees into C# text with Allman braces and 4-space
/// indentation.
///
/// ```
/// use newtype_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::csharp();
/// builder.emit(&CodeFragment::braced(
///     "public partial struct UserId",
///     vec![CodeFragment::line("private readonly int _value;")],
/// ));
///
/// assert_eq!(
///     builder.build(),
///     "public partial struct UserId\n{\n    private readonly int _value;\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn csharp() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply(fragment);
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn apply(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => self.line(&s),
            // Blank lines carry no trailing indentation
            CodeFragment::Blank => self.buffer.push('\n'),
            CodeFragment::Comment(text) => self.line(&format!("// {text}")),
            CodeFragment::Braced { header, body } => {
                self.line(&header);
                self.line("{");
                self.depth += 1;
                body.into_iter().for_each(|f| self.apply(f));
                self.depth -= 1;
                self.line("}");
            }
            CodeFragment::Region { name, body } => {
                self.line(&format!("#region {name}"));
                body.into_iter().for_each(|f| self.apply(f));
                self.line("#endregion");
            }
        }
    }

    fn line(&mut self, s: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(fragments: Vec<CodeFragment>) -> String {
        let mut builder = CodeBuilder::csharp();
        builder.emit(&fragments);
        builder.build()
    }

    #[test]
    fn test_nested_braces_indent() {
        let code = render(vec![CodeFragment::braced(
            "namespace Shop",
            vec![CodeFragment::braced(
                "partial struct Price",
                vec![CodeFragment::line("decimal _value;")],
            )],
        )]);

        assert_eq!(
            code,
            "namespace Shop\n{\n    partial struct Price\n    {\n        decimal _value;\n    }\n}\n"
        );
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let code = render(vec![CodeFragment::braced(
            "partial class C",
            vec![
                CodeFragment::line("a();"),
                CodeFragment::blank(),
                CodeFragment::line("b();"),
            ],
        )]);

        assert_eq!(code, "partial class C\n{\n    a();\n\n    b();\n}\n");
    }

    #[test]
    fn test_region_keeps_depth() {
        let code = render(vec![CodeFragment::braced(
            "partial class C",
            vec![CodeFragment::region(
                "Static Members",
                vec![CodeFragment::line("public static C Zero => new C(0);")],
            )],
        )]);

        assert_eq!(
            code,
            "partial class C\n{\n    #region Static Members\n    public static C Zero => new C(0);\n    #endregion\n}\n"
        );
    }

    #[test]
    fn test_comment() {
        let code = render(vec![CodeFragment::comment("<auto-generated/>")]);
        assert_eq!(code, "// <auto-generated/>\n");
    }
}
