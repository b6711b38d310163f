//! Explain command report data structures.

use std::{fmt, path::PathBuf};

use newtype_model::{CarrierKind, TypeDescriptor};

use super::output::{Output, Report};

/// Report data from pipeline explanation.
#[derive(Debug)]
pub struct ExplainReport {
    /// Path to the manifest file.
    pub config_path: PathBuf,
    /// Number of declared `[types]` surfaces.
    pub type_count: usize,
    /// Pipeline phases.
    pub phases: Vec<PhaseInfo>,
    /// Validation lints.
    pub lints: Vec<LintInfo>,
    /// Per-alias summaries.
    pub aliases: Vec<AliasSummary>,
    /// The extracted descriptors, for `--json`.
    pub descriptors: Vec<TypeDescriptor>,
}

#[derive(Debug)]
pub struct PhaseInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug)]
pub struct LintInfo {
    pub name: String,
    pub description: String,
}

/// What the pipeline extracted for one alias.
#[derive(Debug)]
pub struct AliasSummary {
    /// Namespace-qualified alias name.
    pub name: String,
    /// Underlying type as emitted.
    pub underlying: String,
    /// `struct` or `class`.
    pub carrier: &'static str,
    pub file: String,
    pub operators: usize,
    pub constructors: usize,
    pub members: usize,
    pub equality: bool,
    pub comparable: bool,
    pub formattable: bool,
}

impl AliasSummary {
    pub fn from_descriptor(d: &TypeDescriptor) -> Self {
        Self {
            name: d.type_display_string.clone(),
            underlying: d.underlying.full_name.clone(),
            carrier: match d.carrier {
                CarrierKind::Struct => "struct",
                CarrierKind::Class => "class",
            },
            file: d.hint_name(),
            operators: d.binary_operators.len() + d.unary_operators.len(),
            constructors: d.constructors.len(),
            members: d.static_members.len()
                + d.instance_fields.len()
                + d.instance_properties.len()
                + d.instance_methods.len(),
            equality: d.emits_equality(),
            comparable: d.implements_comparable,
            formattable: d.implements_formattable,
        }
    }

    fn capabilities(&self) -> String {
        let caps: Vec<_> = [
            (self.equality, "IEquatable"),
            (self.comparable, "IComparable"),
            (self.formattable, "IFormattable"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();
        if caps.is_empty() {
            "none".to_string()
        } else {
            caps.join(", ")
        }
    }
}

impl fmt::Display for AliasSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} over {})", self.name, self.carrier, self.underlying)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Newtype Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.config_path.display().to_string());
        out.key_value_indented("Types", &self.type_count.to_string());
        out.key_value_indented("Aliases", &self.aliases.len().to_string());
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }

        for alias in &self.aliases {
            out.newline();
            out.section(&alias.to_string());
            out.key_value_indented("File", &alias.file);
            out.key_value_indented("Operators", &alias.operators.to_string());
            out.key_value_indented("Constructors", &alias.constructors.to_string());
            out.key_value_indented("Members", &alias.members.to_string());
            out.key_value_indented("Equality", yes_no(alias.equality));
            out.key_value_indented("Interfaces", &alias.capabilities());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::Recorder;

    #[test]
    fn test_alias_section() {
        let summary = AliasSummary {
            name: "Shop.Price".to_string(),
            underlying: "decimal".to_string(),
            carrier: "struct",
            file: "Shop_Price.g.cs".to_string(),
            operators: 7,
            constructors: 0,
            members: 0,
            equality: true,
            comparable: true,
            formattable: false,
        };
        let report = ExplainReport {
            config_path: PathBuf::from("newtype.toml"),
            type_count: 0,
            phases: vec![],
            lints: vec![],
            aliases: vec![summary],
            descriptors: vec![],
        };

        let mut out = Recorder::default();
        report.render(&mut out);

        assert!(out.0.contains(&"Shop.Price (struct over decimal):".to_string()));
        assert!(out.0.contains(&"  File: Shop_Price.g.cs".to_string()));
        assert!(out.0.contains(&"  Interfaces: IEquatable, IComparable".to_string()));
    }
}
