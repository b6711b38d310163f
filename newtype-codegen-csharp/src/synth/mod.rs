//! Descriptor to C# source.
//!
//! The output unit is a fixed sequence of sections, each contributing zero
//! or more member blocks:
//!
//! 1. storage (`_value`, `Value`)
//! 2. constructors
//! 3. implicit conversions
//! 4. forwarded operators
//! 5. equality
//! 6. ordering
//! 7. formatting
//! 8. `ToString()`
//! 9. static members region
//! 10. forwarded instance members
//!
//! Rendering reads nothing but the descriptor, so equal descriptors give
//! byte-identical text.

mod declaration;
mod equality;
mod members;
mod operators;
mod ordering;
mod storage;

use newtype_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
use newtype_model::{CarrierKind, TypeDescriptor};

/// First line of every generated file.
pub const AUTO_GENERATED_MARKER: &str = "// <auto-generated/>";

const METHOD_IMPL: &str = "global::System.Runtime.CompilerServices.MethodImpl";
const METHOD_IMPL_OPTIONS: &str = "global::System.Runtime.CompilerServices.MethodImplOptions";

/// One member declaration, possibly spanning several lines.
type Block = Vec<CodeFragment>;

/// Render the complete source file for one alias.
pub fn synthesize(descriptor: &TypeDescriptor) -> String {
    let mut builder = CodeBuilder::csharp();
    builder.emit(&AliasUnit { descriptor });
    builder.build()
}

struct AliasUnit<'a> {
    descriptor: &'a TypeDescriptor,
}

impl Renderable for AliasUnit<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let alias = Alias::new(self.descriptor);

        let mut fragments = vec![
            CodeFragment::comment("<auto-generated/>"),
            CodeFragment::line("#nullable enable"),
            CodeFragment::Blank,
        ];
        if !self.descriptor.namespace.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "namespace {};",
                self.descriptor.namespace
            )));
            fragments.push(CodeFragment::Blank);
        }

        let blocks = [
            storage::storage(&alias),
            storage::constructors(&alias),
            storage::conversions(&alias),
            operators::operators(&alias),
            equality::equality(&alias),
            ordering::comparison(&alias),
            ordering::formatting(&alias),
            ordering::to_string(&alias),
            members::static_members(&alias),
            members::instance_members(&alias),
        ]
        .into_iter()
        .flatten();

        fragments.push(CodeFragment::braced(
            declaration::declaration(&alias),
            separate(blocks),
        ));
        fragments
    }
}

/// Join blocks with one blank line between each.
fn separate(blocks: impl IntoIterator<Item = Block>) -> Vec<CodeFragment> {
    let mut body = Vec::new();
    for block in blocks {
        if !body.is_empty() {
            body.push(CodeFragment::Blank);
        }
        body.extend(block);
    }
    body
}

/// Naming and shape helpers over the descriptor being rendered.
struct Alias<'a> {
    d: &'a TypeDescriptor,
}

impl<'a> Alias<'a> {
    fn new(d: &'a TypeDescriptor) -> Self {
        Self { d }
    }

    fn name(&self) -> &str {
        &self.d.type_name
    }

    fn underlying(&self) -> &str {
        &self.d.underlying.full_name
    }

    fn is_class(&self) -> bool {
        matches!(self.d.carrier, CarrierKind::Class)
    }

    /// Whether `_value` may be null.
    fn holds_reference(&self) -> bool {
        !self.d.underlying.is_value_type
    }

    /// The alias type in a position that accepts null.
    fn nullable_name(&self) -> String {
        if self.is_class() {
            format!("{}?", self.name())
        } else {
            self.name().to_string()
        }
    }

    fn wrap(&self, expr: &str) -> String {
        format!("new {}({})", self.name(), expr)
    }

    /// Member names the synthesized surface already uses.
    fn is_reserved(&self, member: &str) -> bool {
        member == "Value" || member == "_value" || member == self.name()
    }

    /// The `[MethodImpl]` attribute line, unless inlining hints are disabled.
    fn method_impl(&self) -> Option<String> {
        self.d.options.inlining.member_name().map(|option| {
            format!("[{METHOD_IMPL}({METHOD_IMPL_OPTIONS}.{option})]")
        })
    }

    /// A single-line member, preceded by the inlining attribute.
    fn attributed(&self, line: String) -> Block {
        let mut block: Block = self.method_impl().map(CodeFragment::line).into_iter().collect();
        block.push(CodeFragment::line(line));
        block
    }

    /// An expression-bodied get-only property.
    ///
    /// Attributes cannot target a property, so the hint goes on the getter.
    fn property(&self, header: String, body: String) -> Block {
        match self.method_impl() {
            Some(attr) => vec![CodeFragment::line(format!(
                "{header} {{ {attr} get => {body}; }}"
            ))],
            None => vec![CodeFragment::line(format!("{header} => {body};"))],
        }
    }
}
