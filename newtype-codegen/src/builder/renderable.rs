/// A piece of generated C#, independent of its final indentation.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// `header`, then the body between braces on their own lines.
    Braced { header: String, body: Vec<CodeFragment> },
    /// `#region name` ... `#endregion` around the body, at the same depth.
    Region { name: String, body: Vec<CodeFragment> },
    /// A `//` line comment.
    Comment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Braced {
            header: header.into(),
            body,
        }
    }

    pub fn region(name: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Region {
            name: name.into(),
            body,
        }
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }
}

/// A declaration that knows how to describe itself as fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(|node| node.to_fragments()).collect()
    }
}

impl<T: Renderable> Renderable for Vec<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_slice().to_fragments()
    }
}

impl<T: Renderable> Renderable for Option<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().map(T::to_fragments).unwrap_or_default()
    }
}
