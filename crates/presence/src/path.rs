//! Field paths tracked while walking an object graph.
//!
//! Rendered two ways: a readable form (`$.embeds[2].title`) used in error
//! messages, and an RFC 6901 JSON Pointer (`/embeds/2/title`).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a field relative to the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(Segment::Key(key.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Formats the path as an RFC 6901 pointer. The root is the empty string.
    pub fn to_pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Key(key) => out.push_str(&escape_component(key)),
                Segment::Index(index) => out.push_str(&index.to_string()),
            }
        }
        out
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Escapes one pointer component (`~` → `~0`, `/` → `~1`).
fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_pointer_matrix() {
        let mut path = FieldPath::root();
        assert_eq!(path.to_string(), "$");
        assert_eq!(path.to_pointer(), "");

        path.push_key("embeds");
        path.push_index(2);
        path.push_key("title");
        assert_eq!(path.to_string(), "$.embeds[2].title");
        assert_eq!(path.to_pointer(), "/embeds/2/title");

        path.pop();
        path.pop();
        assert_eq!(path.to_string(), "$.embeds");
    }

    #[test]
    fn pointer_escapes_reserved_characters() {
        let mut path = FieldPath::root();
        path.push_key("a/b");
        path.push_key("~k");
        assert_eq!(path.to_pointer(), "/a~1b/~0k");
    }
}
