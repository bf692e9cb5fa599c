//! RFC 6901 JSON pointers used to locate decode failures.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPointer(String);

impl JsonPointer {
    /// The whole document.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Pointer to an object member.
    pub fn child(&self, name: &str) -> Self {
        let mut next = String::with_capacity(self.0.len() + name.len() + 1);
        next.push_str(&self.0);
        next.push('/');
        for c in name.chars() {
            match c {
                '~' => next.push_str("~0"),
                '/' => next.push_str("~1"),
                c => next.push(c),
            }
        }
        Self(next)
    }

    /// Pointer to an array element.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}/{}", self.0, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn display_or_root(&self) -> &str {
        if self.is_root() {
            "/"
        } else {
            &self.0
        }
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
