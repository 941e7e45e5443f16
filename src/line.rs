/// Which marker a candidate line started with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Bullet,
}

/// Maps heading markers and bullet indentation onto one integer level.
///
/// The two renderer families count levels differently, so each owns a scale.
/// Bullet offsets sit one level below `##`; under a `###` or deeper heading a
/// column-0 bullet lands on the heading's level or above and becomes its
/// sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelScale {
    /// Subtracted from the `#` count of a heading
    pub heading_shift: usize,
    /// Added to the indentation units of a bullet
    pub bullet_offset: usize,
}

impl LevelScale {
    /// Nested list and Word document: `#` is 1, a column-0 bullet is 3.
    pub const LIST: LevelScale = LevelScale {
        heading_shift: 0,
        bullet_offset: 3,
    };

    /// Collapsible outline: `#` is 0, a column-0 bullet is 2.
    pub const OUTLINE: LevelScale = LevelScale {
        heading_shift: 1,
        bullet_offset: 2,
    };

    pub fn heading_level(&self, hashes: usize) -> usize {
        hashes.saturating_sub(self.heading_shift)
    }

    pub fn bullet_level(&self, indent_width: usize) -> usize {
        indent_width / 2 + self.bullet_offset
    }
}

/// A heading or bullet line that survived filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineLine {
    /// The line as it appeared in the input, untrimmed
    pub raw: String,
    pub kind: LineKind,
    pub level: usize,
    /// Label with the marker stripped; never empty
    pub content: String,
}

/// A node of the inferred hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    pub content: String,
    pub level: usize,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including itself
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::count).sum::<usize>()
    }
}
