//! Prefix tree over path segments.
//!
//! One tree exists per HTTP method. Each node stands for one segment
//! position and owns its children in insertion order:
//!
//! - Static segments (e.g. `hello`) match exactly
//! - Named segments (e.g. `:name`) match any single segment
//! - Catch-all segments (e.g. `*filepath`) absorb every remaining segment
//!
//! A node is a match target only if a route was registered ending at it,
//! i.e. its `pattern` is non-empty. Interior nodes that were merely passed
//! through during insertion never match.
//!
//! ## Tie-breaking
//!
//! Siblings are tried strictly in insertion order, which is registration
//! order. There is no "static beats wildcard" rule. Insertion reuses an
//! existing wild child for any segment, so after registering `/user/:id`
//! and then `/user/profile` both routes end on the `:id` node, the later
//! one overwrites its pattern, and `/user/42` resolves to `/user/profile`.
//!
//! Wild nodes are shared across differently-named wildcards inserted at the
//! same position. Only the first-inserted name is kept as the node's text;
//! parameter names are recovered later from the matched pattern string.

use std::fmt;

use super::pattern::SegmentKind;

/// Node in the pattern tree
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Full registered pattern; non-empty only on nodes that end a route
    pattern: String,
    /// Segment text this node was created for (empty at the root)
    part: String,
    /// Child nodes in insertion order
    children: Vec<Node>,
    /// `true` when `part` is a named or catch-all segment
    is_wild: bool,
}

impl Node {
    /// Create an empty root node.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    fn new_child(part: &str) -> Self {
        Self {
            pattern: String::new(),
            part: part.to_string(),
            children: Vec::new(),
            is_wild: SegmentKind::of(part).is_wild(),
        }
    }

    /// Full pattern of the route ending at this node, empty for interior nodes
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Segment text this node stands for
    #[must_use]
    pub fn part(&self) -> &str {
        &self.part
    }

    #[must_use]
    pub fn is_wild(&self) -> bool {
        self.is_wild
    }

    /// Whether a registered route ends here.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        !self.pattern.is_empty()
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Insert `pattern`, whose parsed segments are `parts`, below this node.
    ///
    /// `height` is the index of the segment this call consumes. Registering
    /// the same segment sequence twice overwrites the stored pattern.
    pub fn insert(&mut self, pattern: &str, parts: &[&str], height: usize) {
        if parts.len() == height {
            self.pattern = pattern.to_string();
            return;
        }

        let part = parts[height];
        let idx = match self.match_child(part) {
            Some(idx) => idx,
            None => {
                self.children.push(Node::new_child(part));
                self.children.len() - 1
            }
        };
        self.children[idx].insert(pattern, parts, height + 1);
    }

    /// Find the first leaf reachable for the request segments `parts`.
    ///
    /// Depth-first over matching children in insertion order; the first
    /// leaf found wins. A catch-all node ends the descent regardless of how
    /// many segments remain.
    #[must_use]
    pub fn search(&self, parts: &[&str], height: usize) -> Option<&Node> {
        if parts.len() == height || SegmentKind::of(&self.part) == SegmentKind::CatchAll {
            return self.is_leaf().then_some(self);
        }

        let part = parts[height];
        self.match_children(part)
            .into_iter()
            .find_map(|child| child.search(parts, height + 1))
    }

    /// Collect every leaf at or below this node, depth-first.
    pub fn travel<'a>(&'a self, list: &mut Vec<&'a Node>) {
        if self.is_leaf() {
            list.push(self);
        }
        for child in &self.children {
            child.travel(list);
        }
    }

    /// Index of the first child reusable for inserting `part`.
    fn match_child(&self, part: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.part == part || child.is_wild)
    }

    /// Children that may match the request segment `part`, in insertion order.
    fn match_children(&self, part: &str) -> Vec<&Node> {
        self.children
            .iter()
            .filter(|child| child.part == part || child.is_wild)
            .collect()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "node{{pattern={}, part={}, is_wild={}}}",
            self.pattern, self.part, self.is_wild
        )
    }
}
