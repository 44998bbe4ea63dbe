//! Outline compiler: indented bullet list -> parent/child edges.
//!
//! ```text
//! - Root            Edge(App   -> Root)
//!   - Child1        Edge(Root  -> Child1)
//!     - Grandchild  Edge(Child1 -> Grandchild)
//!   - Child2*       Edge(Root  -> Child2, no view)
//! ```
//!
//! A node's parent is the nearest preceding line whose indentation is
//! strictly smaller, or the caller-supplied root when there is none.
//! Indentation widths are raw character counts; they are only ever compared,
//! never converted into levels.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::error::DomainError;

/// Separates the indentation from the component name on a bullet line.
pub const BULLET_DELIMITER: &str = "- ";

/// Trailing decoration meaning "this component has no view".
pub const NO_VIEW_MARKER: char = '*';

/// One parsed bullet line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub space_count: usize,
    pub rib_name: String,
    pub is_owns_view: bool,
}

impl Node {
    /// Tokenize a single outline line.
    ///
    /// Returns `Ok(None)` for lines that carry no component: blank lines,
    /// non-bullet lines, and bullets whose name is empty after stripping.
    ///
    /// `line_number` is 1-based and only used for error reporting.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Self>, DomainError> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let Some((indent, raw_name)) = line.split_once(BULLET_DELIMITER) else {
            trace!(line_number, "Skipping non-bullet line");
            return Ok(None);
        };

        if !indent.chars().all(char::is_whitespace) {
            trace!(line_number, "Skipping line with text before the bullet");
            return Ok(None);
        }
        if indent.contains('\t') {
            return Err(DomainError::MixedIndentation { line: line_number });
        }

        let name: String = raw_name.chars().filter(|c| !c.is_whitespace()).collect();
        let is_owns_view = !name.contains(NO_VIEW_MARKER);
        let rib_name: String = name.chars().filter(|&c| c != NO_VIEW_MARKER).collect();

        if rib_name.is_empty() {
            trace!(line_number, "Skipping bullet with empty name");
            return Ok(None);
        }

        Ok(Some(Self {
            space_count: indent.chars().count(),
            rib_name,
            is_owns_view,
        }))
    }
}

/// A scaffold dependency: `parent` owns `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub parent: String,
    pub target: String,
    pub is_owns_view: bool,
}

impl Edge {
    pub fn new(parent: impl Into<String>, target: impl Into<String>, is_owns_view: bool) -> Self {
        Self {
            parent: parent.into(),
            target: target.into(),
            is_owns_view,
        }
    }
}

/// Arena of outline nodes with index-resolved parents.
///
/// `parents[i]` is the arena index of node `i`'s parent, or `None` when the
/// node hangs off the root.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    nodes: Vec<Node>,
    parents: Vec<Option<usize>>,
}

impl Outline {
    /// Parse an outline document.
    ///
    /// # Errors
    ///
    /// - `MixedIndentation` when a bullet is indented with tabs.
    /// - `DuplicateComponent` when the same name is declared twice.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let mut nodes = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            if let Some(node) = Node::parse_line(line, line_number)? {
                if seen.insert(node.rib_name.clone(), line_number).is_some() {
                    return Err(DomainError::DuplicateComponent {
                        line: line_number,
                        name: node.rib_name,
                    });
                }
                nodes.push(node);
            }
        }

        let parents = resolve_parents(&nodes);
        debug!(nodes = nodes.len(), "Outline parsed");

        Ok(Self { nodes, parents })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parent node of the node at `index`, if it is not the root.
    pub fn parent_of(&self, index: usize) -> Option<&Node> {
        self.parents
            .get(index)
            .copied()
            .flatten()
            .map(|p| &self.nodes[p])
    }

    /// Edges in document order, with top-level nodes attached to `root`.
    pub fn edges(&self, root: &str) -> Vec<Edge> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let parent = self
                    .parent_of(index)
                    .map_or(root, |p| p.rib_name.as_str());
                Edge::new(parent, node.rib_name.clone(), node.is_owns_view)
            })
            .collect()
    }
}

/// Nearest preceding node with strictly smaller indentation, for every node.
///
/// The stack holds arena indices with strictly increasing indentation, so each
/// node is pushed and popped at most once.
fn resolve_parents(nodes: &[Node]) -> Vec<Option<usize>> {
    let mut stack: Vec<usize> = Vec::new();
    let mut parents = Vec::with_capacity(nodes.len());

    for (index, node) in nodes.iter().enumerate() {
        while let Some(&top) = stack.last() {
            if nodes[top].space_count >= node.space_count {
                stack.pop();
            } else {
                break;
            }
        }
        parents.push(stack.last().copied());
        stack.push(index);
    }

    parents
}

/// Parse `text` and return its edges rooted at `root`.
pub fn compile(text: &str, root: &str) -> Result<Vec<Edge>, DomainError> {
    Ok(Outline::parse(text)?.edges(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "- Root\n  - Child1\n    - Grandchild\n  - Child2*\n";

    #[test]
    fn compiles_example_outline() {
        let edges = compile(EXAMPLE, "App").unwrap();
        assert_eq!(
            edges,
            vec![
                Edge::new("App", "Root", true),
                Edge::new("Root", "Child1", true),
                Edge::new("Child1", "Grandchild", true),
                Edge::new("Root", "Child2", false),
            ]
        );
    }

    #[test]
    fn marker_round_trip() {
        let node = Node::parse_line("- Foo*", 1).unwrap().unwrap();
        assert_eq!(node.rib_name, "Foo");
        assert!(!node.is_owns_view);

        let node = Node::parse_line("- Foo", 1).unwrap().unwrap();
        assert_eq!(node.rib_name, "Foo");
        assert!(node.is_owns_view);
    }

    #[test]
    fn indentation_is_counted_before_first_delimiter() {
        let node = Node::parse_line("      - Deep", 1).unwrap().unwrap();
        assert_eq!(node.space_count, 6);
    }

    #[test]
    fn splits_only_on_first_delimiter() {
        let node = Node::parse_line("  - Foo- Bar", 1).unwrap().unwrap();
        assert_eq!(node.space_count, 2);
        assert_eq!(node.rib_name, "Foo-Bar");
    }

    #[test]
    fn internal_spaces_are_stripped() {
        let node = Node::parse_line("- User Profile *", 1).unwrap().unwrap();
        assert_eq!(node.rib_name, "UserProfile");
        assert!(!node.is_owns_view);
    }

    #[test]
    fn blank_and_empty_lines_are_dropped() {
        assert_eq!(Node::parse_line("", 1).unwrap(), None);
        assert_eq!(Node::parse_line("    ", 1).unwrap(), None);
        assert_eq!(Node::parse_line("  - ", 1).unwrap(), None);
        assert_eq!(Node::parse_line("- *", 1).unwrap(), None);
    }

    #[test]
    fn non_bullet_lines_are_skipped() {
        assert_eq!(Node::parse_line("# Tree", 1).unwrap(), None);
        assert_eq!(Node::parse_line("text - Foo", 1).unwrap(), None);
    }

    #[test]
    fn tabs_in_indentation_are_rejected() {
        assert_eq!(
            Node::parse_line("\t- Foo", 3),
            Err(DomainError::MixedIndentation { line: 3 })
        );
        assert!(Outline::parse("- Root\n \t- Child\n").is_err());
    }

    #[test]
    fn duplicate_components_are_rejected() {
        let result = Outline::parse("- Root\n  - Child\n  - Child\n");
        assert_eq!(
            result.unwrap_err(),
            DomainError::DuplicateComponent {
                line: 3,
                name: "Child".into()
            }
        );
    }

    #[test]
    fn blank_lines_do_not_break_nesting() {
        let edges = compile("- Root\n\n  - Child\n\n", "App").unwrap();
        assert_eq!(edges[1], Edge::new("Root", "Child", true));
    }

    #[test]
    fn edge_count_equals_bullet_count_for_uniform_indentation() {
        let text = "- A\n  - B\n  - C\n    - D\n- E\n  - F\n";
        let bullets = text.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(compile(text, "Root").unwrap().len(), bullets);
    }

    #[test]
    fn parents_always_precede_with_smaller_indentation() {
        let text = "- A\n    - B\n  - C\n      - D\n  - E\n- F\n        - G\n";
        let outline = Outline::parse(text).unwrap();
        let nodes = outline.nodes();

        for (index, node) in nodes.iter().enumerate() {
            match outline.parent_of(index) {
                Some(parent) => {
                    let parent_index = nodes.iter().position(|n| n == parent).unwrap();
                    assert!(parent_index < index);
                    assert!(parent.space_count < node.space_count);
                    // Nothing between parent and node is shallower than the node.
                    assert!(nodes[parent_index + 1..index]
                        .iter()
                        .all(|n| n.space_count >= node.space_count));
                }
                None => assert!(nodes[..index]
                    .iter()
                    .all(|n| n.space_count >= node.space_count)),
            }
        }
    }

    #[test]
    fn uneven_indentation_uses_nearest_shallower_line() {
        // C (2) is shallower than B (4) but deeper than A (0): C's parent is A.
        let edges = compile("- A\n    - B\n  - C\n", "Root").unwrap();
        assert_eq!(edges[1], Edge::new("A", "B", true));
        assert_eq!(edges[2], Edge::new("A", "C", true));
    }

    #[test]
    fn siblings_at_top_level_attach_to_root() {
        let edges = compile("- A\n- B\n", "App").unwrap();
        assert!(edges.iter().all(|e| e.parent == "App"));
    }

    #[test]
    fn empty_outline_has_no_edges() {
        let outline = Outline::parse("\n\n").unwrap();
        assert!(outline.is_empty());
        assert!(outline.edges("App").is_empty());
    }
}
