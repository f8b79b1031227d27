//! Results of matching: per-recognizer matches and the program tree.

use oddgen_core::Token;
use serde::Serialize;
use serde::ser::SerializeStruct;

/// Outcome of invoking a recognizer at a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    NoMatch,
    Matched {
        /// Number of program tokens consumed.
        width: usize,
        nodes: Vec<Node>,
    },
}

impl Match {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    pub fn width(&self) -> Option<usize> {
        match self {
            Self::NoMatch => None,
            Self::Matched { width, .. } => Some(*width),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        match self {
            Self::NoMatch => &[],
            Self::Matched { nodes, .. } => nodes,
        }
    }
}

/// One contribution to a match: a consumed token or a nested subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Token(Token),
    Tree(Subtree),
}

/// Nodes produced by a subrule, definition, or group invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subtree {
    /// Name of the referenced rule or definition; `None` for groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    pub width: usize,
    pub children: Vec<Node>,
}

impl Subtree {
    pub fn new(rule: Option<String>, width: usize, children: Vec<Node>) -> Self {
        Self {
            rule,
            width,
            children,
        }
    }

    fn write_indented(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        let label = self.rule.as_deref().unwrap_or("group");
        writeln!(f, "{:indent$}{label} [{}]", "", self.width, indent = depth * 2)?;
        for child in &self.children {
            match child {
                Node::Token(token) => {
                    writeln!(f, "{:indent$}{token}", "", indent = (depth + 1) * 2)?
                }
                Node::Tree(tree) => tree.write_indented(f, depth + 1)?,
            }
        }
        Ok(())
    }
}

/// Indented outline: subtrees as `rule [width]`, tokens as `kind "lexeme"`.
impl std::fmt::Display for Subtree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_indented(f, 0)
    }
}

/// The flat list of top-level expressions of a program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramTree {
    pub expressions: Vec<Subtree>,
}

impl ProgramTree {
    pub fn new(expressions: Vec<Subtree>) -> Self {
        Self { expressions }
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Total number of tokens covered by the expressions.
    pub fn width(&self) -> usize {
        self.expressions.iter().map(|e| e.width).sum()
    }
}

impl Serialize for ProgramTree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ProgramTree", 2)?;
        state.serialize_field("kind", "program")?;
        state.serialize_field("expressions", &self.expressions)?;
        state.end()
    }
}

impl std::fmt::Display for ProgramTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "program [{}]", self.width())?;
        for expression in &self.expressions {
            expression.write_indented(f, 1)?;
        }
        Ok(())
    }
}
