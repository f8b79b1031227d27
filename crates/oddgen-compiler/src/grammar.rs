//! The rule table: three independent namespaces of compiled recognizers.

use indexmap::IndexMap;

use crate::compile::compile_line;
use crate::diagnostics::Diagnostics;
use crate::error::CompileError;
use crate::meta::Origin;
use crate::symbol::Recognizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Ignorations,
    Definitions,
    Rules,
}

impl Namespace {
    pub const ALL: [Namespace; 3] = [Self::Ignorations, Self::Definitions, Self::Rules];

    /// Grammar file statement keyword that defines into this namespace.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Ignorations => "ignore",
            Self::Definitions => "define",
            Self::Rules => "rule",
        }
    }

    /// Singular noun for one entry of this namespace.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Ignorations => "ignoration",
            Self::Definitions => "definition",
            Self::Rules => "rule",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.keyword() == keyword)
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignorations => write!(f, "ignorations"),
            Self::Definitions => write!(f, "definitions"),
            Self::Rules => write!(f, "rules"),
        }
    }
}

/// Compiled grammar.
///
/// Each namespace keeps declaration order. Redefining a name replaces its
/// recognizer in place. Once built, a grammar is only read.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    ignorations: IndexMap<String, Recognizer>,
    definitions: IndexMap<String, Recognizer>,
    rules: IndexMap<String, Recognizer>,
    diagnostics: Diagnostics,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore(&mut self, text: &str) -> Result<&Recognizer, CompileError> {
        self.define(Namespace::Ignorations, text)
    }

    pub fn define_definition(&mut self, text: &str) -> Result<&Recognizer, CompileError> {
        self.define(Namespace::Definitions, text)
    }

    pub fn rule(&mut self, text: &str) -> Result<&Recognizer, CompileError> {
        self.define(Namespace::Rules, text)
    }

    /// Compile one grammar line into `namespace`.
    pub fn define(&mut self, namespace: Namespace, text: &str) -> Result<&Recognizer, CompileError> {
        self.define_at(namespace, text, Origin::default())
    }

    /// Like [`Grammar::define`], for a line located at `origin` in a larger text.
    ///
    /// On error nothing is stored and no warnings of the line are kept.
    pub fn define_at(
        &mut self,
        namespace: Namespace,
        text: &str,
        origin: Origin,
    ) -> Result<&Recognizer, CompileError> {
        let mut warnings = Diagnostics::new();
        let recognizer = compile_line(text, origin, &mut warnings)?;
        self.diagnostics.extend(warnings);

        let table = self.namespace_mut(namespace);
        let name = recognizer.name().to_string();
        let (index, _) = table.insert_full(name, recognizer);
        Ok(&table[index])
    }

    pub fn lookup(&self, namespace: Namespace, name: &str) -> Option<&Recognizer> {
        self.namespace(namespace).get(name)
    }

    /// Recognizers of `namespace` in declaration order.
    pub fn namespace(&self, namespace: Namespace) -> &IndexMap<String, Recognizer> {
        match namespace {
            Namespace::Ignorations => &self.ignorations,
            Namespace::Definitions => &self.definitions,
            Namespace::Rules => &self.rules,
        }
    }

    fn namespace_mut(&mut self, namespace: Namespace) -> &mut IndexMap<String, Recognizer> {
        match namespace {
            Namespace::Ignorations => &mut self.ignorations,
            Namespace::Definitions => &mut self.definitions,
            Namespace::Rules => &mut self.rules,
        }
    }

    /// Top-level rules in declaration order.
    pub fn rules(&self) -> impl DoubleEndedIterator<Item = &Recognizer> {
        self.rules.values()
    }

    /// Warnings collected while compiling.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.ignorations.is_empty() && self.definitions.is_empty() && self.rules.is_empty()
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for namespace in Namespace::ALL {
            for recognizer in self.namespace(namespace).values() {
                writeln!(f, "{} {}", namespace.keyword(), recognizer)?;
            }
        }
        Ok(())
    }
}
