use std::fmt;

/// Grammar constructs. One variant per statement or expression form; the
/// node's `value` field carries the payload where one exists (operator
/// text, literal text, identifier name, typecast target type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum NodeKind {
    Program,
    Block,

    // Statements
    VarDeclaration,
    Assignment,
    Print,
    Input,
    Return,
    Exit,
    Typecast,
    Conditional,
    YaRly,
    Mebbe,
    NoWai,
    Loop,
    Direction,
    Switch,
    Case,
    Default,
    FuncDef,
    ParamList,
    FuncCall,
    ArgList,
    Exception,
    Success,
    Failure,
    ExprStatement,
    Error,

    // Expressions
    Literal,
    Identifier,
    Operation,
    Comparison,
    Logical,
    Smoosh,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeKind::Program => "PROGRAM",
            NodeKind::Block => "BLOCK",
            NodeKind::VarDeclaration => "VAR_DEC",
            NodeKind::Assignment => "ASSIGN",
            NodeKind::Print => "PRINT",
            NodeKind::Input => "INPUT",
            NodeKind::Return => "RETURN",
            NodeKind::Exit => "EXIT",
            NodeKind::Typecast => "TYPECAST",
            NodeKind::Conditional => "IF",
            NodeKind::YaRly => "YA_RLY",
            NodeKind::Mebbe => "MEBBE",
            NodeKind::NoWai => "NO_WAI",
            NodeKind::Loop => "LOOP",
            NodeKind::Direction => "DIRECTION",
            NodeKind::Switch => "SWITCH",
            NodeKind::Case => "CASE",
            NodeKind::Default => "DEFAULT",
            NodeKind::FuncDef => "FUNC_DEF",
            NodeKind::ParamList => "PARAMS",
            NodeKind::FuncCall => "FUNC_CALL",
            NodeKind::ArgList => "ARGS",
            NodeKind::Exception => "EXCEPTION",
            NodeKind::Success => "SUCCESS",
            NodeKind::Failure => "FAILURE",
            NodeKind::ExprStatement => "EXPR_STMT",
            NodeKind::Error => "ERROR",
            NodeKind::Literal => "LITERAL",
            NodeKind::Identifier => "IDENTIFIER",
            NodeKind::Operation => "OP",
            NodeKind::Comparison => "COMPARISON",
            NodeKind::Logical => "LOGICAL",
            NodeKind::Smoosh => "SMOOSH",
        };
        write!(f, "{}", label)
    }
}

/// A node of the syntax tree. Children are owned and kept in source
/// order; `Literal` and `Identifier` leaves carry no children.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub value: Option<String>,
    pub line: Option<usize>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            value: None,
            line: None,
            children: Vec::new(),
        }
    }

    pub fn with_line(kind: NodeKind, line: usize) -> Self {
        Node {
            kind,
            value: None,
            line: Some(line),
            children: Vec::new(),
        }
    }

    pub fn with_value(kind: NodeKind, value: impl Into<String>, line: usize) -> Self {
        Node {
            kind,
            value: Some(value.into()),
            line: Some(line),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Renders the tree for inspection: one line per node, `KIND` or
    /// `KIND: value`, indented four spaces per depth level.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_at(0, &mut out);
        out
    }

    fn pretty_at(&self, level: usize, out: &mut String) {
        let indent = "    ".repeat(level);
        match &self.value {
            Some(value) => out.push_str(&format!("{}{}: {}\n", indent, self.kind, value)),
            None => out.push_str(&format!("{}{}\n", indent, self.kind)),
        }
        for child in &self.children {
            child.pretty_at(level + 1, out);
        }
    }
}
