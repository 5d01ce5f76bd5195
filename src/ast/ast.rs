use std::fmt::Display;

/// Resolved type of a variable or expression. `None` is the error sentinel:
/// it marks a node whose type could not be resolved, and it suppresses
/// follow-on mismatch checks so one root cause yields one diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Int,
    Float,
    None,
}

impl VarType {
    pub fn from_keyword(keyword: &str) -> VarType {
        match keyword {
            "int" => VarType::Int,
            "float" => VarType::Float,
            _ => VarType::None,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == VarType::None
    }
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarType::Int => write!(f, "int"),
            VarType::Float => write!(f, "float"),
            VarType::None => write!(f, "none"),
        }
    }
}

/// The atomic value held by a `Factor` node.
#[derive(Debug, Clone, PartialEq)]
pub enum FactorValue {
    Int(i64),
    Float(f64),
    Identifier(String),
}

/// AST node kinds, one variant per grammar production. Expression-producing
/// variants (`Arithmetic`, `Term`, `Factor`) carry the type resolved at
/// construction time; traversal is by exhaustive matching.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program(Vec<Node>),
    Declaration {
        name: String,
        ty: VarType,
        value: Option<Box<Node>>,
    },
    Assignment {
        name: String,
        value: Box<Node>,
    },
    If {
        condition: Box<Node>,
        then_block: Vec<Node>,
        else_block: Vec<Node>,
    },
    While {
        condition: Box<Node>,
        block: Vec<Node>,
    },
    Condition {
        left: Box<Node>,
        operator: String,
        right: Box<Node>,
    },
    Arithmetic {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
        ty: VarType,
    },
    Term {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
        ty: VarType,
    },
    Factor {
        value: FactorValue,
        ty: VarType,
    },
}

impl Node {
    /// The resolved type of an expression-producing node; statements and
    /// conditions answer with the `none` sentinel.
    pub fn ty(&self) -> VarType {
        match self {
            Node::Arithmetic { ty, .. } | Node::Term { ty, .. } | Node::Factor { ty, .. } => *ty,
            _ => VarType::None,
        }
    }

    /// Statement list of a `Program` root; empty for any other node.
    pub fn statements(&self) -> &[Node] {
        match self {
            Node::Program(statements) => statements,
            _ => &[],
        }
    }
}
