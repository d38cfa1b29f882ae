use std::fmt::Display;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Compound(BlockStatement),
    Assign(AssignStatement),
    Empty,
}

#[derive(Debug, PartialEq, Clone)]
pub struct AssignStatement {
    pub identifier: Identifier,
    pub value: Expression,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(i64),
    PrefixOperation(PrefixOperationKind, Box<Expression>),
    InfixOperation(InfixOperationKind, Box<Expression>, Box<Expression>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum InfixOperationKind {
    Plus,
    Minus,
    Multiply,
    Divide,
}

#[derive(Debug, PartialEq, Clone)]
pub enum PrefixOperationKind {
    Plus,
    Minus,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Identifier {
    pub name: Rc<str>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub block: BlockStatement,
}

#[derive(Debug, PartialEq, Clone)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl Display for AssignStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} := {}", self.identifier.name, self.value)
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Semicolons separate statements rather than terminate them, and
        // empty statements print as nothing at all.
        writeln!(f, "BEGIN")?;
        let mut first = true;
        for statement in &self.statements {
            if matches!(statement, Statement::Empty) {
                continue;
            }
            if !first {
                writeln!(f, ";")?;
            }
            write!(f, "  {}", statement)?;
            first = false;
        }
        if !first {
            writeln!(f)?;
        }
        write!(f, "END")
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Expression::*;
        match self {
            Identifier(ident) => write!(f, "{}", ident.name),
            IntegerLiteral(val) => write!(f, "{}", val),
            PrefixOperation(kind, expr) => write!(f, "({}{})", kind.to_str(), expr),
            InfixOperation(kind, left, right) => {
                write!(f, "({} {} {})", left, kind.to_str(), right)
            }
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Statement::*;
        match self {
            Compound(block) => write!(f, "{}", block),
            Assign(statement) => write!(f, "{}", statement),
            Empty => Ok(()),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.", self.block)
    }
}

impl PrefixOperationKind {
    fn to_str(&self) -> &'static str {
        use PrefixOperationKind::*;
        match self {
            Plus => "+",
            Minus => "-",
        }
    }
}

impl InfixOperationKind {
    fn to_str(&self) -> &'static str {
        use InfixOperationKind::*;
        match self {
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
        }
    }
}
