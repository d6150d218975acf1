use std::rc::Rc;

/// A classified statement line.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Nop,
    Display(Vec<Expression>),
    Assign(Target, Expression),
    If(Expression),
    Else,
    EndIf,
    RepeatTimes(Expression),
    RepeatUntil(Rc<Expression>),
    EndRepeat,
    Procedure,
    EndProcedure,
    Call(Rc<str>, Vec<Expression>),
    Return(Option<Expression>),
}

/// Left-hand side of an assignment.
#[derive(Debug, PartialEq, Clone)]
pub enum Target {
    Var(Rc<str>),
    Index(Rc<str>, Expression),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Number(f64),
    String(Rc<str>),
    Boolean(bool),
    List(Vec<Expression>),
    Var(Rc<str>),
    Index(Box<Expression>, Box<Expression>),
    Call(Rc<str>, Vec<Expression>),
    Negation(Box<Expression>),
    Not(Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Modulus(Box<Expression>, Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Equal(Box<Expression>, Box<Expression>),
    NotEqual(Box<Expression>, Box<Expression>),
    Less(Box<Expression>, Box<Expression>),
    LessEqual(Box<Expression>, Box<Expression>),
    Greater(Box<Expression>, Box<Expression>),
    GreaterEqual(Box<Expression>, Box<Expression>),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
}

impl Target {
    pub fn name(&self) -> &Rc<str> {
        match self {
            Target::Var(name) | Target::Index(name, _) => name,
        }
    }
}
