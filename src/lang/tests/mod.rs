use super::ast::*;
use super::*;


fn expr(s: &str) -> Expression {
    parse_expression(s).unwrap()
}

fn num(n: f64) -> Box<Expression> {
    Box::new(Expression::Number(n))
}

fn var(s: &str) -> Box<Expression> {
    Box::new(Expression::Var(s.into()))
}
