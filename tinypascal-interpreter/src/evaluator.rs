use std::rc::Rc;

use thiserror::Error;
use tinypascal_core::ast;

use crate::environment::Environment;
use crate::value::Value;

#[derive(Debug, PartialEq, Clone, Error)]
pub enum EvaluationError {
    #[error("Undefined variable: {0}")]
    UndefinedVariable(Rc<str>),
}

pub fn eval_program(
    program: &ast::Program,
    environment: &mut Environment,
) -> Result<(), EvaluationError> {
    eval_block_statement(&program.block, environment)
}

fn eval_block_statement(
    block: &ast::BlockStatement,
    environment: &mut Environment,
) -> Result<(), EvaluationError> {
    for statement in &block.statements {
        eval_statement(statement, environment)?;
    }
    Ok(())
}

fn eval_statement(
    statement: &ast::Statement,
    environment: &mut Environment,
) -> Result<(), EvaluationError> {
    match statement {
        ast::Statement::Compound(block) => eval_block_statement(block, environment),
        ast::Statement::Assign(statement) => eval_assign_statement(statement, environment),
        ast::Statement::Empty => Ok(()),
    }
}

fn eval_assign_statement(
    statement: &ast::AssignStatement,
    environment: &mut Environment,
) -> Result<(), EvaluationError> {
    let value = eval_expression(&statement.value, environment)?;
    environment.set(statement.identifier.name.clone(), value);
    Ok(())
}

fn eval_expression(
    expression: &ast::Expression,
    environment: &Environment,
) -> Result<Value, EvaluationError> {
    match expression {
        ast::Expression::IntegerLiteral(value) => Ok(Value::Integer(*value)),
        ast::Expression::Identifier(identifier) => environment
            .get(&identifier.name)
            .ok_or(EvaluationError::UndefinedVariable(identifier.name.clone())),
        ast::Expression::PrefixOperation(kind, expression) => {
            let right = eval_expression(expression, environment)?;
            Ok(eval_prefix_operation(kind, right))
        }
        ast::Expression::InfixOperation(kind, left, right) => {
            let left = eval_expression(left, environment)?;
            let right = eval_expression(right, environment)?;
            Ok(eval_infix_operation(kind, left, right))
        }
    }
}

fn eval_prefix_operation(kind: &ast::PrefixOperationKind, right: Value) -> Value {
    match (kind, right) {
        (ast::PrefixOperationKind::Plus, value) => value,
        (ast::PrefixOperationKind::Minus, Value::Integer(value)) => match value.checked_neg() {
            Some(value) => Value::Integer(value),
            None => Value::Real(-(value as f64)),
        },
        (ast::PrefixOperationKind::Minus, Value::Real(value)) => Value::Real(-value),
    }
}

fn eval_infix_operation(kind: &ast::InfixOperationKind, left: Value, right: Value) -> Value {
    use ast::InfixOperationKind;
    match (kind, left, right) {
        // Division always produces a real, even between two integers
        (InfixOperationKind::Divide, left, right) => Value::Real(left.as_real() / right.as_real()),
        // Integer arithmetic that overflows i64 promotes to a real
        (InfixOperationKind::Plus, Value::Integer(left), Value::Integer(right)) => {
            match left.checked_add(right) {
                Some(value) => Value::Integer(value),
                None => Value::Real(left as f64 + right as f64),
            }
        }
        (InfixOperationKind::Minus, Value::Integer(left), Value::Integer(right)) => {
            match left.checked_sub(right) {
                Some(value) => Value::Integer(value),
                None => Value::Real(left as f64 - right as f64),
            }
        }
        (InfixOperationKind::Multiply, Value::Integer(left), Value::Integer(right)) => {
            match left.checked_mul(right) {
                Some(value) => Value::Integer(value),
                None => Value::Real(left as f64 * right as f64),
            }
        }
        (InfixOperationKind::Plus, left, right) => Value::Real(left.as_real() + right.as_real()),
        (InfixOperationKind::Minus, left, right) => Value::Real(left.as_real() - right.as_real()),
        (InfixOperationKind::Multiply, left, right) => {
            Value::Real(left.as_real() * right.as_real())
        }
    }
}

#[cfg(test)]
mod tests {
    use tinypascal_core::lexer::Tokenizer;
    use tinypascal_core::parser::Parser;

    use crate::environment::Environment;
    use crate::evaluator::EvaluationError;
    use crate::value::Value;

    fn run(input: &str, environment: &mut Environment) -> Result<(), EvaluationError> {
        let program = Parser::new(Tokenizer::new(input))
            .and_then(Parser::parse)
            .unwrap();

        super::eval_program(&program, environment)
    }

    fn test_stores(inputs: Vec<(&str, Vec<(&str, Value)>)>) {
        for (input, expected) in inputs {
            let mut environment = Environment::new();
            run(input, &mut environment).unwrap();

            let mut store = environment.iter().collect::<Vec<_>>();
            store.sort_by_key(|&(name, _)| name);

            assert_eq!(store, expected, "unexpected store for input {:?}", input);
        }
    }

    #[test]
    fn test_arithmetic() {
        let inputs = vec![
            ("BEGIN x := 3 END.", vec![("x", Value::Integer(3))]),
            ("BEGIN x := 7 + 3 * 2 END.", vec![("x", Value::Integer(13))]),
            (
                "BEGIN x := (2 + 3) * 4 END.",
                vec![("x", Value::Integer(20))],
            ),
            ("BEGIN x := 99 / 9 END.", vec![("x", Value::Real(11.0))]),
            ("BEGIN x := 10 / 4 END.", vec![("x", Value::Real(2.5))]),
            (
                "BEGIN x := 2 + 2 - 1 * 6 / 2 END.",
                vec![("x", Value::Real(1.0))],
            ),
            ("BEGIN x := - 3 * 5 END.", vec![("x", Value::Integer(-15))]),
            (
                "BEGIN x := 5 - - - + - 3 END.",
                vec![("x", Value::Integer(8))],
            ),
        ];

        test_stores(inputs);
    }

    #[test]
    fn test_integer_overflow_promotes() {
        let inputs = vec![
            (
                "BEGIN x := 5000000000 * 5000000000 END.",
                vec![("x", Value::Real(2.5e19))],
            ),
            (
                "BEGIN x := 9223372036854775807 + 1 END.",
                vec![("x", Value::Real(9223372036854775808.0))],
            ),
            (
                "BEGIN x := 0 - 9223372036854775807 - 2 END.",
                vec![("x", Value::Real(-9223372036854775808.0))],
            ),
            (
                "BEGIN x := -(0 - 9223372036854775807 - 1) END.",
                vec![("x", Value::Real(9223372036854775808.0))],
            ),
        ];

        test_stores(inputs);
    }

    #[test]
    fn test_mixed_arithmetic() {
        // Reals only ever come out of a division, so mixed operands have to
        // go through one first
        let inputs = vec![
            (
                "BEGIN a := 10 / 4; b := a * 2 END.",
                vec![("a", Value::Real(2.5)), ("b", Value::Real(5.0))],
            ),
            (
                "BEGIN a := 1 / 1; b := a + 1 END.",
                vec![("a", Value::Real(1.0)), ("b", Value::Real(2.0))],
            ),
            (
                "BEGIN a := 1 / 2; b := -a; c := 3 - a END.",
                vec![
                    ("a", Value::Real(0.5)),
                    ("b", Value::Real(-0.5)),
                    ("c", Value::Real(2.5)),
                ],
            ),
        ];

        test_stores(inputs);
    }

    #[test]
    fn test_variable_references() {
        let inputs = vec![
            (
                "BEGIN a := 2; b := a * a END.",
                vec![("a", Value::Integer(2)), ("b", Value::Integer(4))],
            ),
            (
                "BEGIN a := 1; a := a + 1; a := a + 1 END.",
                vec![("a", Value::Integer(3))],
            ),
        ];

        test_stores(inputs);
    }

    #[test]
    fn test_compound_program() {
        let input = "\
BEGIN
    BEGIN
        number := 2;
        a := number;
        b := 10 * a + 10 * number / 4;
        c := a - - b
    END;
    x := 11;
END.";
        let expected = vec![
            ("a", Value::Integer(2)),
            ("b", Value::Real(25.0)),
            ("c", Value::Real(27.0)),
            ("number", Value::Integer(2)),
            ("x", Value::Integer(11)),
        ];

        test_stores(vec![(input, expected)]);
    }

    #[test]
    fn test_empty_statements_do_nothing() {
        let inputs = vec![
            ("BEGIN END.", vec![]),
            ("BEGIN ; ; END.", vec![]),
            ("BEGIN x := 1; END.", vec![("x", Value::Integer(1))]),
        ];

        test_stores(inputs);
    }

    #[test]
    fn test_undefined_variable() {
        let mut environment = Environment::new();
        let result = run("BEGIN x := y END.", &mut environment);

        assert_eq!(result, Err(EvaluationError::UndefinedVariable("y".into())));
        assert!(environment.is_empty());
    }

    #[test]
    fn test_store_kept_up_to_failure() {
        let mut environment = Environment::new();
        let result = run("BEGIN a := 1; b := nope; c := 3 END.", &mut environment);

        assert_eq!(
            result,
            Err(EvaluationError::UndefinedVariable("nope".into()))
        );
        assert_eq!(environment.get("a"), Some(Value::Integer(1)));
        assert_eq!(environment.get("b"), None);
        assert_eq!(environment.get("c"), None);
    }

    #[test]
    fn test_environment_reuse() {
        let mut environment = Environment::new();
        run("BEGIN x := 2 END.", &mut environment).unwrap();
        run("BEGIN y := x * 3 END.", &mut environment).unwrap();

        assert_eq!(environment.get("x"), Some(Value::Integer(2)));
        assert_eq!(environment.get("y"), Some(Value::Integer(6)));
    }

    #[test]
    fn test_environments_are_independent() {
        let mut first = Environment::new();
        run("BEGIN x := 1 END.", &mut first).unwrap();

        let mut second = Environment::new();
        let result = run("BEGIN y := x END.", &mut second);

        assert_eq!(result, Err(EvaluationError::UndefinedVariable("x".into())));
        assert_eq!(first.get("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn test_division_by_zero() {
        let inputs = vec![
            ("BEGIN x := 1 / 0 END.", vec![("x", Value::Real(f64::INFINITY))]),
            (
                "BEGIN x := -1 / 0 END.",
                vec![("x", Value::Real(f64::NEG_INFINITY))],
            ),
        ];

        test_stores(inputs);

        let mut environment = Environment::new();
        run("BEGIN x := 0 / 0 END.", &mut environment).unwrap();
        match environment.get("x") {
            Some(Value::Real(value)) => assert!(value.is_nan()),
            other => panic!("expected a real, got {:?}", other),
        }
    }
}
