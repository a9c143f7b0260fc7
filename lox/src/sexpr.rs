// S-expression formatter for the Lox AST
// Renders expressions and statements in a readable Lisp-like syntax, used by
// the `parse` subcommand and by runtime error reports that must name the
// offending expression.

use lox_parser::{BinaryOp, Expression, LiteralValue, LogicalOp, Statement, UnaryOp};

pub fn format_program_as_sexpr(statements: &[Statement]) -> String {
    let items: Vec<String> = statements.iter().map(format_statement_as_sexpr).collect();
    items.join("\n")
}

pub fn format_statement_as_sexpr(statement: &Statement) -> String {
    match statement {
        Statement::Expression { expression } => format_expression_as_sexpr(expression),
        Statement::Print { expression } => {
            format!("(print {})", format_expression_as_sexpr(expression))
        }
        Statement::VariableDeclaration { name, initializer } => match initializer {
            Some(expression) => format!(
                "(var {} {})",
                name.lexeme,
                format_expression_as_sexpr(expression)
            ),
            None => format!("(var {})", name.lexeme),
        },
        Statement::Block { statements } => {
            let body: Vec<String> = statements.iter().map(format_statement_as_sexpr).collect();
            if body.is_empty() {
                "(block)".to_string()
            } else {
                format!("(block {})", body.join(" "))
            }
        }
        Statement::If {
            condition,
            then_branch,
            else_branch,
        } => {
            let condition = format_expression_as_sexpr(condition);
            let then_branch = format_statement_as_sexpr(then_branch);
            match else_branch {
                Some(else_branch) => format!(
                    "(if {} {} {})",
                    condition,
                    then_branch,
                    format_statement_as_sexpr(else_branch)
                ),
                None => format!("(if {} {})", condition, then_branch),
            }
        }
        Statement::While { condition, body } => format!(
            "(while {} {})",
            format_expression_as_sexpr(condition),
            format_statement_as_sexpr(body)
        ),
    }
}

pub fn format_expression_as_sexpr(expression: &Expression) -> String {
    match expression {
        Expression::Literal { value } => format_literal_as_sexpr(value),
        Expression::Grouping { expression } => {
            format!("(group {})", format_expression_as_sexpr(expression))
        }
        Expression::Unary {
            operator, operand, ..
        } => format!(
            "({} {})",
            unary_op_symbol(*operator),
            format_expression_as_sexpr(operand)
        ),
        Expression::Binary {
            operator,
            left,
            right,
            ..
        } => format!(
            "({} {} {})",
            binary_op_symbol(*operator),
            format_expression_as_sexpr(left),
            format_expression_as_sexpr(right)
        ),
        Expression::Logical {
            operator,
            left,
            right,
            ..
        } => format!(
            "({} {} {})",
            logical_op_symbol(*operator),
            format_expression_as_sexpr(left),
            format_expression_as_sexpr(right)
        ),
        Expression::Variable { name } => name.lexeme.clone(),
        Expression::Assignment { name, value } => format!(
            "(= {} {})",
            name.lexeme,
            format_expression_as_sexpr(value)
        ),
    }
}

fn format_literal_as_sexpr(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Number(n) => n.to_string(),
        LiteralValue::String(s) => format!("\"{}\"", s.replace('"', "\\\"")),
        LiteralValue::Boolean(b) => b.to_string(),
        LiteralValue::Nil => "nil".to_string(),
    }
}

fn unary_op_symbol(operator: UnaryOp) -> &'static str {
    match operator {
        UnaryOp::Negate => "-",
        UnaryOp::Not => "!",
    }
}

fn binary_op_symbol(operator: BinaryOp) -> &'static str {
    match operator {
        BinaryOp::Add => "+",
        BinaryOp::Subtract => "-",
        BinaryOp::Multiply => "*",
        BinaryOp::Divide => "/",
        BinaryOp::Equal => "==",
        BinaryOp::NotEqual => "!=",
        BinaryOp::Greater => ">",
        BinaryOp::GreaterEqual => ">=",
        BinaryOp::Less => "<",
        BinaryOp::LessEqual => "<=",
    }
}

fn logical_op_symbol(operator: LogicalOp) -> &'static str {
    match operator {
        LogicalOp::And => "and",
        LogicalOp::Or => "or",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_parser::parse_program;

    fn sexpr_of(source: &str) -> String {
        let statements = parse_program(source).expect("source should parse");
        format_program_as_sexpr(&statements)
    }

    #[test]
    fn test_unary_and_grouping() {
        assert_eq!(sexpr_of("-1;"), "(- 1)");
        assert_eq!(sexpr_of("(-1);"), "(group (- 1))");
    }

    #[test]
    fn test_binary_precedence_shape() {
        assert_eq!(sexpr_of("1 + 2 * 3;"), "(+ 1 (* 2 3))");
    }

    #[test]
    fn test_statements() {
        assert_eq!(sexpr_of("print \"hi\";"), "(print \"hi\")");
        assert_eq!(sexpr_of("var x = 1;"), "(var x 1)");
        assert_eq!(sexpr_of("var x;"), "(var x)");
        assert_eq!(sexpr_of("{ x = 2; }"), "(block (= x 2))");
    }

    #[test]
    fn test_control_flow() {
        assert_eq!(
            sexpr_of("if (a and b) print 1; else print 2;"),
            "(if (and a b) (print 1) (print 2))"
        );
        assert_eq!(sexpr_of("while (true) print 1;"), "(while true (print 1))");
    }
}
