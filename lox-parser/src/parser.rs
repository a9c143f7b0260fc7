// Lox recursive-descent parser
//
// program        → declaration* EOF ;
// declaration    → varDecl | statement ;
// varDecl        → "var" IDENTIFIER ( "=" expression )? ";" ;
// statement      → exprStmt | printStmt | ifStmt | whileStmt | block ;
// exprStmt       → expression ";" ;
// printStmt      → "print" expression ";" ;
// ifStmt         → "if" "(" expression ")" statement ( "else" statement )? ;
// whileStmt      → "while" "(" expression ")" statement ;
// block          → "{" declaration* "}" ;
//
// expression     → assignment ;
// assignment     → IDENTIFIER "=" assignment | logic_or ;
// logic_or       → logic_and ( "or" logic_and )* ;
// logic_and      → equality ( "and" equality )* ;
// equality       → comparison ( ( "!=" | "==" ) comparison )* ;
// comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
// term           → factor ( ( "-" | "+" ) factor )* ;
// factor         → unary ( ( "/" | "*" ) unary )* ;
// unary          → ( "!" | "-" ) unary | primary ;
// primary        → NUMBER | STRING | "true" | "false" | "nil"
//                | IDENTIFIER | "(" expression ")" ;

use crate::ast::{BinaryOp, Expression, LiteralValue, LogicalOp, Statement, UnaryOp};
use crate::error::ParseError;
use crate::token::{Token, TokenKind, TokenLiteral};

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse the whole token sequence into a program.
    ///
    /// The first token that cannot continue the current production aborts the
    /// parse; no partial statement list is returned.
    pub fn parse(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.declaration()?);
        }

        Ok(statements)
    }

    fn declaration(&mut self) -> Result<Statement, ParseError> {
        if self.match_kind(TokenKind::Var) {
            self.var_declaration()
        } else {
            self.statement()
        }
    }

    fn var_declaration(&mut self) -> Result<Statement, ParseError> {
        let name = self
            .consume(TokenKind::Identifier, "expected variable name")?
            .clone();

        let initializer = if self.match_kind(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            TokenKind::Semicolon,
            "expected ';' after variable declaration",
        )?;
        Ok(Statement::VariableDeclaration { name, initializer })
    }

    fn statement(&mut self) -> Result<Statement, ParseError> {
        if self.match_kind(TokenKind::Print) {
            self.print_statement()
        } else if self.match_kind(TokenKind::If) {
            self.if_statement()
        } else if self.match_kind(TokenKind::While) {
            self.while_statement()
        } else if self.match_kind(TokenKind::LeftBrace) {
            let statements = self.block()?;
            Ok(Statement::Block { statements })
        } else {
            self.expression_statement()
        }
    }

    fn print_statement(&mut self) -> Result<Statement, ParseError> {
        let expression = self.expression()?;
        self.consume(TokenKind::Semicolon, "expected ';' after value")?;
        Ok(Statement::Print { expression })
    }

    fn if_statement(&mut self) -> Result<Statement, ParseError> {
        self.consume(TokenKind::LeftParen, "expected '(' after 'if'")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "expected ')' after if condition")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_kind(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Statement::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> Result<Statement, ParseError> {
        self.consume(TokenKind::LeftParen, "expected '(' after 'while'")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "expected ')' after while condition")?;
        let body = Box::new(self.statement()?);

        Ok(Statement::While { condition, body })
    }

    fn block(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            statements.push(self.declaration()?);
        }

        self.consume(TokenKind::RightBrace, "expected '}' after block")?;
        Ok(statements)
    }

    fn expression_statement(&mut self) -> Result<Statement, ParseError> {
        let expression = self.expression()?;
        self.consume(TokenKind::Semicolon, "expected ';' after expression")?;
        Ok(Statement::Expression { expression })
    }

    fn expression(&mut self) -> Result<Expression, ParseError> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<Expression, ParseError> {
        let expression = self.logic_or()?;

        if self.match_kind(TokenKind::Equal) {
            let equals = self.previous().clone();
            // right-associative: recurse instead of looping
            let value = Box::new(self.assignment()?);

            return match expression {
                Expression::Variable { name } => Ok(Expression::Assignment { name, value }),
                _ => Err(ParseError::new(equals, "invalid assignment target")),
            };
        }

        Ok(expression)
    }

    fn logic_or(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.logic_and()?;

        while self.match_kind(TokenKind::Or) {
            let token = self.previous().clone();
            let right = self.logic_and()?;
            expression = Expression::Logical {
                operator: LogicalOp::Or,
                token,
                left: Box::new(expression),
                right: Box::new(right),
            };
        }

        Ok(expression)
    }

    fn logic_and(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.equality()?;

        while self.match_kind(TokenKind::And) {
            let token = self.previous().clone();
            let right = self.equality()?;
            expression = Expression::Logical {
                operator: LogicalOp::And,
                token,
                left: Box::new(expression),
                right: Box::new(right),
            };
        }

        Ok(expression)
    }

    fn equality(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.comparison()?;

        loop {
            let operator = if self.match_kind(TokenKind::BangEqual) {
                BinaryOp::NotEqual
            } else if self.match_kind(TokenKind::EqualEqual) {
                BinaryOp::Equal
            } else {
                break;
            };
            let token = self.previous().clone();
            let right = self.comparison()?;
            expression = Expression::Binary {
                operator,
                token,
                left: Box::new(expression),
                right: Box::new(right),
            };
        }

        Ok(expression)
    }

    fn comparison(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.term()?;

        loop {
            let operator = if self.match_kind(TokenKind::Greater) {
                BinaryOp::Greater
            } else if self.match_kind(TokenKind::GreaterEqual) {
                BinaryOp::GreaterEqual
            } else if self.match_kind(TokenKind::Less) {
                BinaryOp::Less
            } else if self.match_kind(TokenKind::LessEqual) {
                BinaryOp::LessEqual
            } else {
                break;
            };
            let token = self.previous().clone();
            let right = self.term()?;
            expression = Expression::Binary {
                operator,
                token,
                left: Box::new(expression),
                right: Box::new(right),
            };
        }

        Ok(expression)
    }

    fn term(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.factor()?;

        loop {
            let operator = if self.match_kind(TokenKind::Minus) {
                BinaryOp::Subtract
            } else if self.match_kind(TokenKind::Plus) {
                BinaryOp::Add
            } else {
                break;
            };
            let token = self.previous().clone();
            let right = self.factor()?;
            expression = Expression::Binary {
                operator,
                token,
                left: Box::new(expression),
                right: Box::new(right),
            };
        }

        Ok(expression)
    }

    fn factor(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.unary()?;

        loop {
            let operator = if self.match_kind(TokenKind::Slash) {
                BinaryOp::Divide
            } else if self.match_kind(TokenKind::Star) {
                BinaryOp::Multiply
            } else {
                break;
            };
            let token = self.previous().clone();
            let right = self.unary()?;
            expression = Expression::Binary {
                operator,
                token,
                left: Box::new(expression),
                right: Box::new(right),
            };
        }

        Ok(expression)
    }

    fn unary(&mut self) -> Result<Expression, ParseError> {
        let operator = if self.match_kind(TokenKind::Bang) {
            UnaryOp::Not
        } else if self.match_kind(TokenKind::Minus) {
            UnaryOp::Negate
        } else {
            return self.primary();
        };

        let token = self.previous().clone();
        let operand = Box::new(self.unary()?);
        Ok(Expression::Unary {
            operator,
            token,
            operand,
        })
    }

    fn primary(&mut self) -> Result<Expression, ParseError> {
        if self.match_kind(TokenKind::False) {
            return Ok(Expression::Literal {
                value: LiteralValue::Boolean(false),
            });
        }
        if self.match_kind(TokenKind::True) {
            return Ok(Expression::Literal {
                value: LiteralValue::Boolean(true),
            });
        }
        if self.match_kind(TokenKind::Nil) {
            return Ok(Expression::Literal {
                value: LiteralValue::Nil,
            });
        }

        if self.match_kind(TokenKind::Number) {
            let token = self.previous().clone();
            return match token.literal {
                Some(TokenLiteral::Number(value)) => Ok(Expression::Literal {
                    value: LiteralValue::Number(value),
                }),
                _ => Err(ParseError::new(token, "number token without numeric value")),
            };
        }

        if self.match_kind(TokenKind::String) {
            let token = self.previous().clone();
            return match token.literal {
                Some(TokenLiteral::String(value)) => Ok(Expression::Literal {
                    value: LiteralValue::String(value),
                }),
                _ => Err(ParseError::new(token, "string token without string value")),
            };
        }

        if self.match_kind(TokenKind::Identifier) {
            return Ok(Expression::Variable {
                name: self.previous().clone(),
            });
        }

        if self.match_kind(TokenKind::LeftParen) {
            let expression = Box::new(self.expression()?);
            self.consume(TokenKind::RightParen, "expected ')' after expression")?;
            return Ok(Expression::Grouping { expression });
        }

        Err(ParseError::new(self.peek().clone(), "expected expression"))
    }

    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::new(self.peek().clone(), message))
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn peek(&self) -> &Token {
        // the sequence is Eof-terminated, so current never runs past the end
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }
}
