//! Native query dialect understood by the reference executor.
//!
//! ```text
//! SELECT ( * | COUNT(*) ) FROM <table> [<alias>]
//!   [WHERE <cond> { AND <cond> }]
//!   [ORDER BY <column> [ASC|DESC] { , <column> [ASC|DESC] }]
//!
//! <cond>    := <column> ( = | <> | != | < | <= | > | >= | LIKE ) <operand>
//!            | <column> IS [NOT] NULL
//! <operand> := #{name} | 'string' | number
//! ```
//!
//! Keywords are case-insensitive. Columns may be qualified with the table
//! name or alias. Parsing only checks syntax; table and column names are
//! checked when the statement is evaluated against a table.

mod eval;
mod lexer;

pub(crate) use eval::{evaluate, CompiledQuery};

use serde_json::Value;

use crate::types::Direction;
use crate::{Error, Result};
use lexer::{tokenize, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Projection {
    All,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Operand {
    Param(String),
    Literal(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Predicate {
    Compare(CompareOp, Operand),
    Like(Operand),
    IsNull,
    IsNotNull,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Condition {
    pub(crate) column: String,
    pub(crate) predicate: Predicate,
}

/// A parsed `SELECT` statement.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Statement {
    pub(crate) projection: Projection,
    pub(crate) table: String,
    pub(crate) alias: Option<String>,
    pub(crate) conditions: Vec<Condition>,
    pub(crate) order_by: Vec<(String, Direction)>,
}

const RESERVED: [&str; 4] = ["WHERE", "ORDER", "AND", "BY"];

pub(crate) fn parse(sql: &str) -> Result<Statement> {
    let tokens = tokenize(sql)?;
    Parser { tokens, pos: 0 }.statement()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn eat_keyword(&mut self, kw: &str) -> bool {
        if self.peek().map_or(false, |t| t.is_keyword(kw)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, kw: &str) -> Result<()> {
        if self.eat_keyword(kw) {
            Ok(())
        } else {
            Err(self.unexpected(kw))
        }
    }

    fn expect(&mut self, token: Token, what: &str) -> Result<()> {
        if self.peek() == Some(&token) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn unexpected(&self, wanted: &str) -> Error {
        match self.peek() {
            Some(t) => Error::malformed(format!("expected {} but found {:?}", wanted, t)),
            None => Error::malformed(format!("expected {} but reached end of query", wanted)),
        }
    }

    fn identifier(&mut self, what: &str) -> Result<String> {
        match self.peek() {
            Some(Token::Ident(s)) if !RESERVED.iter().any(|r| s.eq_ignore_ascii_case(r)) => {
                let s = s.clone();
                self.pos += 1;
                Ok(s)
            }
            _ => Err(self.unexpected(what)),
        }
    }

    fn statement(mut self) -> Result<Statement> {
        self.expect_keyword("SELECT")?;
        let projection = if self.eat_keyword("COUNT") {
            self.expect(Token::LParen, "'('")?;
            self.expect(Token::Star, "'*'")?;
            self.expect(Token::RParen, "')'")?;
            Projection::Count
        } else {
            self.expect(Token::Star, "'*' or COUNT(*)")?;
            Projection::All
        };

        self.expect_keyword("FROM")?;
        let table = self.identifier("table name")?;
        let alias = match self.peek() {
            Some(Token::Ident(s)) if !RESERVED.iter().any(|r| s.eq_ignore_ascii_case(r)) => {
                let s = s.clone();
                self.pos += 1;
                Some(s)
            }
            _ => None,
        };

        let mut conditions = Vec::new();
        if self.eat_keyword("WHERE") {
            conditions.push(self.condition()?);
            while self.eat_keyword("AND") {
                conditions.push(self.condition()?);
            }
        }

        let mut order_by = Vec::new();
        if self.eat_keyword("ORDER") {
            self.expect_keyword("BY")?;
            loop {
                let column = self.column()?;
                let direction = if self.eat_keyword("DESC") {
                    Direction::Desc
                } else {
                    self.eat_keyword("ASC");
                    Direction::Asc
                };
                order_by.push((column, direction));
                if self.peek() == Some(&Token::Comma) {
                    self.pos += 1;
                } else {
                    break;
                }
            }
        }

        if self.peek().is_some() {
            return Err(self.unexpected("end of query"));
        }

        Ok(Statement {
            projection,
            table,
            alias,
            conditions,
            order_by,
        })
    }

    /// Column reference; a qualifier is kept as `QUALIFIER.COLUMN`.
    fn column(&mut self) -> Result<String> {
        let first = self.identifier("column name")?;
        if self.peek() == Some(&Token::Dot) {
            self.pos += 1;
            let column = self.identifier("column name")?;
            Ok(format!("{}.{}", first, column))
        } else {
            Ok(first)
        }
    }

    fn condition(&mut self) -> Result<Condition> {
        let column = self.column()?;
        let predicate = if self.eat_keyword("IS") {
            let negated = self.eat_keyword("NOT");
            self.expect_keyword("NULL")?;
            if negated {
                Predicate::IsNotNull
            } else {
                Predicate::IsNull
            }
        } else if self.eat_keyword("LIKE") {
            Predicate::Like(self.operand()?)
        } else {
            let op = match self.next() {
                Some(Token::Op("=")) => CompareOp::Eq,
                Some(Token::Op("<>")) => CompareOp::Ne,
                Some(Token::Op("<")) => CompareOp::Lt,
                Some(Token::Op("<=")) => CompareOp::Le,
                Some(Token::Op(">")) => CompareOp::Gt,
                Some(Token::Op(">=")) => CompareOp::Ge,
                _ => {
                    self.pos -= 1;
                    return Err(self.unexpected("comparison operator"));
                }
            };
            Predicate::Compare(op, self.operand()?)
        };
        Ok(Condition { column, predicate })
    }

    fn operand(&mut self) -> Result<Operand> {
        match self.next() {
            Some(Token::Param(name)) => Ok(Operand::Param(name)),
            Some(Token::Literal(v)) => Ok(Operand::Literal(v)),
            _ => {
                self.pos -= 1;
                Err(self.unexpected("parameter or literal"))
            }
        }
    }
}
