//! Tree walker and constant evaluator.
//!
//! Statements mutate the symbol table; expressions evaluate to a `Value`
//! that feeds both the table and enclosing operations. Execution is out
//! of scope, so control-flow constructs are walked structurally and only
//! their descendant declarations, assignments and print operands have a
//! semantic effect.

use crate::ast::{Node, NodeKind};

use super::error::SemanticError;
use super::symbol::SymbolTable;
use super::value::Value;
use super::AnalysisOptions;

pub struct SemanticAnalyzer {
    options: AnalysisOptions,
    table: SymbolTable,
    errors: Vec<SemanticError>,
}

impl SemanticAnalyzer {
    pub fn new(options: &AnalysisOptions) -> Self {
        Self {
            options: *options,
            table: SymbolTable::new(),
            errors: Vec::new(),
        }
    }

    /// Walks the whole tree and gives back the collected errors together
    /// with the final table.
    pub fn analyze(mut self, root: &Node) -> (Vec<SemanticError>, SymbolTable) {
        self.walk(root);
        (self.errors, self.table)
    }

    fn walk(&mut self, node: &Node) {
        match node.kind {
            NodeKind::VarDeclaration => self.declare_statement(node),
            NodeKind::Assignment => self.assign_statement(node),
            NodeKind::Print => {
                for operand in &node.children {
                    self.eval(operand);
                }
            }
            _ => {
                for child in &node.children {
                    self.walk(child);
                }
            }
        }
    }

    fn declare_statement(&mut self, node: &Node) {
        let name = match node.child(0).and_then(|target| target.value.clone()) {
            Some(name) => name,
            None => return,
        };
        let declared = match self.table.declare(&name) {
            Ok(()) => true,
            Err(duplicate) => {
                self.error(duplicate.to_string(), node.line);
                false
            }
        };
        // The initializer is still evaluated on a redeclaration so its own
        // defects surface, but the first declaration's value is retained.
        if let Some(init) = node.child(1) {
            let value = self.eval(init);
            if declared {
                self.table.set(&name, value);
            }
        }
    }

    fn assign_statement(&mut self, node: &Node) {
        let name = match node.child(0).and_then(|target| target.value.clone()) {
            Some(name) => name,
            None => return,
        };
        if !self.table.is_declared(&name) {
            self.error(
                format!("Variable '{}' used before declaration.", name),
                node.line,
            );
            return;
        }
        if let Some(rhs) = node.child(1) {
            let value = self.eval(rhs);
            self.table.set(&name, value);
        }
    }

    fn eval(&mut self, node: &Node) -> Value {
        match node.kind {
            NodeKind::Literal => literal_value(node.value.as_deref().unwrap_or("")),
            NodeKind::Identifier => self.eval_identifier(node),
            NodeKind::Operation => self.eval_operation(node),
            NodeKind::Comparison => self.eval_comparison(node),
            NodeKind::Logical => self.eval_logical(node),
            NodeKind::Smoosh => self.eval_smoosh(node),
            NodeKind::Typecast => self.eval_typecast(node),
            NodeKind::FuncCall => self.eval_func_call(node),
            _ => Value::Noob,
        }
    }

    fn eval_identifier(&mut self, node: &Node) -> Value {
        let name = node.value.as_deref().unwrap_or("");
        match self.table.get(name) {
            Some(value) => value.clone(),
            None => {
                self.error(
                    format!("Variable '{}' used before declaration.", name),
                    node.line,
                );
                Value::Noob
            }
        }
    }

    /// Arithmetic fold. Operands are evaluated first; a float among them
    /// upgrades the whole fold to floating point, strings are rejected and
    /// `Noob` propagates without a second error. An integer fold whose
    /// step leaves i64 range also widens to floating point instead of
    /// wrapping.
    fn eval_operation(&mut self, node: &Node) -> Value {
        let operator = node.value.clone().unwrap_or_default();
        let operands: Vec<Value> = node.children.iter().map(|child| self.eval(child)).collect();

        if operands.len() < 2 {
            self.error(
                format!("Not enough operands for '{}'.", operator),
                node.line,
            );
            return Value::Noob;
        }
        if operands.iter().any(|value| matches!(value, Value::String(_))) {
            self.error(
                format!("Invalid operand type 'YARN' for arithmetic '{}'.", operator),
                node.line,
            );
            return Value::Noob;
        }
        if operands.iter().any(|value| matches!(value, Value::Noob)) {
            return Value::Noob;
        }

        if operands.iter().any(|value| matches!(value, Value::Float(_))) {
            self.fold_float(&operator, &operands, node.line)
        } else {
            self.fold_integer(&operator, &operands, node.line)
        }
    }

    fn fold_float(&mut self, operator: &str, operands: &[Value], line: Option<usize>) -> Value {
        let mut acc = as_f64(&operands[0]);
        for operand in &operands[1..] {
            let rhs = as_f64(operand);
            acc = match operator {
                "SUM OF" => acc + rhs,
                "DIFF OF" => acc - rhs,
                "PRODUKT OF" => acc * rhs,
                "QUOSHUNT OF" => {
                    if rhs == 0.0 {
                        self.error(format!("Division by zero in '{}'.", operator), line);
                        return Value::Noob;
                    }
                    acc / rhs
                }
                "MOD OF" => {
                    if rhs == 0.0 {
                        self.error(format!("Division by zero in '{}'.", operator), line);
                        return Value::Noob;
                    }
                    acc % rhs
                }
                "BIGGR OF" => acc.max(rhs),
                "SMALLR OF" => acc.min(rhs),
                _ => {
                    self.error(format!("Unknown arithmetic operator '{}'.", operator), line);
                    return Value::Noob;
                }
            };
        }
        Value::Float(acc)
    }

    fn fold_integer(&mut self, operator: &str, operands: &[Value], line: Option<usize>) -> Value {
        let mut acc = as_i64(&operands[0]);
        for operand in &operands[1..] {
            let rhs = as_i64(operand);
            let step = match operator {
                "SUM OF" => acc.checked_add(rhs),
                "DIFF OF" => acc.checked_sub(rhs),
                "PRODUKT OF" => acc.checked_mul(rhs),
                "QUOSHUNT OF" => {
                    if rhs == 0 {
                        self.error(format!("Division by zero in '{}'.", operator), line);
                        return Value::Noob;
                    }
                    acc.checked_div(rhs)
                }
                "MOD OF" => {
                    if rhs == 0 {
                        self.error(format!("Division by zero in '{}'.", operator), line);
                        return Value::Noob;
                    }
                    acc.checked_rem(rhs)
                }
                "BIGGR OF" => Some(acc.max(rhs)),
                "SMALLR OF" => Some(acc.min(rhs)),
                _ => {
                    self.error(format!("Unknown arithmetic operator '{}'.", operator), line);
                    return Value::Noob;
                }
            };
            acc = match step {
                Some(value) => value,
                // Out of i64 range (including MIN / -1): redo the whole
                // fold in floating point.
                None => return self.fold_float(operator, operands, line),
            };
        }
        Value::Integer(acc)
    }

    /// BOTH SAEM / DIFFRINT. Equality is kind-strict: an integer is never
    /// SAEM as a float, even for equal magnitudes.
    fn eval_comparison(&mut self, node: &Node) -> Value {
        let operator = node.value.clone().unwrap_or_default();
        let operands: Vec<Value> = node.children.iter().map(|child| self.eval(child)).collect();
        if operands.len() < 2 || operands.iter().any(|value| matches!(value, Value::Noob)) {
            return Value::Noob;
        }
        let equal = operands[0] == operands[1];
        match operator.as_str() {
            "BOTH SAEM" => Value::Boolean(equal),
            "DIFFRINT" => Value::Boolean(!equal),
            _ => Value::Noob,
        }
    }

    fn eval_logical(&mut self, node: &Node) -> Value {
        let operator = node.value.clone().unwrap_or_default();
        let operands: Vec<Value> = node.children.iter().map(|child| self.eval(child)).collect();
        if operands.iter().any(|value| matches!(value, Value::Noob)) {
            return Value::Noob;
        }
        let truths: Vec<bool> = operands.iter().map(Value::is_truthy).collect();
        match operator.as_str() {
            "NOT" => match truths.first() {
                Some(first) => Value::Boolean(!first),
                None => Value::Noob,
            },
            "BOTH OF" if truths.len() >= 2 => Value::Boolean(truths[0] && truths[1]),
            "EITHER OF" if truths.len() >= 2 => Value::Boolean(truths[0] || truths[1]),
            "WON OF" if truths.len() >= 2 => Value::Boolean(truths[0] ^ truths[1]),
            "ALL OF" => Value::Boolean(truths.iter().all(|truth| *truth)),
            "ANY OF" => Value::Boolean(truths.iter().any(|truth| *truth)),
            _ => Value::Noob,
        }
    }

    /// Concatenation stringifies every operand and joins them. In strict
    /// mode a non-string operand is additionally flagged, once per SMOOSH;
    /// the joined result is produced either way.
    fn eval_smoosh(&mut self, node: &Node) -> Value {
        let operands: Vec<Value> = node.children.iter().map(|child| self.eval(child)).collect();
        if self.options.strict_smoosh
            && operands.iter().any(|value| !matches!(value, Value::String(_)))
        {
            self.error("SMOOSH can only concatenate strings.", node.line);
        }
        let joined: String = operands.iter().map(Value::to_string).collect();
        Value::String(joined)
    }

    fn eval_typecast(&mut self, node: &Node) -> Value {
        let target = node.value.clone().unwrap_or_default();
        let operand = match node.child(0) {
            Some(child) => self.eval(child),
            None => Value::Noob,
        };
        cast_value(&operand, &target)
    }

    /// Function bodies are not executed, so a call evaluates to `Noob`;
    /// its arguments are still evaluated to surface undeclared uses.
    fn eval_func_call(&mut self, node: &Node) -> Value {
        if let Some(args) = node.children.iter().find(|child| child.kind == NodeKind::ArgList) {
            for arg in &args.children {
                self.eval(arg);
            }
        }
        Value::Noob
    }

    fn error(&mut self, message: impl Into<String>, line: Option<usize>) {
        self.errors.push(SemanticError::new(message, line));
    }
}

/// Classifies literal text: quoted text is a YARN (quotes stripped),
/// WIN/FAIL are TROOFs, then integer and float parses are tried in that
/// order so `-5` stays a NUMBR.
fn literal_value(text: &str) -> Value {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        return Value::String(text[1..text.len() - 1].to_string());
    }
    match text {
        "WIN" => return Value::Boolean(true),
        "FAIL" => return Value::Boolean(false),
        _ => {}
    }
    if let Ok(n) = text.parse::<i64>() {
        return Value::Integer(n);
    }
    if let Ok(x) = text.parse::<f64>() {
        return Value::Float(x);
    }
    Value::String(text.to_string())
}

fn as_i64(value: &Value) -> i64 {
    match value {
        Value::Integer(n) => *n,
        Value::Float(x) => *x as i64,
        Value::Boolean(b) => *b as i64,
        _ => 0,
    }
}

fn as_f64(value: &Value) -> f64 {
    match value {
        Value::Integer(n) => *n as f64,
        Value::Float(x) => *x,
        Value::Boolean(b) => *b as i64 as f64,
        _ => 0.0,
    }
}

/// Best-effort static cast. A YARN that fails a numeric parse casts to
/// `Noob` without an error; casting to NOOB always yields `Noob`.
fn cast_value(value: &Value, target: &str) -> Value {
    match target {
        "NUMBR" => match value {
            Value::Integer(n) => Value::Integer(*n),
            Value::Float(x) => Value::Integer(*x as i64),
            Value::Boolean(b) => Value::Integer(*b as i64),
            Value::String(s) => match s.parse::<i64>() {
                Ok(n) => Value::Integer(n),
                Err(_) => Value::Noob,
            },
            Value::Noob => Value::Noob,
        },
        "NUMBAR" => match value {
            Value::Integer(n) => Value::Float(*n as f64),
            Value::Float(x) => Value::Float(*x),
            Value::Boolean(b) => Value::Float(*b as i64 as f64),
            Value::String(s) => match s.parse::<f64>() {
                Ok(x) => Value::Float(x),
                Err(_) => Value::Noob,
            },
            Value::Noob => Value::Noob,
        },
        "YARN" => Value::String(value.to_string()),
        "TROOF" => Value::Boolean(value.is_truthy()),
        _ => Value::Noob,
    }
}
