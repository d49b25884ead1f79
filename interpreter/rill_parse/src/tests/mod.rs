//! Parser test suite.


use rill_ir::{ExprArena, ExprId, ExprKind, Program, Stmt, StringInterner};

use crate::{parse_source, ParseOutcome};

/// Parse and assert the outcome is error-free.
fn parse_clean(source: &str) -> (Program, ExprArena, StringInterner) {
    let interner = StringInterner::new();
    let outcome = parse_source(source, &interner);
    assert!(
        outcome.errors.is_empty(),
        "unexpected parse errors for {source:?}: {:?}",
        outcome.errors
    );
    (outcome.program, outcome.arena, interner)
}

/// Parse expecting errors.
fn parse_broken(source: &str) -> (ParseOutcome, StringInterner) {
    let interner = StringInterner::new();
    let outcome = parse_source(source, &interner);
    assert!(
        !outcome.errors.is_empty(),
        "expected parse errors for {source:?}"
    );
    (outcome, interner)
}

/// Render a program back to fully parenthesized text.
///
/// Test-only: makes precedence assertions readable.
fn program_string(program: &Program, arena: &ExprArena, interner: &StringInterner) -> String {
    program
        .statements
        .iter()
        .map(|stmt| stmt_string(stmt, arena, interner))
        .collect()
}

fn stmt_string(stmt: &Stmt, arena: &ExprArena, interner: &StringInterner) -> String {
    match stmt {
        Stmt::Let { name, value, .. } => format!(
            "let {} = {};",
            interner.lookup(*name),
            expr_string(*value, arena, interner)
        ),
        Stmt::Return { value, .. } => {
            format!("return {};", expr_string(*value, arena, interner))
        }
        Stmt::Expr { value, .. } => expr_string(*value, arena, interner),
    }
}

fn expr_string(id: ExprId, arena: &ExprArena, interner: &StringInterner) -> String {
    match &arena.expr(id).kind {
        ExprKind::Int(n) => n.to_string(),
        ExprKind::Float(f) => f.to_string(),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::Str(s) => format!("\"{}\"", interner.lookup(*s)),
        ExprKind::Ident(name) => interner.lookup(*name).to_string(),
        ExprKind::Array(elements) => {
            let inner: Vec<String> = elements
                .iter()
                .map(|e| expr_string(*e, arena, interner))
                .collect();
            format!("[{}]", inner.join(", "))
        }
        ExprKind::Hash(pairs) => {
            let inner: Vec<String> = pairs
                .iter()
                .map(|(k, v)| {
                    format!(
                        "{}: {}",
                        expr_string(*k, arena, interner),
                        expr_string(*v, arena, interner)
                    )
                })
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
        ExprKind::Prefix { op, operand } => {
            format!("({}{})", op, expr_string(*operand, arena, interner))
        }
        ExprKind::Infix { op, left, right } => format!(
            "({} {} {})",
            expr_string(*left, arena, interner),
            op,
            expr_string(*right, arena, interner)
        ),
        ExprKind::If {
            condition,
            consequence,
            alternative,
        } => {
            let mut out = format!(
                "if {} {}",
                expr_string(*condition, arena, interner),
                block_string(*consequence, arena, interner)
            );
            if let Some(alt) = alternative {
                out.push_str(" else ");
                out.push_str(&block_string(*alt, arena, interner));
            }
            out
        }
        ExprKind::Function { params, body } => {
            let names: Vec<&str> = params.iter().map(|p| interner.lookup(*p)).collect();
            format!(
                "fn({}) {}",
                names.join(", "),
                block_string(*body, arena, interner)
            )
        }
        ExprKind::Call { callee, args } => {
            let inner: Vec<String> = args
                .iter()
                .map(|a| expr_string(*a, arena, interner))
                .collect();
            format!(
                "{}({})",
                expr_string(*callee, arena, interner),
                inner.join(", ")
            )
        }
        ExprKind::Index { target, index } => format!(
            "({}[{}])",
            expr_string(*target, arena, interner),
            expr_string(*index, arena, interner)
        ),
        ExprKind::Error => "<error>".to_string(),
    }
}

fn block_string(
    id: rill_ir::BlockId,
    arena: &ExprArena,
    interner: &StringInterner,
) -> String {
    let stmts: Vec<String> = arena
        .block(id)
        .statements
        .iter()
        .map(|s| stmt_string(s, arena, interner))
        .collect();
    format!("{{ {} }}", stmts.join(" "))
}
