// Integration tests for the floatlet front end: source text through the
// lexer and parser down to the finished AST.

use floatlet::ast::{AbstractSyntaxTree, AstType, ExprAst};
use floatlet::lexer::Lexer;
use floatlet::parser::Parser;
use floatlet::token::{TokenKind, TokenQueue};

/// Run the full pipeline and return the tree plus the parse() count.
fn parse(source: &str) -> (AbstractSyntaxTree, usize) {
    let mut tokens = TokenQueue::new();
    Lexer::new(source).tokenize(&mut tokens);

    let mut ast = AbstractSyntaxTree::new();
    let count = Parser::new(&mut tokens, &mut ast).parse();
    assert!(tokens.is_empty(), "parser left tokens in the queue");

    (ast, count)
}

#[test]
fn test_float_literal_program() {
    let (ast, count) = parse("1.0");

    assert_eq!(count, 1);
    assert_eq!(ast.top_level().len(), 1);

    let function = &ast.top_level()[0];
    assert_eq!(function.prototype().name(), "");
    assert!(function.prototype().args().is_empty());

    assert_eq!(function.body().ast_type(), AstType::FloatLiteral);
    match function.body() {
        ExprAst::FloatLiteral(literal) => assert_eq!(literal.value(), 1.0),
        other => panic!("expected float literal body, got {:?}", other),
    }
}

#[test]
fn test_constant_declaration_program() {
    let (ast, count) = parse("let aaa = 1.0");

    assert_eq!(count, 1);
    assert_eq!(ast.top_level().len(), 1);

    let function = &ast.top_level()[0];
    assert_eq!(function.prototype().name(), "");
    assert!(function.prototype().args().is_empty());

    assert_eq!(function.body().ast_type(), AstType::ConstantDeclaration);
    match function.body() {
        ExprAst::ConstantDeclaration(declaration) => {
            assert_eq!(declaration.name(), "aaa");
            assert_eq!(declaration.rhs().value(), 1.0);
        }
        other => panic!("expected constant declaration body, got {:?}", other),
    }
}

#[test]
fn test_empty_program() {
    let (ast, count) = parse("");

    assert_eq!(count, 0);
    assert!(ast.top_level().is_empty());
}

#[test]
fn test_multiple_top_level_expressions() {
    // The parser accepts any number of top-level expressions; the
    // single-node restriction lives at the backend boundary.
    let (ast, count) = parse("let aaa = 1.0 let bbb = 2.0 3.5");

    assert_eq!(count, 3);
    assert_eq!(ast.top_level().len(), 3);
    assert_eq!(
        ast.top_level()[0].body().ast_type(),
        AstType::ConstantDeclaration
    );
    assert_eq!(
        ast.top_level()[1].body().ast_type(),
        AstType::ConstantDeclaration
    );
    assert_eq!(ast.top_level()[2].body().ast_type(), AstType::FloatLiteral);
}

#[test]
fn test_shadowing_is_not_rejected_by_the_front_end() {
    // Redefinition is a backend (symbol table) error; the parser exposes
    // names opaquely and builds both declarations.
    let (ast, count) = parse("let aaa = 1.0 let aaa = 2.0");

    assert_eq!(count, 2);
    assert_eq!(ast.top_level().len(), 2);
}

#[test]
fn test_lexer_errors_reach_the_parser_as_tokens() {
    let mut tokens = TokenQueue::new();
    let produced = Lexer::new("@ 1.0").tokenize(&mut tokens);
    assert_eq!(produced, 2);
    assert_eq!(tokens.at(0).kind(), TokenKind::LexerError);

    let mut ast = AbstractSyntaxTree::new();
    let count = Parser::new(&mut tokens, &mut ast).parse();

    // The error token cannot start a primary expression: the batch parse
    // stops there, counting the failed attempt, and consumes nothing.
    assert_eq!(count, 1);
    assert!(ast.top_level().is_empty());
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_malformed_declaration_aborts_the_batch() {
    let mut tokens = TokenQueue::new();
    Lexer::new("let aaa 1.0").tokenize(&mut tokens);

    let mut ast = AbstractSyntaxTree::new();
    let count = Parser::new(&mut tokens, &mut ast).parse();

    assert_eq!(count, 1);
    assert!(ast.top_level().is_empty());
    // 'let' and the identifier stay consumed; no rollback.
    assert_eq!(tokens.len(), 1);
}

#[test]
fn test_fractional_values_survive_the_pipeline() {
    let (ast, _) = parse("let pi = 3.14159");

    match ast.top_level()[0].body() {
        ExprAst::ConstantDeclaration(declaration) => {
            assert!((declaration.rhs().value() - 3.14159).abs() < 1e-5);
        }
        other => panic!("expected constant declaration body, got {:?}", other),
    }
}
