use pretty_assertions::assert_eq;
use shunt::{
    error::TranslationError,
    interpreter::{
        annotator::annotate, lexer::tokenize, registry::Registry, sorter::sort_to_rpn,
        translator::{translate, translate_token},
    },
    token::{Arity, Associativity, Lexeme, OperatorInfo, Paren, Token},
};

fn rpn(source: &str) -> Vec<Token> {
    sort_to_rpn(annotate(&tokenize(source).unwrap()).unwrap()).unwrap()
}

fn listing(source: &str, registry: &Registry) -> Result<Vec<String>, TranslationError> {
    Ok(translate(&rpn(source), registry)?.iter().map(ToString::to_string).collect())
}

#[test]
fn translates_each_token_kind() {
    assert_eq!(listing("-2 + max(1, 2.5)", &Registry::standard()).unwrap(),
               ["push 2", "unary -", "push 1", "push 2.5", "call max/2", "binary +"]);
}

#[test]
fn same_symbol_resolves_by_arity() {
    let registry = Registry::empty().with_unary("-", |x| Ok(x * 10.0))
                                    .with_binary("-", |a, b| Ok(a - b));
    assert_eq!(listing("2--3", &registry).unwrap(),
               ["push 2", "push 3", "unary -", "binary -"]);
}

#[test]
fn invalid_number_literal() {
    for text in ["1.2.3", "abc", "inf", "NaN", ""] {
        let token = Token::Number(Lexeme::new(text, 4));
        assert_eq!(translate_token(&token, &Registry::standard()).unwrap_err(),
                   TranslationError::InvalidNumberLiteral { text:     text.to_string(),
                                                            position: 4, },
                   "{text}");
    }
}

#[test]
fn overflowing_literal_is_out_of_range() {
    assert_eq!(listing("1 + 1e400", &Registry::standard()),
               Err(TranslationError::NumberOutOfRange { text:     "1e400".to_string(),
                                                        position: 4, }));
    let message = translate_token(&Token::Number(Lexeme::new("1e400", 0)), &Registry::standard())
        .unwrap_err()
        .to_string();
    assert_eq!(message, "Error at position 0: Number literal '1e400' is out of range.");
}

#[test]
fn underflowing_literal_is_zero() {
    assert_eq!(listing("1e-400", &Registry::standard()).unwrap(), ["push 0"]);
}

#[test]
fn missing_binary_operator() {
    let registry = Registry::empty().with_unary("-", |x| Ok(-x));
    assert_eq!(listing("1-2", &registry),
               Err(TranslationError::UnsupportedOperator { symbol:   "-".to_string(),
                                                           arity:    Arity::Binary,
                                                           position: 1, }));
}

#[test]
fn missing_unary_operator() {
    let registry = Registry::empty().with_binary("-", |a, b| Ok(a - b));
    assert_eq!(listing("-2", &registry),
               Err(TranslationError::UnsupportedOperator { symbol:   "-".to_string(),
                                                           arity:    Arity::Unary,
                                                           position: 0, }));
}

#[test]
fn missing_function() {
    assert_eq!(listing("frobnicate(1)", &Registry::standard()),
               Err(TranslationError::UnsupportedFunction { name:     "frobnicate".to_string(),
                                                           position: 0, }));
}

#[test]
fn structural_tokens_are_rejected() {
    let paren = Token::Parenthesis(Lexeme::new("(", 0), Paren::Open);
    let separator = Token::Separator(Lexeme::new(",", 1));
    assert!(matches!(translate_token(&paren, &Registry::standard()),
                     Err(TranslationError::UnexpectedToken { .. })));
    assert!(matches!(translate_token(&separator, &Registry::standard()),
                     Err(TranslationError::UnexpectedToken { .. })));
}

#[test]
fn custom_operator_through_custom_registry() {
    let modulo = Token::Operator(Lexeme::new("%", 0),
                                 OperatorInfo { precedence:    2,
                                                associativity: Associativity::Left,
                                                arity:         Arity::Binary, });
    assert!(translate_token(&modulo, &Registry::standard()).is_ok());
    assert!(translate_token(&modulo, &Registry::empty()).is_err());
}

#[test]
fn shared_registry_is_standard() {
    let shared = Registry::shared();
    for name in shunt::interpreter::registry::BUILTIN_FUNCTIONS {
        assert!(shared.function(name).is_some(), "{name}");
    }
    for symbol in ["+", "-", "*", "/", "%", "^"] {
        assert!(shared.binary(symbol).is_some(), "{symbol}");
    }
    for symbol in ["+", "-"] {
        assert!(shared.unary(symbol).is_some(), "{symbol}");
    }
    assert!(shared.unary("*").is_none());
}
