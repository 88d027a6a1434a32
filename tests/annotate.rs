use pretty_assertions::assert_eq;
use shunt::{
    error::ParseError,
    interpreter::{
        annotator::{OperatorTable, annotate, annotate_with},
        lexer::tokenize,
    },
    token::{Arity, Associativity, OperatorInfo, Paren, RawKind, RawToken, Token},
};

fn annotate_source(source: &str) -> Result<Vec<Token>, ParseError> {
    annotate(&tokenize(source).unwrap())
}

fn operator_arities(source: &str) -> Vec<Arity> {
    annotate_source(source).unwrap()
                           .iter()
                           .filter_map(|t| match t {
                               Token::Operator(_, info) => Some(info.arity),
                               _ => None,
                           })
                           .collect()
}

#[test]
fn preserves_order_and_count() {
    let raw = tokenize("sin(1, 2) + (3)").unwrap();
    let annotated = annotate(&raw).unwrap();

    assert_eq!(annotated.len(), raw.len());
    for (raw, token) in raw.iter().zip(&annotated) {
        assert_eq!(raw.text, token.text());
        assert_eq!(raw.position, token.position());
    }
    assert!(matches!(annotated[0], Token::Function(_)));
    assert!(matches!(annotated[1], Token::Parenthesis(_, Paren::Open)));
    assert!(matches!(annotated[3], Token::Separator(_)));
    assert!(matches!(annotated[5], Token::Parenthesis(_, Paren::Close)));
}

#[test]
fn attaches_binary_metadata() {
    let annotated = annotate_source("2^3").unwrap();
    let Token::Operator(_, info) = &annotated[1] else {
        panic!("expected operator, found {:?}", annotated[1]);
    };
    assert_eq!(*info,
               OperatorInfo { precedence:    4,
                              associativity: Associativity::Right,
                              arity:         Arity::Binary, });
}

#[test]
fn minus_at_start_is_unary() {
    assert_eq!(operator_arities("-2+3"), [Arity::Unary, Arity::Binary]);
}

#[test]
fn minus_after_operator_is_unary() {
    assert_eq!(operator_arities("2*-3"), [Arity::Binary, Arity::Unary]);
    assert_eq!(operator_arities("2--3"), [Arity::Binary, Arity::Unary]);
    assert_eq!(operator_arities("--3"), [Arity::Unary, Arity::Unary]);
}

#[test]
fn minus_after_open_paren_or_separator_is_unary() {
    assert_eq!(operator_arities("(-2)"), [Arity::Unary]);
    assert_eq!(operator_arities("max(1, -2)"), [Arity::Unary]);
}

#[test]
fn minus_after_operand_is_binary() {
    assert_eq!(operator_arities("2-3"), [Arity::Binary]);
    assert_eq!(operator_arities("(2)-3"), [Arity::Binary]);
    assert_eq!(operator_arities("sin(1)-3"), [Arity::Binary]);
}

#[test]
fn unary_plus_is_supported() {
    assert_eq!(operator_arities("+2"), [Arity::Unary]);
}

#[test]
fn operator_without_unary_entry_is_error() {
    assert_eq!(annotate_source("*2"),
               Err(ParseError::UnknownOperator { symbol:   "*".to_string(),
                                                 arity:    Arity::Unary,
                                                 position: 0, }));
}

#[test]
fn symbol_missing_from_table_is_error() {
    let raw = vec![RawToken::new(RawKind::Number, "1", 0),
                   RawToken::new(RawKind::Operator, "&", 1),
                   RawToken::new(RawKind::Number, "2", 2)];

    assert_eq!(annotate(&raw),
               Err(ParseError::UnknownOperator { symbol:   "&".to_string(),
                                                 arity:    Arity::Binary,
                                                 position: 1, }));
}

#[test]
fn custom_table() {
    let info = OperatorInfo { precedence:    7,
                              associativity: Associativity::Left,
                              arity:         Arity::Binary, };
    let table = OperatorTable::empty().with_operator("&", info);
    let raw = vec![RawToken::new(RawKind::Number, "1", 0),
                   RawToken::new(RawKind::Operator, "&", 1),
                   RawToken::new(RawKind::Number, "2", 2)];

    let annotated = annotate_with(&raw, &table).unwrap();
    assert_eq!(annotated[1], Token::Operator(annotated[1].lexeme().clone(), info));

    let plus = vec![RawToken::new(RawKind::Number, "1", 0),
                    RawToken::new(RawKind::Operator, "+", 1),
                    RawToken::new(RawKind::Number, "2", 2)];
    assert!(annotate_with(&plus, &table).is_err());
}

#[test]
fn with_operator_replaces_same_arity_only() {
    let info = OperatorInfo { precedence:    9,
                              associativity: Associativity::Left,
                              arity:         Arity::Binary, };
    let table = OperatorTable::standard().with_operator("-", info);

    assert_eq!(table.lookup("-", Arity::Binary), Some(info));
    assert_eq!(table.lookup("-", Arity::Unary).map(|i| i.precedence), Some(3));
}
