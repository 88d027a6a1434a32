use crate::{
    error::{ParseError, ParseResult},
    token::{Arity, Associativity, OperatorInfo, Paren, Token},
};

/// Decides whether an operator already on the stack must be emitted before
/// `incoming` is pushed.
///
/// Higher precedence always goes first. On a tie, a left-associative incoming
/// operator closes the earlier one (`2-3-4` is `(2-3)-4`) while a
/// right-associative one waits (`2^3^4` is `2^(3^4)`).
fn pops_before(top: &OperatorInfo, incoming: &OperatorInfo) -> bool {
    top.precedence > incoming.precedence
    || (top.precedence == incoming.precedence && incoming.associativity == Associativity::Left)
}

/// Reorders annotated infix tokens into Reverse Polish Notation.
///
/// This is Dijkstra's shunting-yard algorithm. Numbers go straight to the
/// output; operators, functions and opening parentheses wait on a stack until
/// precedence, a closing parenthesis, a separator or the end of input
/// releases them. Parentheses and separators never reach the output.
///
/// Prefix operators are pushed without releasing anything, since no operand
/// precedes them that an earlier operator could still be waiting for.
///
/// # Errors
/// - [`ParseError::UnbalancedParenthesis`] for a `)` without a matching `(`,
///   or a `(` still open at the end of input.
/// - [`ParseError::MisplacedSeparator`] for a `,` outside any parentheses.
///
/// # Example
/// ```
/// use shunt::interpreter::{annotator::annotate, lexer::tokenize, sorter::sort_to_rpn};
///
/// let rpn = sort_to_rpn(annotate(&tokenize("2+3*4").unwrap()).unwrap()).unwrap();
/// let text: Vec<_> = rpn.iter().map(|t| t.text()).collect();
/// assert_eq!(text, ["2", "3", "4", "*", "+"]);
/// ```
pub fn sort_to_rpn(tokens: Vec<Token>) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Function(_) | Token::Parenthesis(_, Paren::Open) => stack.push(token),
            Token::Separator(ref lexeme) => loop {
                match stack.last() {
                    Some(Token::Parenthesis(_, Paren::Open)) => break,
                    Some(_) => output.extend(stack.pop()),
                    None => {
                        return Err(ParseError::MisplacedSeparator { position: lexeme.position });
                    },
                }
            },
            Token::Parenthesis(ref lexeme, Paren::Close) => {
                loop {
                    match stack.pop() {
                        Some(Token::Parenthesis(_, Paren::Open)) => break,
                        Some(popped) => output.push(popped),
                        None => {
                            return Err(ParseError::UnbalancedParenthesis { text:     lexeme.text.clone(),
                                                                           position: lexeme.position, });
                        },
                    }
                }
                if let Some(Token::Function(_)) = stack.last() {
                    output.extend(stack.pop());
                }
            },
            Token::Operator(_, ref info) => {
                if info.arity == Arity::Binary {
                    while let Some(Token::Operator(_, top)) = stack.last()
                          && pops_before(top, info)
                    {
                        output.extend(stack.pop());
                    }
                }
                stack.push(token);
            },
        }
    }

    while let Some(token) = stack.pop() {
        if let Token::Parenthesis(lexeme, _) = token {
            return Err(ParseError::UnbalancedParenthesis { text:     lexeme.text,
                                                           position: lexeme.position, });
        }
        output.push(token);
    }

    tracing::debug!(count = output.len(), "sorted tokens into RPN");
    Ok(output)
}
