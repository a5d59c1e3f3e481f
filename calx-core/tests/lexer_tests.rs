//! Lexer 端到端测试

mod common;

use calx_core::lexer::{tokenize, Coordinate, ErrorKind, Lexer, LexerError, MemoryLines};
use common::{lex_lines, lex_reader, lex_source, num, op, FailingSource};
use pretty_assertions::assert_eq;

#[test]
fn test_empty_input_yields_nothing() {
    assert!(lex_lines(&[]).unwrap().is_empty());
    assert!(lex_reader("").unwrap().is_empty());
}

#[test]
fn test_whitespace_only_input_yields_nothing() {
    assert!(lex_lines(&["   ", "", "\t \u{a0}"]).unwrap().is_empty());
}

#[test]
fn test_class_changes_split_tokens() {
    assert_eq!(
        tokenize("12+34").unwrap(),
        vec![num(12), op("+"), num(34)]
    );
    assert_eq!(
        tokenize("1 + 2 * 3").unwrap(),
        vec![num(1), op("+"), num(2), op("*"), num(3)]
    );
}

#[test]
fn test_all_operator_characters_form_one_run() {
    let all = r"+-*/$!&|^\.,<>=";
    assert_eq!(tokenize(all).unwrap(), vec![op(all)]);
}

#[test]
fn test_operator_runs_separated_by_whitespace() {
    assert_eq!(
        tokenize("<= >=").unwrap(),
        vec![op("<="), op(">=")]
    );
}

#[test]
fn test_leading_zeros_are_ignored() {
    assert_eq!(tokenize("007 0 00").unwrap(), vec![num(7), num(0), num(0)]);
}

#[test]
fn test_tokens_do_not_continue_across_lines() {
    // 行尾与空白一样终止累积中的 token
    assert_eq!(lex_lines(&["1", "2"]).unwrap(), vec![num(1), num(2)]);
    assert_eq!(lex_lines(&["12", "34"]).unwrap(), vec![num(12), num(34)]);
    assert_eq!(lex_lines(&["+", "-"]).unwrap(), vec![op("+"), op("-")]);
    assert_eq!(
        lex_lines(&["1+", "", "+2"]).unwrap(),
        vec![num(1), op("+"), op("+"), num(2)]
    );
}

#[test]
fn test_first_character_of_each_line_is_kept() {
    assert_eq!(
        lex_lines(&["1", "23", "4"]).unwrap(),
        vec![num(1), num(23), num(4)]
    );
}

#[test]
fn test_reader_path_matches_memory_path() {
    let text = "10 + 20\r\n\r\n*3\n";
    assert_eq!(lex_reader(text).unwrap(), tokenize(text).unwrap());
    assert_eq!(
        lex_reader(text).unwrap(),
        vec![num(10), op("+"), num(20), op("*"), num(3)]
    );
}

#[test]
fn test_unacceptable_character_reports_location() {
    let err = lex_lines(&["1 + 2", "", "  3 @ 4"]).unwrap_err();
    let lex = err.as_lex().expect("lex error");
    assert_eq!(lex.kind, ErrorKind::UnacceptableCharacter('@'));
    assert_eq!(lex.position, Coordinate::new(3, 5));
    assert_eq!(lex.line, "  3 @ 4");
    assert_eq!(
        err.render(),
        "3:5: cannot accept character '@'\n 3 |   3 @ 4\n   |     ^"
    );
}

#[test]
fn test_unacceptable_character_inside_operator_run() {
    let err = tokenize("1 +a").unwrap_err();
    let lex = err.as_lex().expect("lex error");
    assert_eq!(lex.kind, ErrorKind::UnacceptableCharacter('a'));
    assert_eq!(lex.position, Coordinate::new(1, 4));
}

#[test]
fn test_tokens_before_error_are_delivered() {
    let mut lexer = Lexer::new(MemoryLines::from_text("1 2 ;"));
    assert_eq!(lexer.next_token().unwrap(), Some(num(1)));
    assert_eq!(lexer.next_token().unwrap(), Some(num(2)));
    assert!(lexer.next_token().is_err());
}

#[test]
fn test_max_u64_is_accepted() {
    assert_eq!(
        tokenize("18446744073709551615").unwrap(),
        vec![num(u64::MAX)]
    );
}

#[test]
fn test_number_overflow_is_rejected() {
    let err = tokenize("1 18446744073709551616").unwrap_err();
    let lex = err.as_lex().expect("lex error");
    assert_eq!(lex.kind, ErrorKind::NumberOverflow);
    assert_eq!(lex.position, Coordinate::new(1, 22));
}

#[test]
fn test_source_failure_is_not_end_of_stream() {
    let result = lex_source(FailingSource::new(&["1 +", "2"]));
    match result {
        Err(LexerError::Source { line, source }) => {
            assert_eq!(line, 3);
            assert_eq!(source.to_string(), "connection reset");
        }
        other => panic!("expected source error, got {other:?}"),
    }
}

#[test]
fn test_tokens_before_source_failure_are_delivered() {
    let mut lexer = Lexer::new(FailingSource::new(&["5"]));
    assert_eq!(lexer.next_token().unwrap(), Some(num(5)));
    assert!(matches!(
        lexer.next_token(),
        Err(LexerError::Source { line: 2, .. })
    ));
}

#[test]
fn test_replay_from_fresh_source_is_identical() {
    let lines = ["3*(", "4"];
    let text = "12 +- 7\n\n 99 <= 100 \n";
    let first = tokenize(text).unwrap();
    let second = tokenize(text).unwrap();
    assert_eq!(first, second);

    // 出错的输入重放时也得到同样的错误
    let first = lex_lines(&lines).unwrap_err().to_string();
    let second = lex_lines(&lines).unwrap_err().to_string();
    assert_eq!(first, second);
    assert_eq!(first, "1:3: cannot accept character '('");
}
