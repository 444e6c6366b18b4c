use monkey::{
    ast::{Expression, InfixOperator, Statement},
    error::ParseError,
    interpreter::{parser::core::MAX_NESTING_DEPTH, token::TokenKind},
    parse,
};

/// Parses `src`, asserts it has no diagnostics and returns the rendering.
fn render(src: &str) -> String {
    let (program, errors) = parse(src);
    assert!(errors.is_empty(), "unexpected errors for {src:?}: {errors:?}");
    program.to_string()
}

fn messages(src: &str) -> Vec<String> {
    parse(src).1.iter().map(ToString::to_string).collect()
}

#[test]
fn operator_precedence() {
    let cases = [("a + b * c", "(a + (b * c))"),
                 ("-a * b", "((-a) * b)"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a - b - c", "((a - b) - c)"),
                 ("!-a", "(!(-a))"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true == false", "(true == false)"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("!true", "(!true)")];

    for (src, expected) in cases {
        assert_eq!(render(src), format!("{expected}\n"), "rendering of {src:?}");
    }
}

#[test]
fn grouped_expressions() {
    let cases = [("(3 + 4)", "(3 + 4)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("((a))", "a")];

    for (src, expected) in cases {
        assert_eq!(render(src), format!("{expected}\n"), "rendering of {src:?}");
    }
}

#[test]
fn call_expressions() {
    assert_eq!(render("add(1, 2 * 3, 4 + 5);"), "add(1, (2 * 3), (4 + 5))\n");
    assert_eq!(render("a + add(b * c) + d"), "((a + add((b * c))) + d)\n");
    assert_eq!(render("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))"),
               "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))\n");
    assert_eq!(render("add()"), "add()\n");
    assert_eq!(render("fn(x) { x }(5)"), "fn(x) { x }(5)\n");
}

#[test]
fn if_expressions() {
    assert_eq!(render("if (x < y) { x }"), "if (x < y) { x }\n");
    assert_eq!(render("if (5 < 10) { x } else { y }"), "if (5 < 10) { x } else { y }\n");
    assert_eq!(render("if (true) { }"), "if true { }\n");

    let (program, _) = parse("if (x < y) { x } else { y }");
    let Statement::Expression { expr: Expression::If { consequence, alternative, .. },
                                .. } = &program.statements[0]
    else {
        panic!("expected an if expression, got {:?}", program.statements[0]);
    };
    assert_eq!(consequence.statements.len(), 1);
    assert!(alternative.is_some());
}

#[test]
fn function_literals() {
    assert_eq!(render("fn(x, y) { x + y; }"), "fn(x, y) { (x + y) }\n");
    assert_eq!(render("fn() {}"), "fn() { }\n");

    let (program, _) = parse("fn(x, y, z) {};");
    let Statement::Expression { expr: Expression::FunctionLiteral { parameters, .. },
                                .. } = &program.statements[0]
    else {
        panic!("expected a function literal");
    };
    assert_eq!(parameters, &["x", "y", "z"]);
}

#[test]
fn statements() {
    assert_eq!(render("let x = 5;"), "let x = 5;\n");
    assert_eq!(render("let y = true"), "let y = true;\n");
    assert_eq!(render("return 5;"), "return 5;\n");
    assert_eq!(render("return a + b"), "return (a + b);\n");
    assert_eq!(render("{ 1; 2 }"), "{ 1 2 }\n");
    assert_eq!(render("let x = 1; x; return x;"), "let x = 1;\nx\nreturn x;\n");
    assert_eq!(render("1 2 3"), "1\n2\n3\n");
}

#[test]
fn statement_lines() {
    let (program, errors) = parse("let a = 1;\n\nlet b = 2 +\n 3;");
    assert!(errors.is_empty());

    let Statement::Let { line, value, .. } = &program.statements[1] else {
        panic!("expected a let statement");
    };
    assert_eq!(*line, 3);
    assert_eq!(value.line_number(), 3);

    let Expression::Infix { right, op, .. } = value else {
        panic!("expected an infix expression");
    };
    assert_eq!(*op, InfixOperator::Add);
    assert_eq!(right.line_number(), 4);
}

#[test]
fn empty_statements_are_skipped() {
    assert_eq!(render(";"), "");
    assert_eq!(render(";;;"), "");
    assert_eq!(render(""), "");
    assert_eq!(render("; 5;; 6 ;"), "5\n6\n");
}

#[test]
fn malformed_statement_is_skipped() {
    let (program, errors) = parse("let x 5;\nlet y=10;");

    assert_eq!(errors,
               vec![ParseError::UnexpectedToken { expected: TokenKind::Assign,
                                                  found:    TokenKind::Int,
                                                  literal:  "5".to_string(),
                                                  line:     1, }]);
    assert_eq!(errors[0].to_string(), "Expected ASSIGN token. Got INT token (5)");
    assert_eq!(program.to_string(), "let y = 10;\n");
}

#[test]
fn each_malformed_statement_reports_once() {
    assert_eq!(messages("let = 10; let 838383; let x = 1;"),
               vec!["Expected IDENTIFIER token. Got ASSIGN token (=)",
                    "Expected IDENTIFIER token. Got INT token (838383)"]);
}

#[test]
fn missing_prefix_parse_function() {
    let (program, errors) = parse("+ 5; 7;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "No prefix parse function for PLUS found");
    assert_eq!(program.to_string(), "7\n");

    let (program, errors) = parse("let x = 5 @ 3;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "No prefix parse function for ILLEGAL found");
    assert_eq!(program.to_string(), "let x = 5;\n");
}

#[test]
fn integer_out_of_range() {
    assert_eq!(messages("99999999999999999999;"),
               vec!["Could not parse 99999999999999999999 as integer"]);
    assert_eq!(render("9223372036854775807"), "9223372036854775807\n");
}

#[test]
fn running_out_of_tokens() {
    for src in ["let x = ", "(1 + 2", "if (true) { 5", "fn(x, ", "add(1, 2", "-"] {
        assert_eq!(messages(src), vec!["Expected more tokens"], "diagnostics for {src:?}");
    }

    // The statement fails, and discarding its tokens then hits the end.
    assert_eq!(messages("let x 5"),
               vec!["Expected ASSIGN token. Got INT token (5)", "Expected more tokens"]);
}

#[test]
fn grouped_expression_must_be_closed() {
    assert_eq!(messages("(1 + 2; 3;"),
               vec!["Expected RPAREN token. Got SEMICOLON token (;)"]);
    assert_eq!(messages("if (x { 1 }; 2;"),
               vec!["Expected RPAREN token. Got LBRACE token ({)"]);
}

#[test]
fn recovery_inside_blocks() {
    let (program, errors) = parse("if (true) { let = 1; 5 } 10;");
    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "if true { 5 }\n10\n");

    let (program, errors) = parse("{ let x }");
    assert_eq!(errors[0].to_string(), "Expected ASSIGN token. Got RBRACE token (})");
    assert_eq!(program.to_string(), "{ }\n");
}

#[test]
fn diagnostics_carry_their_line() {
    let (_, errors) = parse("let a = 1;\nlet = 2;\n\n+;");
    let lines: Vec<usize> = errors.iter().map(ParseError::line).collect();
    assert_eq!(lines, vec![2, 4]);
}

#[test]
fn nesting_is_bounded() {
    assert_eq!(messages(&format!("{}1", "-".repeat(100_000))),
               vec!["Expression nested too deeply", "Expected more tokens"]);
    assert_eq!(messages(&"{".repeat(100_000)),
               vec!["Expression nested too deeply", "Expected more tokens"]);
    assert_eq!(messages(&format!("{}1{};", "(".repeat(100_000), ")".repeat(100_000)))[0],
               "Expression nested too deeply");
}

#[test]
fn nesting_limit_is_exact() {
    let deepest = format!("{}1", "-".repeat(MAX_NESTING_DEPTH - 1));
    assert!(messages(&deepest).is_empty());

    let too_deep = format!("{}1;", "-".repeat(MAX_NESTING_DEPTH));
    assert_eq!(messages(&too_deep), vec!["Expression nested too deeply"]);
    assert_eq!(parse(&too_deep).1[0].line(), 1);
}
