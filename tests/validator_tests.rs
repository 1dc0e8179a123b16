use yantra_validator::{validate, validate_source, Error};

fn error_messages(source: &str) -> Vec<String> {
    validate(source)
        .errors
        .into_iter()
        .map(|d| d.message)
        .collect()
}

#[cfg(test)]
mod validator_tests {
    use super::*;

    #[test]
    fn test_clean_program_has_no_diagnostics() {
        let source = r#"PADAM x:ANKHE = 5;
CHATIMPU(x);
x = x + 1;
CHEPPU(x);
"#;
        let report = validate(source);
        assert!(report.errors.is_empty(), "unexpected errors: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "unexpected warnings: {:?}", report.warnings);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let source = r#"PADAM x:ANKHE = 5;
ELAITHE (x <= 10) [
CHATIMPU(x);
]
y = 1;
"#;
        let first = validate(source);
        let second = validate(source);
        assert_eq!(first, second, "same input must yield identical reports");
    }

    #[test]
    fn test_no_forward_visibility() {
        // Single-pass table: a use before the declaring line is undeclared,
        // even though a declaration appears later in the file.
        let source = "CHATIMPU(y);\nPADAM y:ANKHE = 1;\n";
        let report = validate(source);
        assert_eq!(report.errors.len(), 1, "errors: {:?}", report.errors);
        assert_eq!(report.errors[0].line, 1);
        assert_eq!(
            report.errors[0].message,
            "CHATIMPU uses undeclared variable 'y'"
        );
    }

    #[test]
    fn test_declared_integer_usable_everywhere_after() {
        let source = r#"PADAM x:ANKHE = 5;
ELAITHE (x < 10) [
x = x * 2;
]
CHATIMPU(x);
"#;
        let report = validate(source);
        assert!(
            !report.errors.iter().any(|d| d.message.contains("'x'")),
            "no error may reference x: {:?}",
            report.errors
        );
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_unmatched_closing_bracket() {
        let report = validate("]\n");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].message, "Unmatched closing bracket ']'");

        // Depth stays at zero: a second stray marker reports again instead
        // of going negative.
        let report = validate("]\n]\n");
        assert_eq!(report.errors.len(), 2, "errors: {:?}", report.errors);
    }

    #[test]
    fn test_le_operator_is_not_split_on_lt() {
        let source = r#"PADAM a:ANKHE = 1;
ELAITHE (a <= 5) [
]
"#;
        let report = validate(source);
        assert!(
            report.errors.is_empty(),
            "'<=' must not be mis-split on '<': {:?}",
            report.errors
        );
    }

    #[test]
    fn test_condition_without_relational_operator() {
        let report = validate("ELAITHE (5) [\n]\n");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].message,
            "Condition must use relational operator"
        );
    }

    #[test]
    fn test_condition_with_two_operators_is_malformed() {
        let report = validate("ELAITHE (a == b == c) [\n]\n");
        assert_eq!(report.errors.len(), 1, "errors: {:?}", report.errors);
        assert_eq!(report.errors[0].message, "Malformed condition around '=='");
    }

    #[test]
    fn test_text_operand_allows_string_comparison() {
        let source = r#"PADAM s:VARTTAI = "hi";
ELAITHE (s == "hi") [
]
"#;
        let report = validate(source);
        assert!(report.errors.is_empty(), "errors: {:?}", report.errors);
    }

    #[test]
    fn test_malformed_header_still_pushes_frame() {
        // The closing marker must find a frame to pop even though the
        // header itself was rejected; otherwise every later marker would
        // cascade spurious unmatched errors.
        let report = validate("ELAITHE x < 10 [\n]\n");
        assert_eq!(report.errors.len(), 1, "errors: {:?}", report.errors);
        assert_eq!(report.errors[0].message, "Malformed ELAITHE header");
    }

    #[test]
    fn test_malformed_alaithe_reports_and_pushes() {
        let report = validate("ALAITHE\n");
        let messages: Vec<&str> = report.errors.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Malformed ALAITHE header", "Block 'ALAITHE' not closed with ']'"],
        );
    }

    #[test]
    fn test_loop_update_variable_mismatch_is_error() {
        let source = r#"PADAM i:ANKHE = 0;
PADAM j:ANKHE = 0;
MALLI-MALLI (i = 0; i < 10; i = j + 1) [
]
"#;
        let report = validate(source);
        assert_eq!(report.errors.len(), 1, "errors: {:?}", report.errors);
        assert_eq!(report.errors[0].message, "Loop update variables do not match");
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_undeclared_loop_update_variable_only_warns() {
        let source = "MALLI-MALLI (PADAM i:ANKHE = 0; i < 3; k = k + 1) [\n]\n";
        let report = validate(source);
        assert!(report.errors.is_empty(), "errors: {:?}", report.errors);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].message, "Loop update variable undeclared");
    }

    #[test]
    fn test_loop_header_needs_three_parts() {
        let report = validate("MALLI-MALLI (PADAM i:ANKHE = 0; i < 3) [\n]\n");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].message,
            "Loop header must have init;condition;update"
        );
    }

    #[test]
    fn test_loop_init_assignment_to_undeclared_target() {
        let report = validate("MALLI-MALLI (i = 0; i < 3; i = i + 1) [\n]\n");
        let messages: Vec<&str> = report.errors.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Loop init uses undeclared variable 'i'",
                "Undeclared variable 'i' in expression 'i'",
            ],
        );
        assert_eq!(report.warnings.len(), 1, "update should only warn");
    }

    #[test]
    fn test_loop_variable_leaks_after_loop_closes() {
        // Flat symbol table: the induction variable stays visible and
        // assignable after the loop's closing marker.
        let source = r#"MALLI-MALLI (PADAM i:ANKHE = 0; i < 3; i = i + 1) [
]
CHATIMPU(i);
i = i + 1;
"#;
        let report = validate(source);
        assert!(report.errors.is_empty(), "errors: {:?}", report.errors);
    }

    #[test]
    fn test_unquoted_text_initializer() {
        let source = r#"PADAM s:VARTTAI = hello;
s = "ok";
"#;
        let report = validate(source);
        assert_eq!(report.errors.len(), 1, "errors: {:?}", report.errors);
        assert_eq!(
            report.errors[0].message,
            "VARTTAI variable initializer must be a string literal"
        );
        // The symbol was still registered: the follow-up assignment to s
        // produced no further diagnostics.
    }

    #[test]
    fn test_integer_initializer_must_be_literal() {
        let messages = error_messages("PADAM x:ANKHE = 1 + 2;\n");
        assert_eq!(messages, vec!["Initializer for 'x' must be an integer literal"]);
    }

    #[test]
    fn test_declaration_without_initializer_is_uninitialized_but_declared() {
        let report = validate("PADAM x:ANKHE;\nCHEPPU(x);\n");
        assert!(report.errors.is_empty(), "errors: {:?}", report.errors);
    }

    #[test]
    fn test_reserved_identifier_is_not_registered() {
        let source = "PADAM PADAM:ANKHE = 1;\nCHATIMPU(PADAM);\n";
        let messages = error_messages(source);
        assert_eq!(
            messages,
            vec![
                "Identifier 'PADAM' is reserved",
                "CHATIMPU uses undeclared variable 'PADAM'",
            ],
        );
    }

    #[test]
    fn test_two_nested_unclosed_blocks() {
        let source = "ELAITHE (1 == 1) [\nMALLI-MALLI (PADAM i:ANKHE = 0; i < 2; i = i + 1) [\n";
        let report = validate(source);
        assert_eq!(report.errors.len(), 2, "errors: {:?}", report.errors);
        assert_eq!(report.errors[0].line, 1);
        assert_eq!(report.errors[0].message, "Block 'ELAITHE' not closed with ']'");
        assert_eq!(report.errors[1].line, 2);
        assert_eq!(report.errors[1].message, "Block 'MALLI' not closed with ']'");
    }

    #[test]
    fn test_diagnostics_are_in_ascending_line_order() {
        // The unclosed-block error cites line 1 but is detected at end of
        // input; it must still come back before the line-2 error.
        let source = "ELAITHE (1 == 1) [\nCHATIMPU(zz);\n";
        let report = validate(source);
        let lines: Vec<usize> = report.errors.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![1, 2], "errors: {:?}", report.errors);
    }

    #[test]
    fn test_missing_terminator_fallback() {
        let report = validate("PADAM x:ANKHE = 1;\nx = 1\n");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].line, 2);
        assert_eq!(report.errors[0].message, "Statement must end with semicolon");
    }

    #[test]
    fn test_print_accepts_literals_and_declared_identifiers() {
        let source = r#"PADAM s:VARTTAI = "hi";
CHATIMPU(42);
CHATIMPU("text");
CHATIMPU(s);
"#;
        let report = validate(source);
        assert!(report.errors.is_empty(), "errors: {:?}", report.errors);
    }

    #[test]
    fn test_print_fallthrough_accepts_unchecked_expressions() {
        // Deliberately lenient: a non-literal, non-identifier argument is
        // accepted without validation, even with undeclared names inside.
        let report = validate("CHATIMPU(x + 1);\n");
        assert!(report.errors.is_empty(), "errors: {:?}", report.errors);
    }

    #[test]
    fn test_read_requires_declared_identifier() {
        let messages = error_messages("CHEPPU(y);\n");
        assert_eq!(messages, vec!["CHEPPU uses undeclared variable 'y'"]);
    }

    #[test]
    fn test_assignment_to_undeclared_target() {
        let messages = error_messages("y = 5;\n");
        assert_eq!(messages, vec!["Assignment to undeclared variable 'y'"]);
    }

    #[test]
    fn test_string_rhs_rejected_for_integer_target() {
        let source = r#"PADAM s:VARTTAI = "hi";
PADAM x:ANKHE = 1;
x = s + 1;
"#;
        let messages = error_messages(source);
        assert_eq!(messages, vec!["Type mismatch: variable 's' not ANKHE"]);
    }

    #[test]
    fn test_string_rhs_allowed_for_text_target() {
        let source = r#"PADAM s:VARTTAI = "hi";
s = "bye";
"#;
        let report = validate(source);
        assert!(report.errors.is_empty(), "errors: {:?}", report.errors);
    }

    #[test]
    fn test_expression_validation_is_fail_fast() {
        // Both y and z are undeclared, but only the first violation in the
        // expression is reported.
        let messages = error_messages("PADAM x:ANKHE = 1;\nx = y + z;\n");
        assert_eq!(messages, vec!["Undeclared variable 'y' in expression 'y + z'"]);
    }

    #[test]
    fn test_undeclared_variable_carries_suggestion() {
        let report = validate("PADAM x:ANKHE = 1;\nx = y + 1;\n");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].suggestion.as_deref(),
            Some("Declare 'y' before use: PADAM y:ANKHE;")
        );
    }

    #[test]
    fn test_unbalanced_parentheses() {
        let open = error_messages("PADAM x:ANKHE = 1;\nx = (1 + 2;\n");
        assert_eq!(open, vec!["Mismatched parentheses in expression '(1 + 2'"]);

        let close = error_messages("PADAM x:ANKHE = 1;\nx = 1) + 2;\n");
        assert_eq!(close, vec!["Unmatched ')' in expression '1) + 2'"]);
    }

    #[test]
    fn test_comments_are_stripped_outside_strings() {
        let source = "# full comment line\nPADAM x:ANKHE = 1; # trailing\nCHATIMPU(\"has # inside\");\n";
        let report = validate(source);
        assert!(report.errors.is_empty(), "errors: {:?}", report.errors);
    }

    #[test]
    fn test_crlf_input_is_normalized() {
        let source = "PADAM x:ANKHE = 1;\r\nCHATIMPU(x);\r\n";
        let report = validate(source);
        assert!(report.errors.is_empty(), "errors: {:?}", report.errors);
    }

    #[test]
    fn test_empty_source_is_a_boundary_fault() {
        assert!(matches!(validate_source(""), Err(Error::EmptySource)));
        assert!(matches!(validate_source("   \n\t"), Err(Error::EmptySource)));

        // The core itself accepts the empty string and reports nothing.
        let report = validate("");
        assert!(report.errors.is_empty() && report.warnings.is_empty());
    }
}
