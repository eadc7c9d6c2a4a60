// piimask-core/tests/redaction_scenarios.rs
//! End-to-end redaction scenarios for every built-in detector, run through the
//! default `Redactor`.

use piimask_core::{RedactionEngine, Redactor};
use test_log::test; // For integrating with `env_logger` in tests

fn assert_redaction(redactor: &Redactor, input: &str, expected: &str) {
    let actual = redactor.redact_str(input);
    assert_eq!(actual, expected, "\nInput:    [{input}]");
    assert_eq!(actual.len(), input.len());
}

#[test]
fn test_redact_credit_card() {
    let redactor = Redactor::new();

    assert_redaction(&redactor, "", "");
    // enough digits (and would pass luhn), but not separated from junk
    assert_redaction(
        &redactor,
        "52353330555760656D3FC1D315E80069",
        "52353330555760656D3FC1D315E80069",
    );
    // 16 digits, but no breaks
    assert_redaction(&redactor, "4111111111111111", "4111111111111111");
    // too many breaks
    assert_redaction(
        &redactor,
        "4-1-1-1-1-1-1-1-1-1-1-1-1-1-1-1",
        "4-1-1-1-1-1-1-1-1-1-1-1-1-1-1-1",
    );
    // too short
    assert_redaction(&redactor, "4111-1111-1117", "4111-1111-1117");
    assert_redaction(&redactor, "4111 1111 1111 1111", "*******************");
    // mixed separators
    assert_redaction(&redactor, "4111 1111-1111 1111", "4111 1111-1111 1111");
    assert_redaction(&redactor, "4111 1111 1111 1111 ", "******************* ");
    assert_redaction(&redactor, " 4111 1111 1111 1111", " *******************");
    assert_redaction(&redactor, " 4111 1111 1111 1111 ", " ******************* ");
    assert_redaction(&redactor, "4556-7375-8689-9855", "*******************");
    assert_redaction(&redactor, " 4556-7375-8689-9855", " *******************");
    assert_redaction(&redactor, "4556-7375-8689-9855 ", "******************* ");
    assert_redaction(&redactor, " 4556-7375-8689-9855 ", " ******************* ");
    // 19 digits is the maximum
    assert_redaction(&redactor, "4111 1111 1111 1101 111", "***********************");
    assert_redaction(&redactor, "4111 1111 1111 1101 1117", "4111 1111 1111 1101 1117");
    assert_redaction(
        &redactor,
        "4111 1111 1111 1111 stuff 4111 1111 1111 1111",
        "******************* stuff *******************",
    );
    assert_redaction(&redactor, " 4111 1111 1111-1111", " 4111 1111 1111-1111");
    // a trailing letter makes the number part of a word
    assert_redaction(&redactor, "4556-7375-8689-9855a taco ", "4556-7375-8689-9855a taco ");
    assert_redaction(&redactor, "4556-7375-8689-9855. taco ", "*******************. taco ");
    assert_redaction(&redactor, "cc:4556-7375-8689-9855 ", "cc:******************* ");
    assert_redaction(
        &redactor,
        "4111 1111 1111 1101 111 4556-7375-8689-9855. taco ",
        "*********************** *******************. taco ",
    );
    // break-count bounds: one and six breaks are rejected, two and five accepted
    assert_redaction(&redactor, "41111111 11111111", "41111111 11111111");
    assert_redaction(&redactor, "4111 11111111 1111", "******************");
    assert_redaction(&redactor, "41 11 11 11 11 111111", "*********************");
    assert_redaction(&redactor, "4 1 11 11 11 11 111111", "4 1 11 11 11 11 111111");
    // 13 digits is the minimum
    assert_redaction(&redactor, "4111 1111 1111 9", "****************");
    // fails the Luhn check
    assert_redaction(&redactor, "1234 1234 1234 1234", "1234 1234 1234 1234");
}

#[test]
fn test_redact_email() {
    let redactor = Redactor::new();

    assert_redaction(
        &redactor,
        "Blah test@gmail.com, our employee's email is test@gmail. and we have one more which may or not be an email test@test taco",
        "Blah ****@gmail.com, our employee's email is ****@gmail. and we have one more which may or not be an email ****@test taco",
    );
}

#[test]
fn test_redact_phone() {
    let redactor = Redactor::new();

    assert_redaction(
        &redactor,
        "801-111-1111 and (801) 111-1111 +1(801)111-1111 taco",
        "************ and (801) 111-1111 +1************* taco",
    );
    assert_redaction(
        &redactor,
        "Blah 801-111-1111 and (801) 111-1111 +1(801)111-1111 taco",
        "Blah ************ and (801) 111-1111 +1************* taco",
    );
    assert_redaction(&redactor, "40512-4618", "40512-4618");
    assert_redaction(&redactor, "405-124618", "405-124618");
    assert_redaction(
        &redactor,
        "This is not valid: 801 111 1111",
        "This is not valid: 801 111 1111",
    );
    assert_redaction(
        &redactor,
        "801-111-1111 +1(801)111-1111 taco",
        "************ +1************* taco",
    );
}

#[test]
fn test_redact_ssn() {
    let redactor = Redactor::new();

    assert_redaction(&redactor, "Blah 123-12-1234.", "Blah ***********.");
    assert_redaction(&redactor, "123 12 1234 taco", "*********** taco");
    assert_redaction(&redactor, " 123-121234 taco", " 123-121234 taco");
    assert_redaction(&redactor, "450 900 100", "450 900 100");
}

#[test]
fn test_redact_dob() {
    let redactor = Redactor::new();

    assert_redaction(&redactor, " Apr 39 ", " Apr 39 ");
    assert_redaction(&redactor, "APRIL 3, 2019", "******** 2019");
    // month 13 does not exist when read day-first
    assert_redaction(&redactor, " 7/13/2023", " 7/13/2023");
    assert_redaction(
        &redactor,
        "[329993740 873518800     ]",
        "[329993740 873518800     ]",
    );
    assert_redaction(&redactor, "1982/11/8", "*********");
    assert_redaction(
        &redactor,
        "Blah 12-01-1998 and 12/01/1998 ",
        "Blah ********** and ********** ",
    );
    assert_redaction(&redactor, "Jan 1, 2021", "****** 2021");
    assert_redaction(&redactor, " February 1, 2020", " *********** 2020");
    // two-digit years are too ambiguous to redact
    assert_redaction(&redactor, "30-12-12", "30-12-12");
    assert_redaction(&redactor, "1/12/21", "1/12/21");
    assert_redaction(&redactor, "[5-4-212/80]", "[5-4-212/80]");
}

#[test]
fn test_mixed_categories_in_one_pass() {
    let redactor = Redactor::new();

    assert_redaction(
        &redactor,
        "jane.doe@corp.io paid with 4556-7375-8689-9855 on 1982/11/8, call 801-111-1111",
        "********@corp.io paid with ******************* on *********, call ************",
    );
}
