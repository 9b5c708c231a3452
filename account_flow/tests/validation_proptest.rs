/// Property-based tests for field validation using proptest
///
/// These tests check the validators against generated inputs, and that the
/// live password feedback and the submission check never disagree.
use account_flow::signup::{SignupField, SignupForm};
use account_flow::validation::{
    FieldErrors, Form, PasswordPolicy, is_date_of_birth, is_email, is_password,
    validate_first_failure,
};
use account_flow::AuthorityLevel;
use proptest::prelude::*;

// Strategy for syntactically valid addresses
fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9]{1,8}([._-][a-z0-9]{1,8})?", "[a-z0-9]{1,10}", "[a-z]{2,3}")
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

proptest! {
    #[test]
    fn test_generated_emails_are_valid(email in email_strategy()) {
        prop_assert!(is_email(&email), "{} should be valid", email);
    }

    #[test]
    fn test_emails_without_at_are_invalid(value in "[a-zA-Z0-9._-]{0,30}") {
        prop_assert!(!is_email(&value));
    }

    #[test]
    fn test_emails_with_two_ats_are_invalid(email in email_strategy(), extra in "[a-z]{1,5}") {
        let doubled = format!("{extra}@{email}");
        prop_assert!(!is_email(&doubled));
    }

    #[test]
    fn test_password_iff_all_rules(pw in "[ -~]{0,16}") {
        let expected = pw.chars().any(|c| c.is_ascii_alphabetic())
            && pw.chars().any(|c| c.is_ascii_digit())
            && pw.chars().any(|c| c.is_ascii_punctuation())
            && pw.chars().count() >= 8;
        prop_assert_eq!(is_password(&pw), expected);
    }

    #[test]
    fn test_live_feedback_flags(pw in "\\PC{0,16}") {
        let policy = PasswordPolicy::evaluate(&pw);
        let letters = pw.bytes().filter(u8::is_ascii_alphabetic).count();
        let digits = pw.bytes().filter(u8::is_ascii_digit).count();
        let specials = pw.bytes().filter(u8::is_ascii_punctuation).count();

        prop_assert_eq!(policy.has_letter, letters > 0);
        prop_assert_eq!(policy.has_digit, digits > 0);
        prop_assert_eq!(policy.has_special, specials > 0);
        prop_assert_eq!(policy.min_length, pw.chars().count() >= 8);
    }

    #[test]
    fn test_each_missing_rule_fails_submission(
        letters in "[a-zA-Z]{1,4}",
        digits in "[0-9]{1,4}",
        specials in "[!@#$%^&*]{1,4}",
    ) {
        let full = format!("{letters}{digits}{specials}xxxxxxxx");
        prop_assert!(is_password(&full));
        let no_letter = format!("{digits}{specials}12345678");
        let no_digit = format!("{letters}{specials}abcdefgh");
        let no_special = format!("{letters}{digits}abcdefgh");
        prop_assert!(!is_password(&no_letter));
        prop_assert!(!is_password(&no_digit));
        prop_assert!(!is_password(&no_special));

        let short: String = full.chars().take(7).collect();
        prop_assert!(!is_password(&short));
    }

    #[test]
    fn test_six_digits_are_dates(dob in "[0-9]{6}") {
        prop_assert!(is_date_of_birth(&dob));
    }

    #[test]
    fn test_other_lengths_are_not_dates(dob in "[0-9]{0,5}|[0-9]{7,10}") {
        prop_assert!(!is_date_of_birth(&dob));
    }

    #[test]
    fn test_first_failure_flags_exactly_one(name in "[0-9]{1,4}", dob in "[a-z]{1,4}") {
        let form = SignupForm {
            authority: AuthorityLevel::Teacher,
            email: "kim@school.kr".to_string(),
            pw: "abcd123!".to_string(),
            pw_check: "abcd123!".to_string(),
            name,
            address: "Seoul".to_string(),
            detail_address: "1F".to_string(),
            credit_card_num: "1234567812345678".to_string(),
            date_of_birth: dob,
        };
        let mut errors = FieldErrors::new();

        prop_assert_eq!(validate_first_failure(&form, &mut errors), Err(SignupField::Name));
        prop_assert_eq!(errors.errored().collect::<Vec<_>>(), vec![SignupField::Name]);
        prop_assert!(!form.is_field_valid(SignupField::DateOfBirth));
    }
}
