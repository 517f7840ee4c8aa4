use pwd_validator::{
    CheckConfig, CheckId, CheckKind, CheckKinds, PassPolicy, Rule, Validator, ValidatorError,
    create_rule, repetition_check,
};
use secrecy::SecretString;

fn secret(password: &str) -> SecretString {
    SecretString::new(password.to_string().into())
}

#[test]
fn test_basic_checks_apply_default_lengths() {
    let validator = Validator::with_checks(CheckKinds::BASIC).unwrap();

    assert!(validator.validate(&secret("abc123XYZ/")));
    // Fits all criteria except minimum length.
    assert!(!validator.validate(&secret("Ab123/")));
}

#[test]
fn test_blank_passwords_fail_length() {
    let validator = Validator::with_checks(CheckKinds::LENGTH).unwrap();
    for pwd in ["", "   ", "\t\n", "  1234  "] {
        assert!(!validator.validate(&secret(pwd)), "{pwd:?}");
    }
}

#[test]
fn test_advanced_checks_on_realistic_passwords() {
    let validator = Validator::with_checks(CheckKinds::ADVANCED).unwrap();

    assert!(validator.validate(&secret("Gr8-Kx!z7Qm")));

    let report = validator.report(&secret("Abcd1234!!!!"));
    let failed: Vec<_> = report.failed().cloned().collect();
    assert_eq!(
        failed,
        vec![
            CheckId::Kind(CheckKind::DigitSequence),
            CheckId::Kind(CheckKind::LetterSequence),
            CheckId::Kind(CheckKind::SymbolRepetition),
        ]
    );
    assert!(validator.validate_min_passed(&secret("Abcd1234!!!!"), 7));
    assert!(!validator.validate_with(&secret("Abcd1234!!!!"), PassPolicy::Ratio(0.75)));
}

#[test]
fn test_mixed_builtin_and_custom_checks() {
    let mut validator = Validator::with_checks(CheckKinds::LETTERS | CheckKinds::DIGITS).unwrap();
    validator.add_custom_check("not-username", |pwd| !pwd.to_lowercase().contains("alice"));

    assert!(validator.validate(&secret("s3cret")));
    assert!(!validator.validate(&secret("Alice123")));
    assert!(validator.validate_ratio(&secret("Alice123"), 0.6));

    validator.remove_custom_check("not-username");
    assert!(validator.validate(&secret("Alice123")));
}

#[test]
fn test_out_of_range_bit() {
    let bad = CheckKinds::from_bits_retain(1 << 11);
    assert!(matches!(
        Validator::with_checks(bad),
        Err(ValidatorError::InvalidArgument { .. })
    ));
    assert!(matches!(
        create_rule(bad, &CheckConfig::default()),
        Err(ValidatorError::InvalidArgument { .. })
    ));
}

#[test]
fn test_factory_rule_standalone() {
    let rule = create_rule(CheckKinds::CASE_MIXED, &CheckConfig::default()).unwrap();
    assert_eq!(rule, Rule::CaseMixed);
    assert!(rule.execute("Øø"));
    assert!(!rule.execute("AAA"));
}

#[test]
fn test_repetition_scanner_public() {
    assert!(!repetition_check("a99b".chars(), 2, |c| c.is_ascii_digit()));
    assert!(repetition_check("a9b9".chars(), 2, |c| c.is_ascii_digit()));
}

#[test]
fn test_digit_position_rule() {
    let validator = Validator::with_checks(CheckKinds::DIGIT_POSITION).unwrap();
    for pwd in ["test", "123test", "test123", "123test123"] {
        assert!(!validator.validate(&secret(pwd)), "{pwd}");
    }
    assert!(validator.validate(&secret("te123st")));
}

#[test]
fn test_only_decimal_digits_count_as_digits() {
    let digits = Validator::with_checks(CheckKinds::DIGITS).unwrap();
    assert!(!digits.validate(&secret("pass½Ⅻ²")));
    assert!(digits.validate(&secret("pass٣")));

    let position = Validator::with_checks(CheckKinds::DIGIT_POSITION).unwrap();
    assert!(!position.validate(&secret("pa½ss")));

    let sequence = Validator::with_checks(CheckKinds::DIGIT_SEQUENCE).unwrap();
    assert!(sequence.validate(&secret("x①②③④x")));
}
