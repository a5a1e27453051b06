// tests/known_answer_tests.rs
use hashkit_tests::suites::kat::{
    loader, CaseFilter, Message, Runner, SuiteError, VectorCase,
};

fn run_named(name: &str, filter: CaseFilter) {
    let file = loader::load_suite_by_name(name)
        .unwrap_or_else(|e| panic!("Failed to load {} vectors: {}", name, e));
    let summary = Runner::new(filter).run_file(&file);

    println!(
        "{}: {} passed, {} skipped",
        file.algorithm, summary.passed, summary.skipped
    );
    assert!(summary.is_success(), "{:?}", summary.failures);
    assert!(summary.passed > 0, "no {} cases ran", name);
}

#[test]
fn test_sha224_vectors() {
    run_named("sha224", CaseFilter::Fast);
}

#[test]
fn test_sha256_vectors() {
    run_named("sha256", CaseFilter::Fast);
}

#[test]
fn test_sha384_vectors() {
    run_named("sha384", CaseFilter::Fast);
}

#[test]
fn test_sha512_vectors() {
    run_named("sha512", CaseFilter::Fast);
}

#[test]
fn test_sha512_224_vectors() {
    run_named("sha512_224", CaseFilter::Fast);
}

#[test]
fn test_sha512_256_vectors() {
    run_named("sha512_256", CaseFilter::Fast);
}

#[test]
fn test_every_file_targets_a_registered_algorithm() {
    let files = loader::load_all().expect("Failed to load vector directory");
    assert_eq!(files.len(), 6);
    for file in &files {
        assert!(
            hashkit_tests::suites::kat::dispatcher::REGISTRY.contains_key(file.algorithm.as_str()),
            "no handler for {}",
            file.algorithm
        );
    }
}

// Each of these hashes 1 GiB; run with `cargo test -- --ignored`
#[test]
#[ignore]
fn test_one_gibibyte_messages() {
    for name in ["sha224", "sha256", "sha384", "sha512", "sha512_224", "sha512_256"] {
        run_named(name, CaseFilter::ExpensiveOnly);
    }
}

#[test]
fn test_mismatch_is_reported() {
    let case = VectorCase {
        name: "tampered".into(),
        ascii: Some("abc".into()),
        hex: None,
        repeat: None,
        count: None,
        digest: "00".repeat(32),
        expensive: false,
    };
    assert!(matches!(
        Runner::run_case("SHA-256", &case),
        Err(SuiteError::Mismatch { .. })
    ));
}

#[test]
fn test_malformed_cases_are_rejected() {
    let mut case = VectorCase {
        name: "ambiguous".into(),
        ascii: Some("abc".into()),
        hex: Some("616263".into()),
        repeat: None,
        count: None,
        digest: String::new(),
        expensive: false,
    };
    assert!(matches!(case.message(), Err(SuiteError::InvalidCase { .. })));

    case.ascii = None;
    case.hex = None;
    case.repeat = Some("a".into());
    assert!(matches!(case.message(), Err(SuiteError::InvalidCase { .. })));

    case.count = Some(3);
    assert_eq!(
        case.message().unwrap(),
        Message::Repeat { pattern: b"a".to_vec(), count: 3 }
    );

    assert!(matches!(
        Runner::run_case("SHA-3", &case),
        Err(SuiteError::UnknownAlgorithm(_))
    ));
}
