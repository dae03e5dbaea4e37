use std::{fs, io::Write};

use model::{Artifact, ModelError, load_artifact, score};
use proptest::prelude::*;

fn write_artifact(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn loads_linear_artifact() {
    let file = write_artifact(r#"{"kind":"linear","coefficients":[9.5],"intercept":2.5}"#);
    let predictor = load_artifact(file.path()).unwrap();
    assert_eq!(predictor.predict(5.0).unwrap(), 50.0);
}

#[test]
fn loads_polynomial_artifact() {
    let file = write_artifact(
        r#"{"kind":"polynomial","degree":2,"coefficients":[1.0,0.5],"intercept":0.0}"#,
    );
    let predictor = load_artifact(file.path()).unwrap();
    assert_eq!(predictor.predict(4.0).unwrap(), 12.0);
}

#[test]
fn missing_artifact_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_artifact(dir.path().join("nope.json")).err().unwrap();
    assert!(matches!(err, ModelError::Io { .. }));
}

#[test]
fn malformed_artifact_is_a_parse_error() {
    let file = write_artifact(r#"{"kind":"forest","trees":[]}"#);
    let err = load_artifact(file.path()).err().unwrap();
    assert!(matches!(err, ModelError::Parse { .. }));
}

#[test]
fn linear_artifact_needs_exactly_one_coefficient() {
    let file = write_artifact(r#"{"kind":"linear","coefficients":[1.0,2.0],"intercept":0.0}"#);
    let err = load_artifact(file.path()).err().unwrap();
    assert!(matches!(
        err,
        ModelError::FeatureMismatch {
            expected: 1,
            got: 2
        }
    ));
}

#[test]
fn shipped_artifact_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../assets/student_mark_predictor.json");
    let content = fs::read_to_string(path).unwrap();
    let artifact: Artifact = serde_json::from_str(&content).unwrap();
    assert!(matches!(artifact, Artifact::Linear { .. }));
}

proptest! {
    #[test]
    fn finalized_scores_stay_in_range(
        hours in 0.0f64..=24.0,
        slope in -50.0f64..50.0,
        intercept in -200.0f64..200.0,
    ) {
        let artifact = Artifact::Linear { coefficients: vec![slope], intercept };
        let predictor = artifact.into_predictor().unwrap();
        let mark = score::finalize(predictor.predict(hours).unwrap()).unwrap();

        prop_assert!((score::MIN_SCORE..=score::MAX_SCORE).contains(&mark));
        prop_assert!(((mark * 100.0).round() - mark * 100.0).abs() < 1e-6);
    }
}
