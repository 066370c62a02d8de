use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SubframeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SubframeError::recording("x")
            .to_string()
            .contains("recording error:")
    );
    assert!(
        SubframeError::denoise("x")
            .to_string()
            .contains("denoise error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SubframeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
