use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LissajousError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LissajousError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        LissajousError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LissajousError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn io_errors_convert_through_anyhow() {
    fn open_missing() -> LissajousResult<()> {
        use anyhow::Context as _;
        std::fs::File::open("/definitely/not/here.gif").context("open 'here.gif'")?;
        Ok(())
    }

    let err = open_missing().unwrap_err();
    assert!(matches!(err, LissajousError::Other(_)));
    assert!(err.to_string().contains("here.gif"));
}
