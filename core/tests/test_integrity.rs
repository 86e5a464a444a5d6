#[cfg(test)]
mod tests {
    use bysquare_core::integrity::{seal, verify, IntegrityError};
    use bysquare_core::utils::{checksum_bytes, compute_checksum};

    #[test]
    fn checksum_reference_value() {
        assert_eq!(compute_checksum(b"123456789"), 0xCBF4_3926);
        assert_eq!(checksum_bytes(b"123456789"), [0x26, 0x39, 0xF4, 0xCB]);
    }

    #[test]
    fn seal_prefixes_checksum() {
        let sealed = seal(b"123456789");
        assert_eq!(&sealed[..4], &[0x26, 0x39, 0xF4, 0xCB]);
        assert_eq!(&sealed[4..], b"123456789");
    }

    #[test]
    fn verify_returns_payload() {
        let sealed = seal(b"hello\tworld");
        assert_eq!(verify(&sealed).unwrap(), b"hello\tworld");
    }

    #[test]
    fn verify_empty_payload() {
        let sealed = seal(b"");
        assert_eq!(sealed, vec![0, 0, 0, 0]);
        assert_eq!(verify(&sealed).unwrap(), b"");
    }

    #[test]
    fn verify_detects_payload_flip() {
        let mut sealed = seal(b"payload");
        sealed[6] ^= 0x01;
        assert!(matches!(verify(&sealed).unwrap_err(), IntegrityError::ChecksumMismatch { .. }));
    }

    #[test]
    fn verify_detects_checksum_flip() {
        let mut sealed = seal(b"payload");
        sealed[0] ^= 0x80;
        let err = verify(&sealed).unwrap_err();
        match err {
            IntegrityError::ChecksumMismatch { stored, computed } => {
                assert_eq!(computed, compute_checksum(b"payload"));
                assert_ne!(stored, computed);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn verify_rejects_short_input() {
        assert_eq!(verify(&[1, 2, 3]).unwrap_err(), IntegrityError::Truncated { have: 3 });
        assert_eq!(verify(&[]).unwrap_err(), IntegrityError::Truncated { have: 0 });
    }
}
