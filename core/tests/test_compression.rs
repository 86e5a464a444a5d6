// LZMA framing and backends. Process-backend tests skip when `xz` is absent.

#[cfg(test)]
mod tests {
    use std::path::Path;

    use bysquare_core::compression::{
        compress_framed, create_backend, decompress_framed, resolve, CompressionError,
        LinkedBackend, LzmaBackend, LzmaParams, ProcessBackend,
    };
    use bysquare_core::config::BackendConfig;
    use bysquare_core::constants::DEFAULT_XZ_PATH;

    const SAMPLE: &[u8] = b"\t1\t0\t123.45\tEUR\t20240301\t\t\t\t\t\t1\tSK1234567890123456789\t\t0\t0";

    // SAMPLE as raw LZMA1 (lc=3, lp=0, pb=2, dict=32 KiB) with the size known
    // up front and no end-of-payload marker. The `xz` encoder output is 54 bytes.
    const SAMPLE_NO_MARKER: &str = "00048d24222b6c4aadcae4e5e8d98fb43ad56ef1fe72babc\
                                    8ba6dc4084c0d7efaef23ce0e1b954e0f0d8f40324bd8fd6";

    fn no_marker_body() -> Vec<u8> {
        hex::decode(SAMPLE_NO_MARKER).unwrap()
    }

    fn xz_available() -> bool {
        Path::new(DEFAULT_XZ_PATH).exists()
    }

    #[test]
    fn filter_spec_matches_xz_syntax() {
        assert_eq!(LzmaParams::BYSQUARE.xz_filter_spec(), "lc=3,lp=0,pb=2,dict=32KiB");
        assert_eq!(LzmaParams::default(), LzmaParams::BYSQUARE);
    }

    #[test]
    fn linked_roundtrip_with_length_prefix() {
        let backend = LinkedBackend::new();
        let framed = compress_framed(&backend, SAMPLE, &LzmaParams::BYSQUARE).unwrap();

        assert_eq!(&framed[..2], &(SAMPLE.len() as u16).to_le_bytes());
        let out = decompress_framed(&backend, &framed, &LzmaParams::BYSQUARE).unwrap();
        assert_eq!(out, SAMPLE);
    }

    #[test]
    fn linked_roundtrip_larger_input() {
        let input: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
        let backend = LinkedBackend::new();
        let framed = compress_framed(&backend, &input, &LzmaParams::BYSQUARE).unwrap();
        assert_eq!(decompress_framed(&backend, &framed, &LzmaParams::BYSQUARE).unwrap(), input);
    }

    #[test]
    fn linked_accepts_stream_without_end_marker() {
        let body = no_marker_body();
        assert_eq!(body.len(), 48);

        let out = LinkedBackend::new().decompress(&body, &LzmaParams::BYSQUARE, SAMPLE.len()).unwrap();
        assert_eq!(out, SAMPLE);

        let mut framed = (SAMPLE.len() as u16).to_le_bytes().to_vec();
        framed.extend_from_slice(&body);
        assert_eq!(decompress_framed(&LinkedBackend::new(), &framed, &LzmaParams::BYSQUARE).unwrap(), SAMPLE);
    }

    #[test]
    fn rejects_input_over_u16() {
        let input = vec![b'a'; 65_536];
        let err = compress_framed(&LinkedBackend::new(), &input, &LzmaParams::BYSQUARE).unwrap_err();
        assert!(matches!(err, CompressionError::InputTooLarge { have: 65_536, max: 65_535 }));
    }

    #[test]
    fn rejects_missing_prefix() {
        let err = decompress_framed(&LinkedBackend::new(), &[0x05], &LzmaParams::BYSQUARE).unwrap_err();
        assert!(matches!(err, CompressionError::MissingLengthPrefix { have: 1 }));
    }

    #[test]
    fn rejects_prefix_longer_than_output() {
        let backend = LinkedBackend::new();
        let mut framed = compress_framed(&backend, SAMPLE, &LzmaParams::BYSQUARE).unwrap();
        let claimed = SAMPLE.len() as u16 + 1;
        framed[..2].copy_from_slice(&claimed.to_le_bytes());

        let err = decompress_framed(&backend, &framed, &LzmaParams::BYSQUARE).unwrap_err();
        assert!(
            matches!(err, CompressionError::LengthMismatch { expected, actual }
                if expected == SAMPLE.len() + 1 && actual == SAMPLE.len()),
            "{err}"
        );
    }

    #[test]
    fn rejects_prefix_shorter_than_output() {
        let backend = LinkedBackend::new();
        let mut framed = compress_framed(&backend, SAMPLE, &LzmaParams::BYSQUARE).unwrap();
        let claimed = SAMPLE.len() as u16 - 1;
        framed[..2].copy_from_slice(&claimed.to_le_bytes());

        let err = decompress_framed(&backend, &framed, &LzmaParams::BYSQUARE).unwrap_err();
        assert!(matches!(err, CompressionError::LengthMismatch { expected, .. } if expected == SAMPLE.len() - 1));
    }

    #[test]
    fn rejects_garbage_stream() {
        let mut framed = vec![10, 0];
        framed.extend_from_slice(&[0xFF; 16]);
        assert!(decompress_framed(&LinkedBackend::new(), &framed, &LzmaParams::BYSQUARE).is_err());
    }

    #[test]
    fn registry_resolves_backends() {
        let linked = resolve(&BackendConfig::Linked);
        assert_eq!(linked.name, "linked");
        assert!(!linked.external);
        assert!(linked.executable.is_none());

        let process = resolve(&BackendConfig::process());
        assert_eq!(process.name, "process");
        assert!(process.external);
        assert_eq!(process.executable.as_deref(), Some(Path::new(DEFAULT_XZ_PATH)));
    }

    #[test]
    fn registry_creates_backends() {
        assert_eq!(create_backend(&BackendConfig::Linked).unwrap().name(), "linked");
        assert_eq!(create_backend(&BackendConfig::process()).unwrap().name(), "process");

        let err = create_backend(&BackendConfig::Process { xz_path: "".into() }).err().unwrap();
        assert!(matches!(err, CompressionError::BackendInit { backend: "process", .. }));
    }

    #[test]
    fn process_backend_reports_spawn_failure() {
        let backend = ProcessBackend::new("/nonexistent/bin/xz");
        let err = backend.compress(SAMPLE, &LzmaParams::BYSQUARE).unwrap_err();
        assert!(matches!(err, CompressionError::Spawn { backend: "process", .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn process_and_linked_interoperate() {
        if !xz_available() {
            eprintln!("skipping: {DEFAULT_XZ_PATH} not installed");
            return;
        }
        let linked = LinkedBackend::new();
        let process = ProcessBackend::new(DEFAULT_XZ_PATH);

        let framed = compress_framed(&process, SAMPLE, &LzmaParams::BYSQUARE).unwrap();
        assert_eq!(decompress_framed(&linked, &framed, &LzmaParams::BYSQUARE).unwrap(), SAMPLE);

        let framed = compress_framed(&linked, SAMPLE, &LzmaParams::BYSQUARE).unwrap();
        assert_eq!(decompress_framed(&process, &framed, &LzmaParams::BYSQUARE).unwrap(), SAMPLE);
    }

    #[test]
    fn process_backend_rejects_garbage() {
        if !xz_available() {
            eprintln!("skipping: {DEFAULT_XZ_PATH} not installed");
            return;
        }
        let mut framed = vec![10, 0];
        framed.extend_from_slice(&[0xFF; 16]);
        let process = ProcessBackend::new(DEFAULT_XZ_PATH);
        assert!(decompress_framed(&process, &framed, &LzmaParams::BYSQUARE).is_err());
    }

    #[test]
    fn process_accepts_matching_length_despite_diagnostics() {
        if !xz_available() {
            eprintln!("skipping: {DEFAULT_XZ_PATH} not installed");
            return;
        }
        // xz decodes the whole body but exits non-zero with "Unexpected end of input".
        let process = ProcessBackend::new(DEFAULT_XZ_PATH);
        let out = process.decompress(&no_marker_body(), &LzmaParams::BYSQUARE, SAMPLE.len()).unwrap();
        assert_eq!(out, SAMPLE);
    }

    #[test]
    fn process_rejects_diagnostics_when_length_differs() {
        if !xz_available() {
            eprintln!("skipping: {DEFAULT_XZ_PATH} not installed");
            return;
        }
        let process = ProcessBackend::new(DEFAULT_XZ_PATH);
        let err = process
            .decompress(&no_marker_body(), &LzmaParams::BYSQUARE, SAMPLE.len() - 1)
            .unwrap_err();
        match err {
            CompressionError::BackendFailed { backend, status, diagnostics } => {
                assert_eq!(backend, "process");
                assert_ne!(status, Some(0));
                assert!(!diagnostics.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
