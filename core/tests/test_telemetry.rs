#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rust_decimal::Decimal;
    use bysquare_core::codec::DocumentCodec;
    use bysquare_core::model::*;
    use bysquare_core::telemetry::{Stage, StageTimes, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

    fn document() -> Document {
        PayDocument::new()
            .with_payment(Payment::new().with_amount(Decimal::new(995, 2)).with_account(BankAccount::new("SK00")))
            .with_payment(Payment::new().with_note("second"))
            .into()
    }

    #[test]
    fn encode_snapshot_counts_every_stage() {
        let (token, snap) = DocumentCodec::default().encode_with_telemetry(&document()).unwrap();

        assert_eq!(snap.documents, 1);
        assert_eq!(snap.payments, 2);
        assert_eq!(snap.bytes_sealed, snap.bytes_payload + 4);
        assert_eq!(snap.bytes_token, token.len() as u64);
        assert!(snap.compression_ratio > 0.0);
        assert!(snap.has_all_stages(&Stage::ENCODE));
        assert!(snap.sanity_check());
    }

    #[test]
    fn decode_snapshot_mirrors_encode() {
        let codec = DocumentCodec::default();
        let (token, enc) = codec.encode_with_telemetry(&document()).unwrap();
        let (doc, dec) = codec.decode_with_telemetry(&token).unwrap();

        assert_eq!(doc, document());
        assert_eq!(dec.bytes_payload, enc.bytes_payload);
        assert_eq!(dec.bytes_sealed, enc.bytes_sealed);
        assert_eq!(dec.bytes_compressed, enc.bytes_compressed);
        assert_eq!(dec.bytes_token, enc.bytes_token);
        assert!(dec.has_all_stages(&Stage::DECODE));
        assert!(!dec.has_all_stages(&[Stage::Serialize]));
        assert!(dec.sanity_check());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let (_, snap) = DocumentCodec::default().encode_with_telemetry(&document()).unwrap();
        let json = snap.to_json().unwrap();
        assert!(json.contains("\"bytes_token\""));

        let back: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bytes_token, snap.bytes_token);
        assert_eq!(back.stage_times.get(Stage::Compress), snap.stage_times.get(Stage::Compress));
    }

    #[test]
    fn counters_merge_and_add_assign() {
        let mut a = TelemetryCounters::default();
        a.add_document(1, 10, 14, 20, 36);
        let mut b = TelemetryCounters::default();
        b.add_document(2, 30, 34, 40, 68);

        let mut merged = a.clone();
        merged.merge(&b);
        assert_eq!(merged.documents, 2);
        assert_eq!(merged.payments, 3);
        assert_eq!(merged.bytes_payload, 40);
        assert_eq!(merged.bytes_token, 104);

        a += b;
        assert_eq!(a, merged);
    }

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Parse, Duration::from_micros(100));
        times.add(Stage::Parse, Duration::from_micros(50));
        times.add(Stage::Verify, Duration::from_micros(10));

        assert_eq!(times.get(Stage::Parse), Duration::from_micros(150));
        assert_eq!(times.total(), Duration::from_micros(160));
        assert!((times.get_us(Stage::Parse) - 150.0).abs() < 1e-6);
        assert!(times.has_all(&[Stage::Parse, Stage::Verify]));
        assert!(!times.has_all(&[Stage::Seal]));
        assert_eq!(times.get(Stage::Seal), Duration::ZERO);
    }

    #[test]
    fn timer_measures_closure() {
        let mut timer = TelemetryTimer::new();
        let out = timer.measure(Stage::Seal, || 40 + 2);
        timer.finish();
        assert_eq!(out, 42);
        assert!(timer.stage_times.has_all(&[Stage::Seal]));
        assert!(timer.stage_times.total() <= timer.elapsed());
    }

    #[test]
    fn stage_display_names() {
        assert_eq!(Stage::RadixEncode.to_string(), "radix_encode");
        assert_eq!(Stage::Decompress.to_string(), "decompress");
    }
}
