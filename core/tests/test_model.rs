#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use bysquare_core::model::*;

    #[test]
    fn pay_date_forms() {
        let d: PayDate = "2024-01-15".parse().unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 1, 15));
        assert_eq!(d.to_string(), "2024-01-15");
        assert_eq!(d.to_compact(), "20240115");
        assert_eq!(PayDate::from_compact("20240115"), Some(d));
        assert_eq!(d.to_naive_date(), NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn pay_date_rejects_bad_shapes() {
        for bad in ["20240115", "2024-1-15", "2024/01/15", "2024-01-1x", ""] {
            assert!(bad.parse::<PayDate>().is_err(), "{bad}");
        }
        assert!(PayDate::from_compact("2024-01-15").is_none());
        assert!(PayDate::new(10_000, 1, 1).is_none());
        assert!(PayDate::new(2024, 100, 1).is_none());
    }

    #[test]
    fn pay_date_shape_without_calendar() {
        let d = PayDate::new(2024, 2, 30).unwrap();
        assert!(d.to_naive_date().is_none());
        assert_eq!(d.to_compact(), "20240230");
    }

    #[test]
    fn pay_date_from_chrono() {
        let d = PayDate::from(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
        assert_eq!(d.to_string(), "1999-12-31");
    }

    #[test]
    fn pay_date_serde_uses_logical_form() {
        let d = PayDate::new(2024, 3, 1).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2024-03-01\"");
        assert_eq!(serde_json::from_str::<PayDate>("\"2024-03-01\"").unwrap(), d);
        assert!(serde_json::from_str::<PayDate>("\"20240301\"").is_err());
    }

    #[test]
    fn periodicity_codes() {
        let all = [
            Periodicity::Daily,
            Periodicity::Weekly,
            Periodicity::Biweekly,
            Periodicity::Monthly,
            Periodicity::Bimonthly,
            Periodicity::Quarterly,
            Periodicity::Semiannually,
            Periodicity::Annually,
        ];
        let codes: String = all.iter().map(|p| p.code()).collect();
        assert_eq!(codes, "dwbmBqsa");
        for p in all {
            assert_eq!(Periodicity::from_code(p.code()), Some(p));
        }
        assert_eq!(Periodicity::from_code('x'), None);
    }

    #[test]
    fn standing_order_day_range() {
        assert!(StandingOrderExt::new(Periodicity::Weekly).with_day(7).day_in_range());
        assert!(!StandingOrderExt::new(Periodicity::Weekly).with_day(8).day_in_range());
        assert!(StandingOrderExt::new(Periodicity::Monthly).with_day(31).day_in_range());
        assert!(!StandingOrderExt::new(Periodicity::Monthly).with_day(0).day_in_range());
        assert!(StandingOrderExt::new(Periodicity::Annually).day_in_range());
    }

    #[test]
    fn month_set_by_number() {
        assert_eq!(MonthSet::month(1), Some(MonthSet::JANUARY));
        assert_eq!(MonthSet::month(12), Some(MonthSet::DECEMBER));
        assert_eq!(MonthSet::month(0), None);
        assert_eq!(MonthSet::month(13), None);
        assert_eq!((MonthSet::JANUARY | MonthSet::DECEMBER).bits(), 0x0801);
    }

    #[test]
    fn payment_defaults() {
        let p = Payment::new();
        assert_eq!(p.currency, "XXX");
        assert!(!p.order_option);
        assert!(!p.has_extensions());
        assert_eq!(Payment::new().with_currency("").currency, "XXX");
        assert_eq!(Payment::new().with_currency("EUR").currency, "EUR");
    }

    #[test]
    fn direct_debit_constants() {
        assert_eq!(DirectDebitScheme::Sepa.as_str(), "SEPA");
        assert_eq!(DirectDebitScheme::Other.as_str(), "other");
        assert_eq!(DirectDebitType::OneOff.as_str(), "one-off");
        assert_eq!(DirectDebitType::Recurrent.as_str(), "recurrent");
        assert_eq!(serde_json::to_string(&DirectDebitType::OneOff).unwrap(), "\"one-off\"");
    }

    #[test]
    fn document_json_fixture() {
        let json = r#"{
            "kind": "pay",
            "invoice_id": null,
            "payments": [{
                "amount": "123.45",
                "currency": "EUR",
                "due_date": "2024-03-01",
                "bank_accounts": [{ "iban": "SK1234567890123456789", "bic": null }]
            }]
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        let pay = doc.as_pay().unwrap();
        assert_eq!(pay.payments.len(), 1);
        let p = &pay.payments[0];
        assert_eq!(p.amount, Some(Decimal::new(12345, 2)));
        assert_eq!(p.due_date, PayDate::new(2024, 3, 1));
        assert!(p.variable_symbol.is_none());

        let again: Document = serde_json::from_str(&serde_json::to_string(&doc).unwrap()).unwrap();
        assert_eq!(again, doc);
    }
}
