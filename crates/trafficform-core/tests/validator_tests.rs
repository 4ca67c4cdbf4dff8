mod common;

use common::valid_snapshot;
use proptest::prelude::*;
use rstest::rstest;
use trafficform_core::collector::{collect, FormSnapshot};
use trafficform_core::kind::TrafficKind;
use trafficform_core::payload::{FieldValue, PayloadEntry};
use trafficform_core::profiles::FormProfile;
use trafficform_core::shaper::shape;
use trafficform_core::validator::{validate, ValidationResult};

fn run(kind: TrafficKind, snapshot: &FormSnapshot) -> ValidationResult {
    let profile = FormProfile::for_kind(kind);
    let raw = collect(profile, snapshot).unwrap();
    validate(profile, &shape(profile, &raw))
}

#[rstest]
#[case(TrafficKind::Voice)]
#[case(TrafficKind::Video)]
#[case(TrafficKind::Gaming)]
#[case(TrafficKind::Iot)]
#[case(TrafficKind::Data)]
fn test_in_bounds_form_is_valid(#[case] kind: TrafficKind) {
    let result = run(kind, &valid_snapshot(kind));
    assert!(result.is_valid(), "{:?}", result);
    assert!(result.messages().is_empty());
}

#[rstest]
#[case(TrafficKind::Voice, "voice_max_bitrate", "20", "maximum bitrate")]
#[case(TrafficKind::Video, "video_max_streams", "6", "maximum number of streams")]
#[case(TrafficKind::Video, "video_min_bitrate", "2", "minimum stream bitrate")]
#[case(TrafficKind::Gaming, "gaming_max_bitrate", "80", "maximum bitrate")]
#[case(TrafficKind::Gaming, "gaming_jitter", "150", "jitter")]
#[case(TrafficKind::Gaming, "gaming_delay", "-1", "delay")]
#[case(TrafficKind::Gaming, "gaming_packet_loss_rate", "1.5", "packet loss rate")]
#[case(TrafficKind::Iot, "iot_min_packet_size", "10", "minimum packet size")]
#[case(TrafficKind::Iot, "iot_max_interval", "61", "maximum interval")]
#[case(TrafficKind::Data, "data_max_bitrate", "1001", "maximum bitrate")]
#[case(TrafficKind::Data, "data_min_interval", "0", "minimum interval")]
fn test_single_violation_yields_single_message(
    #[case] kind: TrafficKind,
    #[case] field: &str,
    #[case] value: &str,
    #[case] label: &str,
) {
    let snapshot = valid_snapshot(kind).with(field, value);
    let result = run(kind, &snapshot);

    assert!(!result.is_valid());
    assert_eq!(result.messages().len(), 1, "{:?}", result.messages());
    assert!(
        result.messages()[0].to_lowercase().contains(label),
        "'{}' does not name '{}'",
        result.messages()[0],
        label
    );
}

#[rstest]
#[case(TrafficKind::Voice, "[8, 16]", "voice_min_bitrate", "7", "between 8 and 16 kbps")]
#[case(TrafficKind::Video, "[1, 5]", "video_min_streams", "0", "between 1 and 5 streams")]
#[case(TrafficKind::Video, "[3, 8]", "video_max_bitrate", "9", "between 3 and 8 Mbps")]
#[case(TrafficKind::Gaming, "[30, 70]", "gaming_min_bitrate", "29", "between 30 and 70 Mbps")]
#[case(TrafficKind::Gaming, "[0, 100]", "gaming_jitter", "100.5", "between 0 and 100 ms")]
#[case(TrafficKind::Gaming, "[0, 1000]", "gaming_delay", "1000.1", "between 0 and 1000 ms")]
#[case(TrafficKind::Gaming, "[0, 1]", "gaming_packet_loss_rate", "-0.1", "between 0 and 1 (")]
#[case(TrafficKind::Iot, "[20, 1500]", "iot_max_packet_size", "1501", "between 20 and 1500 bytes")]
#[case(TrafficKind::Iot, "[1, 60]", "iot_min_interval", "0", "between 1 and 60 seconds")]
#[case(TrafficKind::Data, "[10, 1000]", "data_min_bitrate", "9", "between 10 and 1000 Mbps")]
#[case(TrafficKind::Data, "[1, 60]", "data_max_interval", "61", "between 1 and 60 seconds")]
fn test_declared_bounds_are_exact(
    #[case] kind: TrafficKind,
    #[case] _bounds: &str,
    #[case] field: &str,
    #[case] value: &str,
    #[case] expected: &str,
) {
    let result = run(kind, &valid_snapshot(kind).with(field, value));
    assert_eq!(result.messages().len(), 1, "{:?}", result.messages());
    assert!(
        result.messages()[0].contains(expected),
        "'{}' missing '{}'",
        result.messages()[0],
        expected
    );
}

#[rstest]
#[case("voice_min_bitrate", "10.5", Some("Minimum bitrate for voice traffic must be a whole number (got 10.5)."))]
#[case("voice_min_bitrate", "1e1", None)]
#[case("voice_min_bitrate", "+10", None)]
#[case(
    "voice_max_bitrate",
    "99999999999999999999",
    Some("Maximum bitrate for voice traffic must be between 8 and 16 kbps (got 100000000000000000000).")
)]
#[case("voice_max_bitrate", "fourteen", Some("Maximum bitrate for voice traffic must be a number (got 'fourteen')."))]
fn test_integer_inputs_get_the_right_reason(
    #[case] field: &str,
    #[case] value: &str,
    #[case] expected: Option<&str>,
) {
    let result = run(TrafficKind::Voice, &valid_snapshot(TrafficKind::Voice).with(field, value));
    match expected {
        Some(msg) => assert_eq!(result.messages(), [msg]),
        None => assert!(result.is_valid(), "{:?}", result.messages()),
    }
}

#[test]
fn test_gaming_packet_loss_scenario() {
    let snapshot = valid_snapshot(TrafficKind::Gaming).with("gaming_packet_loss_rate", "1.5");
    let result = run(TrafficKind::Gaming, &snapshot);
    assert_eq!(
        result.messages(),
        ["Packet loss rate for gaming traffic must be between 0 and 1 (got 1.5)."]
    );
}

#[test]
fn test_non_numeric_inputs_are_reported_not_dropped() {
    let snapshot = valid_snapshot(TrafficKind::Gaming)
        .with("gaming_min_bitrate", "fast")
        .with("gaming_delay", "")
        .with("gaming_jitter", "NaN");
    let result = run(TrafficKind::Gaming, &snapshot);

    assert_eq!(result.messages().len(), 3, "{:?}", result.messages());
    assert!(result.messages()[0].contains("must be a number (got 'fast')"));
    assert!(result.messages()[1].contains("Jitter"));
    assert!(result.messages()[1].contains("finite"));
    assert!(result.messages()[2].contains("Delay"));
}

#[test]
fn test_inverted_range_is_shaped_as_given_then_rejected() {
    let snapshot = valid_snapshot(TrafficKind::Iot)
        .with("iot_min_interval", "5")
        .with("iot_max_interval", "3");
    let profile = FormProfile::for_kind(TrafficKind::Iot);
    let payload = shape(profile, &collect(profile, &snapshot).unwrap());

    assert_eq!(
        payload.get("interval_range"),
        Some(&PayloadEntry::Range([FieldValue::Int(5), FieldValue::Int(3)]))
    );
    let result = validate(profile, &payload);
    assert_eq!(result.messages().len(), 1);
    assert!(result.messages()[0].contains("minimum <= maximum"));
}

#[test]
fn test_every_violation_is_accumulated() {
    let snapshot = FormSnapshot::new()
        .with("gaming_min_bitrate", "80")
        .with("gaming_max_bitrate", "20")
        .with("gaming_jitter", "-3")
        .with("gaming_delay", "5000")
        .with("gaming_packet_loss_rate", "2");
    let result = run(TrafficKind::Gaming, &snapshot);

    // min out of bounds, max out of bounds, inverted pair, jitter, delay, loss
    assert_eq!(result.messages().len(), 6, "{:#?}", result.messages());
}

proptest! {
    #[test]
    fn prop_shaping_preserves_dom_order(a in -5000i64..5000, b in -5000i64..5000) {
        let snapshot = valid_snapshot(TrafficKind::Data)
            .with("data_min_bitrate", &a.to_string())
            .with("data_max_bitrate", &b.to_string());
        let profile = FormProfile::for_kind(TrafficKind::Data);
        let payload = shape(profile, &collect(profile, &snapshot).unwrap());

        prop_assert_eq!(
            payload.get("bitrate_range"),
            Some(&PayloadEntry::Range([FieldValue::Int(a), FieldValue::Int(b)]))
        );

        let result = validate(profile, &payload);
        let in_bounds = |v: i64| (10..=1000).contains(&v);
        let expected = usize::from(!in_bounds(a)) + usize::from(!in_bounds(b)) + usize::from(a > b);
        prop_assert_eq!(result.messages().len(), expected);
    }

    #[test]
    fn prop_n_violations_give_n_messages(
        low_min_rate in any::<bool>(),
        high_max_rate in any::<bool>(),
        low_min_interval in any::<bool>(),
        high_max_interval in any::<bool>(),
    ) {
        let pick = |bad: bool, bad_v: &str, good_v: &str| if bad { bad_v.to_string() } else { good_v.to_string() };
        let snapshot = FormSnapshot::new()
            .with("data_min_bitrate", &pick(low_min_rate, "5", "50"))
            .with("data_max_bitrate", &pick(high_max_rate, "2000", "500"))
            .with("data_min_interval", &pick(low_min_interval, "0", "2"))
            .with("data_max_interval", &pick(high_max_interval, "100", "10"));

        let result = run(TrafficKind::Data, &snapshot);
        let n = [low_min_rate, high_max_rate, low_min_interval, high_max_interval]
            .iter()
            .filter(|b| **b)
            .count();

        prop_assert_eq!(result.messages().len(), n);
        prop_assert_eq!(result.is_valid(), n == 0);
    }
}
