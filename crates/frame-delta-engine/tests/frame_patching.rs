use frame_delta_engine::{
    EditRecord, Patch, WrapOptions, apply_records, rewrap_base64, strip_line_wraps,
    with_data_uri_prefix,
};
use pretty_assertions::assert_eq;

/// Opcodes for turning `previous` into `next`, as a sequence matcher would report
/// them: every range is in `previous`'s coordinates
fn svg_frames() -> (String, String, Vec<EditRecord>) {
    let previous = with_data_uri_prefix(
        "svg",
        "PHN2ZyB3aWR0aD0iMTAiPjxwYXRoIGQ9Ik0wIDAiLz48L3N2Zz4=",
    );
    let next = with_data_uri_prefix(
        "svg",
        "PHN2ZyB3aWR0aD0iMjAiPjxwYXRoIGQ9Ik0wIDBMMSAxIi8+PC9zdmc+",
    );

    // Common prefix up to the first differing character, then the rest replaced
    let common = previous
        .chars()
        .zip(next.chars())
        .take_while(|(a, b)| a == b)
        .count();
    let patch = vec![EditRecord::new(
        common,
        previous.chars().count(),
        next.chars().skip(common).collect::<String>(),
    )];
    (previous, next, patch)
}

#[test]
fn patch_reconstructs_next_frame() {
    let (previous, next, records) = svg_frames();
    assert_eq!(apply_records(&previous, &records).unwrap(), next);
}

#[test]
fn patch_survives_json_round_trip() {
    let (previous, next, records) = svg_frames();
    let json = serde_json::to_string(&records).unwrap();

    let patch: Patch = serde_json::from_str(&json).unwrap();
    assert_eq!(patch.apply_to(&previous).unwrap(), next);
}

#[test]
fn edits_at_both_ends_do_not_disturb_each_other() {
    let base = "data:image/png;base64,AAAABBBBCCCC";
    let records = vec![
        EditRecord::new(22, 26, "ZZ"),
        EditRecord::new(30, 30, "--"),
        EditRecord::new(34, 34, "END"),
    ];
    assert_eq!(
        apply_records(base, &records).unwrap(),
        "data:image/png;base64,ZZBBBB--CCCCEND"
    );
}

#[test]
fn rewrapped_frame_patches_like_the_unwrapped_one() {
    let (previous, next, records) = svg_frames();
    let wrapped = WrapOptions::default().rewrap(&previous).unwrap();

    // Offsets refer to the unwrapped text, so strip wraps before patching
    let unwrapped = strip_line_wraps(&wrapped);
    let patched = apply_records(&unwrapped, &records).unwrap();
    assert_eq!(patched, next);
    assert_eq!(
        rewrap_base64(&patched, 26, 76).unwrap(),
        WrapOptions::default().rewrap(&next).unwrap()
    );
}
