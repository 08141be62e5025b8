//! End-to-end splitting of a synthetic two-radical outline.
//!
//! The outline mimics a left-right character: a tall box on the left, a
//! vertical bar on the right, and a horizontal stroke crossing the gap.

use glyphcut::{BBox, Policy, SplitSpec, extract_component};

const OUTLINE: &str = "M 100 0 L 380 0 L 380 700 L 100 700 Z \
                       M 520 -60 L 600 -60 L 600 760 L 520 760 Z \
                       M 380 350 L 620 350 L 620 420 L 380 420 Z";

fn glyph_bounds() -> BBox {
    BBox::new(100.0, -60.0, 900.0, 760.0)
}

#[test]
fn left_extraction_keeps_near_side_and_straddle() {
    let got = extract_component(
        OUTLINE,
        glyph_bounds(),
        SplitSpec::extract(450.0),
        Policy::Left,
    )
    .unwrap()
    .unwrap();

    // the right bar collapses to its anchor; the crossing stroke keeps its
    // in-window edge
    insta::assert_snapshot!(
        got.path,
        @"M 100 0 L 380 0 L 380 700 L 100 700 Z M 520 -60 M 380 350 L 380 420 Z"
    );
    assert_eq!(got.bounds.to_array(), [100.0, -60.0, 520.0, 700.0]);
}

#[test]
fn right_extraction_keeps_far_side_and_straddle() {
    let got = extract_component(
        OUTLINE,
        glyph_bounds(),
        SplitSpec::extract(450.0),
        Policy::Right,
    )
    .unwrap()
    .unwrap();

    insta::assert_snapshot!(
        got.path,
        @"M 100 0 M 520 -60 L 600 -60 L 600 760 L 520 760 Z M 380 350 L 620 350 L 620 420"
    );
    assert_eq!(got.bounds.to_array(), [100.0, -60.0, 620.0, 760.0]);
}

#[test]
fn cleanup_removes_the_stranded_anchor() {
    let left = extract_component(
        OUTLINE,
        glyph_bounds(),
        SplitSpec::extract(450.0),
        Policy::Left,
    )
    .unwrap()
    .unwrap();

    let cleaned = extract_component(
        &left.path,
        left.bounds,
        SplitSpec::cleanup(450.0),
        Policy::Cleanup,
    )
    .unwrap()
    .unwrap();

    insta::assert_snapshot!(
        cleaned.path,
        @"M 100 0 L 380 0 L 380 700 L 100 700 Z M 380 350 L 380 420 Z"
    );
    assert_eq!(cleaned.bounds.to_array(), [100.0, 0.0, 380.0, 700.0]);
}

#[test]
fn cut_past_the_outline_extracts_everything() {
    let got = extract_component(
        OUTLINE,
        glyph_bounds(),
        SplitSpec::extract(900.0),
        Policy::Left,
    )
    .unwrap()
    .unwrap();
    assert_eq!(got.path, OUTLINE.split_whitespace().collect::<Vec<_>>().join(" "));
    assert_eq!(got.bounds.to_array(), [100.0, -60.0, 620.0, 760.0]);
}

#[test]
fn cleanup_below_the_outline_yields_no_component() {
    let got = extract_component(
        OUTLINE,
        glyph_bounds(),
        SplitSpec::new(0.0, 0.0),
        Policy::Cleanup,
    )
    .unwrap();
    assert_eq!(got, None);
}
