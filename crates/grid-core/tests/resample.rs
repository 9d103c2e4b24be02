// File: crates/grid-core/tests/resample.rs
// Purpose: Resampling behaviour on small hand-checked inputs.

use grid_core::{fixtures, resample, ChannelConfig, ChannelMode, InputSample, OutputSample, ResampleOptions, Resampler};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn row(x: Decimal, y: Option<Decimal>, original_x: Option<Decimal>) -> OutputSample {
    OutputSample { x, original_x, channels: [("y".to_string(), y)].into_iter().collect() }
}

#[test]
fn single_gap_equal_to_step_adds_no_rows() {
    let samples = vec![InputSample::xy(dec!(1), dec!(1)), InputSample::xy(dec!(2), dec!(2))];
    let rows = resample(&samples, &ChannelConfig::y(ChannelMode::Interpolate)).expect("valid");
    assert_eq!(
        rows,
        vec![row(dec!(1), Some(dec!(1)), Some(dec!(1))), row(dec!(2), Some(dec!(2)), Some(dec!(2)))]
    );
}

#[test]
fn wide_single_gap_adds_no_rows() {
    let samples = vec![InputSample::xy(dec!(1), dec!(1)), InputSample::xy(dec!(3), dec!(5))];
    let rows = resample(&samples, &ChannelConfig::y(ChannelMode::Interpolate)).expect("valid");
    assert_eq!(
        rows,
        vec![row(dec!(1), Some(dec!(1)), Some(dec!(1))), row(dec!(3), Some(dec!(5)), Some(dec!(3)))]
    );
}

#[test]
fn uniform_two_channels_passthrough() {
    let samples = vec![
        InputSample::new(dec!(1)).with_value("y", dec!(1)).with_value("y2", dec!(5)),
        InputSample::new(dec!(2)).with_value("y", dec!(2)).with_value("y2", dec!(4)),
        InputSample::new(dec!(3)).with_value("y", dec!(2)).with_value("y2", dec!(1)),
    ];
    let config = ChannelConfig::new()
        .with_channel("y", ChannelMode::Passthrough)
        .with_channel("y2", ChannelMode::Passthrough);
    let rows = resample(&samples, &config).expect("valid");
    assert_eq!(rows.len(), 3);
    for (out, input) in rows.iter().zip(&samples) {
        assert_eq!(out.original_x, Some(input.x));
        assert_eq!(out.value("y"), input.value("y"));
        assert_eq!(out.value("y2"), input.value("y2"));
    }
}

#[test]
fn single_sample_is_returned_as_is() {
    let rows = resample(&[InputSample::xy(dec!(5), dec!(9))], &ChannelConfig::y(ChannelMode::Interpolate))
        .expect("valid");
    assert_eq!(rows, vec![row(dec!(5), Some(dec!(9)), Some(dec!(5)))]);
}

#[test]
fn uniform_grid_is_idempotent() {
    let samples: Vec<_> = (0..8)
        .map(|i| InputSample::xy(Decimal::new(i * 25, 2), Decimal::new(i * i, 0)))
        .collect();
    let rows = resample(&samples, &ChannelConfig::y(ChannelMode::Interpolate)).expect("valid");
    let expected: Vec<_> = samples.iter().map(|s| row(s.x, s.value("y"), Some(s.x))).collect();
    assert_eq!(rows, expected);
}

#[test]
fn demo_points_fill_every_tenth() {
    let samples = fixtures::irregular_xy();
    let series = Resampler::new(ChannelConfig::y(ChannelMode::Interpolate)).resample(&samples).expect("valid");
    assert_eq!(series.step(), Some(dec!(0.1)));
    assert_eq!(series.len(), 61);
    assert_eq!(series.original_count(), 9);
    assert_eq!(series.synthetic_count(), 52);

    let rows = series.rows();
    assert_eq!(rows[0].x, dec!(1));
    assert_eq!(rows[60].x, dec!(7));
    assert_eq!(rows[60].original_x, Some(dec!(7)));

    // 3.789 is not on the grid; it lands on the next position, 3.8.
    let late = rows.iter().find(|r| r.original_x == Some(dec!(3.789))).expect("placed");
    assert_eq!(late.x, dec!(3.8));
    assert_eq!(late.value("y"), Some(dec!(6)));
    let late = rows.iter().find(|r| r.original_x == Some(dec!(4.23))).expect("placed");
    assert_eq!(late.x, dec!(4.3));

    // Between 2.1 (y=3) and 2.5 (y=4).
    let between = rows.iter().find(|r| r.x == dec!(2.2)).expect("grid row");
    assert!(!between.is_original());
    assert_eq!(between.value("y"), Some(dec!(3.25)));

    // Between 5 (y=8) and 7 (y=9).
    let between = rows.iter().find(|r| r.x == dec!(6.5)).expect("grid row");
    assert_eq!(between.value("y"), Some(dec!(8.75)));
}

#[test]
fn passthrough_leaves_grid_rows_empty() {
    let series = Resampler::new(ChannelConfig::y(ChannelMode::Passthrough))
        .resample(&fixtures::irregular_xy())
        .expect("valid");
    for r in series.iter() {
        assert_eq!(r.value("y").is_some(), r.is_original(), "row at {}", r.x);
    }
}

#[test]
fn interpolation_does_not_bridge_missing_values() {
    let samples = vec![
        InputSample::new(dec!(0)).with_value("y", dec!(0)).with_value("y2", dec!(0)),
        InputSample::new(dec!(1)).with_value("y", dec!(1)).with_absent("y2"),
        InputSample::new(dec!(4)).with_value("y", dec!(4)).with_value("y2", dec!(8)),
    ];
    let config = ChannelConfig::new()
        .with_channel("y", ChannelMode::Interpolate)
        .with_channel("y2", ChannelMode::Interpolate);
    let rows = resample(&samples, &config).expect("valid");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[1].value("y"), Some(dec!(1)));
    for r in &rows[2..4] {
        assert!(!r.is_original());
        assert_eq!(r.value("y"), Some(r.x));
        assert_eq!(r.value("y2"), None);
    }
    assert_eq!(rows[1].original_x, Some(dec!(1)));
    assert_eq!(rows[1].value("y2"), None);
    assert!(rows[1].channels.contains_key("y2"));
}

#[test]
fn unconfigured_channels_are_dropped_and_missing_ones_read_absent() {
    let samples = vec![
        InputSample::new(dec!(0)).with_value("y", dec!(1)).with_value("extra", dec!(3)),
        InputSample::new(dec!(1)).with_value("y", dec!(2)),
    ];
    let config = ChannelConfig::y(ChannelMode::Interpolate).with_channel("z", ChannelMode::Interpolate);
    let rows = resample(&samples, &config).expect("valid");
    assert!(rows.iter().all(|r| !r.channels.contains_key("extra")));
    assert!(rows.iter().all(|r| r.channels.get("z") == Some(&None)));
}

#[test]
fn empty_channel_set_still_yields_grid() {
    let rows = resample(&fixtures::irregular_xy(), &ChannelConfig::new()).expect("valid");
    assert_eq!(rows.len(), 61);
    assert!(rows.iter().all(|r| r.channels.is_empty()));
}

#[test]
fn grid_positions_are_rounded_but_the_seed_row_is_not() {
    let samples = vec![
        InputSample::xy(dec!(1.123456), dec!(1)),
        InputSample::xy(dec!(1.2), dec!(2)),
        InputSample::xy(dec!(1.3234567), dec!(3)),
    ];
    let rows = resample(&samples, &ChannelConfig::y(ChannelMode::Interpolate)).expect("valid");
    // step 0.076544: positions 1.2, 1.276544 (short of 1.3234567), 1.353088
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].x, dec!(1.123456));
    assert_eq!(rows[0].original_x, Some(dec!(1.123456)));
    assert_eq!(rows[1].x, dec!(1.2));
    assert_eq!(rows[2].x, dec!(1.27654));
    assert_eq!(rows[2].original_x, None);
    assert_eq!(rows[3].x, dec!(1.35309));
    assert_eq!(rows[3].original_x, Some(dec!(1.3234567)));

    let coarse = Resampler::new(ChannelConfig::y(ChannelMode::Interpolate))
        .with_options(ResampleOptions::default().with_display_scale(2))
        .resample(&samples)
        .expect("valid");
    assert_eq!(coarse.rows()[0].x, dec!(1.123456));
    assert_eq!(coarse.rows()[1].x, dec!(1.2));
    assert_eq!(coarse.rows()[2].x, dec!(1.28));
    assert_eq!(coarse.rows()[3].x, dec!(1.35));
}

#[test]
fn single_sample_keeps_full_precision() {
    let rows = resample(&[InputSample::xy(dec!(5.1234567), dec!(9))], &ChannelConfig::y(ChannelMode::Interpolate))
        .expect("valid");
    assert_eq!(rows, vec![row(dec!(5.1234567), Some(dec!(9)), Some(dec!(5.1234567)))]);
}
