use egui::Color32;

use telemon::plotcfg::{derive, AxisSide, SAMPLES_PER_SERIES};
use telemon::{AxisScale, Bound, PlotModel};

#[test]
fn default_channel_set_matches_expectations() {
    let model = PlotModel::with_default_channels();
    let ids: Vec<&str> = model
        .settings
        .channels
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, ["temperature", "pressure", "humidity"]);
    assert!(!model.settings.channels[2].enabled, "humidity starts disabled");
    assert!(model.settings.show_hover_line);
    assert!(model.settings.x_range.is_auto());
}

#[test]
fn toggle_flips_only_the_target_channel() {
    let mut model = PlotModel::with_default_channels();
    let before = model.settings.clone();

    model.toggle_channel("humidity");
    let after = &model.settings;
    for (b, a) in before.channels.iter().zip(after.channels.iter()) {
        if a.id == "humidity" {
            assert!(a.enabled);
            assert_eq!(a.color, b.color);
            assert_eq!(a.range, b.range);
        } else {
            assert_eq!(a, b);
        }
    }

    let active: Vec<&str> = model.active_channels().map(|c| c.id.as_str()).collect();
    assert_eq!(
        active,
        ["temperature", "pressure", "humidity"],
        "toggled channel joins at its configured position"
    );
}

#[test]
fn malformed_range_input_leaves_state_untouched() {
    let mut model = PlotModel::with_default_channels();
    let before = model.settings.clone();

    model.set_channel_range("temperature", Bound::Min, "abc");
    model.set_x_range(Bound::Max, "12,5");
    model.set_x_range(Bound::Min, "1e10000");
    assert_eq!(model.settings, before);
}

#[test]
fn range_input_parse_contract() {
    let mut model = PlotModel::with_default_channels();

    model.set_channel_range("temperature", Bound::Min, "12.5");
    assert_eq!(model.settings.channels[0].range.min, Some(12.5));

    model.set_channel_range("temperature", Bound::Min, "");
    assert_eq!(model.settings.channels[0].range.min, None);

    model.set_x_range(Bound::Max, "240");
    assert_eq!(model.settings.x_range.max, Some(240.0));
    model.set_x_range(Bound::Max, "");
    assert_eq!(model.settings.x_range.max, None);
}

#[test]
fn edits_on_unknown_channels_are_silent_noops() {
    let mut model = PlotModel::with_default_channels();
    let before = model.settings.clone();

    model.toggle_channel("ghost");
    model.set_color("ghost", Color32::RED);
    model.set_scale("ghost", AxisScale::Log);
    model.set_channel_range("ghost", Bound::Min, "1");
    assert_eq!(model.settings, before);
}

#[test]
fn preset_launch_gives_each_channel_its_own_slot_and_color() {
    let ids = vec![
        "imu.accel_x".to_string(),
        "imu.accel_y".to_string(),
        "imu.accel_z".to_string(),
    ];
    let model = PlotModel::from_channel_ids(&ids, AxisScale::Log);
    let channels = &model.settings.channels;
    assert_eq!(channels.len(), 3);
    for ch in channels {
        assert!(ch.enabled);
        assert_eq!(ch.scale, AxisScale::Log);
        assert!(ch.range.is_auto());
    }
    assert_eq!(channels[0].axis_id, "y");
    assert_eq!(channels[1].axis_id, "y2");
    assert_eq!(channels[2].axis_id, "y3");
    assert_ne!(channels[0].color, channels[1].color);
    assert_ne!(channels[1].color, channels[2].color);
    // labels resolve through the catalog
    assert_eq!(channels[0].label, "IMU Acceleration X");
}

#[test]
fn derivation_covers_active_channels_in_order() {
    let model = PlotModel::with_default_channels();
    let desc = derive(&model.settings);

    assert_eq!(desc.series.len(), 2, "humidity is disabled");
    assert_eq!(desc.series[0].label, "Temperature (°C)");
    assert_eq!(desc.series[1].label, "Pressure (kPa)");
    for s in &desc.series {
        assert_eq!(s.points.len(), SAMPLES_PER_SERIES);
        assert!(s.hover, "hover defaults on");
    }
    assert_eq!(desc.axes.len(), 2);
    assert_eq!(desc.axes[0].side, AxisSide::Primary);
    assert!(matches!(desc.axes[1].side, AxisSide::Opposite { .. }));
}

#[test]
fn derivation_is_deterministic() {
    let model = PlotModel::with_default_channels();
    assert_eq!(derive(&model.settings), derive(&model.settings));
}

#[test]
fn hover_disabled_propagates_to_every_series() {
    let mut model = PlotModel::with_default_channels();
    model.set_hover_line(false);
    let desc = derive(&model.settings);
    assert!(desc.series.iter().all(|s| !s.hover));
}

#[test]
fn axis_fallback_uses_first_configured_channel() {
    let mut model = PlotModel::with_default_channels();
    model.toggle_channel("temperature");
    model.toggle_channel("pressure");
    assert_eq!(model.active_channels().count(), 0);

    let desc = derive(&model.settings);
    assert!(desc.series.is_empty());
    assert_eq!(desc.axes.len(), 1, "renderer always gets at least one axis");
    assert_eq!(desc.axes[0].id, "y");
    assert_eq!(desc.axes[0].label, "Temperature (°C)");
}

#[test]
fn empty_channel_list_derives_empty_descriptor() {
    let model = PlotModel::from_channel_ids(&[], AxisScale::Linear);
    let desc = derive(&model.settings);
    assert!(desc.series.is_empty());
    assert!(desc.axes.is_empty());
}

#[test]
fn shared_axis_slots_produce_one_axis() {
    let mut model = PlotModel::with_default_channels();
    // move pressure onto temperature's axis slot
    model.settings.channels[1].axis_id = "y".to_string();
    let desc = derive(&model.settings);
    assert_eq!(desc.axes.len(), 1);
    assert_eq!(desc.axes[0].label, "Temperature (°C)", "first owner wins");
}

#[test]
fn x_range_flows_into_descriptor() {
    let mut model = PlotModel::with_default_channels();
    model.set_x_range(Bound::Min, "10");
    model.set_x_range(Bound::Max, "50");
    let desc = derive(&model.settings);
    assert_eq!(desc.x_axis.range.min, Some(10.0));
    assert_eq!(desc.x_axis.range.max, Some(50.0));
}
