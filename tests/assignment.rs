use telemon::assignment::{AssignmentModel, ChannelAssignment};
use telemon::catalog::CATALOG;
use telemon::ShellError;

/// The three-way null invariant: category, unit and secondary are all unset
/// together, or category and unit are both set.
fn invariant_holds(a: &ChannelAssignment) -> bool {
    match a.category_id {
        None => a.unit.is_none() && a.secondary_id.is_none(),
        Some(_) => a.unit.is_some(),
    }
}

fn assert_invariant(model: &AssignmentModel) {
    for a in model.assignments() {
        assert!(
            invariant_holds(a),
            "invariant violated for channel {}: {:?}",
            a.channel.id,
            a
        );
    }
}

#[test]
fn initialization_infers_all_catalog_channels() {
    let model = AssignmentModel::new();
    assert_eq!(model.assignments().len(), CATALOG.channels().len());
    // every built-in channel name/id contains a mapping keyword
    assert_eq!(model.assigned_count(), CATALOG.channels().len());
    assert_eq!(model.pending_channels().count(), 0);
    // the secondary metric is never auto-assigned
    for a in model.assignments() {
        assert!(a.secondary_id.is_none());
    }
    assert_invariant(&model);
}

#[test]
fn bus_voltage_infers_category_and_default_unit() {
    let model = AssignmentModel::new();
    let a = model
        .assignments()
        .iter()
        .find(|a| a.channel.id == "power.bus_voltage")
        .expect("catalog channel missing");
    assert_eq!(a.category_id, Some("bus_voltage"));
    assert_eq!(a.unit.as_deref(), Some("V"));
}

#[test]
fn reset_all_is_idempotent() {
    let mut model = AssignmentModel::new();
    model.set_category("engine.temp_A", None).unwrap();
    model.set_unit("engine.temp_B", "K").unwrap();
    model.set_secondary("imu.accel_x", "accel_x_peak").unwrap();

    model.reset_all();
    let first: Vec<_> = model.assignments().to_vec();
    model.reset_all();
    let second: Vec<_> = model.assignments().to_vec();
    assert_eq!(first, second, "two resets must yield identical state");
    assert_invariant(&model);
}

#[test]
fn clearing_category_clears_unit_and_secondary() {
    let mut model = AssignmentModel::new();
    model.set_secondary("imu.accel_x", "accel_x_rms").unwrap();
    model.set_category("imu.accel_x", None).unwrap();

    let a = &model.assignments()[4];
    assert_eq!(a.channel.id, "imu.accel_x");
    assert_eq!(a.category_id, None);
    assert_eq!(a.unit, None);
    assert_eq!(a.secondary_id, None);
    assert_eq!(model.pending_channels().count(), 1);
    assert_invariant(&model);
}

#[test]
fn category_change_resets_unit_and_secondary() {
    let mut model = AssignmentModel::new();
    model.set_unit("imu.accel_x", "g").unwrap();
    model.set_secondary("imu.accel_x", "accel_x_peak").unwrap();

    // accel_y also supports secondary metrics, but the change must reset it
    model.set_category("imu.accel_x", Some("accel_y")).unwrap();
    let a = model
        .assignments()
        .iter()
        .find(|a| a.channel.id == "imu.accel_x")
        .unwrap();
    assert_eq!(a.category_id, Some("accel_y"));
    assert_eq!(a.unit.as_deref(), Some("m/s²"), "unit resets to the default");
    assert_eq!(a.secondary_id, None);
    assert_invariant(&model);
}

#[test]
fn reselecting_same_category_preserves_valid_secondary() {
    let mut model = AssignmentModel::new();
    model.set_secondary("imu.accel_x", "accel_x_peak").unwrap();
    model.set_category("imu.accel_x", Some("accel_x")).unwrap();

    let a = model
        .assignments()
        .iter()
        .find(|a| a.channel.id == "imu.accel_x")
        .unwrap();
    assert_eq!(a.secondary_id.as_deref(), Some("accel_x_peak"));
}

#[test]
fn reselecting_same_category_drops_stale_secondary() {
    let mut model = AssignmentModel::new();
    // set_secondary performs no validation, so a stale id can be present
    model.set_secondary("imu.accel_x", "accel_y_peak").unwrap();
    model.set_category("imu.accel_x", Some("accel_x")).unwrap();

    let a = model
        .assignments()
        .iter()
        .find(|a| a.channel.id == "imu.accel_x")
        .unwrap();
    assert_eq!(a.secondary_id, None);
    assert_invariant(&model);
}

#[test]
fn assigning_non_secondary_category_clears_secondary() {
    let mut model = AssignmentModel::new();
    model.set_secondary("imu.accel_z", "accel_z_rms").unwrap();
    model.set_category("imu.accel_z", Some("temperature")).unwrap();

    let a = model
        .assignments()
        .iter()
        .find(|a| a.channel.id == "imu.accel_z")
        .unwrap();
    assert_eq!(a.category_id, Some("temperature"));
    assert_eq!(a.unit.as_deref(), Some("°C"));
    assert_eq!(a.secondary_id, None);
}

#[test]
fn empty_secondary_id_clears() {
    let mut model = AssignmentModel::new();
    model.set_secondary("imu.accel_y", "accel_y_rms").unwrap();
    model.set_secondary("imu.accel_y", "").unwrap();
    let a = model
        .assignments()
        .iter()
        .find(|a| a.channel.id == "imu.accel_y")
        .unwrap();
    assert_eq!(a.secondary_id, None);
}

#[test]
fn unknown_channel_id_is_not_found() {
    let mut model = AssignmentModel::new();
    let err = model.set_category("ghost.channel", None).unwrap_err();
    assert!(matches!(err, ShellError::ChannelNotFound { .. }));
    assert!(model.set_unit("ghost.channel", "V").is_err());
    assert!(model.set_secondary("ghost.channel", "x").is_err());
}
