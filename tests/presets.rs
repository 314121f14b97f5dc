use telemon::presets::{self, StoredPreset};
use telemon::storage::{KvStore, MemoryStore};
use telemon::{built_in_presets, merge, AxisScale, Preset};

fn builtin(id: &'static str, channels: &[&str]) -> Preset {
    Preset {
        id,
        title: "Test Preset",
        description: "A preset for merge tests.",
        icon: egui_phosphor::regular::GEAR,
        channels: channels.iter().map(|s| s.to_string()).collect(),
        y_scale: AxisScale::Linear,
    }
}

#[test]
fn merge_overrides_by_id_and_drops_unknown_ids() {
    let builtins = vec![builtin("p1", &["a"])];
    let stored = vec![
        StoredPreset {
            id: "p1".to_string(),
            channels: vec!["a".to_string(), "b".to_string()],
            y_scale: AxisScale::Log,
        },
        StoredPreset {
            id: "unknown".to_string(),
            channels: vec![],
            y_scale: AxisScale::Linear,
        },
    ];

    let merged = merge(builtins, &stored);
    assert_eq!(merged.len(), 1, "unknown id dropped, no duplicate p1");
    assert_eq!(merged[0].id, "p1");
    assert_eq!(merged[0].channels, ["a", "b"]);
    assert_eq!(merged[0].y_scale, AxisScale::Log);
    // built-in metadata survives the override
    assert_eq!(merged[0].title, "Test Preset");
}

#[test]
fn merge_keeps_defaults_for_builtins_missing_from_storage() {
    let builtins = vec![builtin("p1", &["a"]), builtin("p2", &["x", "y"])];
    let stored = vec![StoredPreset {
        id: "p1".to_string(),
        channels: vec![],
        y_scale: AxisScale::Log,
    }];

    let merged = merge(builtins, &stored);
    assert_eq!(merged.len(), 2);
    assert!(merged[0].channels.is_empty());
    assert_eq!(merged[1].channels, ["x", "y"]);
    assert_eq!(merged[1].y_scale, AxisScale::Linear);
}

#[test]
fn load_without_stored_value_yields_builtin_set() {
    let store = MemoryStore::new();
    assert_eq!(presets::load(&store), built_in_presets());
}

#[test]
fn load_with_malformed_value_falls_back_to_builtins() {
    let mut store = MemoryStore::new();
    store.set(presets::STORAGE_KEY, "{not json".to_string());
    assert_eq!(presets::load(&store), built_in_presets());
}

#[test]
fn save_persists_only_the_storable_subset() {
    let mut store = MemoryStore::new();
    let mut set = built_in_presets();
    set[0].y_scale = AxisScale::Log;
    presets::save(&mut store, &set);

    let raw = store.get(presets::STORAGE_KEY).expect("value written");
    assert!(raw.contains("\"engine-performance\""));
    assert!(raw.contains("\"yScale\":\"log\""));
    assert!(
        !raw.contains("Engine Performance"),
        "titles are never persisted"
    );
}

#[test]
fn save_then_load_round_trips_overrides() {
    let mut store = MemoryStore::new();
    let mut set = built_in_presets();
    set[1].channels = vec!["imu.accel_x".to_string()];
    set[1].y_scale = AxisScale::Log;
    presets::save(&mut store, &set);

    let loaded = presets::load(&store);
    assert_eq!(loaded.len(), built_in_presets().len());
    assert_eq!(loaded[1].channels, ["imu.accel_x"]);
    assert_eq!(loaded[1].y_scale, AxisScale::Log);
    // metadata still comes from the built-in set
    assert_eq!(loaded[1].title, "Vibration Monitor");
    assert_eq!(loaded[1].icon, egui_phosphor::regular::SPARKLE);
}
