use willow_lib::error::LayoutError;
use willow_lib::fixtures::models::LIGHTS_PER_VINE;
use willow_lib::fixtures::parser::{read_layout, write_layout};
use willow_lib::fixtures::{generate_layout, Point3, TreeGeometry};

#[test]
fn layout_round_trips_through_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("willow_tree.json");

    let layout = generate_layout(&TreeGeometry::default());
    write_layout(&path, &layout).expect("write layout");
    let loaded = read_layout(&path, LIGHTS_PER_VINE).expect("read layout");

    assert_eq!(loaded.len(), layout.len());
    assert_eq!(loaded.num_vines(), 40);
    for (a, b) in layout.as_flat().iter().zip(loaded.as_flat()) {
        assert!(a.distance(*b) < 1e-12, "{a:?} != {b:?}");
    }
}

#[test]
fn file_is_one_entry_per_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("small.json");

    let geometry = TreeGeometry {
        branches: 2,
        vines_per_branch: 1,
        lights_per_vine: 3,
        ..TreeGeometry::new(Point3::ORIGIN, 0.6, 0.3)
    };
    write_layout(&path, &generate_layout(&geometry)).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first(), Some(&"["));
    assert_eq!(lines.last(), Some(&"]"));
    assert_eq!(lines.len(), 2 + 6);
    assert!(lines[1].starts_with("{\"point\":[0.6,0.0,"));
}

#[test]
fn reading_groups_by_lights_per_vine() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("tree.json");
    let layout = generate_layout(&TreeGeometry::default());
    write_layout(&path, &layout).unwrap();

    let loaded = read_layout(&path, LIGHTS_PER_VINE).unwrap();
    // vine 6 = branch 1, vine 1: top light is one spacing further out than vine 5
    let top5 = loaded[(5, 0)];
    let top6 = loaded[(6, 0)];
    assert!((top5.distance(top6) - 0.3).abs() < 1e-9);
    assert!(loaded[(6, 33)].distance(layout[(6, 33)]) < 1e-12);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nope.json");
    match read_layout(&path, LIGHTS_PER_VINE) {
        Err(LayoutError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
