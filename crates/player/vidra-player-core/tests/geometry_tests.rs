use vidra_player_core::DisplayGeometry;

/// it should fit landscape media to the container width and center vertically
#[test]
fn landscape_fits_to_width() {
    let geometry = DisplayGeometry::fullscreen(1920.0, 1080.0, 800.0, 800.0);
    assert_eq!(geometry.width, 800.0);
    assert_eq!(geometry.height, 450.0);
    assert_eq!(geometry.margin_top, 175.0);
    assert_eq!(geometry.margin_left, 0.0);
}

/// it should fit portrait media to the container height and center horizontally
#[test]
fn portrait_fits_to_height() {
    let geometry = DisplayGeometry::fullscreen(1080.0, 1920.0, 800.0, 800.0);
    assert_eq!(geometry.height, 800.0);
    assert_eq!(geometry.width, 450.0);
    assert_eq!(geometry.margin_left, 175.0);
    assert_eq!(geometry.margin_top, 0.0);
}

/// it should fill the container exactly when the aspect ratios match
#[test]
fn matching_aspect_fills_container() {
    let geometry = DisplayGeometry::fullscreen(1280.0, 720.0, 1920.0, 1080.0);
    assert_eq!(geometry.width, 1920.0);
    assert_eq!(geometry.height, 1080.0);
    assert_eq!(geometry.margin_left, 0.0);
    assert_eq!(geometry.margin_top, 0.0);
}

/// it should pass the configured size through when windowed
#[test]
fn windowed_passthrough() {
    let geometry = DisplayGeometry::windowed(560.0, 315.0);
    assert_eq!(geometry.width, 560.0);
    assert_eq!(geometry.height, 315.0);
    assert_eq!(geometry.margin_left, 0.0);
    assert_eq!(geometry.margin_top, 0.0);
}

/// it should fill the container while intrinsic dimensions are unknown
#[test]
fn degenerate_intrinsic_fills_container() {
    let geometry = DisplayGeometry::fullscreen(0.0, 0.0, 800.0, 600.0);
    assert_eq!(geometry.width, 800.0);
    assert_eq!(geometry.height, 600.0);
    assert_eq!(geometry.margin_left, 0.0);
    assert_eq!(geometry.margin_top, 0.0);
}
