use hexgrid::{
    GridConfig, GridLayout, HexGridError, HexagonOrientation, HexagonalGrid,
    HexagonalGridBuilder, MAX_GRID_SIZE,
};

#[test]
fn test_config_validation() {
    let config = GridConfig {
        width: 0,     // invalid
        height: 0,    // invalid
        radius: -1.0, // invalid
        orientation: HexagonOrientation::PointyTop,
        layout: GridLayout::Rectangular,
    };

    let err = HexagonalGridBuilder::<()>::from_config(config)
        .build()
        .unwrap_err();
    let validation_errors = match err {
        HexGridError::InvalidConfig(errors) => errors,
        other => panic!("Expected invalid config, got {:?}", other),
    };
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["height", "radius", "width"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_config_size_limit() {
    for size in [MAX_GRID_SIZE + 1, 70_000, u32::MAX] {
        let err = HexagonalGridBuilder::<()>::new()
            .width(size)
            .height(size)
            .layout(GridLayout::Trapezoid)
            .build()
            .unwrap_err();
        let validation_errors = match err {
            HexGridError::InvalidConfig(errors) => errors,
            other => panic!("Expected invalid config, got {:?}", other),
        };
        let mut error_fields = validation_errors
            .errors()
            .keys()
            .copied()
            .collect::<Vec<&str>>();
        error_fields.sort_unstable();
        assert_eq!(error_fields, vec!["height", "width"], "size {}", size);
    }
}

#[test]
fn test_layout_validation() {
    // Hexagonal grids need an odd, square size
    for (width, height) in [(4, 4), (5, 7)] {
        let result = HexagonalGridBuilder::<()>::new()
            .width(width)
            .height(height)
            .layout(GridLayout::Hexagonal)
            .build();
        match result {
            Err(HexGridError::InvalidLayout {
                layout,
                width: w,
                height: h,
            }) => {
                assert_eq!(layout, "HEXAGONAL");
                assert_eq!((w, h), (width, height));
            }
            other => panic!("Expected invalid layout, got {:?}", other),
        }
    }

    let result = HexagonalGridBuilder::<()>::new()
        .width(3)
        .height(4)
        .layout(GridLayout::Triangular)
        .build();
    assert!(matches!(result, Err(HexGridError::InvalidLayout { .. })));

    // Same sizes are fine for other layouts
    let grid: HexagonalGrid<()> = HexagonalGridBuilder::new()
        .width(4)
        .height(4)
        .layout(GridLayout::Trapezoid)
        .build()
        .unwrap();
    assert_eq!(grid.len(), 16);
}

#[test]
fn test_config_from_json() {
    let config: GridConfig = serde_json::from_str(
        r#"{
            "width": 5,
            "height": 5,
            "radius": 12.5,
            "orientation": "flat_top",
            "layout": "hexagonal"
        }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        GridConfig {
            width: 5,
            height: 5,
            radius: 12.5,
            orientation: HexagonOrientation::FlatTop,
            layout: GridLayout::Hexagonal,
        }
    );
    let grid: HexagonalGrid<()> =
        HexagonalGridBuilder::from_config(config).build().unwrap();
    assert_eq!(grid.len(), 19);

    // Missing fields fall back to the defaults
    let config: GridConfig = serde_json::from_str(r#"{"width": 3}"#).unwrap();
    assert_eq!(
        config,
        GridConfig {
            width: 3,
            ..GridConfig::default()
        }
    );

    // Unknown layouts are rejected
    assert!(
        serde_json::from_str::<GridConfig>(r#"{"layout": "circle"}"#).is_err()
    );
}
