use kernel_bridge::{MockKernel, MOCK_STEP_TEXT};
use machining_engine::{EngineError, Session};
use swarf_types::{
    AxisDef, ErrorCode, Feature, OutputOptions, ProfilePoint, ShapeId, StockKind, StockSpec,
    TurnPass,
};

fn box_stock() -> StockSpec {
    StockSpec {
        kind: StockKind::Box,
        p1: 10.0,
        p2: 10.0,
        p3: 10.0,
        axis: AxisDef::world(),
    }
}

fn through_drill() -> Feature {
    Feature::Drill {
        radius: 1.0,
        depth: 20.0,
        axis: AxisDef {
            origin: [5.0, 5.0, -5.0],
            dir: [0.0, 0.0, 1.0],
            xdir: [1.0, 0.0, 0.0],
        },
    }
}

#[test]
fn stock_gets_the_first_handle() {
    let mut session = Session::new(MockKernel::new());
    let id = session.create_stock(&box_stock()).unwrap();
    assert_eq!(id, ShapeId(1));
    assert_eq!(session.registry().len(), 1);
}

#[test]
fn non_positive_stock_dimensions_are_invalid() {
    let mut session = Session::new(MockKernel::new());

    let mut spec = box_stock();
    spec.p2 = 0.0;
    let err = session.create_stock(&spec).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);

    let cyl = StockSpec {
        kind: StockKind::Cylinder,
        p1: -1.0,
        p2: 5.0,
        p3: 0.0,
        axis: AxisDef::world(),
    };
    let err = session.create_stock(&cyl).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);

    assert!(session.registry().is_empty());
}

#[test]
fn degenerate_stock_axis_is_a_kernel_exception() {
    let mut session = Session::new(MockKernel::new());
    let mut spec = box_stock();
    spec.axis.dir = [0.0; 3];
    let err = session.create_stock(&spec).unwrap_err();
    assert_eq!(err.code(), ErrorCode::KernelException);
}

#[test]
fn feature_registers_result_then_delta() {
    let mut session = Session::new(MockKernel::new());
    let stock = session.create_stock(&box_stock()).unwrap();

    let outcome = session.apply_feature(stock, &through_drill()).unwrap();
    assert_eq!(outcome.result, ShapeId(2));
    assert_eq!(outcome.delta, ShapeId(3));

    // Stock remains addressable alongside both new shapes.
    assert_eq!(session.registry().len(), 3);
    assert!(session.registry().find(stock).is_some());
}

#[test]
fn unknown_stock_handle_is_shape_not_found() {
    let mut session = Session::new(MockKernel::new());
    let err = session
        .apply_feature(ShapeId(99), &through_drill())
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ShapeNotFound);
    assert!(matches!(err, EngineError::ShapeNotFound { id: 99 }));
}

#[test]
fn invalid_feature_leaves_registry_and_kernel_clean() {
    let mut session = Session::new(MockKernel::new());
    let stock = session.create_stock(&box_stock()).unwrap();

    let bad = Feature::TurnId {
        pass: TurnPass::Profile {
            points: vec![ProfilePoint { z: 0.0, radius: 5.0 }],
        },
        axis: AxisDef::world(),
    };
    let err = session.apply_feature(stock, &bad).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
    assert_eq!(session.registry().len(), 1);
    assert_eq!(session.kernel().live_solids(), 1);
}

#[test]
fn failed_cut_surfaces_as_boolean_failed() {
    let mut session = Session::new(MockKernel::new());
    let stock = session.create_stock(&box_stock()).unwrap();

    session.kernel_mut().fail_next_cut = true;
    let err = session.apply_feature(stock, &through_drill()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::BooleanFailed);
    assert_eq!(session.kernel().live_solids(), 1);
}

#[test]
fn failed_delta_surfaces_as_delta_failed() {
    let mut session = Session::new(MockKernel::new());
    let stock = session.create_stock(&box_stock()).unwrap();

    session.kernel_mut().fail_next_common = true;
    let err = session.apply_feature(stock, &through_drill()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::DeltaFailed);
    assert_eq!(session.kernel().live_solids(), 1);
}

#[test]
fn delete_frees_the_kernel_solid_exactly_once() {
    let mut session = Session::new(MockKernel::new());
    let stock = session.create_stock(&box_stock()).unwrap();

    session.delete_shape(stock).unwrap();
    assert_eq!(session.kernel().live_solids(), 0);

    let err = session.delete_shape(stock).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ShapeNotFound);
}

#[test]
fn export_unknown_handle_is_shape_not_found() {
    let mut session = Session::new(MockKernel::new());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.step");

    for options in [OutputOptions::step(), OutputOptions::stl(0.1, 0.5, false)] {
        let err = session
            .export_shape(ShapeId(5), &path, &options)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ShapeNotFound);
    }
    assert!(!path.exists());
}

#[test]
fn step_export_writes_the_transfer_text() {
    let mut session = Session::new(MockKernel::new());
    let stock = session.create_stock(&box_stock()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stock.step");

    session
        .export_shape(stock, &path, &OutputOptions::step())
        .unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), MOCK_STEP_TEXT);
}

#[test]
fn stl_export_writes_a_binary_file() {
    let mut session = Session::new(MockKernel::new());
    let stock = session.create_stock(&box_stock()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stock.stl");

    session
        .export_shape(stock, &path, &OutputOptions::stl(0.1, 0.5, true))
        .unwrap();
    // One mock triangle: header + count + 50 bytes.
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 80 + 4 + 50);
}

#[test]
fn failed_tessellation_is_export_failed() {
    let mut session = Session::new(MockKernel::new());
    let stock = session.create_stock(&box_stock()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stock.stl");

    session.kernel_mut().fail_tessellation = true;
    let err = session
        .export_shape(stock, &path, &OutputOptions::stl(0.1, 0.5, false))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ExportFailed);
    assert!(!path.exists());
}

#[test]
fn unwritable_path_is_export_failed() {
    let mut session = Session::new(MockKernel::new());
    let stock = session.create_stock(&box_stock()).unwrap();

    let err = session
        .export_shape(
            stock,
            "/nonexistent-dir/stock.step",
            &OutputOptions::step(),
        )
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ExportFailed);
}
