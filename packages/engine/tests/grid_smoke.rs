use hexgrid_engine::geometry::hex;
use hexgrid_engine::{GridConfig, GridCore, GridModule, HexGrid};

// Only success paths here: building a JsValue panics off wasm32.

#[test]
fn facade_smoke_init_and_layout() {
    let mut grid = HexGrid::new();
    let h = grid.ptr();
    grid.init(h).unwrap();

    let layout = grid.abi_layout().unwrap();
    assert_eq!(4, layout.hexes_len_elements());
    assert_eq!(4, layout.centers_len_elements());
    assert_eq!(24, layout.corners_len_elements());
    assert_eq!(32, layout.hexes_len_bytes());
    // pointers are absolute, and truncated off wasm32, so adjacency is checked on offsets
    let b = grid.core().buffers().unwrap();
    assert_eq!(b.hexes.offset + layout.hexes_len_bytes(), b.centers.offset);
    assert_eq!(b.centers.offset + layout.centers_len_bytes(), b.corners.offset);
    assert_eq!(
        layout.centers_ptr().wrapping_sub(layout.hexes_ptr()),
        b.centers.offset - b.hexes.offset
    );

    let hexes = grid.hex_buf(h).unwrap();
    assert_eq!(layout.hexes_ptr(), hexes.ptr());
    assert_eq!(4, hexes.len());

    assert_eq!(vec![0., 0.], grid.get_origin(h).unwrap());
    assert_eq!(1., grid.get_scale(h).unwrap());
}

#[test]
fn facade_smoke_viewport() {
    let mut grid = HexGrid::new();
    let h = grid.ptr();
    grid.init(h).unwrap();

    let c = grid.core().centers().unwrap()[1];
    assert_eq!(vec![3, 3], grid.get_hex(h, c.x(), c.y()).unwrap());

    grid.zoom(h, -200., 0., 0.).unwrap();
    assert!((grid.get_scale(h).unwrap() - 2.).abs() < 1e-6);
    grid.adj_origin(h, 20., -40.).unwrap();
    assert_eq!(vec![10., -20.], grid.get_origin(h).unwrap());
    grid.adj_size(h, 0.5).unwrap();
    assert!((grid.get_scale(h).unwrap() - 1.).abs() < 1e-6);
}

#[test]
fn module_smoke_through_trait_object() {
    let config = GridConfig::from_json(
        r#"{ "shapes": [ { "kind": "line", "from": [0, 0], "to": [4, -2] } ] }"#,
    )
    .unwrap();
    let mut module: Box<dyn GridModule> = Box::new(GridCore::new(config));
    let h = module.ptr();
    module.init(h).unwrap();

    let hexes = module.hex_buf(h).unwrap();
    let corners = module.corners_buf(h).unwrap();
    assert_eq!(5, hexes.len);
    assert_eq!(30, corners.len);

    let line = module.memory().view::<[i32; 2]>(hexes).unwrap();
    assert_eq!([0, 0], line[0]);
    assert_eq!([4, -2], line[4]);
    assert_eq!(hex(4, -2).q(), line[4][0]);
}
