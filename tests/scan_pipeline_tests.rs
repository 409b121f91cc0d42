//! End-to-end scans over rendered QR symbols
//!
//! Each test renders real module grids into images, feeds them through the
//! still, live or batch entry point and checks the verified outcome.

mod common;

use common::{
    NUMERIC_FOREIGN, PRODAPP_7, PRODAPP_42_EXTRA, blank, png_bytes, render_grid, save_png, widget,
};
use prod_scan::{
    DecodeError, DirectorySink, Frame, FollowUp, ImageSequenceSource, JsonRegistry, LiveStop,
    MemoryRegistry, MessageKind, ScanOutcome, Scanner, decode_still,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn scanner() -> Scanner<MemoryRegistry> {
    Scanner::new(MemoryRegistry::from_records([widget()]).expect("registry"))
}

#[test]
fn test_authorized_product_fields_verbatim() {
    let bytes = png_bytes(render_grid(&PRODAPP_42_EXTRA, 8));
    let outcome = scanner().scan_still(&bytes).expect("decodable image");

    let ScanOutcome::Authorized(record) = &outcome else {
        panic!("expected Authorized, got {:?}", outcome);
    };
    assert_eq!(record.id, 42);
    assert_eq!(record.name, "Widget");
    assert_eq!(record.barcode, "0123456789");
    assert_eq!(record.expiry_date, "2026-01-01");
    assert_eq!(record.status.as_str(), "AUTHORIZED");

    assert_eq!(outcome.kind(), MessageKind::Success);
    assert_eq!(outcome.headline(), "Product is Authorized");
    assert_eq!(outcome.details()[0], "Product Name: Widget");
    assert_eq!(outcome.follow_up(), Some(FollowUp::Acknowledge));
}

#[test]
fn test_unknown_product_is_not_found() {
    let bytes = png_bytes(render_grid(&PRODAPP_7, 8));
    let outcome = scanner().scan_still(&bytes).expect("decodable image");
    assert_eq!(outcome, ScanOutcome::NotFound { id: 7 });
    assert_eq!(outcome.kind(), MessageKind::Info);
    assert_eq!(outcome.follow_up(), None);
}

#[test]
fn test_counterfeit_status_offers_report() {
    let mut row = widget();
    row.status = "REVOKED".into();
    let scanner = Scanner::new(MemoryRegistry::from_records([row]).expect("registry"));

    let bytes = png_bytes(render_grid(&PRODAPP_42_EXTRA, 8));
    let outcome = scanner.scan_still(&bytes).expect("decodable image");
    assert!(matches!(outcome, ScanOutcome::Counterfeit(ref r) if r.status.as_str() == "REVOKED"));
    assert_eq!(outcome.kind(), MessageKind::Warning);
    assert_eq!(outcome.follow_up(), Some(FollowUp::Report));
}

#[test]
fn test_foreign_symbol() {
    let bytes = png_bytes(render_grid(&NUMERIC_FOREIGN, 8));
    let outcome = scanner().scan_still(&bytes).expect("decodable image");
    assert_eq!(
        outcome,
        ScanOutcome::ForeignSymbol {
            payload: "4376471154038".to_string()
        }
    );
}

#[test]
fn test_blank_image_has_no_symbol() {
    let bytes = png_bytes(blank(120, 90));
    assert!(decode_still(&bytes).expect("decodable image").is_empty());
    assert_eq!(scanner().scan_still(&bytes).expect("decodable image"), ScanOutcome::NoSymbol);
}

#[test]
fn test_garbage_bytes_are_decode_error() {
    let result = scanner().scan_still(b"definitely not an image");
    assert!(matches!(result, Err(DecodeError::Image(_))));
    assert!(matches!(scanner().scan_still(&[]), Err(DecodeError::Empty)));
}

#[test]
fn test_json_registry_end_to_end() {
    let tmp = TempDir::new().expect("create temp dir");
    let path = tmp.path().join("scanprods.json");
    std::fs::write(
        &path,
        r#"{"products": [
            {"id": 42, "product_name": "Widget", "barcode": "0123456789",
             "expiry_date": "2026-01-01", "status": "AUTHORIZED"},
            {"id": 9, "product_name": "Gadget", "barcode": "555",
             "expiry_date": "2027-05-05", "status": "COUNTERFEIT"}
        ]}"#,
    )
    .expect("write registry");

    let registry = JsonRegistry::open(&path).expect("open registry");
    assert_eq!(registry.len(), 2);
    let scanner = Scanner::new(registry);

    let bytes = png_bytes(render_grid(&PRODAPP_42_EXTRA, 6));
    assert_eq!(
        scanner.scan_still(&bytes).expect("decodable image"),
        ScanOutcome::Authorized(widget())
    );
    assert!(matches!(
        scanner.verifier().verify_payload(b"PRODAPP: 9"),
        ScanOutcome::Counterfeit(ref r) if r.name == "Gadget"
    ));
}

#[test]
fn test_live_replay_stops_on_first_symbol() {
    let tmp = TempDir::new().expect("create temp dir");
    let frames = tmp.path().join("frames");
    std::fs::create_dir(&frames).expect("create frame dir");
    save_png(&blank(160, 120), &frames.join("frame_00.png"));
    save_png(&blank(160, 120), &frames.join("frame_01.png"));
    save_png(&render_grid(&PRODAPP_42_EXTRA, 6), &frames.join("frame_02.png"));
    save_png(&render_grid(&PRODAPP_7, 6), &frames.join("frame_03.png"));

    let source = ImageSequenceSource::open(&frames).expect("open frames");
    let mut sink = DirectorySink::create(tmp.path().join("overlay")).expect("create sink");
    let (live, outcome) = scanner().scan_live_verified(source, &mut sink);

    assert!(matches!(live.stop, LiveStop::Decoded));
    assert_eq!(live.frames, 3);
    assert_eq!(sink.written(), 3);
    assert!(matches!(outcome, ScanOutcome::Authorized(_)));

    // The decoded frame is saved with its outline drawn in green
    let symbol = live.symbol.expect("decoded symbol");
    let saved = image::open(tmp.path().join("overlay/frame_00002.png"))
        .expect("read overlay")
        .to_rgb8();
    let corner = symbol.polygon[0];
    assert_eq!(saved.get_pixel(corner.x as u32, corner.y as u32).0, [0, 255, 0]);
}

#[test]
fn test_live_replay_without_symbol() {
    let tmp = TempDir::new().expect("create temp dir");
    save_png(&blank(80, 60), &tmp.path().join("a.png"));
    save_png(&blank(80, 60), &tmp.path().join("b.png"));

    let source = ImageSequenceSource::open(tmp.path()).expect("open frames");
    let mut shown = 0usize;
    let (live, outcome) = scanner().scan_live_verified(source, &mut |_: &Frame| shown += 1);

    assert!(matches!(live.stop, LiveStop::Exhausted));
    assert_eq!(live.frames, 2);
    assert_eq!(shown, 2);
    assert_eq!(outcome, ScanOutcome::NoSymbol);
}

#[test]
fn test_batch_preserves_input_order() {
    let tmp = TempDir::new().expect("create temp dir");
    let paths: Vec<PathBuf> = ["d.png", "a.png", "c.png", "b.png"]
        .iter()
        .map(|name| tmp.path().join(name))
        .collect();
    save_png(&render_grid(&PRODAPP_7, 5), &paths[0]);
    save_png(&render_grid(&PRODAPP_42_EXTRA, 5), &paths[1]);
    save_png(&blank(60, 60), &paths[2]);
    std::fs::write(&paths[3], b"not a png").expect("write garbage");

    let items = scanner().scan_batch(&paths);
    assert_eq!(items.len(), 4);
    for (item, path) in items.iter().zip(&paths) {
        assert_eq!(&item.path, path);
    }
    assert_eq!(items[0].outcome.as_ref().ok(), Some(&ScanOutcome::NotFound { id: 7 }));
    assert!(matches!(items[1].outcome, Ok(ScanOutcome::Authorized(_))));
    assert_eq!(items[2].outcome.as_ref().ok(), Some(&ScanOutcome::NoSymbol));
    assert!(items[3].outcome.is_err());
}
