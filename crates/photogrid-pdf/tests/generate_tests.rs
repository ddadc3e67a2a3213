use photogrid_layout::{ImageItem, Rotation, SourceRef, WorkingSet};
use photogrid_pdf::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write small PNG fixtures with distinct sizes, named so that name order
/// equals creation order.
fn write_fixtures(dir: &TempDir, count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|i| {
            let path = dir.path().join(format!("img{i}.png"));
            let (w, h) = if i % 2 == 0 { (40, 30) } else { (20, 50) };
            image::RgbImage::from_pixel(w, h, image::Rgb([120, 40, (i * 30) as u8]))
                .save(&path)
                .unwrap();
            path
        })
        .collect()
}

#[tokio::test]
async fn test_probe_reads_dimensions() {
    let dir = TempDir::new().unwrap();
    let paths = write_fixtures(&dir, 2);

    let item = probe(0, &paths[0]).unwrap();
    assert_eq!((item.width_px, item.height_px), (40, 30));
    // PNG fixtures carry no EXIF block, so orientation defaults to none
    assert_eq!(item.rotation, Rotation::None);
    assert_eq!(item.source.name, "img0.png");
}

#[tokio::test]
async fn test_load_images_sorted_by_name() {
    let dir = TempDir::new().unwrap();
    let mut paths = write_fixtures(&dir, 3);
    paths.reverse();

    let loaded = load_images(paths, SortOrder::Name).await.unwrap();
    let names: Vec<_> = loaded
        .working_set
        .iter()
        .map(|i| i.source.name.clone())
        .collect();
    assert_eq!(names, vec!["img0.png", "img1.png", "img2.png"]);

    // SourceRef indices point into the sorted path list
    for (i, item) in loaded.working_set.iter().enumerate() {
        assert_eq!(item.source.index, i);
        assert!(loaded.paths[i].ends_with(&item.source.name));
    }
}

#[tokio::test]
async fn test_generate_five_images_makes_two_pages() {
    let dir = TempDir::new().unwrap();
    let paths = write_fixtures(&dir, 5);
    let loaded = load_images(paths, SortOrder::Name).await.unwrap();

    let output = dir.path().join("grid.pdf");
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let summary = generate_pdf(&loaded, &GridOptions::default(), &output, Some(tx))
        .await
        .unwrap();

    assert_eq!(summary.images, 5);
    assert_eq!(summary.pages, 2);
    assert!(summary.skipped.is_empty());

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    // Progress events arrive in order and finish at (total, total)
    let mut events = Vec::new();
    while let Ok(p) = rx.try_recv() {
        events.push((p.completed, p.total));
    }
    assert_eq!(events.len(), 5);
    assert_eq!(events.last(), Some(&(5, 5)));
}

#[tokio::test]
async fn test_generate_accepts_jpeg_sources() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("photo.jpg");
    image::RgbImage::from_pixel(32, 24, image::Rgb([200, 10, 10]))
        .save(&path)
        .unwrap();
    let loaded = load_images(vec![path], SortOrder::Unsorted).await.unwrap();

    let output = dir.path().join("one.pdf");
    let summary = generate_pdf(&loaded, &GridOptions::default(), &output, None)
        .await
        .unwrap();

    assert_eq!(summary.pages, 1);
    assert!(std::fs::read(&output).unwrap().starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_generate_empty_set_is_an_error() {
    let dir = TempDir::new().unwrap();
    let loaded = load_images(Vec::new(), SortOrder::Unsorted).await.unwrap();

    let output = dir.path().join("empty.pdf");
    let err = generate_pdf(&loaded, &GridOptions::default(), &output, None)
        .await
        .unwrap_err();
    assert!(matches!(err, PdfError::NoImages));
    assert!(!output.exists());
}

fn set_with_malformed() -> WorkingSet {
    [
        ImageItem::new(SourceRef::new(0, "good.png"), 400, 300, Rotation::None),
        ImageItem::new(SourceRef::new(1, "bad.png"), 0, 300, Rotation::None),
        ImageItem::new(SourceRef::new(2, "also-good.png"), 300, 400, Rotation::Rotate90),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_statistics_strict_surfaces_malformed() {
    let err = calculate_statistics(&set_with_malformed(), &GridOptions::default()).unwrap_err();
    assert!(matches!(err, PdfError::Layout(_)));
    assert!(err.to_string().contains("bad.png"));
}

#[test]
fn test_statistics_skip_reports_counts() {
    let options = GridOptions {
        dimension_policy: DimensionPolicy::Skip,
        ..Default::default()
    };
    let stats = calculate_statistics(&set_with_malformed(), &options).unwrap();

    assert_eq!(stats.placed_images, 2);
    assert_eq!(stats.skipped_images, 1);
    assert_eq!(stats.output_pages, 1);
    assert_eq!(stats.images_per_page, 4);
}

#[tokio::test]
async fn test_options_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");

    let options = GridOptions {
        columns: 3,
        rows: 4,
        paper_size: PaperSize::Letter,
        orientation: PageOrientation::Landscape,
        margin_pt: 36.0,
        label_images: true,
        dimension_policy: DimensionPolicy::Skip,
    };
    options.save(&path).await.unwrap();

    let loaded = GridOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}
