use std::fs;
use std::path::PathBuf;
use std::process::Command;

use home_to_pdf::cli::Args;
use home_to_pdf::config::Settings;
use home_to_pdf::content::{ContentProviders, PageResult};
use home_to_pdf::model::Home;
use home_to_pdf::print::{resolve_page_format, Orientation, PdfDevice, PrintComposer};
use home_to_pdf::render::RecordingSurface;
use home_to_pdf::render_home_pdf;

use clap::Parser;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load(name: &str) -> Home {
    Home::load(&fixtures_path().join(name)).expect("Failed to load home")
}

fn composer_for(home: &Home, settings: &Settings) -> PrintComposer {
    let format = resolve_page_format(settings.print.as_ref(), &PdfDevice).unwrap();
    PrintComposer::new(home, settings, format, ContentProviders::for_home(home, settings))
}

/// Text drawn on every page, rendered one page at a time
fn page_texts(composer: &mut PrintComposer) -> Vec<Vec<String>> {
    let format = *composer.page_format();
    let count = composer.page_count().unwrap();
    (0..count)
        .map(|index| {
            let mut surface = RecordingSurface::new();
            let result = composer.render_page(&mut surface, &format, index).unwrap();
            assert_eq!(result, PageResult::Exists);
            surface.texts().into_iter().map(String::from).collect()
        })
        .collect()
}

#[test]
fn test_load_cottage() {
    let home = load("cottage.json");
    assert_eq!(home.levels.len(), 2);
    assert_eq!(home.visible_furniture().count(), 6);
    let print = home.print.as_ref().unwrap();
    assert_eq!(print.paper_width, 210.0);
    assert!(print.view3d_printed);
    assert_eq!(home.view3d.as_ref().unwrap().polygons.len(), 3);
}

#[test]
fn test_cottage_page_sequence() {
    let home = load("cottage.json");
    let settings = Settings::default().with_home_print(home.print.as_ref());
    let mut composer = composer_for(&home, &settings);

    // Furniture list, one plan page per level, 3D view
    assert_eq!(composer.page_count().unwrap(), 4);

    let pages = page_texts(&mut composer);
    for (index, texts) in pages.iter().enumerate() {
        // Overlays are painted after the content: header, then footer
        let (header, footer) = (&texts[texts.len() - 2], &texts[texts.len() - 1]);
        assert_eq!(header, "Cottage - Ground floor");
        assert!(
            footer.starts_with(&format!("Page {}/4 ($ estimate, scale 1/", index + 1)),
            "unexpected footer {:?}",
            footer
        );
    }
    // 8.2 m of plan across 180 mm of paper
    assert_eq!(pages[1].last().unwrap(), "Page 2/4 ($ estimate, scale 1/46)");
    assert!(pages[0].iter().any(|text| text == "Wardrobe"));
    assert!(!pages[0].iter().any(|text| text == "Hidden box"));
    assert!(pages[1].iter().any(|text| text == "Living room"));
    assert!(pages[2].iter().any(|text| text == "Bedroom"));
}

#[test]
fn test_dry_run_matches_real_run() {
    let home = load("cottage.json");
    for orientation in [
        Orientation::Portrait,
        Orientation::Landscape,
        Orientation::ReverseLandscape,
    ] {
        let mut settings = Settings::default().with_home_print(home.print.as_ref());
        if let Some(ref mut print) = settings.print {
            print.orientation = orientation;
        }
        let mut composer = composer_for(&home, &settings);
        let count = composer.page_count().unwrap();

        let format = *composer.page_format();
        let mut surface = RecordingSurface::new();
        assert_eq!(
            composer.render_page(&mut surface, &format, count).unwrap(),
            PageResult::NoSuchPage
        );
        assert_eq!(page_texts(&mut composer).len(), count);
    }
}

#[test]
fn test_render_home_pdf() {
    let home = load("cottage.json");
    let settings = Settings::default().with_home_print(home.print.as_ref());

    let pdf_bytes = render_home_pdf(&home, &settings).expect("Failed to generate PDF");
    assert!(pdf_bytes.starts_with(b"%PDF"));

    let doc = lopdf::Document::load_mem(&pdf_bytes).expect("Generated PDF does not parse");
    assert_eq!(doc.get_pages().len(), 4);

    let info_id = doc
        .trailer
        .get(b"Info")
        .and_then(|info| info.as_reference())
        .expect("No document info");
    let info = doc.get_dictionary(info_id).unwrap();
    assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Cottage");
    assert_eq!(info.get(b"Creator").unwrap().as_str().unwrap(), b"Home to PDF");
    assert!(info.has(b"CreationDate"));
}

#[test]
fn test_home_without_print_settings() {
    let home = load("studio.json");
    assert!(home.print.is_none());
    let settings = Settings::default().with_home_print(home.print.as_ref());
    assert!(settings.print.is_none());

    let mut composer = composer_for(&home, &settings);
    // Device default format, no header or footer, no 3D view
    assert_eq!(composer.page_count().unwrap(), 2);
    assert!((composer.page_format().width() - 215.9).abs() < 0.01);
    let pages = page_texts(&mut composer);
    assert_eq!(pages[0][..5], ["Name", "Width", "Depth", "Height", "Level"]);
    assert!(pages[1].is_empty());
}

#[test]
fn test_cli_overrides_stored_print_settings() {
    let home = load("cottage.json");
    let input = fixtures_path().join("cottage.json");
    let args = Args::parse_from([
        "home-to-pdf",
        input.to_str().unwrap(),
        "--orientation",
        "landscape",
        "--no-furniture",
        "--footer",
        "$pageNumber of $pageCount",
    ]);
    let settings = Settings::from_args(&args).with_home_print(home.print.as_ref());
    let print = settings.print.as_ref().unwrap();
    assert_eq!(print.orientation, Orientation::Landscape);
    assert_eq!(print.paper_width, 210.0);
    assert!(!print.furniture_printed);

    let mut composer = composer_for(&home, &settings);
    assert_eq!(composer.page_format().width(), 297.0);
    let pages = page_texts(&mut composer);
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[2].last().unwrap(), "3 of 3");
}

#[test]
fn test_nothing_selected_gives_empty_output() {
    let home = load("cottage.json");
    let mut settings = Settings::default().with_home_print(home.print.as_ref());
    if let Some(ref mut print) = settings.print {
        print.furniture_printed = false;
        print.plan_printed = false;
        print.view3d_printed = false;
    }
    let pdf_bytes = render_home_pdf(&home, &settings).unwrap();
    assert!(pdf_bytes.is_empty());
}

#[test]
fn test_cli_writes_pdf_with_letterhead() {
    let output = std::env::temp_dir().join(format!("home-to-pdf-{}.pdf", std::process::id()));
    let status = Command::new(env!("CARGO_BIN_EXE_home-to-pdf"))
        .arg(fixtures_path().join("cottage.json"))
        .arg("-o")
        .arg(&output)
        .arg("--fixed-header")
        .arg(fixtures_path().join("letterhead.txt"))
        .arg("--no-compress")
        .status()
        .expect("Failed to run home-to-pdf");
    assert!(status.success());

    let bytes = fs::read(&output).expect("No PDF written");
    let _ = fs::remove_file(&output);
    assert!(bytes.starts_with(b"%PDF"));
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 4);
}

#[test]
fn test_cli_rejects_bad_plan_scale() {
    let status = Command::new(env!("CARGO_BIN_EXE_home-to-pdf"))
        .arg(fixtures_path().join("cottage.json"))
        .arg("--plan-scale")
        .arg("1:50")
        .status()
        .expect("Failed to run home-to-pdf");
    assert!(!status.success());
}
