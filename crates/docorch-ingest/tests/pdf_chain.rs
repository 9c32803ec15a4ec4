//! Fallback chain against PDFs built in memory

use docorch_domain::{DocumentBytes, DocumentFormat};
use docorch_ingest::{IngestConfig, LopdfTier, PdfTextTier, TextExtractor};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// One page per entry; `None` makes a page without any text operators
fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let operations = match page {
            Some(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
            None => vec![],
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// OCR enabled, but pointed at binaries that do not exist
fn config_without_ocr_tools() -> IngestConfig {
    IngestConfig {
        tesseract_bin: "docorch-missing-tesseract".to_string(),
        pdftoppm_bin: "docorch-missing-pdftoppm".to_string(),
        mutool_bin: "docorch-missing-mutool".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_lopdf_reads_each_page_in_order() {
    let pdf = build_pdf(&[Some("Account Holder Ankita"), Some("Closing Balance 64252")]);

    let pages = LopdfTier.extract_pages(&pdf).unwrap();
    assert_eq!(pages.len(), 2);
    assert!(pages[0].contains("Account Holder Ankita"));
    assert!(pages[1].contains("Closing Balance 64252"));
}

#[test]
fn test_text_pdf_goes_through_first_tier() {
    let pdf = build_pdf(&[Some("Statement Period November")]);
    let extractor = TextExtractor::new(&config_without_ocr_tools());

    let text = extractor.extract(DocumentBytes::new(pdf, DocumentFormat::Pdf));
    assert!(text.contains("Statement Period November"));
}

#[test]
fn test_pdf_without_text_or_ocr_yields_empty_string() {
    let pdf = build_pdf(&[None, None]);
    let extractor = TextExtractor::new(&config_without_ocr_tools());

    let text = extractor.extract(DocumentBytes::new(pdf, DocumentFormat::Pdf));
    assert_eq!(text, "");
}

#[test]
fn test_garbage_pdf_yields_empty_string() {
    let extractor = TextExtractor::new(&config_without_ocr_tools());
    let text = extractor.extract(DocumentBytes::new(
        b"%PDF-1.7 truncated".to_vec(),
        DocumentFormat::Pdf,
    ));
    assert_eq!(text, "");
}
