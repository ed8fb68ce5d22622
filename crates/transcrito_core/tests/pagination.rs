use transcrito_core::layout::paginator::{PlacedElement, PlacedText};
use transcrito_core::layout::wrap::wrap_text;
use transcrito_core::render::document::{BlockContent, BlockKind, DocumentBlock, DocumentModel};
use transcrito_core::{
    build_document, paginate, DisplayConfig, PageSetup, Paginator, ResolvedVerse, TextAlign,
    TranslationResult,
};

fn body_line(text: String) -> PlacedText {
    PlacedText {
        x: 20.0,
        y: 0.0,
        text,
        bold: false,
        font_size: 10.0,
        align: TextAlign::Left,
        max_width: 170.0,
    }
}

fn all_line_starts(document: &transcrito_core::PaginatedDocument) -> Vec<f32> {
    document.text_lines().map(|line| line.y).collect()
}

#[test]
fn page_count_covers_total_content_height() {
    let setup = PageSetup::A4;
    let line_height = 7.0_f32;
    let usable = setup.page_height - 2.0 * setup.margin;

    for lines in [37_usize, 40, 73, 150, 400] {
        let mut paginator = Paginator::new(setup);
        for index in 0..lines {
            paginator.place_line(line_height, body_line(format!("line {index}")));
        }
        let document = paginator.finish();

        let content = lines as f32 * line_height;
        assert!(content > usable);
        let minimum_pages = (content / usable).ceil() as usize;
        assert!(
            document.page_count() >= minimum_pages,
            "lines={lines} pages={} minimum={minimum_pages}",
            document.page_count()
        );
        for y in all_line_starts(&document) {
            assert!(y + line_height <= setup.bottom_limit() + 1e-3, "y={y}");
            assert!(y <= setup.page_height - setup.margin);
        }
    }
}

#[test]
fn every_page_starts_at_top_margin() {
    let setup = PageSetup::A4;
    let mut paginator = Paginator::new(setup);
    for index in 0..100 {
        paginator.place_line(7.0, body_line(format!("line {index}")));
    }
    let document = paginator.finish();
    assert_eq!(document.page_count(), 3);
    for page in &document.pages {
        let Some(PlacedElement::Text(first)) = page.elements.first() else {
            panic!("page {} is empty", page.number);
        };
        assert_eq!(first.y, setup.margin);
    }
}

#[test]
fn long_verse_breaks_between_wrapped_lines() {
    let long_text = "palavra ".repeat(2_000);
    let verse = ResolvedVerse::new("sl", "Salmos", 119, 1, long_text.trim_end());
    let result = TranslationResult::new("NVI", vec![verse]);
    let model = build_document(&[result], &DisplayConfig::default(), "Salmos");
    let document = paginate(&model, PageSetup::A4);

    assert!(document.page_count() > 1);
    let placed_words: usize = document
        .text_lines()
        .map(|line| line.text.matches("palavra").count())
        .sum();
    assert_eq!(placed_words, 2_000);
    for line in document.text_lines() {
        assert!(!line.text.contains("palav ") && !line.text.ends_with("palav"));
    }
}

#[test]
fn page_break_hint_opens_a_new_page() {
    let model = build_document(
        &[
            TranslationResult::new(
                "NVI",
                vec![ResolvedVerse::new("rt", "Rute", 1, 1, "Nos dias")],
            ),
            TranslationResult::new(
                "ACF",
                vec![ResolvedVerse::new("rt", "Rute", 1, 1, "E sucedeu")],
            ),
        ],
        &DisplayConfig::default(),
        "Rute",
    );
    let document = paginate(&model, PageSetup::A4);

    assert_eq!(document.page_count(), 2);
    let Some(PlacedElement::Text(title)) = document.pages[1].elements.first() else {
        panic!("second page should start with a title");
    };
    assert_eq!(title.text, "ACF");
    assert!(title.bold);
}

fn title_and_rule() -> DocumentModel {
    let result = TranslationResult::new(
        "NVI",
        vec![ResolvedVerse::new("rt", "Rute", 1, 1, "Nos dias")],
    );
    let model = build_document(&[result], &DisplayConfig::default(), "Rute");
    assert_eq!(model.blocks[0].kind, BlockKind::TranslationTitle);
    assert_eq!(model.blocks[1].kind, BlockKind::TitleRule);
    model
}

#[test]
fn title_near_bottom_moves_to_next_page_with_its_rule() {
    let setup = PageSetup::A4;
    let model = title_and_rule();
    let mut paginator = Paginator::new(setup);
    for index in 0..35 {
        paginator.place_line(7.0, body_line(format!("line {index}")));
    }
    // The 10 mm title line would still fit; the 20 mm keep does not.
    assert_eq!(paginator.cursor(), 265.0);
    assert!(paginator.cursor() + 10.0 <= setup.bottom_limit());
    assert!(paginator.cursor() + 20.0 > setup.bottom_limit());

    paginator.place_block(&model.blocks[0]);
    paginator.place_block(&model.blocks[1]);
    let document = paginator.finish();

    assert_eq!(document.page_count(), 2);
    assert_eq!(document.pages[0].elements.len(), 35);
    let [PlacedElement::Text(title), PlacedElement::Rule(rule)] =
        document.pages[1].elements.as_slice()
    else {
        panic!("second page should hold the title and its rule");
    };
    assert_eq!(title.text, "NVI");
    assert_eq!(title.y, setup.margin);
    assert_eq!(rule.y, setup.margin + model.style.title_advance);
}

#[test]
fn title_with_room_stays_on_current_page() {
    let setup = PageSetup::A4;
    let model = title_and_rule();
    let mut paginator = Paginator::new(setup);
    for index in 0..30 {
        paginator.place_line(7.0, body_line(format!("line {index}")));
    }
    paginator.place_block(&model.blocks[0]);
    paginator.place_block(&model.blocks[1]);
    let document = paginator.finish();

    assert_eq!(document.page_count(), 1);
    let Some(PlacedElement::Text(title)) = document.pages[0].elements.get(30) else {
        panic!("title should follow the body lines");
    };
    assert_eq!(title.y, 230.0);
}

#[test]
fn table_rows_wrap_cells_into_columns() {
    let row = DocumentBlock {
        kind: BlockKind::TableRow,
        content: BlockContent::Cells(vec![
            "um dois tres quatro cinco seis sete oito nove dez onze doze treze quatorze quinze dezesseis dezessete".to_string(),
            "curto".to_string(),
        ]),
        bold: false,
        font_size: 10.0,
        align: TextAlign::Left,
        page_break_before: false,
        line_advance: 7.0,
        keep_height: 0.0,
        space_after: 3.0,
    };
    let model = DocumentModel {
        style: transcrito_core::render::document::DocumentStyle::for_config(
            &DisplayConfig::default(),
        ),
        blocks: vec![row],
    };
    let document = paginate(&model, PageSetup::A4);
    let lines: Vec<_> = document.text_lines().collect();

    let column_width = PageSetup::A4.content_width() / 2.0;
    let first_column = lines.iter().filter(|line| line.x == PageSetup::A4.margin).count();
    let second_column: Vec<_> = lines
        .iter()
        .filter(|line| line.x == PageSetup::A4.margin + column_width)
        .collect();
    assert!(first_column >= 2);
    assert_eq!(second_column.len(), 1);
    assert_eq!(second_column[0].y, PageSetup::A4.margin);
}

#[test]
fn wrap_respects_a4_body_width() {
    let cells = PageSetup::cells_for_width(PageSetup::A4.content_width(), 10.0);
    let text = "Porque Deus tanto amou o mundo que deu o seu Filho Unigênito, para que todo o que nele crer não pereça, mas tenha a vida eterna.";
    let lines = wrap_text(text, cells);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines.join(" "), text);
}
