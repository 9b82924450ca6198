use pdf_table_gen::flat;
use pdf_table_gen::layout::{Margins, TableRenderer};
use pdf_table_gen::pagesize::{PageOrientation, A4};
use pdf_table_gen::{stamp_table, Document, Font, Info, Mm, Table, TableConfig, TableStyle};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // usage: delivery-note <font.ttf> [title]
    let mut args = std::env::args().skip(1);
    let font_path = args.next().expect("pass the path of a .ttf font to embed");
    let title = args.next().unwrap_or_else(|| "main storage".to_string());

    let font = std::fs::read(&font_path).expect("can read font file");
    let font = Font::load(font).expect("can load font");

    let mut doc = Document::default();
    doc.set_info(
        Info::new()
            .title(&title)
            .subject("Delivery note")
            .keywords("inventory, parts")
            .clone(),
    );
    let font = doc.add_font(font);

    // what the inventory service would hand over: quantity and part details
    let parts = [
        ("10", "LM317T", "Texas Instruments"),
        ("250", "RC0603FR-0710KL", "Yageo"),
        ("4", "NE555P", "Texas Instruments"),
        ("1", "ESP32-WROOM-32E", "Espressif"),
    ];
    let rows: Vec<Vec<String>> = (0..40)
        .map(|i| {
            let (qty, mpn, manufacturer) = parts[i % parts.len()];
            // every few rows gets a long description so that rows wrap
            let words = if i % 7 == 0 { 120 } else { 6 };
            vec![
                qty.to_string(),
                mpn.to_string(),
                manufacturer.to_string(),
                lipsum::lipsum(words),
            ]
        })
        .collect();

    let table = Table::from_records(
        ["qty", "mpn", "manufacturer", "description"],
        [Mm(25.0), Mm(70.0), Mm(70.0), Mm(100.0)],
        rows,
    )
    .expect("every row has four cells");

    let config = *TableConfig::new().page_capacity(Mm(170.0));
    let rendered = TableRenderer::new(&doc.fonts[font], config).render(&table);

    let style = TableStyle {
        margins: Some(Margins::all(config.page_margin)),
        ..TableStyle::new(font)
    };
    stamp_table(&mut doc, &rendered, A4.landscape(), &style).expect("can stamp table");

    let file_name = format!(
        "{} {}.pdf",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        title
    );
    let out = std::fs::File::create(&file_name).expect("can create output file");
    doc.write(out).expect("can write document");

    print!("{}", flat::aligned(&table));
    eprintln!("wrote {} pages to {file_name}", rendered.pages.len());
}
