//! Command-line front end for the passage pipeline.
//!
//! Loads translation corpora, resolves a verse range for the selected
//! translations and prints or saves one of the rendered outputs.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use std::path::{Path, PathBuf};
use transcrito_core::{
    init_logging, BookCatalog, Corpus, DisplayConfig, ExportPayload, Layout, PassageService,
    PdfMode, ReaderSession, TextAlign, TextFlow, TranslationSelection, VerseNumberFormat,
};

#[derive(Parser)]
#[command(name = "transcrito")]
#[command(about = "Resolve scripture verse ranges across translations", long_about = None)]
struct Cli {
    /// Translation corpus as KEY=PATH (repeatable)
    #[arg(
        long = "corpus",
        value_name = "KEY=PATH",
        required = true,
        value_parser = parse_corpus_arg
    )]
    corpora: Vec<(String, PathBuf)>,

    /// Book abbreviation, e.g. `jo`
    #[arg(short, long)]
    book: String,

    /// Start reference as `chapter:verse`
    #[arg(short, long, default_value = "1:1")]
    start: String,

    /// End reference as `chapter:verse`
    #[arg(short, long, default_value = "1:1")]
    end: String,

    /// Translation keys to resolve, in display order (at most four)
    #[arg(short, long = "translation")]
    translations: Vec<String>,

    /// Display config JSON file; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    font_size: Option<u32>,

    #[arg(long)]
    line_height: Option<f32>,

    /// left | center | justify
    #[arg(long)]
    align: Option<TextAlign>,

    /// full | number | none
    #[arg(long)]
    markers: Option<VerseNumberFormat>,

    /// columns | parallel
    #[arg(long)]
    layout: Option<Layout>,

    /// paragraph | continuous
    #[arg(long)]
    flow: Option<TextFlow>,

    /// optimized | custom
    #[arg(long)]
    pdf_mode: Option<PdfMode>,

    #[arg(short, long, value_enum, default_value_t = Output::Clipboard)]
    output: Output,

    /// Copy a single translation instead of all of them (clipboard output)
    #[arg(long, value_name = "KEY")]
    copy: Option<String>,

    /// Directory for `txt` and `document` exports
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Absolute directory for rotating log files; logging is off without it
    #[arg(long)]
    log_dir: Option<String>,

    #[arg(long, default_value_t = transcrito_core::default_log_level().to_string())]
    log_level: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    /// Screen tree as JSON
    Screen,
    /// Clipboard text on stdout
    Clipboard,
    /// Text export file
    Txt,
    /// PDF export file
    Document,
}

fn parse_corpus_arg(value: &str) -> Result<(String, PathBuf), String> {
    let (key, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=PATH, got `{value}`"))?;
    let key = key.trim();
    if key.is_empty() || path.trim().is_empty() {
        return Err(format!("expected KEY=PATH, got `{value}`"));
    }
    Ok((key.to_string(), PathBuf::from(path.trim())))
}

fn display_config(cli: &Cli) -> Result<DisplayConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config `{}`", path.display()))?;
            DisplayConfig::from_json_str(&json)
                .with_context(|| format!("invalid config `{}`", path.display()))?
        }
        None => DisplayConfig::default(),
    };

    if let Some(font_size) = cli.font_size {
        config.font_size = font_size;
    }
    if let Some(line_height) = cli.line_height {
        config.line_height = line_height;
    }
    if let Some(align) = cli.align {
        config.text_align = align;
    }
    if let Some(markers) = cli.markers {
        config.verse_number_format = markers;
    }
    if let Some(layout) = cli.layout {
        config.layout = layout;
    }
    if let Some(flow) = cli.flow {
        config.text_flow = flow;
    }
    if let Some(pdf_mode) = cli.pdf_mode {
        config.pdf_mode = pdf_mode;
    }
    config.validate()?;
    Ok(config)
}

fn write_export(out_dir: &Path, payload: &ExportPayload) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create `{}`", out_dir.display()))?;
    let path = out_dir.join(&payload.file_name);
    std::fs::write(&path, &payload.contents)
        .with_context(|| format!("failed to write `{}`", path.display()))?;
    println!("{}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        init_logging(&cli.log_level, log_dir)?;
    }

    let mut corpus = Corpus::new();
    for (key, path) in &cli.corpora {
        corpus.load_translation_file(key, path)?;
    }
    let config = display_config(&cli)?;

    let selection = if cli.translations.is_empty() {
        TranslationSelection::default()
    } else {
        TranslationSelection::try_from_keys(cli.translations.iter().cloned())?
    };

    let mut session = ReaderSession::new(PassageService::new(&corpus, BookCatalog::pt_br()));
    session.set_config(config);
    session.set_selection(selection);
    session.select_book(&cli.book);
    if !session.resolve(&cli.start, &cli.end) {
        bail!("nothing to resolve: select a book and at least one translation");
    }
    info!(
        "event=cli_resolve module=cli status=ok translations={}",
        session.results().len()
    );

    match cli.output {
        Output::Screen => {
            println!("{}", serde_json::to_string_pretty(&session.screen_tree())?);
        }
        Output::Clipboard => match &cli.copy {
            Some(key) => match session.clipboard_text_for(key) {
                Some(text) => print!("{text}"),
                None => bail!("translation `{key}` was not resolved"),
            },
            None => print!("{}", session.clipboard_text()),
        },
        Output::Txt => write_export(&cli.out_dir, &session.export_text())?,
        Output::Document => write_export(&cli.out_dir, &session.export_document()?)?,
    }

    Ok(())
}
