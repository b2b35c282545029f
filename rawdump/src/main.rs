//! A CLI tool for listing the raw data elements of a DICOM data set,
//! without decoding their values.
use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::PathBuf;

use clap::Parser;
use dicom_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dicom_core::header::HasLength;
use dicom_core::{RawElement, Tag, VR};
use dicom_dictionary_std::StandardDataDictionary;
use dicom_fixer::{fix_separator, FixSeparatorOptions};
use dicom_parser::{CallbackRegistry, DataSetReader, DataSetReaderOptions};
use dicom_transfer_syntax_registry::get_registry;
use snafu::{OptionExt, Report, ResultExt, Whatever};
use tracing::{error, Level};

/// Maximum number of value bytes shown per element.
const PREVIEW_LEN: usize = 32;

/// List the raw data elements of a DICOM data set
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// Path to the file holding the data set
    file: PathBuf,

    /// The UID of the transfer syntax of the data set
    #[arg(long = "ts", default_value = "1.2.840.10008.1.2")]
    transfer_syntax: String,

    /// The byte position in the file where the data set starts
    #[arg(long = "offset", default_value = "0")]
    offset: u64,

    /// Stop reading before this tag
    /// (`gggg,eeee`, `ggggeeee` or keyword)
    #[arg(long = "stop-before", value_parser = parse_tag)]
    stop_before: Option<Tag>,

    /// Replace this invalid value separator with a backslash
    #[arg(long = "fix-separator")]
    fix_separator: Option<char>,

    /// The value representations to fix (default is DS and IS)
    #[arg(long = "for-vr", requires = "fix_separator")]
    for_vrs: Vec<VR>,

    /// Do not fix elements with an unknown value representation
    #[arg(long = "skip-unknown-vr", requires = "fix_separator")]
    skip_unknown_vr: bool,

    /// Print debug information while reading
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn parse_tag(s: &str) -> Result<Tag, String> {
    StandardDataDictionary
        .parse_tag(s)
        .ok_or_else(|| format!("unrecognized tag `{}`", s))
}

fn main() {
    let app = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if app.verbose {
                Level::DEBUG
            } else {
                Level::INFO
            })
            .with_writer(std::io::stderr)
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    run(app).unwrap_or_else(|e| {
        error!("{}", Report::from_error(e));
        std::process::exit(-2);
    });
}

fn run(app: App) -> Result<(), Whatever> {
    let App {
        file,
        transfer_syntax,
        offset,
        stop_before,
        fix_separator: separator,
        for_vrs,
        skip_unknown_vr,
        verbose: _,
    } = app;

    let ts = get_registry()
        .get(&transfer_syntax)
        .with_whatever_context(|| format!("Unknown transfer syntax {}", transfer_syntax))?;

    let mut options = DataSetReaderOptions::default().base_offset(offset);
    if let Some(tag) = stop_before {
        options = options.stop_before(tag);
    }
    if let Some(separator) = separator {
        let separator = separator_byte(separator)?;
        let mut builder = FixSeparatorOptions::builder()
            .invalid_separator(separator)
            .process_unknown_vrs(!skip_unknown_vr);
        if !for_vrs.is_empty() {
            builder = builder.for_vrs(for_vrs);
        }
        let fixer_options = builder
            .build()
            .whatever_context("Invalid separator fixer options")?;
        let mut registry = CallbackRegistry::new();
        fix_separator(&mut registry, fixer_options);
        options = options.callback(registry);
    }

    let mut source = BufReader::new(
        File::open(&file).with_whatever_context(|_| format!("Could not open {}", file.display()))?,
    );
    source
        .seek(SeekFrom::Start(offset))
        .whatever_context("Could not seek to the start of the data set")?;

    let reader = DataSetReader::new_with_ts(source, ts, options)
        .whatever_context("Could not create data set reader")?;

    for element in reader {
        let element = element.whatever_context("Could not read data element")?;
        println!("{}", format_element(&element));
    }

    Ok(())
}

/// The byte of a separator character, which must fit in a single byte.
fn separator_byte(separator: char) -> Result<u8, Whatever> {
    u8::try_from(separator)
        .ok()
        .with_whatever_context(|| format!("Separator {:?} is not a single byte", separator))
}

fn format_element(element: &RawElement) -> String {
    let vr = element
        .vr()
        .map(|vr| vr.to_string())
        .unwrap_or_else(|| "??".to_string());
    let alias = StandardDataDictionary
        .by_tag(element.tag())
        .map(|entry| entry.alias().to_string())
        .unwrap_or_default();
    format!(
        "{} {:<28} {} {:>8} @{:<8} {}",
        element.tag(),
        alias,
        vr,
        element.length().to_string(),
        element.value_offset(),
        preview(element.value()),
    )
}

/// Show text values as text and anything else as hexadecimal bytes,
/// truncated to the first few bytes.
fn preview(value: &[u8]) -> String {
    let shown = &value[..value.len().min(PREVIEW_LEN)];
    let ellipsis = if shown.len() < value.len() { "..." } else { "" };
    let is_text = shown
        .iter()
        .all(|&b| b.is_ascii_graphic() || b == b' ' || b == 0);
    if is_text {
        let text: String = shown
            .iter()
            .filter(|&&b| b != 0)
            .map(|&b| char::from(b))
            .collect();
        format!("[{}]{}", text, ellipsis)
    } else {
        let bytes: Vec<_> = shown.iter().map(|b| format!("{:02X}", b)).collect();
        format!("{}{}", bytes.join(" "), ellipsis)
    }
}
