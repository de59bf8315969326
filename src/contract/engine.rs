//! PDF rendering engine.
//!
//! Interprets a [`Layout`] into a PDF document with `lopdf`: one page object
//! per layout page, the two standard Helvetica faces, WinAnsi text encoding.

use log::warn;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use super::layout::{Color, DrawCommand, Layout, Page, PAGE_HEIGHT, PAGE_WIDTH};
use super::text::Font;
use super::traits::RenderBackend;
use super::ContractError;

const PDF_VERSION: &str = "1.5";

/// Stateless backend rendering layouts to PDF bytes.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderEngine {
    title: Option<String>,
}

impl PdfRenderEngine {
    /// Document title stored in the PDF metadata.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

impl RenderBackend for PdfRenderEngine {
    fn mime_type(&self) -> &'static str {
        "application/pdf"
    }

    fn render(&self, layout: &Layout) -> Result<Vec<u8>, ContractError> {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(font_dictionary("Helvetica"));
        let bold_id = doc.add_object(font_dictionary("Helvetica-Bold"));
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
            },
        });

        let mut kids = Vec::with_capacity(layout.pages.len());
        for page in &layout.pages {
            let content = page_content(page)
                .encode()
                .map_err(|err| ContractError::PdfEncode(err.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    real(PAGE_WIDTH),
                    real(PAGE_HEIGHT),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = self.info_dictionary(&mut doc);
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|err| ContractError::PdfWrite(err.to_string()))?;
        Ok(bytes)
    }
}

impl PdfRenderEngine {
    fn info_dictionary(&self, doc: &mut Document) -> ObjectId {
        let mut info = dictionary! {
            "Producer" => Object::string_literal(env!("CARGO_PKG_NAME")),
        };
        if let Some(title) = &self.title {
            info.set("Title", Object::string_literal(encode_win_ansi(title)));
        }
        doc.add_object(info)
    }
}

fn font_dictionary(base_font: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => Object::Name(base_font.as_bytes().to_vec()),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn page_content(page: &Page) -> Content {
    let mut operations = Vec::new();

    for command in &page.commands {
        match command {
            DrawCommand::Text {
                x,
                y,
                text,
                font,
                size,
                color,
                ..
            } => {
                let font_name = match font {
                    Font::Regular => "F1",
                    Font::Bold => "F2",
                };
                operations.push(fill_color(*color));
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new(
                    "Tf",
                    vec![Object::Name(font_name.as_bytes().to_vec()), real(*size)],
                ));
                operations.push(Operation::new(
                    "Td",
                    vec![real(*x), real(PAGE_HEIGHT - *y)],
                ));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(encode_win_ansi(text))],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                width,
                color,
            } => {
                operations.push(stroke_color(*color));
                operations.push(Operation::new("w", vec![real(*width)]));
                operations.push(Operation::new(
                    "m",
                    vec![real(*x1), real(PAGE_HEIGHT - *y1)],
                ));
                operations.push(Operation::new(
                    "l",
                    vec![real(*x2), real(PAGE_HEIGHT - *y2)],
                ));
                operations.push(Operation::new("S", vec![]));
            }
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
            } => {
                let operator = match (fill, stroke) {
                    (Some(_), Some(_)) => "B",
                    (Some(_), None) => "f",
                    (None, Some(_)) => "S",
                    (None, None) => continue,
                };
                if let Some(color) = fill {
                    operations.push(fill_color(*color));
                }
                if let Some(color) = stroke {
                    operations.push(stroke_color(*color));
                    operations.push(Operation::new("w", vec![real(0.5_f32)]));
                }
                operations.push(Operation::new(
                    "re",
                    vec![
                        real(*x),
                        real(PAGE_HEIGHT - (*y + *height)),
                        real(*width),
                        real(*height),
                    ],
                ));
                operations.push(Operation::new(operator, vec![]));
            }
        }
    }

    Content { operations }
}

fn real(value: f32) -> Object {
    Object::Real(value.into())
}

fn color_components(color: Color) -> Vec<Object> {
    let Color(r, g, b) = color;
    [r, g, b]
        .into_iter()
        .map(|channel| real(channel as f32 / 255.0))
        .collect()
}

fn fill_color(color: Color) -> Operation {
    Operation::new("rg", color_components(color))
}

fn stroke_color(color: Color) -> Operation {
    Operation::new("RG", color_components(color))
}

/// Encode text for the standard fonts' WinAnsi (CP1252) encoding.
///
/// Characters the encoding lacks are printed as `?` and reported once per call.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut missing = Vec::new();
    let bytes = text
        .chars()
        .map(|ch| {
            win_ansi_byte(ch).unwrap_or_else(|| {
                missing.push(ch);
                b'?'
            })
        })
        .collect();

    if !missing.is_empty() {
        warn!(
            "{} character(s) outside WinAnsi replaced by '?' in {:?}: {:?}",
            missing.len(),
            text,
            missing
        );
    }
    bytes
}

fn win_ansi_byte(ch: char) -> Option<u8> {
    let byte = match ch {
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u8,
        '€' => 0x80,
        '…' => 0x85,
        'Š' => 0x8A,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '–' => 0x96,
        '—' => 0x97,
        'š' => 0x9A,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        '\u{202f}' => 0xA0,
        _ => return None,
    };
    Some(byte)
}
