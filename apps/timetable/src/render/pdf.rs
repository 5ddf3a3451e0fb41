//! PDF encoder. Writes a `ReportLayout` with `lopdf`.
//!
//! Text uses the base-14 Helvetica faces with WinAnsiEncoding, so no font program is
//! embedded. Layout coordinates (top-left origin) are flipped into PDF user space here.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

use crate::render::font_metrics::{get_metrics, Face};
use crate::render::layout::{DrawOp, Page, ReportLayout};
use crate::render::palette::Rgb;
use crate::render::RenderError;

pub const DOCUMENT_TITLE: &str = "Personalized Skincare Timetable";
const PRODUCER: &str = "Dubois Beauty timetable service";

pub fn encode_pdf(layout: &ReportLayout) -> Result<Vec<u8>, RenderError> {
    if layout.pages.is_empty() {
        return Err(RenderError::Pdf("layout has no pages".to_string()));
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for face in Face::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(face.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(layout.pages.len());
    for page in &layout.pages {
        let content = Content {
            operations: page_operations(page, layout.height),
        };
        let bytes = content
            .encode()
            .map_err(|e| RenderError::Pdf(format!("content stream encoding failed: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, bytes));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![real(0.0), real(0.0), real(layout.width), real(layout.height)],
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(DOCUMENT_TITLE),
        "Producer" => Object::string_literal(PRODUCER),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| RenderError::Pdf(format!("document serialization failed: {e}")))?;
    Ok(buffer)
}

fn page_operations(page: &Page, page_height: f32) -> Vec<Operation> {
    let mut ops = Vec::new();
    for op in &page.ops {
        match op {
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                ops.push(color_op("rg", fill));
                ops.push(rect_op(*x, page_height - y - height, *width, *height));
                ops.push(Operation::new("f", vec![]));
            }
            DrawOp::Card {
                x,
                y,
                width,
                height,
                fill,
                border,
            } => {
                ops.push(color_op("rg", fill));
                ops.push(color_op("RG", border));
                ops.push(Operation::new("w", vec![real(1.0)]));
                ops.push(rect_op(*x, page_height - y - height, *width, *height));
                ops.push(Operation::new("B", vec![]));
            }
            DrawOp::Rule {
                x1,
                x2,
                y,
                width,
                color,
            } => {
                let y = page_height - y;
                ops.push(color_op("RG", color));
                ops.push(Operation::new("w", vec![real(*width)]));
                ops.push(Operation::new("m", vec![real(*x1), real(y)]));
                ops.push(Operation::new("l", vec![real(*x2), real(y)]));
                ops.push(Operation::new("S", vec![]));
            }
            DrawOp::Text {
                x,
                y,
                size,
                face,
                color,
                text,
            } => {
                let baseline = page_height - y - get_metrics(face).ascent * size;
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new(
                    "Tf",
                    vec![Object::Name(face.resource_name().as_bytes().to_vec()), real(*size)],
                ));
                ops.push(color_op("rg", color));
                ops.push(Operation::new("Td", vec![real(*x), real(baseline)]));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(encode_win_ansi(text))],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
        }
    }
    ops
}

fn real(v: f32) -> Object {
    Object::Real(v.into())
}

fn color_op(operator: &str, color: &Rgb) -> Operation {
    Operation::new(operator, color.unit().iter().map(|c| real(*c)).collect())
}

fn rect_op(x: f32, y: f32, width: f32, height: f32) -> Operation {
    Operation::new("re", vec![real(x), real(y), real(width), real(height)])
}

/// Maps text to WinAnsiEncoding bytes. Characters with no WinAnsi code become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}
