//! Layout description: canvas size plus per-layer regions as JSON.
//!
//! The JSON text has lexicographically sorted keys, `", "` / `": "`
//! separators, no indentation, and every non-ASCII character escaped as
//! `\uXXXX`, so the output is byte-stable across platforms.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;

use crate::document::Document;
use crate::error::{Result, SpriteError};
use crate::output::Printer;

/// Canvas dimensions of the source document.
///
/// Fields are declared in key order; serde writes them as declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub canvas_height: u32,
    pub canvas_width: u32,
}

/// One layer's bounding box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub height: u32,
    pub name: String,
    pub width: u32,
    pub x: i32,
    pub y: i32,
}

/// The complete layout document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub header: Header,
    pub regions: Vec<Region>,
}

impl Layout {
    /// Describe a document: its canvas and one region per layer, in order.
    pub fn from_document(document: &Document) -> Self {
        let regions = document
            .layers
            .iter()
            .map(|layer| Region {
                height: layer.bounds.height,
                name: layer.name.clone(),
                width: layer.bounds.width,
                x: layer.bounds.x,
                y: layer.bounds.y,
            })
            .collect();

        Self {
            header: Header {
                canvas_height: document.height,
                canvas_width: document.width,
            },
            regions,
        }
    }

    /// Serialize to the layout JSON text.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
        self.serialize(&mut serializer)
            .map_err(|e| SpriteError::Io {
                path: "<layout>".into(),
                message: format!("Failed to serialize layout: {}", e),
            })?;

        // The formatter only ever emits ASCII
        String::from_utf8(buf).map_err(|e| SpriteError::Io {
            path: "<layout>".into(),
            message: format!("Layout JSON is not valid UTF-8: {}", e),
        })
    }

    /// Write the layout JSON to `path`, reporting each region.
    pub fn write(&self, path: &Path, printer: &Printer) -> Result<()> {
        for region in &self.regions {
            printer.status("Writing", &format!("region {}", region.name));
        }

        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| SpriteError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write layout JSON: {}", e),
        })
    }
}

/// Compact JSON formatter with spaced separators and ASCII-only strings.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        for ch in fragment.chars() {
            // DEL is ASCII but still escaped
            if ch.is_ascii() && ch != '\x7f' {
                writer.write_all(&[ch as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
