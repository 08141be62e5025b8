//! Font data wrapper around `ttf-parser`.

use std::path::Path;
use std::sync::Arc;

use crate::error::FontError;
use crate::pen::PathPen;

/// A loaded font.
///
/// Stores owned font bytes and creates a `ttf_parser::Face` on demand for
/// individual queries; re-parsing is sub-microsecond (header validation and
/// offset tables only, no allocation).
#[derive(Clone)]
pub struct GlyphFont {
    bytes: Arc<[u8]>,
    glyph_count: u16,
}

/// One character's outline, extracted from a font.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub id: u16,
    /// Glyph name from the `post` table, when the font carries one.
    pub name: Option<String>,
    /// Path data in font design units, Y-up. Empty when the glyph has no
    /// outline (spaces and other blanks).
    pub path: String,
    /// Control-point bounds as `[x_min, y_min, x_max, y_max]`.
    pub bounds: Option<[f64; 4]>,
}

impl GlyphFont {
    /// Read and parse a font file.
    ///
    /// # Errors
    ///
    /// [`FontError::Read`] when the file cannot be read,
    /// [`FontError::Parse`] when the data is not a valid OpenType or
    /// TrueType font.
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let bytes = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(Arc::from(bytes))
    }

    /// Parse font data from an owned byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the data is not a valid font.
    pub fn from_bytes(bytes: Arc<[u8]>) -> Result<Self, FontError> {
        let face =
            ttf_parser::Face::parse(&bytes, 0).map_err(|e| FontError::Parse(e.to_string()))?;
        Ok(Self {
            glyph_count: face.number_of_glyphs(),
            bytes,
        })
    }

    /// Create a temporary `Face` for queries.
    fn face(&self) -> ttf_parser::Face<'_> {
        ttf_parser::Face::parse(&self.bytes, 0).expect("font bytes validated at construction")
    }

    pub fn glyph_count(&self) -> u16 {
        self.glyph_count
    }

    /// Map a character to its glyph ID. `None` when the cmap has no entry.
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|g| g.0)
    }

    /// Extract a character's outline.
    ///
    /// `None` when the cmap has no entry for the character. A mapped glyph
    /// without an outline yields an empty `path`.
    pub fn glyph(&self, ch: char) -> Option<Glyph> {
        let face = self.face();
        let gid = face.glyph_index(ch)?;

        let mut pen = PathPen::new();
        // a None here is a blank glyph (space); the pen stays empty
        let _ = face.outline_glyph(gid, &mut pen);
        let (path, bounds) = pen.into_parts();

        Some(Glyph {
            ch,
            id: gid.0,
            name: face.glyph_name(gid).map(str::to_string),
            path,
            bounds,
        })
    }
}

impl std::fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphFont")
            .field("glyph_count", &self.glyph_count)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}
