use std::{collections::HashMap, fmt, path::PathBuf, sync::Arc};

use once_cell::sync::OnceCell;

use crate::builtin::BuiltinFont;

/// Why a single font candidate could not be used.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {font}: {reason}")]
    Parse { font: String, reason: &'static str },

    #[error("no system font matches family {0:?}")]
    NotFound(String),
}

/// Where a font candidate comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontSource {
    /// A font file on disk.
    File(PathBuf),
    /// A family name looked up in the system font database.
    Family(String),
}

impl FontSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn family(name: impl Into<String>) -> Self {
        Self::Family(name.into())
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::File(path) => write!(f, "{}", path.display()),
            FontSource::Family(name) => write!(f, "family \"{name}\""),
        }
    }
}

/// Pixel size and weight the caller wants a font for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontRequest {
    pub size: f32,
    pub bold: bool,
}

impl FontRequest {
    pub fn regular(size: f32) -> Self {
        Self { size, bold: false }
    }

    pub fn bold(size: f32) -> Self {
        Self { size, bold: true }
    }
}

/// An outline font loaded from one of the candidates.
#[derive(Clone)]
pub struct OutlineFont {
    inner: Arc<fontdue::Font>,
    size: f32,
    source: FontSource,
}

impl OutlineFont {
    pub fn fontdue(&self) -> &fontdue::Font {
        &self.inner
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }
}

/// A resolved font, ready for measuring and drawing text.
#[derive(Clone)]
pub enum Font {
    Outline(OutlineFont),
    Builtin(BuiltinFont),
}

impl Font {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin(_))
    }

    /// Pixel size the font draws at. For the built-in font this is the
    /// scaled line height, which may differ from the requested size.
    pub fn size(&self) -> f32 {
        match self {
            Font::Outline(font) => font.size(),
            Font::Builtin(font) => font.line_height() as f32,
        }
    }

    /// Short human-readable description for logs.
    pub fn describe(&self) -> String {
        match self {
            Font::Outline(font) => format!("{} @ {}px", font.source(), font.size()),
            Font::Builtin(font) => format!("built-in bitmap x{}", font.scale()),
        }
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Font").field(&self.describe()).finish()
    }
}

/// Compiled-in candidate list, most preferred first.
pub fn default_candidates(bold: bool) -> Vec<FontSource> {
    let pick = |bold_path: &str, regular_path: &str| {
        FontSource::file(if bold { bold_path } else { regular_path })
    };

    vec![
        pick("C:/Windows/Fonts/arialbd.ttf", "C:/Windows/Fonts/arial.ttf"),
        FontSource::file("C:/Windows/Fonts/Arial.ttf"),
        pick("C:/Windows/Fonts/calibrib.ttf", "C:/Windows/Fonts/calibri.ttf"),
        pick(
            "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
        ),
        pick(
            "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        ),
        pick(
            "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        ),
        FontSource::family("Arial"),
        FontSource::family("DejaVu Sans"),
        FontSource::family("Liberation Sans"),
    ]
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    size_bits: u32,
    bold: bool,
}

impl From<FontRequest> for CacheKey {
    fn from(request: FontRequest) -> Self {
        Self {
            size_bits: request.size.to_bits(),
            bold: request.bold,
        }
    }
}

/// Resolves font requests against ordered candidate lists.
///
/// Resolution never fails: when no candidate loads, the embedded bitmap font
/// is returned instead. Results are cached per size and weight.
pub struct FontResolver {
    regular: Vec<FontSource>,
    bold: Vec<FontSource>,
    database: OnceCell<fontdb::Database>,
    cache: HashMap<CacheKey, Font>,
}

impl FontResolver {
    pub fn new(regular: Vec<FontSource>, bold: Vec<FontSource>) -> Self {
        Self {
            regular,
            bold,
            database: OnceCell::new(),
            cache: HashMap::new(),
        }
    }

    /// A resolver with no candidates, always yielding the built-in font.
    pub fn builtin_only() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn candidates(&self, bold: bool) -> &[FontSource] {
        if bold { &self.bold } else { &self.regular }
    }

    pub fn resolve(&mut self, request: FontRequest) -> Font {
        let key = CacheKey::from(request);
        if let Some(font) = self.cache.get(&key) {
            return font.clone();
        }

        let font = self.resolve_uncached(request);
        self.cache.insert(key, font.clone());
        font
    }

    fn resolve_uncached(&self, request: FontRequest) -> Font {
        for source in self.candidates(request.bold) {
            match self.load(source, request) {
                Ok(font) => {
                    tracing::debug!(
                        size = request.size,
                        bold = request.bold,
                        "resolved font {source}"
                    );
                    return font;
                }
                Err(err) => tracing::debug!("skipping font candidate: {err}"),
            }
        }

        tracing::warn!(
            size = request.size,
            bold = request.bold,
            "no font candidate could be loaded, falling back to the built-in font"
        );
        Font::Builtin(BuiltinFont::for_size(request.size))
    }

    /// Loads a single candidate without falling back.
    pub fn load(&self, source: &FontSource, request: FontRequest) -> Result<Font, FontError> {
        let (data, index) = match source {
            FontSource::File(path) => {
                let data = std::fs::read(path).map_err(|source| FontError::Io {
                    path: path.clone(),
                    source,
                })?;
                (data, 0)
            }
            FontSource::Family(name) => self.system_face(name, request.bold)?,
        };

        let settings = fontdue::FontSettings {
            collection_index: index,
            ..Default::default()
        };
        let font =
            fontdue::Font::from_bytes(data, settings).map_err(|reason| FontError::Parse {
                font: source.to_string(),
                reason,
            })?;

        Ok(Font::Outline(OutlineFont {
            inner: Arc::new(font),
            size: request.size,
            source: source.clone(),
        }))
    }

    fn system_face(&self, name: &str, bold: bool) -> Result<(Vec<u8>, u32), FontError> {
        let database = self.database.get_or_init(|| {
            let mut database = fontdb::Database::new();
            database.load_system_fonts();
            tracing::debug!(faces = database.len(), "loaded system font database");
            database
        });

        let families = [fontdb::Family::Name(name)];
        let query = fontdb::Query {
            families: &families,
            weight: if bold {
                fontdb::Weight::BOLD
            } else {
                fontdb::Weight::NORMAL
            },
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };

        let id = database
            .query(&query)
            .ok_or_else(|| FontError::NotFound(name.to_string()))?;
        database
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| FontError::NotFound(name.to_string()))
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new(default_candidates(false), default_candidates(true))
    }
}
