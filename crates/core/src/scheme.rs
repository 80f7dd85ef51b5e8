//! Named colour schemes and the catalog they are loaded from.
//!
//! A scheme is ten colours in fixed slot order: foreground, background, six
//! accents, hyperlink and followed hyperlink. The catalog is a JSON object
//! keyed by lowercase scheme name whose records hold `"#RRGGBB"` strings.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colour::{hex_to_rgb, rgb_to_hex, Rgb};
use crate::dichromat::Deficiency;
use crate::error::ColourError;
use crate::shift::{colour_shift, Severity};

/// Scheme selected when the caller does not name one.
pub const DEFAULT_SCHEME: &str = "twilight";

/// Number of slots in every scheme.
pub const SLOT_COUNT: usize = 10;

const BUILTIN_CATALOG: &str = include_str!("../data/schemes.json");

/// The semantic role of each scheme colour, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Foreground,
    Background,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hyperlink,
    FollowedHyperlink,
}

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot::Foreground,
        Slot::Background,
        Slot::Accent1,
        Slot::Accent2,
        Slot::Accent3,
        Slot::Accent4,
        Slot::Accent5,
        Slot::Accent6,
        Slot::Hyperlink,
        Slot::FollowedHyperlink,
    ];

    pub const ACCENTS: [Slot; 6] = [
        Slot::Accent1,
        Slot::Accent2,
        Slot::Accent3,
        Slot::Accent4,
        Slot::Accent5,
        Slot::Accent6,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Field name used in the catalog, e.g. `"ForegroundColour"`.
    pub fn name(self) -> &'static str {
        match self {
            Slot::Foreground => "ForegroundColour",
            Slot::Background => "BackgroundColour",
            Slot::Accent1 => "Accent1",
            Slot::Accent2 => "Accent2",
            Slot::Accent3 => "Accent3",
            Slot::Accent4 => "Accent4",
            Slot::Accent5 => "Accent5",
            Slot::Accent6 => "Accent6",
            Slot::Hyperlink => "Hyperlink",
            Slot::FollowedHyperlink => "FollowedHyperlink",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn default_hyperlink() -> String {
    "#0000FF".to_string()
}

fn default_followed_hyperlink() -> String {
    "#FF00FF".to_string()
}

/// One catalog entry as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchemeRecord {
    pub foreground_colour: String,
    pub background_colour: String,
    pub accent1: String,
    pub accent2: String,
    pub accent3: String,
    pub accent4: String,
    pub accent5: String,
    pub accent6: String,
    #[serde(default = "default_hyperlink")]
    pub hyperlink: String,
    #[serde(default = "default_followed_hyperlink")]
    pub followed_hyperlink: String,
}

impl SchemeRecord {
    pub fn hex(&self, slot: Slot) -> &str {
        match slot {
            Slot::Foreground => &self.foreground_colour,
            Slot::Background => &self.background_colour,
            Slot::Accent1 => &self.accent1,
            Slot::Accent2 => &self.accent2,
            Slot::Accent3 => &self.accent3,
            Slot::Accent4 => &self.accent4,
            Slot::Accent5 => &self.accent5,
            Slot::Accent6 => &self.accent6,
            Slot::Hyperlink => &self.hyperlink,
            Slot::FollowedHyperlink => &self.followed_hyperlink,
        }
    }

    /// Decodes every slot into a [`ColourScheme`] called `name`.
    pub fn to_scheme(&self, name: &str) -> Result<ColourScheme, ColourError> {
        let mut colours = [Rgb::BLACK; SLOT_COUNT];
        for slot in Slot::ALL {
            colours[slot.index()] = hex_to_rgb(self.hex(slot)).map_err(|e| {
                ColourError::InvalidScheme(format!("scheme \"{name}\", {slot}: {e}"))
            })?;
        }
        Ok(ColourScheme::new(name, colours))
    }
}

/// A decoded scheme: a name plus ten colours in [`Slot`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourScheme {
    name: String,
    colours: [Rgb; SLOT_COUNT],
}

impl ColourScheme {
    pub fn new(name: &str, colours: [Rgb; SLOT_COUNT]) -> Self {
        Self {
            name: name.to_string(),
            colours,
        }
    }

    /// Builds a scheme from a slice, which must hold exactly ten colours.
    pub fn from_slice(name: &str, colours: &[Rgb]) -> Result<Self, ColourError> {
        let colours: [Rgb; SLOT_COUNT] = colours.try_into().map_err(|_| {
            ColourError::InvalidScheme(format!(
                "expected {SLOT_COUNT} colours, got {}",
                colours.len()
            ))
        })?;
        Ok(Self::new(name, colours))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, slot: Slot) -> Rgb {
        self.colours[slot.index()]
    }

    pub fn foreground(&self) -> Rgb {
        self.get(Slot::Foreground)
    }

    pub fn background(&self) -> Rgb {
        self.get(Slot::Background)
    }

    /// The six accent colours in order.
    pub fn accents(&self) -> &[Rgb] {
        &self.colours[Slot::Accent1.index()..=Slot::Accent6.index()]
    }

    pub fn colours(&self) -> &[Rgb] {
        &self.colours
    }

    /// Dark-mode variant: foreground and background swapped.
    pub fn dark(&self) -> Self {
        let mut colours = self.colours;
        colours.swap(Slot::Foreground.index(), Slot::Background.index());
        Self {
            name: self.name.clone(),
            colours,
        }
    }

    /// Applies [`colour_shift`] to every slot.
    pub fn shifted(&self, deficiency: Deficiency, severity: Severity) -> Self {
        Self {
            name: self.name.clone(),
            colours: self.colours.map(|c| colour_shift(c, deficiency, severity)),
        }
    }

    pub fn to_record(&self) -> SchemeRecord {
        let hex = |slot: Slot| rgb_to_hex(self.get(slot));
        SchemeRecord {
            foreground_colour: hex(Slot::Foreground),
            background_colour: hex(Slot::Background),
            accent1: hex(Slot::Accent1),
            accent2: hex(Slot::Accent2),
            accent3: hex(Slot::Accent3),
            accent4: hex(Slot::Accent4),
            accent5: hex(Slot::Accent5),
            accent6: hex(Slot::Accent6),
            hyperlink: hex(Slot::Hyperlink),
            followed_hyperlink: hex(Slot::FollowedHyperlink),
        }
    }
}

/// All known schemes, keyed by lowercase name.
#[derive(Debug, Clone)]
pub struct Catalog {
    schemes: BTreeMap<String, ColourScheme>,
}

impl Catalog {
    /// Parses a catalog from JSON, decoding every record up front.
    ///
    /// Returns `ColourError::InvalidScheme` for malformed JSON or colours.
    pub fn from_json(json: &str) -> Result<Self, ColourError> {
        let records: BTreeMap<String, SchemeRecord> = serde_json::from_str(json)
            .map_err(|e| ColourError::InvalidScheme(format!("catalog: {e}")))?;
        let schemes = records
            .iter()
            .map(|(name, record)| {
                let key = name.to_lowercase();
                record.to_scheme(&key).map(|scheme| (key, scheme))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        tracing::debug!(count = schemes.len(), "parsed colour scheme catalog");
        Ok(Self { schemes })
    }

    /// Reads and parses a catalog file.
    pub fn from_path(path: &Path) -> Result<Self, ColourError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ColourError::Io(format!("{}: {e}", path.display())))?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), count = catalog.len(), "loaded colour scheme catalog");
        Ok(catalog)
    }

    /// The catalog compiled into the crate.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CATALOG).expect("built-in scheme catalog is valid")
    }

    /// Looks up a scheme by name, ignoring case.
    pub fn get(&self, name: &str) -> Result<&ColourScheme, ColourError> {
        self.schemes
            .get(&name.trim().to_lowercase())
            .ok_or_else(|| ColourError::UnknownScheme(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// Lowercase scheme names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.schemes.keys().map(String::as_str).collect()
    }

    /// Scheme names with the first letter capitalised, sorted.
    pub fn display_names(&self) -> Vec<String> {
        self.schemes
            .keys()
            .map(|name| {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
