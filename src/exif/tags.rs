use std::collections::HashMap;
use std::fmt;

/// The EXIF tags a caption is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredTag {
    Model,
    LensModel,
    ShutterSpeedValue,
    ApertureValue,
    FocalLength,
    ISOSpeedRatings,
}

impl RequiredTag {
    /// All required tags, in caption order.
    pub const ALL: [RequiredTag; 6] = [
        RequiredTag::Model,
        RequiredTag::LensModel,
        RequiredTag::FocalLength,
        RequiredTag::ApertureValue,
        RequiredTag::ShutterSpeedValue,
        RequiredTag::ISOSpeedRatings,
    ];

    /// The EXIF tag code.
    pub fn code(self) -> u16 {
        match self {
            RequiredTag::Model => 0x0110,
            RequiredTag::LensModel => 0xA434,
            RequiredTag::ShutterSpeedValue => 0x9201,
            RequiredTag::ApertureValue => 0x9202,
            RequiredTag::FocalLength => 0x920A,
            RequiredTag::ISOSpeedRatings => 0x8827,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RequiredTag::Model => "Model",
            RequiredTag::LensModel => "LensModel",
            RequiredTag::ShutterSpeedValue => "ShutterSpeedValue",
            RequiredTag::ApertureValue => "ApertureValue",
            RequiredTag::FocalLength => "FocalLength",
            RequiredTag::ISOSpeedRatings => "ISOSpeedRatings",
        }
    }
}

impl fmt::Display for RequiredTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded tag value, detached from the metadata library that produced it.
///
/// Signed and unsigned EXIF rationals both land in [`TagValue::Rational`].
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Text(String),
    Rational { num: i64, den: i64 },
    Integer(i64),
}

impl TagValue {
    /// Build a text value, dropping the NUL padding and quoting EXIF strings often carry.
    pub fn text(raw: &str) -> Self {
        TagValue::Text(clean_text(raw))
    }

    pub fn rational(num: i64, den: i64) -> Self {
        TagValue::Rational { num, den }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Text(s) => f.write_str(s),
            TagValue::Rational { num, den } => write!(f, "{num}/{den}"),
            TagValue::Integer(n) => write!(f, "{n}"),
        }
    }
}

pub(crate) fn clean_text(raw: &str) -> String {
    raw.trim_matches(|c: char| c == '\0' || c == '"' || c.is_whitespace())
        .to_string()
}

/// Read access to decoded tags.
///
/// [`TagSet`] is the implementation produced by [`read_tags`](super::read_tags);
/// anything else that can answer tag lookups can feed the extractor.
pub trait TagSource {
    fn get(&self, tag: RequiredTag) -> Option<&TagValue>;
}

/// The required tags found in one metadata block.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    values: HashMap<RequiredTag, TagValue>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: RequiredTag, value: TagValue) -> Option<TagValue> {
        self.values.insert(tag, value)
    }

    pub fn remove(&mut self, tag: RequiredTag) -> Option<TagValue> {
        self.values.remove(&tag)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TagSource for TagSet {
    fn get(&self, tag: RequiredTag) -> Option<&TagValue> {
        self.values.get(&tag)
    }
}

impl FromIterator<(RequiredTag, TagValue)> for TagSet {
    fn from_iter<I: IntoIterator<Item = (RequiredTag, TagValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_codes_match_exif() {
        assert_eq!(RequiredTag::Model.code(), 0x0110);
        assert_eq!(RequiredTag::ISOSpeedRatings.code(), 0x8827);
        assert_eq!(RequiredTag::LensModel.code(), 0xA434);
    }

    #[test]
    fn text_strips_padding_and_quotes() {
        assert_eq!(TagValue::text("NIKON D90\0\0"), TagValue::Text("NIKON D90".into()));
        assert_eq!(TagValue::text("\"X100V\" "), TagValue::Text("X100V".into()));
    }

    #[test]
    fn display_forms() {
        assert_eq!(TagValue::rational(50, 1).to_string(), "50/1");
        assert_eq!(TagValue::Integer(200).to_string(), "200");
        assert_eq!(TagValue::text("abc").to_string(), "abc");
    }

    #[test]
    fn tag_set_lookup() {
        let tags: TagSet = [(RequiredTag::Model, TagValue::text("X"))].into_iter().collect();
        assert_eq!(tags.len(), 1);
        assert!(tags.get(RequiredTag::Model).is_some());
        assert!(tags.get(RequiredTag::LensModel).is_none());
    }
}
