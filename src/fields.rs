use std::env;
use std::path::PathBuf;

/// Prompt text shown in the title slot until the user supplies a real show
/// title. The title is never allowed to go empty; writes of the empty string
/// re-substitute this placeholder.
pub const SHOW_TITLE_PLACEHOLDER: &str = "!!! Enter Show Title !!!";

/// One slate's worth of metadata. Plain text only; there is no persistence of
/// the record itself, only of the rendered image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlateFields {
    pub show_title: String,
    pub shot: String,
    pub filename: String,
    pub artist: String,
    pub frame_range: String,
    pub date: String,
    pub notes: String,
}

/// Field selector for [`SlateFields::set`] / [`SlateFields::get`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlateField {
    ShowTitle,
    Shot,
    Filename,
    Artist,
    FrameRange,
    Date,
    Notes,
}

impl SlateFields {
    /// Build the initial record. `date` is set exactly once here and only
    /// changes via an explicit edit afterwards.
    pub fn new(config: &SlateConfig) -> Self {
        let show_title = config
            .show_default
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| SHOW_TITLE_PLACEHOLDER.to_string());

        Self {
            show_title,
            shot: config.shot_default.clone().unwrap_or_default(),
            filename: String::new(),
            artist: config.artist_default.clone().unwrap_or_default(),
            frame_range: String::new(),
            date: chrono::Local::now().date_naive().to_string(),
            notes: String::new(),
        }
    }

    /// Overwrite one field. No validation beyond the non-empty substitution
    /// for the show title; always succeeds.
    pub fn set(&mut self, field: SlateField, value: &str) {
        let slot = match field {
            SlateField::ShowTitle => &mut self.show_title,
            SlateField::Shot => &mut self.shot,
            SlateField::Filename => &mut self.filename,
            SlateField::Artist => &mut self.artist,
            SlateField::FrameRange => &mut self.frame_range,
            SlateField::Date => &mut self.date,
            SlateField::Notes => &mut self.notes,
        };
        *slot = value.to_string();

        if self.show_title.is_empty() {
            self.show_title = SHOW_TITLE_PLACEHOLDER.to_string();
        }
    }

    pub fn get(&self, field: SlateField) -> &str {
        match field {
            SlateField::ShowTitle => &self.show_title,
            SlateField::Shot => &self.shot,
            SlateField::Filename => &self.filename,
            SlateField::Artist => &self.artist,
            SlateField::FrameRange => &self.frame_range,
            SlateField::Date => &self.date,
            SlateField::Notes => &self.notes,
        }
    }
}

/// Startup configuration, read once. Replaces the env-var globals of the
/// original tool with an explicit struct; `from_env` keeps the old behavior
/// available for plain process invocation.
#[derive(Clone, Debug, Default)]
pub struct SlateConfig {
    pub show_default: Option<String>,
    pub shot_default: Option<String>,
    pub artist_default: Option<String>,
    /// Font file to shape slate text with. When unset, a fixed list of common
    /// system font locations is probed.
    pub font_source: Option<PathBuf>,
    /// Background template image. When unset, a solid fill is used.
    pub background_source: Option<PathBuf>,
}

impl SlateConfig {
    /// Read `SHOW`, `SHOT` and `ARTIST` from the process environment. The
    /// artist falls back to the OS-reported user identity.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let user_var = if cfg!(windows) { "USERNAME" } else { "USER" };
        let artist_default = lookup("ARTIST").or_else(|| lookup(user_var));

        Self {
            show_default: lookup("SHOW"),
            shot_default: lookup("SHOT"),
            artist_default,
            font_source: None,
            background_source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_title_defaults_to_placeholder() {
        let fields = SlateFields::new(&SlateConfig::default());
        assert_eq!(fields.show_title, SHOW_TITLE_PLACEHOLDER);
        assert!(fields.shot.is_empty());
        assert!(fields.notes.is_empty());
    }

    #[test]
    fn empty_show_title_write_resubstitutes_placeholder() {
        let mut fields = SlateFields::new(&SlateConfig::default());
        fields.set(SlateField::ShowTitle, "NIGHT SHIFT");
        assert_eq!(fields.show_title, "NIGHT SHIFT");

        fields.set(SlateField::ShowTitle, "");
        assert_eq!(fields.show_title, SHOW_TITLE_PLACEHOLDER);
    }

    #[test]
    fn date_is_todays_calendar_date() {
        let fields = SlateFields::new(&SlateConfig::default());
        assert_eq!(fields.date, chrono::Local::now().date_naive().to_string());
    }

    #[test]
    fn set_get_roundtrip_is_verbatim() {
        let mut fields = SlateFields::new(&SlateConfig::default());
        let edits = [
            (SlateField::Shot, "sq010_sh0400"),
            (SlateField::Filename, "sq010_sh0400_comp_v012.mov"),
            (SlateField::Artist, "sberger"),
            (SlateField::FrameRange, "1001-1096"),
            (SlateField::Date, "2019-02-07"),
            (SlateField::Notes, "  spaces kept verbatim  "),
        ];
        for (field, value) in edits {
            fields.set(field, value);
            assert_eq!(fields.get(field), value);
        }
    }

    #[test]
    fn config_from_vars_reads_defaults_and_user_fallback() {
        let config = SlateConfig::from_vars(|key| match key {
            "SHOW" => Some("NIGHT SHIFT".to_string()),
            "SHOT" => Some("sh0400".to_string()),
            "USER" | "USERNAME" => Some("sberger".to_string()),
            _ => None,
        });
        assert_eq!(config.show_default.as_deref(), Some("NIGHT SHIFT"));
        assert_eq!(config.shot_default.as_deref(), Some("sh0400"));
        assert_eq!(config.artist_default.as_deref(), Some("sberger"));

        let explicit = SlateConfig::from_vars(|key| match key {
            "ARTIST" => Some("lead_comp".to_string()),
            "USER" | "USERNAME" => Some("sberger".to_string()),
            _ => None,
        });
        assert_eq!(explicit.artist_default.as_deref(), Some("lead_comp"));
    }

    #[test]
    fn config_from_vars_handles_empty_environment() {
        let config = SlateConfig::from_vars(|_| None);
        assert!(config.show_default.is_none());
        assert!(config.shot_default.is_none());
        assert!(config.artist_default.is_none());

        let fields = SlateFields::new(&config);
        assert_eq!(fields.show_title, SHOW_TITLE_PLACEHOLDER);
        assert!(fields.artist.is_empty());
    }
}
