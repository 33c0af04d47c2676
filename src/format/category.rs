/// Coarse classification of a file derived from its extension, used to pick
/// the embed tag when a link is rendered as markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Image,
    Audio,
    Video,
    Other,
}

const IMAGE_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg", "heic", "avif", "ico", "tiff"];

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "aac", "ogg", "m4a", "wma"];

const VIDEO_EXTENSIONS: &[&str] =
    &["mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "3gp"];

impl FileCategory {
    /// Classifies by the substring after the last `.`, case-insensitively.
    /// Total: anything without a recognized extension is `Other`.
    pub fn from_filename(filename: &str) -> Self {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            FileCategory::Image
        } else if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
            FileCategory::Audio
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            FileCategory::Video
        } else {
            FileCategory::Other
        }
    }
}
