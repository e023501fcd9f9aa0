use crate::domain::{UrlError, VideoId};

/// A literal marker followed by the id, which runs until `terminator` or the end of input.
struct Matcher {
    marker: &'static str,
    terminator: char,
}

impl Matcher {
    fn extract<'a>(&self, input: &'a str) -> Option<&'a str> {
        let start = input.find(self.marker)? + self.marker.len();
        let rest = &input[start..];
        let end = rest.find(self.terminator).unwrap_or(rest.len());
        Some(&rest[..end])
    }
}

// Tried in order; the first marker present decides.
const MATCHERS: [Matcher; 3] = [
    Matcher {
        marker: "v=",
        terminator: '&',
    },
    Matcher {
        marker: "youtu.be/",
        terminator: '?',
    },
    Matcher {
        marker: "/embed/",
        terminator: '?',
    },
];

pub fn extract_video_id(input: &str) -> Result<VideoId, UrlError> {
    let invalid = || UrlError::InvalidUrl {
        input: input.to_string(),
    };

    let id = MATCHERS
        .iter()
        .find_map(|matcher| matcher.extract(input))
        .ok_or_else(invalid)?;

    if id.is_empty() {
        return Err(invalid());
    }
    Ok(VideoId::new(id))
}
