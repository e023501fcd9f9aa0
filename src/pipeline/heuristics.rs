use once_cell::sync::Lazy;
use regex::Regex;

static PROMO_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"subscribe|check out my|visit my|follow me|check my channel|sub4sub|subscribe to my",
    )
    .expect("valid promo regex")
});

/// Indicators that need no model call. Two or more mark a comment as spam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpamSignals {
    pub all_caps: bool,
    pub hashtag_flood: bool,
    pub too_short: bool,
    pub has_link: bool,
    pub mention_flood: bool,
    pub self_promotion: bool,
}

impl SpamSignals {
    pub const THRESHOLD: usize = 2;

    pub fn detect(comment: &str) -> Self {
        let lowered = comment.to_lowercase();
        Self {
            all_caps: is_all_caps(comment),
            hashtag_flood: count_char(comment, '#') > 3,
            too_short: comment.split_whitespace().count() < 3,
            has_link: lowered.contains("http") || lowered.contains("www."),
            mention_flood: count_char(comment, '@') > 2,
            self_promotion: PROMO_REGEX.is_match(&lowered),
        }
    }

    pub fn count(&self) -> usize {
        [
            self.all_caps,
            self.hashtag_flood,
            self.too_short,
            self.has_link,
            self.mention_flood,
            self.self_promotion,
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count()
    }

    pub fn is_spam(&self) -> bool {
        self.count() >= Self::THRESHOLD
    }
}

// At least one cased character and none of them lowercase.
fn is_all_caps(text: &str) -> bool {
    let mut cased = false;
    for ch in text.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            cased = true;
        }
    }
    cased
}

fn count_char(value: &str, needle: char) -> usize {
    value.chars().filter(|ch| *ch == needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_signal_fires_on_its_own() {
        let s = SpamSignals::detect("THIS IS A GREAT VIDEO 100%");
        assert!(s.all_caps);
        assert_eq!(s.count(), 1);

        let s = SpamSignals::detect("so many tags #a #b #c #d");
        assert!(s.hashtag_flood);
        assert_eq!(s.count(), 1);

        let s = SpamSignals::detect("first!");
        assert!(s.too_short);
        assert_eq!(s.count(), 1);

        let s = SpamSignals::detect("the docs at WWW.example.com explain it");
        assert!(s.has_link);
        assert_eq!(s.count(), 1);

        let s = SpamSignals::detect("thanks @ann @bob @cid for the help");
        assert!(s.mention_flood);
        assert_eq!(s.count(), 1);

        let s = SpamSignals::detect("please Check Out My latest upload");
        assert!(s.self_promotion);
        assert_eq!(s.count(), 1);
    }

    #[test]
    fn thresholds_are_strict() {
        let s = SpamSignals::detect("three tags here #a #b #c");
        assert!(!s.hashtag_flood);
        let s = SpamSignals::detect("two mentions @ann @bob here");
        assert!(!s.mention_flood);
        let s = SpamSignals::detect("three words here");
        assert!(!s.too_short);
    }

    #[test]
    fn caps_needs_a_cased_character() {
        assert!(!is_all_caps("12345 !!!"));
        assert!(is_all_caps("WOW 10/10"));
        assert!(!is_all_caps("WOW 10/10 nice"));
    }

    #[test]
    fn promotion_matches_only_plain_lowercasing() {
        assert!(SpamSignals::detect("SUBSCRIBE to see more").self_promotion);
        let s = SpamSignals::detect("ſubscribe now");
        assert!(!s.self_promotion);
        assert!(!s.is_spam());
    }

    fn is_spam(comment: &str) -> bool {
        SpamSignals::detect(comment).is_spam()
    }

    #[test]
    fn two_signals_make_spam() {
        assert!(is_spam("sub4sub anyone?"));
        assert!(is_spam("FREE GIFTS AT HTTP://X.EXAMPLE NOW"));
        assert!(!is_spam("The explanation of lifetimes at 4:20 was really clear"));
        assert!(!is_spam("great video, check out the docs at https://docs.rs"));
    }
}
