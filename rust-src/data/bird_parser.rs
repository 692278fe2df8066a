//! Parsers for bird CLI output.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::models::{normalize_timestamp, AccountInfo, Tweet};


/// Marker bird prints before the numeric user id.
const ID_MARKER: &str = "🪪";


/// Timeline entry as printed by `bird ... --json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BirdTweet {
    id: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    like_count: i64,
    #[serde(default)]
    retweet_count: i64,
    #[serde(default)]
    reply_count: i64,
}


fn handle_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:^|[^A-Za-z0-9_])@([A-Za-z0-9_]{1,15})\b").expect("valid regex")
    })
}


/// `Followers: 1,234` style.
fn label_first_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(followers|following|tweets|posts)\b\s*[:=]?\s*([\d,]+)")
            .expect("valid regex")
    })
}


/// `1,234 followers` style.
fn count_first_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)([\d,]+)\s+(followers|following|tweets|posts)\b").expect("valid regex")
    })
}


fn parse_count(raw: &str) -> Option<i64> {
    raw.replace(',', "").parse().ok()
}


fn assign_count(info: &mut Counts, label: &str, value: i64) {
    match label.to_lowercase().as_str() {
        "followers" => info.followers = info.followers.or(Some(value)),
        "following" => info.following = info.following.or(Some(value)),
        "tweets" | "posts" => info.tweets = info.tweets.or(Some(value)),
        _ => {}
    }
}


#[derive(Default)]
struct Counts {
    followers: Option<i64>,
    following: Option<i64>,
    tweets: Option<i64>,
}


/// Read the counters on one line.
///
/// A line is read in a single style, chosen by whichever form matches
/// first, so `1,234 followers  56 following` never pairs a label with the
/// number of the next counter.
fn collect_counts(line: &str, counts: &mut Counts) {
    let label_start = label_first_re().find(line).map(|m| m.start());
    let count_start = count_first_re().find(line).map(|m| m.start());

    let count_first = match (label_start, count_start) {
        (Some(label), Some(count)) => count < label,
        (None, Some(_)) => true,
        _ => false,
    };

    if count_first {
        for caps in count_first_re().captures_iter(line) {
            if let Some(value) = parse_count(&caps[1]) {
                assign_count(counts, &caps[2], value);
            }
        }
    } else {
        for caps in label_first_re().captures_iter(line) {
            if let Some(value) = parse_count(&caps[2]) {
                assign_count(counts, &caps[1], value);
            }
        }
    }
}


/// Parse the text output of `bird whoami`.
///
/// Returns an error naming the first counter that could not be found.
pub fn parse_whoami(output: &str) -> Result<AccountInfo, String> {
    let mut username = None;
    let mut user_id = None;
    let mut counts = Counts::default();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if username.is_none() {
            if let Some(caps) = handle_re().captures(line) {
                username = Some(caps[1].to_string());
            }
        }

        let lower = line.to_lowercase();
        let is_id_line =
            line.contains(ID_MARKER) || lower.starts_with("id:") || lower.starts_with("user id");
        if user_id.is_none() && is_id_line {
            user_id = line.split_whitespace().last().map(String::from);
        }

        collect_counts(line, &mut counts);
    }

    let followers = counts.followers.ok_or("no follower count")?;
    let following = counts.following.ok_or("no following count")?;
    let tweets_count = counts.tweets.ok_or("no tweet count")?;

    Ok(AccountInfo {
        username,
        user_id,
        followers,
        following,
        tweets_count,
    })
}


/// Parse the JSON output of `bird home --json`, keeping at most `limit` posts.
pub fn parse_timeline(output: &[u8], limit: usize) -> Result<Vec<Tweet>, String> {
    let entries: Vec<BirdTweet> =
        serde_json::from_slice(output).map_err(|e| format!("invalid timeline JSON: {e}"))?;

    let tweets = entries
        .into_iter()
        .take(limit)
        .map(|entry| Tweet {
            id: entry.id,
            created_at: entry
                .created_at
                .as_deref()
                .map(normalize_timestamp)
                .unwrap_or_default(),
            text: entry.text,
            likes: entry.like_count,
            retweets: entry.retweet_count,
            replies: entry.reply_count,
            collected_at: None,
        })
        .collect();

    Ok(tweets)
}
