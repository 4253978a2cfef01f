//! Trending news board.

use crate::sentiment::{generate_prediction, AiPrediction, Sentiment, SentimentLevel};
use crate::time::format_time_ago;
use crate::volume::{volatile_series, SOCIAL_VOLUME_LABELS};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Social-volume chart data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialVolume {
    pub data: Vec<u64>,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingStory {
    pub id: String,
    pub rank: u32,
    pub title: String,
    pub social_volume: SocialVolume,
    /// Truncated summary for the card view.
    pub ai_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_prediction: Option<AiPrediction>,
    pub sentiment: Sentiment,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
    /// `updated_at` relative to generation time, e.g. "3m ago".
    pub updated_ago: String,
}

/// Static description of a board entry.
struct StorySeed {
    title: &'static str,
    base_volume: f64,
    volatility: f64,
    level: SentimentLevel,
    score: i32,
    age_secs: i64,
    full_summary: &'static str,
}

/// Length of the card-view summary, in characters, before the ellipsis.
const SHORT_SUMMARY_CHARS: usize = 200;

/// Every story was refreshed this long before `now`.
const UPDATED_AGO_SECS: i64 = 180;

const SEEDS: [StorySeed; 5] = [
    StorySeed {
        title: "Trump Mortgage Stimulus",
        base_volume: 200.0,
        volatility: 0.5,
        level: SentimentLevel::Bullish,
        score: 75,
        age_secs: 3_600,
        full_summary: "President Trump has directed the U.S. government to purchase $200 billion in mortgage bonds to lower mortgage rates and improve housing affordability. This move aims to reduce monthly payments for homeowners and stimulate the housing market. The announcement has sparked significant discussion across social media platforms, with many viewing it as a positive development for the economy and real estate sector.",
    },
    StorySeed {
        title: "NFP Jobs Payrolls",
        base_volume: 130.0,
        volatility: 0.45,
        level: SentimentLevel::Neutral,
        score: 15,
        age_secs: 7_200,
        full_summary: "The US added 50,000 jobs in December, missing the 60,000 estimate, while the unemployment rate fell to 4.4%, better than expected. Wage growth remained steady at 0.3% monthly and 3.8% yearly. Mixed signals from the labor market have created uncertainty, with some analysts viewing the data as positive for the economy while others express concern about job growth.",
    },
    StorySeed {
        title: "ZEC, AVICI Turmoil",
        base_volume: 120.0,
        volatility: 0.6,
        level: SentimentLevel::VeryBearish,
        score: -85,
        age_secs: 5_400,
        full_summary: "Zcash's entire core development team resigned amid a governance dispute, causing a sharp 20-45% price drop and wiping out $1.6 billion in market cap. The departing devs plan to launch a new privacy-focused cryptocurrency. This development has created significant uncertainty in the privacy coin sector, with investors and community members expressing concern about the future of Zcash.",
    },
    StorySeed {
        title: "Bitcoin ETF Approval Surge",
        base_volume: 280.0,
        volatility: 0.35,
        level: SentimentLevel::VeryBullish,
        score: 90,
        age_secs: 10_800,
        full_summary: "Major institutional investors are showing increased interest in Bitcoin ETFs, with record inflows of $2.5 billion in the past week. Analysts predict this trend will continue as regulatory clarity improves. The surge in institutional adoption has been met with positive sentiment across crypto communities.",
    },
    StorySeed {
        title: "Ethereum Layer 2 Scaling Update",
        base_volume: 145.0,
        volatility: 0.4,
        level: SentimentLevel::Bullish,
        score: 65,
        age_secs: 14_400,
        full_summary: "Ethereum's Layer 2 solutions have processed over 10 million transactions this week, demonstrating significant scalability improvements. Transaction fees have dropped by 40% compared to mainnet. This development is being viewed positively by the Ethereum community as it addresses long-standing scalability concerns.",
    },
];

/// First sentences of `full` that fit the card view, with an ellipsis.
fn short_summary(full: &str) -> String {
    let mut short = String::new();
    for sentence in full.split_inclusive(". ") {
        if !short.is_empty() && short.chars().count() + sentence.chars().count() > SHORT_SUMMARY_CHARS {
            break;
        }
        short.push_str(sentence);
    }
    format!("{}...", short.trim_end().trim_end_matches('.'))
}

/// The trending board as of `now`, with fresh volume series from `rng`.
pub fn trending_stories<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<TrendingStory> {
    let labels: Vec<String> = SOCIAL_VOLUME_LABELS.iter().map(|s| s.to_string()).collect();

    SEEDS
        .iter()
        .enumerate()
        .map(|(idx, seed)| {
            let data = volatile_series(seed.base_volume, seed.volatility, rng);
            let sentiment = Sentiment::new(seed.level, seed.score);
            let rank = idx as u32 + 1;
            let updated_at = now - Duration::seconds(UPDATED_AGO_SECS);

            TrendingStory {
                id: rank.to_string(),
                rank,
                title: seed.title.to_string(),
                ai_prediction: Some(generate_prediction(&sentiment, &data)),
                social_volume: SocialVolume {
                    data,
                    labels: labels.clone(),
                },
                ai_summary: short_summary(seed.full_summary),
                full_summary: Some(seed.full_summary.to_string()),
                sentiment,
                timestamp: now - Duration::seconds(seed.age_secs),
                updated_at,
                updated_ago: format_time_ago(updated_at, now),
            }
        })
        .collect()
}
