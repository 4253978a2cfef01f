//! Sentiment levels and the trade-outlook heuristic.

use serde::{Deserialize, Serialize};

/// Score at or above which sentiment reads as bullish.
const BULLISH_SCORE: i32 = 50;
/// Score at or below which sentiment reads as bearish.
const BEARISH_SCORE: i32 = -50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLevel {
    VeryBearish,
    Bearish,
    Neutral,
    Bullish,
    VeryBullish,
}

impl SentimentLevel {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryBearish => "Very Bearish",
            Self::Bearish => "Bearish",
            Self::Neutral => "Neutral",
            Self::Bullish => "Bullish",
            Self::VeryBullish => "Very Bullish",
        }
    }
}

/// Sentiment reading of a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentiment {
    pub level: SentimentLevel,
    /// -100 (very bearish) to 100 (very bullish).
    pub score: i32,
}

impl Sentiment {
    pub fn new(level: SentimentLevel, score: i32) -> Self {
        Self { level, score }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionType {
    Bullish,
    Neutral,
    Bearish,
}

/// Trade outlook derived from sentiment and social volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiPrediction {
    #[serde(rename = "type")]
    pub kind: PredictionType,
    pub message: String,
    /// 0 to 100.
    pub confidence: u32,
}

/// Outlook for `sentiment` given its social-volume series.
///
/// Strong bullish needs a rising series whose last three points average
/// above 1.2x the series mean; strong bearish mirrors it below 0.8x.
pub fn generate_prediction(sentiment: &Sentiment, volume: &[u64]) -> AiPrediction {
    let score = sentiment.score;
    let magnitude = score.unsigned_abs();

    let trend = match (volume.first(), volume.last()) {
        (Some(&first), Some(&last)) if volume.len() >= 2 => last as f64 - first as f64,
        _ => 0.0,
    };
    let recent = volume.iter().rev().take(3).sum::<u64>() as f64 / 3.0;
    let mean = if volume.is_empty() {
        0.0
    } else {
        volume.iter().sum::<u64>() as f64 / volume.len() as f64
    };

    let (kind, message, confidence) = if score >= BULLISH_SCORE {
        if trend > 0.0 && recent > mean * 1.2 {
            (
                PredictionType::Bullish,
                "Market sentiment is turning bullish. Momentum and social activity suggest this could be a good time to trade.",
                (60 + magnitude / 2).min(85),
            )
        } else {
            (
                PredictionType::Bullish,
                "Market sentiment is bullish. Consider monitoring for confirmation before entering positions.",
                (50 + magnitude / 3).min(75),
            )
        }
    } else if score <= BEARISH_SCORE {
        if trend < 0.0 && recent < mean * 0.8 {
            (
                PredictionType::Bearish,
                "Market sentiment is bearish. This is not an ideal time to trade.",
                (60 + magnitude / 2).min(85),
            )
        } else {
            (
                PredictionType::Bearish,
                "Market sentiment is bearish. Exercise caution and wait for clearer signals.",
                (50 + magnitude / 3).min(75),
            )
        }
    } else {
        (
            PredictionType::Neutral,
            "Market sentiment is mixed. Waiting for confirmation may be safer.",
            50 + magnitude / 4,
        )
    };

    AiPrediction {
        kind,
        message: message.to_string(),
        confidence,
    }
}
