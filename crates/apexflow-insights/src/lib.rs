//! Demo market insights.
//!
//! All data here is fabricated for display:
//! - `generate_prediction`: sentiment + social volume -> trade outlook
//! - `volatile_series`: seven-point random-walk social volume
//! - `trending_stories`: the trending news board
//! - `format_time_ago`: relative timestamps

pub mod sentiment;
pub mod stories;
pub mod time;
pub mod volume;

pub use sentiment::{generate_prediction, AiPrediction, PredictionType, Sentiment, SentimentLevel};
pub use stories::{trending_stories, SocialVolume, TrendingStory};
pub use time::format_time_ago;
pub use volume::{volatile_series, SERIES_LEN, SOCIAL_VOLUME_LABELS};
