//! Every aggregation for one sender filter, bundled for presentation.
//!
//! A [`Report`] holds one [`LabelSection`] per sentiment label. Sender
//! contribution tables only make sense across all participants, so they
//! are filled in for [`SenderFilter::Overall`] only.

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::core::activity::{
    DailyCount, Heatmap, MonthlyCount, activity_heatmap, daily_timeline, month_activity,
    monthly_timeline, weekday_activity,
};
use crate::core::contribution::{Share, percentage, top_senders};
use crate::core::filter::{SenderFilter, by_sender, select, sender_choices};
use crate::core::models::{Aggregate, Tally};
use crate::core::words::{StopWords, most_common_words, wordcloud_text};
use crate::sentiment::{Sentiment, TaggedMessage};

/// Aggregations for one sentiment label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelSection {
    pub label: Sentiment,
    /// Messages carrying this label after the sender filter.
    pub messages: usize,
    pub weekday_activity: Aggregate<Tally>,
    pub month_activity: Aggregate<Tally>,
    pub heatmap: Aggregate<Heatmap>,
    pub daily_timeline: Aggregate<Vec<DailyCount>>,
    pub monthly_timeline: Aggregate<Vec<MonthlyCount>>,
    pub most_common_words: Aggregate<Tally>,
    pub wordcloud: Aggregate<String>,
}

/// Sender tables for one sentiment label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub label: Sentiment,
    pub percentage: Aggregate<Vec<Share>>,
    pub top_senders: Aggregate<Tally>,
}

/// Full analysis of a tagged record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub sender: SenderFilter,
    /// Records passing the sender filter, any label.
    pub total_messages: usize,
    /// Sender selector choices, `Overall` first.
    pub participants: Vec<String>,
    /// Positive, neutral and negative sections, in that order.
    pub sections: Vec<LabelSection>,
    /// Empty unless the sender filter is `Overall`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contributions: Vec<Contribution>,
}

impl Report {
    /// Runs every aggregation for `sender`.
    pub fn build(
        records: &[TaggedMessage],
        sender: &SenderFilter,
        stop_words: &StopWords,
        config: &AnalysisConfig,
    ) -> Self {
        let sections = Sentiment::all()
            .into_iter()
            .map(|label| LabelSection {
                label,
                messages: select(records, sender, label).count(),
                weekday_activity: weekday_activity(sender, records, label),
                month_activity: month_activity(sender, records, label),
                heatmap: activity_heatmap(sender, records, label),
                daily_timeline: daily_timeline(sender, records, label),
                monthly_timeline: monthly_timeline(
                    sender,
                    records,
                    label,
                    config.monthly_timeline,
                ),
                most_common_words: most_common_words(sender, records, label, stop_words, config),
                wordcloud: wordcloud_text(sender, records, label, stop_words, config),
            })
            .collect();

        let contributions = if sender.is_overall() {
            Sentiment::all()
                .into_iter()
                .map(|label| Contribution {
                    label,
                    percentage: percentage(sender, records, label),
                    top_senders: top_senders(sender, records, label, config.top_senders),
                })
                .collect()
        } else {
            Vec::new()
        };

        let report = Self {
            sender: sender.clone(),
            total_messages: by_sender(records, sender).count(),
            participants: sender_choices(records),
            sections,
            contributions,
        };
        tracing::debug!(
            sender = %report.sender,
            messages = report.total_messages,
            "built report"
        );
        report
    }

    /// Section for `label`.
    pub fn section(&self, label: Sentiment) -> Option<&LabelSection> {
        self.sections.iter().find(|s| s.label == label)
    }

    /// Contribution tables for `label`, `None` for a single-sender report.
    pub fn contribution(&self, label: Sentiment) -> Option<&Contribution> {
        self.contributions.iter().find(|c| c.label == label)
    }
}
