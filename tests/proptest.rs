//! Property-based tests for chatvibe.
//!
//! These tests generate random inputs to find edge cases.

use chrono::NaiveDate;
use proptest::prelude::*;

use chatvibe::prelude::*;

const SENDERS: [&str; 6] = ["Alice", "Bob", "Charlie", "User123", "Иван", "+91 98765 43210"];

/// Generate a random record using fast strategies (no regex!)
fn arb_record() -> impl Strategy<Value = TaggedMessage> {
    (
        prop::sample::select(SENDERS.to_vec()),
        prop::sample::select(vec![
            "Hello",
            "good morning",
            "meet at 10:30: ok?",
            "<Media omitted>",
            "Привет мир",
            "🎉🔥💀 emoji",
            "the the the",
        ]),
        (1u32..=28, 1u32..=12, 2015i32..=2030),
        (0u32..24, 0u32..60),
        (0u8..=10, 0u8..=10, 0u8..=10),
    )
        .prop_map(|(sender, body, (day, month, year), (hour, minute), (p, u, n))| {
            let ts = NaiveDate::from_ymd_opt(year, month, day)
                .and_then(|d| d.and_hms_opt(hour, minute, 0))
                .unwrap();
            let polarity = Polarity::new(p as f64 / 10.0, u as f64 / 10.0, n as f64 / 10.0);
            TaggedMessage::new(Message::new(ts, sender, body), polarity)
        })
}

fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<TaggedMessage>> {
    prop::collection::vec(arb_record(), 0..max_len)
}

/// A transcript line: either a sender message or a system notification.
fn arb_line() -> impl Strategy<Value = (String, bool)> {
    (
        prop::sample::select(SENDERS.to_vec()),
        prop::sample::select(vec!["hi", "see you at 5:30", "ok ok", "Привет"]),
        (1u32..=28, 1u32..=12, 0u32..100),
        (0u32..24, 0u32..60),
        any::<bool>(),
    )
        .prop_map(|(sender, body, (d, m, y), (h, min), system)| {
            let stamp = format!("{d}/{m}/{y:02}, {h}:{min:02} - ");
            if system {
                (format!("{stamp}{sender} left"), true)
            } else {
                (format!("{stamp}{sender}: {body}"), false)
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // LABEL PROPERTIES
    // ============================================

    /// A label is always one of -1, 0, 1
    #[test]
    fn label_is_trinary(p in 0.0f64..1.0, u in 0.0f64..1.0, n in 0.0f64..1.0) {
        let label = Polarity::new(p, u, n).label().value();
        prop_assert!([-1, 0, 1].contains(&label));
    }

    /// A strictly dominant weight decides the label
    #[test]
    fn dominant_weight_wins(a in 0.0f64..1.0, b in 0.0f64..1.0, bump in 0.001f64..1.0) {
        let top = a.max(b) + bump;
        prop_assert_eq!(Polarity::new(top, a, b).label(), Sentiment::Positive);
        prop_assert_eq!(Polarity::new(a, top, b).label(), Sentiment::Neutral);
        prop_assert_eq!(Polarity::new(a, b, top).label(), Sentiment::Negative);
    }

    /// Tagging keeps every record in order
    #[test]
    fn tag_preserves_records(records in arb_records(20)) {
        let messages: Vec<Message> = records.iter().map(|r| r.message().clone()).collect();
        let scorer = |_: &str| Polarity::new(0.0, 1.0, 0.0);
        let tagged = tag(messages.clone(), &scorer).unwrap();

        prop_assert_eq!(tagged.len(), messages.len());
        for (t, m) in tagged.iter().zip(&messages) {
            prop_assert_eq!(t.message(), m);
            prop_assert_eq!(t.label(), Sentiment::Neutral);
        }
    }

    // ============================================
    // AGGREGATION PROPERTIES
    // ============================================

    /// Percentages of a non-empty bucket add up to 100
    #[test]
    fn percentages_sum_to_hundred(records in arb_records(40)) {
        for label in Sentiment::all() {
            if let Some(shares) = percentage(&SenderFilter::Overall, &records, label).ready() {
                let sum: f64 = shares.iter().map(|s| s.percent).sum();
                prop_assert!((sum - 100.0).abs() < 0.1, "sum was {}", sum);
                prop_assert!(shares.windows(2).all(|w| w[0].percent >= w[1].percent));
            }
        }
    }

    /// Heatmap, weekday tally and daily timeline count the same records
    #[test]
    fn activity_views_agree(records in arb_records(40)) {
        for label in Sentiment::all() {
            let bucket = records.iter().filter(|r| r.label() == label).count();
            let days = weekday_activity(&SenderFilter::Overall, &records, label);
            let map = activity_heatmap(&SenderFilter::Overall, &records, label);
            let daily = daily_timeline(&SenderFilter::Overall, &records, label);

            if bucket == 0 {
                prop_assert!(days.is_empty() && map.is_empty() && daily.is_empty());
            } else {
                prop_assert_eq!(days.ready().unwrap().total(), bucket);
                prop_assert_eq!(map.ready().unwrap().total(), bucket);
                let daily_total: usize = daily.ready().unwrap().iter().map(|d| d.count).sum();
                prop_assert_eq!(daily_total, bucket);
            }
        }
    }

    /// Top senders never exceed the limit and stay sorted
    #[test]
    fn top_senders_bounded(records in arb_records(40), limit in 1usize..5) {
        for label in Sentiment::all() {
            if let Some(top) = top_senders(&SenderFilter::Overall, &records, label, limit).ready() {
                prop_assert!(top.len() <= limit);
                let counts: Vec<_> = top.iter().map(|c| c.count).collect();
                prop_assert!(counts.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }

    /// Word counts never include stop words or the media placeholder
    #[test]
    fn words_respect_stop_list(records in arb_records(40)) {
        let stop = StopWords::from_text("the hello", StopWordMatch::Exact);
        let config = AnalysisConfig::default();
        for label in Sentiment::all() {
            if let Some(words) = most_common_words(&SenderFilter::Overall, &records, label, &stop, &config).ready() {
                prop_assert!(words.len() <= config.top_words);
                prop_assert_eq!(words.get("the"), 0);
                prop_assert_eq!(words.get("hello"), 0);
                prop_assert_eq!(words.get("<media"), 0);
            }
        }
    }

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// Every sender line becomes a record, notifications are dropped
    #[test]
    fn parser_counts_sender_lines(lines in prop::collection::vec(arb_line(), 0..30)) {
        let transcript: String = lines.iter().map(|(l, _)| format!("{l}\n")).collect();
        let expected = lines.iter().filter(|(_, system)| !system).count();

        let messages = WhatsAppParser::new().parse_str(&transcript).unwrap();
        prop_assert_eq!(messages.len(), expected);
        prop_assert!(messages.iter().all(|m| !m.is_notification()));
        prop_assert!(messages.iter().all(|m| SENDERS.contains(&m.sender())));
    }

    /// Keeping system lines yields one record per stamp
    #[test]
    fn parser_keeps_every_stamp(lines in prop::collection::vec(arb_line(), 0..30)) {
        let transcript: String = lines.iter().map(|(l, _)| format!("{l}\n")).collect();
        let parser = WhatsAppParser::with_config(WhatsAppConfig::new().with_skip_system_messages(false));

        let messages = parser.parse_str(&transcript).unwrap();
        prop_assert_eq!(messages.len(), lines.len());
        let notifications = messages.iter().filter(|m| m.is_notification()).count();
        prop_assert_eq!(notifications, lines.iter().filter(|(_, system)| *system).count());
    }

    /// Arbitrary text never panics the parser
    #[test]
    fn parser_never_panics(text in "\\PC{0,200}") {
        let _ = WhatsAppParser::new().parse_str(&text);
    }
}
