//! Edge case tests for chatvibe
//!
//! Boundary conditions of the transcript grammar and of the aggregations
//! that regular integration tests do not reach.

use chatvibe::prelude::*;

fn parse(chat: &str) -> Vec<Message> {
    WhatsAppParser::new().parse_str(chat).unwrap()
}

fn neutral(messages: Vec<Message>) -> Vec<TaggedMessage> {
    tag(messages, &|_: &str| Polarity::new(0.0, 1.0, 0.0)).unwrap()
}

// =========================================================================
// Empty and stamp-less input
// =========================================================================

#[test]
fn test_empty_input() {
    assert!(parse("").is_empty());
}

#[test]
fn test_input_without_stamps() {
    assert!(parse("just some text\nwith no stamps at all\n").is_empty());
}

#[test]
fn test_preamble_before_first_stamp_is_discarded() {
    let messages = parse("exported by someone\n12/5/23, 14:03 - Alice: hi\n");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body(), "hi");
}

#[test]
fn test_only_notifications() {
    let chat = "12/5/23, 14:03 - Bob added Carol\n12/5/23, 14:04 - Dave left\n";
    assert!(parse(chat).is_empty());

    let keep = WhatsAppParser::with_config(WhatsAppConfig::new().with_skip_system_messages(false));
    let messages = keep.parse_str(chat).unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().all(|m| m.sender() == "group_notification"));
    assert_eq!(messages[1].body(), "Dave left");
}

#[test]
fn test_aggregations_over_nothing() {
    let records: Vec<TaggedMessage> = Vec::new();
    let overall = SenderFilter::Overall;
    for label in Sentiment::all() {
        assert!(weekday_activity(&overall, &records, label).is_empty());
        assert!(month_activity(&overall, &records, label).is_empty());
        assert!(activity_heatmap(&overall, &records, label).is_empty());
        assert!(daily_timeline(&overall, &records, label).is_empty());
        assert!(percentage(&overall, &records, label).is_empty());
        assert!(top_senders(&overall, &records, label, 10).is_empty());
    }

    let report = Report::build(
        &records,
        &overall,
        &StopWords::empty(),
        &AnalysisConfig::default(),
    );
    assert_eq!(report.total_messages, 0);
    assert_eq!(report.participants, ["Overall"]);
}

// =========================================================================
// Stamp grammar
// =========================================================================

#[test]
fn test_four_digit_year() {
    let messages = parse("12/5/2023, 14:03 - Alice: hi\n");
    assert_eq!(messages[0].calendar().year, 2023);
}

#[test]
fn test_three_digit_year_is_rejected() {
    let err = WhatsAppParser::new()
        .parse_str("1/1/202, 10:00 - A: x\n")
        .unwrap_err();
    assert!(err.is_format());
}

#[test]
fn test_single_digit_hour() {
    let messages = parse("12/5/23, 9:03 - Alice: hi\n");
    assert_eq!(messages[0].calendar().hour, 9);
    assert_eq!(messages[0].calendar().period, "09-10");
}

#[test]
fn test_midnight_wrap_period() {
    let messages = parse("12/5/23, 23:59 - Alice: late\n13/5/23, 00:01 - Bob: early\n");
    assert_eq!(messages[0].calendar().period, "23-00");
    assert_eq!(messages[1].calendar().period, "00-01");
}

#[test]
fn test_date_order_is_file_global() {
    // the second stamp forces month-first for the whole file
    let messages = parse("3/4/23, 10:00 - Alice: a\n4/25/23, 10:00 - Bob: b\n");
    assert_eq!(messages[0].calendar().month, "March");
    assert_eq!(messages[1].calendar().day, 25);
}

#[test]
fn test_forced_day_first_rejects_us_stamps() {
    let parser = WhatsAppParser::with_config(
        WhatsAppConfig::new().with_date_order(DateOrder::DayFirst),
    );
    let err = parser.parse_str("4/25/23, 10:00 - Bob: b\n").unwrap_err();
    assert!(err.is_format());
}

#[test]
fn test_bracketed_ios_stamps_are_not_recognised() {
    assert!(parse("[12/05/23, 14:03:00] Alice: hi\n").is_empty());
}

// =========================================================================
// Sender / body split
// =========================================================================

#[test]
fn test_body_with_colons() {
    let messages = parse("12/5/23, 14:03 - Alice: meet at 10:30: ok?\n");
    assert_eq!(messages[0].sender(), "Alice");
    assert_eq!(messages[0].body(), "meet at 10:30: ok?");
}

#[test]
fn test_phone_number_sender() {
    let messages = parse("12/5/23, 14:03 - +91 98765 43210: hello\n");
    assert_eq!(messages[0].sender(), "+91 98765 43210");
}

#[test]
fn test_unicode_senders_and_bodies() {
    let chat = "12/5/23, 14:03 - Иван: Привет мир!\n12/5/23, 14:04 - 村上: こんにちは 🌍\n";
    let messages = parse(chat);
    assert_eq!(messages[0].sender(), "Иван");
    assert_eq!(messages[1].body(), "こんにちは 🌍");
}

#[test]
fn test_crlf_line_endings() {
    let messages = parse("12/5/23, 14:03 - Alice: hi\r\n12/5/23, 14:04 - Bob: yo\r\n");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].body(), "hi");
    assert_eq!(messages[1].body(), "yo");
}

#[test]
fn test_empty_body_after_colon() {
    let messages = parse("12/5/23, 14:03 - Alice: \n12/5/23, 14:04 - Bob: yo\n");
    assert_eq!(messages[0].sender(), "Alice");
    assert_eq!(messages[0].body(), "");
}

#[test]
fn test_line_break_right_after_colon() {
    for chat in [
        "12/5/23, 14:03 - Alice:\n12/5/23, 14:04 - Bob: yo\n",
        "12/5/23, 14:03 - Alice:\r\n12/5/23, 14:04 - Bob: yo\r\n",
    ] {
        let messages = parse(chat);
        let senders: Vec<_> = messages.iter().map(|m| m.sender()).collect();
        assert_eq!(senders, ["Alice", "Bob"], "{chat:?}");
        assert_eq!(messages[0].body(), "");
        assert_eq!(messages[1].body(), "yo");
    }
}

#[test]
fn test_line_break_after_colon_keeps_following_lines() {
    let messages = parse("12/5/23, 14:03 - Alice:\nsee below\n");
    assert_eq!(messages[0].sender(), "Alice");
    assert_eq!(messages[0].body(), "see below");
}

#[test]
fn test_stamp_inside_a_line_starts_a_new_message() {
    let messages = parse("12/5/23, 14:03 - Alice: see 13/5/23, 10:00 - Bob: quoted\n");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].body(), "see ");
    assert_eq!(messages[1].sender(), "Bob");
}

// =========================================================================
// Filters
// =========================================================================

#[test]
fn test_sender_named_overall_is_the_overall_filter() {
    let records = neutral(parse("12/5/23, 14:03 - Alice: hi\n12/5/23, 14:04 - Bob: yo\n"));
    let filter = SenderFilter::from("Overall");
    assert!(filter.is_overall());
    assert_eq!(
        top_senders(&filter, &records, Sentiment::Neutral, 10)
            .ready()
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn test_unknown_sender_yields_empty() {
    let records = neutral(parse("12/5/23, 14:03 - Alice: hi\n"));
    let ghost = SenderFilter::from("Ghost");
    assert!(weekday_activity(&ghost, &records, Sentiment::Neutral).is_empty());
    assert!(wordcloud_text(
        &ghost,
        &records,
        Sentiment::Neutral,
        &StopWords::empty(),
        &AnalysisConfig::default()
    )
    .is_empty());
}

#[test]
fn test_words_are_lowercased_and_whitespace_split() {
    let records = neutral(parse("12/5/23, 14:03 - Alice: Hello\tHELLO\nhello  world\n"));
    let words = most_common_words(
        &SenderFilter::Overall,
        &records,
        Sentiment::Neutral,
        &StopWords::empty(),
        &AnalysisConfig::default(),
    )
    .ready()
    .unwrap();
    assert_eq!(words.get("hello"), 3);
    assert_eq!(words.get("world"), 1);
}

#[test]
fn test_custom_media_placeholder() {
    let records = neutral(parse("12/5/23, 14:03 - Alice: image omitted\n"));
    let config = AnalysisConfig::default().with_media_placeholder("image omitted");
    assert!(most_common_words(
        &SenderFilter::Overall,
        &records,
        Sentiment::Neutral,
        &StopWords::empty(),
        &config
    )
    .is_empty());
}
