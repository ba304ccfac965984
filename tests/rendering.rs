//! Rendering tests for the built-in sample and the prompts built around it.

use serde_json::json;
use toon_bench::codec::{render, render_with, Delimiter, EncodeOptions, Format, ToonEncoder};
use toon_bench::prompt::render_prompt;
use toon_bench::tokenizer::{Encoding, TokenCounter};
use toon_bench::Dataset;

const SAMPLE_TOON: &str = "\
buyer_profile:
  budget_min: 600000
  budget_max: 900000
  target_areas[2]: Coral Gables,Coconut Grove
  must_haves[4]: 2+ bedrooms,walkable,low hoa,safe neighborhood
listings[4]{mls_id,price,beds,baths,sqft,neighborhood,hoa_monthly,walk_score,safety_score}:
  A11861233,439900,2,2,1180,Aventura,780,82,7.8
  A11543210,795000,3,3,1650,Coral Gables,350,89,9.1
  A11498765,720000,2,2,1420,Coconut Grove,420,92,8.7
  A11800001,910000,3,2.5,1750,Coral Gables,510,86,9.3";

#[test]
fn test_sample_renders_as_toon() {
    let data = Dataset::sample().to_value().unwrap();
    assert_eq!(render(&data, Format::Toon).unwrap(), SAMPLE_TOON);
}

#[test]
fn test_sample_renders_as_pretty_json() {
    let data = Dataset::sample().to_value().unwrap();
    let text = render(&data, Format::Json).unwrap();

    assert!(text.starts_with("{\n  \"buyer_profile\": {\n    \"budget_min\": 600000,"));
    assert!(text.contains("\"baths\": 2.5,"));
    assert!(text.contains("\"baths\": 2,"));

    // Round-trips to the same document
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, data);
}

#[test]
fn test_pipe_delimited_table() {
    let data = Dataset::sample().to_value().unwrap();
    let encoder = ToonEncoder::with_options(EncodeOptions {
        delimiter: Delimiter::Pipe,
        ..EncodeOptions::default()
    });
    let text = render_with(&data, Format::Toon, &encoder).unwrap();

    assert!(text.contains("target_areas[2|]: Coral Gables|Coconut Grove"));
    assert!(text.contains("listings[4|]{mls_id|price|beds|baths|"));
    assert!(text.contains("  A11800001|910000|3|2.5|1750|Coral Gables|510|86|9.3"));
}

#[test]
fn test_prompts_share_task_and_differ_in_data() {
    let data = Dataset::sample().to_value().unwrap();
    let json_prompt = render_prompt(&data, Format::Json).unwrap();
    let toon_prompt = render_prompt(&data, Format::Toon).unwrap();

    for prompt in [&json_prompt, &toon_prompt] {
        assert!(prompt.starts_with("You are an AI assistant helping a real estate team"));
        assert!(prompt.contains("1. Identify the top 2 listings for this buyer."));
        assert!(prompt.contains("Respond in 3-5 bullet points, concise and professional."));
    }

    assert!(json_prompt.contains("in JSON format."));
    let json_block = render(&data, Format::Json).unwrap();
    assert!(json_prompt.ends_with(&format!("JSON DATA:\n{json_block}")));
    assert!(!json_prompt.contains("TOON basics:"));
    assert!(toon_prompt.contains("in TOON (Token-Oriented Object Notation) format."));
    assert!(toon_prompt.contains("TOON basics:"));
    assert!(toon_prompt.ends_with(&format!("TOON DATA:\n{SAMPLE_TOON}")));
}

#[test]
fn test_toon_prompt_is_cheaper() {
    let data = Dataset::sample().to_value().unwrap();
    let counter = TokenCounter::new(Encoding::O200kBase);

    let json_tokens = counter.count(&render_prompt(&data, Format::Json).unwrap());
    let toon_tokens = counter.count(&render_prompt(&data, Format::Toon).unwrap());
    assert!(toon_tokens < json_tokens);
}

#[test]
fn test_arbitrary_document() {
    let data = json!({
        "name": "survey",
        "tags": [],
        "rows": [
            {"q": "a, b", "score": 1},
            {"q": "true", "score": 2}
        ]
    });

    assert_eq!(
        render(&data, Format::Toon).unwrap(),
        "name: survey\ntags: []\nrows[2]{q,score}:\n  \"a, b\",1\n  \"true\",2"
    );
}

#[test]
fn test_number_words_are_not_quoted() {
    let data = json!({"a": "NaN", "b": "inf", "c": "infinity", "d": "1e5"});

    assert_eq!(
        render(&data, Format::Toon).unwrap(),
        "a: NaN\nb: inf\nc: infinity\nd: \"1e5\""
    );
}
