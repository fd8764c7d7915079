//! Integration tests for Prompt Search

use std::fs;
use std::sync::Arc;
use std::thread;

use serde_json::{json, Value};

use prompt_search::library::PromptLibrary;
use prompt_search::search::{SynonymCatalog, RELEVANCE_THRESHOLD};
use prompt_search::tools::{ExplainRelevanceTool, SearchPromptsTool, SuggestQueriesTool};
use prompt_search::types::{Category, Item, QueryResult};
use prompt_search::{SimilarityScorer, Tool};

const SAMPLE_LIBRARY: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/prompts.jsonl");

fn sample_library() -> PromptLibrary {
    PromptLibrary::open(SAMPLE_LIBRARY, Arc::new(SynonymCatalog::builtin())).unwrap()
}

fn names(result: &QueryResult) -> Vec<&str> {
    result.categories.iter().map(|c| c.name.as_str()).collect()
}

fn titles(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.title.as_str()).collect()
}

/// Text payload of an MCP content response, parsed back into JSON
fn tool_payload(response: Value) -> Value {
    let text = response["content"][0]["text"].as_str().unwrap().to_string();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_sample_library_loads() {
    let library = sample_library();
    assert_eq!(library.len(), 8);
    assert!(library.category("Health & Wellness").is_some());
}

#[test]
fn test_gym_finds_fitness_by_synonym() {
    let result = sample_library().search("gym", None);

    assert_eq!(names(&result), vec!["Fitness"]);
    assert_eq!(result.categories[0].score, 0.8);
    // no item mentions "gym": the preview shows the category's items
    assert_eq!(
        titles(&result.items),
        vec!["Morning Routine", "Beginner Strength Plan", "Running Progression"]
    );
}

#[test]
fn test_literal_body_match_without_category_relevance() {
    let result = sample_library().search("stretching", None);

    assert_eq!(names(&result), vec!["Fitness"]);
    assert_eq!(result.categories[0].score, 0.0);
    assert_eq!(titles(&result.categories[0].items), vec!["Morning Routine"]);
}

#[test]
fn test_selected_category_without_match() {
    let result = sample_library().search("yoga", Some("Fitness"));
    assert_eq!(result, QueryResult::empty());
}

#[test]
fn test_selected_category_with_match() {
    let result = sample_library().search("plan", Some("Fitness"));
    assert_eq!(names(&result), vec!["Fitness"]);
    assert_eq!(result.categories[0].score, 1.0);
    assert_eq!(
        titles(&result.items),
        vec!["Beginner Strength Plan", "Running Progression"]
    );
}

#[test]
fn test_empty_collection() {
    let library = PromptLibrary::from_categories(vec![], Arc::new(SynonymCatalog::builtin()));
    assert_eq!(library.search("gym", None), QueryResult::empty());
}

#[test]
fn test_blank_queries() {
    let library = sample_library();
    for q in ["", " ", "\t"] {
        assert_eq!(library.search(q, None), QueryResult::empty());
        assert_eq!(library.search(q, Some("Fitness")), QueryResult::empty());
    }
}

#[test]
fn test_direct_match_outranks_synonym() {
    let result = sample_library().search("health", None);

    assert_eq!(names(&result), vec!["Health & Wellness", "Nutrition"]);
    assert_eq!(result.categories[0].score, 1.0);
    assert_eq!(result.categories[1].score, 0.8);
}

#[test]
fn test_ties_keep_library_order() {
    let result = sample_library().search("plan", None);

    assert_eq!(names(&result), vec!["Nutrition", "Social Media", "Fitness"]);
    assert_eq!(
        titles(&result.items),
        vec![
            "Weekly Meal Plan",
            "Content Calendar",
            "Beginner Strength Plan",
            "Running Progression"
        ]
    );
}

#[test]
fn test_word_overlap_tier() {
    // "email marketing" shares the word "email"
    let result = sample_library().search("cold email", None);
    assert_eq!(names(&result), vec!["Marketing"]);
    assert_eq!(result.categories[0].score, 0.6);
}

#[test]
fn test_ranking_invariants_hold() {
    let library = sample_library();
    let scorer = SimilarityScorer::new(library.catalog().clone());
    let categories = library.categories();

    for q in ["gym", "plan", "health", "code", "resume", "write", "x", "morning"] {
        let result = library.search(q, None);

        for pair in result.categories.windows(2) {
            assert!(pair[0].score >= pair[1].score, "{q}: not sorted");
        }

        for ranked in &result.categories {
            let category = categories.iter().find(|c| c.name == ranked.name).unwrap();
            let score = scorer.score(q, &category.name);
            let q_lower = q.to_lowercase();
            let has_direct = category.items.iter().any(|i| {
                i.title.to_lowercase().contains(&q_lower) || i.body.to_lowercase().contains(&q_lower)
            });
            assert!(has_direct || score > RELEVANCE_THRESHOLD, "{q}: {} included", ranked.name);
        }

        let flattened: Vec<Item> = result
            .categories
            .iter()
            .flat_map(|c| c.items.clone())
            .collect();
        assert_eq!(result.items, flattened);
    }
}

#[test]
fn test_every_name_scores_itself() {
    let library = sample_library();
    let scorer = SimilarityScorer::new(library.catalog().clone());
    for category in library.categories() {
        assert_eq!(scorer.score(&category.name, &category.name), 1.0);
    }
}

#[test]
fn test_search_is_repeatable() {
    let library = sample_library();
    assert_eq!(library.search("plan", None), library.search("plan", None));
}

#[test]
fn test_reload_picks_up_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prompts.jsonl");
    fs::write(&path, "{\"name\":\"Fitness\",\"items\":[{\"title\":\"A\",\"body\":\"lift\"}]}\n").unwrap();

    let library = PromptLibrary::open(&path, Arc::new(SynonymCatalog::builtin())).unwrap();
    let before = library.search("gym", None);
    assert_eq!(before.items.len(), 1);

    fs::write(
        &path,
        "{\"name\":\"Fitness\"}\n{\"name\":\"Travel\",\"items\":[{\"title\":\"Gym bag list\"}]}\n",
    )
    .unwrap();
    assert_eq!(library.reload().unwrap(), 2);

    // Fitness stays relevant by synonym even with nothing left to preview
    let after = library.search("gym", None);
    assert_eq!(names(&after), vec!["Fitness", "Travel"]);
    assert!(after.categories[0].items.is_empty());
    assert_eq!(titles(&after.items), vec!["Gym bag list"]);
    // results handed out earlier are untouched
    assert_eq!(before.items[0].title, "A");
}

#[test]
fn test_concurrent_searches() {
    let library = Arc::new(sample_library());
    let expected = library.search("gym", None);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let library = library.clone();
            thread::spawn(move || library.search("gym", None))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_suggestions() {
    let library = sample_library();

    assert_eq!(library.suggest("gy"), vec!["strategy (Business)", "gym (Fitness)"]);
    assert_eq!(library.suggest("blog"), vec!["blog (Writing)", "blog post"]);
    assert!(library.suggest("").is_empty());

    let plan = library.suggest("plan");
    assert_eq!(plan.len(), 5);
    assert_eq!(plan[0], "business plan (Business)");
}

#[test]
fn test_search_tool() {
    let tool = SearchPromptsTool::new(Arc::new(sample_library()));
    assert_eq!(tool.name(), "search_prompts");

    let payload = tool_payload(tool.execute(json!({"query": "resume"})).unwrap());
    assert_eq!(payload["categories"][0]["name"], "Career");
    assert_eq!(payload["categories"][0]["score"], 0.8);
    assert_eq!(payload["items"][0]["title"], "Resume Bullet Rewrite");

    let payload = tool_payload(
        tool.execute(json!({"query": "yoga", "category": "Fitness"}))
            .unwrap(),
    );
    assert_eq!(payload, json!({"categories": [], "items": []}));
}

#[test]
fn test_suggest_tool() {
    let tool = SuggestQueriesTool::new(Arc::new(sample_library()));
    let payload = tool_payload(tool.execute(json!({"query": "work"})).unwrap());
    assert_eq!(
        payload,
        json!(["homework (Education)", "workout (Fitness)", "workout"])
    );
}

#[test]
fn test_explain_tool() {
    let tool = ExplainRelevanceTool::new(Arc::new(PromptLibrary::from_categories(
        vec![Category::new("Fitness"), Category::new("Travel")],
        Arc::new(SynonymCatalog::builtin()),
    )));

    let payload = tool_payload(tool.execute(json!({"query": "gym"})).unwrap());
    assert_eq!(payload[0]["tier"], "synonym_containment");
    assert_eq!(payload[0]["included"], true);
    assert_eq!(payload[1]["tier"], "no_match");
    assert_eq!(payload[1]["included"], false);

    assert!(tool.execute(json!({})).is_err());
}
