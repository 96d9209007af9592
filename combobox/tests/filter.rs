use combobox::Item;
use combobox::filter::{is_exact_match, label_matches, normalize, substring_filter};

fn items(labels: &[&str]) -> Vec<Item<usize>> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| Item::new(*label, i))
        .collect()
}

#[test]
fn test_empty_query_returns_all() {
    let items = items(&["apple", "banana"]);
    let matches = substring_filter(Some(""), &items);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].value, 0);
    assert_eq!(matches[1].value, 1);
    assert_eq!(substring_filter(None, &items).len(), 2);
}

#[test]
fn test_substring_matching_keeps_order() {
    let items = items(&["grape", "banana", "apricot", "pineapple"]);
    let values: Vec<usize> = substring_filter(Some("ap"), &items)
        .iter()
        .map(|i| i.value)
        .collect();
    assert_eq!(values, vec![0, 2, 3]);
}

#[test]
fn test_not_fuzzy() {
    let items = items(&["apple", "banana"]);
    assert!(substring_filter(Some("ape"), &items).is_empty());
}

#[test]
fn test_no_matches() {
    let items = items(&["apple", "banana"]);
    assert!(substring_filter(Some("xyz"), &items).is_empty());
}

#[test]
fn test_case_insensitive() {
    let items = items(&["Apple", "BANANA"]);
    let matches = substring_filter(Some("apple"), &items);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].value, 0);
}

#[test]
fn test_whitespace_insensitive_both_sides() {
    assert!(label_matches("Bundes gerichtshof", "desgerichts"));
    assert!(label_matches("Bundesgerichtshof", "bundes gericht"));
    assert!(!label_matches("Bundesgerichtshof", "verfassung"));
}

#[test]
fn test_exact_match() {
    assert!(is_exact_match("testItem1", "testitem1"));
    assert!(is_exact_match("testItem1", "testItem1   "));
    assert!(is_exact_match("Amts gericht", "amtsgericht"));
    assert!(!is_exact_match("testItem1", "testItem"));
}

#[test]
fn test_normalize_unicode_case() {
    assert_eq!(normalize("ÖFFNEN Schließen"), "öffnenschließen");
}
