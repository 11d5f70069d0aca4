use pinyinsort::prelude::*;
use rand::Rng;
use std::cmp::Ordering;
use std::time::Instant;

#[rustfmt::skip]
const LETTERS: [&str; 24] = [
    "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j",
    "q", "x", "zh", "ch", "sh", "r", "z", "c", "s", "y", "w", "",
];
#[rustfmt::skip]
const FINALS: [&str; 20] = [
    "a", "ā", "á", "ǎ", "à", "ou", "ǒu", "ü", "ǚ", "ǜ",
    "ian", "iàn", "uo", "uó", "ang", "àng", "ei", "èi", "ong", "óng",
];
const JOINERS: [&str; 5] = ["", "", "'", "-", " "];

fn random_word(rng: &mut impl Rng) -> String {
    let syllables = rng.random_range(1..4);
    let mut word = String::new();
    for i in 0..syllables {
        if i > 0 {
            word.push_str(JOINERS[rng.random_range(0..JOINERS.len())]);
        }
        word.push_str(LETTERS[rng.random_range(0..LETTERS.len())]);
        word.push_str(FINALS[rng.random_range(0..FINALS.len())]);
    }
    if rng.random_bool(0.1) {
        word = word.to_uppercase();
    } else if rng.random_bool(0.2) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            word = first.to_uppercase().chain(chars).collect();
        }
    }
    word
}

#[test]
fn test_sort_100k() {
    let count = 100_000;
    println!("Generating {} random words...", count);

    let mut rng = rand::rng();
    let input: Vec<String> = (0..count).map(|_| random_word(&mut rng)).collect();

    println!("Sorting {} words...", count);
    let start = Instant::now();
    let sorted = sort_strings(&input);
    let duration = start.elapsed();
    println!("Sorted 100k words in {:?}", duration);

    assert_eq!(sorted.len(), count);
    for i in 0..count - 1 {
        assert_ne!(
            compare(&sorted[i], &sorted[i + 1]),
            Ordering::Greater,
            "Sort failed at index {}",
            i
        );
    }
}

#[test]
#[ignore]
fn test_sort_1m_records() {
    // Roughly 1M * (JSON object + two short strings); expect a few hundred MB.
    let count = 1_000_000;
    println!("Generating {} records...", count);

    let mut rng = rand::rng();
    let input: Vec<serde_json::Value> = (0..count)
        .map(|i| serde_json::json!({ "pinyin": random_word(&mut rng), "id": i }))
        .collect();

    println!("Sorting {} records...", count);
    let start = Instant::now();
    let indices =
        sort_pinyin_indices(&input, &KeyAccessor::field("pinyin"), SortOptions::default())
            .unwrap();
    println!("Sorted 1M records in {:?}", start.elapsed());

    assert_eq!(indices.len(), count);
    for i in (0..count - 1).step_by(1_000) {
        let a = input[indices[i]]["pinyin"].as_str().unwrap();
        let b = input[indices[i + 1]]["pinyin"].as_str().unwrap();
        assert_ne!(compare(a, b), Ordering::Greater, "Sort failed at index {}", i);
    }
}
