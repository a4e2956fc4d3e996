use std::collections::HashMap;

use course_planner::{Course, OrderedCourseStore, VerifiedCourseStore};
use rand::{seq::SliceRandom, thread_rng, Rng};

fn course(id: &str, title: &str, prereqs: &[&str]) -> Course {
    Course::new(id, title, prereqs.iter().copied())
}

#[test]
fn course_store_works() {
    let mut store = VerifiedCourseStore::new();
    store.insert(course("CS101", "Intro to CS", &[]));
    store.insert(course("CS201", "Data Structures", &["CS101"]));
    store.insert(course("CS050", "Pre-CS", &[]));

    let listed: Vec<String> = store.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        listed,
        vec!["CS050, Pre-CS", "CS101, Intro to CS", "CS201, Data Structures"]
    );

    assert_eq!(
        store.find("CS201"),
        Some(&course("CS201", "Data Structures", &["CS101"]))
    );
    assert!(store.find("CS999").is_none());
}

#[test]
fn duplicate_identifier_keeps_both_and_finds_first() {
    let mut store = VerifiedCourseStore::new();
    store.insert(course("CSCI200", "Data Structures", &["CSCI101"]));
    store.insert(course("CSCI100", "Introduction to Computer Science", &[]));
    store.insert(course("CSCI200", "Data Structures (revised)", &[]));

    assert_eq!(store.len(), 3);
    let titles: Vec<&str> = store
        .iter()
        .filter(|c| c.identifier == "CSCI200")
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Data Structures", "Data Structures (revised)"]);

    let found = store.find("CSCI200").unwrap();
    assert_eq!(found.title, "Data Structures");
    assert_eq!(found.prerequisites, vec!["CSCI101"]);
}

#[test]
fn random_op_test() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = VerifiedCourseStore::new();
    let mut rng = thread_rng();
    let n = 2000;

    // narrow key range so duplicates actually happen
    let mut ids: Vec<String> = (0..n)
        .map(|_| format!("CSCI{:03}", rng.gen_range(0..600)))
        .collect();
    ids.shuffle(&mut rng);

    let mut first_seen: HashMap<String, Course> = HashMap::new();
    for (i, id) in ids.iter().enumerate() {
        let c = course(id, &format!("Section {}", i), &["MATH201"]);
        first_seen.entry(id.clone()).or_insert_with(|| c.clone());
        store.insert(c);
    }

    assert_eq!(store.len(), n);
    assert_eq!(store.iter().count(), n);

    let keys: Vec<&str> = store.iter().map(|c| c.identifier.as_str()).collect();
    assert!(keys.windows(2).all(|w| w[0] <= w[1]));

    for (id, expected) in first_seen.iter() {
        assert_eq!(store.find(id), Some(expected));
    }

    for _ in 0..200 {
        let missing = format!("MATH{:03}", rng.gen_range(0..1000));
        assert!(store.find(&missing).is_none());
    }

    let first: Vec<&Course> = store.iter().collect();
    let second: Vec<&Course> = store.iter().collect();
    assert_eq!(first, second);
}

#[test]
fn sorted_input_degenerates_without_overflowing() {
    let n = 10_000;
    let mut store = OrderedCourseStore::new();
    store.extend((0..n).map(|i| course(&format!("C{:06}", i), "Seminar", &[])));

    assert_eq!(store.len(), n);
    assert_eq!(store.height(), n);
    assert!(store.stats().is_degenerate());

    assert_eq!(
        store.find(&format!("C{:06}", n - 1)).map(|c| c.title.as_str()),
        Some("Seminar")
    );
    assert_eq!(store.iter().count(), n);
    assert_eq!(
        store.iter().last().map(|c| c.identifier.clone()),
        Some(format!("C{:06}", n - 1))
    );
    store.verify();

    drop(store);
}
