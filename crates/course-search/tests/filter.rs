use course_search::{
    filter, AndMode, Course, CourseCollection, EvaluationOptions, PublishedCourse, PublishedItem,
    QueryParser, SearchConfig, SearchQueryMatcher,
};

fn course(name: &str, description: Option<&str>, concepts: &[&str]) -> Course {
    Course {
        name: name.to_string(),
        description: description.map(str::to_string),
        concepts: concepts.iter().map(|value| value.to_string()).collect(),
    }
}

fn published(id: &str, name: &str) -> PublishedCourse {
    PublishedCourse {
        id: id.to_string(),
        name: name.to_string(),
        ..PublishedCourse::default()
    }
}

fn names<'r>(courses: Vec<&'r Course>) -> Vec<&'r str> {
    courses.into_iter().map(|course| course.name.as_str()).collect()
}

fn item_ids<'r>(items: Vec<&'r PublishedItem>) -> Vec<&'r str> {
    items.into_iter().map(PublishedItem::id).collect()
}

fn catalog() -> Vec<Course> {
    vec![
        course("Land Navigation", Some("Map and compass basics"), &["Terrain"]),
        course("First Aid", Some("Treat casualties under fire"), &["Triage"]),
        course("Squad Tactics", None, &["Movement", "Map Reading"]),
        course("ABCDE Assessment", None, &[]),
    ]
}

#[test]
fn empty_query_is_identity() {
    let courses = catalog();
    assert_eq!(
        names(filter("", &courses)),
        vec![
            "Land Navigation",
            "First Aid",
            "Squad Tactics",
            "ABCDE Assessment"
        ]
    );
    assert_eq!(names(filter("   ", &courses)).len(), courses.len());
}

#[test]
fn result_is_a_deduplicated_subsequence() {
    let courses = catalog();
    for query in [
        "map",
        "map map",
        "map OR terrain",
        "-aid",
        "x AND y",
        "\"Map\" -squad fire",
        "a AND b OR c",
    ] {
        let result = filter(query, &courses);
        for (position, found) in result.iter().enumerate() {
            assert!(
                courses.iter().any(|course| std::ptr::eq(course, *found)),
                "query {query} produced a foreign record"
            );
            assert!(
                !result[position + 1..]
                    .iter()
                    .any(|other| std::ptr::eq(*other, *found)),
                "query {query} produced a duplicate"
            );
        }
    }
}

#[test]
fn single_term_matches_case_insensitively() {
    let courses = vec![
        course("Orientation", None, &[]),
        course("Basic ABC drills", None, &[]),
        course("Marksmanship", None, &[]),
    ];
    assert_eq!(names(filter("abc", &courses)), vec!["Basic ABC drills"]);
}

#[test]
fn quoted_phrase_matches_exact_case() {
    let courses = catalog();
    assert_eq!(names(filter("\"ABC\"", &courses)), vec!["ABCDE Assessment"]);
    assert_eq!(names(filter("abc", &courses)), vec!["ABCDE Assessment"]);
    assert!(filter("\"abc\"", &courses).is_empty());
}

#[test]
fn matches_description_and_concepts() {
    let courses = catalog();
    assert_eq!(names(filter("casualties", &courses)), vec!["First Aid"]);
    assert_eq!(names(filter("triage", &courses)), vec!["First Aid"]);
    assert_eq!(
        names(filter("map", &courses)),
        vec!["Land Navigation", "Squad Tactics"]
    );
}

#[test]
fn negation_after_matches_subtracts() {
    let courses = vec![
        course("x one", Some("y"), &[]),
        course("x two", None, &[]),
    ];
    assert_eq!(names(filter("x -y", &courses)), vec!["x two"]);
}

#[test]
fn negation_alone_starts_from_everything() {
    let courses = vec![course("y one", None, &[]), course("two", None, &[])];
    assert_eq!(names(filter("-y", &courses)), vec!["two"]);
}

#[test]
fn and_versus_or_chains() {
    let courses = vec![
        course("r1 a", None, &[]),
        course("r2 b", None, &[]),
        course("r3 a b", None, &[]),
    ];
    assert_eq!(names(filter("a AND b", &courses)), vec!["r3 a b"]);
    assert_eq!(
        names(filter("a OR b", &courses)),
        vec!["r1 a", "r2 b", "r3 a b"]
    );
}

#[test]
fn heterogeneous_chain_contributes_nothing() {
    let courses = vec![
        course("a", None, &[]),
        course("b", None, &[]),
        course("c", None, &[]),
    ];
    assert!(filter("a AND b OR c", &courses).is_empty());
    assert_eq!(names(filter("c a AND b OR c", &courses)), vec!["c"]);
}

#[test]
fn collection_matches_through_child() {
    let collection = CourseCollection {
        id: "col-1".to_string(),
        name: "Spring Cohort".to_string(),
        description: None,
        courses: vec![published("pc-1", "Convoy Operations")],
    };
    let collections = vec![collection];
    assert_eq!(filter("convoy", &collections).len(), 1);
    assert!(filter("airborne", &collections).is_empty());
}

#[test]
fn published_items_match_ids_and_source_courses() {
    let mut pilot = published("pc-1", "Pilot Study");
    pilot.source_course_id = Some("course-42".to_string());
    let mut child = published("pc-3", "Follow Up");
    child.course_folder = Some("Public/Followup Study".to_string());
    let items = vec![
        PublishedItem::from(pilot),
        PublishedItem::from(published("pc-2", "Field Test")),
        PublishedItem::from(CourseCollection {
            id: "col-7".to_string(),
            name: "Bundle".to_string(),
            description: Some("Grouped experiments".to_string()),
            courses: vec![child],
        }),
    ];

    assert_eq!(item_ids(filter("\"course-42\"", &items)), vec!["pc-1"]);
    assert_eq!(item_ids(filter("\"pc-2\"", &items)), vec!["pc-2"]);
    assert_eq!(item_ids(filter("\"col-7\"", &items)), vec!["col-7"]);
    assert_eq!(item_ids(filter("followup", &items)), vec!["col-7"]);
    assert_eq!(item_ids(filter("study", &items)), vec!["pc-1", "col-7"]);
    assert_eq!(item_ids(filter("-study", &items)), vec!["pc-2"]);
}

#[test]
fn configured_union_mode_relaxes_and() {
    let courses = vec![course("a", None, &[]), course("b", None, &[])];
    let config = SearchConfig {
        and_mode: AndMode::Union,
        ..SearchConfig::default()
    };
    let matcher = SearchQueryMatcher::compile("a AND b").with_options(config.options());
    assert_eq!(names(matcher.filter(&courses)), vec!["a", "b"]);

    let strict = SearchQueryMatcher::compile("a AND b").with_options(EvaluationOptions::default());
    assert!(strict.filter(&courses).is_empty());
}

#[test]
fn strict_parse_reports_what_tokenize_drops() {
    assert!(QueryParser::parse_strict("map OR compass -draft").is_ok());
    assert!(QueryParser::parse_strict("map OR compass AND draft").is_err());
    assert_eq!(
        QueryParser::tokenize("map OR compass AND draft"),
        Vec::new()
    );
}
