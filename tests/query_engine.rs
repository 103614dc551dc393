use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use logscope::parser::{make_log_id, parse_timestamp, HEADER};
use logscope::{LogEntry, LogFilter, LogStream, LogscopeError, QueryEngine};

const LEVELS: [&str; 4] = ["DEBUG", "INFO", "WARN", "ERROR"];
const COMPONENTS: [&str; 3] = ["UserAuth", "Payments", "Db"];

/// A line of a generated log file
#[derive(Debug, Clone)]
enum Row {
    Valid { second: u32, level: usize, component: usize },
    Blank,
    Header,
    ShortRow,
    BadTimestamp(usize),
}

const BAD_TIMESTAMPS: [&str; 4] = [
    "10:00 yesterday",
    "2025-05-07 10:00:60",
    "2025-05-0710:00:00",
    "+2025-05-07 10:00:00",
];

impl Row {
    fn render(&self) -> String {
        match self {
            Row::Valid {
                second,
                level,
                component,
            } => format!(
                "2025-05-07 10:{:02}:{:02}\t{}\t{}\tmessage\twith tab\n",
                second / 60,
                second % 60,
                LEVELS[*level],
                COMPONENTS[*component]
            ),
            Row::Blank => "   \n".to_string(),
            Row::Header => format!("{HEADER}\n"),
            Row::ShortRow => "2025-05-07 10:00:00\tINFO\tDb\n".to_string(),
            Row::BadTimestamp(which) => {
                format!("{}\tINFO\tDb\tx\n", BAD_TIMESTAMPS[which % BAD_TIMESTAMPS.len()])
            }
        }
    }
}

fn row() -> impl Strategy<Value = Row> {
    prop_oneof![
        6 => (0u32..3600, 0..LEVELS.len(), 0..COMPONENTS.len())
            .prop_map(|(second, level, component)| Row::Valid { second, level, component }),
        1 => Just(Row::Blank),
        1 => Just(Row::Header),
        1 => Just(Row::ShortRow),
        1 => any::<usize>().prop_map(Row::BadTimestamp),
    ]
}

fn log_dir() -> impl Strategy<Value = Vec<Vec<Row>>> {
    prop::collection::vec(prop::collection::vec(row(), 0..25), 0..4)
}

fn write_dir(files: &[Vec<Row>]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for (i, rows) in files.iter().enumerate() {
        let body: String = rows.iter().map(Row::render).collect();
        fs::write(dir.path().join(format!("part-{i}.log")), body).expect("write log file");
    }
    dir
}

fn filter_strategy() -> impl Strategy<Value = LogFilter> {
    (
        prop::option::of(0..LEVELS.len()),
        prop::option::of(0..COMPONENTS.len()),
        prop::option::of(0u32..3600),
        prop::option::of(0u32..3600),
    )
        .prop_map(|(level, component, start, end)| {
            let at = |s: u32| {
                parse_timestamp(&format!("2025-05-07 10:{:02}:{:02}", s / 60, s % 60)).unwrap()
            };
            LogFilter {
                level: level.map(|i| LEVELS[i].to_string()),
                component: component.map(|i| COMPONENTS[i].to_string()),
                start: start.map(at),
                end: end.map(at),
            }
        })
}

fn everything(engine: &QueryEngine) -> Vec<LogEntry> {
    engine
        .list_logs(&LogFilter::new(), engine.max_limit() as i64, 0)
        .unwrap()
        .items
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn stats_total_equals_full_listing(files in log_dir()) {
        let dir = write_dir(&files);
        let engine = QueryEngine::new(dir.path(), "*.log", 1000);

        let stats = engine.get_stats().unwrap();
        let page = engine.list_logs(&LogFilter::new(), 1000, 0).unwrap();
        prop_assert_eq!(stats.total_entries as usize, page.total_matched);
        prop_assert_eq!(page.items.len(), page.total_matched);

        let expected_invalid = files
            .iter()
            .flatten()
            .filter(|r| matches!(r, Row::ShortRow | Row::BadTimestamp(_)))
            .count();
        prop_assert_eq!(stats.invalid_lines as usize, expected_invalid);
    }

    #[test]
    fn total_matched_is_independent_of_window(
        files in log_dir(),
        filter in filter_strategy(),
        limit in 1i64..10,
        offset in 0i64..40,
    ) {
        let dir = write_dir(&files);
        let engine = QueryEngine::new(dir.path(), "*.log", 1000);

        let independent = LogStream::open(dir.path(), "*.log")
            .unwrap()
            .filter(|e| filter.matches(e))
            .count();
        let page = engine.list_logs(&filter, limit, offset).unwrap();
        prop_assert_eq!(page.total_matched, independent);
        prop_assert!(page.items.iter().all(|e| filter.matches(e)));
    }

    #[test]
    fn pages_tile_the_filtered_sequence(
        files in log_dir(),
        filter in filter_strategy(),
        limit in 1i64..7,
    ) {
        let dir = write_dir(&files);
        let engine = QueryEngine::new(dir.path(), "*.log", 1000);
        let expected: Vec<LogEntry> =
            everything(&engine).into_iter().filter(|e| filter.matches(e)).collect();

        let mut tiled = Vec::new();
        let mut offset = 0;
        loop {
            let page = engine.list_logs(&filter, limit, offset).unwrap();
            if page.items.is_empty() {
                prop_assert!(offset as usize >= page.total_matched);
                break;
            }
            prop_assert!(page.items.len() <= limit as usize);
            tiled.extend(page.items);
            offset += limit;
        }
        prop_assert_eq!(tiled, expected);
    }

    #[test]
    fn repeated_scans_are_identical(files in log_dir()) {
        let dir = write_dir(&files);
        let engine = QueryEngine::new(dir.path(), "*.log", 1000);
        prop_assert_eq!(everything(&engine), everything(&engine));
        prop_assert_eq!(engine.get_stats().unwrap(), engine.get_stats().unwrap());
    }
}

#[test]
fn every_listed_entry_can_be_looked_up() {
    let dir = write_dir(&[
        vec![
            Row::Header,
            Row::Valid { second: 0, level: 1, component: 0 },
            Row::Blank,
            Row::Valid { second: 15, level: 3, component: 1 },
        ],
        vec![Row::Valid { second: 20, level: 1, component: 2 }],
    ]);
    let engine = QueryEngine::new(dir.path(), "*.log", 1000);

    for entry in everything(&engine) {
        assert_eq!(engine.get_log_by_id(&entry.log_id).unwrap().as_ref(), Some(&entry));
    }
}

#[test]
fn ids_match_fingerprint_of_raw_line() {
    let dir = TempDir::new().unwrap();
    let line = "2025-05-07 10:00:00\tINFO\tUserAuth\tUser logged in";
    fs::write(dir.path().join("app.log"), format!("{HEADER}\n{line}\r\n")).unwrap();

    let engine = QueryEngine::new(dir.path(), "*.log", 1000);
    let entries = everything(&engine);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].log_id, make_log_id("app.log", 2, line));
}

#[test]
fn invalid_glob_is_reported() {
    let dir = TempDir::new().unwrap();
    let engine = QueryEngine::new(dir.path(), "[", 1000);
    assert!(matches!(
        engine.get_stats(),
        Err(LogscopeError::InvalidPattern { .. })
    ));
}

#[test]
fn pagination_is_validated_before_scanning() {
    let engine = QueryEngine::new("/does/not/exist", "[", 10);
    for (limit, offset) in [(0, 0), (5, -1), (11, 0)] {
        assert!(matches!(
            engine.list_logs(&LogFilter::new(), limit, offset),
            Err(LogscopeError::InvalidPagination { .. })
        ));
    }
}
